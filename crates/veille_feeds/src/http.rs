use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use veille_core::{Error, Feed, FeedFetcher, Result};

use crate::logging::Logger;
use crate::parse::parse_feed;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const USER_AGENT: &str = concat!("veille/", env!("CARGO_PKG_VERSION"));

/// Fetches feeds over HTTP(S) and parses them as RSS or Atom.
pub struct HttpFeedFetcher {
    client: Client,
    logger: Logger,
}

impl HttpFeedFetcher {
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            logger: Logger::new().with_prefix("[feeds]".to_string()),
        }
    }
}

#[async_trait]
impl FeedFetcher for HttpFeedFetcher {
    async fn fetch(&self, url: &str) -> Result<Feed> {
        let logger = self.logger.clone().with_prefix(format!("[{}]", url));
        logger.debug("fetching");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            logger.warn(&format!("server answered {}", status));
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let feed = parse_feed(url, &bytes)?;
        logger.info(&format!("📥 {} entries", feed.entries.len()));

        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_client() {
        assert!(HttpFeedFetcher::new().is_ok());
        assert!(HttpFeedFetcher::with_timeout(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_is_http_error() {
        let fetcher = HttpFeedFetcher::with_timeout(Duration::from_secs(2)).unwrap();
        let result = fetcher.fetch("http://127.0.0.1:1/rss").await;
        assert!(matches!(result, Err(Error::Http(_))));
    }
}
