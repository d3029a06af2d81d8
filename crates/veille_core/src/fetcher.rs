use async_trait::async_trait;

use crate::types::Feed;
use crate::Result;

#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetches and parses the feed published at `url`
    async fn fetch(&self, url: &str) -> Result<Feed>;
}
