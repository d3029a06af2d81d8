use url::Url;

use crate::{Error, Result};

pub const DEFAULT_FEEDS: &[&str] = &[
    "https://www.zdnet.fr/feeds/rss/actualites/",
    "https://www.lemondeinformatique.fr/flux-rss/thematique/toutes-les-actualites/rss.xml",
    "https://techcrunch.com/feed/",
];

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "cybersécurité",
    "ransomware",
    "zero trust",
    "cloud",
    "aws",
    "azure",
    "gcp",
    "ia",
    "intelligence artificielle",
    "llm",
    "openai",
    "mistral",
    "devops",
    "kubernetes",
    "docker",
    "linux",
    "windows",
    "android",
];

/// Feeds to poll and the watchlist their entries are filtered against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    pub feeds: Vec<String>,
    pub keywords: Vec<String>,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS.iter().map(|s| s.to_string()).collect(),
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl WatchConfig {
    pub fn new(feeds: Vec<String>, keywords: Vec<String>) -> Self {
        Self { feeds, keywords }
    }

    /// Replaces feeds and/or keywords with the given overrides; empty overrides keep the current list.
    pub fn with_overrides(mut self, feeds: Vec<String>, keywords: Vec<String>) -> Self {
        if !feeds.is_empty() {
            self.feeds = feeds;
        }
        if !keywords.is_empty() {
            self.keywords = keywords;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.keywords.is_empty() {
            return Err(Error::Config("keyword list is empty".to_string()));
        }
        if self.keywords.iter().any(|k| k.is_empty()) {
            return Err(Error::Config("keywords must not be empty strings".to_string()));
        }
        for feed in &self.feeds {
            Url::parse(feed).map_err(|e| Error::InvalidUrl(format!("{}: {}", feed, e)))?;
        }
        Ok(())
    }
}
