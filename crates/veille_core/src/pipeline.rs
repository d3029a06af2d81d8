use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, info};

use crate::fetcher::FeedFetcher;
use crate::matcher::KeywordMatcher;
use crate::types::{ArticleRow, Feed};
use crate::Result;

/// Fetches every configured feed in order and keeps the entries that hit the watchlist.
pub struct FeedAggregator {
    fetcher: Arc<dyn FeedFetcher>,
    matcher: KeywordMatcher,
}

impl FeedAggregator {
    pub fn new(fetcher: Arc<dyn FeedFetcher>, matcher: KeywordMatcher) -> Self {
        Self { fetcher, matcher }
    }

    /// Runs one pass over `feeds`, returning deduplicated rows.
    ///
    /// Feeds are fetched one at a time; the first fetch error aborts the pass.
    pub async fn collect(&self, feeds: &[String]) -> Result<Vec<ArticleRow>> {
        let mut rows = Vec::new();

        for url in feeds {
            let feed = self.fetcher.fetch(url).await?;
            let matched = rows_from_feed(url, &feed, &self.matcher);
            info!(
                "📰 {}: {} entries, {} matched",
                feed.source_name(url),
                feed.entries.len(),
                matched.len()
            );
            rows.extend(matched);
        }

        let total = rows.len();
        let rows = dedup_rows(rows);
        if rows.len() < total {
            info!("🧹 Dropped {} duplicate rows", total - rows.len());
        }

        Ok(rows)
    }
}

/// Turns the matching entries of one feed into rows, in entry order.
pub fn rows_from_feed(url: &str, feed: &Feed, matcher: &KeywordMatcher) -> Vec<ArticleRow> {
    let source = feed.source_name(url);

    feed.entries
        .iter()
        .filter(|entry| matcher.matches(&entry.match_text()))
        .map(|entry| {
            let row = ArticleRow {
                published: entry.timestamp().to_string(),
                title: entry.title.clone().unwrap_or_default(),
                link: entry.link.clone().unwrap_or_default(),
                source: source.to_string(),
            };
            debug!("✅ {} - {}", row.title, row.link);
            row
        })
        .collect()
}

/// Drops rows whose (title, link) pair was already seen; first occurrence wins.
pub fn dedup_rows(rows: Vec<ArticleRow>) -> Vec<ArticleRow> {
    let mut seen = HashSet::new();

    rows.into_iter()
        .filter(|row| seen.insert((row.title.clone(), row.link.clone())))
        .collect()
}
