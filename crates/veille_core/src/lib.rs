pub mod config;
pub mod error;
pub mod fetcher;
pub mod matcher;
pub mod pipeline;
pub mod types;

pub use config::WatchConfig;
pub use error::Error;
pub use fetcher::FeedFetcher;
pub use matcher::KeywordMatcher;
pub use pipeline::{dedup_rows, FeedAggregator};
pub use types::{ArticleRow, Feed, FeedEntry};

pub type Result<T> = std::result::Result<T, Error>;
