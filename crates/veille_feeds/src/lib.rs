pub mod http;
pub mod logging;
pub mod parse;

pub use http::HttpFeedFetcher;
pub use logging::{init_logging, Logger};
pub use parse::parse_feed;
