pub mod csv;
pub mod markdown;
pub mod writer;

pub use writer::{ReportConfig, ReportPaths, ReportWriter};
