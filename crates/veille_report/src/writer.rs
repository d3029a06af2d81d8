use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::info;
use veille_core::{ArticleRow, Result};

use crate::csv::write_csv;
use crate::markdown::{render_markdown, DEFAULT_LINK_LIMIT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub output_dir: PathBuf,
    pub link_limit: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("output"),
            link_limit: DEFAULT_LINK_LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub csv: PathBuf,
    pub markdown: PathBuf,
}

/// Writes `veille_<date>.csv` and `veille_<date>.md` under the output directory.
///
/// Files from an earlier run on the same date are overwritten.
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn paths_for(&self, date: NaiveDate) -> ReportPaths {
        let stem = format!("veille_{}", date.format("%Y-%m-%d"));
        ReportPaths {
            csv: self.config.output_dir.join(format!("{}.csv", stem)),
            markdown: self.config.output_dir.join(format!("{}.md", stem)),
        }
    }

    pub fn write(&self, rows: &[ArticleRow], keywords: &[String], date: NaiveDate) -> Result<ReportPaths> {
        fs::create_dir_all(&self.config.output_dir)?;
        let paths = self.paths_for(date);

        write_csv(BufWriter::new(File::create(&paths.csv)?), rows)?;
        fs::write(
            &paths.markdown,
            render_markdown(rows, keywords, date, self.config.link_limit),
        )?;

        info!("💾 Wrote {} rows to {}", rows.len(), self.config.output_dir.display());
        Ok(paths)
    }
}
