use serde::{Deserialize, Serialize};

/// One syndicated item as handed over by a [`crate::FeedFetcher`].
///
/// Every field is optional: feeds in the wild omit any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
}

impl FeedEntry {
    /// Title and summary joined by a single space, the text keywords are matched against.
    pub fn match_text(&self) -> String {
        format!(
            "{} {}",
            self.title.as_deref().unwrap_or_default(),
            self.summary.as_deref().unwrap_or_default()
        )
    }

    /// `published` when non-empty, otherwise `updated`, otherwise an empty string.
    pub fn timestamp(&self) -> &str {
        self.published
            .as_deref()
            .filter(|p| !p.is_empty())
            .or(self.updated.as_deref())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

impl Feed {
    /// Declared feed title, falling back to the URL it was fetched from.
    pub fn source_name<'a>(&'a self, url: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(url)
    }
}

/// A matched article, one line of the CSV report.
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRow {
    pub published: String,
    pub title: String,
    pub link: String,
    pub source: String,
}

impl ArticleRow {
    pub const HEADERS: [&'static str; 4] = ["published", "title", "link", "source"];
}
