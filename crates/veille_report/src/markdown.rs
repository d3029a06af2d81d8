use chrono::NaiveDate;
use veille_core::ArticleRow;

pub const DEFAULT_LINK_LIMIT: usize = 50;

/// Renders the daily digest.
///
/// The "Articles retenus" count is the full row count; only the first
/// `link_limit` rows are listed under "Liens".
pub fn render_markdown(
    rows: &[ArticleRow],
    keywords: &[String],
    date: NaiveDate,
    link_limit: usize,
) -> String {
    let mut lines = vec![
        format!("# Veille techno — {}", date.format("%Y-%m-%d")),
        String::new(),
        format!("**Mots-clés :** {}", keywords.join(", ")),
        String::new(),
        format!("**Articles retenus :** {}", rows.len()),
        String::new(),
        "## Liens".to_string(),
        String::new(),
    ];

    lines.extend(
        rows.iter()
            .take(link_limit)
            .map(|r| format!("- [{}]({}) — *{}*", r.title, r.link, r.source)),
    );
    lines.push(String::new());

    lines.join("\n")
}
