use std::io::Write;

use veille_core::{ArticleRow, Result};

/// Writes `rows` as CSV with a `published,title,link,source` header.
///
/// The header is written even when there are no rows.
pub fn write_csv<W: Write>(writer: W, rows: &[ArticleRow]) -> Result<()> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    writer.write_record(ArticleRow::HEADERS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(())
}
