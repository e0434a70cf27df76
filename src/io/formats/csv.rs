//! CSV export.
//!
//! The header row is written bare; every data field is double-quoted with
//! embedded quotes doubled, one row per site, `\n` line endings.

use crate::Result;
use crate::io::formats::write_error;
use crate::models::Category;
use std::io::Write;

/// Column names, in order.
pub const HEADER: [&str; 5] = ["Category", "Subcategory", "Name", "URL", "Description"];

/// Writes one CSV row per site.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_csv<W: Write>(categories: &[Category], mut writer: W) -> Result<()> {
    writeln!(writer, "{}", HEADER.join(",")).map_err(|e| write_error("write_csv_headers", e))?;

    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(false) // We write headers manually
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(&mut writer);

    for category in categories {
        for subcategory in &category.subcategories {
            for site in &subcategory.sites {
                csv_writer
                    .write_record([
                        category.name.as_str(),
                        subcategory.name.as_str(),
                        site.name.as_str(),
                        site.url.as_str(),
                        site.description.as_deref().unwrap_or(""),
                    ])
                    .map_err(|e| write_error("write_csv", e))?;
            }
        }
    }

    csv_writer.flush().map_err(|e| write_error("flush_csv", e))
}
