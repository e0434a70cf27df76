//! Bookmark export service.
//!
//! Renders a category hierarchy into a downloadable file.

use crate::io::formats::csv::write_csv;
use crate::io::formats::html::export::write_html;
use crate::io::formats::json::write_json;
use crate::io::formats::{ExportFormat, ExportedFile};
use crate::models::Category;
use crate::{Error, Result};
use std::io::Write;
use tracing::instrument;

/// Service for exporting categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExportService;

impl ExportService {
    /// Creates a new export service.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders `categories` in `format`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    #[instrument(skip(self, categories), fields(format = %format, categories = categories.len()))]
    pub fn export(&self, categories: &[Category], format: ExportFormat) -> Result<ExportedFile> {
        let mut buffer = Vec::new();
        self.export_to_writer(categories, format, &mut buffer)?;

        let content = String::from_utf8(buffer).map_err(|e| Error::OperationFailed {
            operation: "export_utf8".to_string(),
            cause: e.to_string(),
        })?;

        tracing::info!(
            format = format.extension(),
            bytes = content.len(),
            sites = categories.iter().map(Category::site_count).sum::<usize>(),
            "bookmark export complete"
        );

        Ok(ExportedFile::new(content, format))
    }

    /// Streams `categories` in `format` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn export_to_writer<W: Write>(
        &self,
        categories: &[Category],
        format: ExportFormat,
        writer: W,
    ) -> Result<()> {
        match format {
            ExportFormat::Html => write_html(categories, writer),
            ExportFormat::Json => write_json(categories, writer),
            ExportFormat::Csv => write_csv(categories, writer),
        }
    }
}
