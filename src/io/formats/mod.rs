//! Format adapters for import/export.
//!
//! Import parsers implement [`BookmarkParser`](crate::io::BookmarkParser);
//! exporters are plain functions writing a category slice to any
//! [`std::io::Write`].

pub mod csv;
pub mod html;
pub mod json;

use crate::{Error, Result};
use std::str::FromStr;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Netscape Bookmark File.
    Html,
    /// Pretty-printed category hierarchy.
    Json,
    /// One row per site.
    Csv,
}

impl ExportFormat {
    /// Returns all export formats.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Html, Self::Json, Self::Csv]
    }

    /// Returns the file extension for this format.
    #[must_use]
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }

    /// Returns the MIME type for this format.
    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        match self {
            Self::Html => "text/html",
            Self::Json => "application/json",
            Self::Csv => "text/csv",
        }
    }

    /// Returns the suggested download file name.
    #[must_use]
    pub const fn filename(&self) -> &'static str {
        match self {
            Self::Html => "bookmarks.html",
            Self::Json => "bookmarks.json",
            Self::Csv => "bookmarks.csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" | "htm" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(Error::InvalidInput(format!("Unknown export format: {s}"))),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// A rendered export ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    /// File body.
    pub content: String,
    /// MIME type.
    pub content_type: &'static str,
    /// Suggested file name.
    pub filename: &'static str,
}

impl ExportedFile {
    /// Wraps rendered content with the metadata of `format`.
    #[must_use]
    pub const fn new(content: String, format: ExportFormat) -> Self {
        Self {
            content,
            content_type: format.mime_type(),
            filename: format.filename(),
        }
    }
}

/// Maps an I/O failure during export to [`Error::OperationFailed`].
pub(crate) fn write_error(operation: &str, e: impl std::fmt::Display) -> Error {
    Error::OperationFailed {
        operation: operation.to_string(),
        cause: e.to_string(),
    }
}
