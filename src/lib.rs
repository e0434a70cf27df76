//! # Bookmark Interchange
//!
//! Import and export of browser bookmark files.
//!
//! Bookmark exports arrive in two dialects: the Netscape bookmark HTML that
//! Chrome, Firefox, Safari and Edge all write, and the JSON backup format
//! written by Firefox. This crate sniffs the dialect, parses it into a
//! normalized [`ParsedBookmarks`] tree, flattens that tree into the three-level
//! Category → Subcategory → Site hierarchy, and renders a hierarchy back out as
//! HTML, JSON or CSV.
//!
//! ## Features
//!
//! - Content-based format detection, independent of file names
//! - Two interchangeable HTML strategies: a DOM walk (`dom` feature) and a
//!   regex scanner that needs no tree builder
//! - Fail-soft parsing: malformed input yields an empty tree, never a panic
//! - Deterministic size caps for oversized or adversarial uploads
//! - RFC 4180 CSV output
//!
//! ## Example
//!
//! ```rust
//! use bookmark_interchange::{BrowserType, ExportFormat, ExportService, ImportService};
//!
//! let html = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
//! <DL><p>
//!     <DT><H3>Dev</H3>
//!     <DL><p>
//!         <DT><A HREF="https://doc.rust-lang.org">Docs</A>
//!     </DL><p>
//! </DL><p>"#;
//!
//! let imported = ImportService::default().import(html, BrowserType::Firefox)?;
//! assert_eq!(imported.categories[0].subcategories[0].name, "Dev");
//!
//! let file = ExportService::new().export(&imported.categories, ExportFormat::Csv)?;
//! assert_eq!(file.filename, "bookmarks.csv");
//! # Ok::<(), bookmark_interchange::Error>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

pub mod config;
pub mod io;
pub mod models;
pub mod observability;

pub use config::{InterchangeConfig, SizeLimits, StrategyPreference};
pub use io::{
    BookmarkParser, DetectedFormat, ExportFormat, ExportService, ExportedFile,
    HtmlBookmarkParser, HtmlStrategy, ImportResult, ImportService, JsonBookmarkParser,
    detect_format, import_bookmarks, normalize, parse_bookmarks,
};
pub use models::{
    BookmarkFolder, BookmarkItem, BookmarkNode, BrowserType, Category, ParsedBookmarks, Site,
    Subcategory,
};

/// Error type for bookmark interchange operations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `UnsupportedFormat` | Uploaded content is neither Netscape HTML nor Firefox JSON |
/// | `InvalidInput` | Unknown format/browser names, invalid configuration values |
/// | `OperationFailed` | Config file I/O, export serialization, logging setup |
///
/// Malformed bookmark files are *not* errors: the parsers degrade to an
/// empty tree instead.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The content could not be classified as a supported bookmark format.
    ///
    /// This is the only failure callers of [`ImportService::parse`] and
    /// [`ImportService::import`] need to handle.
    #[error("unsupported bookmark format: expected Netscape HTML or Firefox JSON")]
    UnsupportedFormat,

    /// Invalid input was provided.
    ///
    /// Raised when:
    /// - An export format string is not one of `html`, `json`, `csv`
    /// - A browser hint is not `firefox` or `chrome`
    /// - A configuration limit is zero or a strategy name is unknown
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - A configuration file cannot be read or parsed
    /// - Export serialization or writing fails
    /// - The logging subscriber cannot be installed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for bookmark interchange operations.
pub type Result<T> = std::result::Result<T, Error>;
