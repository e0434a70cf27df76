//! Import/Export I/O subsystem.
//!
//! Turns browser bookmark exports into the Category → Subcategory → Site
//! hierarchy and renders that hierarchy back into files browsers can import.
//!
//! # Architecture
//!
//! - **Detection** sniffs the content, never the file name
//! - **Format parsers** implement [`BookmarkParser`] and are fail-soft:
//!   malformed input yields an empty [`ParsedBookmarks`](crate::ParsedBookmarks)
//! - **Size guard** truncates oversized results deterministically
//! - **Services** orchestrate parsing, normalization and export
//!
//! # Supported Formats
//!
//! | Format | Import | Export | Notes |
//! |--------|--------|--------|-------|
//! | Netscape HTML | ✓ | ✓ | DOM walk or regex scanner |
//! | Firefox JSON | ✓ | - | `text/x-moz-place` backup tree |
//! | JSON | - | ✓ | Serialized hierarchy |
//! | CSV | - | ✓ | One row per site, RFC 4180 quoting |
//!
//! # Examples
//!
//! ```rust
//! use bookmark_interchange::io::{DetectedFormat, detect_format};
//!
//! assert_eq!(detect_format("<!DOCTYPE NETSCAPE-Bookmark-file-1>"), DetectedFormat::Html);
//! assert_eq!(detect_format("plain text"), DetectedFormat::Unknown);
//! ```

pub mod detect;
pub mod formats;
pub mod services;
pub mod size_guard;
pub mod traits;

// Re-exports for convenience
pub use detect::{DetectedFormat, detect_format};
pub use formats::html::{HtmlBookmarkParser, HtmlStrategy};
pub use formats::json::JsonBookmarkParser;
pub use formats::{ExportFormat, ExportedFile};
pub use services::export::ExportService;
pub use services::import::{ImportResult, ImportService, import_bookmarks, parse_bookmarks};
pub use services::normalize::{NormalizeSummary, normalize};
pub use size_guard::SizeGuard;
pub use traits::{BookmarkParser, ParseError};
