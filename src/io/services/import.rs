//! Bookmark import service.
//!
//! Detects the format of an uploaded file, parses it with the matching
//! fail-soft parser and normalizes the result into categories.

use crate::config::InterchangeConfig;
use crate::io::detect::{DetectedFormat, detect_format};
use crate::io::formats::html::HtmlBookmarkParser;
use crate::io::formats::json::JsonBookmarkParser;
use crate::io::services::normalize::normalize;
use crate::io::traits::BookmarkParser;
use crate::models::{BrowserType, Category, ParsedBookmarks};
use crate::{Error, Result};
use tracing::instrument;

/// Result of an import operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportResult {
    /// Format the content was detected as.
    pub format: DetectedFormat,
    /// The normalized hierarchy, always exactly one category.
    pub categories: Vec<Category>,
    /// Links reported by the parser.
    pub total_bookmarks: usize,
    /// Folders reported by the parser.
    pub total_folders: usize,
}

impl ImportResult {
    /// Returns whether any sites were imported.
    #[must_use]
    pub fn has_sites(&self) -> bool {
        self.categories.iter().any(|c| c.site_count() > 0)
    }

    /// Total sites across all categories.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.categories.iter().map(Category::site_count).sum()
    }
}

/// Service for importing bookmark files.
#[derive(Debug)]
pub struct ImportService {
    html: HtmlBookmarkParser,
    json: JsonBookmarkParser,
}

impl ImportService {
    /// Creates a new import service.
    #[must_use]
    pub fn new(config: InterchangeConfig) -> Self {
        Self {
            html: HtmlBookmarkParser::new(&config),
            json: JsonBookmarkParser::new(config.limits),
        }
    }

    /// Returns the HTML parser in use.
    #[must_use]
    pub const fn html_parser(&self) -> &HtmlBookmarkParser {
        &self.html
    }

    /// Detects and parses `content`.
    ///
    /// Malformed content of a recognized format yields an empty tree, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the content is neither
    /// Netscape HTML nor a Firefox JSON backup.
    #[instrument(skip(self, content), fields(bytes = content.len()))]
    pub fn parse(&self, content: &str) -> Result<ParsedBookmarks> {
        self.detect_and_parse(content).map(|(_, parsed)| parsed)
    }

    fn detect_and_parse(&self, content: &str) -> Result<(DetectedFormat, ParsedBookmarks)> {
        let format = detect_format(content);
        tracing::debug!(format = format.as_str(), "detected bookmark format");

        let parser: &dyn BookmarkParser = match format {
            DetectedFormat::Html => &self.html,
            DetectedFormat::Json => &self.json,
            DetectedFormat::Unknown => return Err(Error::UnsupportedFormat),
        };

        Ok((format, parser.parse(content)))
    }

    /// Parses `content` and normalizes it for `browser`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedFormat`] if the content cannot be
    /// classified.
    #[instrument(skip(self, content), fields(bytes = content.len(), browser = browser.as_str()))]
    pub fn import(&self, content: &str, browser: BrowserType) -> Result<ImportResult> {
        let (format, parsed) = self.detect_and_parse(content)?;
        let categories = normalize(&parsed, browser);

        let result = ImportResult {
            format,
            categories,
            total_bookmarks: parsed.total_bookmarks,
            total_folders: parsed.total_folders,
        };

        tracing::info!(
            format = format.as_str(),
            total_bookmarks = result.total_bookmarks,
            total_folders = result.total_folders,
            sites = result.site_count(),
            "bookmark import complete"
        );

        Ok(result)
    }
}

impl Default for ImportService {
    fn default() -> Self {
        Self::new(InterchangeConfig::default())
    }
}

/// Parses `content` with the default configuration.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the content cannot be classified.
pub fn parse_bookmarks(content: &str) -> Result<ParsedBookmarks> {
    ImportService::default().parse(content)
}

/// Imports `content` with the default configuration.
///
/// # Errors
///
/// Returns [`Error::UnsupportedFormat`] if the content cannot be classified.
pub fn import_bookmarks(content: &str, browser: BrowserType) -> Result<ImportResult> {
    ImportService::default().import(content, browser)
}
