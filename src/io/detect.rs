//! Content sniffing for uploaded bookmark files.

use std::fmt;

/// Classification of raw bookmark file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetectedFormat {
    /// Netscape bookmark HTML.
    Html,
    /// Firefox JSON backup.
    Json,
    /// Neither.
    Unknown,
}

impl DetectedFormat {
    /// Returns the lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Json => "json",
            Self::Unknown => "unknown",
        }
    }

    /// Returns whether a parser exists for this format.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for DetectedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const FIREFOX_PLACE_MARKER: &str = r#""type":"text/x-moz-place""#;

/// Classifies `content` by its leading bytes and marker substrings.
///
/// The checks run against the trimmed content with any UTF-8 byte-order
/// mark removed. Matching is case-sensitive, as browsers write these markers
/// verbatim.
#[must_use]
pub fn detect_format(content: &str) -> DetectedFormat {
    let trimmed = content.trim_start_matches('\u{feff}').trim();

    if trimmed.starts_with("<!DOCTYPE")
        || trimmed.starts_with("<html")
        || trimmed.contains("<title>Bookmarks</title>")
    {
        return DetectedFormat::Html;
    }

    if trimmed.starts_with('{') && trimmed.contains(FIREFOX_PLACE_MARKER) {
        return DetectedFormat::Json;
    }

    DetectedFormat::Unknown
}
