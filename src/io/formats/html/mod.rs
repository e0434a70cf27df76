//! Netscape bookmark HTML.
//!
//! Two interchangeable strategies read the `<DL>/<DT>/<A>/<H3>` dialect:
//!
//! - [`dom`] walks the html5ever tree (requires the `dom` feature)
//! - [`scan`] splits the raw text on `<h3>` headers with regexes
//!
//! Both emit the same [`ParsedBookmarks`] for well-formed exports with one
//! folder level, with two differences in the scanner:
//!
//! - nested folders are not recognized: every link after a header belongs to
//!   that header's folder
//! - folder names and titles are cut to `max_folder_name_chars` and
//!   `max_title_chars`, which the DOM walk leaves intact

#[cfg(feature = "dom")]
pub mod dom;
pub mod export;
pub mod scan;

use crate::config::{InterchangeConfig, SizeLimits, StrategyPreference};
use crate::io::traits::{BookmarkParser, ParseError};
use crate::models::ParsedBookmarks;
use std::fmt;

/// Concrete HTML parsing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HtmlStrategy {
    /// Tree walk over the parsed document.
    Dom,
    /// Regex scan over the raw text.
    Regex,
}

impl HtmlStrategy {
    /// Returns the lowercase label.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dom => "dom",
            Self::Regex => "regex",
        }
    }

    /// Returns whether the DOM strategy was compiled in.
    #[must_use]
    pub const fn dom_available() -> bool {
        cfg!(feature = "dom")
    }

    /// Resolves a configured preference to a strategy.
    #[must_use]
    pub const fn from_preference(preference: StrategyPreference) -> Self {
        match preference {
            StrategyPreference::Auto if Self::dom_available() => Self::Dom,
            StrategyPreference::Auto | StrategyPreference::Regex => Self::Regex,
            StrategyPreference::Dom => Self::Dom,
        }
    }
}

impl fmt::Display for HtmlStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parser for Netscape bookmark HTML.
///
/// # Example
///
/// ```rust
/// use bookmark_interchange::{BookmarkParser, HtmlBookmarkParser, InterchangeConfig};
///
/// let parser = HtmlBookmarkParser::new(&InterchangeConfig::default());
/// let parsed = parser.parse(r#"<DL><p><DT><A HREF="https://a.example">A</A></DL><p>"#);
/// assert_eq!(parsed.total_bookmarks, 1);
/// ```
pub struct HtmlBookmarkParser {
    strategy: HtmlStrategy,
    inner: Box<dyn BookmarkParser>,
}

impl HtmlBookmarkParser {
    /// Creates a parser using the configured strategy preference and limits.
    #[must_use]
    pub fn new(config: &InterchangeConfig) -> Self {
        Self::with_strategy(
            HtmlStrategy::from_preference(config.html_strategy),
            config.limits,
        )
    }

    /// Creates a parser for an explicit strategy.
    ///
    /// Requesting [`HtmlStrategy::Dom`] in a build without the `dom` feature
    /// falls back to [`HtmlStrategy::Regex`].
    #[must_use]
    pub fn with_strategy(requested: HtmlStrategy, limits: SizeLimits) -> Self {
        let strategy = if requested == HtmlStrategy::Dom && !HtmlStrategy::dom_available() {
            tracing::warn!("dom strategy requested but not compiled in, using regex");
            HtmlStrategy::Regex
        } else {
            requested
        };

        tracing::debug!(strategy = strategy.as_str(), "html strategy selected");

        Self {
            strategy,
            inner: build_strategy(strategy, limits),
        }
    }

    /// Returns the strategy actually in use.
    #[must_use]
    pub const fn strategy(&self) -> HtmlStrategy {
        self.strategy
    }
}

#[cfg(feature = "dom")]
fn build_strategy(strategy: HtmlStrategy, limits: SizeLimits) -> Box<dyn BookmarkParser> {
    match strategy {
        HtmlStrategy::Dom => Box::new(dom::DomParser::new(limits)),
        HtmlStrategy::Regex => Box::new(scan::ScanParser::new(limits)),
    }
}

#[cfg(not(feature = "dom"))]
fn build_strategy(_strategy: HtmlStrategy, limits: SizeLimits) -> Box<dyn BookmarkParser> {
    Box::new(scan::ScanParser::new(limits))
}

impl Default for HtmlBookmarkParser {
    fn default() -> Self {
        Self::new(&InterchangeConfig::default())
    }
}

impl fmt::Debug for HtmlBookmarkParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HtmlBookmarkParser")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

impl BookmarkParser for HtmlBookmarkParser {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn limits(&self) -> &SizeLimits {
        self.inner.limits()
    }

    fn try_parse(&self, content: &str) -> Result<ParsedBookmarks, ParseError> {
        self.inner.try_parse(content)
    }
}

/// Converts an `ADD_DATE` attribute (epoch seconds) to epoch milliseconds.
pub(crate) fn epoch_millis(seconds: &str) -> Option<i64> {
    seconds.trim().parse::<i64>().ok()?.checked_mul(1000)
}
