//! Core traits for bookmark parsing.
//!
//! Defines the [`BookmarkParser`] trait that format parsers and HTML
//! strategies implement.

use crate::config::SizeLimits;
use crate::io::size_guard::SizeGuard;
use crate::models::ParsedBookmarks;
use thiserror::Error;

/// Internal parse failure.
///
/// Never escapes [`BookmarkParser::parse`]; it is logged and replaced by an
/// empty tree there.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not valid JSON.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The document parsed but does not have the expected structure.
    #[error("unexpected document shape: {0}")]
    UnexpectedShape(String),

    /// Folder nesting exceeded the configured depth.
    #[error("folder nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured limit.
        limit: usize,
    },
}

/// A parser producing a [`ParsedBookmarks`] tree from one file's text.
///
/// Implementations only provide [`try_parse`](Self::try_parse); the provided
/// [`parse`](Self::parse) adds the fail-soft contract and the size guard.
///
/// # Example Implementation
///
/// ```rust,ignore
/// impl BookmarkParser for MyParser {
///     fn name(&self) -> &'static str { "mine" }
///     fn limits(&self) -> &SizeLimits { &self.limits }
///     fn try_parse(&self, content: &str) -> Result<ParsedBookmarks, ParseError> {
///         // build the tree, report true counts
///     }
/// }
/// ```
pub trait BookmarkParser: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Limits this parser was configured with.
    fn limits(&self) -> &SizeLimits;

    /// Parses without the fail-soft wrapper or size guard.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the input cannot be interpreted.
    fn try_parse(&self, content: &str) -> Result<ParsedBookmarks, ParseError>;

    /// Parses, truncating oversized results and replacing any failure with
    /// [`ParsedBookmarks::empty`].
    fn parse(&self, content: &str) -> ParsedBookmarks {
        match self.try_parse(content) {
            Ok(parsed) => SizeGuard::new(*self.limits()).apply(parsed),
            Err(e) => {
                tracing::warn!(
                    parser = self.name(),
                    error = %e,
                    bytes = content.len(),
                    "bookmark parse failed, returning empty result"
                );
                ParsedBookmarks::empty()
            },
        }
    }
}
