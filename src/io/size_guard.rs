//! Bounded degradation for oversized bookmark files.
//!
//! When a file holds more bookmarks than `max_bookmarks`, the returned tree
//! is cut down to the first `max_folders` folders and the first
//! `max_root_bookmarks` root links, and the reported totals are clamped to
//! the caps. Files at or under the cap pass through untouched.

use crate::config::SizeLimits;
use crate::models::ParsedBookmarks;

/// Applies [`SizeLimits`] to parser output.
#[derive(Debug, Clone, Copy)]
pub struct SizeGuard {
    limits: SizeLimits,
}

impl SizeGuard {
    /// Creates a guard for the given limits.
    #[must_use]
    pub const fn new(limits: SizeLimits) -> Self {
        Self { limits }
    }

    /// Returns whether `parsed` is over the bookmark cap.
    #[must_use]
    pub const fn exceeds(&self, parsed: &ParsedBookmarks) -> bool {
        parsed.total_bookmarks > self.limits.max_bookmarks
    }

    /// Truncates `parsed` if it is over the bookmark cap.
    #[must_use]
    pub fn apply(&self, mut parsed: ParsedBookmarks) -> ParsedBookmarks {
        if !self.exceeds(&parsed) {
            return parsed;
        }

        tracing::warn!(
            total_bookmarks = parsed.total_bookmarks,
            total_folders = parsed.total_folders,
            max_bookmarks = self.limits.max_bookmarks,
            "bookmark file over size cap, truncating"
        );

        parsed.folders.truncate(self.limits.max_folders);
        parsed.root_bookmarks.truncate(self.limits.max_root_bookmarks);
        parsed.total_bookmarks = parsed.total_bookmarks.min(self.limits.max_bookmarks);
        parsed.total_folders = parsed.total_folders.min(self.limits.max_folders);
        parsed
    }
}

impl Default for SizeGuard {
    fn default() -> Self {
        Self::new(SizeLimits::default())
    }
}
