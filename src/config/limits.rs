//! Size limits for untrusted bookmark files.

use crate::{Error, Result};

/// Caps applied while parsing uploaded bookmark files.
///
/// Uploads are attacker-controlled. These bounds keep memory and stack use
/// per parse deterministic; crossing them truncates the result rather than
/// failing the import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeLimits {
    /// Bookmark count above which the result is truncated.
    pub max_bookmarks: usize,
    /// Top-level folders kept once truncation applies.
    pub max_folders: usize,
    /// Root-level bookmarks kept once truncation applies.
    pub max_root_bookmarks: usize,
    /// Folder names are cut to this many characters by the regex scanner.
    pub max_folder_name_chars: usize,
    /// Bookmark titles are cut to this many characters by the regex scanner.
    pub max_title_chars: usize,
    /// Deepest folder nesting the DOM walk and JSON parser descend into.
    ///
    /// JSON input is also bounded by `serde_json`'s recursion limit of 128,
    /// which each Firefox folder level spends two of (the node object and its
    /// `children` array). Backups nested deeper than about 62 folders fail
    /// soft regardless of this value.
    pub max_nesting_depth: usize,
}

impl SizeLimits {
    /// Default bookmark cap.
    pub const DEFAULT_MAX_BOOKMARKS: usize = 1000;
    /// Default folder cap.
    pub const DEFAULT_MAX_FOLDERS: usize = 10;
    /// Default root bookmark cap.
    pub const DEFAULT_MAX_ROOT_BOOKMARKS: usize = 500;
    /// Default folder name length.
    pub const DEFAULT_MAX_FOLDER_NAME_CHARS: usize = 50;
    /// Default title length.
    pub const DEFAULT_MAX_TITLE_CHARS: usize = 100;
    /// Default nesting depth.
    pub const DEFAULT_MAX_NESTING_DEPTH: usize = 128;

    /// Checks that every limit is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the first zero limit.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("max_bookmarks", self.max_bookmarks),
            ("max_folders", self.max_folders),
            ("max_root_bookmarks", self.max_root_bookmarks),
            ("max_folder_name_chars", self.max_folder_name_chars),
            ("max_title_chars", self.max_title_chars),
            ("max_nesting_depth", self.max_nesting_depth),
        ];

        match fields.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(Error::InvalidInput(format!(
                "limits.{name} must be greater than zero"
            ))),
            None => Ok(()),
        }
    }
}

impl Default for SizeLimits {
    fn default() -> Self {
        Self {
            max_bookmarks: Self::DEFAULT_MAX_BOOKMARKS,
            max_folders: Self::DEFAULT_MAX_FOLDERS,
            max_root_bookmarks: Self::DEFAULT_MAX_ROOT_BOOKMARKS,
            max_folder_name_chars: Self::DEFAULT_MAX_FOLDER_NAME_CHARS,
            max_title_chars: Self::DEFAULT_MAX_TITLE_CHARS,
            max_nesting_depth: Self::DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}
