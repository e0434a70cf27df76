//! Parsed bookmark tree.

use serde::{Deserialize, Serialize};

/// A single bookmarked link.
///
/// Only links whose URL starts with `http` are ever constructed by the
/// parsers; `javascript:`, `place:` and similar entries are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkItem {
    /// Display title.
    pub title: String,
    /// Target URL.
    pub url: String,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_date: Option<i64>,
    /// Favicon, usually a `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl BookmarkItem {
    /// Creates a link with no date or icon.
    #[must_use]
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            add_date: None,
            icon: None,
        }
    }

    /// Sets the creation time (epoch milliseconds).
    #[must_use]
    pub const fn with_add_date(mut self, add_date: i64) -> Self {
        self.add_date = Some(add_date);
        self
    }

    /// Sets the favicon.
    #[must_use]
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Returns whether `url` is acceptable as a bookmark target.
    #[must_use]
    pub fn is_importable_url(url: &str) -> bool {
        url.starts_with("http")
    }
}

/// A folder of links and sub-folders, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarkFolder {
    /// Folder title.
    pub title: String,
    /// Children in source order.
    pub children: Vec<BookmarkNode>,
    /// Creation time in milliseconds since the Unix epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub add_date: Option<i64>,
}

impl BookmarkFolder {
    /// Creates an empty folder.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
            add_date: None,
        }
    }

    /// Appends a link.
    #[must_use]
    pub fn with_link(mut self, item: BookmarkItem) -> Self {
        self.children.push(BookmarkNode::Link(item));
        self
    }

    /// Appends a sub-folder.
    #[must_use]
    pub fn with_folder(mut self, folder: Self) -> Self {
        self.children.push(BookmarkNode::Folder(folder));
        self
    }

    /// Returns every link reachable from this folder, depth-first in
    /// document order.
    ///
    /// Walks with an explicit stack so arbitrarily deep trees cannot exhaust
    /// the call stack.
    #[must_use]
    pub fn descendant_links(&self) -> Vec<&BookmarkItem> {
        let mut links = Vec::new();
        let mut stack: Vec<std::slice::Iter<'_, BookmarkNode>> = vec![self.children.iter()];

        while let Some(iter) = stack.last_mut() {
            match iter.next() {
                Some(BookmarkNode::Link(item)) => links.push(item),
                Some(BookmarkNode::Folder(folder)) => stack.push(folder.children.iter()),
                None => {
                    stack.pop();
                },
            }
        }

        links
    }

    /// Number of sub-folders at any depth below this folder.
    #[must_use]
    pub fn descendant_folder_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Self> = vec![self];

        while let Some(folder) = stack.pop() {
            for child in &folder.children {
                if let BookmarkNode::Folder(sub) = child {
                    count += 1;
                    stack.push(sub);
                }
            }
        }

        count
    }
}

/// A node of the parsed tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BookmarkNode {
    /// A link.
    Link(BookmarkItem),
    /// A folder.
    Folder(BookmarkFolder),
}

/// The normalized result of parsing one bookmark file.
///
/// `total_bookmarks` and `total_folders` report what the parser actually
/// encountered (capped by the size guard), which can exceed what `folders`
/// and `root_bookmarks` still hold after truncation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedBookmarks {
    /// Top-level folders.
    pub folders: Vec<BookmarkFolder>,
    /// Top-level links that sit outside any folder.
    pub root_bookmarks: Vec<BookmarkItem>,
    /// Links encountered while parsing.
    pub total_bookmarks: usize,
    /// Folders encountered while parsing.
    pub total_folders: usize,
}

impl ParsedBookmarks {
    /// The fail-soft result: nothing parsed.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            folders: Vec::new(),
            root_bookmarks: Vec::new(),
            total_bookmarks: 0,
            total_folders: 0,
        }
    }

    /// Returns whether no links and no folders were found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.folders.is_empty() && self.root_bookmarks.is_empty()
    }

    /// Builds a result from top-level nodes, counting everything below them.
    #[must_use]
    pub fn from_top_level(nodes: Vec<BookmarkNode>) -> Self {
        let mut parsed = Self::empty();

        for node in nodes {
            match node {
                BookmarkNode::Link(item) => {
                    parsed.total_bookmarks += 1;
                    parsed.root_bookmarks.push(item);
                },
                BookmarkNode::Folder(folder) => {
                    parsed.total_bookmarks += folder.descendant_links().len();
                    parsed.total_folders += 1 + folder.descendant_folder_count();
                    parsed.folders.push(folder);
                },
            }
        }

        parsed
    }
}
