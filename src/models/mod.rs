//! Data models for bookmark interchange.
//!
//! Two families of value objects live here: the parsed bookmark tree that
//! both format parsers produce, and the three-level hierarchy the application
//! stores and exports.

mod bookmark;
mod hierarchy;

pub use bookmark::{BookmarkFolder, BookmarkItem, BookmarkNode, ParsedBookmarks};
pub use hierarchy::{BrowserType, Category, Site, Subcategory};
