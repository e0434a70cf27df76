//! JSON format: Firefox bookmark backups in, category hierarchy out.
//!
//! Firefox backups are a tree of place nodes:
//!
//! ```json
//! {"title": "", "children": [
//!   {"title": "Dev", "children": [
//!     {"type": "text/x-moz-place", "title": "SO", "uri": "https://stackoverflow.com",
//!      "dateAdded": 1700000000000000}
//!   ]}
//! ]}
//! ```
//!
//! `dateAdded` is in microseconds. Separators and non-http places are dropped.

use crate::config::SizeLimits;
use crate::io::formats::write_error;
use crate::io::traits::{BookmarkParser, ParseError};
use crate::models::{BookmarkFolder, BookmarkItem, BookmarkNode, Category, ParsedBookmarks};
use serde::Deserialize;
use std::io::Write;

const PLACE_TYPE: &str = "text/x-moz-place";
const UNTITLED: &str = "Untitled";

#[derive(Debug, Deserialize)]
struct FirefoxRoot {
    children: Option<Vec<FirefoxNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FirefoxNode {
    title: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    uri: Option<String>,
    date_added: Option<i64>,
    iconuri: Option<String>,
    children: Option<Vec<FirefoxNode>>,
}

impl FirefoxNode {
    fn title_or_untitled(&self) -> String {
        self.title
            .as_deref()
            .filter(|title| !title.is_empty())
            .unwrap_or(UNTITLED)
            .to_string()
    }
}

/// Parser for Firefox JSON bookmark backups.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBookmarkParser {
    limits: SizeLimits,
}

impl JsonBookmarkParser {
    /// Creates a parser with the given limits.
    #[must_use]
    pub const fn new(limits: SizeLimits) -> Self {
        Self { limits }
    }

    fn convert(&self, node: &FirefoxNode, depth: usize) -> Result<Option<BookmarkNode>, ParseError> {
        if node.kind.as_deref() == Some(PLACE_TYPE) {
            if let Some(uri) = node.uri.as_deref() {
                return Ok(convert_place(node, uri).map(BookmarkNode::Link));
            }
        }

        let Some(children) = &node.children else {
            return Ok(None);
        };

        if depth >= self.limits.max_nesting_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            });
        }

        let mut folder = BookmarkFolder::new(node.title_or_untitled());
        folder.add_date = node.date_added.map(|micros| micros / 1000);
        for child in children {
            if let Some(converted) = self.convert(child, depth + 1)? {
                folder.children.push(converted);
            }
        }
        Ok(Some(BookmarkNode::Folder(folder)))
    }
}

fn convert_place(node: &FirefoxNode, uri: &str) -> Option<BookmarkItem> {
    if !BookmarkItem::is_importable_url(uri) {
        return None;
    }

    let mut item = BookmarkItem::new(node.title_or_untitled(), uri);
    item.add_date = node.date_added.map(|micros| micros / 1000);
    item.icon.clone_from(&node.iconuri);
    Some(item)
}

impl BookmarkParser for JsonBookmarkParser {
    fn name(&self) -> &'static str {
        "firefox-json"
    }

    fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    fn try_parse(&self, content: &str) -> Result<ParsedBookmarks, ParseError> {
        let content = content.trim_start_matches('\u{feff}');
        let root: FirefoxRoot = serde_json::from_str(content)?;
        let children = root
            .children
            .ok_or_else(|| ParseError::UnexpectedShape("root has no children array".to_string()))?;

        let mut nodes = Vec::with_capacity(children.len());
        for child in &children {
            if let Some(node) = self.convert(child, 0)? {
                nodes.push(node);
            }
        }
        Ok(ParsedBookmarks::from_top_level(nodes))
    }
}

/// Writes categories as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(categories: &[Category], mut writer: W) -> crate::Result<()> {
    serde_json::to_writer_pretty(&mut writer, categories)
        .map_err(|e| write_error("write_json", e))?;
    writer.flush().map_err(|e| write_error("flush_json", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Site, Subcategory};

    fn parse(content: &str) -> ParsedBookmarks {
        JsonBookmarkParser::default().parse(content)
    }

    #[test]
    fn test_single_root_place() {
        let parsed = parse(
            r#"{"children":[{"type":"text/x-moz-place","uri":"https://a.com","title":"A"}]}"#,
        );
        assert_eq!(parsed.root_bookmarks, vec![BookmarkItem::new("A", "https://a.com")]);
        assert!(parsed.folders.is_empty());
        assert_eq!(parsed.total_bookmarks, 1);
        assert_eq!(parsed.total_folders, 0);
    }

    #[test]
    fn test_firefox_backup_tree() {
        let parsed = parse(
            r#"{
  "guid": "root________", "title": "", "type": "text/x-moz-place-container",
  "children": [
    {"guid": "toolbar_____", "title": "Bookmarks Toolbar", "type": "text/x-moz-place-container",
     "dateAdded": 1700000000000000,
     "children": [
       {"type": "text/x-moz-place", "title": "Rust", "uri": "https://rust-lang.org",
        "dateAdded": 1700000000123456, "iconuri": "https://rust-lang.org/favicon.ico"},
       {"type": "text/x-moz-place-separator"},
       {"type": "text/x-moz-place", "title": "Recent", "uri": "place:sort=8"},
       {"title": "", "type": "text/x-moz-place-container", "children": [
         {"type": "text/x-moz-place", "uri": "https://nested.example"}
       ]}
     ]}
  ]
}"#,
        );

        assert!(parsed.root_bookmarks.is_empty());
        assert_eq!(parsed.folders.len(), 1);
        let toolbar = &parsed.folders[0];
        assert_eq!(toolbar.title, "Bookmarks Toolbar");
        assert_eq!(toolbar.add_date, Some(1_700_000_000_000));
        assert_eq!(toolbar.children.len(), 2);

        let links = toolbar.descendant_links();
        assert_eq!(links[0].add_date, Some(1_700_000_000_123));
        assert_eq!(links[0].icon.as_deref(), Some("https://rust-lang.org/favicon.ico"));
        assert_eq!(links[1].title, "Untitled");
        assert!(matches!(&toolbar.children[1], BookmarkNode::Folder(f) if f.title == "Untitled"));

        assert_eq!(parsed.total_bookmarks, 2);
        assert_eq!(parsed.total_folders, 2);
    }

    #[test]
    fn test_malformed_is_empty() {
        assert_eq!(parse("{\"children\": [oops"), ParsedBookmarks::empty());
        assert_eq!(parse("[]"), ParsedBookmarks::empty());
        assert_eq!(parse(r#"{"title":"no children"}"#), ParsedBookmarks::empty());
    }

    #[test]
    fn test_missing_children_is_shape_error() {
        let result = JsonBookmarkParser::default().try_parse(r#"{"title":"x"}"#);
        assert!(matches!(result, Err(ParseError::UnexpectedShape(_))));
    }

    #[test]
    fn test_deep_nesting_fails_soft() {
        let depth = 200;
        let mut content = String::from("{\"children\":[");
        for _ in 0..depth {
            content.push_str("{\"title\":\"f\",\"children\":[");
        }
        for _ in 0..depth {
            content.push_str("]}");
        }
        content.push_str("]}");
        assert_eq!(parse(&content), ParsedBookmarks::empty());
    }

    fn nested_backup(depth: usize) -> String {
        let mut content = String::from("{\"children\":[");
        for _ in 0..depth {
            content.push_str("{\"title\":\"f\",\"children\":[");
        }
        content.push_str(r#"{"type":"text/x-moz-place","uri":"https://deep.example"}"#);
        for _ in 0..depth {
            content.push_str("]}");
        }
        content.push_str("]}");
        content
    }

    #[test]
    fn test_nesting_bounds() {
        let parsed = parse(&nested_backup(60));
        assert_eq!(parsed.total_bookmarks, 1);
        assert_eq!(parsed.total_folders, 60);

        // serde_json spends two recursion levels per folder.
        assert_eq!(parse(&nested_backup(64)), ParsedBookmarks::empty());

        let limits = SizeLimits {
            max_nesting_depth: 4,
            ..SizeLimits::default()
        };
        let parser = JsonBookmarkParser::new(limits);
        assert!(matches!(
            parser.try_parse(&nested_backup(10)),
            Err(ParseError::NestingTooDeep { limit: 4 })
        ));
        assert_eq!(parser.parse(&nested_backup(3)).total_bookmarks, 1);
    }

    #[test]
    fn test_write_json_pretty() {
        let categories = vec![Category::new("Bookmarks - Chrome", "🟢").with_subcategory(
            Subcategory::new("Genel", "🌐").with_site(Site::new("A", "https://a.com")),
        )];
        let mut buffer = Vec::new();
        write_json(&categories, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.contains("\n  "));
        let back: Vec<Category> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, categories);
    }
}
