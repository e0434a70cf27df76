//! DOM strategy: walks the html5ever tree built by `scraper`.
//!
//! Netscape exports never close `<DT>`, so html5ever nests a folder's `<DL>`
//! inside the `<DT>` that holds its `<H3>`. Hand-written files that close
//! `<DT>` explicitly put the `<DL>` after it instead; both layouts are read.

// LazyLock selectors with hardcoded valid CSS
#![allow(clippy::expect_used)]

use super::epoch_millis;
use crate::config::SizeLimits;
use crate::io::traits::{BookmarkParser, ParseError};
use crate::models::{BookmarkFolder, BookmarkItem, BookmarkNode, ParsedBookmarks};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static LIST_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("dl").expect("BUG: hardcoded CSS selector 'dl' is invalid"));

/// Tree-walking HTML parser.
#[derive(Debug, Clone, Copy)]
pub struct DomParser {
    limits: SizeLimits,
}

impl DomParser {
    /// Creates a parser with the given limits.
    #[must_use]
    pub const fn new(limits: SizeLimits) -> Self {
        Self { limits }
    }

    fn read_list(&self, list: ElementRef<'_>, depth: usize) -> Result<Vec<BookmarkNode>, ParseError> {
        if depth > self.limits.max_nesting_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.limits.max_nesting_depth,
            });
        }

        let mut nodes = Vec::new();
        for entry in list_entries(list) {
            if let Some(node) = self.read_entry(entry, depth)? {
                nodes.push(node);
            }
        }
        Ok(nodes)
    }

    fn read_entry(
        &self,
        entry: ElementRef<'_>,
        depth: usize,
    ) -> Result<Option<BookmarkNode>, ParseError> {
        let Some(head) = child_elements(entry).find(|el| matches!(tag(*el), "a" | "h3")) else {
            return Ok(None);
        };

        if tag(head) == "a" {
            return Ok(read_link(head).map(BookmarkNode::Link));
        }

        let mut folder = BookmarkFolder::new(element_text(head));
        folder.add_date = head.value().attr("add_date").and_then(epoch_millis);
        if let Some(list) = folder_list(head, entry) {
            folder.children = self.read_list(list, depth + 1)?;
        }
        Ok(Some(BookmarkNode::Folder(folder)))
    }
}

impl BookmarkParser for DomParser {
    fn name(&self) -> &'static str {
        "html-dom"
    }

    fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    fn try_parse(&self, content: &str) -> Result<ParsedBookmarks, ParseError> {
        let document = Html::parse_document(content);
        let Some(root) = document.select(&LIST_SELECTOR).next() else {
            return Ok(ParsedBookmarks::empty());
        };
        let nodes = self.read_list(root, 0)?;
        Ok(ParsedBookmarks::from_top_level(nodes))
    }
}

fn tag(element: ElementRef<'_>) -> &str {
    element.value().name()
}

fn child_elements(element: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    element.children().filter_map(ElementRef::wrap)
}

/// `<DT>` entries owned by `list`, in document order.
///
/// Looks through wrapper elements such as the `<p>` that follows `<DL>`, but
/// never into nested lists or into other entries.
fn list_entries(list: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let mut entries = Vec::new();
    let mut stack: Vec<ElementRef<'_>> = child_elements(list).collect();
    stack.reverse();

    while let Some(element) = stack.pop() {
        match tag(element) {
            "dt" => entries.push(element),
            "dl" => {},
            _ => {
                let start = stack.len();
                stack.extend(child_elements(element));
                stack[start..].reverse();
            },
        }
    }

    entries
}

/// The `<DL>` holding a folder's children.
///
/// A folder description (`<DD>`) closes the `<DT>` and swallows the `<DL>`
/// that follows it.
fn folder_list<'a>(header: ElementRef<'a>, entry: ElementRef<'a>) -> Option<ElementRef<'a>> {
    header
        .next_siblings()
        .filter_map(ElementRef::wrap)
        .find(|el| tag(*el) == "dl")
        .or_else(|| {
            entry
                .next_siblings()
                .filter_map(ElementRef::wrap)
                .take_while(|el| tag(*el) != "dt")
                .find_map(|el| match tag(el) {
                    "dl" => Some(el),
                    "dd" => child_elements(el).find(|child| tag(*child) == "dl"),
                    _ => None,
                })
        })
}

fn read_link(anchor: ElementRef<'_>) -> Option<BookmarkItem> {
    let href = anchor.value().attr("href")?;
    if !BookmarkItem::is_importable_url(href) {
        return None;
    }

    let mut item = BookmarkItem::new(element_text(anchor), href);
    item.add_date = anchor.value().attr("add_date").and_then(epoch_millis);
    item.icon = anchor.value().attr("icon").map(str::to_string);
    Some(item)
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}
