//! Regex strategy: needs no HTML parser.
//!
//! The text is split on `<h3>` openings. Links before the first header are
//! root bookmarks; every later segment is one folder whose name is the header
//! text and whose links are every anchor up to the next header.

// LazyLock regexes with hardcoded valid patterns
#![allow(clippy::expect_used)]

use super::epoch_millis;
use crate::config::SizeLimits;
use crate::io::traits::{BookmarkParser, ParseError};
use crate::models::{BookmarkFolder, BookmarkItem, BookmarkNode, ParsedBookmarks};
use regex::Regex;
use std::sync::LazyLock;

static FOLDER_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<h3\b([^>]*)>").expect("static regex: folder open"));

static FOLDER_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</h3\s*>").expect("static regex: folder close"));

static ANCHOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<a\s([^>]*)>(.*?)</a\s*>").expect("static regex: anchor"));

static HREF_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)href\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("static regex: href")
});

static ICON_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)icon\s*=\s*(?:"([^"]*)"|'([^']*)')"#).expect("static regex: icon")
});

static ADD_DATE_ATTR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)add_date\s*=\s*["']?(\d+)"#).expect("static regex: add_date")
});

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("static regex: tag"));

/// Regex-based HTML parser.
#[derive(Debug, Clone, Copy)]
pub struct ScanParser {
    limits: SizeLimits,
}

impl ScanParser {
    /// Creates a parser with the given limits.
    #[must_use]
    pub const fn new(limits: SizeLimits) -> Self {
        Self { limits }
    }

    fn scan_links(&self, text: &str) -> Vec<BookmarkItem> {
        ANCHOR
            .captures_iter(text)
            .filter_map(|caps| {
                let attrs = caps.get(1)?.as_str();
                let href = attr_value(&HREF_ATTR, attrs)?;
                if !BookmarkItem::is_importable_url(&href) {
                    return None;
                }

                let inner = caps.get(2).map_or("", |m| m.as_str());
                let mut item = BookmarkItem::new(
                    truncate_chars(&clean_text(inner), self.limits.max_title_chars),
                    href,
                );
                item.add_date = add_date(attrs);
                item.icon = attr_value(&ICON_ATTR, attrs);
                Some(item)
            })
            .collect()
    }
}

impl BookmarkParser for ScanParser {
    fn name(&self) -> &'static str {
        "html-regex"
    }

    fn limits(&self) -> &SizeLimits {
        &self.limits
    }

    fn try_parse(&self, content: &str) -> Result<ParsedBookmarks, ParseError> {
        let headers: Vec<(usize, usize, &str)> = FOLDER_OPEN
            .captures_iter(content)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let attrs = caps.get(1).map_or("", |m| m.as_str());
                Some((whole.start(), whole.end(), attrs))
            })
            .collect();

        let root_end = headers.first().map_or(content.len(), |(start, _, _)| *start);
        let mut nodes: Vec<BookmarkNode> = self
            .scan_links(&content[..root_end])
            .into_iter()
            .map(BookmarkNode::Link)
            .collect();

        for (i, (_, header_end, attrs)) in headers.iter().enumerate() {
            let segment_end = headers
                .get(i + 1)
                .map_or(content.len(), |(next_start, _, _)| *next_start);
            let segment = &content[*header_end..segment_end];

            let (name, body) = match FOLDER_CLOSE.find(segment) {
                Some(close) => (&segment[..close.start()], &segment[close.end()..]),
                None => segment.split_at(segment.find('<').unwrap_or(segment.len())),
            };

            let mut folder = BookmarkFolder::new(truncate_chars(
                &clean_text(name),
                self.limits.max_folder_name_chars,
            ));
            folder.add_date = add_date(attrs);
            folder.children = self
                .scan_links(body)
                .into_iter()
                .map(BookmarkNode::Link)
                .collect();
            nodes.push(BookmarkNode::Folder(folder));
        }

        Ok(ParsedBookmarks::from_top_level(nodes))
    }
}

fn attr_value(pattern: &Regex, attrs: &str) -> Option<String> {
    let caps = pattern.captures(attrs)?;
    let raw = caps.get(1).or_else(|| caps.get(2))?.as_str();
    Some(html_escape::decode_html_entities(raw).into_owned())
}

fn add_date(attrs: &str) -> Option<i64> {
    ADD_DATE_ATTR
        .captures(attrs)
        .and_then(|caps| epoch_millis(caps.get(1)?.as_str()))
}

/// Strips tags, decodes entities and trims.
fn clean_text(fragment: &str) -> String {
    let stripped = TAG.replace_all(fragment, "");
    html_escape::decode_html_entities(&stripped).trim().to_string()
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
