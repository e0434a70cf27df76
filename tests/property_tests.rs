//! Property-based tests for bookmark parsing.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Bookmark counts are exact up to the size cap
//! - Oversized files are truncated to the configured caps
//! - Arbitrary or truncated input never panics
//! - Normalization never invents or loses sites

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use bookmark_interchange::{
    BookmarkParser, BrowserType, Error, HtmlBookmarkParser, HtmlStrategy, JsonBookmarkParser,
    SizeLimits, normalize, parse_bookmarks,
};
use proptest::prelude::*;

/// Builds a Netscape file with `roots` root links followed by one folder per
/// entry of `folders`, each holding that many links.
fn netscape(roots: usize, folders: &[usize]) -> String {
    let mut html = String::from("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n<TITLE>Bookmarks</TITLE>\n<DL><p>\n");
    for i in 0..roots {
        html.push_str(&format!("    <DT><A HREF=\"https://root{i}.example\">Root {i}</A>\n"));
    }
    for (f, &size) in folders.iter().enumerate() {
        html.push_str(&format!("    <DT><H3>Folder {f}</H3>\n    <DL><p>\n"));
        for i in 0..size {
            html.push_str(&format!(
                "        <DT><A HREF=\"https://f{f}-{i}.example\" ADD_DATE=\"{i}\">Link {f}.{i}</A>\n"
            ));
        }
        html.push_str("    </DL><p>\n");
    }
    html.push_str("</DL><p>\n");
    html
}

fn strategies() -> Vec<HtmlStrategy> {
    if HtmlStrategy::dom_available() {
        vec![HtmlStrategy::Dom, HtmlStrategy::Regex]
    } else {
        vec![HtmlStrategy::Regex]
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Property: under the cap, every http anchor is counted.
    #[test]
    fn prop_count_exact_under_cap(
        roots in 0usize..100,
        folders in prop::collection::vec(0usize..30, 0..30),
    ) {
        let expected = roots + folders.iter().sum::<usize>();
        let html = netscape(roots, &folders);

        for strategy in strategies() {
            let parsed = HtmlBookmarkParser::with_strategy(strategy, SizeLimits::default()).parse(&html);
            prop_assert_eq!(parsed.total_bookmarks, expected);
            prop_assert_eq!(parsed.total_folders, folders.len());
            prop_assert_eq!(parsed.root_bookmarks.len(), roots);
        }
    }

    /// Property: over the cap, totals and vectors are clamped.
    #[test]
    fn prop_truncated_over_cap(
        roots in 401usize..700,
        folders in prop::collection::vec(40usize..80, 15..25),
    ) {
        let html = netscape(roots, &folders);

        for strategy in strategies() {
            let parsed = HtmlBookmarkParser::with_strategy(strategy, SizeLimits::default()).parse(&html);
            prop_assert_eq!(parsed.total_bookmarks, 1000);
            prop_assert!(parsed.folders.len() <= 10);
            prop_assert!(parsed.root_bookmarks.len() <= 500);
            prop_assert!(parsed.total_folders <= 10);
        }
    }

    /// Property: normalization keeps exactly the links of the parsed tree.
    #[test]
    fn prop_normalize_preserves_sites(
        roots in 0usize..20,
        folders in prop::collection::vec(0usize..10, 0..10),
    ) {
        let parsed = parse_bookmarks(&netscape(roots, &folders)).unwrap();
        let categories = normalize(&parsed, BrowserType::Firefox);

        prop_assert_eq!(categories.len(), 1);
        prop_assert_eq!(categories[0].site_count(), parsed.total_bookmarks);
        let non_empty = folders.iter().filter(|&&n| n > 0).count() + usize::from(roots > 0);
        prop_assert_eq!(categories[0].subcategories.len(), non_empty);
    }
}

proptest! {
    /// Property: arbitrary text never panics; it is either unsupported or parsed.
    #[test]
    fn prop_arbitrary_input_never_panics(input in "\\PC{0,300}") {
        match parse_bookmarks(&input) {
            Ok(parsed) => prop_assert!(parsed.root_bookmarks.len() <= parsed.total_bookmarks),
            Err(e) => prop_assert!(matches!(e, Error::UnsupportedFormat)),
        }
    }

    /// Property: markup soup behind a Netscape doctype never panics.
    #[test]
    fn prop_tag_soup_never_panics(
        parts in prop::collection::vec(
            prop::sample::select(vec![
                "<DL>", "</DL>", "<p>", "<DT>", "<H3>", "</H3>", "<A HREF=\"https://x.example\">",
                "</A>", "text", "&amp;", "<A", "HREF=", "\"", ">", "<", "<DD>",
            ]),
            0..200,
        ),
    ) {
        let html = format!("<!DOCTYPE NETSCAPE-Bookmark-file-1>{}", parts.concat());
        for strategy in strategies() {
            let parsed = HtmlBookmarkParser::with_strategy(strategy, SizeLimits::default()).parse(&html);
            prop_assert!(parsed.total_bookmarks <= parts.len());
        }
    }

    /// Property: any prefix of a valid export parses without panicking.
    #[test]
    fn prop_truncated_export_never_panics(cut in 0usize..2000) {
        let html = netscape(5, &[3, 0, 7]);
        let end = cut.min(html.len());
        for strategy in strategies() {
            let parsed = HtmlBookmarkParser::with_strategy(strategy, SizeLimits::default())
                .parse(&html[..end]);
            prop_assert!(parsed.total_bookmarks <= 15);
        }
    }

    /// Property: truncated Firefox JSON fails soft to an empty tree.
    #[test]
    fn prop_truncated_json_is_empty(cut in 1usize..80) {
        let json = r#"{"children":[{"type":"text/x-moz-place","uri":"https://a.com","title":"A"}]}"#;
        let end = cut.min(json.len() - 1);
        let parsed = JsonBookmarkParser::new(SizeLimits::default()).parse(&json[..end]);
        prop_assert!(parsed.is_empty());
        prop_assert_eq!(parsed.total_bookmarks, 0);
    }
}
