//! Integration tests for bookmark export.
//!
//! Exported HTML must re-import cleanly and CSV must survive any field
//! content.

// Integration tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use bookmark_interchange::{
    BookmarkParser, BrowserType, Category, DetectedFormat, ExportFormat, ExportService,
    HtmlBookmarkParser, HtmlStrategy, SizeLimits, Site, Subcategory, detect_format,
    import_bookmarks,
};
use std::str::FromStr;

fn categories() -> Vec<Category> {
    vec![
        Category::new("Bookmarks - Firefox", "🦊")
            .with_subcategory(
                Subcategory::new("Dev & Tools", "📁")
                    .with_site(
                        Site::new("Rust <Book>", "https://doc.rust-lang.org/book/?a=1&b=2")
                            .with_description("The book")
                            .with_favicon("data:image/png;base64,AAAA"),
                    )
                    .with_site(Site::new("crates.io", "https://crates.io")),
            )
            .with_subcategory(
                Subcategory::new("Genel", "🌐")
                    .with_site(Site::new("GitHub", "https://github.com"))
                    .with_site(Site::new("GitHub again", "https://github.com")),
            ),
        Category::new("Work", "💼").with_subcategory(
            Subcategory::new("Docs", "📁")
                .with_site(Site::new("Say \"hi\", world", "https://docs.example/x")),
        ),
    ]
}

fn sorted_urls(categories: &[Category]) -> Vec<String> {
    let mut urls: Vec<String> = categories
        .iter()
        .flat_map(|c| &c.subcategories)
        .flat_map(|s| &s.sites)
        .map(|site| site.url.clone())
        .collect();
    urls.sort();
    urls
}

fn strategies() -> Vec<HtmlStrategy> {
    if HtmlStrategy::dom_available() {
        vec![HtmlStrategy::Dom, HtmlStrategy::Regex]
    } else {
        vec![HtmlStrategy::Regex]
    }
}

#[test]
fn test_html_export_reimports_same_urls() {
    let file = ExportService::new()
        .export(&categories(), ExportFormat::Html)
        .unwrap();
    assert_eq!(file.content_type, "text/html");
    assert_eq!(file.filename, "bookmarks.html");
    assert_eq!(detect_format(&file.content), DetectedFormat::Html);

    for strategy in strategies() {
        let parsed = HtmlBookmarkParser::with_strategy(strategy, SizeLimits::default())
            .parse(&file.content);

        let mut urls: Vec<String> = parsed
            .folders
            .iter()
            .flat_map(|f| f.descendant_links())
            .chain(parsed.root_bookmarks.iter())
            .map(|item| item.url.clone())
            .collect();
        urls.sort();
        assert_eq!(urls, sorted_urls(&categories()), "{strategy}");
    }
}

#[test]
fn test_html_export_preserves_names_and_icons() {
    let file = ExportService::new()
        .export(&categories(), ExportFormat::Html)
        .unwrap();
    assert!(file.content.contains("<DT><H3>Dev &amp; Tools</H3>"));
    assert!(file.content.contains("<DD>The book"));

    let parsed = HtmlBookmarkParser::with_strategy(HtmlStrategy::Regex, SizeLimits::default())
        .parse(&file.content);
    let rust = parsed
        .folders
        .iter()
        .flat_map(|f| f.descendant_links())
        .find(|item| item.url.starts_with("https://doc.rust-lang.org"))
        .unwrap();
    assert_eq!(rust.title, "Rust <Book>");
    assert_eq!(rust.url, "https://doc.rust-lang.org/book/?a=1&b=2");
    assert_eq!(rust.icon.as_deref(), Some("data:image/png;base64,AAAA"));
}

#[test]
fn test_import_export_import_keeps_sites() {
    let html = r#"<!DOCTYPE NETSCAPE-Bookmark-file-1>
<DL><p>
    <DT><A HREF="https://github.com">GitHub</A>
    <DT><H3>Dev</H3>
    <DL><p>
        <DT><A HREF="https://stackoverflow.com">SO</A>
    </DL><p>
</DL><p>"#;

    let first = import_bookmarks(html, BrowserType::Firefox).unwrap();
    let exported = ExportService::new()
        .export(&first.categories, ExportFormat::Html)
        .unwrap();
    let second = import_bookmarks(&exported.content, BrowserType::Firefox).unwrap();

    assert_eq!(sorted_urls(&second.categories), sorted_urls(&first.categories));
}

#[test]
fn test_csv_field_with_comma_and_quote_parses_back() {
    let file = ExportService::new()
        .export(&categories(), ExportFormat::Csv)
        .unwrap();
    assert_eq!(file.content_type, "text/csv");
    assert!(
        file.content
            .starts_with("Category,Subcategory,Name,URL,Description\n")
    );

    let mut reader = csv::Reader::from_reader(file.content.as_bytes());
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 5);

    let quoted = rows.iter().find(|r| &r[1] == "Docs").unwrap();
    assert_eq!(&quoted[0], "Work");
    assert_eq!(&quoted[2], "Say \"hi\", world");
    assert_eq!(&quoted[4], "");

    let described = rows.iter().find(|r| &r[2] == "Rust <Book>").unwrap();
    assert_eq!(&described[1], "Dev & Tools");
    assert_eq!(&described[4], "The book");
}

#[test]
fn test_json_export_round_trips_hierarchy() {
    let file = ExportService::new()
        .export(&categories(), ExportFormat::Json)
        .unwrap();
    assert_eq!(file.content_type, "application/json");
    let back: Vec<Category> = serde_json::from_str(&file.content).unwrap();
    assert_eq!(back, categories());
}

#[test]
fn test_export_format_parsing() {
    assert_eq!(ExportFormat::from_str("HTM").unwrap(), ExportFormat::Html);
    assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
    assert!(ExportFormat::from_str("yaml").is_err());
}

#[test]
fn test_empty_export() {
    let service = ExportService::new();
    let csv = service.export(&[], ExportFormat::Csv).unwrap();
    assert_eq!(csv.content, "Category,Subcategory,Name,URL,Description\n");

    let json = service.export(&[], ExportFormat::Json).unwrap();
    assert_eq!(json.content, "[]");
}
