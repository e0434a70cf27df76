//! Netscape Bookmark File writer.

use crate::Result;
use crate::io::formats::write_error;
use crate::models::{Category, Site};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::io::Write;

const HEADER: &str = "<!DOCTYPE NETSCAPE-Bookmark-file-1>
<!-- This is an automatically generated file.
     It will be read and overwritten.
     DO NOT EDIT! -->
<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">
<TITLE>Bookmarks</TITLE>
<H1>Bookmarks</H1>
";

const INDENT: &str = "    ";

/// Renders categories as a Netscape Bookmark File.
///
/// Categories and subcategories become `<H3>` folders; sites become `<A>`
/// entries with an optional `ICON` attribute and `<DD>` description.
#[must_use]
pub fn render_html(categories: &[Category]) -> String {
    let mut out = String::from(HEADER);
    out.push_str("<DL><p>\n");

    for category in categories {
        open_folder(&mut out, 1, &category.name);
        for subcategory in &category.subcategories {
            open_folder(&mut out, 2, &subcategory.name);
            for site in &subcategory.sites {
                push_site(&mut out, 3, site);
            }
            close_folder(&mut out, 2);
        }
        close_folder(&mut out, 1);
    }

    out.push_str("</DL><p>\n");
    out
}

/// Writes [`render_html`] output to `writer`.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_html<W: Write>(categories: &[Category], mut writer: W) -> Result<()> {
    writer
        .write_all(render_html(categories).as_bytes())
        .map_err(|e| write_error("write_html", e))?;
    writer.flush().map_err(|e| write_error("flush_html", e))
}

fn open_folder(out: &mut String, depth: usize, name: &str) {
    let indent = INDENT.repeat(depth);
    out.push_str(&format!("{indent}<DT><H3>{}</H3>\n", encode_text(name)));
    out.push_str(&format!("{indent}<DL><p>\n"));
}

fn close_folder(out: &mut String, depth: usize) {
    out.push_str(&INDENT.repeat(depth));
    out.push_str("</DL><p>\n");
}

fn push_site(out: &mut String, depth: usize, site: &Site) {
    let indent = INDENT.repeat(depth);
    let icon = site
        .favicon
        .as_deref()
        .map(|favicon| format!(" ICON=\"{}\"", encode_double_quoted_attribute(favicon)))
        .unwrap_or_default();

    out.push_str(&format!(
        "{indent}<DT><A HREF=\"{}\"{icon}>{}</A>\n",
        encode_double_quoted_attribute(&site.url),
        encode_text(&site.name)
    ));

    if let Some(description) = &site.description {
        out.push_str(&format!("{indent}<DD>{}\n", encode_text(description)));
    }
}
