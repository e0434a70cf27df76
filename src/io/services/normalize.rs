//! Flattens a parsed tree into the three-level category hierarchy.
//!
//! The result always holds exactly one category, named after the browser.
//! Each top-level folder becomes a subcategory holding every link below it
//! in document order; nested folder identity is discarded. Root links are
//! gathered into a trailing `Genel` subcategory.

use crate::models::{BookmarkItem, BrowserType, Category, ParsedBookmarks, Site, Subcategory};

/// Icon for subcategories built from folders.
pub const FOLDER_ICON: &str = "📁";
/// Name of the subcategory holding root bookmarks.
pub const ROOT_SUBCATEGORY_NAME: &str = "Genel";
/// Icon of the root bookmark subcategory.
pub const ROOT_SUBCATEGORY_ICON: &str = "🌐";

/// Counts describing a normalization, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeSummary {
    /// Subcategories produced.
    pub subcategories: usize,
    /// Sites produced.
    pub sites: usize,
    /// Top-level folders dropped for holding no links.
    pub dropped_folders: usize,
}

impl NormalizeSummary {
    /// Computes the summary for a normalized category list.
    #[must_use]
    pub fn of(categories: &[Category], parsed: &ParsedBookmarks) -> Self {
        let folder_subcategories = categories
            .iter()
            .flat_map(|c| &c.subcategories)
            .filter(|s| s.icon == FOLDER_ICON)
            .count();
        Self {
            subcategories: categories.iter().map(|c| c.subcategories.len()).sum(),
            sites: categories.iter().map(Category::site_count).sum(),
            dropped_folders: parsed.folders.len().saturating_sub(folder_subcategories),
        }
    }
}

/// Converts a parsed tree into a single browser category.
#[must_use]
pub fn normalize(parsed: &ParsedBookmarks, browser: BrowserType) -> Vec<Category> {
    let mut category = Category::new(browser.category_name(), browser.icon());

    for folder in &parsed.folders {
        let sites: Vec<Site> = folder.descendant_links().into_iter().map(to_site).collect();
        if sites.is_empty() {
            continue;
        }
        category.subcategories.push(Subcategory {
            name: folder.title.clone(),
            icon: FOLDER_ICON.to_string(),
            sites,
        });
    }

    if !parsed.root_bookmarks.is_empty() {
        category.subcategories.push(Subcategory {
            name: ROOT_SUBCATEGORY_NAME.to_string(),
            icon: ROOT_SUBCATEGORY_ICON.to_string(),
            sites: parsed.root_bookmarks.iter().map(to_site).collect(),
        });
    }

    let categories = vec![category];
    let summary = NormalizeSummary::of(&categories, parsed);
    tracing::debug!(
        browser = browser.as_str(),
        subcategories = summary.subcategories,
        sites = summary.sites,
        dropped_folders = summary.dropped_folders,
        "normalized bookmark tree"
    );
    categories
}

fn to_site(item: &BookmarkItem) -> Site {
    Site {
        name: item.title.clone(),
        url: item.url.clone(),
        description: None,
        favicon: item.icon.clone(),
    }
}
