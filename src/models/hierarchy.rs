//! Category → Subcategory → Site hierarchy.
//!
//! These are the shapes handed to the persistence layer after an import and
//! read back from it for an export. Ids, ownership and ordering are assigned
//! downstream.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Browser a bookmark file came from.
///
/// Only used to label the synthesized category; detection and parsing are
/// driven by content alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BrowserType {
    /// Mozilla Firefox.
    #[default]
    Firefox,
    /// Google Chrome and other Chromium browsers.
    Chrome,
}

impl BrowserType {
    /// Returns the lowercase identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Firefox => "firefox",
            Self::Chrome => "chrome",
        }
    }

    /// Returns the human-readable browser name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Firefox => "Firefox",
            Self::Chrome => "Chrome",
        }
    }

    /// Returns the icon of the category synthesized for this browser.
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Firefox => "🦊",
            Self::Chrome => "🟢",
        }
    }

    /// Returns the name of the category synthesized for this browser.
    #[must_use]
    pub fn category_name(&self) -> String {
        format!("Bookmarks - {}", self.display_name())
    }
}

impl FromStr for BrowserType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "firefox" => Ok(Self::Firefox),
            "chrome" => Ok(Self::Chrome),
            other => Err(Error::InvalidInput(format!("Unknown browser type: {other}"))),
        }
    }
}

impl fmt::Display for BrowserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A top-level grouping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name.
    pub name: String,
    /// Emoji icon.
    pub icon: String,
    /// Subcategories in display order.
    pub subcategories: Vec<Subcategory>,
}

impl Category {
    /// Creates an empty category.
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            subcategories: Vec::new(),
        }
    }

    /// Appends a subcategory.
    #[must_use]
    pub fn with_subcategory(mut self, subcategory: Subcategory) -> Self {
        self.subcategories.push(subcategory);
        self
    }

    /// Total number of sites across all subcategories.
    #[must_use]
    pub fn site_count(&self) -> usize {
        self.subcategories.iter().map(|s| s.sites.len()).sum()
    }
}

/// A second-level grouping holding sites.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    /// Subcategory name.
    pub name: String,
    /// Emoji icon.
    pub icon: String,
    /// Sites in display order.
    pub sites: Vec<Site>,
}

impl Subcategory {
    /// Creates an empty subcategory.
    #[must_use]
    pub fn new(name: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            sites: Vec::new(),
        }
    }

    /// Appends a site.
    #[must_use]
    pub fn with_site(mut self, site: Site) -> Self {
        self.sites.push(site);
        self
    }
}

/// A stored link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Display name.
    pub name: String,
    /// Target URL.
    pub url: String,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Favicon, usually a `data:` URI.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
}

impl Site {
    /// Creates a site with no description or favicon.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: None,
            favicon: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the favicon.
    #[must_use]
    pub fn with_favicon(mut self, favicon: impl Into<String>) -> Self {
        self.favicon = Some(favicon.into());
        self
    }
}
