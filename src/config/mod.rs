//! Configuration management.

mod limits;

pub use limits::SizeLimits;

use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::{Error, Result};

/// Main configuration for bookmark interchange.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterchangeConfig {
    /// Size limits for uploaded files.
    pub limits: SizeLimits,
    /// Which HTML parsing strategy to use.
    pub html_strategy: StrategyPreference,
}

/// Requested HTML parsing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyPreference {
    /// DOM walk when compiled in, regex scanner otherwise.
    #[default]
    Auto,
    /// Always the DOM walk (falls back to the scanner without the `dom` feature).
    Dom,
    /// Always the regex scanner.
    Regex,
}

impl StrategyPreference {
    /// Returns the configuration keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Dom => "dom",
            Self::Regex => "regex",
        }
    }
}

impl FromStr for StrategyPreference {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "dom" => Ok(Self::Dom),
            "regex" | "scan" => Ok(Self::Regex),
            other => Err(Error::InvalidInput(format!(
                "Unknown HTML strategy: {other} (expected auto, dom or regex)"
            ))),
        }
    }
}

impl fmt::Display for StrategyPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Configuration file structure (for TOML parsing).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// HTML strategy keyword.
    pub html_strategy: Option<String>,
    /// Limits section.
    pub limits: Option<ConfigFileLimits>,
}

/// Limits section in config file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileLimits {
    /// Bookmark cap.
    pub max_bookmarks: Option<usize>,
    /// Folder cap.
    pub max_folders: Option<usize>,
    /// Root bookmark cap.
    pub max_root_bookmarks: Option<usize>,
    /// Folder name length.
    pub max_folder_name_chars: Option<usize>,
    /// Title length.
    pub max_title_chars: Option<usize>,
    /// DOM nesting depth.
    pub max_nesting_depth: Option<usize>,
}

impl InterchangeConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a value
    /// is invalid.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| Error::OperationFailed {
            operation: "read_config_file".to_string(),
            cause: format!("{}: {e}", path.display()),
        })?;

        Self::from_toml_str(&contents)
    }

    /// Parses configuration from TOML text. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is invalid.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents).map_err(|e| Error::OperationFailed {
            operation: "parse_config_file".to_string(),
            cause: e.to_string(),
        })?;

        Self::from_config_file(file)
    }

    /// Converts a `ConfigFile` to `InterchangeConfig`.
    fn from_config_file(file: ConfigFile) -> Result<Self> {
        let mut config = Self::default();

        if let Some(strategy) = file.html_strategy {
            config.html_strategy = strategy.parse()?;
        }
        if let Some(limits) = file.limits {
            let target = &mut config.limits;
            if let Some(v) = limits.max_bookmarks {
                target.max_bookmarks = v;
            }
            if let Some(v) = limits.max_folders {
                target.max_folders = v;
            }
            if let Some(v) = limits.max_root_bookmarks {
                target.max_root_bookmarks = v;
            }
            if let Some(v) = limits.max_folder_name_chars {
                target.max_folder_name_chars = v;
            }
            if let Some(v) = limits.max_title_chars {
                target.max_title_chars = v;
            }
            if let Some(v) = limits.max_nesting_depth {
                target.max_nesting_depth = v;
            }
        }

        config.limits.validate()?;
        Ok(config)
    }

    /// Sets the size limits.
    #[must_use]
    pub const fn with_limits(mut self, limits: SizeLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Sets the HTML strategy preference.
    #[must_use]
    pub const fn with_html_strategy(mut self, strategy: StrategyPreference) -> Self {
        self.html_strategy = strategy;
        self
    }
}
