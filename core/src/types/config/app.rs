use crate::types::Entry;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Site configuration, persisted as folio.toml.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub shortcuts: ShortcutsConfig,
}

impl AppConfig {
    /// Returns the config file path within the given site directory.
    pub fn path(site_dir: &Path) -> std::path::PathBuf {
        site_dir.join("folio.toml")
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, AppConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), AppConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validates config values and returns list of validation errors.
    /// Returns empty vec if config is valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if !(0.0..=1.0).contains(&self.search.threshold) {
            errors.push("search.threshold must be between 0.0 and 1.0".to_string());
        }

        if self.search.min_query_len == 0 {
            errors.push("search.min_query_len must be at least 1".to_string());
        }

        for (name, value) in [
            ("toggle_search", &self.shortcuts.toggle_search),
            ("open_search", &self.shortcuts.open_search),
            ("close_search", &self.shortcuts.close_search),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("shortcuts.{name} must not be empty"));
            }
        }

        errors
    }

    /// Returns a validated config, replacing invalid values with defaults.
    pub fn with_defaults_for_invalid(&self) -> Self {
        let defaults = Self::default();
        let pick = |value: &String, default: String| {
            if value.trim().is_empty() {
                default
            } else {
                value.clone()
            }
        };

        Self {
            site: self.site.clone(),
            search: SearchSettings {
                threshold: if (0.0..=1.0).contains(&self.search.threshold) {
                    self.search.threshold
                } else {
                    defaults.search.threshold
                },
                min_query_len: if self.search.min_query_len == 0 {
                    defaults.search.min_query_len
                } else {
                    self.search.min_query_len
                },
                ..self.search.clone()
            },
            shortcuts: ShortcutsConfig {
                toggle_search: pick(
                    &self.shortcuts.toggle_search,
                    defaults.shortcuts.toggle_search,
                ),
                open_search: pick(&self.shortcuts.open_search, defaults.shortcuts.open_search),
                close_search: pick(
                    &self.shortcuts.close_search,
                    defaults.shortcuts.close_search,
                ),
            },
        }
    }
}

/// Site identity.
///
/// `title` and `description` are carried for the host's page heads; nothing
/// in this workspace renders them. `author` is the byline fallback.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_site_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_site_title(),
            description: String::new(),
            author: String::new(),
        }
    }
}

impl SiteConfig {
    /// Byline for an entry: its own `author` frontmatter field, else the site author.
    pub fn author_of<'a>(&'a self, entry: &'a Entry) -> &'a str {
        entry
            .data
            .extra
            .get("author")
            .and_then(|value| value.as_str())
            .unwrap_or(self.author.as_str())
    }
}

fn default_site_title() -> String {
    "Portfolio".to_string()
}

/// Fuzzy search tuning.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchSettings {
    /// 0.0 accepts only perfect matches, 1.0 accepts anything.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default)]
    pub case_matching: CaseMatching,
    #[serde(default = "default_true")]
    pub unicode_normalization: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            min_query_len: default_min_query_len(),
            case_matching: CaseMatching::default(),
            unicode_normalization: true,
        }
    }
}

fn default_threshold() -> f64 {
    0.4
}

fn default_min_query_len() -> usize {
    2
}

fn default_true() -> bool {
    true
}

/// Case matching behavior for search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseMatching {
    /// Always case sensitive.
    Sensitive,
    /// Always case insensitive.
    Insensitive,
    /// Case-insensitive unless query contains uppercase.
    #[default]
    Smart,
}

impl fmt::Display for CaseMatching {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMatching::Sensitive => write!(f, "sensitive"),
            CaseMatching::Insensitive => write!(f, "insensitive"),
            CaseMatching::Smart => write!(f, "smart"),
        }
    }
}

/// Search overlay shortcuts.
///
/// Format: `[Mod+][Ctrl+][Alt+][Shift+][Meta+]<e.code>` where `<e.code>` is the
/// DOM KeyboardEvent.code value and `Mod` is Ctrl or Meta (Cmd).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortcutsConfig {
    /// Opens the overlay when closed, closes it when open.
    #[serde(default = "default_toggle_search")]
    pub toggle_search: String,
    /// Opens the overlay; ignored while it is open so typing is not swallowed.
    #[serde(default = "default_open_search")]
    pub open_search: String,
    /// Always closes the overlay.
    #[serde(default = "default_close_search")]
    pub close_search: String,
}

impl Default for ShortcutsConfig {
    fn default() -> Self {
        Self {
            toggle_search: default_toggle_search(),
            open_search: default_open_search(),
            close_search: default_close_search(),
        }
    }
}

fn default_toggle_search() -> String {
    "Mod+KeyK".to_string()
}

fn default_open_search() -> String {
    "Slash".to_string()
}

fn default_close_search() -> String {
    "Escape".to_string()
}

/// Errors that can occur when loading or saving config.
#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
