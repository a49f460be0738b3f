//! Dock configuration file.
//!
//! A small JSON document read once at startup. It is looked up at
//! `$MENUDOCK_CONFIG_PATH` or `<config_dir>/menudock/config.json`; a missing
//! default file simply yields [`DockConfig::default`]. Every field is optional
//! in the file.
//!
//! ```json
//! {
//!   "items": [{ "href": "#about", "label": "About" }],
//!   "breakpoint": 80,
//!   "theme": "nord"
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use menudock_types::MenuItem;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::path_processing::app_file_path;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "MENUDOCK_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";

pub const DEFAULT_BRAND: &str = "DEMO";
pub const DEFAULT_TITLE: &str = "MenuDock";
pub const DEFAULT_BREAKPOINT: u16 = 80;
pub const DEFAULT_MAX_WIDTH: u16 = 100;
pub const DEFAULT_EXPANDED_PERCENT: u16 = 85;
pub const DEFAULT_TRANSITION_MS: u32 = 600;
const MAX_TRANSITION_MS: u32 = 10_000;

/// Error surfaced when reading or validating the configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure (for example, permissions or missing explicit file).
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file exists but is not valid JSON for [`DockConfig`].
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A `HREF=LABEL` menu item could not be parsed.
    #[error("invalid menu item '{0}': expected HREF=LABEL")]
    InvalidItem(String),
    /// A value is outside its accepted range.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Everything the dock and its host page can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DockConfig {
    /// Menu entries; `None` lets the host page decide.
    pub items: Option<Vec<MenuItem>>,
    /// Text of the centered brand link.
    pub brand: String,
    /// Page title faded in on startup.
    pub title: String,
    /// Viewports narrower than this many columns use the overlay menu.
    pub breakpoint: u16,
    /// Upper bound for the expanded dock width, in columns.
    pub max_width: u16,
    /// Expanded dock width as a percentage of the viewport width.
    pub expanded_percent: u16,
    /// Duration of the width transition.
    pub transition_ms: u32,
    /// Preferred theme identifier.
    pub theme: Option<String>,
}

impl Default for DockConfig {
    fn default() -> Self {
        Self {
            items: None,
            brand: DEFAULT_BRAND.to_string(),
            title: DEFAULT_TITLE.to_string(),
            breakpoint: DEFAULT_BREAKPOINT,
            max_width: DEFAULT_MAX_WIDTH,
            expanded_percent: DEFAULT_EXPANDED_PERCENT,
            transition_ms: DEFAULT_TRANSITION_MS,
            theme: None,
        }
    }
}

impl DockConfig {
    /// Loads the configuration.
    ///
    /// With an explicit `path` the file must exist. Without one, the default
    /// location is used and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(explicit) => Self::read(explicit)?,
            None => {
                let resolved = default_config_path();
                match Self::read(&resolved) {
                    Err(ConfigError::Io(error)) if error.kind() == std::io::ErrorKind::NotFound => {
                        debug!(path = %resolved.display(), "No config file found; using defaults");
                        Self::default()
                    }
                    other => other?,
                }
            }
        };
        config.validate()?;
        Ok(config)
    }

    fn read(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Checks value ranges. Duplicate labels are accepted but logged, since
    /// items are identified by position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.breakpoint == 0 {
            return Err(ConfigError::Invalid("breakpoint must be greater than zero".into()));
        }
        if self.max_width == 0 {
            return Err(ConfigError::Invalid("max_width must be greater than zero".into()));
        }
        if !(1..=100).contains(&self.expanded_percent) {
            return Err(ConfigError::Invalid(format!(
                "expanded_percent must be within 1..=100, got {}",
                self.expanded_percent
            )));
        }
        if self.transition_ms > MAX_TRANSITION_MS {
            return Err(ConfigError::Invalid(format!(
                "transition_ms must be at most {MAX_TRANSITION_MS}, got {}",
                self.transition_ms
            )));
        }
        if let Some(items) = &self.items {
            if let Some(blank) = items.iter().find(|item| item.label.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!("menu item '{}' has an empty label", blank.href)));
            }
            let mut seen = HashSet::new();
            for item in items {
                if !seen.insert(item.label.as_str()) {
                    warn!(label = %item.label, "Duplicate menu label; items are keyed by position");
                }
            }
        }
        Ok(())
    }
}

/// Resolves the default configuration path, honoring [`CONFIG_PATH_ENV`].
pub fn default_config_path() -> PathBuf {
    app_file_path(CONFIG_PATH_ENV, CONFIG_FILE_NAME)
}

/// Parses a `HREF=LABEL` pair. The first `=` separates the two parts, so a
/// label may itself contain `=`.
pub fn parse_menu_item(raw: &str) -> Result<MenuItem, ConfigError> {
    let (href, label) = raw.split_once('=').ok_or_else(|| ConfigError::InvalidItem(raw.to_string()))?;
    let href = href.trim();
    let label = label.trim();
    if href.is_empty() || label.is_empty() {
        return Err(ConfigError::InvalidItem(raw.to_string()));
    }
    Ok(MenuItem::new(href, label))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn defaults_match_documented_values() {
        let config = DockConfig::default();
        assert_eq!(config.items, None);
        assert_eq!(config.brand, "DEMO");
        assert_eq!(config.breakpoint, 80);
        assert_eq!(config.expanded_percent, 85);
        assert_eq!(config.transition_ms, 600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_string_lossy().as_ref()), || {
            let config = DockConfig::load(None).unwrap();
            assert_eq!(config, DockConfig::default());
        });
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.json");
        let error = DockConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(error, ConfigError::Io(_)));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r##"{ "items": [{ "href": "#work", "label": "Work" }], "breakpoint": 100, "theme": "nord" }"##,
        )
        .unwrap();

        let config = DockConfig::load(Some(&path)).unwrap();
        assert_eq!(config.items, Some(vec![MenuItem::new("#work", "Work")]));
        assert_eq!(config.breakpoint, 100);
        assert_eq!(config.theme.as_deref(), Some("nord"));
        assert_eq!(config.max_width, DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn env_override_is_used_for_default_location() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dock.json");
        fs::write(&path, r#"{ "brand": "ACME" }"#).unwrap();
        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_string_lossy().as_ref()), || {
            assert_eq!(default_config_path(), path);
            let config = DockConfig::load(None).unwrap();
            assert_eq!(config.brand, "ACME");
        });
    }

    #[test]
    fn invalid_json_reports_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();
        match DockConfig::load(Some(&path)) {
            Err(ConfigError::Parse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let mut config = DockConfig {
            expanded_percent: 0,
            ..DockConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        config.expanded_percent = 85;
        config.breakpoint = 0;
        assert!(config.validate().is_err());

        config.breakpoint = 80;
        config.transition_ms = 60_000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_labels_are_accepted() {
        let config = DockConfig {
            items: Some(vec![MenuItem::new("#a", "Same"), MenuItem::new("#b", "Same")]),
            ..DockConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_labels_are_rejected() {
        let config = DockConfig {
            items: Some(vec![MenuItem::new("#a", "  ")]),
            ..DockConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn parses_menu_item_pairs() {
        assert_eq!(parse_menu_item("#about=About").unwrap(), MenuItem::new("#about", "About"));
        assert_eq!(parse_menu_item(" /work = Work ").unwrap(), MenuItem::new("/work", "Work"));
        assert_eq!(parse_menu_item("#eq=a=b").unwrap(), MenuItem::new("#eq", "a=b"));
    }

    #[test]
    fn rejects_malformed_menu_items() {
        for raw in ["About", "=About", "#about=", "="] {
            assert!(matches!(parse_menu_item(raw), Err(ConfigError::InvalidItem(_))), "{raw}");
        }
    }
}
