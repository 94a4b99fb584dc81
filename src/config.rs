//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/partscope/partscope.toml`
//! 3. Environment variables: `PARTSCOPE_*` prefix
//! 4. Command-line overrides (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// Unified configuration for partscope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Path to the catalog snapshot JSON (default: ./catalog.json)
    pub catalog_path: PathBuf,
    /// Auto-expand the first brand when rendering the tree
    pub auto_expand_first: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("catalog.json"),
            auto_expand_first: true,
        }
    }
}

/// Raw settings for intermediate parsing (fields are Option to detect
/// "not specified" during layered merging).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub catalog_path: Option<PathBuf>,
    pub auto_expand_first: Option<bool>,
}

/// Get the XDG config directory for partscope.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "partscope").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("partscope.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Merge overlay config onto self (base). Overlay wins where specified.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            catalog_path: overlay
                .catalog_path
                .clone()
                .unwrap_or_else(|| self.catalog_path.clone()),
            auto_expand_first: overlay.auto_expand_first.unwrap_or(self.auto_expand_first),
        }
    }

    /// Expand shell variables and tilde in path-like fields.
    ///
    /// Handles `~`, `$VAR`, and `${VAR}` syntax.
    fn expand_paths(&mut self) {
        let expanded = expand_env_vars(self.catalog_path.to_string_lossy().as_ref());
        self.catalog_path = PathBuf::from(expanded);
    }

    /// Load settings with layered precedence.
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/partscope/partscope.toml`
    /// 3. Environment variables: `PARTSCOPE_*` prefix
    pub fn load() -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply PARTSCOPE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let builder =
            Config::builder().add_source(Environment::with_prefix("PARTSCOPE").separator("__"));

        let config = builder.build().map_err(config_err)?;

        if let Ok(val) = config.get_string("catalog_path") {
            settings.catalog_path = PathBuf::from(val);
        }
        if let Ok(val) = config.get_bool("auto_expand_first") {
            settings.auto_expand_first = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# partscope configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/partscope/partscope.toml
#   Env:    PARTSCOPE_* environment variables (explicit overrides)

# Path to the catalog snapshot JSON exported by the backend
# catalog_path = "~/catalogs/fleet.json"

# Auto-expand the first brand when rendering the tree
# auto_expand_first = true
"#
        .to_string()
    }
}

/// Expand environment variables in a path string.
///
/// Supports `$VAR`, `${VAR}`, and `~` for the home directory.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
