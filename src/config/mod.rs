// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[buttons]` - Visibility, strategy and the custom button list
//!
//! # Path Resolution
//!
//! `settings.toml` lives in the first directory found among:
//!
//! 1. the `base_dir` given to `load_with_override()`/`save_with_override()`
//! 2. the `--config-dir` CLI argument, recorded with [`set_config_dir`]
//! 3. the `LENS_BUTTONS_CONFIG_DIR` environment variable (ignored when empty)
//! 4. `LensButtons/` under the platform config directory (`dirs::config_dir`)
//!
//! `load_from_path()`/`save_to_path()` bypass the lookup entirely.
//!
//! # Examples
//!
//! ```no_run
//! use lens_buttons::buttons::ButtonsStrategy;
//! use lens_buttons::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.buttons.strategy = Some(ButtonsStrategy::Full);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```
//!
//! A custom strip in `settings.toml`:
//!
//! ```toml
//! [buttons]
//! strategy = "custom"
//!
//! [[buttons.buttons]]
//! type = "custom"
//! class_name = "share-image"
//! title = "Share"
//! aria_label = "Share the current image"
//!
//! [[buttons.buttons]]
//! type = "close"
//! ```

use crate::buttons::{ButtonsConfig, ButtonsStrategy};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const CONFIG_FILE: &str = "settings.toml";

/// Directory created under the platform config directory.
const APP_DIR_NAME: &str = "LensButtons";

/// Environment variable naming the directory that holds `settings.toml`.
pub const CONFIG_DIR_ENV: &str = "LENS_BUTTONS_CONFIG_DIR";

static CLI_CONFIG_DIR: OnceLock<PathBuf> = OnceLock::new();

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Button strip settings.
    #[serde(default)]
    pub buttons: ButtonsConfig,
}

/// Records the `--config-dir` argument for the rest of the process.
///
/// Returns `false`, leaving the first directory in place, if one was
/// already recorded.
pub fn set_config_dir(dir: PathBuf) -> bool {
    CLI_CONFIG_DIR.set(dir).is_ok()
}

/// Directory holding `settings.toml`, see the module docs for the lookup order.
/// `None` only when no platform config directory exists either.
fn config_dir(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    base_dir
        .or_else(|| CLI_CONFIG_DIR.get().cloned())
        .or_else(|| {
            std::env::var_os(CONFIG_DIR_ENV)
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from)
        })
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
}

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    config_dir(base_dir).map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "failed to load settings");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let table: toml::Table = toml::from_str(&content)?;
    warn_on_unknown_strategy(&table);
    let config: Config = toml::Value::Table(table).try_into()?;
    Ok(config)
}

/// Unknown strategy names load as `default`; say so once per load.
fn warn_on_unknown_strategy(table: &toml::Table) {
    let Some(raw) = table
        .get("buttons")
        .and_then(|buttons| buttons.get("strategy"))
        .and_then(toml::Value::as_str)
    else {
        return;
    };
    if raw.parse::<ButtonsStrategy>().is_err() {
        tracing::warn!(strategy = raw, "unknown buttons strategy, using default");
    }
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}
