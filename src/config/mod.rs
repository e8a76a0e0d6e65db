// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[catalog]` - Shape and latency of the generated catalog, slow-fetch warning
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_SHELF_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_shelf::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("ko".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "ko").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Catalog and loading settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Products per page.
    #[serde(default = "default_page_size", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,

    /// Number of pages before the end of data.
    #[serde(default = "default_page_count", skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// Simulated latency per page in milliseconds.
    #[serde(default = "default_latency_ms", skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,

    /// Seconds before an in-flight fetch raises a warning.
    #[serde(
        default = "default_slow_fetch_warning_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub slow_fetch_warning_secs: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            page_count: default_page_count(),
            latency_ms: default_latency_ms(),
            slow_fetch_warning_secs: default_slow_fetch_warning_secs(),
        }
    }
}

impl CatalogConfig {
    /// Products per page, clamped to the supported range.
    #[must_use]
    pub fn page_size(&self) -> usize {
        clamp_page_size(self.page_size.unwrap_or(DEFAULT_PAGE_SIZE))
    }

    /// Page count, clamped to the supported range.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        clamp_page_count(self.page_count.unwrap_or(DEFAULT_PAGE_COUNT))
    }

    /// Simulated latency, clamped to the supported range.
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(clamp_latency_ms(
            self.latency_ms.unwrap_or(DEFAULT_LATENCY_MS),
        ))
    }

    /// Slow-fetch warning threshold, clamped to the supported range.
    #[must_use]
    pub fn slow_fetch_warning(&self) -> Duration {
        Duration::from_secs(clamp_slow_fetch_warning_secs(
            self.slow_fetch_warning_secs
                .unwrap_or(DEFAULT_SLOW_FETCH_WARNING_SECS),
        ))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Catalog and loading settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_page_size() -> Option<usize> {
    Some(DEFAULT_PAGE_SIZE)
}

fn default_page_count() -> Option<u32> {
    Some(DEFAULT_PAGE_COUNT)
}

fn default_latency_ms() -> Option<u64> {
    Some(DEFAULT_LATENCY_MS)
}

fn default_slow_fetch_warning_secs() -> Option<u64> {
    Some(DEFAULT_SLOW_FETCH_WARNING_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

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
                    tracing::warn!(path = %path.display(), %err, "failed to load config");
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

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

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("ko".to_string()),
                theme_mode: ThemeMode::Light,
            },
            catalog: CatalogConfig {
                page_size: Some(25),
                page_count: Some(3),
                latency_ms: Some(0),
                slow_fetch_warning_secs: Some(10),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\nlanguage = \"ko\"\n").expect("write");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.general.language.as_deref(), Some("ko"));
        assert_eq!(loaded.catalog, CatalogConfig::default());
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n").expect("write");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Dark\"\n").expect("parse");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn accessors_clamp_out_of_range_values() {
        let catalog = CatalogConfig {
            page_size: Some(0),
            page_count: Some(u32::MAX),
            latency_ms: Some(u64::MAX),
            slow_fetch_warning_secs: Some(0),
        };
        assert_eq!(catalog.page_size(), MIN_PAGE_SIZE);
        assert_eq!(catalog.page_count(), MAX_PAGE_COUNT);
        assert_eq!(catalog.latency(), Duration::from_millis(MAX_LATENCY_MS));
        assert_eq!(
            catalog.slow_fetch_warning(),
            Duration::from_secs(MIN_SLOW_FETCH_WARNING_SECS)
        );
    }

    #[test]
    fn accessors_use_defaults_when_unset() {
        let catalog = CatalogConfig {
            page_size: None,
            page_count: None,
            latency_ms: None,
            slow_fetch_warning_secs: None,
        };
        assert_eq!(catalog.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.page_count(), DEFAULT_PAGE_COUNT);
        assert_eq!(catalog.latency(), Duration::from_millis(DEFAULT_LATENCY_MS));
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("en-US".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_with_override_warns_on_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[catalog\n").expect("write");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(loaded, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(loaded, Config::default());
        assert!(warning.is_none());
    }
}
