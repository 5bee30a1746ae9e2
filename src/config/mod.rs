// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Project carousel tuning (auto-advance, transition, swipe)
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `ICED_FOLIO_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::carousel::{
    AutoAdvanceInterval, ButtonEdges, CarouselSettings, SwipeThreshold, TransitionDuration,
};
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Project carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Advance slides automatically while the pointer is away.
    #[serde(default = "default_auto_advance", skip_serializing_if = "Option::is_none")]
    pub auto_advance: Option<bool>,

    /// Interval between automatic advances (milliseconds).
    #[serde(
        default = "default_auto_advance_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_advance_interval_ms: Option<u64>,

    /// Duration of the transition lock (milliseconds).
    #[serde(default = "default_transition_ms", skip_serializing_if = "Option::is_none")]
    pub transition_ms: Option<u64>,

    /// Horizontal displacement a swipe must exceed (logical pixels).
    #[serde(
        default = "default_swipe_threshold_px",
        skip_serializing_if = "Option::is_none"
    )]
    pub swipe_threshold_px: Option<f32>,

    /// Whether prev/next buttons disable at the edges or wrap like the keyboard.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_edges: Option<ButtonEdges>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_advance: default_auto_advance(),
            auto_advance_interval_ms: default_auto_advance_interval_ms(),
            transition_ms: default_transition_ms(),
            swipe_threshold_px: default_swipe_threshold_px(),
            button_edges: Some(ButtonEdges::default()),
        }
    }
}

impl CarouselConfig {
    /// Resolves the optional fields into validated controller settings.
    #[must_use]
    pub fn to_settings(&self) -> CarouselSettings {
        CarouselSettings {
            transition: TransitionDuration::from_millis(
                self.transition_ms.unwrap_or(DEFAULT_TRANSITION_MS),
            ),
            auto_advance_interval: AutoAdvanceInterval::from_millis(
                self.auto_advance_interval_ms
                    .unwrap_or(DEFAULT_AUTO_ADVANCE_MS),
            ),
            auto_advance: self.auto_advance.unwrap_or(true),
            swipe_threshold: SwipeThreshold::new(
                self.swipe_threshold_px.unwrap_or(DEFAULT_SWIPE_THRESHOLD_PX),
            ),
            button_edges: self.button_edges.unwrap_or_default(),
        }
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

    /// Project carousel settings.
    #[serde(default)]
    pub carousel: CarouselConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn default_auto_advance() -> Option<bool> {
    Some(true)
}

fn default_auto_advance_interval_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_ADVANCE_MS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_swipe_threshold_px() -> Option<f32> {
    Some(DEFAULT_SWIPE_THRESHOLD_PX)
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

/// Returns the config file path with an optional override.
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
/// default config with a warning message key explaining what went wrong.
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
                    log::warn!("Failed to load config from {}: {}", path.display(), err);
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
    use std::time::Duration;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            carousel: CarouselConfig {
                auto_advance: Some(false),
                auto_advance_interval_ms: Some(8_000),
                transition_ms: Some(300),
                swipe_threshold_px: Some(80.0),
                button_edges: Some(ButtonEdges::Wrap),
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
    fn unknown_theme_mode_is_rejected() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[general]\ntheme_mode = \"sepia\"\n")
            .expect("failed to write config");

        assert!(load_from_path(&config_path).is_err());
    }

    #[test]
    fn bad_theme_beside_valid_carousel_section_is_an_error_not_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[general]\ntheme_mode = \"purple\"\n[carousel]\ntransition_ms = 900\nbutton_edges = \"wrap\"\n",
        )
        .expect("failed to write config");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn flat_file_without_sections_loads_as_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "theme = \"dark\"\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("unknown keys are ignored");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::Light);
        assert_eq!(config.general.language, None);
        assert_eq!(config.carousel.auto_advance, Some(true));
        assert_eq!(
            config.carousel.auto_advance_interval_ms,
            Some(DEFAULT_AUTO_ADVANCE_MS)
        );
        assert_eq!(config.carousel.transition_ms, Some(DEFAULT_TRANSITION_MS));
        assert_eq!(config.carousel.button_edges, Some(ButtonEdges::Disable));
    }

    #[test]
    fn carousel_section_resolves_into_clamped_settings() {
        let section = CarouselConfig {
            auto_advance: None,
            auto_advance_interval_ms: Some(10),
            transition_ms: Some(999_999),
            swipe_threshold_px: None,
            button_edges: None,
        };

        let settings = section.to_settings();
        assert!(settings.auto_advance);
        assert_eq!(
            settings.auto_advance_interval.as_duration(),
            Duration::from_millis(MIN_AUTO_ADVANCE_MS)
        );
        assert_eq!(
            settings.transition.as_duration(),
            Duration::from_millis(MAX_TRANSITION_MS)
        );
        assert_eq!(settings.swipe_threshold.value(), DEFAULT_SWIPE_THRESHOLD_PX);
        assert_eq!(settings.button_edges, ButtonEdges::Disable);
    }

    #[test]
    fn interval_shorter_than_transition_is_kept_unclamped() {
        let section = CarouselConfig {
            auto_advance: Some(true),
            auto_advance_interval_ms: Some(MIN_AUTO_ADVANCE_MS),
            transition_ms: Some(MAX_TRANSITION_MS),
            swipe_threshold_px: None,
            button_edges: None,
        };

        let settings = section.to_settings();
        assert_eq!(
            settings.auto_advance_interval.as_duration(),
            Duration::from_millis(MIN_AUTO_ADVANCE_MS)
        );
        assert_eq!(
            settings.transition.as_duration(),
            Duration::from_millis(MAX_TRANSITION_MS)
        );
        assert!(settings.auto_advance_interval.as_duration() < settings.transition.as_duration());
    }

    #[test]
    fn save_with_override_and_load_with_override_round_trip() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            ..Config::default()
        };

        save_with_override(&config, Some(base_dir.clone())).expect("failed to save");
        let (loaded, warning) = load_with_override(Some(base_dir));

        assert!(warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
        assert_eq!(loaded.general.language, Some("fr".to_string()));
    }

    #[test]
    fn load_with_override_reports_warning_on_corrupt_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[general\nbroken")
            .expect("failed to write corrupt file");

        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(loaded, Config::default());
        assert!(warning.is_none());
    }
}
