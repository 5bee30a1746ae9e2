// SPDX-License-Identifier: MPL-2.0
//! Configuration persistence logic.
//!
//! The theme mode is the only preference the page changes at runtime.

use std::path::PathBuf;

use crate::config;
use crate::ui::theming::ThemeMode;

/// Writes the theme mode to `settings.toml`, keeping every other value.
///
/// Returns a notification key when the file could not be written. Guarded
/// during tests so unit tests never touch the user's config directory.
pub fn persist_theme_mode(theme_mode: ThemeMode) -> Option<String> {
    if cfg!(test) {
        return None;
    }

    persist_theme_mode_with_override(theme_mode, None)
}

/// Same as [`persist_theme_mode`] with an explicit config directory.
///
/// A file that failed to load is left untouched so its other values survive.
pub(crate) fn persist_theme_mode_with_override(
    theme_mode: ThemeMode,
    base_dir: Option<PathBuf>,
) -> Option<String> {
    let (mut cfg, warning) = config::load_with_override(base_dir.clone());
    if let Some(key) = warning {
        log::warn!("Not saving theme mode: existing config could not be read");
        return Some(key);
    }

    cfg.general.theme_mode = theme_mode;

    match config::save_with_override(&cfg, base_dir) {
        Ok(()) => None,
        Err(error) => {
            log::error!("Failed to save config: {}", error);
            Some("notification-config-save-error".to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::tempdir;

    const CONFIG_FILE: &str = "settings.toml";

    #[test]
    fn unreadable_config_is_left_untouched() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILE);
        let original =
            "[general]\ntheme_mode = \"purple\"\n[carousel]\ntransition_ms = 900\nbutton_edges = \"wrap\"\n";
        fs::write(&path, original).expect("failed to write config");

        let warning =
            persist_theme_mode_with_override(ThemeMode::Dark, Some(temp_dir.path().to_path_buf()));

        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        let on_disk = fs::read_to_string(&path).expect("config still readable");
        assert_eq!(on_disk, original);
    }

    #[test]
    fn theme_mode_is_written_and_carousel_values_kept() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();
        let mut cfg = Config::default();
        cfg.carousel.transition_ms = Some(900);
        config::save_with_override(&cfg, Some(base_dir.clone())).expect("failed to save");

        let warning = persist_theme_mode_with_override(ThemeMode::Dark, Some(base_dir.clone()));
        assert!(warning.is_none());

        let (loaded, load_warning) = config::load_with_override(Some(base_dir));
        assert!(load_warning.is_none());
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
        assert_eq!(loaded.carousel.transition_ms, Some(900));
    }

    #[test]
    fn missing_config_is_created_with_theme_mode() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let warning = persist_theme_mode_with_override(ThemeMode::Dark, Some(base_dir.clone()));
        assert!(warning.is_none());
        assert!(temp_dir.path().join(CONFIG_FILE).exists());

        let (loaded, _) = config::load_with_override(Some(base_dir));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }
}
