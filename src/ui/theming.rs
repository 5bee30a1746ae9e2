// SPDX-License-Identifier: MPL-2.0
//! Light/Dark/System theme selection and the navbar toggle.

use iced::Theme;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    /// Follow the desktop preference.
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_prefers_dark(),
        }
    }

    /// The explicit mode opposite to what is currently shown.
    #[must_use]
    pub fn toggled(self) -> ThemeMode {
        Self::opposite_of(self.is_dark())
    }

    /// Explicit mode opposite to an effective dark/light state.
    #[must_use]
    pub fn opposite_of(is_dark: bool) -> ThemeMode {
        if is_dark {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        }
    }

    /// Glyph on the toggle button: a sun while dark, a moon while light.
    #[must_use]
    pub fn toggle_icon(self) -> &'static str {
        toggle_icon_for(self.is_dark())
    }

    /// i18n key describing what pressing the toggle will do.
    #[must_use]
    pub fn toggle_label_key(self) -> &'static str {
        if self.is_dark() {
            "theme-switch-to-light"
        } else {
            "theme-switch-to-dark"
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

/// Defaults to light when detection fails, like a fresh page visit.
fn system_prefers_dark() -> bool {
    matches!(dark_light::detect(), Ok(dark_light::Mode::Dark))
}

#[must_use]
pub fn toggle_icon_for(is_dark: bool) -> &'static str {
    if is_dark {
        "☀"
    } else {
        "☾"
    }
}
