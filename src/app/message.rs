// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::carousel::ArrowKey;
use crate::ui::navbar;
use crate::ui::notifications;
use crate::ui::sections;
use iced::widget::scrollable::Viewport;
use iced::{Point, Size};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(sections::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    PageScrolled(Viewport),
    /// Arrow key pressed outside any focused input.
    ArrowKey(ArrowKey),
    /// Raw touch gesture, routed to the carousel when it lands on the track.
    Touch(TouchGesture),
    WindowResized(Size),
    Tick(Instant), // Drives carousel timers, form delays and toast expiry
}

/// Finger events forwarded from the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TouchGesture {
    Pressed(Point),
    Lifted(Point),
    Lost,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing Fluent `.ftl` files for custom builds.
    pub i18n_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
