// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, a `ViewContext` and a `view` function, and leaves
//! state changes to the application's update loop.
//!
//! - [`carousel`] - Project carousel surface (track, buttons, indicators, counter)
//! - [`sections`] - The scrolling page and its sections
//! - [`navbar`] - Navigation bar with hamburger menu and theme toggle
//! - [`notifications`] - Toast notification system for user feedback
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod sections;
pub mod styles;
pub mod theming;
pub mod widgets;
