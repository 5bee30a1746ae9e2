// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a single-page portfolio built with the Iced GUI framework.
//!
//! It shows a looping project carousel, scroll-triggered reveals, a themed
//! navigation bar and simulated contact flows, and demonstrates
//! internationalization with Fluent and user preference management.

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod carousel;
pub mod config;
pub mod error;
pub mod i18n;
pub mod page;
pub mod ui;
