// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! It handles language detection, translation file loading, and string formatting.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` bundles, optionally overridden from a directory
//! - Runtime language switching
//! - Fallback to `en-US` when a message is missing from the current locale

pub mod fluent;
