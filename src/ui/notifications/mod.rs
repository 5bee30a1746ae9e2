// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts replace blocking dialogs: form confirmations, validation warnings
//! and configuration problems show up briefly in the bottom-right corner.
//!
//! # Components
//!
//! - [`notification`] - `Notification` payload with severity levels
//! - [`manager`] - `Manager` for queuing and lifecycle management
//! - [`toast`] - Toast widget rendering
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Manager, Notification};
//!
//! let mut manager = Manager::new();
//! manager.push(Notification::success("notification-contact-sent"), Instant::now());
//!
//! // In the view, layer the toasts over the page
//! if let Some(overlay) = Toast::view_overlay(&manager, &i18n) {
//!     stack = stack.push(overlay.map(Message::Notification));
//! }
//! ```
//!
//! Success and info toasts last 3s, warnings 5s, errors until dismissed.
//! At most three are visible; the rest wait in a queue.

mod manager;
mod notification;
mod toast;

pub use manager::{Manager, Message as NotificationMessage, MAX_VISIBLE};
pub use notification::{Notification, NotificationId, Severity};
pub use toast::Toast;
