// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle: queuing, display timing, and dismissal.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

/// Maximum number of notifications visible at once.
pub const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

/// Visible toasts plus the overflow queue.
#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `notification` now, or queues it when `MAX_VISIBLE` are up.
    ///
    /// Warnings and errors are also written to the log.
    pub fn push(&mut self, mut notification: Notification, now: Instant) {
        match notification.severity() {
            Severity::Warning => log::warn!("Notification: {}", notification.message_key()),
            Severity::Error => log::error!("Notification: {}", notification.message_key()),
            Severity::Success | Severity::Info => {
                log::debug!("Notification: {}", notification.message_key());
            }
        }

        if self.visible.len() < MAX_VISIBLE {
            notification.mark_shown(now);
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue(now);
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible toast whose time is up.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired(now))
            .map(Notification::id)
            .collect();

        for id in expired {
            self.dismiss(id, now);
        }
    }

    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id, now);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Queued toasts start their timer when promoted.
    fn promote_from_queue(&mut self, now: Instant) {
        while self.visible.len() < MAX_VISIBLE {
            let Some(mut notification) = self.queue.pop_front() else {
                break;
            };
            notification.mark_shown(now);
            self.visible.push_back(notification);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn push_queues_when_visible_is_full() {
        let now = Instant::now();
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::success(format!("test-{i}")), now);
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);

        manager.push(Notification::success("queued"), now);
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let first = Notification::error("first");
        let first_id = first.id();
        manager.push(first, now);
        for i in 1..=MAX_VISIBLE {
            manager.push(Notification::error(format!("n-{i}")), now);
        }
        assert_eq!(manager.queued_count(), 1);

        assert!(manager.dismiss(first_id, now));
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 0);
        assert!(manager.visible().all(|n| n.shown_at().is_some()));
    }

    #[test]
    fn dismiss_unknown_returns_false() {
        let mut manager = Manager::new();
        let stray = Notification::success("temp").id();
        assert!(!manager.dismiss(stray, Instant::now()));
    }

    #[test]
    fn tick_expires_by_severity() {
        let start = Instant::now();
        let mut manager = Manager::new();
        manager.push(Notification::success("ok"), start);
        manager.push(Notification::warning("careful"), start);
        manager.push(Notification::error("broken"), start);

        manager.tick(start + Duration::from_secs(3));
        assert_eq!(manager.visible_count(), 2);
        manager.tick(start + Duration::from_secs(5));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(start + Duration::from_secs(600));
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn promoted_toast_gets_a_full_duration() {
        let start = Instant::now();
        let mut manager = Manager::new();
        for _ in 0..MAX_VISIBLE {
            manager.push(Notification::success("first-wave"), start);
        }
        manager.push(Notification::success("late"), start);

        let promoted_at = start + Duration::from_secs(3);
        manager.tick(promoted_at);
        assert_eq!(manager.visible_count(), 1);
        assert_eq!(manager.queued_count(), 0);

        manager.tick(promoted_at + Duration::from_millis(2999));
        assert_eq!(manager.visible_count(), 1);
        manager.tick(promoted_at + Duration::from_secs(3));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn handle_message_dismiss() {
        let now = Instant::now();
        let mut manager = Manager::new();
        let notification = Notification::info("hello");
        let id = notification.id();
        manager.push(notification, now);

        manager.handle_message(&Message::Dismiss(id), now);
        assert_eq!(manager.visible_count(), 0);
    }
}
