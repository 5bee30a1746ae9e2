// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, touch and window events are turned into top-level
//! messages here; the carousel decides what they mean in `update`.

use super::{Message, TouchGesture};
use crate::carousel::{ArrowKey, AutoAdvance, CarouselState};
use crate::config::defaults::TICK_INTERVAL_MS;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, touch, window, Subscription};
use std::time::Duration;

/// Routes arrow keys, finger gestures and window resizes.
///
/// Keys already captured by a widget (a focused text input) are left alone.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: Key::Named(named),
            ..
        }) if status == event::Status::Ignored => match named {
            Named::ArrowLeft => Some(Message::ArrowKey(ArrowKey::Left)),
            Named::ArrowRight => Some(Message::ArrowKey(ArrowKey::Right)),
            _ => None,
        },
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::Touch(TouchGesture::Pressed(position)))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::Touch(TouchGesture::Lifted(position)))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => {
            Some(Message::Touch(TouchGesture::Lost))
        }
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Whether the carousel has a deadline pending.
pub fn carousel_needs_ticks(state: &CarouselState) -> bool {
    state.animating_until.is_some() || matches!(state.auto_advance, AutoAdvance::Scheduled(_))
}

/// Creates the periodic tick that drives carousel timers, form delays and
/// toast auto-dismiss. Idle pages do not tick.
pub fn create_tick_subscription(
    carousel_pending: bool,
    forms_busy: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if carousel_pending || forms_busy || has_notifications {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
