// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Carousel**: Transition lock, auto-advance interval, swipe threshold
//! - **Navigation**: Section highlight probe and scroll compensation
//! - **Reveal**: Intersection thresholds for scroll-triggered animations
//! - **Forms**: Simulated network latency for the page forms
//! - **Tick**: Granularity of the deadline evaluation loop

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default duration of the slide transition lock (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 500;

/// Minimum transition lock duration (in milliseconds).
pub const MIN_TRANSITION_MS: u64 = 100;

/// Maximum transition lock duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2_000;

/// Default interval between automatic slide advances (in milliseconds).
pub const DEFAULT_AUTO_ADVANCE_MS: u64 = 5_000;

/// Minimum auto-advance interval (in milliseconds).
pub const MIN_AUTO_ADVANCE_MS: u64 = 1_000;

/// Maximum auto-advance interval (in milliseconds).
pub const MAX_AUTO_ADVANCE_MS: u64 = 60_000;

/// Default horizontal displacement a swipe must exceed (in logical pixels).
pub const DEFAULT_SWIPE_THRESHOLD_PX: f32 = 50.0;

/// Minimum swipe threshold (in logical pixels).
pub const MIN_SWIPE_THRESHOLD_PX: f32 = 10.0;

/// Maximum swipe threshold (in logical pixels).
pub const MAX_SWIPE_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Offset added to the scroll position when picking the highlighted section.
pub const NAV_HIGHLIGHT_PROBE_PX: f32 = 100.0;

/// Space left above a section when scrolling to it (navbar height).
pub const NAV_SCROLL_OFFSET_PX: f32 = 80.0;

// ==========================================================================
// Reveal Defaults
// ==========================================================================

/// Visible ratio at which a skill category animates in.
pub const SKILL_REVEAL_THRESHOLD: f32 = 0.5;

/// Bottom shrink applied to the viewport when observing skill categories.
pub const SKILL_REVEAL_BOTTOM_MARGIN_PX: f32 = 50.0;

/// Visible ratio at which a project card animates in.
pub const PROJECT_REVEAL_THRESHOLD: f32 = 0.2;

// ==========================================================================
// Form Defaults
// ==========================================================================

/// Simulated latency of the contact form submission (in milliseconds).
pub const CONTACT_SEND_DELAY_MS: u64 = 1_500;

/// Simulated latency of the newsletter subscription (in milliseconds).
pub const NEWSLETTER_DELAY_MS: u64 = 1_000;

/// Simulated time spent preparing the CV download (in milliseconds).
pub const CV_PREPARE_DELAY_MS: u64 = 1_500;

/// Delay between the download starting and the button re-enabling.
pub const CV_FINISH_DELAY_MS: u64 = 500;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Interval of the periodic tick that evaluates pending deadlines.
pub const TICK_INTERVAL_MS: u64 = 50;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Carousel validation
    assert!(MIN_TRANSITION_MS > 0);
    assert!(MAX_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS >= MIN_TRANSITION_MS);
    assert!(DEFAULT_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(MAX_AUTO_ADVANCE_MS >= MIN_AUTO_ADVANCE_MS);
    assert!(DEFAULT_AUTO_ADVANCE_MS >= MIN_AUTO_ADVANCE_MS);
    assert!(DEFAULT_AUTO_ADVANCE_MS <= MAX_AUTO_ADVANCE_MS);
    assert!(MIN_SWIPE_THRESHOLD_PX > 0.0);
    assert!(MAX_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX >= MIN_SWIPE_THRESHOLD_PX);
    assert!(DEFAULT_SWIPE_THRESHOLD_PX <= MAX_SWIPE_THRESHOLD_PX);

    // Reveal validation
    assert!(SKILL_REVEAL_THRESHOLD > 0.0 && SKILL_REVEAL_THRESHOLD <= 1.0);
    assert!(PROJECT_REVEAL_THRESHOLD > 0.0 && PROJECT_REVEAL_THRESHOLD <= 1.0);

    // Tick must be finer than the shortest deadline it evaluates
    assert!(TICK_INTERVAL_MS < MIN_TRANSITION_MS);
};
