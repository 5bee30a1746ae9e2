// SPDX-License-Identifier: MPL-2.0
//! Carousel newtypes.
//!
//! This module provides type-safe wrappers for carousel tuning values,
//! ensuring they are always within valid ranges.

use crate::config::{
    DEFAULT_AUTO_ADVANCE_MS, DEFAULT_SWIPE_THRESHOLD_PX, DEFAULT_TRANSITION_MS,
    MAX_AUTO_ADVANCE_MS, MAX_SWIPE_THRESHOLD_PX, MAX_TRANSITION_MS, MIN_AUTO_ADVANCE_MS,
    MIN_SWIPE_THRESHOLD_PX, MIN_TRANSITION_MS,
};
use crate::error::CarouselError;
use std::num::NonZeroUsize;
use std::time::Duration;

// =============================================================================
// SlideCount
// =============================================================================

/// Number of slides in a carousel, guaranteed to be at least one.
///
/// # Example
///
/// ```
/// use iced_folio::carousel::SlideCount;
///
/// let count = SlideCount::new(4).unwrap();
/// assert_eq!(count.get(), 4);
/// assert_eq!(count.last_index(), 3);
///
/// assert!(SlideCount::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideCount(NonZeroUsize);

impl SlideCount {
    /// Creates a slide count, rejecting an empty deck.
    pub fn new(count: usize) -> Result<Self, CarouselError> {
        NonZeroUsize::new(count)
            .map(Self)
            .ok_or(CarouselError::EmptyDeck)
    }

    /// Returns the count as usize.
    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Returns the index of the last slide.
    #[must_use]
    pub fn last_index(self) -> usize {
        self.0.get() - 1
    }

    /// Returns true if `index` addresses an existing slide.
    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < self.0.get()
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Length of the animation lock that follows an index change.
///
/// Clamped to 100 ms – 2 s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a transition duration, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_TRANSITION_MS, MAX_TRANSITION_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(DEFAULT_TRANSITION_MS)
    }
}

// =============================================================================
// AutoAdvanceInterval
// =============================================================================

/// Period of the auto-advance timer.
///
/// Clamped to 1 s – 60 s. An interval shorter than the transition lock is
/// allowed; advances that land inside the lock are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceInterval(u64);

impl AutoAdvanceInterval {
    /// Creates an interval, clamping to valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTO_ADVANCE_MS, MAX_AUTO_ADVANCE_MS))
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoAdvanceInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTO_ADVANCE_MS)
    }
}

// =============================================================================
// SwipeThreshold
// =============================================================================

/// Horizontal displacement a swipe must strictly exceed, in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThreshold(f32);

impl SwipeThreshold {
    /// Creates a threshold, clamping to valid range. NaN falls back to the default.
    #[must_use]
    pub fn new(pixels: f32) -> Self {
        if pixels.is_nan() {
            return Self::default();
        }
        Self(pixels.clamp(MIN_SWIPE_THRESHOLD_PX, MAX_SWIPE_THRESHOLD_PX))
    }

    /// Returns the raw pixel value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SwipeThreshold {
    fn default() -> Self {
        Self(DEFAULT_SWIPE_THRESHOLD_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slide_count_rejects_zero() {
        assert_eq!(SlideCount::new(0), Err(CarouselError::EmptyDeck));
    }

    #[test]
    fn slide_count_contains_only_valid_indices() {
        let count = SlideCount::new(3).unwrap();
        assert!(count.contains(0));
        assert!(count.contains(2));
        assert!(!count.contains(3));
    }

    #[test]
    fn single_slide_has_zero_last_index() {
        assert_eq!(SlideCount::new(1).unwrap().last_index(), 0);
    }

    #[test]
    fn transition_clamps_to_valid_range() {
        assert_eq!(TransitionDuration::from_millis(0).millis(), MIN_TRANSITION_MS);
        assert_eq!(
            TransitionDuration::from_millis(u64::MAX).millis(),
            MAX_TRANSITION_MS
        );
        assert_eq!(TransitionDuration::from_millis(750).millis(), 750);
    }

    #[test]
    fn transition_default_is_half_a_second() {
        assert_eq!(
            TransitionDuration::default().as_duration(),
            Duration::from_millis(500)
        );
    }

    #[test]
    fn auto_advance_clamps_to_valid_range() {
        assert_eq!(AutoAdvanceInterval::from_millis(1).millis(), MIN_AUTO_ADVANCE_MS);
        assert_eq!(
            AutoAdvanceInterval::from_millis(3_600_000).millis(),
            MAX_AUTO_ADVANCE_MS
        );
    }

    #[test]
    fn auto_advance_default_is_five_seconds() {
        assert_eq!(
            AutoAdvanceInterval::default().as_duration(),
            Duration::from_secs(5)
        );
    }

    #[test]
    fn swipe_threshold_clamps_and_ignores_nan() {
        assert_eq!(SwipeThreshold::new(1.0).value(), MIN_SWIPE_THRESHOLD_PX);
        assert_eq!(SwipeThreshold::new(9_999.0).value(), MAX_SWIPE_THRESHOLD_PX);
        assert_eq!(SwipeThreshold::new(f32::NAN), SwipeThreshold::default());
        assert_eq!(SwipeThreshold::new(75.0).value(), 75.0);
    }
}
