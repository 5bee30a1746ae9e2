// SPDX-License-Identifier: MPL-2.0
//! Horizontal swipe detection on the slide track.

use super::newtypes::SwipeThreshold;

/// Direction of a recognised swipe, named after finger motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved leftward: reveal the next slide.
    Left,
    /// Finger moved rightward: reveal the previous slide.
    Right,
}

/// Remembers where a gesture started and classifies it when it ends.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the horizontal position where a touch (or drag) began.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Abandons the gesture in progress.
    pub fn cancel(&mut self) {
        self.start_x = None;
    }

    /// Returns true between `begin` and `finish`.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_x.is_some()
    }

    /// Ends the gesture at `x`.
    ///
    /// Returns a direction only when the displacement strictly exceeds
    /// `threshold`. A `finish` with no matching `begin` yields `None`.
    pub fn finish(&mut self, x: f32, threshold: SwipeThreshold) -> Option<SwipeDirection> {
        let start = self.start_x.take()?;
        let difference = start - x;

        if difference.abs() > threshold.value() {
            if difference > 0.0 {
                Some(SwipeDirection::Left)
            } else {
                Some(SwipeDirection::Right)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> SwipeThreshold {
        SwipeThreshold::default()
    }

    #[test]
    fn leftward_swipe_past_threshold_is_left() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0);
        assert_eq!(tracker.finish(140.0, threshold()), Some(SwipeDirection::Left));
    }

    #[test]
    fn rightward_swipe_past_threshold_is_right() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(100.0);
        assert_eq!(tracker.finish(180.0, threshold()), Some(SwipeDirection::Right));
    }

    #[test]
    fn short_swipe_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(100.0);
        assert_eq!(tracker.finish(70.0, threshold()), None);
    }

    #[test]
    fn displacement_equal_to_threshold_is_ignored() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(100.0);
        assert_eq!(tracker.finish(50.0, threshold()), None);
    }

    #[test]
    fn finish_without_begin_is_ignored() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.finish(0.0, threshold()), None);
    }

    #[test]
    fn finish_consumes_the_gesture() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        assert!(tracker.is_tracking());
        let _ = tracker.finish(100.0, threshold());
        assert!(!tracker.is_tracking());
        assert_eq!(tracker.finish(0.0, threshold()), None);
    }

    #[test]
    fn cancel_drops_the_start_point() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(300.0);
        tracker.cancel();
        assert_eq!(tracker.finish(0.0, threshold()), None);
    }
}
