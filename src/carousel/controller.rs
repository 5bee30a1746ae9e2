// SPDX-License-Identifier: MPL-2.0
//! The carousel state machine.
//!
//! Every input (buttons, indicators, swipes, arrow keys, pointer hover,
//! resizes, and clock ticks) goes through [`CarouselController::dispatch`].
//! Time-based behavior is expressed as deadlines checked against an injected
//! [`Clock`], so the controller never spawns timers of its own.

use super::clock::{Clock, SystemClock};
use super::frame::{ButtonEdges, Frame, SurfaceLayout};
use super::newtypes::{AutoAdvanceInterval, SlideCount, SwipeThreshold, TransitionDuration};
use super::swipe::{SwipeDirection, SwipeTracker};
use crate::error::CarouselError;
use std::time::Instant;

/// Tuning knobs resolved from the `[carousel]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselSettings {
    pub transition: TransitionDuration,
    pub auto_advance_interval: AutoAdvanceInterval,
    /// Whether the recurring timer runs at all.
    pub auto_advance: bool,
    pub swipe_threshold: SwipeThreshold,
    pub button_edges: ButtonEdges,
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            transition: TransitionDuration::default(),
            auto_advance_interval: AutoAdvanceInterval::default(),
            auto_advance: true,
            swipe_threshold: SwipeThreshold::default(),
            button_edges: ButtonEdges::default(),
        }
    }
}

/// Arrow keys the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowKey {
    Left,
    Right,
}

/// Everything that can happen to the carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    /// Next button, or any other "forward" request.
    Next,
    /// Previous button, or any other "backward" request.
    Previous,
    /// Indicator click.
    GoTo(usize),
    /// Keyboard arrow.
    Key(ArrowKey),
    /// Touch or drag started at this horizontal position.
    SwipeStart(f32),
    /// Touch or drag ended at this horizontal position.
    SwipeEnd(f32),
    /// Gesture interrupted (finger lost, pointer left the window).
    SwipeCancel,
    /// Pointer entered the carousel container.
    PointerEnter,
    /// Pointer left the carousel container.
    PointerLeave,
    /// Container size changed.
    Resize,
    /// Periodic clock check.
    Tick,
}

/// Why an input had no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// A transition is still in flight.
    Animating,
    /// Direct navigation to the slide already shown.
    AlreadyActive,
    /// Swipe ended below the threshold or without a start.
    NoSwipe,
}

/// Result of a dispatched input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The active slide changed and a new frame was rendered.
    Moved { from: usize, to: usize },
    /// The input was dropped.
    Ignored(IgnoreReason),
    /// The current frame was rendered again without moving.
    Rendered,
    /// Auto-advance was suspended.
    Paused,
    /// Auto-advance was rescheduled after a pause.
    Resumed,
    /// Nothing observable happened.
    Idle,
}

/// Scheduling state of the recurring advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoAdvance {
    /// Disabled in settings, or never started.
    Stopped,
    /// Suspended while the pointer hovers the carousel.
    Paused,
    /// Next automatic advance is due at this instant.
    Scheduled(Instant),
}

/// Mutable core of the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    pub current: usize,
    pub slide_count: SlideCount,
    /// Set during the transition window that follows an index change.
    pub animating_until: Option<Instant>,
    pub auto_advance: AutoAdvance,
}

/// Owns the carousel state and is the only code that changes `current`.
#[derive(Debug)]
pub struct CarouselController<C: Clock = SystemClock> {
    state: CarouselState,
    settings: CarouselSettings,
    layout: SurfaceLayout,
    clock: C,
    swipe: SwipeTracker,
    frame: Frame,
    frame_serial: u64,
}

impl CarouselController<SystemClock> {
    /// Creates a controller driven by the wall clock.
    #[must_use]
    pub fn new(slides: SlideCount, layout: SurfaceLayout, settings: CarouselSettings) -> Self {
        Self::with_clock(slides, layout, settings, SystemClock)
    }
}

impl<C: Clock> CarouselController<C> {
    /// Creates a controller on the first slide, renders the initial frame,
    /// and starts auto-advance when enabled.
    ///
    /// The initial render does not engage the transition lock.
    pub fn with_clock(
        slides: SlideCount,
        layout: SurfaceLayout,
        settings: CarouselSettings,
        clock: C,
    ) -> Self {
        let frame = Frame::compute(0, slides, layout, settings.button_edges);
        let mut controller = Self {
            state: CarouselState {
                current: 0,
                slide_count: slides,
                animating_until: None,
                auto_advance: AutoAdvance::Stopped,
            },
            settings,
            layout,
            clock,
            swipe: SwipeTracker::new(),
            frame,
            frame_serial: 1,
        };
        controller.start_auto_advance();
        controller
    }

    /// Routes one input to the matching operation.
    ///
    /// Only [`Input::GoTo`] can fail, when its index is out of range.
    pub fn dispatch(&mut self, input: Input) -> Result<Outcome, CarouselError> {
        let outcome = match input {
            Input::Next | Input::Key(ArrowKey::Right) => self.next(),
            Input::Previous | Input::Key(ArrowKey::Left) => self.previous(),
            Input::GoTo(index) => self.go_to(index)?,
            Input::SwipeStart(x) => {
                self.swipe.begin(x);
                Outcome::Idle
            }
            Input::SwipeEnd(x) => match self.swipe.finish(x, self.settings.swipe_threshold) {
                Some(SwipeDirection::Left) => self.next(),
                Some(SwipeDirection::Right) => self.previous(),
                None => Outcome::Ignored(IgnoreReason::NoSwipe),
            },
            Input::SwipeCancel => {
                self.swipe.cancel();
                Outcome::Idle
            }
            Input::PointerEnter => self.pause_auto_advance(),
            Input::PointerLeave => self.resume_auto_advance(),
            Input::Resize => self.resize(),
            Input::Tick => self.tick(),
        };
        Ok(outcome)
    }

    /// Moves one slide forward, wrapping after the last one.
    pub fn next(&mut self) -> Outcome {
        let count = self.state.slide_count.get();
        self.step((self.state.current + 1) % count)
    }

    /// Moves one slide back, wrapping before the first one.
    pub fn previous(&mut self) -> Outcome {
        let count = self.state.slide_count.get();
        self.step((self.state.current + count - 1) % count)
    }

    /// Jumps straight to `index` without visiting the slides in between.
    pub fn go_to(&mut self, index: usize) -> Result<Outcome, CarouselError> {
        if !self.state.slide_count.contains(index) {
            return Err(CarouselError::OutOfRange {
                index,
                slide_count: self.state.slide_count.get(),
            });
        }
        if self.is_animating() {
            return Ok(Outcome::Ignored(IgnoreReason::Animating));
        }
        if index == self.state.current {
            return Ok(Outcome::Ignored(IgnoreReason::AlreadyActive));
        }
        Ok(self.move_to(index))
    }

    /// Clears an expired lock, then fires auto-advance when due.
    pub fn tick(&mut self) -> Outcome {
        let now = self.clock.now();

        if self.state.animating_until.is_some_and(|until| now >= until) {
            self.state.animating_until = None;
        }

        match self.state.auto_advance {
            AutoAdvance::Scheduled(due) if now >= due => {
                // Recurring: the next deadline is set even if this advance is dropped.
                self.state.auto_advance =
                    AutoAdvance::Scheduled(now + self.settings.auto_advance_interval.as_duration());
                match self.advance_without_reset() {
                    Outcome::Ignored(reason) => {
                        log::debug!("Auto-advance dropped: {:?}", reason);
                        Outcome::Idle
                    }
                    outcome => outcome,
                }
            }
            _ => Outcome::Idle,
        }
    }

    /// Re-renders the current frame, for example after the container resized.
    pub fn resize(&mut self) -> Outcome {
        self.render();
        Outcome::Rendered
    }

    /// Schedules the recurring advance if it is enabled and not already running.
    pub fn start_auto_advance(&mut self) {
        if self.settings.auto_advance && self.state.auto_advance == AutoAdvance::Stopped {
            self.schedule_auto_advance();
        }
    }

    /// Cancels the pending advance and schedules a fresh one.
    ///
    /// Has no effect while paused or stopped.
    pub fn reset_auto_advance(&mut self) {
        if matches!(self.state.auto_advance, AutoAdvance::Scheduled(_)) {
            self.schedule_auto_advance();
        }
    }

    /// Suspends auto-advance until [`Self::resume_auto_advance`].
    pub fn pause_auto_advance(&mut self) -> Outcome {
        match self.state.auto_advance {
            AutoAdvance::Scheduled(_) => {
                self.state.auto_advance = AutoAdvance::Paused;
                Outcome::Paused
            }
            _ => Outcome::Idle,
        }
    }

    /// Restarts auto-advance with a full interval.
    pub fn resume_auto_advance(&mut self) -> Outcome {
        match self.state.auto_advance {
            AutoAdvance::Paused => {
                self.schedule_auto_advance();
                Outcome::Resumed
            }
            _ => Outcome::Idle,
        }
    }

    /// Returns true while the transition lock is held.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.state
            .animating_until
            .is_some_and(|until| self.clock.now() < until)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current
    }

    #[must_use]
    pub fn slide_count(&self) -> SlideCount {
        self.state.slide_count
    }

    /// Returns the most recently rendered frame.
    #[must_use]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Number of frames rendered so far, the initial one included.
    #[must_use]
    pub fn frame_serial(&self) -> u64 {
        self.frame_serial
    }

    #[must_use]
    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    #[must_use]
    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    #[must_use]
    pub fn layout(&self) -> SurfaceLayout {
        self.layout
    }

    /// Returns true while a swipe gesture is in progress.
    #[must_use]
    pub fn is_swiping(&self) -> bool {
        self.swipe.is_tracking()
    }

    #[must_use]
    pub fn is_auto_advance_paused(&self) -> bool {
        self.state.auto_advance == AutoAdvance::Paused
    }

    fn step(&mut self, target: usize) -> Outcome {
        if self.is_animating() {
            return Outcome::Ignored(IgnoreReason::Animating);
        }
        self.move_to(target)
    }

    /// Timer-driven forward step; leaves the freshly set deadline alone.
    fn advance_without_reset(&mut self) -> Outcome {
        if self.is_animating() {
            return Outcome::Ignored(IgnoreReason::Animating);
        }
        let count = self.state.slide_count.get();
        self.transition((self.state.current + 1) % count)
    }

    fn move_to(&mut self, target: usize) -> Outcome {
        let outcome = self.transition(target);
        self.reset_auto_advance();
        outcome
    }

    fn transition(&mut self, target: usize) -> Outcome {
        let from = self.state.current;
        self.state.current = target;
        self.state.animating_until = Some(self.clock.now() + self.settings.transition.as_duration());
        self.render();
        log::trace!("Carousel moved {} -> {}", from, target);
        Outcome::Moved { from, to: target }
    }

    fn render(&mut self) {
        self.frame = Frame::compute(
            self.state.current,
            self.state.slide_count,
            self.layout,
            self.settings.button_edges,
        );
        self.frame_serial += 1;
    }

    fn schedule_auto_advance(&mut self) {
        let due = self.clock.now() + self.settings.auto_advance_interval.as_duration();
        self.state.auto_advance = AutoAdvance::Scheduled(due);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::clock::ManualClock;
    use std::time::Duration;

    const TRANSITION: Duration = Duration::from_millis(500);
    const INTERVAL: Duration = Duration::from_millis(5000);

    fn controller(count: usize) -> (CarouselController<ManualClock>, ManualClock) {
        controller_with(count, CarouselSettings::default())
    }

    fn controller_with(
        count: usize,
        settings: CarouselSettings,
    ) -> (CarouselController<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let slides = SlideCount::new(count).unwrap();
        let controller = CarouselController::with_clock(
            slides,
            SurfaceLayout::full(slides),
            settings,
            clock.clone(),
        );
        (controller, clock)
    }

    fn settle(clock: &ManualClock) {
        clock.advance(TRANSITION);
    }

    #[test]
    fn starts_on_first_slide_without_lock() {
        let (carousel, _clock) = controller(3);
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_animating());
        assert_eq!(carousel.frame_serial(), 1);
        assert_eq!(carousel.frame().prev_disabled, Some(true));
        assert!(matches!(
            carousel.state().auto_advance,
            AutoAdvance::Scheduled(_)
        ));
    }

    #[test]
    fn n_nexts_land_on_modular_index() {
        for count in 1..=5 {
            let (mut carousel, clock) = controller(count);
            for n in 0..(3 * count) {
                assert_eq!(carousel.current_index(), n % count);
                carousel.next();
                settle(&clock);
            }
        }
    }

    #[test]
    fn previous_undoes_next() {
        let (mut carousel, clock) = controller(4);
        for start in 0..4 {
            if start != carousel.current_index() {
                carousel.go_to(start).unwrap();
                settle(&clock);
            }
            carousel.next();
            settle(&clock);
            carousel.previous();
            settle(&clock);
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn previous_from_first_wraps_to_last() {
        let (mut carousel, _clock) = controller(4);
        assert_eq!(carousel.previous(), Outcome::Moved { from: 0, to: 3 });
    }

    #[test]
    fn single_slide_next_rerenders_same_index() {
        let (mut carousel, _clock) = controller(1);
        assert_eq!(carousel.next(), Outcome::Moved { from: 0, to: 0 });
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.frame_serial(), 2);
    }

    #[test]
    fn two_nexts_within_window_move_once() {
        let (mut carousel, clock) = controller(5);
        carousel.next();
        clock.advance(Duration::from_millis(200));
        assert_eq!(
            carousel.next(),
            Outcome::Ignored(IgnoreReason::Animating)
        );
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn lock_releases_at_deadline() {
        let (mut carousel, clock) = controller(5);
        carousel.next();
        clock.advance(Duration::from_millis(499));
        assert!(carousel.is_animating());
        clock.advance(Duration::from_millis(1));
        assert!(!carousel.is_animating());
        carousel.tick();
        assert_eq!(carousel.state().animating_until, None);
        assert_eq!(carousel.next(), Outcome::Moved { from: 1, to: 2 });
    }

    #[test]
    fn go_to_current_is_ignored() {
        let (mut carousel, _clock) = controller(3);
        assert_eq!(
            carousel.go_to(0),
            Ok(Outcome::Ignored(IgnoreReason::AlreadyActive))
        );
        assert_eq!(carousel.frame_serial(), 1);
    }

    #[test]
    fn go_to_out_of_range_is_rejected() {
        let (mut carousel, _clock) = controller(3);
        assert_eq!(
            carousel.go_to(3),
            Err(CarouselError::OutOfRange {
                index: 3,
                slide_count: 3
            })
        );
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_animating());
    }

    #[test]
    fn go_to_renders_one_frame() {
        let (mut carousel, _clock) = controller(4);
        let before = carousel.frame_serial();
        assert_eq!(carousel.go_to(2), Ok(Outcome::Moved { from: 0, to: 2 }));
        assert_eq!(carousel.frame_serial(), before + 1);
        assert_eq!(carousel.frame().index, 2);
        assert_eq!(carousel.frame().track_offset_percent, -200.0);
    }

    #[test]
    fn go_to_while_animating_is_ignored() {
        let (mut carousel, _clock) = controller(4);
        carousel.next();
        assert_eq!(
            carousel.go_to(3),
            Ok(Outcome::Ignored(IgnoreReason::Animating))
        );
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn resize_rerenders_without_locking() {
        let (mut carousel, _clock) = controller(3);
        assert_eq!(carousel.resize(), Outcome::Rendered);
        assert_eq!(carousel.frame_serial(), 2);
        assert!(!carousel.is_animating());
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn auto_advance_fires_every_interval() {
        let (mut carousel, clock) = controller(3);
        clock.advance(INTERVAL - Duration::from_millis(1));
        assert_eq!(carousel.tick(), Outcome::Idle);
        clock.advance(Duration::from_millis(1));
        assert_eq!(carousel.tick(), Outcome::Moved { from: 0, to: 1 });
        clock.advance(INTERVAL);
        assert_eq!(carousel.tick(), Outcome::Moved { from: 1, to: 2 });
        clock.advance(INTERVAL);
        assert_eq!(carousel.tick(), Outcome::Moved { from: 2, to: 0 });
    }

    #[test]
    fn manual_navigation_snoozes_auto_advance() {
        let (mut carousel, clock) = controller(3);
        clock.advance(Duration::from_millis(4000));
        carousel.next();
        clock.advance(Duration::from_millis(1500));
        assert_eq!(carousel.tick(), Outcome::Idle);
        assert_eq!(carousel.current_index(), 1);
        clock.advance(Duration::from_millis(3500));
        assert_eq!(carousel.tick(), Outcome::Moved { from: 1, to: 2 });
    }

    #[test]
    fn hover_pauses_and_leave_resumes_with_full_interval() {
        let (mut carousel, clock) = controller(3);
        assert_eq!(carousel.dispatch(Input::PointerEnter), Ok(Outcome::Paused));
        clock.advance(INTERVAL * 3);
        assert_eq!(carousel.tick(), Outcome::Idle);
        assert_eq!(carousel.current_index(), 0);

        assert_eq!(carousel.dispatch(Input::PointerLeave), Ok(Outcome::Resumed));
        clock.advance(INTERVAL - Duration::from_millis(50));
        assert_eq!(carousel.tick(), Outcome::Idle);
        clock.advance(Duration::from_millis(50));
        assert_eq!(carousel.tick(), Outcome::Moved { from: 0, to: 1 });
    }

    #[test]
    fn manual_navigation_while_hovered_keeps_timer_paused() {
        let (mut carousel, clock) = controller(3);
        carousel.dispatch(Input::PointerEnter).unwrap();
        carousel.next();
        assert!(carousel.is_auto_advance_paused());
        clock.advance(INTERVAL * 2);
        carousel.tick();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn disabled_auto_advance_never_fires() {
        let settings = CarouselSettings {
            auto_advance: false,
            ..CarouselSettings::default()
        };
        let (mut carousel, clock) = controller_with(3, settings);
        assert_eq!(carousel.state().auto_advance, AutoAdvance::Stopped);
        assert_eq!(carousel.dispatch(Input::PointerEnter), Ok(Outcome::Idle));
        assert_eq!(carousel.dispatch(Input::PointerLeave), Ok(Outcome::Idle));
        clock.advance(INTERVAL * 4);
        assert_eq!(carousel.tick(), Outcome::Idle);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn auto_advance_obeys_lock() {
        let settings = CarouselSettings {
            transition: TransitionDuration::from_millis(2000),
            auto_advance_interval: AutoAdvanceInterval::from_millis(1000),
            ..CarouselSettings::default()
        };
        let (mut carousel, clock) = controller_with(4, settings);
        clock.advance(Duration::from_millis(1000));
        assert_eq!(carousel.tick(), Outcome::Moved { from: 0, to: 1 });
        clock.advance(Duration::from_millis(1000));
        assert_eq!(carousel.tick(), Outcome::Idle);
        assert_eq!(carousel.current_index(), 1);
        assert!(matches!(
            carousel.state().auto_advance,
            AutoAdvance::Scheduled(_)
        ));
    }

    #[test]
    fn arrow_keys_wrap_at_edges() {
        let (mut carousel, clock) = controller(3);
        carousel.dispatch(Input::Key(ArrowKey::Left)).unwrap();
        assert_eq!(carousel.current_index(), 2);
        settle(&clock);
        carousel.dispatch(Input::Key(ArrowKey::Right)).unwrap();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn swipe_beyond_threshold_navigates() {
        let (mut carousel, clock) = controller(3);
        carousel.dispatch(Input::SwipeStart(300.0)).unwrap();
        assert!(carousel.is_swiping());
        assert_eq!(
            carousel.dispatch(Input::SwipeEnd(240.0)),
            Ok(Outcome::Moved { from: 0, to: 1 })
        );
        settle(&clock);
        carousel.dispatch(Input::SwipeStart(100.0)).unwrap();
        assert_eq!(
            carousel.dispatch(Input::SwipeEnd(200.0)),
            Ok(Outcome::Moved { from: 1, to: 0 })
        );
    }

    #[test]
    fn short_or_cancelled_swipe_is_ignored() {
        let (mut carousel, _clock) = controller(3);
        carousel.dispatch(Input::SwipeStart(300.0)).unwrap();
        assert_eq!(
            carousel.dispatch(Input::SwipeEnd(270.0)),
            Ok(Outcome::Ignored(IgnoreReason::NoSwipe))
        );
        carousel.dispatch(Input::SwipeStart(300.0)).unwrap();
        carousel.dispatch(Input::SwipeCancel).unwrap();
        assert_eq!(
            carousel.dispatch(Input::SwipeEnd(0.0)),
            Ok(Outcome::Ignored(IgnoreReason::NoSwipe))
        );
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn wrap_policy_keeps_buttons_enabled() {
        let settings = CarouselSettings {
            button_edges: ButtonEdges::Wrap,
            ..CarouselSettings::default()
        };
        let (carousel, _clock) = controller_with(3, settings);
        assert_eq!(carousel.frame().prev_disabled, Some(false));
        assert_eq!(carousel.frame().next_disabled, Some(false));
    }
}
