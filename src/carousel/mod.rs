// SPDX-License-Identifier: MPL-2.0
//! Project carousel: a looping slide deck with an animation lock,
//! auto-advance, swipe and keyboard input.
//!
//! The controller is independent of any widget toolkit. The UI layer feeds it
//! [`Input`]s and draws the [`Frame`] it produces.

pub mod clock;
pub mod controller;
pub mod frame;
pub mod newtypes;
pub mod swipe;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{
    ArrowKey, AutoAdvance, CarouselController, CarouselSettings, CarouselState, IgnoreReason,
    Input, Outcome,
};
pub use frame::{ButtonEdges, Counter, Frame, SurfaceLayout};
pub use newtypes::{AutoAdvanceInterval, SlideCount, SwipeThreshold, TransitionDuration};
pub use swipe::{SwipeDirection, SwipeTracker};
