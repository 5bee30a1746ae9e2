// SPDX-License-Identifier: MPL-2.0
//! Derived UI state of the carousel.
//!
//! A [`Frame`] is everything the surface needs to draw after a transition:
//! the track offset, which slide and indicator are active, the button
//! disabled flags, and the counter text. Surface elements that do not exist
//! (see [`SurfaceLayout`]) come out as `None` and are simply skipped.

use super::newtypes::SlideCount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the prev/next buttons behave at the first and last slide.
///
/// Keyboard, swipe, and timer navigation always wrap around.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonEdges {
    /// Disable "previous" on the first slide and "next" on the last one.
    #[default]
    Disable,
    /// Keep both buttons enabled; they wrap like the other inputs.
    Wrap,
}

/// Optional parts of the carousel surface.
///
/// The slide collection itself is mandatory and sized by [`SlideCount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceLayout {
    /// Number of indicator dots (0 when the indicator row is absent).
    pub indicators: usize,
    /// Whether prev/next buttons exist.
    pub buttons: bool,
    /// Whether the "n / total" counter exists.
    pub counter: bool,
}

impl SurfaceLayout {
    /// A surface with every element, one indicator per slide.
    #[must_use]
    pub fn full(slides: SlideCount) -> Self {
        Self {
            indicators: slides.get(),
            buttons: true,
            counter: true,
        }
    }

    /// A surface with only the slide track.
    #[must_use]
    pub fn bare() -> Self {
        Self {
            indicators: 0,
            buttons: false,
            counter: false,
        }
    }
}

/// One-based position text, e.g. `2 / 5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counter {
    pub current: usize,
    pub total: usize,
}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// Derived UI state for one carousel position.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Index of the active slide.
    pub index: usize,
    /// Total number of slides.
    pub slide_count: usize,
    /// Number of indicator dots on the surface.
    pub indicators: usize,
    /// Track translation as a percentage of the container width.
    pub track_offset_percent: f32,
    /// Highlighted indicator, if an indicator exists for `index`.
    pub active_indicator: Option<usize>,
    /// Disabled flag of the "previous" button, if present.
    pub prev_disabled: Option<bool>,
    /// Disabled flag of the "next" button, if present.
    pub next_disabled: Option<bool>,
    /// Counter text, if present.
    pub counter: Option<Counter>,
}

impl Frame {
    /// Computes the frame for `index`. `index` must address an existing slide.
    #[must_use]
    pub fn compute(
        index: usize,
        slides: SlideCount,
        layout: SurfaceLayout,
        edges: ButtonEdges,
    ) -> Self {
        debug_assert!(slides.contains(index));

        let (prev_disabled, next_disabled) = if layout.buttons {
            match edges {
                ButtonEdges::Disable => (
                    Some(index == 0),
                    Some(index == slides.last_index()),
                ),
                ButtonEdges::Wrap => (Some(false), Some(false)),
            }
        } else {
            (None, None)
        };

        Self {
            index,
            slide_count: slides.get(),
            indicators: layout.indicators,
            track_offset_percent: -(index as f32) * 100.0,
            active_indicator: (index < layout.indicators).then_some(index),
            prev_disabled,
            next_disabled,
            counter: layout.counter.then_some(Counter {
                current: index + 1,
                total: slides.get(),
            }),
        }
    }

    /// Returns true if slide `i` carries the active marker.
    #[must_use]
    pub fn is_slide_active(&self, i: usize) -> bool {
        i == self.index
    }

    /// Returns true if indicator `i` carries the active marker.
    #[must_use]
    pub fn is_indicator_active(&self, i: usize) -> bool {
        self.active_indicator == Some(i)
    }

    /// Scroll position of the track as a fraction of its scrollable width.
    ///
    /// Equivalent to `track_offset_percent` for a track laid out as a
    /// horizontal strip: `0.0` shows the first slide, `1.0` the last one.
    #[must_use]
    pub fn relative_offset(&self) -> f32 {
        if self.slide_count <= 1 {
            0.0
        } else {
            self.index as f32 / (self.slide_count - 1) as f32
        }
    }
}
