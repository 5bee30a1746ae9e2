// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal of skill bars and project cards.
//!
//! A target is revealed the first time enough of it is visible; after that it
//! stays revealed even when scrolled away.

use crate::config::{
    PROJECT_REVEAL_THRESHOLD, SKILL_REVEAL_BOTTOM_MARGIN_PX, SKILL_REVEAL_THRESHOLD,
};
use std::collections::HashSet;

/// Vertical extent in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub top: f32,
    pub height: f32,
}

impl Extent {
    #[must_use]
    pub fn new(top: f32, height: f32) -> Self {
        Self {
            top,
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Top inclusive, bottom exclusive.
    #[must_use]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }

    /// Fraction of `self` lying inside `viewport`, in `0.0..=1.0`.
    ///
    /// A zero-height extent counts as fully visible when it sits inside the
    /// viewport.
    #[must_use]
    pub fn visible_ratio(&self, viewport: &Extent) -> f32 {
        if self.height == 0.0 {
            let inside = self.top >= viewport.top && self.top <= viewport.bottom();
            return if inside { 1.0 } else { 0.0 };
        }
        let overlap = self.bottom().min(viewport.bottom()) - self.top.max(viewport.top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

/// Something that animates in once scrolled into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    SkillCategory(usize),
    ProjectCard(usize),
}

impl RevealTarget {
    /// Minimum visible fraction that triggers the reveal.
    #[must_use]
    pub fn threshold(self) -> f32 {
        match self {
            RevealTarget::SkillCategory(_) => SKILL_REVEAL_THRESHOLD,
            RevealTarget::ProjectCard(_) => PROJECT_REVEAL_THRESHOLD,
        }
    }

    /// Amount the viewport bottom is pulled up before measuring.
    #[must_use]
    pub fn bottom_margin(self) -> f32 {
        match self {
            RevealTarget::SkillCategory(_) => SKILL_REVEAL_BOTTOM_MARGIN_PX,
            RevealTarget::ProjectCard(_) => 0.0,
        }
    }
}

/// Set of targets that have been revealed so far.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<RevealTarget>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks `target` against the current viewport.
    ///
    /// Returns true only when this call revealed it.
    pub fn observe(&mut self, viewport: Extent, target: RevealTarget, bounds: Extent) -> bool {
        if self.revealed.contains(&target) {
            return false;
        }
        let root = Extent::new(viewport.top, viewport.height - target.bottom_margin());
        if bounds.visible_ratio(&root) >= target.threshold() {
            log::trace!("Revealed {:?}", target);
            self.revealed.insert(target);
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.revealed.contains(&target)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}

/// Width of a skill bar as a percentage of its track.
#[must_use]
pub fn skill_fill(level: u8, revealed: bool) -> u8 {
    if revealed {
        level.min(100)
    } else {
        0
    }
}
