// SPDX-License-Identifier: MPL-2.0
//! Page sections and scroll-position bookkeeping for the navigation bar.

use crate::config::{NAV_HIGHLIGHT_PROBE_PX, NAV_SCROLL_OFFSET_PX};

/// Anchored sections of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// Anchor name, as used in deep links.
    #[must_use]
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// Looks a section up by anchor name, with or without a leading `#`.
    #[must_use]
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    /// i18n key of the navigation link label.
    #[must_use]
    pub fn nav_label_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::About => "nav-about",
            SectionId::Skills => "nav-skills",
            SectionId::Projects => "nav-projects",
            SectionId::Contact => "nav-contact",
        }
    }
}

/// Vertical extent of one section within the scrollable page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Stacked section geometry, top to bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    spans: Vec<SectionSpan>,
}

impl SectionLayout {
    /// Stacks sections starting at `origin` in the given order.
    ///
    /// Negative heights are treated as zero.
    #[must_use]
    pub fn stacked(origin: f32, sections: &[(SectionId, f32)]) -> Self {
        let mut top = origin;
        let spans = sections
            .iter()
            .map(|&(id, height)| {
                let height = height.max(0.0);
                let span = SectionSpan { id, top, height };
                top += height;
                span
            })
            .collect();
        Self { spans }
    }

    #[must_use]
    pub fn spans(&self) -> &[SectionSpan] {
        &self.spans
    }

    #[must_use]
    pub fn span(&self, id: SectionId) -> Option<&SectionSpan> {
        self.spans.iter().find(|s| s.id == id)
    }

    /// Total height of every section.
    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.spans.last().map_or(0.0, SectionSpan::bottom)
    }

    /// Section whose span contains the probe line just below the navbar.
    #[must_use]
    pub fn active_section(&self, scroll_y: f32) -> Option<SectionId> {
        let probe = scroll_y + NAV_HIGHLIGHT_PROBE_PX;
        self.spans.iter().find(|s| s.contains(probe)).map(|s| s.id)
    }

    /// Scroll position that brings `id` under the fixed navbar.
    #[must_use]
    pub fn scroll_target(&self, id: SectionId) -> Option<f32> {
        self.span(id)
            .map(|s| (s.top - NAV_SCROLL_OFFSET_PX).max(0.0))
    }
}
