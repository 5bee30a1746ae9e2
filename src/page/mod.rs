// SPDX-License-Identifier: MPL-2.0
//! Page-level state outside the carousel: section tracking, reveal
//! animations, and the simulated forms.
//!
//! Sections have fixed heights so that scroll offsets map to sections
//! without querying widget bounds. The view lays sections out with the same
//! [`geometry`] constants.

pub mod content;
pub mod forms;
pub mod reveal;
pub mod sections;

pub use forms::{ContactForm, CvDownload, FormError, FormKind, Forms, NewsletterForm, Phase, Submit};
pub use reveal::{skill_fill, Extent, RevealTarget, RevealTracker};
pub use sections::{SectionId, SectionLayout, SectionSpan};

/// Fixed page dimensions shared by the state and the view.
pub mod geometry {
    use super::content::SKILLS;

    /// Height of the fixed navigation bar.
    pub const NAVBAR_HEIGHT: f32 = 70.0;
    /// Title block at the top of each section.
    pub const SECTION_HEADER_HEIGHT: f32 = 120.0;
    /// Space left below the last block of a section.
    pub const SECTION_BOTTOM_PADDING: f32 = 60.0;

    pub const HOME_HEIGHT: f32 = 620.0;
    pub const ABOUT_HEIGHT: f32 = 520.0;
    pub const CONTACT_HEIGHT: f32 = 780.0;

    /// One skill category block: title plus its bars.
    pub const SKILL_CATEGORY_HEIGHT: f32 = 160.0;

    /// Height of the carousel track.
    pub const CAROUSEL_HEIGHT: f32 = 380.0;
    /// Buttons, indicators, and counter under the track.
    pub const CAROUSEL_CONTROLS_HEIGHT: f32 = 90.0;

    #[must_use]
    pub fn skills_height() -> f32 {
        SECTION_HEADER_HEIGHT + SKILLS.len() as f32 * SKILL_CATEGORY_HEIGHT + SECTION_BOTTOM_PADDING
    }

    #[must_use]
    pub fn projects_height() -> f32 {
        SECTION_HEADER_HEIGHT + CAROUSEL_HEIGHT + CAROUSEL_CONTROLS_HEIGHT + SECTION_BOTTOM_PADDING
    }
}

/// Scroll-derived state of the single-page layout.
#[derive(Debug, Clone)]
pub struct Page {
    layout: SectionLayout,
    reveal: RevealTracker,
    active: Option<SectionId>,
    scroll_y: f32,
    viewport_height: f32,
    pub forms: Forms,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    #[must_use]
    pub fn new() -> Self {
        let layout = SectionLayout::stacked(
            0.0,
            &[
                (SectionId::Home, geometry::HOME_HEIGHT),
                (SectionId::About, geometry::ABOUT_HEIGHT),
                (SectionId::Skills, geometry::skills_height()),
                (SectionId::Projects, geometry::projects_height()),
                (SectionId::Contact, geometry::CONTACT_HEIGHT),
            ],
        );
        let active = layout.active_section(0.0);
        Self {
            layout,
            reveal: RevealTracker::new(),
            active,
            scroll_y: 0.0,
            viewport_height: 0.0,
            forms: Forms::default(),
        }
    }

    /// Records a new scroll position and viewport height.
    ///
    /// Returns the targets revealed by this scroll.
    pub fn on_scroll(&mut self, scroll_y: f32, viewport_height: f32) -> Vec<RevealTarget> {
        self.scroll_y = scroll_y.max(0.0);
        self.viewport_height = viewport_height.max(0.0);
        self.active = self.layout.active_section(self.scroll_y);

        let viewport = Extent::new(self.scroll_y, viewport_height);
        let mut revealed = Vec::new();
        for (target, bounds) in self.reveal_targets() {
            if self.reveal.observe(viewport, target, bounds) {
                revealed.push(target);
            }
        }
        revealed
    }

    /// Every reveal target with its page-space bounds.
    #[must_use]
    pub fn reveal_targets(&self) -> Vec<(RevealTarget, Extent)> {
        let mut targets = Vec::new();

        if let Some(skills) = self.layout.span(SectionId::Skills) {
            let first = skills.top + geometry::SECTION_HEADER_HEIGHT;
            for index in 0..content::SKILLS.len() {
                let top = first + index as f32 * geometry::SKILL_CATEGORY_HEIGHT;
                targets.push((
                    RevealTarget::SkillCategory(index),
                    Extent::new(top, geometry::SKILL_CATEGORY_HEIGHT),
                ));
            }
        }

        // Cards share the carousel track, so they share its bounds.
        if let Some(track) = self.carousel_track() {
            for index in 0..content::PROJECTS.len() {
                targets.push((RevealTarget::ProjectCard(index), track));
            }
        }

        targets
    }

    /// Page-space bounds of the carousel track.
    #[must_use]
    pub fn carousel_track(&self) -> Option<Extent> {
        self.layout.span(SectionId::Projects).map(|projects| {
            Extent::new(
                projects.top + geometry::SECTION_HEADER_HEIGHT,
                geometry::CAROUSEL_HEIGHT,
            )
        })
    }

    /// Whether a window-space `y` currently falls on the carousel track.
    #[must_use]
    pub fn is_over_carousel(&self, window_y: f32) -> bool {
        self.carousel_track()
            .is_some_and(|track| track.contains(window_y + self.scroll_y))
    }

    #[must_use]
    pub fn active_section(&self) -> Option<SectionId> {
        self.active
    }

    #[must_use]
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    #[must_use]
    pub fn scroll_target(&self, id: SectionId) -> f32 {
        self.layout.scroll_target(id).unwrap_or(0.0)
    }

    /// Scroll target of `id` as a fraction of the scrollable range.
    ///
    /// Before the first scroll event the viewport height is unknown and the
    /// whole content height is used as the range.
    #[must_use]
    pub fn relative_scroll_target(&self, id: SectionId) -> f32 {
        let range = self.layout.content_height() - self.viewport_height;
        if range <= 0.0 {
            return 0.0;
        }
        (self.scroll_target(id) / range).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn layout(&self) -> &SectionLayout {
        &self.layout
    }

    #[must_use]
    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.reveal.is_revealed(target)
    }

    /// Bar width of one skill, honoring its category's reveal state.
    #[must_use]
    pub fn skill_fill(&self, category: usize, level: u8) -> u8 {
        skill_fill(level, self.is_revealed(RevealTarget::SkillCategory(category)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_home_with_nothing_revealed() {
        let page = Page::new();
        assert_eq!(page.active_section(), Some(SectionId::Home));
        assert_eq!(page.skill_fill(0, 80), 0);
    }

    #[test]
    fn layout_matches_geometry() {
        let page = Page::new();
        let skills = page.layout().span(SectionId::Skills).copied();
        assert_eq!(
            skills.map(|s| s.height),
            Some(geometry::skills_height())
        );
        assert_eq!(
            skills.map(|s| s.top),
            Some(geometry::HOME_HEIGHT + geometry::ABOUT_HEIGHT)
        );
    }

    #[test]
    fn scrolling_to_skills_reveals_categories_and_highlights_link() {
        let mut page = Page::new();
        let target = page.scroll_target(SectionId::Skills);
        let revealed = page.on_scroll(target, 900.0);

        assert_eq!(page.active_section(), Some(SectionId::Skills));
        assert!(revealed.contains(&RevealTarget::SkillCategory(0)));
        assert!(page.skill_fill(0, 80) > 0);
    }

    #[test]
    fn relative_scroll_target_spans_scrollable_range() {
        let mut page = Page::new();
        assert_eq!(page.relative_scroll_target(SectionId::Home), 0.0);

        page.on_scroll(0.0, 800.0);
        let range = page.layout().content_height() - 800.0;
        let about = page.relative_scroll_target(SectionId::About);
        assert!((about * range - page.scroll_target(SectionId::About)).abs() < 0.01);
        let contact = page.relative_scroll_target(SectionId::Contact);
        assert!(contact > about && contact <= 1.0);
    }

    #[test]
    fn carousel_hit_test_follows_scroll() {
        let mut page = Page::new();
        let track = page.carousel_track().unwrap();
        assert!(page.is_over_carousel(track.top + 10.0));
        assert!(!page.is_over_carousel(10.0));

        page.on_scroll(track.top, 800.0);
        assert!(page.is_over_carousel(10.0));
        assert!(!page.is_over_carousel(track.height + 10.0));
    }

    #[test]
    fn reveals_are_reported_once() {
        let mut page = Page::new();
        let target = page.scroll_target(SectionId::Projects);
        let first = page.on_scroll(target, 900.0);
        assert!(first.contains(&RevealTarget::ProjectCard(0)));

        let again = page.on_scroll(target + 10.0, 900.0);
        assert!(!again.contains(&RevealTarget::ProjectCard(0)));
        page.on_scroll(0.0, 900.0);
        assert!(page.is_revealed(RevealTarget::ProjectCard(0)));
    }

    #[test]
    fn negative_scroll_is_clamped() {
        let mut page = Page::new();
        page.on_scroll(-40.0, 600.0);
        assert_eq!(page.scroll_y(), 0.0);
    }
}
