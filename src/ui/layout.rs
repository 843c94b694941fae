// SPDX-License-Identifier: MPL-2.0
//! Section geometry within the scrollable page.
//!
//! Iced exposes no intersection observer, so section visibility is computed
//! numerically: the view gives every section a height derived from the
//! profile content, and this module keeps the resulting extents (top/height
//! in content coordinates) so each scroll offset can be turned into an
//! observation batch for the activity tracker.

use crate::profile::Profile;
use crate::ui::design_tokens::{sizing, spacing};
use crate::ui::section::SectionId;
use iced::Size;

/// Minimum visible fraction of a section for it to count as intersecting.
pub const INTERSECTION_THRESHOLD: f32 = 0.10;

/// Fraction of the viewport height excluded at the bottom edge.
///
/// A section that has only crossed the bottom 10% of the viewport is not yet
/// intersecting, which biases activation toward sections substantially
/// visible near the top.
pub const BOTTOM_MARGIN_FRACTION: f32 = 0.10;

// Vertical building blocks shared with the section views. The views size
// themselves from the same constants, so the computed extents match what is
// rendered.
pub const SECTION_PADDING: f32 = spacing::LG;
pub const TITLE_BLOCK_HEIGHT: f32 = 64.0;
pub const HERO_HEIGHT: f32 = 640.0;
pub const GRID_GAP: f32 = spacing::LG;
pub const PROJECT_CARD_BASE: f32 = 110.0;
pub const PROJECT_DOMAIN_LINE: f32 = 24.0;
pub const HIGHLIGHT_HEADER_HEIGHT: f32 = 30.0;
pub const HIGHLIGHT_LINE_HEIGHT: f32 = 22.0;
pub const CARD_GAP: f32 = spacing::LG;
pub const EXPERIENCE_CARD_BASE: f32 = 84.0;
pub const CONTACT_HEIGHT: f32 = 620.0;

/// One observed section: how much of it is visible, in `[0, 1]`.
pub type Observation = (SectionId, f32);

#[derive(Debug, Clone, Copy, PartialEq)]
struct Extent {
    id: SectionId,
    top: f32,
    height: f32,
}

/// Per-section extents in content coordinates, recomputed whenever the
/// profile or the viewport size changes.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionLayout {
    extents: Vec<Extent>,
    content_height: f32,
    viewport: Size,
}

/// Number of columns the skills grid fits into the given viewport width.
#[must_use]
pub fn skill_columns(viewport_width: f32) -> usize {
    let content_width =
        viewport_width.min(sizing::CONTENT_MAX_WIDTH) - 2.0 * SECTION_PADDING;
    let per_card = sizing::SKILL_CARD_SIZE + GRID_GAP;
    (((content_width + GRID_GAP) / per_card) as usize).max(1)
}

fn skills_height(profile: &Profile, viewport_width: f32) -> f32 {
    let columns = skill_columns(viewport_width);
    let rows = profile.skills.len().div_ceil(columns).max(1);
    2.0 * SECTION_PADDING
        + TITLE_BLOCK_HEIGHT
        + rows as f32 * (sizing::SKILL_CARD_SIZE + GRID_GAP)
}

fn projects_height(profile: &Profile) -> f32 {
    let cards: f32 = profile
        .projects
        .iter()
        .map(|project| {
            let mut height = PROJECT_CARD_BASE;
            if project.domain.is_some() {
                height += PROJECT_DOMAIN_LINE;
            }
            if !project.highlights.is_empty() {
                height += HIGHLIGHT_HEADER_HEIGHT
                    + project.highlights.len() as f32 * HIGHLIGHT_LINE_HEIGHT;
            }
            height + CARD_GAP
        })
        .sum();
    2.0 * SECTION_PADDING + TITLE_BLOCK_HEIGHT + cards
}

fn experience_height(profile: &Profile) -> f32 {
    let cards: f32 = profile
        .experience
        .iter()
        .map(|position| {
            EXPERIENCE_CARD_BASE
                + position.highlights.len() as f32 * HIGHLIGHT_LINE_HEIGHT
                + CARD_GAP
        })
        .sum();
    2.0 * SECTION_PADDING + TITLE_BLOCK_HEIGHT + cards
}

impl SectionLayout {
    /// Computes the extents for the given profile and viewport size.
    #[must_use]
    pub fn compute(profile: &Profile, viewport: Size) -> Self {
        let mut extents = Vec::with_capacity(SectionId::ALL.len());
        let mut top = 0.0;

        for id in SectionId::ALL {
            let height = match id {
                SectionId::Home => HERO_HEIGHT,
                SectionId::Skills => skills_height(profile, viewport.width),
                SectionId::Projects => projects_height(profile),
                SectionId::Experience => experience_height(profile),
                SectionId::Contact => CONTACT_HEIGHT,
            };
            extents.push(Extent { id, top, height });
            top += height;
        }

        Self {
            extents,
            content_height: top,
            viewport,
        }
    }

    /// Section height as rendered.
    #[must_use]
    pub fn height(&self, id: SectionId) -> f32 {
        self.extents[id.index()].height
    }

    /// Section top edge in content coordinates.
    #[must_use]
    pub fn top(&self, id: SectionId) -> f32 {
        self.extents[id.index()].top
    }

    #[must_use]
    pub fn content_height(&self) -> f32 {
        self.content_height
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// The scroll offset that aligns the section's top with the viewport top,
    /// clamped so the page never over-scrolls.
    #[must_use]
    pub fn scroll_target(&self, id: SectionId) -> f32 {
        let max_offset = (self.content_height - self.viewport.height).max(0.0);
        self.top(id).clamp(0.0, max_offset)
    }

    /// Turns a scroll offset into an observation batch: every section whose
    /// visible fraction (within the margin-adjusted viewport) reaches the
    /// intersection threshold, in fixed section order.
    #[must_use]
    pub fn observe(&self, scroll_offset: f32) -> Vec<Observation> {
        let view_top = scroll_offset;
        let view_bottom =
            scroll_offset + self.viewport.height * (1.0 - BOTTOM_MARGIN_FRACTION);

        self.extents
            .iter()
            .filter_map(|extent| {
                let bottom = extent.top + extent.height;
                let overlap = view_bottom.min(bottom) - view_top.max(extent.top);
                if overlap <= 0.0 || extent.height <= 0.0 {
                    return None;
                }
                let ratio = (overlap / extent.height).clamp(0.0, 1.0);
                (ratio >= INTERSECTION_THRESHOLD).then_some((extent.id, ratio))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;

    fn layout() -> SectionLayout {
        let profile = profile::load_embedded().expect("embedded profile");
        SectionLayout::compute(&profile, Size::new(800.0, 600.0))
    }

    #[test]
    fn sections_tile_the_content() {
        let layout = layout();
        let mut expected_top = 0.0;
        for id in SectionId::ALL {
            assert_eq!(layout.top(id), expected_top);
            assert!(layout.height(id) > 0.0);
            expected_top += layout.height(id);
        }
        assert_eq!(layout.content_height(), expected_top);
    }

    #[test]
    fn observations_are_valid_ratios_in_section_order() {
        let layout = layout();
        let mut offset = 0.0;
        while offset < layout.content_height() {
            let observations = layout.observe(offset);
            for window in observations.windows(2) {
                assert!(window[0].0.index() < window[1].0.index());
            }
            for (_, ratio) in &observations {
                assert!((INTERSECTION_THRESHOLD..=1.0).contains(ratio));
            }
            offset += 250.0;
        }
    }

    #[test]
    fn hero_is_fully_visible_at_origin() {
        let layout = layout();
        let observations = layout.observe(0.0);
        let hero = observations
            .iter()
            .find(|(id, _)| *id == SectionId::Home)
            .expect("hero observed at origin");
        assert!(hero.1 > 0.8);
    }

    #[test]
    fn bottom_margin_delays_intersection() {
        let layout = layout();
        // Scroll so the skills section pokes exactly into the bottom 10% of
        // the viewport: the margin-adjusted viewport must not count it yet.
        let viewport_height = layout.viewport().height;
        let offset = layout.top(SectionId::Skills) - viewport_height
            + BOTTOM_MARGIN_FRACTION * viewport_height / 2.0;
        let observations = layout.observe(offset);
        assert!(!observations.iter().any(|(id, _)| *id == SectionId::Skills));
    }

    #[test]
    fn scroll_target_aligns_and_clamps() {
        let layout = layout();
        assert_eq!(layout.scroll_target(SectionId::Home), 0.0);
        assert_eq!(
            layout.scroll_target(SectionId::Skills),
            layout.top(SectionId::Skills)
        );

        let max_offset = layout.content_height() - layout.viewport().height;
        assert!(layout.scroll_target(SectionId::Contact) <= max_offset);
    }

    #[test]
    fn skill_columns_shrink_with_narrow_viewports() {
        assert!(skill_columns(1200.0) >= skill_columns(400.0));
        assert!(skill_columns(100.0) >= 1);
    }

    #[test]
    fn wider_viewport_means_fewer_skill_rows() {
        let profile = profile::load_embedded().expect("embedded profile");
        let narrow = SectionLayout::compute(&profile, Size::new(400.0, 600.0));
        let wide = SectionLayout::compute(&profile, Size::new(1600.0, 600.0));
        assert!(narrow.height(SectionId::Skills) >= wide.height(SectionId::Skills));
    }
}
