// SPDX-License-Identifier: MPL-2.0
//! Section activity tracking.
//!
//! Consumes observation batches from [`crate::ui::layout::SectionLayout`] and
//! maintains two separate pieces of state that must not be conflated:
//! a per-section one-way reveal latch (`unseen -> revealed`, never reset) and
//! the single active-section pointer recomputed on every batch.

use crate::ui::layout::Observation;
use crate::ui::section::SectionId;

#[derive(Debug, Clone)]
pub struct SectionActivityTracker {
    active: SectionId,
    revealed: [bool; SectionId::ALL.len()],
}

impl Default for SectionActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionActivityTracker {
    /// Starts with the first section active and nothing revealed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: SectionId::Home,
            revealed: [false; SectionId::ALL.len()],
        }
    }

    /// The section currently deemed most visible.
    #[must_use]
    pub fn active(&self) -> SectionId {
        self.active
    }

    /// Whether the section has ever been visible.
    #[must_use]
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed[id.index()]
    }

    /// Latches a section revealed outside an observation batch (the first
    /// section is revealed on mount, before any scrolling happens).
    /// Returns true if the latch was newly set.
    pub fn reveal(&mut self, id: SectionId) -> bool {
        let newly = !self.revealed[id.index()];
        self.revealed[id.index()] = true;
        newly
    }

    /// Processes one observation batch.
    ///
    /// Every observed section is latched revealed; the active section becomes
    /// the one with the highest intersection ratio (ties keep observation
    /// order, which is the fixed section order). An empty batch leaves the
    /// active section unchanged so the highlight never flickers to an
    /// undefined state.
    ///
    /// Returns the sections that were newly revealed by this batch, in
    /// observation order.
    pub fn observe(&mut self, observations: &[Observation]) -> Vec<SectionId> {
        let newly_revealed: Vec<SectionId> = observations
            .iter()
            .filter(|(id, _)| self.reveal(*id))
            .map(|(id, _)| *id)
            .collect();

        let mut ranked: Vec<&Observation> = observations.iter().collect();
        // Stable sort: equal ratios keep the fixed section order.
        ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        if let Some((id, _)) = ranked.first() {
            self.active = *id;
        }

        newly_revealed
    }
}
