// SPDX-License-Identifier: MPL-2.0
//! Page section enumeration.
//!
//! Unlike screens in a multi-screen application, all sections are mounted at
//! once inside the scrollable page; the enum gives them a fixed order for
//! navigation and for tie-breaking in the activity tracker.

/// Content regions of the page, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SectionId {
    Home,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    /// All sections in display order.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Experience,
        SectionId::Contact,
    ];

    /// Position in the fixed display order.
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SectionId::Home => 0,
            SectionId::Skills => 1,
            SectionId::Projects => 2,
            SectionId::Experience => 3,
            SectionId::Contact => 4,
        }
    }

    /// i18n key for the navigation label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::Skills => "nav-skills",
            SectionId::Projects => "nav-projects",
            SectionId::Experience => "nav-experience",
            SectionId::Contact => "nav-contact",
        }
    }
}
