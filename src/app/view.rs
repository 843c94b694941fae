// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the top navigation bar and the five sections inside the single
//! page scrollable.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::ui::layout::skill_columns;
use crate::ui::section::SectionId;
use crate::ui::sections::{experience, hero, projects, skills};
use crate::ui::{contact_form, topnav};
use iced::widget::scrollable::Viewport;
use iced::widget::{Column, Id, Scrollable};
use iced::{Element, Length};

/// Renders the application view.
pub fn view(app: &App) -> Element<'_, Message> {
    let topnav = topnav::view(topnav::ViewContext {
        i18n: &app.i18n,
        active: app.tracker.active(),
        is_light: !app.theme_mode.is_dark(),
    })
    .map(Message::TopNav);

    let hero = hero::view(hero::ViewContext {
        i18n: &app.i18n,
        name: &app.profile.identity.name,
        role: app.rotator.current(),
        intro: app.typewriter.emitted(),
        portrait: app.assets.portrait(),
    })
    .map(Message::Hero);

    let columns = skill_columns(app.layout.viewport().width);
    let skills = skills::view(
        &app.i18n,
        &app.profile.skills,
        &app.assets,
        columns,
        app.layout.height(SectionId::Skills),
    );

    let projects = projects::view(
        &app.i18n,
        &app.profile.projects,
        app.layout.height(SectionId::Projects),
    );

    let experience = experience::view(
        &app.i18n,
        &app.profile.experience,
        app.layout.height(SectionId::Experience),
    );

    let contact = contact_form::view(&app.i18n, &app.contact).map(Message::Contact);

    let page = Column::new()
        .push(hero)
        .push(skills)
        .push(projects)
        .push(experience)
        .push(contact)
        .width(Length::Fill);

    let scrollable = Scrollable::new(page)
        .id(Id::new(PAGE_SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled {
            offset: viewport.absolute_offset(),
            bounds: viewport.bounds(),
        });

    Column::new()
        .push(topnav)
        .push(scrollable)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_renders_the_whole_page() {
        let app = App::default();
        let _element = view(&app);
    }
}
