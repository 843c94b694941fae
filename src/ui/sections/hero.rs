// SPDX-License-Identifier: MPL-2.0
//! Hero section: greeting, rotating headline, typed introduction, and the
//! two calls to action.

use crate::assets::ImageHandle;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::layout;
use crate::ui::section::SectionId;
use crate::ui::sections::thumbnail;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub name: &'a str,
    /// Current word of the rotating headline, if any.
    pub role: Option<&'a str>,
    /// Prefix revealed by the typewriter so far.
    pub intro: &'a str,
    /// Lazily loaded portrait, once available.
    pub portrait: Option<&'a ImageHandle>,
}

/// Messages emitted by the hero's action buttons.
#[derive(Debug, Clone)]
pub enum Message {
    ContactPressed,
    ProjectsPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ScrollTo(SectionId),
}

/// Process a hero message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ContactPressed => Event::ScrollTo(SectionId::Contact),
        Message::ProjectsPressed => Event::ScrollTo(SectionId::Projects),
    }
}

/// Render the hero section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let portrait: Element<'a, Message> = match ctx.portrait {
        Some(handle) => thumbnail(handle, sizing::PORTRAIT_SIZE),
        // Placeholder circle while the portrait has not been loaded (or when
        // the file is missing: silent degradation).
        None => Container::new(Text::new(""))
            .width(Length::Fixed(sizing::PORTRAIT_SIZE))
            .height(Length::Fixed(sizing::PORTRAIT_SIZE))
            .style(portrait_placeholder)
            .into(),
    };

    let mut intro_column = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("hero-greeting")).size(typography::TITLE_SM))
        .push(Text::new(ctx.name.to_string()).size(typography::TITLE_XL));

    if let Some(role) = ctx.role {
        intro_column = intro_column.push(
            Text::new(role.to_string())
                .size(typography::TITLE_MD)
                .color(palette::PRIMARY_500),
        );
    }

    intro_column = intro_column.push(
        Text::new(ctx.intro.to_string())
            .size(typography::BODY)
            .width(Length::Fixed(sizing::CONTENT_MAX_WIDTH - sizing::PORTRAIT_SIZE)),
    );

    let contact = button(
        Text::new(ctx.i18n.tr("hero-contact-button")).size(typography::BODY),
    )
    .on_press(Message::ContactPressed)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::primary);

    let projects = button(
        Text::new(ctx.i18n.tr("hero-projects-button")).size(typography::BODY),
    )
    .on_press(Message::ProjectsPressed)
    .padding([spacing::XS, spacing::LG])
    .style(styles::button::secondary);

    intro_column = intro_column.push(
        Row::new()
            .spacing(spacing::SM)
            .push(contact)
            .push(projects),
    );

    let content = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(portrait)
        .push(intro_column);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(layout::HERO_HEIGHT))
        .padding(layout::SECTION_PADDING)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}

fn portrait_placeholder(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    container::Style {
        background: Some(extended.background.weak.color.into()),
        border: Border {
            color: palette::PRIMARY_500,
            width: 2.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_map_to_their_sections() {
        assert!(matches!(
            update(Message::ContactPressed),
            Event::ScrollTo(SectionId::Contact)
        ));
        assert!(matches!(
            update(Message::ProjectsPressed),
            Event::ScrollTo(SectionId::Projects)
        ));
    }

    #[test]
    fn hero_view_renders_without_portrait() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            name: "Jo",
            role: Some("Backend Developer"),
            intro: "Hello",
            portrait: None,
        };
        let _element = view(ctx);
    }

    #[test]
    fn hero_view_renders_with_empty_rotation() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            name: "Jo",
            role: None,
            intro: "",
            portrait: None,
        };
        let _element = view(ctx);
    }
}
