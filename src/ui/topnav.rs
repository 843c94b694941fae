// SPDX-License-Identifier: MPL-2.0
//! Top navigation bar.
//!
//! One link per section, highlighting the active one, plus the theme toggle
//! pushed to the far end. Link clicks are reported as events so the app can
//! run the scroll animation; the bar itself holds no state.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::section::SectionId;
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, space, Container, Row, Text},
    Element, Length,
};

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub active: SectionId,
    pub is_light: bool,
}

/// Messages emitted by the bar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionSelected(SectionId),
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    ScrollTo(SectionId),
    ThemeToggled,
}

/// Process a navigation message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionSelected(id) => Event::ScrollTo(id),
        Message::ToggleTheme => Event::ThemeToggled,
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::XS, spacing::SM])
        .align_y(Vertical::Center)
        .height(Length::Fixed(sizing::TOPNAV_HEIGHT));

    for id in SectionId::ALL {
        let label = Text::new(ctx.i18n.tr(id.label_key())).size(typography::BODY);
        let link = button(label)
            .on_press(Message::SectionSelected(id))
            .padding([spacing::XXS, spacing::SM]);

        let link = if id == ctx.active {
            link.style(styles::button::nav_active)
        } else {
            link.style(styles::button::nav_inactive)
        };

        row = row.push(link);
    }

    // Like the original page, the toggle is labelled with the theme it
    // switches to, not the current one.
    let toggle_key = if ctx.is_light {
        "nav-theme-dark"
    } else {
        "nav-theme-light"
    };
    let toggle = button(Text::new(ctx.i18n.tr(toggle_key)).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::nav_inactive);

    row = row.push(space().width(Length::Fill)).push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    #[test]
    fn topnav_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: SectionId::Home,
            is_light: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn topnav_view_renders_in_light_mode() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            active: SectionId::Contact,
            is_light: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn section_click_emits_scroll_event() {
        let event = update(Message::SectionSelected(SectionId::Projects));
        assert!(matches!(event, Event::ScrollTo(SectionId::Projects)));
    }

    #[test]
    fn toggle_emits_theme_event() {
        let event = update(Message::ToggleTheme);
        assert!(matches!(event, Event::ThemeToggled));
    }
}
