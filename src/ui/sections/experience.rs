// SPDX-License-Identifier: MPL-2.0
//! Experience timeline: one card per position, newest first. The first card
//! carries the highlighted border, matching the emphasis of the original
//! layout.

use crate::i18n::fluent::I18n;
use crate::profile::Position;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Render the experience section at the height reserved by the layout.
pub fn view<'a, Message: 'a>(
    i18n: &'a I18n,
    experience: &'a [Position],
    height: f32,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("experience-title")).size(typography::TITLE_LG);

    let mut list = Column::new()
        .spacing(layout::CARD_GAP)
        .max_width(sizing::CONTENT_MAX_WIDTH);
    for (index, position) in experience.iter().enumerate() {
        list = list.push(card(position, index == 0));
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(list);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(layout::SECTION_PADDING)
        .align_x(Horizontal::Center)
        .into()
}

fn card<'a, Message: 'a>(position: &'a Position, highlighted: bool) -> Element<'a, Message> {
    let header = Row::new()
        .spacing(spacing::SM)
        .push(
            Text::new(position.company.as_str())
                .size(typography::TITLE_SM)
                .width(Length::Fill),
        )
        .push(Text::new(position.period.as_str()).size(typography::BODY_SM));

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(header)
        .push(Text::new(position.role.as_str()).size(typography::BODY_LG));

    for highlight in &position.highlights {
        column = column.push(Text::new(format!("• {highlight}")).size(typography::BODY));
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(if highlighted {
            styles::container::card_highlighted
        } else {
            styles::container::card
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;

    #[test]
    fn experience_view_renders() {
        let i18n = I18n::default();
        let profile = profile::load_embedded().expect("embedded profile");
        let _element: Element<'_, ()> = view(&i18n, &profile.experience, 700.0);
    }
}
