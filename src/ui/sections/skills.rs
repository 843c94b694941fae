// SPDX-License-Identifier: MPL-2.0
//! Skills gallery: a grid of lazily loaded icon tiles.

use crate::assets::DeferredAssets;
use crate::i18n::fluent::I18n;
use crate::profile::Skill;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout;
use crate::ui::sections::thumbnail;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{Column, Container, Row, Text},
    Element, Length,
};

/// Render the skills section.
///
/// `columns` comes from [`layout::skill_columns`] for the current viewport so
/// the grid matches the height the layout reserved; `height` is the computed
/// section height.
pub fn view<'a, Message: 'a>(
    i18n: &'a I18n,
    skills: &'a [Skill],
    icons: &'a DeferredAssets,
    columns: usize,
    height: f32,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("skills-title")).size(typography::TITLE_LG);

    let mut grid = Column::new().spacing(layout::GRID_GAP);
    for (row_index, chunk) in skills.chunks(columns.max(1)).enumerate() {
        let mut row = Row::new().spacing(layout::GRID_GAP);
        for (column_index, skill) in chunk.iter().enumerate() {
            let index = row_index * columns + column_index;
            row = row.push(tile(skill, icons.skill_icon(index)));
        }
        grid = grid.push(row);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(title)
        .push(grid);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(layout::SECTION_PADDING)
        .align_x(Horizontal::Center)
        .into()
}

fn tile<'a, Message: 'a>(
    skill: &'a Skill,
    icon: Option<&crate::assets::ImageHandle>,
) -> Element<'a, Message> {
    let visual: Element<'a, Message> = match icon {
        Some(handle) => thumbnail(handle, sizing::SKILL_ICON_SIZE),
        // Until the icon is loaded (or if the file is missing) the tile shows
        // only its label.
        None => Text::new("").into(),
    };

    let content = Column::new()
        .spacing(spacing::XXS)
        .align_x(Horizontal::Center)
        .push(visual)
        .push(Text::new(skill.name.as_str()).size(typography::CAPTION));

    Container::new(content)
        .width(Length::Fixed(sizing::SKILL_CARD_SIZE))
        .height(Length::Fixed(sizing::SKILL_CARD_SIZE))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;
    use std::path::Path;

    #[test]
    fn skills_view_renders() {
        let i18n = I18n::default();
        let profile = profile::load_embedded().expect("embedded profile");
        let icons = DeferredAssets::new(&profile, Path::new("assets"));
        let _element: Element<'_, ()> = view(&i18n, &profile.skills, &icons, 5, 400.0);
    }

    #[test]
    fn skills_view_renders_with_single_column() {
        let i18n = I18n::default();
        let profile = profile::load_embedded().expect("embedded profile");
        let icons = DeferredAssets::new(&profile, Path::new("assets"));
        let _element: Element<'_, ()> = view(&i18n, &profile.skills, &icons, 1, 2000.0);
    }
}
