// SPDX-License-Identifier: MPL-2.0
//! Project list: one card per project with optional domain and highlights.

use crate::i18n::fluent::I18n;
use crate::profile::Project;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::layout;
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{Column, Container, Text},
    Element, Length,
};

/// Render the projects section at the height reserved by the layout.
pub fn view<'a, Message: 'a>(
    i18n: &'a I18n,
    projects: &'a [Project],
    height: f32,
) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("projects-title")).size(typography::TITLE_LG);

    let mut list = Column::new()
        .spacing(layout::CARD_GAP)
        .max_width(sizing::CONTENT_MAX_WIDTH);
    for project in projects {
        list = list.push(card(i18n, project));
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

fn card<'a, Message: 'a>(i18n: &'a I18n, project: &'a Project) -> Element<'a, Message> {
    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(project.title.as_str()).size(typography::TITLE_MD));

    if let Some(domain) = &project.domain {
        column = column.push(
            Text::new(i18n.tr_with_args("projects-domain", &[("domain", domain)]))
                .size(typography::TITLE_SM),
        );
    }

    column = column.push(Text::new(project.summary.as_str()).size(typography::BODY));

    if !project.highlights.is_empty() {
        column = column
            .push(Text::new(i18n.tr("projects-key-features")).size(typography::BODY_LG));
        for highlight in &project.highlights {
            column = column.push(
                Text::new(format!("• {highlight}")).size(typography::BODY),
            );
        }
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile;

    #[test]
    fn projects_view_renders() {
        let i18n = I18n::default();
        let profile = profile::load_embedded().expect("embedded profile");
        let _element: Element<'_, ()> = view(&i18n, &profile.projects, 900.0);
    }

    #[test]
    fn projects_view_renders_empty_list() {
        let i18n = I18n::default();
        let _element: Element<'_, ()> = view(&i18n, &[], 200.0);
    }
}
