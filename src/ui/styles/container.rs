// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the top navigation bar.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so the bar stays readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Boxed list item (project card, experience entry, skill tile).
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: extended.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Card variant with the brand border, used for the most recent experience
/// entry, matching the emphasis the original layout gives it.
pub fn card_highlighted(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.weak.color)),
        border: Border {
            color: palette::PRIMARY_500,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Inline success message under the contact form.
pub fn status_success(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::STATUS_TINT,
            ..palette::SUCCESS_500
        })),
        border: Border {
            color: palette::SUCCESS_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::SUCCESS_500),
        ..Default::default()
    }
}

/// Inline error message under the contact form.
pub fn status_error(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::STATUS_TINT,
            ..palette::ERROR_500
        })),
        border: Border {
            color: palette::ERROR_500,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        text_color: Some(palette::ERROR_500),
        ..Default::default()
    }
}
