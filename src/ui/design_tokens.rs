// SPDX-License-Identifier: MPL-2.0
//! Design tokens for the page.
//!
//! Every color, size, and distance the views use comes from these scales, so
//! the light and dark renditions of the page stay consistent and a spacing
//! change never has to hunt through view code.
//!
//! ```
//! use iced_folio::ui::design_tokens::{palette, spacing};
//! use iced::Color;
//!
//! let accent = Color { a: 0.5, ..palette::PRIMARY_500 };
//! let gap = spacing::MD; // 16px
//! ```

use iced::Color;

/// Base colors. The brand scale is the warm amber the page uses as its main
/// accent; semantic colors follow the usual red/amber/green/blue convention.
pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand accent (amber scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.99, 0.86, 0.65);
    pub const PRIMARY_400: Color = Color::from_rgb(0.97, 0.69, 0.3);
    pub const PRIMARY_500: Color = Color::from_rgb(0.93, 0.58, 0.16);
    pub const PRIMARY_600: Color = Color::from_rgb(0.82, 0.47, 0.1);
    pub const PRIMARY_700: Color = Color::from_rgb(0.67, 0.37, 0.07);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

/// Alpha levels for translucent fills.
pub mod opacity {
    /// Tint behind the inline status messages.
    pub const STATUS_TINT: f32 = 0.2;

    /// Surface of the top navigation bar.
    pub const SURFACE: f32 = 0.95;
}

/// Spacing scale on an 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

/// Fixed component dimensions.
pub mod sizing {
    /// Height of the top navigation bar.
    pub const TOPNAV_HEIGHT: f32 = 52.0;

    /// Hero portrait (square).
    pub const PORTRAIT_SIZE: f32 = 220.0;

    /// Skill gallery tile (square) and the icon inside it.
    pub const SKILL_CARD_SIZE: f32 = 120.0;
    pub const SKILL_ICON_SIZE: f32 = 64.0;

    /// Maximum width of the readable content column.
    pub const CONTENT_MAX_WIDTH: f32 = 820.0;
}

/// Font size scale.
pub mod typography {
    /// The hero name.
    pub const TITLE_XL: f32 = 42.0;

    /// Section headings.
    pub const TITLE_LG: f32 = 30.0;

    /// Rotating headline, project titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Subheadings (company, domain).
    pub const TITLE_SM: f32 = 18.0;

    /// Emphasis body text.
    pub const BODY_LG: f32 = 16.0;

    /// Default body text.
    pub const BODY: f32 = 14.0;

    /// Secondary labels, form labels, periods.
    pub const BODY_SM: f32 = 13.0;

    /// Skill tile captions.
    pub const CAPTION: f32 = 12.0;
}

/// Border width scale.
pub mod border {
    /// Subtle card borders.
    pub const WIDTH_SM: f32 = 1.0;

    /// Emphasis border on the highlighted experience card.
    pub const WIDTH_MD: f32 = 2.0;
}

/// Corner radii.
pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Pill/circle shape (portrait placeholder).
    pub const FULL: f32 = 9999.0;
}

/// Shadow presets for raised elements.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// The scales only make sense ordered; keep that checked at compile time.
const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::LG);
    assert!(spacing::LG < spacing::XL);
    assert!(spacing::XL < spacing::XXL);

    assert!(opacity::STATUS_TINT > 0.0 && opacity::STATUS_TINT < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(sizing::SKILL_ICON_SIZE < sizing::SKILL_CARD_SIZE);
    assert!(sizing::PORTRAIT_SIZE < sizing::CONTENT_MAX_WIDTH);

    assert!(typography::CAPTION < typography::BODY_SM);
    assert!(typography::BODY_SM < typography::BODY);
    assert!(typography::BODY < typography::BODY_LG);
    assert!(typography::BODY_LG < typography::TITLE_SM);
    assert!(typography::TITLE_SM < typography::TITLE_MD);
    assert!(typography::TITLE_MD < typography::TITLE_LG);
    assert!(typography::TITLE_LG < typography::TITLE_XL);

    assert!(border::WIDTH_SM < border::WIDTH_MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }

    #[test]
    fn brand_accent_is_warm() {
        assert!(palette::PRIMARY_500.r > palette::PRIMARY_500.b);
    }
}
