// SPDX-License-Identifier: MPL-2.0
//! The five content regions of the page.
//!
//! Every section view takes the height computed by
//! [`crate::ui::layout::SectionLayout`] so the rendered extents and the
//! scroll-tracking geometry can never drift apart.

pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use crate::assets::ImageHandle;
use iced::widget::{image, svg};
use iced::{Element, Length};

/// Renders a loaded asset at a fixed square size.
pub fn thumbnail<'a, Message: 'a>(handle: &ImageHandle, size: f32) -> Element<'a, Message> {
    match handle {
        ImageHandle::Raster(handle) => image::Image::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
        ImageHandle::Vector(handle) => svg::Svg::new(handle.clone())
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into(),
    }
}
