// SPDX-License-Identifier: MPL-2.0
//! Self-contained UI state machines driven by ticks and visibility.

pub mod deferred_image;
pub mod rotator;
pub mod scroll_animation;
pub mod typewriter;

pub use deferred_image::DeferredImage;
pub use rotator::WordRotator;
pub use scroll_animation::ScrollAnimation;
pub use typewriter::Typewriter;
