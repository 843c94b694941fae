// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Every timer exists only while the state it drives still needs it: the
//! typewriter subscription disappears once the text is fully emitted, and the
//! animation frame tick only runs while a navigation scroll is in flight.
//! Dropping a subscription is the cleanup; nothing is leaked across
//! re-renders.

use super::Message;
use crate::ui::state::Typewriter;
use iced::{time, Subscription};
use std::time::Duration;

/// Frame period of the navigation scroll animation (~60 Hz).
const ANIMATION_FRAME: Duration = Duration::from_millis(16);

/// Creates the periodic tick for the rotating headline.
///
/// An empty word list needs no timer at all.
pub fn create_rotation_subscription(
    interval: Duration,
    has_words: bool,
) -> Subscription<Message> {
    if has_words {
        time::every(interval).map(Message::RotationTick)
    } else {
        Subscription::none()
    }
}

/// Creates the typewriter tick, torn down exactly when the full text has
/// been emitted.
pub fn create_typing_subscription(typewriter: &Typewriter) -> Subscription<Message> {
    if typewriter.is_complete() {
        Subscription::none()
    } else {
        time::every(typewriter.period()).map(Message::TypingTick)
    }
}

/// Creates the frame tick driving the navigation scroll animation.
pub fn create_scroll_animation_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(ANIMATION_FRAME).map(Message::AnimationTick)
    } else {
        Subscription::none()
    }
}
