// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::assets::{AssetKey, ImageHandle};
use crate::error::{Error, RelayError};
use crate::ui::contact_form;
use crate::ui::sections::hero;
use crate::ui::topnav;
use iced::widget::scrollable::AbsoluteOffset;
use iced::Rectangle;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    TopNav(topnav::Message),
    Hero(hero::Message),
    Contact(contact_form::Message),
    /// The page scrollable moved or was resized.
    PageScrolled {
        offset: AbsoluteOffset,
        bounds: Rectangle,
    },
    /// Periodic tick advancing the rotating headline.
    RotationTick(Instant),
    /// Periodic tick revealing the next typewriter character.
    TypingTick(Instant),
    /// Frame tick for the navigation scroll animation.
    AnimationTick(Instant),
    /// Outcome of a one-shot deferred asset load.
    AssetLoaded {
        key: AssetKey,
        path: String,
        result: Result<ImageHandle, Error>,
    },
    /// Outcome of a relay send, tagged with its submission.
    RelayCompleted {
        submission: contact_form::SubmissionId,
        result: Result<(), RelayError>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional path to a profile TOML replacing the embedded content.
    pub profile_path: Option<String>,
    /// Optional asset root override (for icons and the portrait).
    pub assets_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `ICED_FOLIO_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
