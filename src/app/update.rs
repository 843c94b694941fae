// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers the `App::update`
//! entrypoint dispatches to.

use super::{App, Message, PAGE_SCROLLABLE_ID};
use crate::assets::{self, AssetKey, ImageHandle};
use crate::config;
use crate::diagnostics::DiagnosticEvent;
use crate::error::Error;
use crate::relay::{self, RelayConfig};
use crate::ui::contact_form::{self, SubmissionId, NAME_INPUT_ID};
use crate::ui::layout::SectionLayout;
use crate::ui::section::SectionId;
use crate::ui::sections::hero;
use crate::ui::state::ScrollAnimation;
use crate::ui::topnav;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::{Rectangle, Size, Task};
use std::path::PathBuf;
use std::time::Instant;

pub fn handle_topnav_message(app: &mut App, message: topnav::Message) -> Task<Message> {
    match topnav::update(message) {
        topnav::Event::ScrollTo(id) => scroll_to_section(app, id),
        topnav::Event::ThemeToggled => {
            app.theme_mode = app.theme_mode.toggled();
            app.config.theme_mode = app.theme_mode;
            if let Err(err) = config::save(&app.config) {
                app.diagnostics.record(DiagnosticEvent::ConfigWarning {
                    detail: err.to_string(),
                });
            }
            Task::none()
        }
    }
}

pub fn handle_hero_message(app: &mut App, message: hero::Message) -> Task<Message> {
    match hero::update(message) {
        hero::Event::ScrollTo(id) => scroll_to_section(app, id),
    }
}

/// Starts the animated scroll to a section.
///
/// Jumping to the contact section also focuses the name input. The focus is
/// requested immediately, not after the animation settles; the input is
/// already mounted, so the focus lands while the page is still gliding.
pub fn scroll_to_section(app: &mut App, id: SectionId) -> Task<Message> {
    let target = app.layout.scroll_target(id);
    app.scroll_animation = Some(ScrollAnimation::start(
        app.scroll_offset,
        target,
        Instant::now(),
    ));

    if id == SectionId::Contact {
        operation::focus(Id::new(NAME_INPUT_ID))
    } else {
        Task::none()
    }
}

pub fn handle_contact_message(
    app: &mut App,
    message: contact_form::Message,
) -> Task<Message> {
    match contact_form::update(&mut app.contact, message) {
        contact_form::Event::None => Task::none(),
        contact_form::Event::Send { submission, fields } => {
            let relay_config = RelayConfig::from_settings(&app.config.relay);
            Task::perform(relay::send(relay_config, fields), move |result| {
                Message::RelayCompleted { submission, result }
            })
        }
    }
}

pub fn handle_relay_completed(
    app: &mut App,
    submission: SubmissionId,
    result: Result<(), crate::error::RelayError>,
) -> Task<Message> {
    // The underlying cause is diagnostics-only; the form shows the generic
    // failure message.
    if let Err(err) = &result {
        app.diagnostics.record(DiagnosticEvent::RelayFailure {
            detail: err.to_string(),
        });
    }
    contact_form::handle_outcome(&mut app.contact, submission, result.is_ok());
    Task::none()
}

/// Re-derives the observation batch from the scroll offset and feeds the
/// activity tracker; sections revealed for the first time kick off their
/// deferred asset loads.
pub fn handle_page_scrolled(
    app: &mut App,
    offset: AbsoluteOffset,
    bounds: Rectangle,
) -> Task<Message> {
    app.scroll_offset = offset.y;

    let viewport = Size::new(bounds.width, bounds.height);
    if viewport != app.layout.viewport() {
        app.layout = SectionLayout::compute(&app.profile, viewport);
    }

    sync_tracker(app)
}

pub fn handle_rotation_tick(app: &mut App) -> Task<Message> {
    app.rotator.advance();
    Task::none()
}

pub fn handle_typing_tick(app: &mut App) -> Task<Message> {
    app.typewriter.tick();
    Task::none()
}

/// Advances the navigation scroll animation by one frame, mirroring the new
/// offset to the scrollable widget and to the activity tracker (programmatic
/// scrolling does not produce `on_scroll` callbacks).
pub fn handle_animation_tick(app: &mut App, now: Instant) -> Task<Message> {
    let Some(animation) = app.scroll_animation else {
        return Task::none();
    };

    let frame = animation.sample(now);
    app.scroll_offset = frame.offset;
    if frame.finished {
        app.scroll_animation = None;
    }

    let scroll_task = operation::scroll_to(
        Id::new(PAGE_SCROLLABLE_ID),
        AbsoluteOffset {
            x: 0.0,
            y: frame.offset,
        },
    );

    Task::batch([scroll_task, sync_tracker(app)])
}

pub fn handle_asset_loaded(
    app: &mut App,
    key: AssetKey,
    path: String,
    result: Result<ImageHandle, Error>,
) -> Task<Message> {
    match result {
        Ok(handle) => app.assets.complete(key, Some(handle)),
        Err(err) => {
            // Silent degradation: the placeholder stays empty.
            app.diagnostics.record(DiagnosticEvent::AssetLoadFailure {
                path,
                detail: err.to_string(),
            });
            app.assets.complete(key, None);
        }
    }
    Task::none()
}

/// Observes the current offset and starts deferred loads for every newly
/// revealed section.
pub fn sync_tracker(app: &mut App) -> Task<Message> {
    let observations = app.layout.observe(app.scroll_offset);
    let newly_revealed = app.tracker.observe(&observations);
    load_assets_for(app, &newly_revealed)
}

pub fn load_assets_for(app: &mut App, sections: &[SectionId]) -> Task<Message> {
    let mut tasks = Vec::new();
    for section in sections {
        for (key, path) in app.assets.requests_for(*section) {
            tasks.push(spawn_asset_load(key, path));
        }
    }
    Task::batch(tasks)
}

fn spawn_asset_load(key: AssetKey, path: PathBuf) -> Task<Message> {
    let display = path.display().to_string();
    Task::perform(assets::load(path), move |result| Message::AssetLoaded {
        key,
        path: display.clone(),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::layout::BOTTOM_MARGIN_FRACTION;

    #[test]
    fn rotation_tick_advances_the_headline() {
        let mut app = App::default();
        let first = app.rotator.current().map(str::to_string);
        let _ = handle_rotation_tick(&mut app);
        assert_ne!(app.rotator.current().map(str::to_string), first);
    }

    #[test]
    fn typing_tick_grows_the_prefix() {
        let mut app = App::default();
        let _ = handle_typing_tick(&mut app);
        assert_eq!(app.typewriter.emitted().chars().count(), 1);
    }

    #[test]
    fn scrolling_to_a_section_starts_an_animation() {
        let mut app = App::default();
        assert!(app.scroll_animation.is_none());
        let _ = scroll_to_section(&mut app, SectionId::Projects);

        let animation = app.scroll_animation.expect("animation started");
        assert_eq!(
            animation.target(),
            app.layout.scroll_target(SectionId::Projects)
        );
    }

    #[test]
    fn scrolling_reveals_and_activates_sections() {
        let mut app = App::default();
        assert!(!app.tracker.is_revealed(SectionId::Skills));

        let offset = app.layout.top(SectionId::Skills);
        let bounds = Rectangle::new(
            iced::Point::ORIGIN,
            app.layout.viewport(),
        );
        let _ = handle_page_scrolled(
            &mut app,
            AbsoluteOffset { x: 0.0, y: offset },
            bounds,
        );

        assert!(app.tracker.is_revealed(SectionId::Skills));
        assert_eq!(app.tracker.active(), SectionId::Skills);
    }

    #[test]
    fn animation_frames_keep_the_tracker_in_sync() {
        let mut app = App::default();
        let _ = scroll_to_section(&mut app, SectionId::Experience);

        // Sample the animation well past its duration: it lands on the
        // target offset and clears itself.
        let _ = handle_animation_tick(
            &mut app,
            Instant::now() + std::time::Duration::from_secs(5),
        );

        assert!(app.scroll_animation.is_none());
        assert_eq!(
            app.scroll_offset,
            app.layout.scroll_target(SectionId::Experience)
        );
        assert!(app.tracker.is_revealed(SectionId::Experience));
    }

    #[test]
    fn relay_rejection_is_recorded_for_diagnostics_only() {
        let mut app = App::default();
        app.contact.name = "Jo".into();
        app.contact.email = "jo@x.com".into();
        app.contact.message = "hi".into();

        let event = contact_form::update(&mut app.contact, contact_form::Message::Submit);
        let contact_form::Event::Send { submission, .. } = event else {
            panic!("expected a send event");
        };

        let _ = handle_relay_completed(
            &mut app,
            submission,
            Err(crate::error::RelayError::Timeout),
        );

        assert_eq!(app.diagnostics.len(), 1);
        assert!(matches!(
            app.contact.status(),
            contact_form::SubmissionStatus::Error("contact-failed")
        ));
        // The form keeps its contents for a manual resubmit.
        assert_eq!(app.contact.name, "Jo");
    }

    #[test]
    fn failed_asset_load_degrades_silently() {
        let mut app = App::default();
        let _ = load_assets_for(&mut app, &[SectionId::Skills]);

        let _ = handle_asset_loaded(
            &mut app,
            AssetKey::SkillIcon(0),
            "assets/svg/nodejs.png".into(),
            Err(Error::Io("missing".into())),
        );

        assert!(app.assets.skill_icon(0).is_none());
        assert_eq!(app.diagnostics.len(), 1);
    }

    #[test]
    fn bottom_margin_constant_matches_the_original_root_margin() {
        assert_eq!(BOTTOM_MARGIN_FRACTION, 0.10);
    }
}
