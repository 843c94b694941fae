// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the page content, the animation state
//! machines, the section activity tracker, and the contact form, and
//! translates messages into side effects like relay sends or deferred asset
//! loads. Policy decisions (window sizing, which section is revealed on
//! mount, persistence of the theme toggle) stay close to the update loop so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::assets::{self, DeferredAssets};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticEvent, DiagnosticsLog};
use crate::i18n::fluent::I18n;
use crate::profile::{self, Profile};
use crate::ui::contact_form;
use crate::ui::layout::SectionLayout;
use crate::ui::section::SectionId;
use crate::ui::state::{ScrollAnimation, Typewriter, WordRotator};
use crate::ui::theming::ThemeMode;
use crate::ui::tracker::SectionActivityTracker;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::{Path, PathBuf};

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Widget id of the page scrollable.
pub const PAGE_SCROLLABLE_ID: &str = "page-scroll";

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    profile: Profile,
    config: Config,
    theme_mode: ThemeMode,
    layout: SectionLayout,
    tracker: SectionActivityTracker,
    rotator: WordRotator,
    typewriter: Typewriter,
    contact: contact_form::State,
    assets: DeferredAssets,
    /// In-flight navigation scroll, if any.
    scroll_animation: Option<ScrollAnimation>,
    /// Last known absolute offset of the page scrollable.
    scroll_offset: f32,
    diagnostics: DiagnosticsLog,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.tracker.active())
            .field("scroll_offset", &self.scroll_offset)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    assets::init_cli_override(flags.assets_dir.clone());

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let profile = profile::load_embedded().expect("embedded profile is valid");
        Self::from_parts(profile, Config::default(), I18n::default(), None)
    }
}

impl App {
    /// Initializes application state and kicks off the deferred loads of the
    /// first section, which counts as revealed on mount.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let mut startup_warnings = Vec::new();

        let config_dir = flags.config_dir.as_deref().map(Path::new);
        let config = match config::load_with_dir(config_dir) {
            Ok(config) => config,
            Err(err) => {
                startup_warnings.push(err.to_string());
                Config::default()
            }
        };

        let i18n = I18n::new(flags.lang.clone(), &config);

        // A broken custom profile falls back to the embedded one rather than
        // aborting; the page still renders something.
        let profile = match flags.profile_path.as_deref() {
            Some(path) => match profile::load_from_path(Path::new(path)) {
                Ok(profile) => profile,
                Err(err) => {
                    startup_warnings.push(err.to_string());
                    profile::load_embedded().expect("embedded profile is valid")
                }
            },
            None => profile::load_embedded().expect("embedded profile is valid"),
        };

        let mut app = Self::from_parts(profile, config, i18n, None);
        for warning in startup_warnings {
            app.diagnostics
                .record(DiagnosticEvent::ConfigWarning { detail: warning });
        }

        // The first section is visible without any scrolling: latch it
        // revealed and start its deferred loads right away.
        app.tracker.reveal(SectionId::Home);
        let task = update::load_assets_for(&mut app, &[SectionId::Home]);

        (app, task)
    }

    fn from_parts(
        profile: Profile,
        config: Config,
        i18n: I18n,
        assets_root: Option<PathBuf>,
    ) -> Self {
        let assets_root = assets_root.unwrap_or_else(assets::assets_root);
        let viewport = Size::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32 - crate::ui::design_tokens::sizing::TOPNAV_HEIGHT,
        );

        let rotator = WordRotator::new(profile.hero.roles.clone(), config.rotation_interval());
        let typewriter =
            Typewriter::new(profile.hero.intro.clone(), config.typing_chars_per_second());
        let layout = SectionLayout::compute(&profile, viewport);
        let assets = DeferredAssets::new(&profile, &assets_root);
        let theme_mode = config.theme_mode;

        Self {
            i18n,
            profile,
            config,
            theme_mode,
            layout,
            tracker: SectionActivityTracker::new(),
            rotator,
            typewriter,
            contact: contact_form::State::default(),
            assets,
            scroll_animation: None,
            scroll_offset: 0.0,
            diagnostics: DiagnosticsLog::new(),
        }
    }

    fn title(&self) -> String {
        format!(
            "{} — {}",
            self.profile.identity.name,
            self.i18n.tr("window-title")
        )
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TopNav(nav_message) => update::handle_topnav_message(self, nav_message),
            Message::Hero(hero_message) => update::handle_hero_message(self, hero_message),
            Message::Contact(contact_message) => {
                update::handle_contact_message(self, contact_message)
            }
            Message::PageScrolled { offset, bounds } => {
                update::handle_page_scrolled(self, offset, bounds)
            }
            Message::RotationTick(_instant) => update::handle_rotation_tick(self),
            Message::TypingTick(_instant) => update::handle_typing_tick(self),
            Message::AnimationTick(instant) => update::handle_animation_tick(self, instant),
            Message::AssetLoaded { key, path, result } => {
                update::handle_asset_loaded(self, key, path, result)
            }
            Message::RelayCompleted { submission, result } => {
                update::handle_relay_completed(self, submission, result)
            }
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_rotation_subscription(
                self.rotator.interval(),
                self.rotator.current().is_some(),
            ),
            subscription::create_typing_subscription(&self.typewriter),
            subscription::create_scroll_animation_subscription(self.scroll_animation.is_some()),
        ])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_app_starts_on_home() {
        let app = App::default();
        assert_eq!(app.tracker.active(), SectionId::Home);
        assert!(app.scroll_animation.is_none());
        assert_eq!(app.scroll_offset, 0.0);
    }

    #[test]
    fn title_carries_the_profile_name() {
        let app = App::default();
        assert!(app.title().contains(&app.profile.identity.name));
    }

    #[test]
    fn typewriter_starts_empty_and_incomplete() {
        let app = App::default();
        assert_eq!(app.typewriter.emitted(), "");
        assert!(!app.typewriter.is_complete());
    }

    #[test]
    fn theme_follows_config_mode() {
        let app = App::default();
        // Default config is dark mode.
        assert!(matches!(app.theme(), Theme::Dark));
    }
}
