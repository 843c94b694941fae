// SPDX-License-Identifier: MPL-2.0
use iced_folio::config::{self, Config};
use iced_folio::i18n::fluent::I18n;
use iced_folio::profile;
use iced_folio::ui::layout::SectionLayout;
use iced_folio::ui::section::SectionId;
use iced_folio::ui::theming::ThemeMode;
use iced_folio::ui::tracker::SectionActivityTracker;
use iced::Size;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        language: Some("en-US".to_string()),
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        language: Some("fr".to_string()),
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_theme_mode_round_trip() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        theme_mode: ThemeMode::Light,
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to save config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded.theme_mode, ThemeMode::Light);
}

/// Walks the page from top to bottom the way a user scrolling would, and
/// checks that every section ends up revealed exactly once and that the
/// active section follows the scroll position monotonically.
#[test]
fn test_scroll_walk_reveals_every_section() {
    let profile = profile::load_embedded().expect("embedded profile");
    let layout = SectionLayout::compute(&profile, Size::new(900.0, 668.0));
    let mut tracker = SectionActivityTracker::new();
    tracker.reveal(SectionId::Home);

    let max_offset = layout.content_height() - 668.0;
    let mut offset = 0.0;
    let mut last_active_index = 0;
    while offset <= max_offset {
        tracker.observe(&layout.observe(offset));
        assert!(
            tracker.active().index() >= last_active_index,
            "active section moved backwards while scrolling down"
        );
        last_active_index = tracker.active().index();
        offset += 120.0;
    }
    tracker.observe(&layout.observe(max_offset));

    for id in SectionId::ALL {
        assert!(tracker.is_revealed(id), "{id:?} was never revealed");
    }
    assert_eq!(tracker.active(), SectionId::Contact);
}

/// Scrolling back up must not reset any reveal latch.
#[test]
fn test_latches_survive_scrolling_back() {
    let profile = profile::load_embedded().expect("embedded profile");
    let layout = SectionLayout::compute(&profile, Size::new(900.0, 668.0));
    let mut tracker = SectionActivityTracker::new();

    let max_offset = layout.content_height() - 668.0;
    tracker.observe(&layout.observe(max_offset / 2.0));
    tracker.observe(&layout.observe(max_offset));
    tracker.observe(&layout.observe(0.0));

    assert!(tracker.is_revealed(SectionId::Contact));
    assert_eq!(tracker.active(), SectionId::Home);
}
