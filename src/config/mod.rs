//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_folio::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedFolio";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_FOLIO_CONFIG_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub language: Option<String>,
    #[serde(default)]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub relay: RelaySettings,
}

/// Timing settings for the hero animations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    pub rotation_interval_ms: Option<u64>,
    pub typing_chars_per_second: Option<f32>,
}

/// Credentials and endpoint for the email relay.
///
/// Left empty, the relay is considered unconfigured and sends fail with the
/// generic failure message.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelaySettings {
    pub endpoint: Option<String>,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: ThemeMode::default(),
            animation: AnimationConfig::default(),
            relay: RelaySettings::default(),
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: Some(DEFAULT_ROTATION_INTERVAL_MS),
            typing_chars_per_second: Some(DEFAULT_TYPING_CHARS_PER_SECOND),
        }
    }
}

impl Config {
    /// Interval between rotating-headline ticks, clamped to the valid range.
    #[must_use]
    pub fn rotation_interval(&self) -> Duration {
        let ms = self
            .animation
            .rotation_interval_ms
            .unwrap_or(DEFAULT_ROTATION_INTERVAL_MS)
            .clamp(MIN_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS);
        Duration::from_millis(ms)
    }

    /// Typewriter speed in characters per second, clamped to the valid range.
    #[must_use]
    pub fn typing_chars_per_second(&self) -> f32 {
        self.animation
            .typing_chars_per_second
            .unwrap_or(DEFAULT_TYPING_CHARS_PER_SECOND)
            .clamp(MIN_TYPING_CHARS_PER_SECOND, MAX_TYPING_CHARS_PER_SECOND)
    }
}

fn get_default_config_path(dir_override: Option<&Path>) -> Option<PathBuf> {
    if let Some(dir) = dir_override {
        return Some(dir.join(CONFIG_FILE));
    }
    if let Ok(dir) = std::env::var(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(dir).join(CONFIG_FILE));
    }
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    load_with_dir(None)
}

/// Loads the configuration, honoring a directory override (CLI flag).
pub fn load_with_dir(dir_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = get_default_config_path(dir_override) {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path(None) {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
