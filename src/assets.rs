// SPDX-License-Identifier: MPL-2.0
//! Static asset resolution and loading.
//!
//! Icon and portrait paths from the profile are resolved by simple
//! concatenation against a single asset root.
//!
//! # Path Resolution Order
//!
//! The asset root is resolved in the following priority order:
//! 1. **CLI argument** (`--assets-dir`) - set via [`init_cli_override`]
//! 2. **Environment variable** (`ICED_FOLIO_ASSETS_DIR`)
//! 3. **`assets/` next to the executable**, when it exists
//! 4. **`assets/` in the working directory**

use crate::error::{Error, Result};
use crate::profile::Profile;
use crate::ui::section::SectionId;
use crate::ui::state::DeferredImage;
use iced::widget::{image, svg};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Environment variable to override the asset root.
pub const ENV_ASSETS_DIR: &str = "ICED_FOLIO_ASSETS_DIR";

/// Global CLI override for the asset root (set once at startup).
static CLI_ASSETS_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the asset root.
///
/// This should be called once at application startup, before any resolution
/// functions are called.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_override(assets_dir: Option<String>) {
    CLI_ASSETS_DIR
        .set(assets_dir.map(PathBuf::from))
        .expect("CLI assets dir override already initialized");
}

/// Returns the resolved asset root directory.
#[must_use]
pub fn assets_root() -> PathBuf {
    if let Some(Some(dir)) = CLI_ASSETS_DIR.get() {
        return dir.clone();
    }

    if let Ok(dir) = std::env::var(ENV_ASSETS_DIR) {
        return PathBuf::from(dir);
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(exe_dir) = exe.parent() {
            let candidate = exe_dir.join("assets");
            if candidate.is_dir() {
                return candidate;
            }
        }
    }

    PathBuf::from("assets")
}

/// Resolves a profile-relative asset path against the asset root.
#[must_use]
pub fn resolve(root: &Path, relative: &str) -> PathBuf {
    root.join(relative)
}

/// A displayable handle for either raster or vector resources.
#[derive(Debug, Clone)]
pub enum ImageHandle {
    Raster(image::Handle),
    Vector(svg::Handle),
}

/// Reads an asset from disk and wraps it in the matching Iced handle.
///
/// Runs on the async executor so a slow disk never blocks the UI loop. The
/// bytes are decoded lazily by the renderer; a missing or unreadable file is
/// the only failure surfaced here.
pub async fn load(path: PathBuf) -> Result<ImageHandle> {
    let bytes = std::fs::read(&path)
        .map_err(|e| Error::Io(format!("{}: {}", path.display(), e)))?;

    let is_svg = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

    if is_svg {
        Ok(ImageHandle::Vector(svg::Handle::from_memory(bytes)))
    } else {
        Ok(ImageHandle::Raster(image::Handle::from_bytes(bytes)))
    }
}

/// Identifies one deferred resource owned by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Portrait,
    SkillIcon(usize),
}

/// All deferred images of the page, keyed by what they decorate.
///
/// Each entry is a one-shot [`DeferredImage`]: the first reveal of its owning
/// section requests the load, and nothing ever re-requests it.
#[derive(Debug)]
pub struct DeferredAssets {
    portrait: Option<DeferredImage>,
    skill_icons: Vec<DeferredImage>,
}

impl DeferredAssets {
    /// Builds the catalog from the profile, resolving every path against the
    /// asset root once.
    #[must_use]
    pub fn new(profile: &Profile, root: &Path) -> Self {
        Self {
            portrait: profile
                .hero
                .portrait
                .as_deref()
                .map(|p| DeferredImage::new(resolve(root, p))),
            skill_icons: profile
                .skills
                .iter()
                .map(|skill| DeferredImage::new(resolve(root, &skill.icon)))
                .collect(),
        }
    }

    /// Loads to start now that the given section is revealed. Each returned
    /// entry is requested exactly once across the page session.
    pub fn requests_for(&mut self, section: SectionId) -> Vec<(AssetKey, PathBuf)> {
        match section {
            SectionId::Home => self
                .portrait
                .as_mut()
                .and_then(|image| image.request_load())
                .map(|path| (AssetKey::Portrait, path))
                .into_iter()
                .collect(),
            SectionId::Skills => self
                .skill_icons
                .iter_mut()
                .enumerate()
                .filter_map(|(index, image)| {
                    image
                        .request_load()
                        .map(|path| (AssetKey::SkillIcon(index), path))
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Stores a load outcome.
    pub fn complete(&mut self, key: AssetKey, handle: Option<ImageHandle>) {
        match key {
            AssetKey::Portrait => {
                if let Some(image) = self.portrait.as_mut() {
                    image.complete(handle);
                }
            }
            AssetKey::SkillIcon(index) => {
                if let Some(image) = self.skill_icons.get_mut(index) {
                    image.complete(handle);
                }
            }
        }
    }

    #[must_use]
    pub fn portrait(&self) -> Option<&ImageHandle> {
        self.portrait.as_ref().and_then(DeferredImage::handle)
    }

    #[must_use]
    pub fn skill_icon(&self, index: usize) -> Option<&ImageHandle> {
        self.skill_icons.get(index).and_then(DeferredImage::handle)
    }
}
