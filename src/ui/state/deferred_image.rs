// SPDX-License-Identifier: MPL-2.0
//! One-shot deferred image loading.
//!
//! A deferred image stays untouched until its section first becomes visible;
//! at that point a single load is requested and the loader never reacts to
//! visibility again, whatever the outcome. A resource that is never scrolled
//! into view is never read from disk.

use crate::assets::ImageHandle;
use std::path::PathBuf;

#[derive(Debug, Clone)]
enum LoadState {
    /// Not yet visible; nothing has been read.
    Pending,
    /// The one-shot request has been fired.
    Loading,
    Loaded(ImageHandle),
    /// Load failed; the placeholder stays empty (silent degradation).
    Failed,
}

#[derive(Debug, Clone)]
pub struct DeferredImage {
    source: PathBuf,
    state: LoadState,
}

impl DeferredImage {
    /// A fresh loader for the given resource. Constructing a new loader with
    /// a different resource is how a changed source reruns the one-shot load.
    #[must_use]
    pub fn new(source: PathBuf) -> Self {
        Self {
            source,
            state: LoadState::Pending,
        }
    }

    #[must_use]
    pub fn source(&self) -> &PathBuf {
        &self.source
    }

    /// Called when the owning section becomes visible. Returns the path to
    /// load the first time, and `None` ever after.
    pub fn request_load(&mut self) -> Option<PathBuf> {
        match self.state {
            LoadState::Pending => {
                self.state = LoadState::Loading;
                Some(self.source.clone())
            }
            _ => None,
        }
    }

    /// Stores the outcome of the one-shot load.
    pub fn complete(&mut self, result: Option<ImageHandle>) {
        if matches!(self.state, LoadState::Loading) {
            self.state = match result {
                Some(handle) => LoadState::Loaded(handle),
                None => LoadState::Failed,
            };
        }
    }

    /// The displayable handle, once loaded.
    #[must_use]
    pub fn handle(&self) -> Option<&ImageHandle> {
        match &self.state {
            LoadState::Loaded(handle) => Some(handle),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::widget::svg;

    fn handle() -> ImageHandle {
        ImageHandle::Vector(svg::Handle::from_memory(Vec::new()))
    }

    #[test]
    fn first_visibility_requests_the_load() {
        let mut image = DeferredImage::new(PathBuf::from("svg/nodejs.png"));
        assert_eq!(
            image.request_load(),
            Some(PathBuf::from("svg/nodejs.png"))
        );
    }

    #[test]
    fn request_fires_exactly_once() {
        let mut image = DeferredImage::new(PathBuf::from("svg/nodejs.png"));
        assert!(image.request_load().is_some());
        assert!(image.request_load().is_none());

        image.complete(Some(handle()));
        assert!(image.request_load().is_none());
    }

    #[test]
    fn never_visible_never_loads() {
        let image = DeferredImage::new(PathBuf::from("img/portrait.jpeg"));
        assert!(image.handle().is_none());
    }

    #[test]
    fn successful_load_exposes_the_handle() {
        let mut image = DeferredImage::new(PathBuf::from("svg/docker.png"));
        image.request_load();
        image.complete(Some(handle()));
        assert!(image.handle().is_some());
    }

    #[test]
    fn failed_load_degrades_silently() {
        let mut image = DeferredImage::new(PathBuf::from("svg/missing.png"));
        image.request_load();
        image.complete(None);
        assert!(image.handle().is_none());
        // Still one-shot: the failure does not re-arm the request.
        assert!(image.request_load().is_none());
    }

    #[test]
    fn completion_without_request_is_ignored() {
        let mut image = DeferredImage::new(PathBuf::from("svg/git1.png"));
        image.complete(Some(handle()));
        assert!(image.handle().is_none());
    }
}
