// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use vitrine_catalog::Project;
use vitrine_event_state::{Command, KeyMap, SwipeState};
use vitrine_grid::GridLayout;
use vitrine_lightbox::{Lightbox, LightboxEvent};
use vitrine_loader::{LazyLoader, LoadState, LoadTracker, PreloadCache};
use vitrine_nav::Route;
use vitrine_timing::Millis;

use crate::effect::{image_requested, image_settled};
use crate::{Class, Effect, Input, SiteConfig, Target};

/// Controller for a project's gallery page: lazy thumbnails plus a lightbox.
#[derive(Clone, Debug)]
pub struct GalleryPage {
    project_id: String,
    project_href: String,
    images: Vec<String>,
    layout: GridLayout,
    thumbs: Vec<Rect>,
    visible: Rect,
    lazy: LazyLoader<usize>,
    tracker: LoadTracker<usize>,
    lightbox: Lightbox,
    preload: PreloadCache,
    swipe: SwipeState,
    keys: KeyMap,
    /// Load state of the lightbox image; `None` while the lightbox is closed.
    viewer: Option<LoadState>,
}

impl GalleryPage {
    pub(crate) fn new(project: &Project, config: &SiteConfig, viewport: Size) -> Self {
        let images = project.gallery_images();
        let layout = GridLayout::new(config.grid);
        let thumbs = layout.flow(viewport.width, images.len());
        let mut lazy = LazyLoader::new(config.lazy_root_margin);
        for (index, &rect) in thumbs.iter().enumerate() {
            lazy.observe(index, rect);
        }
        Self {
            project_id: project.id.clone(),
            project_href: Route::Project {
                id: project.id.clone(),
            }
            .href(),
            lightbox: Lightbox::new(images.len(), config.transition_ms),
            images,
            layout,
            thumbs,
            visible: Rect::from_origin_size(Point::ZERO, viewport),
            lazy,
            tracker: LoadTracker::new(),
            preload: PreloadCache::new(),
            swipe: SwipeState::new(config.swipe),
            keys: KeyMap::default(),
            viewer: None,
        }
    }

    /// Initial effects: place thumbnails and load the ones in view.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = self.place_effects();
        effects.extend(self.reveal());
        effects
    }

    /// Feeds one input, returning the DOM work it causes.
    pub fn handle(&mut self, input: Input, now: Millis) -> Vec<Effect> {
        match input {
            Input::Scroll(visible) => {
                self.visible = visible;
                self.reveal()
            }
            Input::Resize(size) => {
                self.visible = Rect::from_origin_size(self.visible.origin(), size);
                self.thumbs = self.layout.flow(size.width, self.images.len());
                for (index, &rect) in self.thumbs.iter().enumerate() {
                    if self.lazy.is_observed(&index) {
                        self.lazy.observe(index, rect);
                    }
                }
                let mut effects = self.place_effects();
                effects.extend(self.reveal());
                effects
            }
            Input::Click(Target::Thumbnail(index)) => {
                let event = self.lightbox.open(index, now);
                self.lightbox_effects(event)
            }
            Input::Click(Target::NextButton) => self.run(Command::Next, now),
            Input::Click(Target::PreviousButton) => self.run(Command::Previous, now),
            Input::Click(Target::CloseButton | Target::Lightbox) => self.run(Command::Close, now),
            Input::Click(Target::ProjectLink) => vec![Effect::Navigate(self.project_href.clone())],
            Input::Key(key) => match self.keys.command(key) {
                Some(command) => self.run(command, now),
                None => Vec::new(),
            },
            Input::PointerDown(pos) if self.lightbox.is_open() => {
                self.swipe.start(pos, now);
                Vec::new()
            }
            Input::PointerMove(pos) => {
                self.swipe.update(pos);
                Vec::new()
            }
            Input::PointerUp(pos) => match self.swipe.end(pos, now) {
                Some(swipe) => self.run(swipe.command(), now),
                None => Vec::new(),
            },
            Input::ImageLoaded(Target::Thumbnail(index)) => {
                if self.tracker.mark_loaded(&index) {
                    image_settled(Target::Thumbnail(index), LoadState::Loaded)
                } else {
                    Vec::new()
                }
            }
            Input::ImageFailed(Target::Thumbnail(index)) => {
                if self.tracker.mark_failed(&index) {
                    image_settled(Target::Thumbnail(index), LoadState::Error)
                } else {
                    Vec::new()
                }
            }
            Input::ImageLoaded(Target::LightboxImage) => self.settle_viewer(LoadState::Loaded),
            Input::ImageFailed(Target::LightboxImage) => self.settle_viewer(LoadState::Error),
            _ => Vec::new(),
        }
    }

    /// Lightbox state.
    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Gallery image paths, in order.
    #[must_use]
    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Current thumbnail rectangles, in page coordinates.
    #[must_use]
    pub fn thumbnails(&self) -> &[Rect] {
        &self.thumbs
    }

    /// Thumbnail load bookkeeping.
    #[must_use]
    pub fn loads(&self) -> &LoadTracker<usize> {
        &self.tracker
    }

    fn run(&mut self, command: Command, now: Millis) -> Vec<Effect> {
        if !self.lightbox.is_open() {
            return Vec::new();
        }
        let event = self.lightbox.apply(command, now);
        self.lightbox_effects(event)
    }

    fn reveal(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for index in self.lazy.visible(self.visible) {
            if !self.tracker.register(index) {
                continue;
            }
            let target = Target::Thumbnail(index);
            effects.push(Effect::AddClass(target, Class::Loading));
            effects.push(Effect::SetSource(target, self.images[index].clone()));
        }
        if !effects.is_empty() {
            tracing::trace!(
                loading = effects.len() / 2,
                pending = self.lazy.pending(),
                "thumbnails entered the viewport"
            );
        }
        effects
    }

    fn place_effects(&self) -> Vec<Effect> {
        self.thumbs
            .iter()
            .enumerate()
            .map(|(index, &rect)| Effect::Place {
                target: Target::Thumbnail(index),
                rect,
            })
            .collect()
    }

    fn lightbox_effects(&mut self, event: Option<LightboxEvent>) -> Vec<Effect> {
        let Some(event) = event else {
            return Vec::new();
        };
        let mut effects = match event {
            LightboxEvent::Opened(index) => {
                let mut effects = vec![
                    Effect::AddClass(Target::Lightbox, Class::Active),
                    Effect::LockScroll(true),
                ];
                effects.extend(self.show(index));
                effects
            }
            LightboxEvent::Moved { to, .. } => self.show(to),
            LightboxEvent::Closed(_) => {
                self.swipe.cancel();
                self.viewer = None;
                return vec![
                    Effect::RemoveClass(Target::Lightbox, Class::Active),
                    Effect::LockScroll(false),
                ];
            }
        };
        if let Some((previous, next)) = self.lightbox.neighbours() {
            let urls = [self.images[next].as_str(), self.images[previous].as_str()];
            effects.extend(self.preload.request_all(urls).into_iter().map(Effect::Preload));
        }
        effects
    }

    fn show(&mut self, index: usize) -> Vec<Effect> {
        let url = self.images[index].clone();
        self.preload.request(&url);
        self.viewer = Some(LoadState::Loading);
        image_requested(Target::LightboxImage, url)
    }

    /// Settles the lightbox image once per source. A failed lightbox image
    /// is marked but never hidden.
    fn settle_viewer(&mut self, state: LoadState) -> Vec<Effect> {
        if self.viewer != Some(LoadState::Loading) {
            return Vec::new();
        }
        self.viewer = Some(state);
        if state == LoadState::Error {
            tracing::warn!(
                project = %self.project_id,
                index = ?self.lightbox.current(),
                "lightbox image failed to load"
            );
        }
        vec![
            Effect::RemoveClass(Target::LightboxImage, Class::Loading),
            Effect::AddClass(Target::LightboxImage, state.into()),
        ]
    }
}
