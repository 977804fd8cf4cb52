// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_catalog::Project;
use vitrine_event_state::{Command, KeyMap, Swipe, SwipeState};
use vitrine_loader::{LoadState, LoadTracker, PreloadCache};
use vitrine_nav::Route;
use vitrine_slideshow::{Slideshow, SlideshowEvent};
use vitrine_timing::Millis;

use crate::effect::image_settled;
use crate::{Class, Effect, Input, SiteConfig, Target};

/// Controller for a project's slideshow page.
#[derive(Clone, Debug)]
pub struct ProjectPage {
    project: Project,
    slideshow: Slideshow,
    preload: PreloadCache,
    preload_radius: usize,
    tracker: LoadTracker<usize>,
    swipe: SwipeState,
    keys: KeyMap,
    gallery_href: String,
}

impl ProjectPage {
    pub(crate) fn new(project: &Project, config: &SiteConfig) -> Self {
        Self {
            slideshow: Slideshow::from_project(project, config.transition_ms),
            gallery_href: Route::Gallery {
                id: project.id.clone(),
            }
            .href(),
            project: project.clone(),
            preload: PreloadCache::new(),
            preload_radius: config.preload_radius,
            tracker: LoadTracker::new(),
            swipe: SwipeState::new(config.swipe),
            keys: KeyMap::slideshow(),
        }
    }

    /// Initial effects: mark slides as loading, activate the first one, and
    /// preload it with its neighbours.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for index in 0..self.slideshow.len() {
            if self.tracker.register(index) {
                effects.push(Effect::AddClass(Target::Slide(index), Class::Loading));
            }
        }
        if let Some(active) = self.slideshow.active() {
            effects.push(Effect::AddClass(Target::Slide(active), Class::Active));
        }
        effects.extend(self.preload_effects());
        effects
    }

    /// Feeds one input, returning the DOM work it causes.
    pub fn handle(&mut self, input: Input, now: Millis) -> Vec<Effect> {
        match input {
            Input::Key(key) => match self.keys.command(key) {
                Some(command) => self.run(command, now),
                None => Vec::new(),
            },
            Input::PointerDown(pos) => {
                self.swipe.start(pos, now);
                Vec::new()
            }
            Input::PointerMove(pos) => {
                self.swipe.update(pos);
                Vec::new()
            }
            Input::PointerUp(pos) => match self.swipe.end(pos, now) {
                Some(swipe) => self.run(Swipe::command(swipe), now),
                None => Vec::new(),
            },
            Input::Click(Target::NextButton) => self.run(Command::Next, now),
            Input::Click(Target::PreviousButton) => self.run(Command::Previous, now),
            Input::Click(Target::InfoToggle) => self.run(Command::ToggleInfo, now),
            Input::Click(Target::GalleryLink) => vec![Effect::Navigate(self.gallery_href.clone())],
            Input::ImageLoaded(Target::Slide(index)) => {
                if self.tracker.mark_loaded(&index) {
                    image_settled(Target::Slide(index), LoadState::Loaded)
                } else {
                    Vec::new()
                }
            }
            Input::ImageFailed(Target::Slide(index)) => {
                if self.tracker.mark_failed(&index) {
                    image_settled(Target::Slide(index), LoadState::Error)
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    /// The project shown.
    #[must_use]
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Slideshow state.
    #[must_use]
    pub fn slideshow(&self) -> &Slideshow {
        &self.slideshow
    }

    /// URLs requested for preloading so far.
    #[must_use]
    pub fn preloaded(&self) -> &PreloadCache {
        &self.preload
    }

    fn run(&mut self, command: Command, now: Millis) -> Vec<Effect> {
        match self.slideshow.apply(command, now) {
            Some(SlideshowEvent::Changed(change)) => {
                tracing::debug!(
                    project = %self.project.id,
                    from = change.from,
                    to = change.to,
                    "slide changed"
                );
                let mut effects = vec![
                    Effect::RemoveClass(Target::Slide(change.from), Class::Active),
                    Effect::AddClass(Target::Slide(change.to), Class::Active),
                ];
                effects.extend(self.preload_effects());
                effects
            }
            Some(SlideshowEvent::InfoVisibility(visible)) => {
                vec![Effect::class(Target::Body, Class::ProjectInfoVisible, visible)]
            }
            None => Vec::new(),
        }
    }

    fn preload_effects(&mut self) -> Vec<Effect> {
        let current = self
            .slideshow
            .active_slide()
            .map(|slide| slide.images.iter().map(String::as_str))
            .into_iter()
            .flatten();
        let urls: Vec<&str> = current
            .chain(self.slideshow.preload_images(self.preload_radius))
            .collect();
        self.preload
            .request_all(urls)
            .into_iter()
            .map(Effect::Preload)
            .collect()
    }
}
