// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Slideshow: the state machine behind a project page.
//!
//! A project page shows one slide at a time. Navigation is animated, and a
//! new transition must not start while the previous one is still running;
//! otherwise rapid key presses or swipes leave two slides half-visible. The
//! [`Slideshow`] type owns:
//!
//! - the slides (from the project's [`SlideSpec`]s),
//! - the active index,
//! - a [`TransitionLock`] that refuses navigation for the transition duration
//!   (300ms by default),
//! - whether the project information panel is visible (the
//!   `project-info-visible` body class).
//!
//! Navigation wraps in both directions. Every navigation method returns a
//! [`SlideChange`] describing what the host must animate, or `None` when
//! nothing should happen (locked, out of range, or already there).
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_catalog::Catalog;
//! use vitrine_slideshow::{Direction, Slideshow};
//!
//! let project = Catalog::builtin().get("salt-flats").unwrap();
//! let mut show = Slideshow::from_project(project, 300);
//! assert_eq!(show.active(), Some(0));
//!
//! let change = show.next(1_000).unwrap();
//! assert_eq!((change.from, change.to, change.direction), (0, 1, Direction::Forward));
//!
//! // Still animating: refused.
//! assert!(show.next(1_100).is_none());
//!
//! // Going back from the first slide wraps to the last.
//! show.go_to(0, 1_400).unwrap();
//! let back = show.previous(1_800).unwrap();
//! assert_eq!(back.to, show.len() - 1);
//! ```

use vitrine_catalog::{Project, SlideSpec};
use vitrine_event_state::Command;
use vitrine_timing::{Millis, TransitionLock};

/// Which way a slide transition moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards higher indices (wrapping from last to first).
    Forward,
    /// Towards lower indices (wrapping from first to last).
    Backward,
}

/// A transition the host should animate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideChange {
    /// Slide that loses the `active` class.
    pub from: usize,
    /// Slide that gains the `active` class.
    pub to: usize,
    /// Animation direction.
    pub direction: Direction,
}

/// Result of [`Slideshow::apply`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlideshowEvent {
    /// The active slide changed.
    Changed(SlideChange),
    /// The project info panel was shown (`true`) or hidden (`false`).
    InfoVisibility(bool),
}

/// Slideshow state for one project.
#[derive(Clone, Debug)]
pub struct Slideshow {
    slides: Vec<SlideSpec>,
    active: usize,
    lock: TransitionLock,
    info_visible: bool,
}

impl Slideshow {
    /// Creates a slideshow over `slides`, starting at the first slide.
    #[must_use]
    pub fn new(slides: Vec<SlideSpec>, transition_ms: Millis) -> Self {
        Self {
            slides,
            active: 0,
            lock: TransitionLock::new(transition_ms),
            info_visible: false,
        }
    }

    /// Creates a slideshow over a project's slides.
    #[must_use]
    pub fn from_project(project: &Project, transition_ms: Millis) -> Self {
        Self::new(project.slides.clone(), transition_ms)
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Returns `true` if there are no slides.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// All slides.
    #[must_use]
    pub fn slides(&self) -> &[SlideSpec] {
        &self.slides
    }

    /// Index of the active slide, or `None` for an empty slideshow.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        (!self.slides.is_empty()).then_some(self.active)
    }

    /// The active slide.
    #[must_use]
    pub fn active_slide(&self) -> Option<&SlideSpec> {
        self.slides.get(self.active)
    }

    /// Returns `true` while a transition started before `now` is still running.
    #[must_use]
    pub fn is_transitioning(&self, now: Millis) -> bool {
        self.lock.is_locked(now)
    }

    /// Advances one slide, wrapping from the last to the first.
    pub fn next(&mut self, now: Millis) -> Option<SlideChange> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        self.transition((self.active + 1) % len, Direction::Forward, now)
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub fn previous(&mut self, now: Millis) -> Option<SlideChange> {
        let len = self.slides.len();
        if len == 0 {
            return None;
        }
        self.transition((self.active + len - 1) % len, Direction::Backward, now)
    }

    /// Jumps to `index`.
    ///
    /// Returns `None` if `index` is out of range, already active, or a
    /// transition is running.
    pub fn go_to(&mut self, index: usize, now: Millis) -> Option<SlideChange> {
        if index >= self.slides.len() {
            tracing::debug!(index, len = self.slides.len(), "slide index out of range");
            return None;
        }
        let direction = if index > self.active {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.transition(index, direction, now)
    }

    fn transition(&mut self, to: usize, direction: Direction, now: Millis) -> Option<SlideChange> {
        if to == self.active {
            return None;
        }
        if !self.lock.try_acquire(now) {
            tracing::trace!(to, "slide transition refused while animating");
            return None;
        }
        let from = self.active;
        self.active = to;
        Some(SlideChange {
            from,
            to,
            direction,
        })
    }

    /// Whether the project information panel is visible.
    #[must_use]
    pub fn info_visible(&self) -> bool {
        self.info_visible
    }

    /// Flips the project information panel, returning the new visibility.
    pub fn toggle_info(&mut self) -> bool {
        self.info_visible = !self.info_visible;
        self.info_visible
    }

    /// Shows the project information panel. Returns `true` if it was hidden.
    pub fn show_info(&mut self) -> bool {
        !core::mem::replace(&mut self.info_visible, true)
    }

    /// Hides the project information panel. Returns `true` if it was visible.
    pub fn hide_info(&mut self) -> bool {
        core::mem::replace(&mut self.info_visible, false)
    }

    /// Applies a navigation command.
    ///
    /// `Close` hides the info panel if it is open; `ToggleMenu` is not a
    /// slideshow command and is ignored.
    pub fn apply(&mut self, command: Command, now: Millis) -> Option<SlideshowEvent> {
        match command {
            Command::Next => self.next(now).map(SlideshowEvent::Changed),
            Command::Previous => self.previous(now).map(SlideshowEvent::Changed),
            Command::First => self.go_to(0, now).map(SlideshowEvent::Changed),
            Command::Last => self
                .len()
                .checked_sub(1)
                .and_then(|last| self.go_to(last, now))
                .map(SlideshowEvent::Changed),
            Command::ToggleInfo => Some(SlideshowEvent::InfoVisibility(self.toggle_info())),
            Command::Close => self
                .hide_info()
                .then_some(SlideshowEvent::InfoVisibility(false)),
            Command::ToggleMenu => None,
        }
    }

    /// Indices of slides within `radius` of the active one, nearest first,
    /// alternating forward and backward, wrapping, without duplicates and
    /// excluding the active slide.
    #[must_use]
    pub fn preload_indices(&self, radius: usize) -> Vec<usize> {
        let len = self.slides.len();
        let mut out = Vec::new();
        if len <= 1 {
            return out;
        }
        for step in 1..=radius.min(len - 1) {
            for index in [(self.active + step) % len, (self.active + len - step) % len] {
                if index != self.active && !out.contains(&index) {
                    out.push(index);
                }
            }
        }
        out
    }

    /// Image paths of the slides returned by [`Slideshow::preload_indices`].
    #[must_use]
    pub fn preload_images(&self, radius: usize) -> Vec<&str> {
        self.preload_indices(radius)
            .into_iter()
            .flat_map(|i| self.slides[i].images.iter().map(String::as_str))
            .collect()
    }
}
