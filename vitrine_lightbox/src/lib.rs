// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Lightbox: the full-screen image viewer on gallery pages.
//!
//! A [`Lightbox`] sits over a gallery of `len` images. It is either closed or
//! open at an index; while open, next/previous navigation wraps modulo the
//! gallery length in both directions. Like slideshows, navigation shares a
//! [`TransitionLock`] so that image swaps do not overlap.
//!
//! The crate deliberately knows nothing about image URLs or the DOM. Hosts
//! map the returned [`LightboxEvent`]s to DOM work: set the overlay image
//! source, toggle the overlay's `active` class, and lock page scrolling while
//! the lightbox is open.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_event_state::Command;
//! use vitrine_lightbox::{Lightbox, LightboxEvent};
//!
//! let mut lightbox = Lightbox::new(3, 300);
//! assert_eq!(lightbox.open(2, 0), Some(LightboxEvent::Opened(2)));
//!
//! // Next from the last image wraps to the first.
//! assert_eq!(
//!     lightbox.next(500),
//!     Some(LightboxEvent::Moved { from: 2, to: 0 })
//! );
//!
//! assert_eq!(lightbox.apply(Command::Close, 600), Some(LightboxEvent::Closed(0)));
//! assert!(!lightbox.is_open());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use vitrine_event_state::Command;
use vitrine_timing::{Millis, TransitionLock};

/// State change reported by [`Lightbox`] operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxEvent {
    /// The lightbox opened on the given image.
    Opened(usize),
    /// The lightbox moved between images.
    Moved {
        /// Image that was shown.
        from: usize,
        /// Image now shown.
        to: usize,
    },
    /// The lightbox closed; carries the image that was shown.
    Closed(usize),
}

/// Lightbox state over a gallery of fixed length.
#[derive(Clone, Debug)]
pub struct Lightbox {
    len: usize,
    current: Option<usize>,
    lock: TransitionLock,
}

impl Lightbox {
    /// Creates a closed lightbox over `len` images.
    #[must_use]
    pub const fn new(len: usize, transition_ms: Millis) -> Self {
        Self {
            len,
            current: None,
            lock: TransitionLock::new(transition_ms),
        }
    }

    /// Number of images in the gallery.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the gallery has no images.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` while the lightbox is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Index of the image shown, or `None` when closed.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Opens the lightbox on `index`.
    ///
    /// Returns `None` for an empty gallery or an out-of-range index. Opening
    /// while already open moves to `index` (subject to the transition lock).
    pub fn open(&mut self, index: usize, now: Millis) -> Option<LightboxEvent> {
        if index >= self.len {
            return None;
        }
        match self.current {
            None => {
                self.lock.try_acquire(now);
                self.current = Some(index);
                Some(LightboxEvent::Opened(index))
            }
            Some(from) => self.move_to(from, index, now),
        }
    }

    /// Closes the lightbox. Returns `None` if it was already closed.
    ///
    /// Closing is never blocked by the transition lock, and it releases it.
    pub fn close(&mut self) -> Option<LightboxEvent> {
        let shown = self.current.take()?;
        self.lock.release();
        Some(LightboxEvent::Closed(shown))
    }

    /// Shows the next image, wrapping from the last to the first.
    pub fn next(&mut self, now: Millis) -> Option<LightboxEvent> {
        let from = self.current?;
        self.move_to(from, (from + 1) % self.len, now)
    }

    /// Shows the previous image, wrapping from the first to the last.
    pub fn previous(&mut self, now: Millis) -> Option<LightboxEvent> {
        let from = self.current?;
        self.move_to(from, (from + self.len - 1) % self.len, now)
    }

    fn move_to(&mut self, from: usize, to: usize, now: Millis) -> Option<LightboxEvent> {
        if from == to || !self.lock.try_acquire(now) {
            return None;
        }
        self.current = Some(to);
        Some(LightboxEvent::Moved { from, to })
    }

    /// Applies a navigation command. Commands other than next/previous/
    /// first/last/close are ignored.
    pub fn apply(&mut self, command: Command, now: Millis) -> Option<LightboxEvent> {
        match command {
            Command::Next => self.next(now),
            Command::Previous => self.previous(now),
            Command::First => {
                let from = self.current?;
                self.move_to(from, 0, now)
            }
            Command::Last => {
                let from = self.current?;
                self.move_to(from, self.len - 1, now)
            }
            Command::Close => self.close(),
            Command::ToggleInfo | Command::ToggleMenu => None,
        }
    }

    /// Previous and next image indices around the current one, for preloading.
    ///
    /// Returns `None` when closed or when the gallery has a single image.
    #[must_use]
    pub fn neighbours(&self) -> Option<(usize, usize)> {
        let current = self.current?;
        if self.len < 2 {
            return None;
        }
        Some(((current + self.len - 1) % self.len, (current + 1) % self.len))
    }
}
