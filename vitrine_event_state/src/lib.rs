// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Event State: input interpretation for portfolio pages.
//!
//! Slideshows and lightboxes are driven by two kinds of input: keyboard keys
//! and touch swipes on mobile. This crate turns raw host input into the
//! high-level [`Command`]s those state machines understand:
//!
//! - [`keys`]: a host-agnostic [`Key`] plus a [`KeyMap`] that maps keys to
//!   commands (arrows navigate, Escape closes, `i` toggles project info).
//! - [`swipe`]: [`SwipeState`] tracks a touch from down to up and recognizes
//!   horizontal swipes, ignoring mostly-vertical movement (scrolling) and slow
//!   drags.
//!
//! The crate does not know about the DOM or any event loop. Hosts translate
//! their native events into [`Key`] values and pointer positions, and feed the
//! resulting commands into `vitrine_slideshow` or `vitrine_lightbox`.
//!
//! ## Usage
//!
//! ```rust
//! use kurbo::Point;
//! use vitrine_event_state::{Command, Key, KeyMap, Swipe, SwipeState};
//!
//! let keys = KeyMap::default();
//! assert_eq!(keys.command(Key::from_dom_key("ArrowRight")), Some(Command::Next));
//! assert_eq!(keys.command(Key::from_dom_key("Escape")), Some(Command::Close));
//!
//! let mut swipe = SwipeState::default();
//! swipe.start(Point::new(300.0, 400.0), 0);
//! swipe.update(Point::new(200.0, 405.0));
//! let gesture = swipe.end(Point::new(120.0, 410.0), 180);
//! assert_eq!(gesture, Some(Swipe::Left));
//! assert_eq!(gesture.map(Swipe::command), Some(Command::Next));
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod keys;
pub mod swipe;

pub use keys::{Key, KeyMap};
pub use swipe::{Swipe, SwipeConfig, SwipeState};

/// High-level navigation command produced from input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    /// Advance to the next slide or image.
    Next,
    /// Go back to the previous slide or image.
    Previous,
    /// Jump to the first slide or image.
    First,
    /// Jump to the last slide or image.
    Last,
    /// Close the current overlay (lightbox, menu, project info).
    Close,
    /// Show or hide the project information panel.
    ToggleInfo,
    /// Open or close the navigation menu.
    ToggleMenu,
}
