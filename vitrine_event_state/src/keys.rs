// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard input.

use crate::Command;

/// A keyboard key, independent of any windowing or DOM API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Page Up.
    PageUp,
    /// Page Down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Escape.
    Escape,
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Any other printable character, lowercased.
    Char(char),
    /// Anything else.
    Other,
}

impl Key {
    /// Parses a DOM `KeyboardEvent.key` value.
    ///
    /// Legacy names emitted by older browsers (`"Left"`, `"Esc"`, `"Spacebar"`)
    /// are accepted too.
    #[must_use]
    pub fn from_dom_key(key: &str) -> Self {
        match key {
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Home" => Self::Home,
            "End" => Self::End,
            "Escape" | "Esc" => Self::Escape,
            " " | "Spacebar" => Self::Space,
            "Enter" => Self::Enter,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c.to_ascii_lowercase()),
                    _ => Self::Other,
                }
            }
        }
    }
}

/// Maps keys to [`Command`]s.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyMap {
    /// Whether Up/Down arrows navigate as well as Left/Right.
    ///
    /// Slideshows enable this; scrollable gallery pages leave vertical arrows
    /// to the browser.
    pub vertical_arrows: bool,
}

impl KeyMap {
    /// Key map for full-page slideshows, where vertical arrows navigate too.
    #[must_use]
    pub const fn slideshow() -> Self {
        Self {
            vertical_arrows: true,
        }
    }

    /// Returns the command bound to `key`, if any.
    #[must_use]
    pub fn command(&self, key: Key) -> Option<Command> {
        match key {
            Key::ArrowRight | Key::PageDown | Key::Space => Some(Command::Next),
            Key::ArrowLeft | Key::PageUp => Some(Command::Previous),
            Key::ArrowDown if self.vertical_arrows => Some(Command::Next),
            Key::ArrowUp if self.vertical_arrows => Some(Command::Previous),
            Key::Home => Some(Command::First),
            Key::End => Some(Command::Last),
            Key::Escape => Some(Command::Close),
            Key::Char('i') => Some(Command::ToggleInfo),
            Key::Char('m') => Some(Command::ToggleMenu),
            _ => None,
        }
    }
}
