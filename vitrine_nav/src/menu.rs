// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vitrine_event_state::Command;

/// Open/closed state of the navigation menu.
///
/// Every mutator returns `true` when the state actually changed, so hosts
/// only touch the `menu-open` class when needed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Creates a closed menu.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Returns `true` while the menu is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu. Always changes state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        true
    }

    /// Opens the menu.
    pub fn open(&mut self) -> bool {
        !core::mem::replace(&mut self.open, true)
    }

    /// Closes the menu.
    pub fn close(&mut self) -> bool {
        core::mem::replace(&mut self.open, false)
    }

    /// Closes the menu because one of its links was followed.
    pub fn follow_link(&mut self) -> bool {
        self.close()
    }

    /// Applies a keyboard command: `ToggleMenu` toggles, `Close` closes.
    pub fn apply(&mut self, command: Command) -> bool {
        match command {
            Command::ToggleMenu => self.toggle(),
            Command::Close => self.close(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_open_close() {
        let mut menu = NavMenu::new();
        assert!(menu.toggle());
        assert!(menu.is_open());
        assert!(!menu.open());
        assert!(menu.close());
        assert!(!menu.close());
        assert!(menu.open());
    }

    #[test]
    fn escape_and_links_close() {
        let mut menu = NavMenu::new();
        menu.open();
        assert!(menu.apply(Command::Close));
        assert!(!menu.is_open());
        assert!(!menu.apply(Command::Close));

        menu.apply(Command::ToggleMenu);
        assert!(menu.follow_link());
        assert!(!menu.is_open());
        assert!(!menu.apply(Command::Next));
    }
}
