// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;

/// Loading state of one image element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoadState {
    /// Requested, not yet arrived.
    Loading,
    /// Decoded and displayable.
    Loaded,
    /// Failed; the element should be hidden.
    Error,
}

impl LoadState {
    /// CSS class reflecting this state.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error => "error",
        }
    }

    /// Returns `true` once the image has either loaded or failed.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        !matches!(self, Self::Loading)
    }
}

/// Per-element load states plus counters.
#[derive(Clone, Debug)]
pub struct LoadTracker<K> {
    states: HashMap<K, LoadState>,
    loaded: usize,
    failed: usize,
}

impl<K> Default for LoadTracker<K> {
    fn default() -> Self {
        Self {
            states: HashMap::new(),
            loaded: 0,
            failed: 0,
        }
    }
}

impl<K: Eq + Hash + Debug> LoadTracker<K> {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `key` in the [`LoadState::Loading`] state.
    ///
    /// Returns `false` if `key` was already tracked; its state is unchanged.
    pub fn register(&mut self, key: K) -> bool {
        if self.states.contains_key(&key) {
            return false;
        }
        self.states.insert(key, LoadState::Loading);
        true
    }

    /// Records a successful load. Returns `false` for unknown or already
    /// settled keys.
    pub fn mark_loaded(&mut self, key: &K) -> bool {
        if !self.settle(key, LoadState::Loaded) {
            return false;
        }
        self.loaded += 1;
        true
    }

    /// Records a failed load. Returns `false` for unknown or already settled
    /// keys.
    ///
    /// The failure still advances [`LoadTracker::settled`].
    pub fn mark_failed(&mut self, key: &K) -> bool {
        if !self.settle(key, LoadState::Error) {
            return false;
        }
        tracing::warn!(?key, "image failed to load; hiding element");
        self.failed += 1;
        true
    }

    fn settle(&mut self, key: &K, to: LoadState) -> bool {
        match self.states.get_mut(key) {
            Some(state @ LoadState::Loading) => {
                *state = to;
                true
            }
            _ => false,
        }
    }

    /// State of `key`, if tracked.
    #[must_use]
    pub fn state(&self, key: &K) -> Option<LoadState> {
        self.states.get(key).copied()
    }

    /// Number of tracked images.
    #[must_use]
    pub fn total(&self) -> usize {
        self.states.len()
    }

    /// Number of images that loaded.
    #[must_use]
    pub fn loaded(&self) -> usize {
        self.loaded
    }

    /// Number of images that failed.
    #[must_use]
    pub fn failed(&self) -> usize {
        self.failed
    }

    /// Number of images that loaded or failed.
    #[must_use]
    pub fn settled(&self) -> usize {
        self.loaded + self.failed
    }

    /// Number of images still loading.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.total() - self.settled()
    }

    /// Returns `true` once every tracked image has settled.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.pending() == 0
    }

    /// Fraction of tracked images that have settled, in `0.0..=1.0`.
    ///
    /// An empty tracker reports `1.0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.states.is_empty() {
            1.0
        } else {
            self.settled() as f64 / self.total() as f64
        }
    }

    /// Forgets every tracked image.
    pub fn clear(&mut self) {
        self.states.clear();
        self.loaded = 0;
        self.failed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_still_advance_readiness() {
        let mut t = LoadTracker::new();
        for i in 0..4_u32 {
            t.register(i);
        }
        assert!(!t.is_ready());
        t.mark_loaded(&0);
        t.mark_failed(&1);
        t.mark_failed(&2);
        assert_eq!(t.settled(), 3);
        assert_eq!(t.pending(), 1);
        assert!((t.progress() - 0.75).abs() < 1e-12);
        t.mark_loaded(&3);
        assert!(t.is_ready());
        assert_eq!((t.loaded(), t.failed()), (2, 2));
    }

    #[test]
    fn settled_keys_do_not_double_count() {
        let mut t = LoadTracker::new();
        t.register("a");
        assert!(t.mark_loaded(&"a"));
        assert!(!t.mark_loaded(&"a"));
        assert!(!t.mark_failed(&"a"));
        assert_eq!(t.state(&"a"), Some(LoadState::Loaded));
        assert_eq!(t.settled(), 1);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut t: LoadTracker<&str> = LoadTracker::new();
        assert!(!t.mark_loaded(&"ghost"));
        assert!(!t.mark_failed(&"ghost"));
        assert_eq!(t.total(), 0);
        assert!(t.is_ready());
        assert_eq!(t.progress(), 1.0);
    }

    #[test]
    fn duplicate_registration_keeps_state() {
        let mut t = LoadTracker::new();
        assert!(t.register(1_u8));
        t.mark_failed(&1);
        assert!(!t.register(1));
        assert_eq!(t.state(&1), Some(LoadState::Error));
    }

    #[test]
    fn clear_resets_counters() {
        let mut t = LoadTracker::new();
        t.register(1_u8);
        t.mark_loaded(&1);
        t.clear();
        assert_eq!(t.total(), 0);
        assert_eq!(t.settled(), 0);
    }

    #[test]
    fn class_names() {
        assert_eq!(LoadState::Loading.class_name(), "loading");
        assert_eq!(LoadState::Loaded.class_name(), "loaded");
        assert_eq!(LoadState::Error.class_name(), "error");
        assert!(!LoadState::Loading.is_settled());
        assert!(LoadState::Error.is_settled());
    }
}
