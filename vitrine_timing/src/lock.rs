// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-bounded transition lock.
//!
//! ## Usage
//!
//! 1) Before starting an animated transition, call [`TransitionLock::try_acquire`].
//! 2) If it returns `false`, drop the request: a transition is still running.
//! 3) The lock releases itself once `duration` milliseconds have passed; call
//!    [`TransitionLock::release`] to end it early (for example on teardown).

use crate::{DEFAULT_TRANSITION_MS, Millis};

/// Mutual-exclusion flag held for a fixed duration after acquisition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionLock {
    duration: Millis,
    held_until: Option<Millis>,
}

impl Default for TransitionLock {
    fn default() -> Self {
        Self::new(DEFAULT_TRANSITION_MS)
    }
}

impl TransitionLock {
    /// Creates an unlocked lock that holds for `duration` milliseconds per acquisition.
    #[must_use]
    pub const fn new(duration: Millis) -> Self {
        Self {
            duration,
            held_until: None,
        }
    }

    /// Returns the hold duration in milliseconds.
    #[must_use]
    pub const fn duration(&self) -> Millis {
        self.duration
    }

    /// Changes the hold duration used by future acquisitions.
    ///
    /// A transition already in flight keeps its original deadline.
    pub fn set_duration(&mut self, duration: Millis) {
        self.duration = duration;
    }

    /// Returns `true` while a transition acquired before `now` is still running.
    #[must_use]
    pub fn is_locked(&self, now: Millis) -> bool {
        self.held_until.is_some_and(|until| now < until)
    }

    /// Attempts to start a transition at `now`.
    ///
    /// Returns `false` (and leaves the deadline untouched) when a previous
    /// transition is still running.
    pub fn try_acquire(&mut self, now: Millis) -> bool {
        if self.is_locked(now) {
            return false;
        }
        self.held_until = Some(now.saturating_add(self.duration));
        true
    }

    /// Milliseconds until the lock frees itself, or `0` when unlocked.
    #[must_use]
    pub fn remaining(&self, now: Millis) -> Millis {
        match self.held_until {
            Some(until) => until.saturating_sub(now),
            None => 0,
        }
    }

    /// Releases the lock immediately.
    pub fn release(&mut self) {
        self.held_until = None;
    }
}
