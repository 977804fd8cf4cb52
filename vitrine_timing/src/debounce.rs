// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{DEFAULT_DEBOUNCE_MS, Millis};

/// Trailing-edge debouncer.
///
/// Each [`Debouncer::trigger`] restarts the quiet period. [`Debouncer::poll`]
/// returns `true` exactly once per burst, the first time it is called after
/// `delay` milliseconds without a new trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debouncer {
    delay: Millis,
    last_trigger: Option<Millis>,
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

impl Debouncer {
    /// Creates an idle debouncer with the given quiet period.
    #[must_use]
    pub const fn new(delay: Millis) -> Self {
        Self {
            delay,
            last_trigger: None,
        }
    }

    /// Returns the quiet period in milliseconds.
    #[must_use]
    pub const fn delay(&self) -> Millis {
        self.delay
    }

    /// Records an event at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: Millis) {
        self.last_trigger = Some(now);
    }

    /// Returns `true` if a burst is waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.last_trigger.is_some()
    }

    /// Returns the timestamp at which the pending burst will fire, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.last_trigger.map(|t| t.saturating_add(self.delay))
    }

    /// Fires the pending burst if its quiet period has elapsed.
    pub fn poll(&mut self, now: Millis) -> bool {
        match self.deadline() {
            Some(deadline) if now >= deadline => {
                self.last_trigger = None;
                true
            }
            _ => false,
        }
    }

    /// Drops any pending burst without firing it.
    pub fn cancel(&mut self) {
        self.last_trigger = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_fires_once_after_quiet_period() {
        let mut d = Debouncer::new(100);
        d.trigger(0);
        d.trigger(50);
        d.trigger(90);
        assert!(!d.poll(150), "quiet period restarts at the last trigger");
        assert!(d.poll(190));
        assert!(!d.poll(191), "a burst fires only once");
        assert!(!d.is_pending());
    }

    #[test]
    fn poll_without_trigger_is_false() {
        let mut d = Debouncer::default();
        assert!(!d.poll(10_000));
        assert_eq!(d.deadline(), None);
    }

    #[test]
    fn cancel_drops_pending_burst() {
        let mut d = Debouncer::new(100);
        d.trigger(0);
        d.cancel();
        assert!(!d.poll(500));
    }
}
