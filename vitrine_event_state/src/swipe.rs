// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe recognition: classify a touch from down to up as a horizontal swipe.
//!
//! ## Usage
//!
//! 1) Begin tracking with [`SwipeState::start`] on pointer/touch down.
//! 2) Call [`SwipeState::update`] on each move; it returns the movement delta
//!    since the last update, which hosts can use for drag-follow effects.
//! 3) Call [`SwipeState::end`] on pointer/touch up to get the recognized
//!    [`Swipe`], if any. State is reset either way.
//! 4) Call [`SwipeState::cancel`] on `touchcancel` or when the gesture is
//!    taken over by something else.
//!
//! A swipe is recognized when the horizontal travel is at least
//! [`SwipeConfig::min_distance`], exceeds the vertical travel, and the
//! gesture finishes within [`SwipeConfig::max_duration`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vitrine_event_state::swipe::{Swipe, SwipeState};
//!
//! let mut swipe = SwipeState::default();
//!
//! swipe.start(Point::new(10.0, 20.0), 1_000);
//! assert!(swipe.is_tracking());
//!
//! // Finger moves right by 80px within 200ms.
//! assert_eq!(swipe.end(Point::new(90.0, 30.0), 1_200), Some(Swipe::Right));
//! assert!(!swipe.is_tracking());
//! ```

use kurbo::{Point, Vec2};

use crate::Command;

/// Thresholds for swipe recognition.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SwipeConfig {
    /// Minimum horizontal travel, in logical pixels.
    pub min_distance: f64,
    /// Maximum gesture duration, in milliseconds.
    pub max_duration: u64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            min_distance: 50.0,
            max_duration: 800,
        }
    }
}

/// Direction of a recognized swipe (the direction the finger travelled).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Swipe {
    /// Finger moved towards the left edge.
    Left,
    /// Finger moved towards the right edge.
    Right,
}

impl Swipe {
    /// Navigation command conventionally bound to this swipe.
    ///
    /// Swiping left pulls the next item in from the right.
    #[must_use]
    pub fn command(self) -> Command {
        match self {
            Self::Left => Command::Next,
            Self::Right => Command::Previous,
        }
    }
}

/// Tracks a single touch for swipe recognition.
#[derive(Debug, Clone, Default, Copy)]
pub struct SwipeState {
    /// Recognition thresholds.
    pub config: SwipeConfig,
    /// Position where the touch started.
    pub start_pos: Option<Point>,
    /// Last recorded position during the touch.
    pub last_pos: Option<Point>,
    /// Host timestamp when the touch started.
    pub start_time: u64,
}

impl SwipeState {
    /// Creates an idle tracker with the given thresholds.
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Start tracking a new touch at `pos`.
    pub fn start(&mut self, pos: Point, now: u64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.start_time = now;
    }

    /// Record a move, returning the movement delta since the last position.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        self.start_pos?;
        let delta = self.last_pos.map(|last| pos - last);
        self.last_pos = Some(pos);
        delta
    }

    /// Total offset from the touch start to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Finish the touch at `pos` and classify it.
    ///
    /// Returns `None` for taps, slow drags, and mostly-vertical movement.
    pub fn end(&mut self, pos: Point, now: u64) -> Option<Swipe> {
        let offset = self.total_offset(pos);
        let started = self.start_time;
        self.cancel();

        let offset = offset?;
        if now.saturating_sub(started) > self.config.max_duration {
            return None;
        }
        let dx = offset.x;
        if !dx.is_finite() || dx.abs() < self.config.min_distance || dx.abs() <= offset.y.abs() {
            return None;
        }
        Some(if dx < 0.0 { Swipe::Left } else { Swipe::Right })
    }

    /// Abandon the current touch without recognizing anything.
    pub fn cancel(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
    }

    /// Returns `true` while a touch is being tracked.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_not_tracking() {
        let swipe = SwipeState::default();
        assert!(!swipe.is_tracking());
        assert!(swipe.start_pos.is_some() == swipe.last_pos.is_some());
    }

    #[test]
    fn update_returns_incremental_deltas() {
        let mut swipe = SwipeState::default();
        swipe.start(Point::new(0.0, 0.0), 0);

        assert_eq!(swipe.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(swipe.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            swipe.total_offset(Point::new(8.0, 7.0)),
            Some(Vec2::new(8.0, 7.0))
        );
    }

    #[test]
    fn update_returns_none_when_not_tracking() {
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.update(Point::new(15.0, 25.0)), None);
        assert!(swipe.last_pos.is_none());
    }

    #[test]
    fn left_and_right_swipes() {
        let mut swipe = SwipeState::default();
        swipe.start(Point::new(200.0, 100.0), 0);
        assert_eq!(swipe.end(Point::new(100.0, 110.0), 300), Some(Swipe::Left));

        swipe.start(Point::new(100.0, 100.0), 1_000);
        assert_eq!(swipe.end(Point::new(160.0, 90.0), 1_100), Some(Swipe::Right));
    }

    #[test]
    fn short_travel_is_a_tap() {
        let mut swipe = SwipeState::default();
        swipe.start(Point::new(100.0, 100.0), 0);
        assert_eq!(swipe.end(Point::new(130.0, 100.0), 50), None);
    }

    #[test]
    fn vertical_movement_is_a_scroll() {
        let mut swipe = SwipeState::default();
        swipe.start(Point::new(100.0, 100.0), 0);
        assert_eq!(swipe.end(Point::new(160.0, 300.0), 200), None);
    }

    #[test]
    fn slow_drag_is_ignored() {
        let mut swipe = SwipeState::new(SwipeConfig {
            min_distance: 50.0,
            max_duration: 500,
        });
        swipe.start(Point::new(0.0, 0.0), 0);
        assert_eq!(swipe.end(Point::new(200.0, 0.0), 501), None);
    }

    #[test]
    fn end_without_start_is_none_and_resets() {
        let mut swipe = SwipeState::default();
        assert_eq!(swipe.end(Point::new(200.0, 0.0), 10), None);
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn cancel_discards_touch() {
        let mut swipe = SwipeState::default();
        swipe.start(Point::new(0.0, 0.0), 0);
        swipe.cancel();
        assert_eq!(swipe.end(Point::new(200.0, 0.0), 10), None);
    }

    #[test]
    fn swipe_commands() {
        assert_eq!(Swipe::Left.command(), Command::Next);
        assert_eq!(Swipe::Right.command(), Command::Previous);
    }
}
