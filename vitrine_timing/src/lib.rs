// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Timing: host-clock primitives for UI runtimes.
//!
//! Browser-style UIs coordinate work with a handful of timer patterns rather
//! than threads. This crate models the three that Vitrine relies on as small,
//! clock-free state machines:
//!
//! - [`TransitionLock`]: a mutual-exclusion flag that stays held for a fixed
//!   duration after it is acquired. Slide and lightbox transitions use it so a
//!   second transition cannot start while the first one is still animating.
//! - [`Debouncer`]: collapses a burst of events (for example window resizes)
//!   into a single firing once the input has been quiet for a delay.
//! - [`FrameCoalescer`]: batches any number of "please redraw" requests into a
//!   single piece of work per animation frame.
//!
//! None of these types read a clock. Every method that depends on time takes
//! a `now` argument: a monotonic timestamp in milliseconds supplied by the
//! host (`performance.now()`, `Instant`-derived counters, or a fake clock in
//! tests).
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_timing::{Debouncer, TransitionLock};
//!
//! let mut lock = TransitionLock::new(300);
//! assert!(lock.try_acquire(1_000));
//! // A second transition 100ms later is refused.
//! assert!(!lock.try_acquire(1_100));
//! // Once the duration has elapsed the lock is free again.
//! assert!(lock.try_acquire(1_300));
//!
//! let mut resize = Debouncer::new(100);
//! resize.trigger(0);
//! resize.trigger(40);
//! assert!(!resize.poll(120));
//! assert!(resize.poll(140));
//! // Fires only once per burst.
//! assert!(!resize.poll(500));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod debounce;
mod frame;
mod lock;

pub use debounce::Debouncer;
pub use frame::FrameCoalescer;
pub use lock::TransitionLock;

/// Host timestamp in milliseconds.
///
/// Only differences between timestamps are meaningful; the origin is chosen by
/// the host.
pub type Millis = u64;

/// Default duration of slide and lightbox transitions.
pub const DEFAULT_TRANSITION_MS: Millis = 300;

/// Default quiet period for resize debouncing.
pub const DEFAULT_DEBOUNCE_MS: Millis = 100;
