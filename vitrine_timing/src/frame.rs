// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Coalesces redraw requests into one unit of work per animation frame.
///
/// This mirrors the usual `requestAnimationFrame` guard: callers may request
/// a frame any number of times, and the host asks [`FrameCoalescer::take`]
/// once per frame whether work is due.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameCoalescer {
    requested: bool,
    frames_run: u64,
}

impl FrameCoalescer {
    /// Creates a coalescer with no pending request.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            requested: false,
            frames_run: 0,
        }
    }

    /// Requests work on the next frame.
    ///
    /// Returns `true` if this call scheduled a new frame, `false` if one was
    /// already pending (the host should not schedule another callback).
    pub fn request(&mut self) -> bool {
        let newly = !self.requested;
        self.requested = true;
        newly
    }

    /// Returns `true` if a frame has been requested and not yet taken.
    #[must_use]
    pub fn is_requested(&self) -> bool {
        self.requested
    }

    /// Consumes the pending request, returning whether work should run this frame.
    pub fn take(&mut self) -> bool {
        if self.requested {
            self.requested = false;
            self.frames_run += 1;
            true
        } else {
            false
        }
    }

    /// Number of frames that have run work so far.
    #[must_use]
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn many_requests_run_once() {
        let mut f = FrameCoalescer::new();
        assert!(f.request());
        assert!(!f.request());
        assert!(!f.request());
        assert!(f.take());
        assert!(!f.take());
        assert_eq!(f.frames_run(), 1);
    }

    #[test]
    fn request_after_take_schedules_again() {
        let mut f = FrameCoalescer::new();
        f.request();
        f.take();
        assert!(f.request());
        assert!(f.is_requested());
        assert!(f.take());
        assert_eq!(f.frames_run(), 2);
    }
}
