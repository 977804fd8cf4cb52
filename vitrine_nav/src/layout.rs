// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Viewport width, in CSS pixels, at or below which the mobile layout applies.
pub const DEFAULT_MOBILE_BREAKPOINT: f64 = 768.0;

/// Desktop or mobile presentation.
///
/// Mobile stacks the homepage grid into a single scrolling column and relies
/// on swipes for slideshow and lightbox navigation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// Fitted grid, keyboard and click navigation.
    #[default]
    Desktop,
    /// Stacked grid, swipe navigation.
    Mobile,
}

impl LayoutMode {
    /// Picks the mode for a viewport `width` against `breakpoint`.
    ///
    /// Widths at the breakpoint are mobile, matching a `max-width` media
    /// query. Non-finite widths are treated as desktop.
    #[must_use]
    pub fn from_width(width: f64, breakpoint: f64) -> Self {
        if width.is_finite() && width <= breakpoint {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Returns `true` for [`LayoutMode::Mobile`].
    #[must_use]
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive() {
        let bp = DEFAULT_MOBILE_BREAKPOINT;
        assert_eq!(LayoutMode::from_width(375.0, bp), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_width(768.0, bp), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_width(769.0, bp), LayoutMode::Desktop);
        assert_eq!(LayoutMode::from_width(f64::NAN, bp), LayoutMode::Desktop);
        assert!(LayoutMode::from_width(320.0, 400.0).is_mobile());
    }
}
