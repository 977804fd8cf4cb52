// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Rect;

/// Headless intersection observer for lazily loaded images.
///
/// Each observed element reports at most once: after [`LazyLoader::visible`]
/// returns a key, that element is no longer observed. Rectangles and the
/// viewport must share a coordinate space (typically document coordinates).
#[derive(Clone, Debug)]
pub struct LazyLoader<K> {
    root_margin: f64,
    observed: Vec<(K, Rect)>,
}

impl<K: PartialEq + Clone> LazyLoader<K> {
    /// Creates an observer that treats elements within `root_margin` pixels of
    /// the viewport as visible.
    #[must_use]
    pub fn new(root_margin: f64) -> Self {
        Self {
            root_margin: if root_margin.is_finite() {
                root_margin.max(0.0)
            } else {
                0.0
            },
            observed: Vec::new(),
        }
    }

    /// Margin added around the viewport on every side.
    #[must_use]
    pub fn root_margin(&self) -> f64 {
        self.root_margin
    }

    /// Starts observing `key` at `rect`, or updates its rectangle if already observed.
    pub fn observe(&mut self, key: K, rect: Rect) {
        if let Some(entry) = self.observed.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = rect;
        } else {
            self.observed.push((key, rect));
        }
    }

    /// Stops observing `key`. Returns `true` if it was observed.
    pub fn unobserve(&mut self, key: &K) -> bool {
        let before = self.observed.len();
        self.observed.retain(|(k, _)| k != key);
        self.observed.len() != before
    }

    /// Number of elements still waiting to become visible.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.observed.len()
    }

    /// Returns `true` if `key` is still observed.
    #[must_use]
    pub fn is_observed(&self, key: &K) -> bool {
        self.observed.iter().any(|(k, _)| k == key)
    }

    /// Keys whose rectangles intersect `viewport` grown by the root margin,
    /// in observation order. Returned keys stop being observed.
    ///
    /// Touching edges count as intersecting.
    pub fn visible(&mut self, viewport: Rect) -> Vec<K> {
        let area = viewport.abs().inflate(self.root_margin, self.root_margin);
        let mut hits = Vec::new();
        self.observed.retain(|(key, rect)| {
            if intersects(area, rect.abs()) {
                hits.push(key.clone());
                false
            } else {
                true
            }
        });
        hits
    }
}

fn intersects(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(n: usize, height: f64) -> LazyLoader<usize> {
        let mut lazy = LazyLoader::new(100.0);
        for i in 0..n {
            let y = i as f64 * height;
            lazy.observe(i, Rect::new(0.0, y, 300.0, y + height));
        }
        lazy
    }

    #[test]
    fn reports_elements_in_viewport_plus_margin() {
        let mut lazy = column(10, 200.0);
        // Viewport 0..500 grows to -100..600; item 3 starts at 600 and touches.
        assert_eq!(lazy.visible(Rect::new(0.0, 0.0, 300.0, 500.0)), [0, 1, 2, 3]);
        assert_eq!(lazy.pending(), 6);
    }

    #[test]
    fn each_element_reports_once() {
        let mut lazy = column(5, 200.0);
        let viewport = Rect::new(0.0, 0.0, 300.0, 300.0);
        assert!(!lazy.visible(viewport).is_empty());
        assert!(lazy.visible(viewport).is_empty());
    }

    #[test]
    fn scrolling_reveals_more() {
        let mut lazy = column(10, 200.0);
        lazy.visible(Rect::new(0.0, 0.0, 300.0, 300.0));
        let next = lazy.visible(Rect::new(0.0, 1000.0, 300.0, 1300.0));
        assert_eq!(next, [4, 5, 6, 7]);
    }

    #[test]
    fn unobserve_and_update() {
        let mut lazy = LazyLoader::new(0.0);
        lazy.observe("a", Rect::new(0.0, 5000.0, 10.0, 5010.0));
        lazy.observe("a", Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(lazy.pending(), 1);
        lazy.observe("b", Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(lazy.unobserve(&"b"));
        assert!(!lazy.unobserve(&"b"));
        assert_eq!(lazy.visible(Rect::new(0.0, 0.0, 100.0, 100.0)), ["a"]);
    }

    #[test]
    fn bad_margin_is_zero() {
        assert_eq!(LazyLoader::<u8>::new(f64::NAN).root_margin(), 0.0);
        assert_eq!(LazyLoader::<u8>::new(-5.0).root_margin(), 0.0);
    }
}
