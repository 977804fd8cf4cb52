// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use hashbrown::HashSet;

/// Set of image URLs already requested for preloading.
///
/// The browser keeps fetched images in its own cache; this only stops the
/// page from issuing a second request for something already in flight or
/// done.
#[derive(Clone, Debug, Default)]
pub struct PreloadCache {
    requested: HashSet<String>,
}

impl PreloadCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `url` as requested. Returns `true` only on the first call for a
    /// given URL, meaning the host should start the fetch.
    pub fn request(&mut self, url: &str) -> bool {
        if self.requested.contains(url) {
            return false;
        }
        tracing::trace!(url, "preloading image");
        self.requested.insert(url.to_owned())
    }

    /// Requests every URL in `urls`, returning the ones that were new, in order.
    pub fn request_all<'a>(&mut self, urls: impl IntoIterator<Item = &'a str>) -> Vec<String> {
        urls.into_iter()
            .filter(|url| self.request(url))
            .map(str::to_owned)
            .collect()
    }

    /// Returns `true` if `url` has been requested.
    #[must_use]
    pub fn contains(&self, url: &str) -> bool {
        self.requested.contains(url)
    }

    /// Number of distinct URLs requested.
    #[must_use]
    pub fn len(&self) -> usize {
        self.requested.len()
    }

    /// Returns `true` if nothing has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// Forgets every request.
    pub fn clear(&mut self) {
        self.requested.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_are_deduplicated() {
        let mut cache = PreloadCache::new();
        assert!(cache.request("a.jpg"));
        assert!(!cache.request("a.jpg"));
        assert!(cache.contains("a.jpg"));
        assert!(!cache.contains("b.jpg"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn request_all_returns_only_new_urls_in_order() {
        let mut cache = PreloadCache::new();
        cache.request("b.jpg");
        let fresh = cache.request_all(["a.jpg", "b.jpg", "c.jpg", "a.jpg"]);
        assert_eq!(fresh, ["a.jpg", "c.jpg"]);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn clear_allows_rerequest() {
        let mut cache = PreloadCache::new();
        cache.request("a.jpg");
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.request("a.jpg"));
    }
}
