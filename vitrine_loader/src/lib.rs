// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Loader: image loading bookkeeping for portfolio pages.
//!
//! Photography pages are mostly images, and how they appear matters: covers
//! fade in as they arrive, the next slide is fetched before it is needed, and
//! long galleries only load what is near the viewport. This crate keeps the
//! state behind those behaviours; the host does the actual fetching.
//!
//! - [`LoadTracker`]: per-element [`LoadState`] (`loading` → `loaded` or
//!   `error`) plus counters. A failed image still counts as settled, so one
//!   broken file never blocks [`LoadTracker::is_ready`].
//! - [`PreloadCache`]: the set of URLs already requested, so neighbour
//!   preloading never asks for the same image twice.
//! - [`LazyLoader`]: a headless intersection observer. Elements register with
//!   their rectangle; [`LazyLoader::visible`] reports the ones that entered the
//!   viewport (expanded by a root margin) since the last call.
//!
//! There is no timeout, retry, or concurrency limit: failures are final for
//! the page's lifetime.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_loader::{LoadState, LoadTracker, PreloadCache};
//!
//! let mut covers = LoadTracker::new();
//! covers.register(0_usize);
//! covers.register(1);
//! covers.mark_loaded(&0);
//! covers.mark_failed(&1);
//! assert_eq!(covers.state(&1), Some(LoadState::Error));
//! assert!(covers.is_ready());
//!
//! let mut cache = PreloadCache::new();
//! assert!(cache.request("images/a.jpg"));
//! assert!(!cache.request("images/a.jpg"));
//! ```

mod lazy;
mod preload;
mod tracker;

pub use lazy::LazyLoader;
pub use preload::PreloadCache;
pub use tracker::{LoadState, LoadTracker};
