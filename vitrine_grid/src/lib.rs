// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Grid: viewport-aware grid layout for portfolio homepages.
//!
//! A portfolio homepage shows every project as a tile, plus one intro tile that
//! carries the site title and navigation, and it should fit the viewport
//! without scrolling. This crate picks how many columns and rows to use and
//! where each tile goes.
//!
//! The core concepts are:
//!
//! - [`GridParams`]: gaps, padding, the target tile aspect ratio, minimum and
//!   preferred tile sizes, search bounds, and [`ScoreWeights`].
//! - [`GridLayout::choose_dimensions`]: a bounded brute-force search over
//!   `rows × cols` that scores each candidate by aspect-ratio closeness,
//!   tile-size preference, row-count preference, and wasted cells, with a
//!   forced-fit fallback when nothing satisfies the minimum tile size.
//! - [`GridLayout::place`]: row-major tile rectangles for chosen
//!   [`GridDimensions`], with [`LastRowAlign`] controlling the final row.
//! - [`GridLayout::stack`]: the single-column, scrolling variant used on
//!   narrow (mobile) viewports.
//! - [`GridLayout::flow`]: the open-ended thumbnail grid used by galleries.
//!
//! Every result satisfies `cols >= 1`, `rows >= 1`, and
//! `cols * rows >= total_items + 1`.
//!
//! This crate does **not** know about the DOM. Hosts measure the viewport,
//! call [`GridLayout::layout`], and position their elements from the returned
//! [`GridPlacement`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use vitrine_grid::{GridLayout, GridParams};
//!
//! let layout = GridLayout::new(GridParams::default());
//! let placement = layout.layout(Size::new(1440.0, 900.0), 8);
//!
//! let dims = placement.dimensions;
//! assert!(dims.cols * dims.rows >= 8 + 1);
//! assert_eq!(placement.items.len(), 8);
//! // Tiles fit the viewport.
//! assert!(placement.content_size.height <= 900.0);
//! ```

mod params;
mod placement;
mod search;

pub use params::{GridParams, LastRowAlign, MAX_SEARCH_BOUND, ScoreWeights};
pub use placement::GridPlacement;
pub use search::{GridDimensions, GridLayout};
