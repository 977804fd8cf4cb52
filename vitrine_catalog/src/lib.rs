// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Catalog: the project table behind a portfolio.
//!
//! A portfolio is a static list of [`Project`]s. Each project drives one
//! slideshow page (a sequence of [`SlideSpec`]s, each a [`SlideTemplate`]
//! paired with one or two images) and one gallery page (a numbered image
//! series described by a [`GallerySpec`] pattern).
//!
//! [`Catalog`] owns the projects, enforces the table's invariants on load,
//! and answers lookups by id:
//!
//! - ids are non-empty and unique,
//! - every slide carries exactly as many images as its template shows,
//! - every gallery pattern expands (see [`pattern`]),
//! - every project has a cover image for the homepage grid.
//!
//! [`Catalog::builtin`] returns the table compiled into the crate, parsed once
//! per process.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_catalog::{Catalog, SlideTemplate};
//!
//! let json = r#"{ "projects": [{
//!     "id": "dunes",
//!     "title": "Dunes",
//!     "description": "Sand at dawn.",
//!     "date": "2024-05",
//!     "location": "Namib",
//!     "cover": "images/dunes/cover.jpg",
//!     "slides": [
//!         { "template": "diptych", "images": ["a.jpg", "b.jpg"] }
//!     ],
//!     "gallery": { "count": 3, "pattern": "images/{id}/{n:02}.jpg" }
//! }] }"#;
//!
//! let catalog = Catalog::from_json_str(json).unwrap();
//! let dunes = catalog.get("dunes").unwrap();
//! assert_eq!(dunes.slides[0].template, SlideTemplate::Diptych);
//! assert_eq!(dunes.gallery_images()[2], "images/dunes/03.jpg");
//! assert!(catalog.get("missing").is_none());
//! ```

mod catalog;
mod error;
mod model;
pub mod pattern;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use model::{GallerySpec, Project, SlideSpec, SlideTemplate};
pub use pattern::PatternError;
