// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Nav: page routing and navigation state.
//!
//! A Vitrine site has three pages: the homepage grid (`index.html`), a
//! project's slideshow (`project.html?project=<id>`), and a project's gallery
//! (`gallery.html?project=<id>`). This crate covers moving between them:
//!
//! - [`Route`]: detects the page from a location and builds links back to it.
//! - [`NavMenu`]: the open/closed state of the site menu.
//! - [`LayoutMode`]: desktop or mobile presentation from the viewport width.
//!
//! Routes do not validate project ids; the caller looks them up in its
//! catalog and decides what an unknown id means.
//!
//! ## Minimal example
//!
//! ```rust
//! use vitrine_nav::{LayoutMode, Route, RouteError};
//!
//! let route = Route::parse("https://example.com/project.html?project=salt-flats").unwrap();
//! assert_eq!(route.project_id(), Some("salt-flats"));
//! assert_eq!(route.href(), "project.html?project=salt-flats");
//!
//! assert!(matches!(
//!     Route::parse("gallery.html"),
//!     Err(RouteError::MissingProject { .. })
//! ));
//!
//! assert_eq!(LayoutMode::from_width(390.0, 768.0), LayoutMode::Mobile);
//! ```

mod layout;
mod menu;
mod route;

pub use layout::{DEFAULT_MOBILE_BREAKPOINT, LayoutMode};
pub use menu::NavMenu;
pub use route::{GALLERY_PAGE, HOME_PAGE, PROJECT_PAGE, PROJECT_PARAM, Route, RouteError};
