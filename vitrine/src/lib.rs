// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine: headless page controllers for a static photography portfolio.
//!
//! A Vitrine site has a homepage grid of projects, a slideshow page per
//! project, and a gallery page per project with a lightbox. This crate ties
//! the building blocks together:
//!
//! - [`Site::enter`] detects the page from a location and builds its
//!   controller ([`HomePage`], [`ProjectPage`], or [`GalleryPage`]).
//! - Controllers consume host [`Input`] (keys, clicks, touches, resizes,
//!   frames, scrolls, image events) together with a millisecond timestamp,
//!   and return [`Effect`]s: class changes, image sources, preloads,
//!   placements, scroll locking, and navigation.
//! - [`SiteConfig`] carries the tunables and loads from TOML.
//!
//! The crate never touches a DOM. A browser host maps [`Target`]s to
//! elements and applies effects in order; tests and the CLI just inspect
//! them.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use vitrine::{Effect, Input, Site, SiteConfig, Target};
//!
//! let site = Site::builtin(SiteConfig::default());
//! let mut page = site.enter("https://example.com/", Size::new(1440.0, 900.0)).unwrap();
//!
//! let effects = page.start();
//! assert!(effects.iter().any(|e| matches!(e, Effect::Place { target: Target::Intro, .. })));
//!
//! let effects = page.handle(Input::Click(Target::GridItem(0)), 0);
//! assert!(matches!(&effects[..], [Effect::Navigate(href)] if href.starts_with("project.html?project=")));
//! ```

mod config;
mod effect;
mod error;
mod gallery;
mod home;
mod input;
mod project;
mod site;

pub use config::SiteConfig;
pub use effect::{Class, Effect, Target};
pub use error::{ConfigError, SiteError};
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use input::Input;
pub use project::ProjectPage;
pub use site::{Page, Site};
