// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use vitrine_catalog::{Catalog, Project};
use vitrine_nav::Route;
use vitrine_timing::Millis;

use crate::{Effect, GalleryPage, HomePage, Input, ProjectPage, SiteConfig, SiteError};

/// A portfolio site: the catalog plus configuration.
#[derive(Clone, Debug)]
pub struct Site {
    catalog: Catalog,
    config: SiteConfig,
}

impl Site {
    /// Creates a site over `catalog`.
    #[must_use]
    pub fn new(catalog: Catalog, config: SiteConfig) -> Self {
        Self { catalog, config }
    }

    /// Creates a site over the built-in catalog.
    #[must_use]
    pub fn builtin(config: SiteConfig) -> Self {
        Self::new(Catalog::builtin().clone(), config)
    }

    /// The projects.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Detects the page at `location` and builds its controller.
    ///
    /// Unknown pages, missing project ids, and ids absent from the catalog
    /// are logged and returned as errors; there is no fallback page.
    pub fn enter(&self, location: &str, viewport: Size) -> Result<Page, SiteError> {
        let route = Route::parse(location).inspect_err(|err| {
            tracing::error!(location, %err, "cannot route location");
        })?;
        let page = match &route {
            Route::Home => Page::Home(HomePage::new(&self.catalog, &self.config, viewport)),
            Route::Project { id } => Page::Project(ProjectPage::new(self.project(id)?, &self.config)),
            Route::Gallery { id } => {
                Page::Gallery(GalleryPage::new(self.project(id)?, &self.config, viewport))
            }
        };
        tracing::info!(page = route.page(), project = route.project_id(), "entered page");
        Ok(page)
    }

    fn project(&self, id: &str) -> Result<&Project, SiteError> {
        self.catalog.get(id).ok_or_else(|| {
            tracing::error!(id, "project not found in catalog");
            SiteError::UnknownProject(id.to_owned())
        })
    }
}

/// The controller for whichever page was entered.
#[derive(Clone, Debug)]
pub enum Page {
    /// Homepage grid.
    Home(HomePage),
    /// Project slideshow.
    Project(ProjectPage),
    /// Project gallery.
    Gallery(GalleryPage),
}

impl Page {
    /// Initial effects for the freshly entered page.
    pub fn start(&mut self) -> Vec<Effect> {
        match self {
            Self::Home(page) => page.start(),
            Self::Project(page) => page.start(),
            Self::Gallery(page) => page.start(),
        }
    }

    /// Feeds one input to the page controller.
    pub fn handle(&mut self, input: Input, now: Millis) -> Vec<Effect> {
        match self {
            Self::Home(page) => page.handle(input, now),
            Self::Project(page) => page.handle(input, now),
            Self::Gallery(page) => page.handle(input, now),
        }
    }
}
