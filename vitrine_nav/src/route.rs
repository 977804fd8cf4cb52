// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;
use url::Url;
use url::form_urlencoded;

/// Page file for the homepage grid.
pub const HOME_PAGE: &str = "index.html";
/// Page file for a project slideshow.
pub const PROJECT_PAGE: &str = "project.html";
/// Page file for a project gallery.
pub const GALLERY_PAGE: &str = "gallery.html";
/// Query parameter carrying the project id.
pub const PROJECT_PARAM: &str = "project";

/// Base used to resolve relative locations such as `project.html?project=a`.
const RELATIVE_BASE: &str = "http://localhost/";

/// Errors from [`Route::parse`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    /// The location is not a URL at all.
    #[error("invalid location: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A project or gallery page was opened without a `project` parameter.
    #[error("no project id in {page}")]
    MissingProject {
        /// Page file that needed the id.
        page: &'static str,
    },

    /// The last path segment names no known page.
    #[error("unknown page `{0}`")]
    UnknownPage(String),
}

/// Which page a location refers to.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// The homepage grid.
    Home,
    /// A project's slideshow page.
    Project {
        /// Project id from the query string.
        id: String,
    },
    /// A project's gallery page.
    Gallery {
        /// Project id from the query string.
        id: String,
    },
}

impl Route {
    /// Detects the page from a location, absolute or relative.
    ///
    /// Only the last path segment matters, so sites can live under any
    /// prefix. The project id is not checked against a catalog here.
    pub fn parse(location: &str) -> Result<Self, RouteError> {
        let url = match Url::parse(location) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Url::parse(RELATIVE_BASE)?.join(location)?
            }
            Err(err) => return Err(err.into()),
        };
        Self::from_url(&url)
    }

    /// Detects the page from a parsed URL.
    pub fn from_url(url: &Url) -> Result<Self, RouteError> {
        let page = url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .unwrap_or_default();
        match page {
            "" | HOME_PAGE => Ok(Self::Home),
            PROJECT_PAGE => project_id(url, PROJECT_PAGE).map(|id| Self::Project { id }),
            GALLERY_PAGE => project_id(url, GALLERY_PAGE).map(|id| Self::Gallery { id }),
            other => Err(RouteError::UnknownPage(other.to_owned())),
        }
    }

    /// The project id, unless this is the homepage.
    #[must_use]
    pub fn project_id(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Project { id } | Self::Gallery { id } => Some(id),
        }
    }

    /// Page file this route points at.
    #[must_use]
    pub fn page(&self) -> &'static str {
        match self {
            Self::Home => HOME_PAGE,
            Self::Project { .. } => PROJECT_PAGE,
            Self::Gallery { .. } => GALLERY_PAGE,
        }
    }

    /// Relative link to this route, with the project id percent-encoded.
    #[must_use]
    pub fn href(&self) -> String {
        match self.project_id() {
            None => HOME_PAGE.to_owned(),
            Some(id) => {
                let query = form_urlencoded::Serializer::new(String::new())
                    .append_pair(PROJECT_PARAM, id)
                    .finish();
                format!("{}?{query}", self.page())
            }
        }
    }
}

fn project_id(url: &Url, page: &'static str) -> Result<String, RouteError> {
    url.query_pairs()
        .find(|(key, _)| key == PROJECT_PARAM)
        .map(|(_, value)| value.trim().to_owned())
        .filter(|id| !id.is_empty())
        .ok_or(RouteError::MissingProject { page })
}
