// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;
use vitrine_nav::RouteError;

/// Errors loading a [`crate::SiteConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Io {
        /// File that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or has wrongly typed values.
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// The configuration could not be written as TOML.
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors entering a page with [`crate::Site::enter`].
#[derive(Debug, Error)]
pub enum SiteError {
    /// The location names no page, or a project page lacks its id.
    #[error(transparent)]
    Route(#[from] RouteError),

    /// The location names a project the catalog does not have.
    #[error("unknown project `{0}`")]
    UnknownProject(String),
}
