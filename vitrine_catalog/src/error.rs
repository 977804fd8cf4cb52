// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::PathBuf;

use thiserror::Error;

use crate::model::SlideTemplate;
use crate::pattern::PatternError;

/// Errors raised while loading or validating a [`crate::Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not valid JSON or does not match the schema.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two projects share an id.
    #[error("duplicate project id `{0}`")]
    DuplicateId(String),

    /// A project has an empty id.
    #[error("project at position {0} has an empty id")]
    EmptyId(usize),

    /// A slide's image count does not match its template.
    #[error(
        "project `{project}` slide {slide}: template `{template}` takes {expected} image(s), got {actual}"
    )]
    TemplateArity {
        /// Project id.
        project: String,
        /// Zero-based slide index.
        slide: usize,
        /// Template of the offending slide.
        template: SlideTemplate,
        /// Images the template requires.
        expected: usize,
        /// Images the slide carries.
        actual: usize,
    },

    /// A gallery pattern does not expand.
    #[error("project `{project}`: invalid gallery pattern: {source}")]
    GalleryPattern {
        /// Project id.
        project: String,
        /// Why the pattern was rejected.
        #[source]
        source: PatternError,
    },

    /// A project has no cover image.
    #[error("project `{0}` has no cover image")]
    MissingCover(String),
}
