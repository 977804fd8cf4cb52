// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::path::Path;
use std::sync::OnceLock;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::model::Project;
use crate::pattern;

const BUILTIN_JSON: &str = include_str!("../data/projects.json");

#[derive(Deserialize, Serialize)]
struct CatalogFile {
    projects: Vec<Project>,
}

/// Validated, id-indexed list of projects.
///
/// Projects keep the order they were loaded in; that order drives the
/// homepage grid.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    projects: Vec<Project>,
    by_id: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from already-parsed projects, validating every invariant.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, CatalogError> {
        let mut by_id = HashMap::with_capacity(projects.len());
        for (position, project) in projects.iter().enumerate() {
            validate_project(position, project)?;
            if by_id.insert(project.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateId(project.id.clone()));
            }
        }
        tracing::debug!(projects = projects.len(), "catalog loaded");
        Ok(Self { projects, by_id })
    }

    /// Parses a catalog from JSON of the form `{ "projects": [ ... ] }`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_projects(file.projects)
    }

    /// Reads and parses a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Serializes the catalog back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, CatalogError> {
        let file = CatalogFile {
            projects: self.projects.clone(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    /// The catalog compiled into this crate.
    ///
    /// Parsed on first use and shared for the rest of the process. If the
    /// embedded table fails validation the error is logged and an empty
    /// catalog is returned; use [`Catalog::builtin_checked`] to see the error.
    pub fn builtin() -> &'static Self {
        static BUILTIN: OnceLock<Catalog> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            Self::builtin_checked().unwrap_or_else(|err| {
                tracing::error!(%err, "built-in catalog is invalid");
                Self::default()
            })
        })
    }

    /// Parses and validates the catalog compiled into this crate, reporting
    /// any problem instead of falling back to an empty catalog.
    pub fn builtin_checked() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_JSON)
    }

    /// Looks up a project by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Project> {
        self.by_id.get(id).map(|&i| &self.projects[i])
    }

    /// Position of project `id` in catalog order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// Project at `index` in catalog order.
    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Project> {
        self.projects.get(index)
    }

    /// Iterates projects in catalog order.
    pub fn iter(&self) -> core::slice::Iter<'_, Project> {
        self.projects.iter()
    }

    /// All projects in catalog order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Number of projects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns `true` if the catalog has no projects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Project;
    type IntoIter = core::slice::Iter<'a, Project>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_project(position: usize, project: &Project) -> Result<(), CatalogError> {
    if project.id.trim().is_empty() {
        return Err(CatalogError::EmptyId(position));
    }
    if project.cover.trim().is_empty() {
        return Err(CatalogError::MissingCover(project.id.clone()));
    }
    for (slide, spec) in project.slides.iter().enumerate() {
        let expected = spec.template.image_count();
        if spec.images.len() != expected {
            return Err(CatalogError::TemplateArity {
                project: project.id.clone(),
                slide,
                template: spec.template,
                expected,
                actual: spec.images.len(),
            });
        }
    }
    pattern::validate(&project.gallery.pattern).map_err(|source| CatalogError::GalleryPattern {
        project: project.id.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_is_valid_and_nonempty() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty(), "embedded table must validate");
        for project in catalog {
            assert_eq!(catalog.get(&project.id), Some(project));
            assert_eq!(project.gallery_images().len(), project.gallery.count);
        }
    }

    #[test]
    fn checked_builtin_matches_shared_builtin() {
        let checked = Catalog::builtin_checked().unwrap();
        let shared = Catalog::builtin();
        assert_eq!(checked.len(), shared.len());
        assert!(checked.iter().zip(shared).all(|(a, b)| a == b));
    }

    #[test]
    fn builtin_is_shared() {
        assert!(core::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn json_round_trip_preserves_order() {
        let catalog = Catalog::builtin();
        let json = catalog.to_json_string().unwrap();
        let again = Catalog::from_json_str(&json).unwrap();
        let ids: Vec<_> = again.iter().map(|p| p.id.as_str()).collect();
        let expected: Vec<_> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, expected);
    }
}
