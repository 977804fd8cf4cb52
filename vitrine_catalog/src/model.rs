// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::pattern;

/// Layout variant of a single slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideTemplate {
    /// One image, contained within the page margins.
    Main,
    /// One image covering the whole viewport.
    Fullscreen,
    /// Two images side by side.
    Diptych,
    /// One image scaled to the full viewport height.
    Fullheight,
}

impl SlideTemplate {
    /// All templates, in declaration order.
    pub const ALL: [Self; 4] = [Self::Main, Self::Fullscreen, Self::Diptych, Self::Fullheight];

    /// Number of images a slide of this template shows.
    #[must_use]
    pub const fn image_count(self) -> usize {
        match self {
            Self::Diptych => 2,
            Self::Main | Self::Fullscreen | Self::Fullheight => 1,
        }
    }

    /// Template name as used in catalog files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Fullscreen => "fullscreen",
            Self::Diptych => "diptych",
            Self::Fullheight => "fullheight",
        }
    }

    /// CSS class applied to slides of this template.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Main => "slide--main",
            Self::Fullscreen => "slide--fullscreen",
            Self::Diptych => "slide--diptych",
            Self::Fullheight => "slide--fullheight",
        }
    }
}

impl fmt::Display for SlideTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slide of a project slideshow.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSpec {
    /// Layout variant.
    pub template: SlideTemplate,
    /// Image paths, one or two depending on `template`.
    pub images: SmallVec<[String; 2]>,
    /// Optional caption shown with the slide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Numbered image series shown on a project's gallery page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GallerySpec {
    /// Number of images, numbered `1..=count`.
    pub count: usize,
    /// Path pattern; see [`crate::pattern`].
    pub pattern: String,
}

/// A portfolio project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier, used in `?project=` links.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-form description shown in the project info panel.
    pub description: String,
    /// Display date (for example `2024-02`).
    pub date: String,
    /// Where the work was shot.
    pub location: String,
    /// Commissioning client, if any.
    #[serde(default)]
    pub client: Option<String>,
    /// Cover image used on the homepage grid.
    pub cover: String,
    /// Slideshow content.
    pub slides: Vec<SlideSpec>,
    /// Gallery content.
    pub gallery: GallerySpec,
}

impl Project {
    /// Number of slides in the slideshow.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Number of gallery images.
    #[must_use]
    pub fn gallery_len(&self) -> usize {
        self.gallery.count
    }

    /// Expands the gallery pattern into `count` image paths.
    ///
    /// Returns an empty list if the pattern does not expand; catalogs built
    /// through [`crate::Catalog`] have already rejected such patterns.
    #[must_use]
    pub fn gallery_images(&self) -> Vec<String> {
        (1..=self.gallery.count)
            .map_while(|n| pattern::expand(&self.gallery.pattern, &self.id, n).ok())
            .collect()
    }

    /// Path of gallery image `index` (zero-based), if in range.
    #[must_use]
    pub fn gallery_image(&self, index: usize) -> Option<String> {
        if index >= self.gallery.count {
            return None;
        }
        pattern::expand(&self.gallery.pattern, &self.id, index + 1).ok()
    }

    /// Image paths of slide `index`, if in range.
    #[must_use]
    pub fn slide_images(&self, index: usize) -> Option<&[String]> {
        self.slides.get(index).map(|slide| slide.images.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "p".into(),
            title: "P".into(),
            description: String::new(),
            date: "2020".into(),
            location: "Here".into(),
            client: None,
            cover: "c.jpg".into(),
            slides: vec![SlideSpec {
                template: SlideTemplate::Diptych,
                images: smallvec::smallvec!["a.jpg".into(), "b.jpg".into()],
                caption: None,
            }],
            gallery: GallerySpec {
                count: 3,
                pattern: "g/{id}-{n}.jpg".into(),
            },
        }
    }

    #[test]
    fn template_arity_and_names() {
        assert_eq!(SlideTemplate::Diptych.image_count(), 2);
        for t in SlideTemplate::ALL {
            assert!(t.class_name().ends_with(t.as_str()));
            if t != SlideTemplate::Diptych {
                assert_eq!(t.image_count(), 1);
            }
        }
    }

    #[test]
    fn gallery_paths_are_one_based() {
        let p = project();
        assert_eq!(p.gallery_images(), ["g/p-1.jpg", "g/p-2.jpg", "g/p-3.jpg"]);
        assert_eq!(p.gallery_image(0).as_deref(), Some("g/p-1.jpg"));
        assert_eq!(p.gallery_image(3), None);
    }

    #[test]
    fn slide_images_by_index() {
        let p = project();
        assert_eq!(p.slide_images(0), Some(&["a.jpg".to_string(), "b.jpg".to_string()][..]));
        assert_eq!(p.slide_images(1), None);
        assert_eq!(p.slide_count(), 1);
    }

    #[test]
    fn template_serde_names_are_lowercase() {
        let t: SlideTemplate = serde_json::from_str("\"fullheight\"").unwrap();
        assert_eq!(t, SlideTemplate::Fullheight);
        assert_eq!(serde_json::to_string(&SlideTemplate::Main).unwrap(), "\"main\"");
    }
}
