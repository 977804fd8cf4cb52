// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::Rect;
use vitrine_loader::LoadState;

/// An element the page controllers address.
///
/// Indexed targets use catalog order (grid items), slide order (slides), or
/// gallery order (thumbnails).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    /// The document body; carries page-wide classes.
    Body,
    /// Homepage intro tile with the site title and menu.
    Intro,
    /// The menu open/close button.
    MenuToggle,
    /// A link inside the menu.
    MenuLink,
    /// Homepage tile for the project at this catalog index; also its cover image.
    GridItem(usize),
    /// Project page slide.
    Slide(usize),
    /// Button showing or hiding the project information panel.
    InfoToggle,
    /// Link from a project page to its gallery.
    GalleryLink,
    /// Link from a gallery back to its project.
    ProjectLink,
    /// Gallery thumbnail.
    Thumbnail(usize),
    /// The lightbox overlay.
    Lightbox,
    /// The image inside the lightbox.
    LightboxImage,
    /// A "next" control (slideshow or lightbox).
    NextButton,
    /// A "previous" control (slideshow or lightbox).
    PreviousButton,
    /// A "close" control (lightbox).
    CloseButton,
}

/// CSS classes toggled by the controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Class {
    /// Image requested, not yet arrived.
    Loading,
    /// Image displayed.
    Loaded,
    /// Image failed.
    Error,
    /// Current slide, or the open lightbox.
    Active,
    /// Project information panel shown (on the body).
    ProjectInfoVisible,
    /// Navigation menu open (on the body).
    MenuOpen,
}

impl Class {
    /// Class name as written in the stylesheet.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Error => "error",
            Self::Active => "active",
            Self::ProjectInfoVisible => "project-info-visible",
            Self::MenuOpen => "menu-open",
        }
    }
}

impl From<LoadState> for Class {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Loading => Self::Loading,
            LoadState::Loaded => Self::Loaded,
            LoadState::Error => Self::Error,
        }
    }
}

impl fmt::Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DOM instruction for the host to carry out, in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Add a class to an element.
    AddClass(Target, Class),
    /// Remove a class from an element.
    RemoveClass(Target, Class),
    /// Hide an element (failed images).
    Hide(Target),
    /// Set an image element's source.
    SetSource(Target, String),
    /// Fetch an image ahead of time without displaying it.
    Preload(String),
    /// Position an element absolutely, in page coordinates.
    Place {
        /// Element to move.
        target: Target,
        /// Its new border box.
        rect: Rect,
    },
    /// Lock (`true`) or unlock page scrolling.
    LockScroll(bool),
    /// Go to another page (a relative link).
    Navigate(String),
}

impl Effect {
    /// `AddClass` or `RemoveClass` depending on `on`.
    #[must_use]
    pub fn class(target: Target, class: Class, on: bool) -> Self {
        if on {
            Self::AddClass(target, class)
        } else {
            Self::RemoveClass(target, class)
        }
    }
}

/// Effects for pointing a reused image element at `src`: any class left by
/// the previous source is dropped and the element starts loading again.
pub(crate) fn image_requested(target: Target, src: String) -> Vec<Effect> {
    vec![
        Effect::RemoveClass(target, Class::Loaded),
        Effect::RemoveClass(target, Class::Error),
        Effect::AddClass(target, Class::Loading),
        Effect::SetSource(target, src),
    ]
}

/// Effects for an image that has just settled into `state`.
pub(crate) fn image_settled(target: Target, state: LoadState) -> Vec<Effect> {
    let mut effects = vec![
        Effect::RemoveClass(target, Class::Loading),
        Effect::AddClass(target, state.into()),
    ];
    if state == LoadState::Error {
        effects.push(Effect::Hide(target));
    }
    effects
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_names_match_stylesheet() {
        let names: Vec<&str> = [
            Class::Loading,
            Class::Loaded,
            Class::Error,
            Class::Active,
            Class::ProjectInfoVisible,
            Class::MenuOpen,
        ]
        .into_iter()
        .map(Class::as_str)
        .collect();
        assert_eq!(
            names,
            ["loading", "loaded", "error", "active", "project-info-visible", "menu-open"]
        );
        assert_eq!(Class::from(LoadState::Error).to_string(), "error");
    }

    #[test]
    fn failed_images_are_hidden() {
        let effects = image_settled(Target::Thumbnail(2), LoadState::Error);
        assert_eq!(effects.last(), Some(&Effect::Hide(Target::Thumbnail(2))));
        let effects = image_settled(Target::Slide(0), LoadState::Loaded);
        assert_eq!(
            effects,
            [
                Effect::RemoveClass(Target::Slide(0), Class::Loading),
                Effect::AddClass(Target::Slide(0), Class::Loaded),
            ]
        );
    }

    #[test]
    fn requested_images_drop_stale_classes() {
        let effects = image_requested(Target::LightboxImage, "a.jpg".into());
        assert!(effects.contains(&Effect::RemoveClass(Target::LightboxImage, Class::Error)));
        assert!(effects.contains(&Effect::RemoveClass(Target::LightboxImage, Class::Loaded)));
        assert_eq!(
            &effects[2..],
            [
                Effect::AddClass(Target::LightboxImage, Class::Loading),
                Effect::SetSource(Target::LightboxImage, "a.jpg".into()),
            ]
        );
    }
}
