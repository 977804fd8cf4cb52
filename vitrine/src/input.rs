// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};
use vitrine_event_state::Key;

use crate::Target;

/// Host input delivered to a page controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// A key was pressed.
    Key(Key),
    /// An element was clicked or tapped.
    Click(Target),
    /// A touch started.
    PointerDown(Point),
    /// A touch moved.
    PointerMove(Point),
    /// A touch ended.
    PointerUp(Point),
    /// The viewport changed size.
    Resize(Size),
    /// An animation frame is due.
    Frame,
    /// The visible part of the document changed, in page coordinates.
    Scroll(Rect),
    /// An image element finished loading.
    ImageLoaded(Target),
    /// An image element failed to load.
    ImageFailed(Target),
}
