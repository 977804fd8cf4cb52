// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `vitrine_slideshow` crate.
//!
//! These focus on the transition lock, wraparound, and the info panel.

use vitrine_catalog::{SlideSpec, SlideTemplate};
use vitrine_event_state::Command;
use vitrine_slideshow::{Direction, SlideChange, Slideshow, SlideshowEvent};

fn slides(n: usize) -> Vec<SlideSpec> {
    (0..n)
        .map(|i| SlideSpec {
            template: SlideTemplate::Main,
            images: [format!("{i}.jpg")].into_iter().collect(),
            caption: None,
        })
        .collect()
}

#[test]
fn lock_refuses_second_transition_within_duration() {
    let mut show = Slideshow::new(slides(5), 300);
    assert!(show.next(0).is_some());
    assert!(show.is_transitioning(150));
    assert_eq!(show.next(299), None, "still animating");
    assert_eq!(show.previous(200), None, "direction does not matter");
    assert_eq!(show.go_to(4, 100), None, "jumps are locked too");
    assert_eq!(show.active(), Some(1));
    assert!(show.next(300).is_some(), "free again after 300ms");
    assert_eq!(show.active(), Some(2));
}

#[test]
fn wraps_in_both_directions() {
    let mut show = Slideshow::new(slides(3), 0);
    assert_eq!(
        show.previous(0),
        Some(SlideChange {
            from: 0,
            to: 2,
            direction: Direction::Backward
        })
    );
    assert_eq!(
        show.next(0),
        Some(SlideChange {
            from: 2,
            to: 0,
            direction: Direction::Forward
        })
    );
}

#[test]
fn go_to_rejects_out_of_range_and_current() {
    let mut show = Slideshow::new(slides(3), 0);
    assert_eq!(show.go_to(3, 0), None);
    assert_eq!(show.go_to(0, 0), None);
    let change = show.go_to(2, 0).unwrap();
    assert_eq!(change.direction, Direction::Forward);
    let back = show.go_to(1, 0).unwrap();
    assert_eq!(back.direction, Direction::Backward);
}

#[test]
fn refused_no_op_does_not_take_the_lock() {
    let mut show = Slideshow::new(slides(3), 300);
    assert_eq!(show.go_to(0, 0), None);
    assert!(!show.is_transitioning(0));
    assert!(show.next(1).is_some());
}

#[test]
fn empty_and_single_slide_shows_never_move() {
    let mut empty = Slideshow::new(Vec::new(), 0);
    assert_eq!(empty.active(), None);
    assert_eq!(empty.next(0), None);
    assert_eq!(empty.previous(0), None);
    assert_eq!(empty.apply(Command::Last, 0), None);
    assert!(empty.preload_indices(2).is_empty());

    let mut single = Slideshow::new(slides(1), 0);
    assert_eq!(single.active(), Some(0));
    assert_eq!(single.next(0), None);
    assert_eq!(single.previous(0), None);
}

#[test]
fn commands_drive_navigation_and_info() {
    let mut show = Slideshow::new(slides(4), 0);
    assert!(matches!(
        show.apply(Command::Last, 0),
        Some(SlideshowEvent::Changed(SlideChange { to: 3, .. }))
    ));
    assert!(matches!(
        show.apply(Command::First, 0),
        Some(SlideshowEvent::Changed(SlideChange { to: 0, .. }))
    ));
    assert_eq!(
        show.apply(Command::ToggleInfo, 0),
        Some(SlideshowEvent::InfoVisibility(true))
    );
    assert!(show.info_visible());
    assert_eq!(
        show.apply(Command::Close, 0),
        Some(SlideshowEvent::InfoVisibility(false))
    );
    assert_eq!(show.apply(Command::Close, 0), None, "already hidden");
    assert_eq!(show.apply(Command::ToggleMenu, 0), None);
}

#[test]
fn info_helpers_report_changes() {
    let mut show = Slideshow::new(slides(2), 0);
    assert!(show.show_info());
    assert!(!show.show_info());
    assert!(show.hide_info());
    assert!(!show.hide_info());
}

#[test]
fn preload_indices_are_nearest_first_and_unique() {
    let mut show = Slideshow::new(slides(5), 0);
    assert_eq!(show.preload_indices(1), [1, 4]);
    assert_eq!(show.preload_indices(2), [1, 4, 2, 3]);
    // Radius larger than the show never repeats or includes the active slide.
    assert_eq!(show.preload_indices(10), [1, 4, 2, 3]);

    show.go_to(2, 0);
    assert_eq!(show.preload_indices(1), [3, 1]);

    let two = Slideshow::new(slides(2), 0);
    assert_eq!(two.preload_indices(3), [1]);
}

#[test]
fn preload_images_follow_indices() {
    let show = Slideshow::new(slides(4), 0);
    assert_eq!(show.preload_images(1), ["1.jpg", "3.jpg"]);
}
