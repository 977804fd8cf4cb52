// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use vitrine_catalog::Catalog;
use vitrine_event_state::{Command, KeyMap};
use vitrine_grid::{GridLayout, GridPlacement};
use vitrine_loader::{LoadState, LoadTracker};
use vitrine_nav::{LayoutMode, NavMenu, Route};
use vitrine_timing::{Debouncer, FrameCoalescer, Millis};

use crate::effect::image_settled;
use crate::{Class, Effect, Input, SiteConfig, Target};

/// Controller for the homepage grid.
#[derive(Clone, Debug)]
pub struct HomePage {
    layout: GridLayout,
    breakpoint: f64,
    viewport: Size,
    mode: LayoutMode,
    placement: GridPlacement,
    hrefs: Vec<String>,
    covers: Vec<String>,
    tracker: LoadTracker<usize>,
    resize: Debouncer,
    frame: FrameCoalescer,
    menu: NavMenu,
    keys: KeyMap,
}

impl HomePage {
    pub(crate) fn new(catalog: &Catalog, config: &SiteConfig, viewport: Size) -> Self {
        let layout = GridLayout::new(config.grid);
        let mode = LayoutMode::from_width(viewport.width, config.mobile_breakpoint);
        let placement = arrange(&layout, mode, viewport, catalog.len());
        Self {
            layout,
            breakpoint: config.mobile_breakpoint,
            viewport,
            mode,
            placement,
            hrefs: catalog
                .iter()
                .map(|p| Route::Project { id: p.id.clone() }.href())
                .collect(),
            covers: catalog.iter().map(|p| p.cover.clone()).collect(),
            tracker: LoadTracker::new(),
            resize: Debouncer::new(config.resize_debounce_ms),
            frame: FrameCoalescer::new(),
            menu: NavMenu::new(),
            keys: KeyMap::default(),
        }
    }

    /// Initial effects: place every tile and start loading every cover.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut effects = self.place_effects();
        for (index, cover) in self.covers.iter().enumerate() {
            if self.tracker.register(index) {
                let target = Target::GridItem(index);
                effects.push(Effect::AddClass(target, Class::Loading));
                effects.push(Effect::SetSource(target, cover.clone()));
            }
        }
        effects
    }

    /// Feeds one input, returning the DOM work it causes.
    pub fn handle(&mut self, input: Input, now: Millis) -> Vec<Effect> {
        match input {
            Input::Resize(size) => {
                self.viewport = size;
                self.resize.trigger(now);
                Vec::new()
            }
            Input::Frame => {
                if self.resize.poll(now) {
                    self.frame.request();
                }
                if self.frame.take() {
                    self.relayout()
                } else {
                    Vec::new()
                }
            }
            Input::Click(Target::GridItem(index)) => self
                .hrefs
                .get(index)
                .map(|href| vec![Effect::Navigate(href.clone())])
                .unwrap_or_default(),
            Input::Click(Target::MenuToggle) => {
                self.menu.toggle();
                self.menu_effects()
            }
            Input::Click(Target::MenuLink) => {
                if self.menu.follow_link() {
                    self.menu_effects()
                } else {
                    Vec::new()
                }
            }
            Input::Key(key) => match self.keys.command(key) {
                Some(command @ (Command::ToggleMenu | Command::Close)) => {
                    if self.menu.apply(command) {
                        self.menu_effects()
                    } else {
                        Vec::new()
                    }
                }
                _ => Vec::new(),
            },
            Input::ImageLoaded(Target::GridItem(index)) => {
                if self.tracker.mark_loaded(&index) {
                    image_settled(Target::GridItem(index), LoadState::Loaded)
                } else {
                    Vec::new()
                }
            }
            Input::ImageFailed(Target::GridItem(index)) => {
                if self.tracker.mark_failed(&index) {
                    image_settled(Target::GridItem(index), LoadState::Error)
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        }
    }

    /// Current tile rectangles.
    #[must_use]
    pub fn placement(&self) -> &GridPlacement {
        &self.placement
    }

    /// Current presentation mode.
    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Whether the navigation menu is open.
    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Cover load bookkeeping.
    #[must_use]
    pub fn covers(&self) -> &LoadTracker<usize> {
        &self.tracker
    }

    fn relayout(&mut self) -> Vec<Effect> {
        self.mode = LayoutMode::from_width(self.viewport.width, self.breakpoint);
        self.placement = arrange(&self.layout, self.mode, self.viewport, self.covers.len());
        self.place_effects()
    }

    fn place_effects(&self) -> Vec<Effect> {
        let intro = Effect::Place {
            target: Target::Intro,
            rect: self.placement.intro,
        };
        core::iter::once(intro)
            .chain(
                self.placement
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, &rect)| Effect::Place {
                        target: Target::GridItem(i),
                        rect,
                    }),
            )
            .collect()
    }

    fn menu_effects(&self) -> Vec<Effect> {
        vec![Effect::class(Target::Body, Class::MenuOpen, self.menu.is_open())]
    }
}

fn arrange(layout: &GridLayout, mode: LayoutMode, viewport: Size, items: usize) -> GridPlacement {
    let placement = match mode {
        LayoutMode::Desktop => layout.layout(viewport, items),
        LayoutMode::Mobile => layout.stack(viewport.width, items),
    };
    let dims = placement.dimensions;
    tracing::debug!(
        cols = dims.cols,
        rows = dims.rows,
        forced = dims.forced,
        mobile = mode.is_mobile(),
        "homepage grid laid out"
    );
    placement
}
