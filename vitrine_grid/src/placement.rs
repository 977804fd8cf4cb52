// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::params::{LastRowAlign, non_negative};
use crate::search::{GridDimensions, GridLayout, sanitize_viewport};

/// Tile rectangles produced by [`GridLayout::place`] or [`GridLayout::stack`].
#[derive(Clone, Debug, PartialEq)]
pub struct GridPlacement {
    /// Dimensions the placement was built from.
    pub dimensions: GridDimensions,
    /// Rectangle of the intro tile (cell 0).
    pub intro: Rect,
    /// One rectangle per project, in catalog order.
    pub items: Vec<Rect>,
    /// Extent of the laid-out content including padding.
    ///
    /// Equal to the viewport for grids; taller than the viewport for a
    /// scrolling stack.
    pub content_size: Size,
}

impl GridPlacement {
    /// Returns `true` if the content is taller than `viewport` and must scroll.
    #[must_use]
    pub fn scrolls(&self, viewport: Size) -> bool {
        self.content_size.height > viewport.height
    }

    /// Iterates over every cell, intro tile first.
    pub fn cells(&self) -> impl Iterator<Item = Rect> + '_ {
        core::iter::once(self.intro).chain(self.items.iter().copied())
    }
}

impl GridLayout {
    /// Places `total_items` project tiles plus the intro tile row-major into
    /// the grid described by `dims`.
    #[must_use]
    pub fn place(&self, viewport: Size, dims: &GridDimensions, total_items: usize) -> GridPlacement {
        let p = self.params();
        let needed = Self::cells_needed(total_items);
        let cols = dims.cols.max(1);
        let cell = dims.cell;
        let step_x = cell.width + p.gap;
        let step_y = cell.height + p.gap;

        let last_row = (needed - 1) / cols;
        let in_last_row = needed - last_row * cols;
        let last_row_offset = match p.last_row_align {
            LastRowAlign::Start => 0.0,
            LastRowAlign::Center => (cols - in_last_row) as f64 * step_x * 0.5,
        };

        let mut rects = (0..needed).map(|i| {
            let row = i / cols;
            let col = i % cols;
            let mut x = p.padding + col as f64 * step_x;
            if row == last_row {
                x += last_row_offset;
            }
            let y = p.padding + row as f64 * step_y;
            Rect::from_origin_size(Point::new(x, y), cell)
        });

        let intro = rects.next().unwrap_or(Rect::ZERO);
        let items = rects.collect();
        let (w, h) = sanitize_viewport(viewport);
        GridPlacement {
            dimensions: *dims,
            intro,
            items,
            content_size: Size::new(w, h),
        }
    }

    /// Single-column layout for narrow viewports.
    ///
    /// Tiles span the viewport width minus padding and keep the target aspect
    /// ratio, so the content grows past the viewport height and scrolls.
    #[must_use]
    pub fn stack(&self, width: f64, total_items: usize) -> GridPlacement {
        let p = self.params();
        let needed = Self::cells_needed(total_items);
        let cell_w = non_negative(non_negative(width) - 2.0 * p.padding);
        let cell = Size::new(cell_w, cell_w / p.target_aspect);

        let mut rects = (0..needed).map(|i| {
            let y = p.padding + i as f64 * (cell.height + p.gap);
            Rect::from_origin_size(Point::new(p.padding, y), cell)
        });
        let intro = rects.next().unwrap_or(Rect::ZERO);
        let items: Vec<Rect> = rects.collect();

        let content_height =
            2.0 * p.padding + needed as f64 * cell.height + (needed - 1) as f64 * p.gap;
        GridPlacement {
            dimensions: GridDimensions {
                cols: 1,
                rows: needed,
                cell,
                score: 0.0,
                forced: false,
            },
            intro,
            items,
            content_size: Size::new(non_negative(width), content_height),
        }
    }

    /// Thumbnail grid for gallery pages: as many columns of at least
    /// `min_cell_width` as fit `width` (capped at `max_cols`), stretched to
    /// fill it, with rows flowing downwards without limit.
    ///
    /// There is no intro tile. Returns one rectangle per item.
    #[must_use]
    pub fn flow(&self, width: f64, total_items: usize) -> Vec<Rect> {
        let p = self.params();
        let inner = non_negative(non_negative(width) - 2.0 * p.padding);
        let fit = ((inner + p.gap) / (p.min_cell_width.max(1.0) + p.gap)).floor();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Clamped to 1..=max_cols immediately"
        )]
        let cols = (fit as usize).clamp(1, p.max_cols);
        let cell_w = non_negative(inner - (cols - 1) as f64 * p.gap) / cols as f64;
        let cell = Size::new(cell_w, cell_w / p.target_aspect);

        (0..total_items)
            .map(|i| {
                let x = p.padding + (i % cols) as f64 * (cell.width + p.gap);
                let y = p.padding + (i / cols) as f64 * (cell.height + p.gap);
                Rect::from_origin_size(Point::new(x, y), cell)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GridParams;

    #[test]
    fn cells_are_row_major_with_gaps() {
        let layout = GridLayout::new(GridParams {
            gap: 10.0,
            padding: 0.0,
            ..GridParams::default()
        });
        let dims = GridDimensions {
            cols: 3,
            rows: 2,
            cell: Size::new(100.0, 50.0),
            score: 0.0,
            forced: false,
        };
        let placement = layout.place(Size::new(320.0, 110.0), &dims, 4);
        assert_eq!(placement.intro, Rect::new(0.0, 0.0, 100.0, 50.0));
        assert_eq!(placement.items.len(), 4);
        assert_eq!(placement.items[0], Rect::new(110.0, 0.0, 210.0, 50.0));
        assert_eq!(placement.items[2], Rect::new(0.0, 60.0, 100.0, 110.0));
    }

    #[test]
    fn centered_last_row_is_offset() {
        let layout = GridLayout::new(GridParams {
            gap: 0.0,
            padding: 0.0,
            last_row_align: LastRowAlign::Center,
            ..GridParams::default()
        });
        let dims = GridDimensions {
            cols: 3,
            rows: 2,
            cell: Size::new(100.0, 100.0),
            score: 0.0,
            forced: false,
        };
        // 4 cells: three in row 0, one centered in row 1.
        let placement = layout.place(Size::new(300.0, 200.0), &dims, 3);
        assert_eq!(placement.items[2].x0, 100.0);
        // Full rows are unaffected.
        assert_eq!(placement.items[0].x0, 100.0);
        assert_eq!(placement.intro.x0, 0.0);
    }

    #[test]
    fn stack_scrolls_on_narrow_viewport() {
        let layout = GridLayout::new(GridParams {
            padding: 16.0,
            gap: 8.0,
            ..GridParams::default()
        });
        let placement = layout.stack(390.0, 6);
        assert_eq!(placement.dimensions.cols, 1);
        assert_eq!(placement.dimensions.rows, 7);
        assert_eq!(placement.items.len(), 6);
        assert_eq!(placement.intro.width(), 358.0);
        assert!(placement.scrolls(Size::new(390.0, 844.0)));
        let last = placement.items[5];
        assert!((placement.content_size.height - (last.y1 + 16.0)).abs() < 1e-9);
    }

    #[test]
    fn flow_fills_width_with_minimum_columns() {
        let layout = GridLayout::new(GridParams {
            padding: 20.0,
            gap: 10.0,
            min_cell_width: 200.0,
            ..GridParams::default()
        });
        // Inner width 960: (960 + 10) / 210 = 4.6, so four columns.
        let thumbs = layout.flow(1000.0, 10);
        assert_eq!(thumbs.len(), 10);
        assert_eq!(thumbs[0].x0, 20.0);
        assert!((thumbs[3].x1 - 980.0).abs() < 1e-9);
        assert_eq!(thumbs[4].x0, 20.0);
        assert!(thumbs[4].y0 > thumbs[3].y1);

        // Narrower than one column still yields one.
        let narrow = layout.flow(100.0, 3);
        assert!(narrow.iter().all(|r| r.x0 == 20.0));
    }

    #[test]
    fn cells_iterates_intro_first() {
        let layout = GridLayout::default();
        let placement = layout.layout(Size::new(1280.0, 800.0), 2);
        let cells: Vec<Rect> = placement.cells().collect();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0], placement.intro);
    }
}
