// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::params::{GridParams, non_negative};
use crate::placement::GridPlacement;

/// Column/row counts and tile size chosen for a viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridDimensions {
    /// Number of columns; always at least one.
    pub cols: usize,
    /// Number of rows; always at least one.
    pub rows: usize,
    /// Size of every tile.
    pub cell: Size,
    /// Penalty score of this candidate; lower is better.
    ///
    /// Forced fits are not scored and carry `f64::INFINITY`.
    pub score: f64,
    /// `true` when no candidate met the minimum tile size and the grid was
    /// shrunk to fit anyway.
    pub forced: bool,
}

impl GridDimensions {
    /// Total number of cells, `cols * rows`.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cols * self.rows
    }

    /// Number of cells left unused when laying out `needed` tiles.
    #[must_use]
    pub fn empty_cells(&self, needed: usize) -> usize {
        self.capacity().saturating_sub(needed)
    }
}

/// Grid layout engine.
///
/// `GridLayout` is cheap to construct and holds only its (sanitized)
/// [`GridParams`]; every query is a pure function of the viewport and item
/// count.
#[derive(Clone, Debug, Default)]
pub struct GridLayout {
    params: GridParams,
}

impl GridLayout {
    /// Creates a layout engine with the given parameters.
    #[must_use]
    pub fn new(params: GridParams) -> Self {
        Self {
            params: params.sanitized(),
        }
    }

    /// Returns the parameters in use.
    #[must_use]
    pub fn params(&self) -> &GridParams {
        &self.params
    }

    /// Number of cells required for `total_items` projects: one per project
    /// plus the intro tile.
    #[must_use]
    pub fn cells_needed(total_items: usize) -> usize {
        total_items.saturating_add(1)
    }

    /// Tile size for `cols × rows` inside `viewport`, clamped at zero.
    #[must_use]
    pub fn cell_size(&self, viewport: Size, cols: usize, rows: usize) -> Size {
        let p = &self.params;
        let (w, h) = sanitize_viewport(viewport);
        let cols = cols.max(1);
        let rows = rows.max(1);
        let inner_w = w - 2.0 * p.padding - (cols - 1) as f64 * p.gap;
        let inner_h = h - 2.0 * p.padding - (rows - 1) as f64 * p.gap;
        Size::new(
            non_negative(inner_w / cols as f64),
            non_negative(inner_h / rows as f64),
        )
    }

    /// Scores a single `cols × rows` candidate for `needed` cells.
    ///
    /// Returns `None` when the candidate cannot hold `needed` cells or its
    /// tiles fall below the minimum size.
    #[must_use]
    pub fn score(&self, viewport: Size, cols: usize, rows: usize, needed: usize) -> Option<f64> {
        if cols == 0 || rows == 0 || cols.saturating_mul(rows) < needed {
            return None;
        }
        let p = &self.params;
        let cell = self.cell_size(viewport, cols, rows);
        if cell.width <= 0.0
            || cell.height <= 0.0
            || cell.width < p.min_cell_width
            || cell.height < p.min_cell_height
        {
            return None;
        }

        let aspect = (cell.width / cell.height / p.target_aspect).ln().abs();
        let size = (cell.width / p.preferred_cell_width).ln().abs();
        let row_pref = rows.abs_diff(p.preferred_rows) as f64;
        let capacity = cols.saturating_mul(rows) as f64;
        let empty = (capacity - needed as f64) / capacity;

        let w = &p.weights;
        Some(w.aspect * aspect + w.cell_size * size + w.rows * row_pref + w.empty * empty)
    }

    /// Every accepted candidate for `total_items`, best first.
    ///
    /// This is the full search that [`GridLayout::choose_dimensions`] takes
    /// the head of; it is exposed for inspection and tuning tools.
    #[must_use]
    pub fn ranked(&self, viewport: Size, total_items: usize) -> Vec<GridDimensions> {
        let needed = Self::cells_needed(total_items);
        let mut out = Vec::new();
        for rows in 1..=self.params.max_rows {
            for cols in 1..=self.params.max_cols {
                if let Some(score) = self.score(viewport, cols, rows, needed) {
                    out.push(GridDimensions {
                        cols,
                        rows,
                        cell: self.cell_size(viewport, cols, rows),
                        score,
                        forced: false,
                    });
                }
            }
        }
        out.sort_by(compare_candidates);
        out
    }

    /// Picks grid dimensions for `total_items` projects in `viewport`.
    ///
    /// Falls back to [`GridLayout::forced_fit`] when no candidate within the
    /// search bounds satisfies the minimum tile size.
    #[must_use]
    pub fn choose_dimensions(&self, viewport: Size, total_items: usize) -> GridDimensions {
        let needed = Self::cells_needed(total_items);
        let mut best: Option<GridDimensions> = None;
        for rows in 1..=self.params.max_rows {
            for cols in 1..=self.params.max_cols {
                let Some(score) = self.score(viewport, cols, rows, needed) else {
                    continue;
                };
                let candidate = GridDimensions {
                    cols,
                    rows,
                    cell: self.cell_size(viewport, cols, rows),
                    score,
                    forced: false,
                };
                let better = match &best {
                    None => true,
                    Some(current) => compare_candidates(&candidate, current).is_lt(),
                };
                if better {
                    best = Some(candidate);
                }
            }
        }
        best.unwrap_or_else(|| self.forced_fit(viewport, needed))
    }

    /// Shrinks a roughly viewport-shaped grid of `needed` cells into the
    /// viewport, ignoring minimum tile sizes and search bounds.
    #[must_use]
    pub fn forced_fit(&self, viewport: Size, needed: usize) -> GridDimensions {
        let needed = needed.max(1);
        let (w, h) = sanitize_viewport(viewport);
        let viewport_aspect = if w > 0.0 && h > 0.0 {
            w / h
        } else {
            self.params.target_aspect
        };
        let ideal = (needed as f64 * viewport_aspect / self.params.target_aspect)
            .sqrt()
            .ceil();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Clamped to 1..=needed immediately, so any truncation is harmless"
        )]
        let cols = (ideal as usize).clamp(1, needed);
        let rows = needed.div_ceil(cols);
        GridDimensions {
            cols,
            rows,
            cell: self.cell_size(viewport, cols, rows),
            score: f64::INFINITY,
            forced: true,
        }
    }

    /// Chooses dimensions and places every tile.
    #[must_use]
    pub fn layout(&self, viewport: Size, total_items: usize) -> GridPlacement {
        let dims = self.choose_dimensions(viewport, total_items);
        self.place(viewport, &dims, total_items)
    }
}

fn compare_candidates(a: &GridDimensions, b: &GridDimensions) -> core::cmp::Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.capacity().cmp(&b.capacity()))
        .then_with(|| a.rows.cmp(&b.rows))
}

pub(crate) fn sanitize_viewport(viewport: Size) -> (f64, f64) {
    (non_negative(viewport.width), non_negative(viewport.height))
}
