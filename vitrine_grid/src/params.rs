// Copyright 2026 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How an incomplete final row is positioned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LastRowAlign {
    /// Leave the final row flush with the leading edge.
    #[default]
    Start,
    /// Center the tiles of the final row horizontally.
    Center,
}

/// Relative weights of the terms in a candidate's score.
///
/// Scores are penalties: lower is better. Setting a weight to zero removes
/// that term from consideration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreWeights {
    /// Weight of `|ln(tile_aspect / target_aspect)|`.
    pub aspect: f64,
    /// Weight of `|ln(tile_width / preferred_cell_width)|`.
    pub cell_size: f64,
    /// Weight of `|rows - preferred_rows|`.
    pub rows: f64,
    /// Weight of the fraction of cells left empty.
    pub empty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            aspect: 3.0,
            cell_size: 1.0,
            rows: 0.5,
            empty: 2.0,
        }
    }
}

/// Parameters for [`crate::GridLayout`].
///
/// Lengths are in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridParams {
    /// Space between adjacent tiles.
    pub gap: f64,
    /// Space between the viewport edge and the outermost tiles.
    pub padding: f64,
    /// Desired tile `width / height`.
    pub target_aspect: f64,
    /// Smallest acceptable tile width before the search gives up on a candidate.
    pub min_cell_width: f64,
    /// Smallest acceptable tile height before the search gives up on a candidate.
    pub min_cell_height: f64,
    /// Tile width the size term pulls towards.
    pub preferred_cell_width: f64,
    /// Row count the row term pulls towards.
    pub preferred_rows: usize,
    /// Upper bound of the column search.
    pub max_cols: usize,
    /// Upper bound of the row search.
    pub max_rows: usize,
    /// Score term weights.
    pub weights: ScoreWeights,
    /// Final-row alignment used by placement.
    pub last_row_align: LastRowAlign,
}

/// Largest column or row bound the search accepts; larger bounds are clamped.
pub const MAX_SEARCH_BOUND: usize = 64;

impl Default for GridParams {
    fn default() -> Self {
        Self {
            gap: 12.0,
            padding: 24.0,
            target_aspect: 1.5,
            min_cell_width: 160.0,
            min_cell_height: 110.0,
            preferred_cell_width: 360.0,
            preferred_rows: 3,
            max_cols: 8,
            max_rows: 6,
            weights: ScoreWeights::default(),
            last_row_align: LastRowAlign::Start,
        }
    }
}

impl GridParams {
    /// Returns a copy with non-finite or negative lengths replaced by zero and
    /// search bounds clamped to `1..=MAX_SEARCH_BOUND`.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.gap = non_negative(self.gap);
        self.padding = non_negative(self.padding);
        self.min_cell_width = non_negative(self.min_cell_width);
        self.min_cell_height = non_negative(self.min_cell_height);
        if !(self.target_aspect.is_finite() && self.target_aspect > 0.0) {
            self.target_aspect = Self::default().target_aspect;
        }
        if !(self.preferred_cell_width.is_finite() && self.preferred_cell_width > 0.0) {
            self.preferred_cell_width = Self::default().preferred_cell_width;
        }
        self.max_cols = self.max_cols.clamp(1, MAX_SEARCH_BOUND);
        self.max_rows = self.max_rows.clamp(1, MAX_SEARCH_BOUND);
        self
    }
}

pub(crate) fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitized_repairs_bad_values() {
        let params = GridParams {
            gap: -4.0,
            padding: f64::NAN,
            target_aspect: 0.0,
            preferred_cell_width: f64::INFINITY,
            max_cols: 0,
            max_rows: 0,
            ..GridParams::default()
        }
        .sanitized();
        assert_eq!(params.gap, 0.0);
        assert_eq!(params.padding, 0.0);
        assert_eq!(params.target_aspect, 1.5);
        assert_eq!(params.preferred_cell_width, 360.0);
        assert_eq!(params.max_cols, 1);
        assert_eq!(params.max_rows, 1);
    }

    #[test]
    fn sanitized_caps_search_bounds() {
        let params = GridParams {
            max_cols: usize::MAX,
            max_rows: 1_000_000,
            ..GridParams::default()
        }
        .sanitized();
        assert_eq!(params.max_cols, MAX_SEARCH_BOUND);
        assert_eq!(params.max_rows, MAX_SEARCH_BOUND);
        assert_eq!(GridParams::default().sanitized().max_cols, 8);
    }
}
