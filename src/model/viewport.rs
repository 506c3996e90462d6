//! Viewport state
//!
//! Tracks which portion of the grid is visible. Offsets are stored as
//! given; clipping against the dataset happens at render time.

use serde::{Deserialize, Serialize};

/// Viewport origin and size, in rows and columns
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    /// First visible row (0-indexed)
    pub row_offset: usize,
    /// First visible column (0-indexed)
    pub col_offset: usize,
    /// Number of rows rendered at most
    pub max_visible_rows: usize,
    /// Number of columns rendered at most
    pub max_visible_cols: usize,
}

impl ViewportState {
    /// Create a viewport at the origin with given dimensions
    pub fn new(max_visible_rows: usize, max_visible_cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            max_visible_rows,
            max_visible_cols,
        }
    }

    pub fn at(mut self, row_offset: usize, col_offset: usize) -> Self {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
        self
    }

    /// Visible row range clipped to `total_rows`
    pub fn row_range(&self, total_rows: usize) -> std::ops::Range<usize> {
        clip(self.row_offset, self.max_visible_rows, total_rows)
    }

    /// Visible column range clipped to `total_cols`
    pub fn col_range(&self, total_cols: usize) -> std::ops::Range<usize> {
        clip(self.col_offset, self.max_visible_cols, total_cols)
    }

    /// Check if a row is inside the window (ignoring dataset bounds)
    pub fn is_row_visible(&self, row: usize) -> bool {
        row >= self.row_offset && row < self.row_offset.saturating_add(self.max_visible_rows)
    }

    /// Check if a column is inside the window (ignoring column count)
    pub fn is_col_visible(&self, col: usize) -> bool {
        col >= self.col_offset && col < self.col_offset.saturating_add(self.max_visible_cols)
    }

    /// Largest row offset that still fills the window
    pub fn max_row_offset(&self, total_rows: usize) -> usize {
        total_rows.saturating_sub(self.max_visible_rows)
    }

    /// Largest column offset that still fills the window
    pub fn max_col_offset(&self, total_cols: usize) -> usize {
        total_cols.saturating_sub(self.max_visible_cols)
    }
}

fn clip(offset: usize, size: usize, total: usize) -> std::ops::Range<usize> {
    let start = offset.min(total);
    let end = offset.saturating_add(size).min(total);
    start..end
}
