//! Windowing: mapping the full dataset onto the visible viewport
//!
//! The slice is a pure function of `(rows, columns, viewport)` and is
//! recomputed on every render. Its cost is O(visible cells) regardless
//! of dataset size.

use crate::model::{CellKey, ColumnDef, ColumnSpec, Row, ViewportState};

/// A column inside the window
#[derive(Debug, Clone, Copy)]
pub struct VisibleColumn<'a> {
    /// Position in the full column sequence
    pub index: usize,
    pub name: &'a str,
    pub def: &'a ColumnDef,
}

/// A cell inside the window
#[derive(Debug, Clone, Copy)]
pub struct VisibleCell<'a> {
    pub column: VisibleColumn<'a>,
    /// Keyboard traversal order; see [`first_tab_index`]
    pub tab_index: usize,
}

/// A row inside the window
#[derive(Debug, Clone)]
pub struct VisibleRow<'a> {
    /// True (unsliced) row index; stable as the window moves
    pub key: usize,
    pub row: &'a Row,
    pub cells: Vec<VisibleCell<'a>>,
}

impl VisibleRow<'_> {
    /// 1-based label shown in the row header
    pub fn number(&self) -> usize {
        self.key + 1
    }

    pub fn cell_key(&self, cell: &VisibleCell<'_>) -> CellKey {
        CellKey::new(self.key, cell.column.name)
    }
}

/// The rows and columns currently rendered
#[derive(Debug, Clone)]
pub struct VisibleSlice<'a> {
    pub columns: Vec<VisibleColumn<'a>>,
    pub rows: Vec<VisibleRow<'a>>,
    pub total_rows: usize,
    pub total_cols: usize,
}

impl VisibleSlice<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty() || self.columns.is_empty()
    }

    /// Number of rendered cells
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.columns.len()
    }

    /// Tab indices in row-major render order
    pub fn tab_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.rows
            .iter()
            .flat_map(|row| row.cells.iter().map(|cell| cell.tab_index))
    }
}

/// Tab index of the first rendered cell: the position it would have in
/// the unsliced grid, row-major
pub fn first_tab_index(first_row: usize, first_col: usize, total_cols: usize) -> usize {
    first_row * total_cols + first_col
}

/// Compute the visible slice for a viewport
///
/// Out-of-range offsets are not an error: they yield a partial or empty
/// slice.
pub fn compute_slice<'a>(
    rows: &'a [Row],
    columns: &'a ColumnSpec,
    viewport: &ViewportState,
) -> VisibleSlice<'a> {
    let total_rows = rows.len();
    let total_cols = columns.len();
    let row_range = viewport.row_range(total_rows);
    let col_range = viewport.col_range(total_cols);

    let visible_columns: Vec<VisibleColumn<'a>> = col_range
        .clone()
        .filter_map(|index| {
            columns
                .get_index(index)
                .map(|(name, def)| VisibleColumn { index, name, def })
        })
        .collect();

    let mut tab_index = first_tab_index(row_range.start, col_range.start, total_cols);
    let visible_rows: Vec<VisibleRow<'a>> = rows
        .get(row_range.clone())
        .unwrap_or_default()
        .iter()
        .zip(row_range.clone())
        .map(|(row, key)| {
            let cells = visible_columns
                .iter()
                .map(|column| {
                    let cell = VisibleCell {
                        column: *column,
                        tab_index,
                    };
                    tab_index += 1;
                    cell
                })
                .collect();
            VisibleRow { key, row, cells }
        })
        .collect();

    tracing::trace!(
        "Slice rows {:?} cols {:?} of {}x{}",
        row_range,
        col_range,
        total_rows,
        total_cols
    );

    VisibleSlice {
        columns: visible_columns,
        rows: visible_rows,
        total_rows,
        total_cols,
    }
}
