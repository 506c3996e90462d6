//! Assembled render tree: column headers, row headers and cells

use crate::editable::EditMode;
use crate::model::{CellKey, ColumnSpec, RowId, SelectionSet, StyleMap};

use super::dispatch::{CellRenderer, RenderedCell};
use super::window::VisibleSlice;

/// Column header above the visible columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    pub column: String,
    /// Column title, or the column name when untitled
    pub title: String,
    /// Position in the full column sequence
    pub index: usize,
}

/// One rendered row
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// True row index
    pub key: usize,
    /// 1-based row header label
    pub number: usize,
    pub id: RowId,
    pub cells: Vec<RenderedCell>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedGrid {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<RenderedRow>,
    pub total_rows: usize,
    pub total_cols: usize,
}

impl RenderedGrid {
    /// Render every visible cell; `mode_of` reports the edit mode of
    /// mounted text cells
    pub fn build(
        slice: &VisibleSlice<'_>,
        columns: &ColumnSpec,
        renderer: &CellRenderer,
        selection: &SelectionSet,
        mode_of: impl Fn(&CellKey) -> EditMode,
    ) -> Self {
        let headers = slice
            .columns
            .iter()
            .map(|column| HeaderCell {
                column: column.name.to_string(),
                title: columns.title(column.name),
                index: column.index,
            })
            .collect();

        let rows = slice
            .rows
            .iter()
            .map(|row| RenderedRow {
                key: row.key,
                number: row.number(),
                id: row.row.id.clone(),
                cells: row
                    .cells
                    .iter()
                    .map(|cell| {
                        let mode = mode_of(&row.cell_key(cell));
                        renderer.render(row, cell, selection, mode)
                    })
                    .collect(),
            })
            .collect();

        Self {
            headers,
            rows,
            total_rows: slice.total_rows,
            total_cols: slice.total_cols,
        }
    }

    pub fn cell(&self, key: &CellKey) -> Option<&RenderedCell> {
        self.rows
            .iter()
            .find(|row| row.key == key.row)
            .and_then(|row| row.cells.iter().find(|cell| cell.key == *key))
    }

    pub fn cells(&self) -> impl Iterator<Item = &RenderedCell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    /// Style of a cell, empty if it is not rendered
    pub fn style_of(&self, key: &CellKey) -> StyleMap {
        self.cell(key).map(|cell| cell.style.clone()).unwrap_or_default()
    }
}
