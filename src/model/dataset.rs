//! Host-side dataset and reducer
//!
//! The grid never mutates rows. Hosts feed every [`GridEvent`] into
//! [`HostState::reduce`] (or their own equivalent) and re-render with
//! the updated snapshot. Updates address rows by [`RowId`], never by
//! their position in the visible slice.

use serde::{Deserialize, Serialize};

use crate::messages::GridEvent;

use super::row::{CellValue, Row, RowId};
use super::selection::SelectionSet;
use super::viewport::ViewportState;

/// Ordered sequence of rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn position(&self, id: &RowId) -> Option<usize> {
        self.rows.iter().position(|row| &row.id == id)
    }

    pub fn row_by_id(&self, id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|row| &row.id == id)
    }

    /// Replace one cell of the row with `id`; returns false if no such row
    pub fn set_cell(&mut self, id: &RowId, column: &str, value: CellValue) -> bool {
        match self.rows.iter_mut().find(|row| &row.id == id) {
            Some(row) => {
                row.cells.insert(column.to_string(), value);
                true
            }
            None => false,
        }
    }

    /// Drop every row whose id is in `selection`; returns how many went
    pub fn remove_rows(&mut self, selection: &SelectionSet) -> usize {
        let before = self.rows.len();
        self.rows.retain(|row| !selection.contains(&row.id));
        before - self.rows.len()
    }

    /// Apply a cell change by row identity; other events leave the
    /// rows untouched. Returns whether a row changed.
    pub fn apply(&mut self, event: &GridEvent) -> bool {
        match event {
            GridEvent::CellChanged {
                row_id,
                column,
                value,
            } => {
                let applied = self.set_cell(row_id, column, CellValue::Text(value.clone()));
                if !applied {
                    tracing::warn!("Cell change for unknown row {}", row_id);
                }
                applied
            }
            _ => false,
        }
    }

    pub fn push(&mut self, row: Row) {
        self.rows.push(row);
    }
}

impl From<Vec<Row>> for Dataset {
    fn from(rows: Vec<Row>) -> Self {
        Self::new(rows)
    }
}

/// Everything a host owns for one grid: rows, checked rows, viewport
#[derive(Debug, Clone, Default)]
pub struct HostState {
    pub dataset: Dataset,
    pub selection: SelectionSet,
    pub viewport: ViewportState,
}

impl HostState {
    pub fn new(dataset: Dataset, viewport: ViewportState) -> Self {
        Self {
            dataset,
            selection: SelectionSet::new(),
            viewport,
        }
    }

    /// Apply one upstream event; returns true if a re-render is needed
    pub fn reduce(&mut self, event: &GridEvent) -> bool {
        match event {
            GridEvent::SelectionToggled(id) => {
                self.selection.toggle(id);
                true
            }
            GridEvent::CellChanged { .. } => self.dataset.apply(event),
            GridEvent::ViewportChanged(viewport) => {
                let changed = self.viewport != *viewport;
                self.viewport = *viewport;
                changed
            }
            GridEvent::CellLeft { .. } => false,
        }
    }

    /// Delete all checked rows and clear the selection
    pub fn delete_selected(&mut self) -> usize {
        let removed = self.dataset.remove_rows(&self.selection);
        self.selection.clear();
        removed
    }
}
