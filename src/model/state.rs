//! Ephemeral state owned by the grid core
//!
//! The host owns rows, selection and viewport. The core only keeps what
//! a render cannot recompute: one controller per mounted text cell, the
//! pointer listener those controllers attach to, and a record of what
//! the last render showed.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use indexmap::IndexMap;

use crate::config::GridConfig;
use crate::editable::{EditMode, EditableCell, PointerHub};
use crate::grid::HandlerSet;

use super::{CellKey, RowId, ViewportState};

/// What the last committed render showed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub viewport: ViewportState,
    pub total_rows: usize,
    pub total_cols: usize,
    /// Row identity per visible true row index
    pub row_ids: BTreeMap<usize, RowId>,
    /// Visible row-select columns
    pub select_columns: BTreeSet<String>,
}

impl Frame {
    pub fn row_id(&self, row: usize) -> Option<&RowId> {
        self.row_ids.get(&row)
    }

    /// Whether `column` was rendered as a row-select checkbox
    pub fn is_row_select(&self, column: &str) -> bool {
        self.select_columns.contains(column)
    }
}

#[derive(Debug, Default)]
pub struct GridModel {
    /// Controllers of mounted text cells
    pub cells: HashMap<CellKey, EditableCell>,
    pub pointer: PointerHub,
    pub frame: Frame,
    pub handlers: HandlerSet,
    pub config: GridConfig,
}

impl GridModel {
    pub fn new(config: GridConfig, handlers: HandlerSet) -> Self {
        Self {
            config,
            handlers,
            ..Self::default()
        }
    }

    pub fn cell(&self, key: &CellKey) -> Option<&EditableCell> {
        self.cells.get(key)
    }

    pub fn cell_mut(&mut self, key: &CellKey) -> Option<&mut EditableCell> {
        self.cells.get_mut(key)
    }

    /// Edit mode of a cell; unmounted cells are viewing
    pub fn mode_of(&self, key: &CellKey) -> EditMode {
        self.cells
            .get(key)
            .map(EditableCell::mode)
            .unwrap_or_default()
    }

    /// Cells currently in editing mode, sorted
    pub fn editing_cells(&self) -> Vec<&CellKey> {
        let mut keys: Vec<&CellKey> = self
            .cells
            .values()
            .filter(|cell| cell.is_editing())
            .map(EditableCell::key)
            .collect();
        keys.sort();
        keys
    }

    /// Mount controllers for `visible` text cells and drop the rest
    ///
    /// New controllers attach in the order of `visible` (row-major), so
    /// pointer dispatch follows render order. Surviving controllers keep
    /// their edit state; their row identity is refreshed in case the
    /// host reordered rows.
    pub fn reconcile(&mut self, visible: Vec<(CellKey, RowId)>) {
        let wanted: IndexMap<CellKey, RowId> = visible.into_iter().collect();
        let before = self.cells.len();
        self.cells.retain(|key, _| wanted.contains_key(key));
        let unmounted = before - self.cells.len();

        let mut mounted = 0;
        for (key, row_id) in wanted {
            match self.cells.get_mut(&key) {
                Some(cell) => {
                    if cell.row_id() != &row_id {
                        cell.set_row_id(row_id);
                    }
                }
                None => {
                    let cell = EditableCell::mount(key.clone(), row_id, &self.pointer);
                    self.cells.insert(key, cell);
                    mounted += 1;
                }
            }
        }
        if mounted > 0 || unmounted > 0 {
            tracing::debug!(
                "Reconciled cells: {} mounted, {} unmounted, {} live",
                mounted,
                unmounted,
                self.cells.len()
            );
        }
    }
}
