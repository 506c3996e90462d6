//! Grid data model
//!
//! Host-owned inputs to a render cycle: rows, column specs, viewport and
//! row selection. All of them are passed to the grid as an immutable
//! snapshot per render.

pub mod column;
pub mod dataset;
pub mod row;
pub mod selection;
pub mod state;
pub mod style;
pub mod viewport;

pub use column::{ColumnDef, ColumnSpec, DataType};
pub use dataset::{Dataset, HostState};
pub use row::{format_number, CellValue, Row, RowId};
pub use selection::SelectionSet;
pub use state::{Frame, GridModel};
pub use style::{deep_merge, StyleMap};
pub use viewport::ViewportState;

/// Identity of a rendered cell: true (unsliced) row index plus column name
///
/// Stays the same as the window moves, so edit and caret state attached
/// to a cell survive scrolling as long as the cell stays mounted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    pub row: usize,
    pub column: String,
}

impl CellKey {
    pub fn new(row: usize, column: &str) -> Self {
        Self {
            row,
            column: column.to_string(),
        }
    }
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}
