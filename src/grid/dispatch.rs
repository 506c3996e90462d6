//! Cell renderer dispatch
//!
//! Maps `(value, data type, style overrides)` to a display and
//! interaction strategy. Only free-text cells go through the edit path.

use crate::editable::{EditMode, EditableView};
use crate::formula::{display_formula, ArithmeticEvaluator, FormulaEvaluator};
use crate::model::style::resolve;
use crate::model::{CellKey, DataType, Row, SelectionSet, StyleMap};

use super::window::{VisibleCell, VisibleRow};

/// Display and interaction strategy of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// Checkbox bound to the selection-toggle callback
    RowSelect { checked: bool },
    /// Image reference; load failures are the host's concern
    Image { src: String },
    /// Raw stored representation, verbatim
    DateTime { raw: String },
    /// Computed value, or the evaluator's error text
    Formula { display: String, is_error: bool },
    /// Editable free text
    Text(EditableView),
}

impl CellContent {
    /// Text a plain renderer would show for this cell
    pub fn display_text(&self) -> &str {
        match self {
            CellContent::RowSelect { checked: true } => "[x]",
            CellContent::RowSelect { checked: false } => "[ ]",
            CellContent::Image { src } => src,
            CellContent::DateTime { raw } => raw,
            CellContent::Formula { display, .. } => display,
            CellContent::Text(view) => &view.text,
        }
    }

    pub fn is_editable(&self) -> bool {
        matches!(self, CellContent::Text(_))
    }
}

/// One rendered cell
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedCell {
    pub key: CellKey,
    /// Slot in keyboard traversal order
    pub tab_index: usize,
    /// Whether the cell takes keyboard focus at `tab_index`
    pub focusable: bool,
    pub style: StyleMap,
    pub content: CellContent,
}

impl RenderedCell {
    /// Tab index to put on the element, if it is focusable
    pub fn focus_index(&self) -> Option<usize> {
        self.focusable.then_some(self.tab_index)
    }
}

/// Pure mapping from visible cells to rendered cells
pub struct CellRenderer {
    evaluator: Box<dyn FormulaEvaluator>,
}

impl std::fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellRenderer").finish_non_exhaustive()
    }
}

impl Default for CellRenderer {
    fn default() -> Self {
        Self::new(ArithmeticEvaluator)
    }
}

impl CellRenderer {
    pub fn new(evaluator: impl FormulaEvaluator + 'static) -> Self {
        Self {
            evaluator: Box::new(evaluator),
        }
    }

    /// Render one cell; `mode` is only consulted for text cells
    pub fn render(
        &self,
        row: &VisibleRow<'_>,
        cell: &VisibleCell<'_>,
        selection: &SelectionSet,
        mode: EditMode,
    ) -> RenderedCell {
        let def = cell.column.def;
        let name = cell.column.name;
        let style = resolve(def.style.as_ref(), row.row.style.as_ref());
        let (content, focusable) = self.content(row.row, name, def.data_type, selection, mode);

        RenderedCell {
            key: row.cell_key(cell),
            tab_index: cell.tab_index,
            focusable,
            style,
            content,
        }
    }

    fn content(
        &self,
        row: &Row,
        column: &str,
        data_type: DataType,
        selection: &SelectionSet,
        mode: EditMode,
    ) -> (CellContent, bool) {
        match data_type {
            DataType::RowSelect => (
                CellContent::RowSelect {
                    checked: selection.contains(&row.id),
                },
                true,
            ),
            DataType::Image => (
                CellContent::Image {
                    src: row.display(column),
                },
                false,
            ),
            DataType::DateTime => (
                CellContent::DateTime {
                    raw: row.display(column),
                },
                false,
            ),
            DataType::Formula => {
                let shown = display_formula(self.evaluator.as_ref(), row, column);
                (
                    CellContent::Formula {
                        display: shown.text,
                        is_error: shown.is_error,
                    },
                    true,
                )
            }
            DataType::Text => (
                CellContent::Text(EditableView::new(mode, &row.display(column))),
                true,
            ),
        }
    }
}
