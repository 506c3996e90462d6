//! Message types for the Elm-style architecture
//!
//! Input flows into the grid as [`Msg`]s. Proposed state changes flow
//! out to the host as [`GridEvent`]s.

use crate::caret::{LiveSelection, TextNode};
use crate::editable::PointerTarget;
use crate::model::{CellKey, RowId, ViewportState};
use crate::scroll::{Orientation, ScrollInput};

/// Messages addressed to one rendered cell
#[derive(Debug, Clone)]
pub enum CellMsg {
    /// Primary click on the cell
    PrimaryInteraction,
    /// The cell's content was edited; carries the content tree and live
    /// selection as they are right after the edit
    TextChanged {
        content: TextNode,
        selection: Option<LiveSelection>,
    },
    /// A pointer interaction landed outside the cell's subtree
    FocusLossOutside,
    /// Row-select checkbox changed
    ToggleSelect,
}

/// Scroll input from the range controls or the pointer wheel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollMsg {
    /// Drag or step on a scrollbar
    Bar {
        orientation: Orientation,
        input: ScrollInput,
    },
    /// Wheel notches per axis (positive = down/right); each notch moves
    /// by the configured wheel step
    Wheel { rows: i64, cols: i64 },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Cell(CellKey, CellMsg),
    /// Process-wide pointer down, routed to every attached listener
    Pointer(PointerTarget),
    Scroll(ScrollMsg),
}

impl Msg {
    pub fn click(cell: CellKey) -> Self {
        Msg::Pointer(PointerTarget::Cell(cell))
    }

    pub fn text_changed(
        cell: CellKey,
        content: TextNode,
        selection: Option<LiveSelection>,
    ) -> Self {
        Msg::Cell(cell, CellMsg::TextChanged { content, selection })
    }

    pub fn toggle_select(cell: CellKey) -> Self {
        Msg::Cell(cell, CellMsg::ToggleSelect)
    }

    pub fn scroll(orientation: Orientation, input: ScrollInput) -> Self {
        Msg::Scroll(ScrollMsg::Bar { orientation, input })
    }
}

/// Upstream events; the host applies them to its own state
#[derive(Debug, Clone, PartialEq)]
pub enum GridEvent {
    SelectionToggled(RowId),
    CellChanged {
        row_id: RowId,
        column: String,
        value: String,
    },
    ViewportChanged(ViewportState),
    /// An editing cell lost focus (leave callback)
    CellLeft { cell: CellKey },
}
