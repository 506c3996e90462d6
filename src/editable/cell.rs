//! Edit-mode state machine for one text cell
//!
//! ```text
//!            primary click             focus lost outside
//! Viewing ──────────────────► Editing ───────────────────► Viewing
//!                              │   ▲
//!                              └───┘ text input
//! ```

use crate::caret::{capture, CaretOffsetPair, LiveSelection, TextNode};
use crate::commands::Cmd;
use crate::messages::GridEvent;
use crate::model::{CellKey, RowId};

use super::listener::{PointerHub, Subscription};
use super::view::EditableView;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    #[default]
    Viewing,
    Editing,
}

/// Ephemeral per-cell state; dropped when the cell unmounts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditState {
    pub mode: EditMode,
    /// Caret captured on the last input, reinstalled after re-render
    pub pending_caret: CaretOffsetPair,
}

/// Controller for a mounted free-text cell
#[derive(Debug)]
pub struct EditableCell {
    key: CellKey,
    row_id: RowId,
    state: EditState,
    _subscription: Subscription,
}

impl EditableCell {
    /// Mount a controller; attaches its pointer listener
    pub fn mount(key: CellKey, row_id: RowId, hub: &PointerHub) -> Self {
        let subscription = hub.attach(key.clone());
        Self {
            key,
            row_id,
            state: EditState::default(),
            _subscription: subscription,
        }
    }

    pub fn key(&self) -> &CellKey {
        &self.key
    }

    pub fn row_id(&self) -> &RowId {
        &self.row_id
    }

    /// Rows can move under a fixed index when the host edits the dataset
    pub fn set_row_id(&mut self, row_id: RowId) {
        self.row_id = row_id;
    }

    pub fn state(&self) -> EditState {
        self.state
    }

    pub fn mode(&self) -> EditMode {
        self.state.mode
    }

    pub fn is_editing(&self) -> bool {
        self.state.mode == EditMode::Editing
    }

    pub fn pending_caret(&self) -> CaretOffsetPair {
        self.state.pending_caret
    }

    pub fn set_pending_caret(&mut self, caret: CaretOffsetPair) {
        self.state.pending_caret = caret;
    }

    /// Viewing -> Editing; the caret goes to end-of-content once the
    /// editable content has rendered
    pub fn on_primary_interaction(&mut self) -> Option<Cmd> {
        if self.is_editing() {
            return None;
        }
        tracing::debug!("Cell {} enters editing", self.key);
        self.state.mode = EditMode::Editing;
        Some(Cmd::FocusCaretAtEnd {
            cell: self.key.clone(),
        })
    }

    /// Capture the caret, propose the new value, schedule the restore
    pub fn on_text_changed(
        &mut self,
        raw: &str,
        content: &TextNode,
        live: Option<&LiveSelection>,
    ) -> Option<Cmd> {
        if !self.is_editing() {
            tracing::debug!("Ignoring input on non-editing cell {}", self.key);
            return None;
        }
        let caret = capture(content, live);
        self.state.pending_caret = caret;
        tracing::debug!(
            "Cell {} changed, caret {}..{}",
            self.key,
            caret.start,
            caret.end
        );
        Some(Cmd::batch(vec![
            Cmd::emit(GridEvent::CellChanged {
                row_id: self.row_id.clone(),
                column: self.key.column.clone(),
                value: raw.to_string(),
            }),
            Cmd::RestoreCaret {
                cell: self.key.clone(),
                caret,
            },
        ]))
    }

    /// Editing -> Viewing when a pointer interaction lands outside this
    /// cell; the last value already pushed upstream stands
    pub fn on_focus_loss_outside(&mut self) -> Option<Cmd> {
        if !self.is_editing() {
            return None;
        }
        tracing::debug!("Cell {} leaves editing", self.key);
        self.state.mode = EditMode::Viewing;
        Some(Cmd::emit(GridEvent::CellLeft {
            cell: self.key.clone(),
        }))
    }

    pub fn view(&self, value: &str) -> EditableView {
        EditableView::new(self.state.mode, value)
    }
}
