//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. Caret commands are deferred by the runtime until the next
//! render has been committed, so they always run against the
//! post-update structure.

use crate::caret::CaretOffsetPair;
use crate::messages::GridEvent;
use crate::model::CellKey;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Hand an event to the host callbacks
    Emit(GridEvent),
    /// Reinstall a captured caret after the next render
    RestoreCaret { cell: CellKey, caret: CaretOffsetPair },
    /// Place the caret at end-of-content after the next render
    /// (first focus of an edit)
    FocusCaretAtEnd { cell: CellKey },
    /// Re-render without any other effect
    Render,
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    pub fn emit(event: GridEvent) -> Self {
        Cmd::Emit(event)
    }

    /// Check if this command requires a render pass
    pub fn needs_render(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Emit(GridEvent::CellLeft { .. }) => true,
            // The host re-renders after applying the event
            Cmd::Emit(_) => false,
            Cmd::RestoreCaret { .. } => true,
            Cmd::FocusCaretAtEnd { .. } => true,
            Cmd::Render => true,
            Cmd::Batch(cmds) => cmds.iter().any(Cmd::needs_render),
        }
    }

    /// Flatten nested batches into a list of leaf commands
    pub fn into_leaves(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::into_leaves).collect(),
            other => vec![other],
        }
    }
}
