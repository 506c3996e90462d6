//! Update functions for the Elm-style architecture
//!
//! All changes to the core's own state flow through these functions.
//! Changes to host state leave as [`GridEvent`](crate::messages::GridEvent)s
//! inside the returned command.

mod cell;
mod scroll;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::GridModel;

#[cfg(any(debug_assertions, feature = "trace-updates"))]
use crate::tracing::EditSnapshot;
#[cfg(any(debug_assertions, feature = "trace-updates"))]
use tracing::{debug, span, Level};

pub use cell::{update_cell, update_pointer};
pub use scroll::{next_viewport, update_scroll};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds (or with `trace-updates`), this wraps with tracing
/// instrumentation. Otherwise it's a direct dispatch.
#[inline]
pub fn update(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    #[cfg(any(debug_assertions, feature = "trace-updates"))]
    {
        update_traced(model, msg)
    }
    #[cfg(not(any(debug_assertions, feature = "trace-updates")))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Pointer(target) => cell::update_pointer(model, &target),
        Msg::Cell(key, m) => cell::update_cell(model, &key, m),
        Msg::Scroll(m) => scroll::update_scroll(model, m),
    }
}

/// Traced update wrapper
///
/// Captures before/after edit state and logs the diff.
#[cfg(any(debug_assertions, feature = "trace-updates"))]
fn update_traced(model: &mut GridModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();
    debug!(target: "message", msg = %msg_name, "processing");

    let before = EditSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = EditSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        debug!(target: "edit", %diff, "state changed");
    }

    result
}

/// Display name for a message, without its payload
#[cfg(any(debug_assertions, feature = "trace-updates"))]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::CellMsg;

    match msg {
        Msg::Pointer(target) => format!("Pointer({:?})", target),
        Msg::Cell(key, CellMsg::TextChanged { .. }) => format!("Cell({})::TextChanged", key),
        Msg::Cell(key, m) => format!("Cell({})::{:?}", key, m),
        Msg::Scroll(m) => format!("Scroll::{:?}", m),
    }
}
