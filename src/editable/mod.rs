//! Editable text cells
//!
//! Free-text cells are edited in place. Each mounted cell gets an
//! [`EditableCell`] controller that owns its edit mode and pending
//! caret, brokers input into upstream change events, and listens for
//! pointer interactions outside the cell to end editing.
//!
//! # Architecture
//!
//! - [`EditableCell`]: per-cell state machine (`Viewing` / `Editing`)
//! - [`PointerHub`] / [`Subscription`]: process-wide pointer listener;
//!   one scoped subscription per mounted cell
//! - [`EditableView`]: what the host renders for the current mode

mod cell;
mod listener;
mod view;

pub use cell::{EditMode, EditState, EditableCell};
pub use listener::{ListenerId, PointerHub, PointerTarget, Subscription};
pub use view::{EditableView, Overflow, EMPTY_PLACEHOLDER};
