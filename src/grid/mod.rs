//! Grid rendering core
//!
//! Rendering is split into three pure steps:
//!
//! 1. [`compute_slice`] picks the visible rows and columns and assigns
//!    tab indices
//! 2. [`CellRenderer`] maps each visible cell to a display strategy by
//!    its column's data type
//! 3. [`RenderedGrid`] assembles headers, row numbers and cells into
//!    the tree the host draws
//!
//! [`validate`] checks the column spec against the wired handlers.

mod dispatch;
mod layout;
mod validate;
mod window;

pub use dispatch::{CellContent, CellRenderer, RenderedCell};
pub use layout::{HeaderCell, RenderedGrid, RenderedRow};
pub use validate::{validate, ConfigIssue, HandlerSet};
pub use window::{
    compute_slice, first_tab_index, VisibleCell, VisibleColumn, VisibleRow, VisibleSlice,
};
