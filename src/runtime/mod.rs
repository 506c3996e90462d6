//! Runtime module - drives the message loop against a host
//!
//! - `callbacks` - upstream handlers the host wires in
//! - `surface` - the host's rendered text and live selection
//! - `grid` - render / dispatch loop with deferred caret tasks

pub mod callbacks;
pub mod grid;
pub mod surface;

pub use callbacks::{Callbacks, EventLog};
pub use grid::{Grid, GridProps};
pub use surface::{MemorySurface, TextSurface};
