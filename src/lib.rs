//! slicegrid - windowed, editable data grid core
//!
//! This crate provides the headless core of a data grid implementing the
//! Elm Architecture pattern: a viewport slices a large dataset, cells
//! render by column type, free-text cells edit in place with their caret
//! preserved across re-renders, and every state change is proposed to
//! the host through callbacks.

pub mod caret;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod formula;
pub mod grid;
pub mod loader;
pub mod messages;
pub mod model;
pub mod report;
pub mod runtime;
pub mod scroll;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::{GridEvent, Msg};
pub use model::{CellKey, ColumnSpec, Dataset, GridModel, HostState, ViewportState};
pub use runtime::{Callbacks, Grid, GridProps, MemorySurface, TextSurface};
