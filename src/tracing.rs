//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging edit
//! mode transitions, caret capture and windowing.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=edit=debug,message=debug` - scoped filtering
//! - `RUST_LOG=slicegrid::grid=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/slicegrid/logs/slicegrid.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::caret::CaretOffsetPair;
use crate::model::{CellKey, GridModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). The file layer
/// always logs at debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "slicegrid.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of edit state for diffing across an update
#[derive(Debug, Clone, PartialEq)]
pub struct EditSnapshot {
    pub mounted: usize,
    pub listeners: usize,
    /// Editing cells with their pending caret, sorted by key
    pub editing: Vec<(CellKey, CaretOffsetPair)>,
}

impl EditSnapshot {
    pub fn from_model(model: &GridModel) -> Self {
        let editing = model
            .editing_cells()
            .into_iter()
            .filter_map(|key| model.cell(key).map(|cell| (key.clone(), cell.pending_caret())))
            .collect();
        Self {
            mounted: model.cells.len(),
            listeners: model.pointer.listener_count(),
            editing,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.mounted != other.mounted {
            changes.push(format!("mounted: {} → {}", self.mounted, other.mounted));
        }
        if self.listeners != other.listeners {
            changes.push(format!(
                "listeners: {} → {}",
                self.listeners, other.listeners
            ));
        }

        for (key, caret) in &other.editing {
            match self.editing.iter().find(|(k, _)| k == key) {
                None => changes.push(format!("{}: editing", key)),
                Some((_, before)) if before != caret => changes.push(format!(
                    "{}: caret {}..{} → {}..{}",
                    key, before.start, before.end, caret.start, caret.end
                )),
                Some(_) => {}
            }
        }
        for (key, _) in &self.editing {
            if !other.editing.iter().any(|(k, _)| k == key) {
                changes.push(format!("{}: viewing", key));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_reports_mode_and_caret() {
        let key = CellKey::new(0, "a");
        let before = EditSnapshot {
            mounted: 1,
            listeners: 1,
            editing: vec![],
        };
        let editing = EditSnapshot {
            editing: vec![(key.clone(), CaretOffsetPair::collapsed(3))],
            ..before.clone()
        };
        assert_eq!(before.diff(&before), None);
        assert_eq!(before.diff(&editing).as_deref(), Some("0:a: editing"));

        let moved = EditSnapshot {
            editing: vec![(key, CaretOffsetPair::collapsed(4))],
            ..before.clone()
        };
        assert_eq!(editing.diff(&moved).as_deref(), Some("0:a: caret 3..3 → 4..4"));
        assert_eq!(moved.diff(&before).as_deref(), Some("0:a: viewing"));
    }
}
