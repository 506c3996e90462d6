//! Configuration checks run when a grid is built
//!
//! An editable grid without a change handler is a configuration error.
//! Such grids still render, but input is dropped; these checks surface
//! the problem once instead of on every keystroke.

use std::fmt;

use crate::model::{ColumnSpec, DataType};

/// Which host callbacks are wired
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HandlerSet {
    pub selection_toggled: bool,
    pub cell_changed: bool,
    pub viewport_changed: bool,
    pub cell_leave: bool,
}

impl HandlerSet {
    pub fn all() -> Self {
        Self {
            selection_toggled: true,
            cell_changed: true,
            viewport_changed: true,
            cell_leave: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    /// Text columns are present but nothing receives their edits
    MissingChangeHandler { columns: Vec<String> },
    /// Row-select columns are present but nothing receives toggles
    MissingSelectHandler { columns: Vec<String> },
    /// Nothing to render
    EmptyColumnSpec,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::MissingChangeHandler { columns } => write!(
                f,
                "editable columns [{}] have no change handler; edits will be dropped",
                columns.join(", ")
            ),
            ConfigIssue::MissingSelectHandler { columns } => write!(
                f,
                "row-select columns [{}] have no selection handler; toggles will be dropped",
                columns.join(", ")
            ),
            ConfigIssue::EmptyColumnSpec => write!(f, "column spec is empty"),
        }
    }
}

impl std::error::Error for ConfigIssue {}

/// Check a column spec against the wired handlers
pub fn validate(columns: &ColumnSpec, handlers: &HandlerSet) -> Vec<ConfigIssue> {
    let mut issues = Vec::new();
    if columns.is_empty() {
        issues.push(ConfigIssue::EmptyColumnSpec);
    }

    let editable = owned(columns.names_of(DataType::Text));
    if !handlers.cell_changed && !editable.is_empty() {
        issues.push(ConfigIssue::MissingChangeHandler { columns: editable });
    }

    let selectable = owned(columns.names_of(DataType::RowSelect));
    if !handlers.selection_toggled && !selectable.is_empty() {
        issues.push(ConfigIssue::MissingSelectHandler {
            columns: selectable,
        });
    }

    for issue in &issues {
        tracing::warn!("Grid config: {}", issue);
    }
    issues
}

fn owned(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColumnDef;

    fn spec() -> ColumnSpec {
        ColumnSpec::new()
            .with("id", ColumnDef::new(DataType::RowSelect))
            .with("name", ColumnDef::text("Name"))
            .with("note", ColumnDef::text("Note"))
            .with("total", ColumnDef::new(DataType::Formula))
    }

    #[test]
    fn test_all_handlers_is_clean() {
        assert!(validate(&spec(), &HandlerSet::all()).is_empty());
    }

    #[test]
    fn test_missing_change_handler_lists_text_columns() {
        let handlers = HandlerSet {
            cell_changed: false,
            ..HandlerSet::all()
        };
        let issues = validate(&spec(), &handlers);
        assert_eq!(
            issues,
            vec![ConfigIssue::MissingChangeHandler {
                columns: vec!["name".into(), "note".into()]
            }]
        );
        assert!(issues[0].to_string().contains("name, note"));
    }

    #[test]
    fn test_read_only_grid_needs_no_handlers() {
        let columns = ColumnSpec::new().with("total", ColumnDef::new(DataType::Formula));
        assert!(validate(&columns, &HandlerSet::default()).is_empty());
    }

    #[test]
    fn test_empty_spec() {
        assert_eq!(
            validate(&ColumnSpec::new(), &HandlerSet::all()),
            vec![ConfigIssue::EmptyColumnSpec]
        );
    }
}
