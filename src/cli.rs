//! Command-line argument parsing for the slice viewer
//!
//! Supports:
//! - Delimited or JSON datasets, with an optional column spec file
//! - Placing the window by row/column offset
//! - Overriding the configured window size
//! - Table or JSON output

use clap::Parser;
use std::path::PathBuf;

use crate::config::GridConfig;
use crate::model::ViewportState;

/// Render the visible window of a dataset
#[derive(Parser, Debug)]
#[command(name = "slicegrid", version, about = "Render the visible window of a dataset")]
pub struct CliArgs {
    /// Dataset file (.csv, .tsv, .psv or .json)
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Column spec file (.yaml or .json); columns are inferred if absent
    #[arg(long, value_name = "FILE")]
    pub columns: Option<PathBuf>,

    /// First visible row (0-indexed)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub row_offset: usize,

    /// First visible column (0-indexed)
    #[arg(long, value_name = "N", default_value_t = 0)]
    pub col_offset: usize,

    /// Rows to render (defaults to the configured window)
    #[arg(long, value_name = "N")]
    pub rows: Option<usize>,

    /// Columns to render (defaults to the configured window)
    #[arg(long, value_name = "N")]
    pub cols: Option<usize>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub data: PathBuf,
    pub columns: Option<PathBuf>,
    pub viewport: ViewportState,
    pub format: OutputFormat,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration, filling the
    /// window size from `config` where not given
    pub fn into_config(self, config: &GridConfig) -> Result<StartupConfig, String> {
        let rows = self.rows.unwrap_or(config.max_visible_rows);
        let cols = self.cols.unwrap_or(config.max_visible_cols);
        if rows == 0 || cols == 0 {
            return Err("Window size must be at least 1x1".to_string());
        }

        Ok(StartupConfig {
            data: self.data,
            columns: self.columns,
            viewport: ViewportState::new(rows, cols).at(self.row_offset, self.col_offset),
            format: if self.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> CliArgs {
        CliArgs {
            data: PathBuf::from("people.csv"),
            columns: None,
            row_offset: 0,
            col_offset: 0,
            rows: None,
            cols: None,
            json: false,
        }
    }

    #[test]
    fn test_window_defaults_from_config() {
        let config = GridConfig {
            max_visible_rows: 7,
            max_visible_cols: 4,
            ..GridConfig::default()
        };
        let startup = args().into_config(&config).unwrap();
        assert_eq!(startup.viewport, ViewportState::new(7, 4));
        assert_eq!(startup.format, OutputFormat::Table);
    }

    #[test]
    fn test_offsets_and_overrides() {
        let startup = CliArgs {
            row_offset: 40,
            col_offset: 2,
            rows: Some(5),
            json: true,
            ..args()
        }
        .into_config(&GridConfig::default())
        .unwrap();
        assert_eq!(startup.viewport, ViewportState::new(5, 10).at(40, 2));
        assert_eq!(startup.format, OutputFormat::Json);
    }

    #[test]
    fn test_zero_window_rejected() {
        let result = CliArgs {
            cols: Some(0),
            ..args()
        }
        .into_config(&GridConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_flags() {
        let parsed = CliArgs::try_parse_from([
            "slicegrid",
            "data.json",
            "--columns",
            "cols.yaml",
            "--row-offset",
            "3",
            "--json",
        ])
        .unwrap();
        assert_eq!(parsed.row_offset, 3);
        assert_eq!(parsed.columns, Some(PathBuf::from("cols.yaml")));
        assert!(parsed.json);
    }
}
