//! slicegrid - render the visible window of a dataset
//!
//! Loads a dataset and column spec, renders one viewport through the
//! grid core and prints it as a table or JSON.

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use slicegrid::cli::{CliArgs, OutputFormat};
use slicegrid::config::GridConfig;
use slicegrid::loader::{load_columns, load_dataset};
use slicegrid::model::HostState;
use slicegrid::report::{format_table, to_json};
use slicegrid::runtime::{Callbacks, Grid, GridProps, MemorySurface};

fn main() -> Result<()> {
    slicegrid::tracing::init();

    let config = GridConfig::load();
    let startup = CliArgs::parse().into_config(&config).map_err(|e| anyhow!(e))?;

    let data = load_dataset(&startup.data)?;
    let columns = match &startup.columns {
        Some(path) => load_columns(path)?,
        None => data.infer_columns(),
    };
    tracing::info!(
        "Rendering {} rows x {} columns at {},{}",
        data.dataset.len(),
        columns.len(),
        startup.viewport.row_offset,
        startup.viewport.col_offset
    );

    let host = HostState::new(data.dataset, startup.viewport);
    let (callbacks, _events) = Callbacks::recording();
    let mut grid = Grid::new(&columns, callbacks, config);
    let mut surface = MemorySurface::new();
    let rendered = grid.render(GridProps::from_host(&host, &columns), &mut surface);

    match startup.format {
        OutputFormat::Table => print!("{}", format_table(rendered)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&to_json(rendered))
                .context("Failed to serialize output")?;
            println!("{}", json);
        }
    }
    Ok(())
}
