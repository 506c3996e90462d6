//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use serde_json::json;
use slicegrid::config::GridConfig;
use slicegrid::messages::GridEvent;
use slicegrid::model::{
    CellKey, ColumnDef, ColumnSpec, DataType, Dataset, HostState, Row, StyleMap, ViewportState,
};
use slicegrid::runtime::{Callbacks, EventLog, Grid, GridProps, MemorySurface};

/// Rows `0..n` with ids `100 + i`, a name and a price/qty pair
pub fn people(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| {
            Row::new(100 + i as i64)
                .with("name", format!("person {}", i))
                .with("price", (i + 1) as f64)
                .with("qty", 2.0)
                .with("total", "price*qty")
                .with("seen", "2024-01-01")
        })
        .collect()
}

/// select, name, price, qty, total, seen
pub fn people_columns() -> ColumnSpec {
    ColumnSpec::new()
        .with("select", ColumnDef::new(DataType::RowSelect))
        .with("name", ColumnDef::text("Name"))
        .with("price", ColumnDef::text("Price"))
        .with("qty", ColumnDef::text("Qty"))
        .with("total", ColumnDef::new(DataType::Formula).titled("Total"))
        .with("seen", ColumnDef::new(DataType::DateTime).titled("Seen"))
}

pub fn style(value: serde_json::Value) -> StyleMap {
    value.as_object().cloned().unwrap_or_default()
}

pub fn red() -> StyleMap {
    style(json!({"color": "red"}))
}

/// A host, its grid and a surface, wired together the way an
/// application would wire them
pub struct Harness {
    pub host: HostState,
    pub columns: ColumnSpec,
    pub grid: Grid,
    pub surface: MemorySurface,
    pub log: EventLog,
}

impl Harness {
    pub fn new(rows: Vec<Row>, columns: ColumnSpec, viewport: ViewportState) -> Self {
        let (callbacks, log) = Callbacks::recording();
        let grid = Grid::new(&columns, callbacks, GridConfig::default());
        let mut harness = Self {
            host: HostState::new(Dataset::new(rows), viewport),
            columns,
            grid,
            surface: MemorySurface::new(),
            log,
        };
        harness.render();
        harness
    }

    pub fn render(&mut self) {
        let props = GridProps::from_host(&self.host, &self.columns);
        self.grid.render(props, &mut self.surface);
    }

    /// Apply every delivered event to the host, then render once
    pub fn settle(&mut self) -> Vec<GridEvent> {
        let events: Vec<GridEvent> = self.log.borrow_mut().drain(..).collect();
        for event in &events {
            self.host.reduce(event);
        }
        self.render();
        events
    }

    pub fn click(&mut self, key: &CellKey) -> Vec<GridEvent> {
        self.grid.click(key);
        self.settle()
    }

    pub fn type_text(&mut self, key: &CellKey, text: &str) -> Vec<GridEvent> {
        if self.surface.type_text(key, text).is_some() {
            self.grid.input(key, &self.surface);
        }
        self.settle()
    }
}
