//! Text and JSON output of a rendered grid

use serde_json::{json, Value};

use crate::grid::{CellContent, RenderedGrid};

/// Plain-text table: a header line, then one line per row
///
/// Each cell reads `[tab] text`; non-focusable cells show `[-]`.
pub fn format_table(grid: &RenderedGrid) -> String {
    let mut lines: Vec<Vec<String>> = Vec::with_capacity(grid.rows.len() + 1);

    let mut header = vec!["#".to_string()];
    header.extend(grid.headers.iter().map(|h| h.title.clone()));
    lines.push(header);

    for row in &grid.rows {
        let mut line = vec![row.number.to_string()];
        line.extend(row.cells.iter().map(|cell| {
            let tab = match cell.focus_index() {
                Some(index) => index.to_string(),
                None => "-".to_string(),
            };
            format!("[{}] {}", tab, cell.content.display_text().trim_end())
        }));
        lines.push(line);
    }

    let columns = lines.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = (0..columns)
        .map(|col| {
            lines
                .iter()
                .filter_map(|line| line.get(col))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &lines {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{:<width$}", text, width = *width))
            .collect();
        out.push_str(padded.join(" | ").trim_end());
        out.push('\n');
    }
    out
}

fn kind(content: &CellContent) -> &'static str {
    match content {
        CellContent::RowSelect { .. } => "row-select",
        CellContent::Image { .. } => "image",
        CellContent::DateTime { .. } => "date-time",
        CellContent::Formula { .. } => "formula",
        CellContent::Text(_) => "text",
    }
}

pub fn to_json(grid: &RenderedGrid) -> Value {
    let headers: Vec<Value> = grid
        .headers
        .iter()
        .map(|h| json!({"column": h.column, "title": h.title, "index": h.index}))
        .collect();
    let rows: Vec<Value> = grid
        .rows
        .iter()
        .map(|row| {
            let cells: Vec<Value> = row
                .cells
                .iter()
                .map(|cell| {
                    let error = matches!(cell.content, CellContent::Formula { is_error: true, .. });
                    json!({
                        "column": cell.key.column,
                        "type": kind(&cell.content),
                        "tabIndex": cell.focus_index(),
                        "display": cell.content.display_text(),
                        "error": error,
                        "style": cell.style,
                    })
                })
                .collect();
            json!({"index": row.key, "number": row.number, "id": row.id, "cells": cells})
        })
        .collect();

    json!({
        "totalRows": grid.total_rows,
        "totalCols": grid.total_cols,
        "headers": headers,
        "rows": rows,
    })
}
