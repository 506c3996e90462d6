//! Delimited-text datasets
//!
//! Uses the csv crate for RFC 4180 compliant parsing. The first record
//! names the columns; a column named `id` supplies row identity,
//! otherwise rows are numbered from 1.

use std::io::Cursor;

use crate::model::{CellValue, Row, RowId};

/// Field delimiter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl Delimiter {
    pub fn char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
            Delimiter::Semicolon => ';',
        }
    }

    /// Delimiter implied by a file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "tsv" => Delimiter::Tab,
            "psv" => Delimiter::Pipe,
            _ => Delimiter::Comma,
        }
    }
}

/// A delimited file that could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parsed header plus rows, in file order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DelimitedData {
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

/// Parse delimited content into rows
pub fn parse_rows(content: &str, delimiter: Delimiter) -> Result<DelimitedData, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(Cursor::new(content.as_bytes()));

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ParseError {
            message: e.to_string(),
            line: Some(1),
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    let id_column = headers.iter().position(|h| h == "id");

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| ParseError {
            message: e.to_string(),
            line: Some(index + 2),
        })?;

        let id = id_column
            .and_then(|col| record.get(col))
            .filter(|raw| !raw.is_empty())
            .map(parse_id)
            .unwrap_or_else(|| RowId::Int(index as i64 + 1));

        let mut row = Row::new(id);
        for (col, (name, raw)) in headers.iter().zip(record.iter()).enumerate() {
            if Some(col) != id_column {
                row.set(name, parse_value(raw));
            }
        }
        rows.push(row);
    }

    tracing::debug!("Parsed {} rows, {} columns", rows.len(), headers.len());
    Ok(DelimitedData { headers, rows })
}

fn parse_id(raw: &str) -> RowId {
    raw.trim()
        .parse::<i64>()
        .map(RowId::Int)
        .unwrap_or_else(|_| RowId::Text(raw.to_string()))
}

/// Numbers become numeric values so formulas can use them; everything
/// else stays text verbatim
fn parse_value(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Text(raw.to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => CellValue::Number(n),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> Delimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return Delimiter::Comma;
    }

    if tab_count == max {
        Delimiter::Tab
    } else if pipe_count == max {
        Delimiter::Pipe
    } else if semi_count == max {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}
