//! Row records and cell values
//!
//! Rows are owned by the host. The grid only reads them and proposes
//! changes through [`GridEvent`](crate::messages::GridEvent)s.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::style::StyleMap;

/// Unique identity of a row, independent of its position in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowId::Int(n) => write!(f, "{}", n),
            RowId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RowId {
    fn from(n: i64) -> Self {
        RowId::Int(n)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId::Text(s.to_string())
    }
}

impl From<String> for RowId {
    fn from(s: String) -> Self {
        RowId::Text(s)
    }
}

/// A single cell value: a primitive or a nested sequence of sub-rows
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
    Rows(Vec<Row>),
}

impl CellValue {
    /// The string shown for this value in a rendered cell
    pub fn display(&self) -> String {
        match self {
            CellValue::Null => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Number(n) => format_number(*n),
            CellValue::Text(s) => s.clone(),
            CellValue::Rows(rows) => format!("[{} rows]", rows.len()),
        }
    }

    /// True for everything except nested sub-rows
    pub fn is_primitive(&self) -> bool {
        !matches!(self, CellValue::Rows(_))
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// Format a number without a trailing `.0` for integral values
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

/// One record of the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub id: RowId,
    /// Row-level style overrides; win over column-level overrides
    #[serde(rename = "__style", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
    #[serde(flatten)]
    pub cells: IndexMap<String, CellValue>,
}

impl Row {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            style: None,
            cells: IndexMap::new(),
        }
    }

    /// Builder-style cell assignment
    pub fn with(mut self, column: &str, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column.to_string(), value.into());
        self
    }

    /// Builder-style row style
    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Display string for a column, with `id` resolving to the row id
    /// when the row has no explicit `id` cell
    pub fn display(&self, column: &str) -> String {
        match self.cells.get(column) {
            Some(value) => value.display(),
            None if column == "id" => self.id.to_string(),
            None => String::new(),
        }
    }

    pub fn set(&mut self, column: &str, value: impl Into<CellValue>) {
        self.cells.insert(column.to_string(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_integral_fraction() {
        assert_eq!(CellValue::Number(30.0).display(), "30");
        assert_eq!(CellValue::Number(2.5).display(), "2.5");
        assert_eq!(CellValue::Number(-4.0).display(), "-4");
    }

    #[test]
    fn test_nested_rows_display() {
        let value = CellValue::Rows(vec![Row::new(1), Row::new(2)]);
        assert_eq!(value.display(), "[2 rows]");
        assert!(!value.is_primitive());
    }

    #[test]
    fn test_row_from_json_with_style() {
        let json = r#"{"id": 7, "firstName": "Ada", "age": 36, "__style": {"color": "red"}}"#;
        let row: Row = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, RowId::Int(7));
        assert_eq!(row.display("firstName"), "Ada");
        assert_eq!(row.display("age"), "36");
        assert_eq!(row.display("id"), "7");
        assert!(row.style.is_some());
        assert!(!row.cells.contains_key("__style"));
    }

    #[test]
    fn test_row_with_sub_rows() {
        let json = r#"{"id": "a", "subRows": [{"id": "a.1", "name": "x"}]}"#;
        let row: Row = serde_json::from_str(json).unwrap();
        assert_eq!(row.id, RowId::Text("a".into()));
        assert_eq!(row.display("subRows"), "[1 rows]");
    }
}
