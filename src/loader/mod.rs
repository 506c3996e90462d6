//! Loading host data from files
//!
//! Datasets come from delimited text (`.csv`, `.tsv`, `.psv`) or a JSON
//! array of row objects. Column specs come from YAML or JSON mappings
//! of column name to definition, or are inferred from the data.

mod delimited;

use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{ColumnDef, ColumnSpec, Dataset, Row};

pub use delimited::{detect_delimiter, parse_rows, DelimitedData, Delimiter, ParseError};

/// A loaded dataset with the column order found in the file
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub dataset: Dataset,
    /// Column names in first-seen order
    pub columns: Vec<String>,
}

impl LoadedData {
    /// Every column as free text, titled by its name
    pub fn infer_columns(&self) -> ColumnSpec {
        self.columns
            .iter()
            .map(|name| (name.clone(), ColumnDef::default()))
            .collect()
    }
}

fn extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default()
}

/// Load a dataset, choosing the format by extension
pub fn load_dataset(path: &Path) -> Result<LoadedData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    let data = match extension(path).as_str() {
        "json" => dataset_from_json(&content)
            .with_context(|| format!("Invalid JSON dataset {}", path.display()))?,
        ext => {
            let delimiter = match ext {
                "csv" | "tsv" | "psv" => Delimiter::from_extension(ext),
                _ => detect_delimiter(&content),
            };
            let parsed = parse_rows(&content, delimiter)
                .with_context(|| format!("Invalid delimited dataset {}", path.display()))?;
            LoadedData {
                columns: parsed.headers,
                dataset: Dataset::new(parsed.rows),
            }
        }
    };

    tracing::info!(
        "Loaded {} rows from {}",
        data.dataset.len(),
        path.display()
    );
    Ok(data)
}

/// Parse a JSON array of row objects
///
/// Each object needs an `id`; `__style` holds row-level style overrides.
pub fn dataset_from_json(content: &str) -> Result<LoadedData> {
    let rows: Vec<Row> = serde_json::from_str(content).context("Expected an array of rows")?;
    let mut columns: Vec<String> = Vec::new();
    for name in rows.iter().flat_map(|row| row.cells.keys()) {
        if !columns.contains(name) {
            columns.push(name.clone());
        }
    }
    Ok(LoadedData {
        dataset: Dataset::new(rows),
        columns,
    })
}

/// Load a column spec from YAML or JSON
pub fn load_columns(path: &Path) -> Result<ColumnSpec> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read column spec {}", path.display()))?;
    let spec = match extension(path).as_str() {
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Invalid JSON column spec {}", path.display()))?,
        _ => columns_from_yaml(&content)
            .with_context(|| format!("Invalid YAML column spec {}", path.display()))?,
    };
    Ok(spec)
}

pub fn columns_from_yaml(content: &str) -> Result<ColumnSpec> {
    Ok(serde_yaml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataType, RowId};

    #[test]
    fn test_json_rows_with_style() {
        let data = dataset_from_json(
            r#"[
                {"id": 1, "name": "Ann", "__style": {"color": "red"}},
                {"id": "b", "name": "Bob", "age": 41}
            ]"#,
        )
        .unwrap();
        assert_eq!(data.columns, vec!["name", "age"]);
        let rows = data.dataset.rows();
        assert_eq!(rows[1].id, RowId::Text("b".into()));
        assert!(rows[0].style.is_some());
        assert!(rows[0].get("__style").is_none());
    }

    const COLUMNS_YAML: &str = "\
select:
  dataType: row-select
name:
  title: Name
total:
  type: formula
legacy:
  dataType: editable
";

    #[test]
    fn test_yaml_columns_keep_order_and_types() {
        let spec = columns_from_yaml(COLUMNS_YAML).unwrap();
        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["select", "name", "total", "legacy"]);
        assert_eq!(spec.get("select").unwrap().data_type, DataType::RowSelect);
        assert_eq!(spec.get("total").unwrap().data_type, DataType::Formula);
        assert_eq!(spec.get("legacy").unwrap().data_type, DataType::Text);
        assert_eq!(spec.title("name"), "Name");
    }

    #[test]
    fn test_infer_columns_as_text() {
        let data = dataset_from_json(r#"[{"id": 1, "a": 1, "b": "x"}]"#).unwrap();
        let spec = data.infer_columns();
        assert_eq!(spec.len(), 2);
        assert_eq!(spec.get("b").unwrap().data_type, DataType::Text);
    }

    #[test]
    fn test_non_array_json_fails() {
        assert!(dataset_from_json(r#"{"id": 1}"#).is_err());
    }
}
