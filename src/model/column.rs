//! Column specifications
//!
//! Column order is significant: it defines left-to-right rendering and
//! keyboard tab order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::style::StyleMap;

/// How a column's cells are rendered and interacted with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DataType {
    /// Checkbox bound to the selection-toggle callback
    RowSelect,
    /// Value is an image reference
    Image,
    /// Raw stored representation, shown verbatim
    DateTime,
    /// Computed from the row's other values
    Formula,
    /// Editable free text (also any unrecognized type name)
    #[default]
    #[serde(other)]
    Text,
}

impl DataType {
    /// Whether cells of this type go through the edit path
    pub fn is_editable(self) -> bool {
        matches!(self, DataType::Text)
    }
}

/// Declaration of one column
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "dataType", alias = "type", default)]
    pub data_type: DataType,
    #[serde(rename = "__style", alias = "style", default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleMap>,
}

impl ColumnDef {
    pub fn new(data_type: DataType) -> Self {
        Self {
            title: None,
            data_type,
            style: None,
        }
    }

    pub fn text(title: &str) -> Self {
        Self::new(DataType::Text).titled(title)
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }
}

/// Ordered mapping from column name to its declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSpec {
    columns: IndexMap<String, ColumnDef>,
}

impl ColumnSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style column append (replaces in place if the name exists)
    pub fn with(mut self, name: &str, def: ColumnDef) -> Self {
        self.insert(name, def);
        self
    }

    pub fn insert(&mut self, name: &str, def: ColumnDef) {
        self.columns.insert(name.to_string(), def);
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.get(name)
    }

    /// Column at a position in declaration order
    pub fn get_index(&self, index: usize) -> Option<(&str, &ColumnDef)> {
        self.columns
            .get_index(index)
            .map(|(name, def)| (name.as_str(), def))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnDef)> {
        self.columns.iter().map(|(name, def)| (name.as_str(), def))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Display title for a column, falling back to its name
    pub fn title(&self, name: &str) -> String {
        self.get(name)
            .and_then(|def| def.title.clone())
            .unwrap_or_else(|| name.to_string())
    }

    /// Names of columns with the given data type, in order
    pub fn names_of(&self, data_type: DataType) -> Vec<&str> {
        self.iter()
            .filter(|(_, def)| def.data_type == data_type)
            .map(|(name, _)| name)
            .collect()
    }
}

impl FromIterator<(String, ColumnDef)> for ColumnSpec {
    fn from_iter<I: IntoIterator<Item = (String, ColumnDef)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_preserves_order_and_types() {
        let yaml = r#"
id: { type: row-select }
firstName: { title: First Name, type: editable }
total: { title: Total, dataType: formula }
avatar: { dataType: image }
createdAt: { dataType: date-time }
"#;
        let spec: ColumnSpec = serde_yaml::from_str(yaml).unwrap();
        let names: Vec<&str> = spec.names().collect();
        assert_eq!(names, vec!["id", "firstName", "total", "avatar", "createdAt"]);
        assert_eq!(spec.get("id").unwrap().data_type, DataType::RowSelect);
        // Unknown type names fall back to text
        assert_eq!(spec.get("firstName").unwrap().data_type, DataType::Text);
        assert_eq!(spec.get("total").unwrap().data_type, DataType::Formula);
        assert_eq!(spec.get("avatar").unwrap().data_type, DataType::Image);
        assert_eq!(spec.get("createdAt").unwrap().data_type, DataType::DateTime);
    }

    #[test]
    fn test_title_falls_back_to_name() {
        let spec = ColumnSpec::new()
            .with("age", ColumnDef::text("Age"))
            .with("visits", ColumnDef::default());
        assert_eq!(spec.title("age"), "Age");
        assert_eq!(spec.title("visits"), "visits");
    }

    #[test]
    fn test_get_index() {
        let spec = ColumnSpec::new()
            .with("a", ColumnDef::default())
            .with("b", ColumnDef::new(DataType::Image));
        assert_eq!(spec.get_index(1).map(|(n, _)| n), Some("b"));
        assert!(spec.get_index(2).is_none());
    }
}
