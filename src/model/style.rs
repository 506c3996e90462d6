//! Style overrides and deep merging

use serde_json::{Map, Value};

/// A free-form style object (CSS-like keys to JSON values)
pub type StyleMap = Map<String, Value>;

/// Deep-merge `overlay` onto `base`; overlay keys win on conflict and
/// nested objects merge recursively
pub fn deep_merge(base: &StyleMap, overlay: &StyleMap) -> StyleMap {
    let mut merged = base.clone();
    for (key, value) in overlay {
        match (merged.get_mut(key), value) {
            (Some(Value::Object(existing)), Value::Object(incoming)) => {
                *existing = deep_merge(existing, incoming);
            }
            _ => {
                merged.insert(key.clone(), value.clone());
            }
        }
    }
    merged
}

/// Effective style for a cell: column overrides, then row overrides
pub fn resolve(column: Option<&StyleMap>, row: Option<&StyleMap>) -> StyleMap {
    match (column, row) {
        (None, None) => StyleMap::new(),
        (Some(c), None) => c.clone(),
        (None, Some(r)) => r.clone(),
        (Some(c), Some(r)) => deep_merge(c, r),
    }
}
