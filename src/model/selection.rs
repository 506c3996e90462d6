//! Row selection set (checkbox state), owned by the host

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::row::RowId;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    ids: BTreeSet<RowId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &RowId) -> bool {
        self.ids.contains(id)
    }

    /// Flip membership; returns true if the row is now selected
    pub fn toggle(&mut self, id: &RowId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.ids.iter()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

impl FromIterator<RowId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
