//! Result of one inventory enumeration

use serde::Serialize;

use crate::domain::PackageRecord;

/// Packages installed at the moment of one enumeration, sorted by name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InventorySnapshot {
    records: Vec<PackageRecord>,
}

impl InventorySnapshot {
    pub fn new(mut records: Vec<PackageRecord>) -> Self {
        records.sort_by_key(|record| record.name().to_lowercase());
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PackageRecord> {
        self.records.iter()
    }

    /// Case-insensitive lookup by distribution name
    pub fn find(&self, name: &str) -> Option<&PackageRecord> {
        self.records.iter().find(|record| record.is_named(name))
    }

    /// Records whose name contains `query`, ignoring case. An empty query
    /// keeps everything.
    pub fn filter(&self, query: &str) -> Vec<&PackageRecord> {
        let query = query.trim().to_lowercase();
        self.records
            .iter()
            .filter(|record| query.is_empty() || record.name().to_lowercase().contains(&query))
            .collect()
    }
}

impl<'a> IntoIterator for &'a InventorySnapshot {
    type Item = &'a PackageRecord;
    type IntoIter = std::slice::Iter<'a, PackageRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
