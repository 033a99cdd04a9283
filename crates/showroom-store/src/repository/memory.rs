//! In-memory [`SnapshotStore`].

use std::collections::BTreeMap;

use tracing::debug;

use super::SnapshotStore;
use crate::error::{StoreError, StoreResult};
use crate::record::{validate_name, SavedConfiguration};

/// Keeps saved configurations in a map for the lifetime of the value.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: BTreeMap<String, SavedConfiguration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, record: &SavedConfiguration) -> StoreResult<()> {
        validate_name(&record.name)?;
        debug!(name = %record.name, id = %record.id, "Saving configuration in memory");
        self.records.insert(record.name.clone(), record.clone());
        Ok(())
    }

    fn load(&self, name: &str) -> StoreResult<SavedConfiguration> {
        self.records
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }

    fn list(&self) -> StoreResult<Vec<SavedConfiguration>> {
        Ok(self.records.values().cloned().collect())
    }

    fn delete(&mut self, name: &str) -> StoreResult<()> {
        self.records
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                name: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use showroom_core::{Catalog, Configurator};
    use std::sync::Arc;

    fn record(name: &str, model: &str) -> SavedConfiguration {
        let catalog = Arc::new(Catalog::builtin().unwrap());
        let session = Configurator::new(catalog, model).unwrap();
        SavedConfiguration::capture(name, &session).unwrap()
    }

    #[test]
    fn test_save_load_delete() {
        let mut store = MemoryStore::new();
        let saved = record("daily", "sedan");

        store.save(&saved).unwrap();
        assert_eq!(store.load("daily").unwrap(), saved);
        assert_eq!(store.len(), 1);

        store.delete("daily").unwrap();
        assert!(store.is_empty());
        assert!(matches!(store.load("daily"), Err(StoreError::NotFound { .. })));
        assert!(matches!(store.delete("daily"), Err(StoreError::NotFound { .. })));
    }

    #[test]
    fn test_save_replaces_same_name() {
        let mut store = MemoryStore::new();
        store.save(&record("garage", "sedan")).unwrap();
        store.save(&record("garage", "suv")).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.load("garage").unwrap().snapshot.model, "suv");
    }

    #[test]
    fn test_list_is_sorted_by_name() {
        let mut store = MemoryStore::new();
        store.save(&record("zeta", "sedan")).unwrap();
        store.save(&record("alpha", "sports")).unwrap();

        let names: Vec<_> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }
}
