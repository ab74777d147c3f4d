//! Durable storage for draft records
//!
//! A draft occupies a single keyed slot. The backend and key are injected
//! into the draft manager so tests can run many independent instances in
//! one process.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::MotorlotError;
use crate::models::DraftRecord;

use super::file_io::{read_json_opt, write_json_atomic};

/// A single key-value slot holding the persisted portion of a draft
pub trait DraftStore {
    /// Read the stored record, `Ok(None)` if no draft exists
    fn read(&self) -> Result<Option<DraftRecord>, MotorlotError>;

    /// Write the record, replacing any previous value
    fn write(&self, record: &DraftRecord) -> Result<(), MotorlotError>;

    /// Erase the stored record
    fn clear(&self) -> Result<(), MotorlotError>;
}

/// Draft storage backed by one JSON file
pub struct FileDraftStore {
    path: PathBuf,
}

impl FileDraftStore {
    /// Create a store writing to the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file this store writes to
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl DraftStore for FileDraftStore {
    fn read(&self) -> Result<Option<DraftRecord>, MotorlotError> {
        read_json_opt(&self.path)
    }

    fn write(&self, record: &DraftRecord) -> Result<(), MotorlotError> {
        write_json_atomic(&self.path, record)
    }

    fn clear(&self) -> Result<(), MotorlotError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                MotorlotError::Storage(format!(
                    "Failed to remove {}: {}",
                    self.path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

/// In-memory draft storage, for tests and dry runs
#[derive(Default)]
pub struct MemoryDraftStore {
    slot: RwLock<Option<DraftRecord>>,
}

impl MemoryDraftStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStore for MemoryDraftStore {
    fn read(&self) -> Result<Option<DraftRecord>, MotorlotError> {
        let slot = self
            .slot
            .read()
            .map_err(|e| MotorlotError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(slot.clone())
    }

    fn write(&self, record: &DraftRecord) -> Result<(), MotorlotError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| MotorlotError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *slot = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), MotorlotError> {
        let mut slot = self
            .slot
            .write()
            .map_err(|e| MotorlotError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;
    use tempfile::TempDir;

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileDraftStore::new(temp_dir.path().join("draft.json"));

        assert!(store.read().unwrap().is_none());

        let record = DraftRecord {
            location: Some(Location::new("Dubai", "Marina")),
            ..Default::default()
        };
        store.write(&record).unwrap();

        let loaded = store.read().unwrap().unwrap();
        assert_eq!(loaded.location, record.location);
    }

    #[test]
    fn test_file_store_clear() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileDraftStore::new(temp_dir.path().join("draft.json"));

        store.write(&DraftRecord::default()).unwrap();
        assert!(store.path().exists());

        store.clear().unwrap();
        assert!(!store.path().exists());
        assert!(store.read().unwrap().is_none());

        // Clearing an already-empty slot is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_corrupt_record_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("draft.json");
        std::fs::write(&path, "{{not json").unwrap();

        let store = FileDraftStore::new(path);
        assert!(store.read().is_err());
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryDraftStore::new();
        assert!(store.read().unwrap().is_none());

        let record = DraftRecord {
            location: Some(Location::new("Abu Dhabi", "")),
            ..Default::default()
        };
        store.write(&record).unwrap();
        assert_eq!(store.read().unwrap().unwrap().location, record.location);

        store.clear().unwrap();
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn test_memory_stores_are_independent() {
        let a = MemoryDraftStore::new();
        let b = MemoryDraftStore::new();

        a.write(&DraftRecord::default()).unwrap();
        assert!(a.read().unwrap().is_some());
        assert!(b.read().unwrap().is_none());
    }
}
