/// Record operations over one store file: add, list, find, remove.
use std::path::{Path, PathBuf};

use tracing::debug;

use super::errors::StoreError;
use super::file::{load, persist};
use super::record::Record;

/// Handle to the records stored in a single file.
///
/// Every call re-reads the file; mutating calls rewrite it in full.
#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` or `StoreError::Parse` if the file cannot be loaded.
    pub fn list(&self) -> Result<Vec<Record>, StoreError> {
        load(&self.path)
    }

    /// Append a record.
    ///
    /// The file is left untouched when the id already exists.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Duplicate` if the id is taken, or a load/persist error.
    pub fn insert(&self, record: Record) -> Result<Record, StoreError> {
        let mut records = load(&self.path)?;

        if records.iter().any(|r| r.id == record.id) {
            return Err(StoreError::Duplicate { id: record.id });
        }

        records.push(record.clone());
        persist(&self.path, &records)?;
        debug!(id = %record.id, "added record");
        Ok(record)
    }

    /// First record whose id equals `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` on a miss, or a load error.
    pub fn find_by_id(&self, id: &str) -> Result<Record, StoreError> {
        load(&self.path)?
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_owned() })
    }

    /// Remove the first record whose id equals `id`, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` (file untouched) on a miss, or a load/persist error.
    pub fn remove_by_id(&self, id: &str) -> Result<Record, StoreError> {
        let mut records = load(&self.path)?;
        let pos = records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_owned() })?;

        let removed = records.remove(pos);
        persist(&self.path, &records)?;
        debug!(id = %removed.id, remaining = records.len(), "removed record");
        Ok(removed)
    }
}
