/// Backing-file I/O: bootstrap, full read, full rewrite.
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use super::errors::StoreError;
use super::record::{Record, render_records};

/// Contents written to a freshly created store file.
pub const EMPTY_STORE: &str = "[]";

/// Create the store file with `[]` if it does not exist yet.
///
/// Returns `true` when the file was created.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file cannot be inspected or created.
pub fn ensure_store_file(path: &Path) -> Result<bool, StoreError> {
    match fs::metadata(path) {
        Ok(_) => Ok(false),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            fs::write(path, EMPTY_STORE).map_err(|e| StoreError::io("create", path, e))?;
            debug!(path = %path.display(), "created empty store");
            Ok(true)
        }
        Err(e) => Err(StoreError::io("stat", path, e)),
    }
}

/// Read and decode every record in the store.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file cannot be read, or `StoreError::Parse`
/// if it is not a JSON array of well-formed records.
pub fn load(path: &Path) -> Result<Vec<Record>, StoreError> {
    let data = fs::read_to_string(path).map_err(|e| StoreError::io("read", path, e))?;
    let records: Vec<Record> = serde_json::from_str(&data).map_err(|source| StoreError::Parse {
        what: "store file",
        source,
    })?;
    debug!(path = %path.display(), count = records.len(), "loaded store");
    Ok(records)
}

/// Overwrite the store file with the given records.
///
/// # Errors
///
/// Returns `StoreError::Encode` or `StoreError::Io` on failure.
pub fn persist(path: &Path, records: &[Record]) -> Result<(), StoreError> {
    let data = render_records(records)?;
    fs::write(path, data).map_err(|e| StoreError::io("write", path, e))?;
    debug!(path = %path.display(), count = records.len(), "persisted store");
    Ok(())
}
