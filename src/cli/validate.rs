/// Argument validation: required flags per operation and store bootstrap.
use std::path::PathBuf;

use super::args::Cli;
use crate::config::{Config, Operation};
use crate::store::{StoreError, ensure_store_file};

/// Non-empty value of an optional flag.
fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Check the parsed flags and build the run `Config`.
///
/// Checks run in a fixed order: `-fileName`, store file bootstrap (creates
/// the file with `[]` if missing), `-operation`, then `-item` or `-id` for
/// the operations that need them. An unknown operation only goes through
/// the first three checks.
///
/// # Errors
///
/// Returns `StoreError::MissingFlag` for an absent or empty required flag,
/// or `StoreError::Io` if the store file cannot be created.
pub fn validate(cli: &Cli) -> Result<Config, StoreError> {
    let file_name = supplied(cli.file_name.as_deref())
        .ok_or(StoreError::MissingFlag { flag: "fileName" })?;
    let file_name = PathBuf::from(file_name);
    ensure_store_file(&file_name)?;

    let operation = supplied(cli.operation.as_deref())
        .map(Operation::from_name)
        .ok_or(StoreError::MissingFlag { flag: "operation" })?;

    let item = supplied(cli.item.as_deref()).map(str::to_owned);
    if operation.needs_item() && item.is_none() {
        return Err(StoreError::MissingFlag { flag: "item" });
    }

    let id = supplied(cli.id.as_deref()).map(str::to_owned);
    if operation.needs_id() && id.is_none() {
        return Err(StoreError::MissingFlag { flag: "id" });
    }

    Ok(Config {
        file_name,
        operation,
        item,
        id,
    })
}
