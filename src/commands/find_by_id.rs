/// `findById` command: print the first record with the given id.
use std::io::Write;

use tracing::debug;

use super::Outcome;
use crate::cli::OutputCtx;
use crate::cli::output::write_record;
use crate::store::{RecordStore, StoreError};

/// Run `-operation findById`.
///
/// A miss writes nothing and is returned as `Outcome::Missed`.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be loaded or the output written.
pub fn run<W: Write>(
    store: &RecordStore,
    id: &str,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<Outcome, StoreError> {
    let _t = ctx.timer("find_by_id");
    match store.find_by_id(id) {
        Ok(record) => {
            write_record(out, &record)?;
            Ok(Outcome::Completed)
        }
        Err(err @ StoreError::NotFound { .. }) => {
            debug!(id, "no record found");
            Ok(Outcome::Missed(err))
        }
        Err(err) => Err(err),
    }
}
