/// `remove` command: delete a record by id.
use std::io::Write;

use tracing::debug;

use super::Outcome;
use crate::cli::OutputCtx;
use crate::cli::output::write_message;
use crate::store::{RecordStore, StoreError};

/// Run `-operation remove`.
///
/// An unknown id is reported as text on `out` and returned as
/// `Outcome::Rejected`; the store file is not modified. A store file that
/// cannot be read or rewritten is reported the same way.
///
/// # Errors
///
/// Returns `StoreError` if the store file holds malformed JSON.
pub fn run<W: Write>(
    store: &RecordStore,
    id: &str,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<Outcome, StoreError> {
    let _t = ctx.timer("remove");
    match store.remove_by_id(id) {
        Ok(_) => Ok(Outcome::Completed),
        Err(err) if err.is_rejection() => {
            debug!(error = %err, "remove rejected");
            write_message(out, &err.to_string())?;
            Ok(Outcome::Rejected(err))
        }
        Err(err) => Err(err),
    }
}
