/// `list` command: print every record in insertion order.
use std::io::Write;

use tracing::debug;

use super::Outcome;
use crate::cli::OutputCtx;
use crate::cli::output::write_records;
use crate::store::{RecordStore, StoreError};

/// Run `-operation list`. An empty store prints nothing.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be loaded or the output written.
pub fn run<W: Write>(
    store: &RecordStore,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<Outcome, StoreError> {
    let _t_load = ctx.timer("load");
    let records = store.list()?;
    drop(_t_load);

    debug!(path = %store.path().display(), count = records.len(), "listing records");

    write_records(out, &records)?;
    Ok(Outcome::Completed)
}
