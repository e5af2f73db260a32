/// `add` command: append a record parsed from `-item`.
use std::io::Write;

use tracing::debug;

use super::Outcome;
use crate::cli::OutputCtx;
use crate::cli::output::write_message;
use crate::store::record::parse_record;
use crate::store::{RecordStore, StoreError};

/// Run `-operation add`.
///
/// A bad payload or an id that already exists is reported as text on `out`
/// and returned as `Outcome::Rejected`; the store file is not modified.
/// A store file that cannot be read or rewritten is reported the same way.
///
/// # Errors
///
/// Returns `StoreError` if the store file holds malformed JSON.
pub fn run<W: Write>(
    store: &RecordStore,
    item: &str,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<Outcome, StoreError> {
    let record = match parse_record(item) {
        Ok(record) => record,
        Err(err) => return reject(err, out),
    };

    let _t = ctx.timer("add");
    match store.insert(record) {
        Ok(record) => {
            debug!(id = %record.id, "add completed");
            Ok(Outcome::Completed)
        }
        Err(err) if err.is_rejection() => reject(err, out),
        Err(err) => Err(err),
    }
}

fn reject<W: Write>(err: StoreError, out: &mut W) -> Result<Outcome, StoreError> {
    debug!(error = %err, "add rejected");
    write_message(out, &err.to_string())?;
    Ok(Outcome::Rejected(err))
}
