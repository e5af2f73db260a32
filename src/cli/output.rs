/// Output writing for the data stream (stdout) and diagnostics (stderr).
///
/// Data is written without a trailing newline so that callers see exactly
/// the rendered JSON.
use std::io::{self, Write};

use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use crate::store::{Record, StoreError, render_record, render_records};
use crate::types::ErrorOutput;

/// Output context passed to all commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputCtx {
    /// Emit fatal errors as a JSON envelope.
    pub json: bool,
    /// When true, timing spans are logged.
    pub debug: bool,
}

impl OutputCtx {
    /// Construct from CLI args.
    #[must_use]
    pub fn new(json: bool, debug: bool) -> Self {
        Self { json, debug }
    }

    /// Start a named debug timer. Logs elapsed on drop only when `--debug` is set.
    #[must_use]
    pub fn timer(&self, label: &'static str) -> DebugTimer {
        DebugTimer::new(label, self.debug)
    }
}

/// Install the stderr subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .with_writer(io::stderr)
        .try_init();
}

// --- Data output ---

/// Write the whole store; nothing at all is written for an empty store.
///
/// # Errors
///
/// Returns `StoreError::Encode` or `StoreError::Output` on failure.
pub fn write_records<W: Write>(out: &mut W, records: &[Record]) -> Result<(), StoreError> {
    if records.is_empty() {
        return Ok(());
    }
    let data = render_records(records)?;
    write_raw(out, &data)
}

/// Write a single record.
///
/// # Errors
///
/// Returns `StoreError::Encode` or `StoreError::Output` on failure.
pub fn write_record<W: Write>(out: &mut W, record: &Record) -> Result<(), StoreError> {
    let data = render_record(record)?;
    write_raw(out, &data)
}

/// Write a plain message (used for rejected add/remove requests).
///
/// # Errors
///
/// Returns `StoreError::Output` if the stream cannot be written.
pub fn write_message<W: Write>(out: &mut W, message: &str) -> Result<(), StoreError> {
    write_raw(out, message)
}

fn write_raw<W: Write>(out: &mut W, data: &str) -> Result<(), StoreError> {
    out.write_all(data.as_bytes()).map_err(StoreError::Output)?;
    out.flush().map_err(StoreError::Output)
}

// --- Error output ---

/// Write a fatal error to stderr.
pub fn write_error(err: &ErrorOutput, json: bool) {
    let stderr = io::stderr();
    let mut out = stderr.lock();
    if json {
        let s = serde_json::to_string_pretty(err).unwrap_or_default();
        let _ = writeln!(out, "{s}");
    } else {
        let _ = writeln!(out, "Error: {}", err.error.message);
    }
}

// --- Debug timer ---

/// A RAII timer that logs elapsed milliseconds on drop.
///
/// Created via [`OutputCtx::timer`]. Does nothing when `debug` is false.
pub struct DebugTimer {
    label: &'static str,
    start: std::time::Instant,
    active: bool,
}

impl DebugTimer {
    #[must_use]
    fn new(label: &'static str, active: bool) -> Self {
        Self {
            label,
            start: std::time::Instant::now(),
            active,
        }
    }
}

impl Drop for DebugTimer {
    fn drop(&mut self) {
        if self.active {
            let ms = self.start.elapsed().as_secs_f64() * 1000.0;
            debug!(label = self.label, elapsed_ms = format!("{ms:.2}"), "timing");
        }
    }
}
