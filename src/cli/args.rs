/// CLI argument definitions via clap derive.
use std::ffi::OsString;

use clap::Parser;

/// recstore — manage id/email/age records in a JSON file.
///
/// Flags may be written `-fileName x`, `--fileName x` or `-fileName=x`.
/// A repeated flag keeps its last value.
#[derive(Debug, Parser)]
#[command(
    name = "recstore",
    about = "Manage id/email/age records stored as a JSON array in a single file",
    version,
    args_override_self = true
)]
pub struct Cli {
    /// Operation to run: add, list, findById, remove.
    #[arg(long = "operation", value_name = "OPERATION", allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// Store file. Created with `[]` if it does not exist.
    #[arg(long = "fileName", value_name = "PATH", allow_hyphen_values = true)]
    pub file_name: Option<String>,

    /// Record to add, as a JSON object with id, email and age.
    #[arg(long = "item", value_name = "JSON", allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Record id for findById and remove.
    #[arg(long = "id", value_name = "ID", allow_hyphen_values = true)]
    pub id: Option<String>,

    /// Log store activity and timings to stderr.
    #[arg(long)]
    pub debug: bool,

    /// Report fatal errors on stderr as a JSON envelope.
    #[arg(long)]
    pub json: bool,
}

/// Long flags that take a value.
const VALUE_FLAGS: [&str; 4] = ["operation", "fileName", "item", "id"];

/// Long flags without a value.
const SWITCH_FLAGS: [&str; 2] = ["debug", "json"];

/// Rewrite single-dash long flags (`-fileName`) into clap's `--fileName`.
///
/// The first element (program name) is passed through untouched, as are
/// values following a value flag, so `-item -x` keeps `-x` as the payload.
#[must_use]
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut expect_value = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || expect_value {
            expect_value = false;
            out.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            out.push(arg);
            continue;
        };

        let bare = match text.strip_prefix("--") {
            Some(rest) => rest,
            None => match text.strip_prefix('-') {
                Some(rest) => rest,
                None => {
                    out.push(arg);
                    continue;
                }
            },
        };
        let (name, has_inline_value) = match bare.split_once('=') {
            Some((name, _)) => (name, true),
            None => (bare, false),
        };

        if VALUE_FLAGS.contains(&name) {
            expect_value = !has_inline_value;
            out.push(OsString::from(format!("--{bare}")));
        } else if SWITCH_FLAGS.contains(&name) {
            out.push(OsString::from(format!("--{bare}")));
        } else {
            out.push(arg);
        }
    }

    out
}
