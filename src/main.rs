#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! recstore — manage id/email/age records stored as a JSON array in one file.

mod cli;
mod commands;
mod config;
mod store;
mod types;

use clap::Parser;
use tracing::debug;

use cli::{Cli, OutputCtx, init_logging, normalize_args, validate, write_error};
use commands::Outcome;
use store::StoreError;
use types::ErrorOutput;

fn main() {
    let cli = Cli::parse_from(normalize_args(std::env::args_os()));
    init_logging(cli.debug);

    let ctx = OutputCtx::new(cli.json, cli.debug);

    match run(&cli, &ctx) {
        Ok(outcome) => debug!(?outcome, "done"),
        Err(err) => {
            let error_output = ErrorOutput::from_store_error(&err);
            write_error(&error_output, ctx.json);
            std::process::exit(err.exit_code());
        }
    }
}

fn run(cli: &Cli, ctx: &OutputCtx) -> Result<Outcome, StoreError> {
    let config = validate(cli)?;
    debug!(operation = %config.operation, file = %config.file_name.display(), "validated");

    let _t = ctx.timer("dispatch");
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(&config, ctx, &mut out)
}
