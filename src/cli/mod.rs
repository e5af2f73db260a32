/// CLI layer: argument parsing, validation and output writing.
pub mod args;
pub mod output;
pub mod validate;

pub use args::{Cli, normalize_args};
pub use output::{OutputCtx, init_logging, write_error};
pub use validate::validate;
