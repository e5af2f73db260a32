/// Record store layer: record type, file I/O, CRUD operations.
pub mod errors;
pub mod file;
pub mod ops;
pub mod record;

pub use errors::StoreError;
pub use file::ensure_store_file;
pub use ops::RecordStore;
pub use record::{Record, render_record, render_records};
