/// Command dispatch: routes the validated `Operation` to its implementation.
pub mod add;
pub mod find_by_id;
pub mod list;
pub mod remove;

use std::io::Write;

use crate::cli::OutputCtx;
use crate::config::{Config, Operation};
use crate::store::{RecordStore, StoreError};

/// How a command finished when it did not abort.
#[derive(Debug)]
pub enum Outcome {
    /// The operation succeeded; any data has been written.
    Completed,
    /// `add`/`remove` refused the request. The message was written to the
    /// output stream and the process still exits successfully.
    Rejected(StoreError),
    /// `findById` found nothing. Nothing was written.
    Missed(StoreError),
}

/// Dispatch a validated `Config` to its handler.
///
/// # Errors
///
/// Returns `StoreError` for every failure that should abort the process.
pub fn dispatch<W: Write>(
    config: &Config,
    ctx: &OutputCtx,
    out: &mut W,
) -> Result<Outcome, StoreError> {
    let store = RecordStore::new(&config.file_name);
    match &config.operation {
        Operation::Add => add::run(&store, required(config.item.as_deref(), "item")?, ctx, out),
        Operation::List => list::run(&store, ctx, out),
        Operation::FindById => {
            find_by_id::run(&store, required(config.id.as_deref(), "id")?, ctx, out)
        }
        Operation::Remove => remove::run(&store, required(config.id.as_deref(), "id")?, ctx, out),
        Operation::Unsupported(name) => Err(StoreError::UnsupportedOperation {
            operation: name.clone(),
        }),
    }
}

fn required<'a>(value: Option<&'a str>, flag: &'static str) -> Result<&'a str, StoreError> {
    value.ok_or(StoreError::MissingFlag { flag })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    use crate::store::ensure_store_file;

    fn config(path: &Path, op: &str, item: Option<&str>, id: Option<&str>) -> Config {
        ensure_store_file(path).unwrap();
        Config {
            file_name: path.to_path_buf(),
            operation: Operation::from_name(op),
            item: item.map(str::to_owned),
            id: id.map(str::to_owned),
        }
    }

    fn run(path: &Path, op: &str, item: Option<&str>, id: Option<&str>) -> (Result<Outcome, StoreError>, String) {
        let mut buf: Vec<u8> = Vec::new();
        let result = dispatch(&config(path, op, item, id), &OutputCtx::default(), &mut buf);
        (result, String::from_utf8(buf).unwrap())
    }

    #[test]
    fn test_worked_example() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        let item = r#"{"id":"1","email":"a@b.com","age":30}"#;

        let (res, out) = run(&path, "add", Some(item), None);
        assert!(matches!(res, Ok(Outcome::Completed)));
        assert_eq!(out, "");
        assert_eq!(fs::read_to_string(&path).unwrap(), format!("[{item}]"));

        let (res, out) = run(&path, "findById", None, Some("1"));
        assert!(matches!(res, Ok(Outcome::Completed)));
        assert_eq!(out, item);

        let (res, out) = run(&path, "remove", None, Some("1"));
        assert!(matches!(res, Ok(Outcome::Completed)));
        assert_eq!(out, "");
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");

        let (res, out) = run(&path, "list", None, None);
        assert!(matches!(res, Ok(Outcome::Completed)));
        assert_eq!(out, "");
    }

    #[test]
    fn test_duplicate_add_reports_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        run(&path, "add", Some(r#"{"id":"X","email":"a","age":1}"#), None).0.unwrap();
        let before = fs::read(&path).unwrap();

        let (res, out) = run(&path, "add", Some(r#"{"id":"X","email":"b","age":2}"#), None);
        assert!(matches!(res, Ok(Outcome::Rejected(StoreError::Duplicate { .. }))));
        assert_eq!(out, "Item with id X already exists");
        assert_eq!(fs::read(&path).unwrap(), before);
    }

    #[test]
    fn test_remove_missing_reports_text() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");

        let (res, out) = run(&path, "remove", None, Some("X"));
        assert!(matches!(res, Ok(Outcome::Rejected(StoreError::NotFound { .. }))));
        assert_eq!(out, "Item with id X not found");
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_find_miss_is_silent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        run(&path, "add", Some(r#"{"id":"1","email":"a","age":1}"#), None).0.unwrap();

        let (res, out) = run(&path, "findById", None, Some("2"));
        assert!(matches!(res, Ok(Outcome::Missed(StoreError::NotFound { .. }))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_list_keeps_insertion_order_and_drops_extra_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        run(&path, "add", Some(r#"{"age":2,"id":"b","email":"b@x","nick":"bee"}"#), None).0.unwrap();
        run(&path, "add", Some(r#"{"id":"a","email":"a@x","age":1}"#), None).0.unwrap();

        let (_, out) = run(&path, "list", None, None);
        assert_eq!(
            out,
            r#"[{"id":"b","email":"b@x","age":2},{"id":"a","email":"a@x","age":1}]"#
        );
    }

    #[test]
    fn test_bad_payload_is_rejected_with_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");

        let (res, out) = run(&path, "add", Some(r#"{"email":"a","age":1}"#), None);
        assert!(matches!(res, Ok(Outcome::Rejected(StoreError::Schema { field: "id", .. }))));
        assert_eq!(out, "field 'id' is missing");

        let (res, out) = run(&path, "add", Some("{oops"), None);
        assert!(matches!(res, Ok(Outcome::Rejected(StoreError::Parse { .. }))));
        assert!(out.starts_with("invalid JSON in item"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn test_unreadable_store_is_reported_by_add_and_remove() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("not-a-file");
        fs::create_dir(&dir).unwrap();

        let (res, out) = run(&dir, "add", Some(r#"{"id":"1","email":"a","age":1}"#), None);
        assert!(matches!(res, Ok(Outcome::Rejected(StoreError::Io { action: "read", .. }))));
        assert!(out.starts_with("cannot read"));

        let (res, out) = run(&dir, "remove", None, Some("1"));
        assert!(matches!(res, Ok(Outcome::Rejected(StoreError::Io { action: "read", .. }))));
        assert!(out.starts_with("cannot read"));

        assert!(matches!(run(&dir, "list", None, None).0, Err(StoreError::Io { .. })));
    }

    #[test]
    fn test_unsupported_operation_aborts() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");

        let (res, out) = run(&path, "update", None, None);
        let err = res.unwrap_err();
        assert_eq!(err.to_string(), "Operation update not allowed!");
        assert!(out.is_empty());
    }

    #[test]
    fn test_corrupt_store_aborts_list_and_find() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("users.json");
        fs::write(&path, "{broken").unwrap();

        assert!(matches!(run(&path, "list", None, None).0, Err(StoreError::Parse { .. })));
        assert!(matches!(
            run(&path, "findById", None, Some("1")).0,
            Err(StoreError::Parse { .. })
        ));
        assert!(matches!(
            run(&path, "remove", None, Some("1")).0,
            Err(StoreError::Parse { .. })
        ));
    }
}
