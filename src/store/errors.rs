/// Errors from the record store and the argument layer.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while handling one invocation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required flag was missing or empty.
    #[error("{flag} required")]
    MissingFlag {
        /// Flag name without dashes (e.g. `fileName`).
        flag: &'static str,
    },

    /// Creating, reading or writing the backing file failed.
    #[error("cannot {action} '{}': {source}", .path.display())]
    Io {
        /// What was being attempted ("read", "write", "create").
        action: &'static str,
        /// The file involved.
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output stream failed.
    #[error("cannot write output: {0}")]
    Output(#[source] io::Error),

    /// Malformed JSON in the store file or in an item payload.
    #[error("invalid JSON in {what}: {source}")]
    Parse {
        /// Where the JSON came from ("store file", "item").
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Records could not be encoded back to JSON.
    #[error("cannot encode records: {0}")]
    Encode(#[source] serde_json::Error),

    /// A record field is missing or has the wrong type.
    #[error("field '{field}' {reason}")]
    Schema {
        /// The offending field.
        field: &'static str,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// `add` with an id that is already stored.
    #[error("Item with id {id} already exists")]
    Duplicate {
        /// The clashing id.
        id: String,
    },

    /// `findById` or `remove` with an id that is not stored.
    #[error("Item with id {id} not found")]
    NotFound {
        /// The requested id.
        id: String,
    },

    /// The `-operation` value is not one of the known operations.
    #[error("Operation {operation} not allowed!")]
    UnsupportedOperation {
        /// The value as given on the command line.
        operation: String,
    },
}

impl StoreError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingFlag { .. } | Self::UnsupportedOperation { .. } => 2,
            Self::Io { .. } | Self::Output(_) => 74,
            Self::Parse { .. } | Self::Schema { .. } => 65,
            Self::Encode(_) => 70,
            Self::Duplicate { .. } | Self::NotFound { .. } => 1,
        }
    }

    /// Stable snake_case code used in the JSON error envelope.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingFlag { .. } => "config_error",
            Self::Io { .. } | Self::Output(_) => "io_error",
            Self::Parse { .. } => "parse_error",
            Self::Encode(_) => "encode_error",
            Self::Schema { .. } => "schema_error",
            Self::Duplicate { .. } => "duplicate_id",
            Self::NotFound { .. } => "not_found",
            Self::UnsupportedOperation { .. } => "unsupported_operation",
        }
    }

    /// Whether `add`/`remove` report this error as text instead of aborting.
    ///
    /// Covers the id conflicts and any failure to read or rewrite the store
    /// file. Malformed store contents still abort.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Self::Duplicate { .. } | Self::NotFound { .. } | Self::Io { .. }
        )
    }

    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let dup = StoreError::Duplicate { id: "7".to_owned() };
        assert_eq!(dup.to_string(), "Item with id 7 already exists");

        let missing = StoreError::NotFound { id: "7".to_owned() };
        assert_eq!(missing.to_string(), "Item with id 7 not found");

        let op = StoreError::UnsupportedOperation {
            operation: "update".to_owned(),
        };
        assert_eq!(op.to_string(), "Operation update not allowed!");

        let flag = StoreError::MissingFlag { flag: "fileName" };
        assert_eq!(flag.to_string(), "fileName required");
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(StoreError::MissingFlag { flag: "id" }.exit_code(), 2);
        let io = StoreError::io("read", "x.json", io::Error::other("boom"));
        assert_eq!(io.exit_code(), 74);
        assert!(io.is_rejection());
        assert!(StoreError::NotFound { id: "1".into() }.is_rejection());
        assert!(!StoreError::MissingFlag { flag: "id" }.is_rejection());
    }
}
