/// Serializable diagnostic types.
///
/// Only fatal errors use these; the data written to stdout is the fixed
/// record rendering from `store::record`.
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// A structured error envelope for JSON error output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorOutput {
    /// Always `false`.
    pub ok: bool,
    /// Error details.
    pub error: ErrorDetail,
}

/// Error detail in the JSON error envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable error code (snake_case).
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Exit code the process terminates with.
    pub exit_code: i32,
}

impl ErrorOutput {
    /// Construct from a `StoreError`.
    #[must_use]
    pub fn from_store_error(err: &StoreError) -> Self {
        Self {
            ok: false,
            error: ErrorDetail {
                code: err.code().to_owned(),
                message: err.to_string(),
                exit_code: err.exit_code(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let err = StoreError::UnsupportedOperation {
            operation: "purge".to_owned(),
        };
        let value = serde_json::to_value(ErrorOutput::from_store_error(&err)).unwrap();
        assert_eq!(value["ok"], false);
        assert_eq!(value["error"]["code"], "unsupported_operation");
        assert_eq!(value["error"]["message"], "Operation purge not allowed!");
        assert_eq!(value["error"]["exit_code"], 2);
    }
}
