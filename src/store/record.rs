/// The `Record` type, payload parsing and the fixed-order JSON rendering.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use super::errors::StoreError;

/// One stored item.
///
/// Field declaration order is the serialization order: `id`, `email`, `age`.
/// Unknown fields are dropped on deserialization and never written back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Unique key within a store.
    pub id: String,
    pub email: String,
    /// A JSON number; fractional values keep their literal, whole values
    /// render without a decimal point.
    pub age: Number,
}

impl Record {
    /// Build a record from an already-decoded JSON object.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Schema` if `id` or `email` is missing or not a
    /// string, or if `age` is missing or not a number.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, StoreError> {
        let id = string_field(fields, "id")?;
        let email = string_field(fields, "email")?;
        let age = match fields.get("age") {
            Some(Value::Number(n)) => integral_age(n),
            Some(_) => {
                return Err(StoreError::Schema {
                    field: "age",
                    reason: "must be a number",
                });
            }
            None => {
                return Err(StoreError::Schema {
                    field: "age",
                    reason: "is missing",
                });
            }
        };
        Ok(Self { id, email, age })
    }
}

/// Whole-valued floats such as `30.0` are stored as the integer `30`.
#[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
fn integral_age(n: &Number) -> Number {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => Number::from(f as i64),
        _ => n.clone(),
    }
}

fn string_field(fields: &Map<String, Value>, name: &'static str) -> Result<String, StoreError> {
    match fields.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(StoreError::Schema {
            field: name,
            reason: "must be a string",
        }),
        None => Err(StoreError::Schema {
            field: name,
            reason: "is missing",
        }),
    }
}

/// Parse the raw `-item` payload into a `Record`.
///
/// # Errors
///
/// Returns `StoreError::Parse` if the payload is not a JSON object, or
/// `StoreError::Schema` if a required field is missing or mistyped.
pub fn parse_record(raw: &str) -> Result<Record, StoreError> {
    let fields: Map<String, Value> =
        serde_json::from_str(raw).map_err(|source| StoreError::Parse {
            what: "item",
            source,
        })?;
    Record::from_fields(&fields)
}

/// Render one record as `{"id":"…","email":"…","age":N}`.
///
/// # Errors
///
/// Returns `StoreError::Encode` if serialization fails.
pub fn render_record(record: &Record) -> Result<String, StoreError> {
    serde_json::to_string(record).map_err(StoreError::Encode)
}

/// Render a whole store as a compact JSON array (`[]` when empty).
///
/// # Errors
///
/// Returns `StoreError::Encode` if serialization fails.
pub fn render_records(records: &[Record]) -> Result<String, StoreError> {
    serde_json::to_string(records).map_err(StoreError::Encode)
}
