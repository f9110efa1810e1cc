// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON accessors backed by `serde_json`.

use super::AccessorResult;
use crate::domain::errors::Rejection;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parses any JSON document.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_json;
/// use serde_json::json;
///
/// assert_eq!(as_json(r#"{"name":"value"}"#).unwrap(), json!({"name": "value"}));
/// assert!(as_json("{ nope}").is_err());
/// ```
pub fn as_json(value: &str) -> AccessorResult<Value> {
    serde_json::from_str(value).map_err(|_| Rejection::new("should be valid (parseable) JSON"))
}

/// Parses a JSON document whose top level is an array.
pub fn as_json_array(value: &str) -> AccessorResult<Vec<Value>> {
    match as_json(value) {
        Ok(Value::Array(items)) => Ok(items),
        _ => Err(Rejection::new("should be a parseable JSON Array")),
    }
}

/// Parses a JSON document whose top level is an object.
pub fn as_json_object(value: &str) -> AccessorResult<Map<String, Value>> {
    match as_json(value) {
        Ok(Value::Object(map)) => Ok(map),
        _ => Err(Rejection::new("should be a parseable JSON Object")),
    }
}

/// Deserializes a JSON document into `T`.
///
/// Malformed JSON gets the same reason as [`as_json`]; well-formed JSON of the
/// wrong shape reports the deserializer's own complaint.
pub fn as_json_typed<T: DeserializeOwned>(value: &str) -> AccessorResult<T> {
    let parsed = as_json(value)?;
    serde_json::from_value(parsed)
        .map_err(|e| Rejection::new(format!("should be JSON matching the expected shape ({})", e)))
}
