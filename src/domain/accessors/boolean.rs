// SPDX-License-Identifier: MIT OR Apache-2.0

//! Boolean accessors.

use super::AccessorResult;
use crate::domain::errors::Rejection;

/// Parses a boolean from `"true"`, `"false"`, `"1"` or `"0"`, ignoring case.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_bool;
///
/// assert_eq!(as_bool("TRUE").unwrap(), true);
/// assert_eq!(as_bool("0").unwrap(), false);
/// assert!(as_bool("yes").is_err());
/// ```
pub fn as_bool(value: &str) -> AccessorResult<bool> {
    match value.to_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(Rejection::new(
            "should be either \"true\", \"false\", \"TRUE\", \"FALSE\", 1, or 0",
        )),
    }
}

/// Parses a boolean from `"true"` or `"false"` only, ignoring case.
pub fn as_bool_strict(value: &str) -> AccessorResult<bool> {
    match value.to_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(Rejection::new(
            "should be either \"true\", \"false\", \"TRUE\", or \"FALSE\"",
        )),
    }
}
