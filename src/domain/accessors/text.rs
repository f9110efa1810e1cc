// SPDX-License-Identifier: MIT OR Apache-2.0

//! String, delimited array and enumeration accessors.

use super::AccessorResult;
use crate::domain::errors::Rejection;

/// Delimiter used by `as_array` when none is given.
pub const DEFAULT_DELIMITER: &str = ",";

/// Returns the value unchanged.
pub fn as_string(value: &str) -> AccessorResult<String> {
    Ok(value.to_string())
}

/// Splits the value on `delimiter`, dropping empty segments.
///
/// An empty value yields an empty list, and leading or trailing delimiters
/// do not produce empty elements.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_array;
///
/// assert_eq!(as_array("1,2,3", ",").unwrap(), vec!["1", "2", "3"]);
/// assert_eq!(as_array(",value", ",").unwrap(), vec!["value"]);
/// assert!(as_array("", ",").unwrap().is_empty());
/// ```
pub fn as_array(value: &str, delimiter: &str) -> AccessorResult<Vec<String>> {
    if value.is_empty() {
        return Ok(Vec::new());
    }

    Ok(value
        .split(delimiter)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect())
}

/// Checks the value is one of `valid_values` (exact, case-sensitive match).
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_enum;
///
/// assert_eq!(as_enum("VALID", &["VALID"]).unwrap(), "VALID");
/// assert_eq!(
///     as_enum("VALID", &["INVALID"]).unwrap_err().reason(),
///     "should be one of [INVALID]"
/// );
/// ```
pub fn as_enum<S: AsRef<str>>(value: &str, valid_values: &[S]) -> AccessorResult<String> {
    if valid_values.iter().any(|v| v.as_ref() == value) {
        return Ok(value.to_string());
    }

    let listed: Vec<&str> = valid_values.iter().map(AsRef::as_ref).collect();
    Err(Rejection::new(format!(
        "should be one of [{}]",
        listed.join(", ")
    )))
}
