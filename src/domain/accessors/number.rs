// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integer, float and port number accessors.

use super::AccessorResult;
use crate::domain::errors::Rejection;

/// Highest port number accepted by [`as_port_number`].
pub const MAX_PORT: i64 = 65535;

/// Parses a base-10 integer.
///
/// The value must be the canonical rendering of the integer: fractional
/// components (`"1.2"`), signs such as `"+5"`, leading zeros and surrounding
/// whitespace are all rejected.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_int;
///
/// assert_eq!(as_int("-10").unwrap(), -10);
/// assert!(as_int("1.2").is_err());
/// assert!(as_int("abc").is_err());
/// ```
pub fn as_int(value: &str) -> AccessorResult<i64> {
    match value.parse::<i64>() {
        Ok(n) if n.to_string() == value => Ok(n),
        _ => Err(Rejection::new("should be a valid integer")),
    }
}

/// Parses an integer that is zero or greater.
pub fn as_int_positive(value: &str) -> AccessorResult<i64> {
    let n = as_int(value)?;
    if n < 0 {
        return Err(Rejection::new("should be a positive integer"));
    }
    Ok(n)
}

/// Parses an integer that is strictly below zero.
pub fn as_int_negative(value: &str) -> AccessorResult<i64> {
    let n = as_int(value)?;
    if n >= 0 {
        return Err(Rejection::new("should be a negative integer"));
    }
    Ok(n)
}

/// Parses a floating point number.
///
/// The whole value must be a float: surrounding whitespace or trailing text
/// such as units (`"1.5px"`) is refused. `NaN` is refused; infinities are
/// accepted.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_float;
///
/// assert_eq!(as_float("12.43").unwrap(), 12.43);
/// assert!(as_float("nope").is_err());
/// ```
pub fn as_float(value: &str) -> AccessorResult<f64> {
    match value.parse::<f64>() {
        Ok(n) if !n.is_nan() => Ok(n),
        _ => Err(Rejection::new("should be a valid float")),
    }
}

/// Parses a float that is zero or greater.
pub fn as_float_positive(value: &str) -> AccessorResult<f64> {
    let n = as_float(value)?;
    if n < 0.0 {
        return Err(Rejection::new("should be a positive float"));
    }
    Ok(n)
}

/// Parses a float that is strictly below zero.
pub fn as_float_negative(value: &str) -> AccessorResult<f64> {
    let n = as_float(value)?;
    if n >= 0.0 {
        return Err(Rejection::new("should be a negative float"));
    }
    Ok(n)
}

/// Parses a TCP/UDP port number in the range `0..=65535`.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_port_number;
///
/// assert_eq!(as_port_number("8080").unwrap(), 8080);
/// assert!(as_port_number("-2").is_err());
/// assert!(as_port_number("700000").is_err());
/// ```
pub fn as_port_number(value: &str) -> AccessorResult<u16> {
    let n = as_int_positive(value)?;
    if n > MAX_PORT {
        return Err(Rejection::new(format!(
            "cannot assign a port number greater than {}",
            MAX_PORT
        )));
    }
    // Range checked above.
    Ok(n as u16)
}
