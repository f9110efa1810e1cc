// SPDX-License-Identifier: MIT OR Apache-2.0

//! Default value type with its accepted conversions.
//!
//! A variable's default stands in for the raw value when the source has no
//! entry for the key, so it is always stored as a string. This module provides
//! the `DefaultValue` type and the conversions that decide what may become a
//! default: strings and numbers directly, arrays and objects as their JSON text.

use crate::domain::errors::{EnvVarError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Message raised when a default of an unsupported type is supplied.
pub const INVALID_DEFAULT_MESSAGE: &str =
    "values passed to default() must be of Number, String, Array, or Object type";

/// A default value for a variable, already rendered to its string form.
///
/// # Examples
///
/// ```
/// use envcast::domain::DefaultValue;
///
/// assert_eq!(DefaultValue::from("text").as_str(), "text");
/// assert_eq!(DefaultValue::from(8080).as_str(), "8080");
/// assert_eq!(DefaultValue::from(1.5).as_str(), "1.5");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultValue(String);

impl DefaultValue {
    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Converts a JSON value into a default.
    ///
    /// Strings are kept as-is, numbers are stringified, arrays and objects are
    /// stored as their compact JSON text. `null` and booleans are refused with a
    /// configuration error naming `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use envcast::domain::DefaultValue;
    /// use serde_json::json;
    ///
    /// let value = DefaultValue::from_json("USERS", json!(["luke", "leia"])).unwrap();
    /// assert_eq!(value.as_str(), r#"["luke","leia"]"#);
    ///
    /// assert!(DefaultValue::from_json("USERS", json!(null)).is_err());
    /// ```
    pub fn from_json(key: &str, value: Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(DefaultValue(s)),
            Value::Number(n) => Ok(DefaultValue(n.to_string())),
            Value::Array(_) | Value::Object(_) => Ok(DefaultValue(value.to_string())),
            Value::Null | Value::Bool(_) => {
                Err(EnvVarError::configuration(key, INVALID_DEFAULT_MESSAGE))
            }
        }
    }

    /// Serializes any value and converts the result with [`DefaultValue::from_json`].
    pub fn from_serialize<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<Self> {
        let value = serde_json::to_value(value)
            .map_err(|_| EnvVarError::configuration(key, INVALID_DEFAULT_MESSAGE))?;
        Self::from_json(key, value)
    }
}

impl From<String> for DefaultValue {
    fn from(s: String) -> Self {
        DefaultValue(s)
    }
}

impl From<&str> for DefaultValue {
    fn from(s: &str) -> Self {
        DefaultValue(s.to_string())
    }
}

impl From<&String> for DefaultValue {
    fn from(s: &String) -> Self {
        DefaultValue(s.clone())
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DefaultValue {
                fn from(n: $t) -> Self {
                    DefaultValue(n.to_string())
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<DefaultValue> for String {
    fn from(value: DefaultValue) -> Self {
        value.0
    }
}

impl AsRef<str> for DefaultValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
