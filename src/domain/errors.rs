// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for variable resolution.
//!
//! Every failure raised by a [`Variable`](crate::service::Variable) is an
//! [`EnvVarError`]. Primitive accessors report failures with the lighter
//! [`Rejection`] type, which the variable turns into a fully formatted
//! [`EnvVarError`] that names the variable, the offending value and the
//! configured example.

use thiserror::Error;

/// Reason given by an accessor when it refuses a value.
///
/// The reason is a short clause such as `should be a valid integer`; it is
/// slotted into the message template of [`EnvVarError`].
///
/// # Examples
///
/// ```
/// use envcast::domain::Rejection;
///
/// let rejection = Rejection::new("should be a valid integer");
/// assert_eq!(rejection.reason(), "should be a valid integer");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct Rejection {
    reason: String,
}

impl Rejection {
    /// Creates a rejection with the given reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Rejection {
            reason: reason.into(),
        }
    }

    /// Returns the reason clause.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// The error type raised by every variable accessor.
///
/// All variants render the same message template:
///
/// `"<name>" <reason>[, but is set to "<value>"][. An example of a valid value would be: <example>]`
///
/// The variant tells which stage failed. It is marked `#[non_exhaustive]` so
/// new failure classes can be added without breaking callers.
///
/// # Examples
///
/// ```
/// use envcast::domain::EnvVarError;
///
/// let env = envcast::from([("PORT", "http")]);
/// let err = env.get("PORT").as_port_number().unwrap_err();
///
/// assert!(matches!(err, EnvVarError::Conversion { .. }));
/// assert_eq!(err.to_string(), r#""PORT" should be a valid integer, but is set to "http""#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EnvVarError {
    /// A builder method or accessor call was given invalid arguments.
    #[error("{message}")]
    Configuration {
        /// The variable being configured
        key: String,
        /// The formatted message
        message: String,
    },

    /// The variable is required but absent or blank.
    #[error("{message}")]
    MissingRequired {
        /// The variable that was required
        key: String,
        /// The formatted message
        message: String,
    },

    /// The value was flagged as base64 but is not valid base64.
    #[error("{message}")]
    Decode {
        /// The variable being decoded
        key: String,
        /// The formatted message
        message: String,
    },

    /// An accessor rejected the value.
    #[error("{message}")]
    Conversion {
        /// The variable being converted
        key: String,
        /// The formatted message
        message: String,
        /// The accessor's own rejection
        #[source]
        source: Rejection,
    },
}

impl EnvVarError {
    /// Creates a configuration error carrying `message` verbatim.
    pub fn configuration(key: impl Into<String>, message: impl Into<String>) -> Self {
        EnvVarError::Configuration {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Creates a missing-required error.
    pub fn missing_required(key: &str, reason: &str, example: Option<&str>) -> Self {
        EnvVarError::MissingRequired {
            key: key.to_string(),
            message: format_message(key, reason, None, example),
        }
    }

    /// Creates a decode error for a value that is not valid base64.
    pub fn decode(key: &str, rejection: &Rejection, value: &str, example: Option<&str>) -> Self {
        EnvVarError::Decode {
            key: key.to_string(),
            message: format_message(key, rejection.reason(), Some(value), example),
        }
    }

    /// Creates a conversion error from an accessor's rejection.
    pub fn conversion(key: &str, rejection: Rejection, value: &str, example: Option<&str>) -> Self {
        EnvVarError::Conversion {
            key: key.to_string(),
            message: format_message(key, rejection.reason(), Some(value), example),
            source: rejection,
        }
    }

    /// Returns the formatted message.
    pub fn message(&self) -> &str {
        match self {
            EnvVarError::Configuration { message, .. }
            | EnvVarError::MissingRequired { message, .. }
            | EnvVarError::Decode { message, .. }
            | EnvVarError::Conversion { message, .. } => message,
        }
    }

    /// Returns the name of the variable the error is about.
    pub fn key(&self) -> &str {
        match self {
            EnvVarError::Configuration { key, .. }
            | EnvVarError::MissingRequired { key, .. }
            | EnvVarError::Decode { key, .. }
            | EnvVarError::Conversion { key, .. } => key,
        }
    }
}

/// Renders the message template shared by all resolution errors.
pub(crate) fn format_message(
    key: &str,
    reason: &str,
    value: Option<&str>,
    example: Option<&str>,
) -> String {
    let mut message = format!("\"{}\" {}", key, reason);

    if let Some(value) = value {
        message.push_str(&format!(", but is set to \"{}\"", value));
    }

    append_example(&mut message, example);
    message
}

/// Appends the example clause to `message` when an example is set.
pub(crate) fn append_example(message: &mut String, example: Option<&str>) {
    if let Some(example) = example {
        message.push_str(&format!(
            ". An example of a valid value would be: {}",
            example
        ));
    }
}

/// A specialized Result type for variable resolution.
pub type Result<T> = std::result::Result<T, EnvVarError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_format_message_reason_only() {
        assert_eq!(
            format_message("PORT", "is a required variable, but it was not set", None, None),
            "\"PORT\" is a required variable, but it was not set"
        );
    }

    #[test]
    fn test_format_message_with_value_and_example() {
        assert_eq!(
            format_message("PORT", "should be a valid integer", Some("abc"), Some("8080")),
            "\"PORT\" should be a valid integer, but is set to \"abc\". An example of a valid value would be: 8080"
        );
    }

    #[test]
    fn test_format_message_example_without_value() {
        let message = format_message("HOST", "is a required variable, but it was not set", None, Some("localhost"));
        assert!(message.ends_with(". An example of a valid value would be: localhost"));
        assert!(!message.contains("but is set to"));
    }

    #[test]
    fn test_missing_required_error() {
        let error = EnvVarError::missing_required("HOST", "is a required variable, but it was not set", None);
        assert!(matches!(error, EnvVarError::MissingRequired { .. }));
        assert_eq!(error.key(), "HOST");
        assert_eq!(error.to_string(), error.message());
    }

    #[test]
    fn test_conversion_error_keeps_source() {
        let rejection = Rejection::new("should be a valid float");
        let error = EnvVarError::conversion("RATIO", rejection.clone(), "x", None);
        assert_eq!(error.to_string(), "\"RATIO\" should be a valid float, but is set to \"x\"");
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), rejection.reason());
    }

    #[test]
    fn test_decode_error() {
        let rejection = Rejection::new("should be a valid base64 string if using convertFromBase64");
        let error = EnvVarError::decode("SECRET", &rejection, "a|b", None);
        assert!(matches!(error, EnvVarError::Decode { .. }));
        assert_eq!(
            error.to_string(),
            "\"SECRET\" should be a valid base64 string if using convertFromBase64, but is set to \"a|b\""
        );
    }

    #[test]
    fn test_configuration_error_is_verbatim() {
        let error = EnvVarError::configuration("X", "bad arguments");
        assert_eq!(error.to_string(), "bad arguments");
        assert_eq!(error.key(), "X");
    }
}
