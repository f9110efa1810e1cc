// SPDX-License-Identifier: MIT OR Apache-2.0

//! Variable reader.
//!
//! A `Variable` is handed out by [`EnvVars::get`](crate::service::EnvVars::get).
//! It is configured with chained calls (`required`, `default`, `example`,
//! `convert_from_base64`) and then read with one or more terminal accessors
//! such as `as_int` or `as_url_object`. Each terminal call resolves the value
//! afresh:
//!
//! 1. look the name up in the bound source;
//! 2. fall back to the default when there is no entry;
//! 3. with neither, fail if required, otherwise return `Ok(None)`;
//! 4. if required, fail on a blank value;
//! 5. decode base64 if requested;
//! 6. run the accessor and wrap its rejection into an [`EnvVarError`].

use crate::domain::accessors::{self, AccessorResult};
use crate::domain::errors::{append_example, format_message, EnvVarError, Rejection, Result};
use crate::domain::DefaultValue;
use crate::service::binding::EnvVars;
use crate::service::extension::{ExtraAccessor, BUILTIN_ACCESSORS};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::any::{type_name, Any};

const NOT_SET_REASON: &str = "is a required variable, but it was not set";
const EMPTY_REASON: &str = "is a required variable, but its value was empty";

/// Reader for a single variable of a binding.
///
/// Configuration methods consume and return the reader; terminal accessors
/// borrow it, so several can be called on one configured reader.
///
/// Every terminal accessor returns:
///
/// - `Ok(Some(value))` when the value was found (or defaulted) and converted;
/// - `Ok(None)` when the variable is absent, has no default and is not required;
/// - `Err(EnvVarError)` otherwise.
///
/// # Examples
///
/// ```rust
/// # fn main() -> envcast::domain::Result<()> {
/// let env = envcast::from([("PORT", "8080"), ("SECRET", "aGVsbG8=")]);
///
/// assert_eq!(env.get("PORT").required().as_port_number()?, Some(8080));
/// assert_eq!(env.get("WORKERS").default(4).as_int_positive()?, Some(4));
/// assert_eq!(env.get("SECRET").convert_from_base64().as_string()?.as_deref(), Some("hello"));
/// assert_eq!(env.get("MISSING").as_bool()?, None);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Variable<'a> {
    binding: &'a EnvVars,
    name: String,
    required: Option<bool>,
    default: Option<DefaultValue>,
    example: Option<String>,
    base64: bool,
}

impl<'a> Variable<'a> {
    pub(crate) fn new(binding: &'a EnvVars, name: String) -> Self {
        Self {
            binding,
            name,
            required: None,
            default: None,
            example: None,
            base64: false,
        }
    }

    /// Returns the name of the variable.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns `true` if the variable is currently marked as required.
    pub fn is_required(&self) -> bool {
        self.required == Some(true)
    }

    /// Marks the variable as required.
    ///
    /// Terminal accessors then fail when the value is absent (and has no
    /// default) or is empty or whitespace only.
    pub fn required(self) -> Self {
        self.required_if(true)
    }

    /// Marks the variable as required or not; the last call wins.
    ///
    /// `required_if(false)` turns the check off even after `required()`.
    pub fn required_if(mut self, required: bool) -> Self {
        self.log(if required {
            "marking variable as required"
        } else {
            "marking variable as not required"
        });
        self.required = Some(required);
        self
    }

    /// Sets the value used when the source has no entry for the variable.
    ///
    /// Accepts strings and numbers; see [`Variable::default_json`] for arrays
    /// and objects.
    pub fn default(mut self, value: impl Into<DefaultValue>) -> Self {
        let value = value.into();
        self.log(&format!("setting default value to \"{}\"", value));
        self.default = Some(value);
        self
    }

    /// Sets the default from a JSON value.
    ///
    /// Strings and numbers are used as their text, arrays and objects as their
    /// JSON text. `null` and booleans fail immediately with a configuration
    /// error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_json::json;
    ///
    /// let env = envcast::from([("UNRELATED", "")]);
    /// assert!(env.get("X").try_default(json!(null)).is_err());
    ///
    /// let users = env.get("USERNAMES")
    ///     .try_default(json!(["luke", "leia"]))
    ///     .unwrap()
    ///     .as_json_array()
    ///     .unwrap();
    /// assert_eq!(users.map(|u| u.len()), Some(2));
    /// ```
    pub fn try_default(self, value: Value) -> Result<Self> {
        let value = DefaultValue::from_json(&self.name, value)
            .map_err(|err| self.invalid_default(err))?;
        Ok(self.default(value))
    }

    /// Sets the default by serializing `value` to JSON.
    ///
    /// Follows the rules of [`Variable::try_default`].
    pub fn default_json<T: Serialize + ?Sized>(self, value: &T) -> Result<Self> {
        let value = DefaultValue::from_serialize(&self.name, value)
            .map_err(|err| self.invalid_default(err))?;
        Ok(self.default(value))
    }

    /// Sets an example value appended to every error message of this reader.
    pub fn example(mut self, example: impl Into<String>) -> Self {
        let example = example.into();
        self.log(&format!("adding example value \"{}\" to error messages", example));
        self.example = Some(example);
        self
    }

    /// Decodes the value from base64 before it reaches the accessor.
    pub fn convert_from_base64(mut self) -> Self {
        self.log("marking for base64 conversion");
        self.base64 = true;
        self
    }

    /// Returns `true` if `name` can be passed to [`Variable::call`] or names a
    /// built-in accessor.
    pub fn has_accessor(&self, name: &str) -> bool {
        BUILTIN_ACCESSORS.contains(&name) || self.binding.extensions().contains(name)
    }

    /// Returns the value unchanged.
    pub fn as_string(&self) -> Result<Option<String>> {
        self.apply("as_string", &[], accessors::as_string)
    }

    /// Reads a base-10 integer; `"1.2"` and `"abc"` are rejected.
    pub fn as_int(&self) -> Result<Option<i64>> {
        self.apply("as_int", &[], accessors::as_int)
    }

    /// Reads an integer that is zero or greater.
    pub fn as_int_positive(&self) -> Result<Option<i64>> {
        self.apply("as_int_positive", &[], accessors::as_int_positive)
    }

    /// Reads an integer below zero.
    pub fn as_int_negative(&self) -> Result<Option<i64>> {
        self.apply("as_int_negative", &[], accessors::as_int_negative)
    }

    /// Reads a floating point number.
    pub fn as_float(&self) -> Result<Option<f64>> {
        self.apply("as_float", &[], accessors::as_float)
    }

    /// Reads a float that is zero or greater.
    pub fn as_float_positive(&self) -> Result<Option<f64>> {
        self.apply("as_float_positive", &[], accessors::as_float_positive)
    }

    /// Reads a float below zero.
    pub fn as_float_negative(&self) -> Result<Option<f64>> {
        self.apply("as_float_negative", &[], accessors::as_float_negative)
    }

    /// Reads a port number between 0 and 65535.
    pub fn as_port_number(&self) -> Result<Option<u16>> {
        self.apply("as_port_number", &[], accessors::as_port_number)
    }

    /// Reads `true`/`false`/`1`/`0`, ignoring case.
    pub fn as_bool(&self) -> Result<Option<bool>> {
        self.apply("as_bool", &[], accessors::as_bool)
    }

    /// Reads `true`/`false` only, ignoring case.
    pub fn as_bool_strict(&self) -> Result<Option<bool>> {
        self.apply("as_bool_strict", &[], accessors::as_bool_strict)
    }

    /// Parses the value as JSON.
    pub fn as_json(&self) -> Result<Option<Value>> {
        self.apply("as_json", &[], accessors::as_json)
    }

    /// Parses the value as a JSON array.
    pub fn as_json_array(&self) -> Result<Option<Vec<Value>>> {
        self.apply("as_json_array", &[], accessors::as_json_array)
    }

    /// Parses the value as a JSON object.
    pub fn as_json_object(&self) -> Result<Option<Map<String, Value>>> {
        self.apply("as_json_object", &[], accessors::as_json_object)
    }

    /// Parses the value as JSON and deserializes it into `T`.
    pub fn as_json_typed<T: DeserializeOwned + Any + Send>(&self) -> Result<Option<T>> {
        self.apply("as_json_typed", &[], accessors::as_json_typed::<T>)
    }

    /// Splits the value on commas, dropping empty segments.
    pub fn as_array(&self) -> Result<Option<Vec<String>>> {
        self.as_array_by(accessors::text::DEFAULT_DELIMITER)
    }

    /// Splits the value on `delimiter`, dropping empty segments.
    pub fn as_array_by(&self, delimiter: &str) -> Result<Option<Vec<String>>> {
        self.apply("as_array", &[delimiter], |value| {
            accessors::as_array(value, delimiter)
        })
    }

    /// Checks the value is one of `valid_values`.
    pub fn as_enum<S: AsRef<str>>(&self, valid_values: &[S]) -> Result<Option<String>> {
        let args: Vec<&str> = valid_values.iter().map(AsRef::as_ref).collect();
        self.apply("as_enum", &args, |value| {
            accessors::as_enum(value, valid_values)
        })
    }

    /// Validates the value as a URL and returns it unchanged.
    #[cfg(feature = "url")]
    pub fn as_url_string(&self) -> Result<Option<String>> {
        self.apply("as_url_string", &[], accessors::as_url_string)
    }

    /// Parses the value as a URL.
    #[cfg(feature = "url")]
    pub fn as_url_object(&self) -> Result<Option<url::Url>> {
        self.apply("as_url_object", &[], accessors::as_url_object)
    }

    /// Compiles the value as a regular expression with optional `flags`.
    #[cfg(feature = "regexp")]
    pub fn as_regexp(&self, flags: Option<&str>) -> Result<Option<regex::Regex>> {
        let args: Vec<&str> = flags.into_iter().collect();
        self.apply("as_regexp", &args, |value| accessors::as_regexp(value, flags))
    }

    /// Runs the extra accessor registered as `accessor` with `args`.
    ///
    /// Fails with a configuration error when the binding has no such accessor
    /// or when it produces something other than `T`. Built-in names work too
    /// when they have been overridden on the binding.
    pub fn call<T: Any + Send>(&self, accessor: &str, args: &[&str]) -> Result<Option<T>> {
        match self.binding.extension(accessor) {
            Some(extra) => self.run_extra(accessor, extra, args),
            None => Err(self.configuration_error(&format!(
                "has no accessor named \"{}\"",
                accessor
            ))),
        }
    }

    /// Runs a built-in accessor, or the binding's override of it.
    fn apply<T, F>(&self, accessor: &str, args: &[&str], builtin: F) -> Result<Option<T>>
    where
        T: Any + Send,
        F: FnOnce(&str) -> AccessorResult<T>,
    {
        if let Some(extra) = self.binding.extension(accessor) {
            return self.run_extra(accessor, extra, args);
        }

        let Some(value) = self.resolve()? else {
            return Ok(None);
        };

        self.log(&format!("passing value to \"{}\" accessor", accessor));
        builtin(&value)
            .map(Some)
            .map_err(|rejection| self.conversion_error(rejection, &value))
    }

    fn run_extra<T: Any + Send>(
        &self,
        accessor: &str,
        extra: &ExtraAccessor,
        args: &[&str],
    ) -> Result<Option<T>> {
        let Some(value) = self.resolve()? else {
            return Ok(None);
        };

        self.log(&format!("passing value to extra accessor \"{}\"", accessor));
        let output = extra(&value, args)
            .map_err(|rejection| self.conversion_error(rejection, &value))?;

        match output.downcast::<T>() {
            Ok(converted) => Ok(Some(*converted)),
            Err(_) => Err(self.configuration_error(&format!(
                "accessor \"{}\" does not produce a value of type {}",
                accessor,
                type_name::<T>()
            ))),
        }
    }

    /// Produces the value an accessor should see, or `None` when there is
    /// nothing to convert.
    fn resolve(&self) -> Result<Option<String>> {
        let value = match (self.binding.raw(&self.name), &self.default) {
            (Some(raw), _) => raw,
            (None, Some(default)) => {
                self.log("was not found in the environment, using the default value");
                default.as_str().to_string()
            }
            (None, None) => {
                if self.is_required() {
                    return Err(EnvVarError::missing_required(
                        &self.name,
                        NOT_SET_REASON,
                        self.example.as_deref(),
                    ));
                }
                self.log("was not found and has no default value, returning none");
                return Ok(None);
            }
        };

        if self.is_required() && value.trim().is_empty() {
            return Err(EnvVarError::missing_required(
                &self.name,
                EMPTY_REASON,
                self.example.as_deref(),
            ));
        }

        if !self.base64 {
            return Ok(Some(value));
        }

        self.log("converting from base64 to utf8 string");
        accessors::decode_base64(&value).map(Some).map_err(|rejection| {
            EnvVarError::decode(&self.name, &rejection, &value, self.example.as_deref())
        })
    }

    fn conversion_error(&self, rejection: Rejection, value: &str) -> EnvVarError {
        EnvVarError::conversion(&self.name, rejection, value, self.example.as_deref())
    }

    fn configuration_error(&self, reason: &str) -> EnvVarError {
        EnvVarError::configuration(
            &self.name,
            format_message(&self.name, reason, None, self.example.as_deref()),
        )
    }

    fn invalid_default(&self, err: EnvVarError) -> EnvVarError {
        let mut message = err.message().to_string();
        append_example(&mut message, self.example.as_deref());
        EnvVarError::configuration(&self.name, message)
    }

    fn log(&self, message: &str) {
        self.binding.log(&self.name, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn env() -> EnvVars {
        EnvVars::new([
            ("VALID_BASE_64", "aGVsbG8="),
            ("INVALID_BASE_64", "a|GV-sb*G8="),
            ("STRING", "oh hai"),
            ("FLOAT", "12.43"),
            ("INTEGER", "5"),
            ("BOOL", "false"),
            ("JSON", r#"{"name":"value"}"#),
            ("JSON_ARRAY", "[1,2,3]"),
            ("COMMA_ARRAY", "1,2,3"),
            ("EMPTY", ""),
            ("BLANK", "   "),
            ("URL", "http://google.com/"),
            ("ENUM", "VALID"),
        ])
    }

    #[test]
    fn test_absent_not_required_is_none() {
        let env = env();
        let var = env.get("NOPE");
        assert_eq!(var.as_string().unwrap(), None);
        assert_eq!(var.as_int().unwrap(), None);
        assert_eq!(var.as_json_array().unwrap(), None);
        assert_eq!(var.as_array().unwrap(), None);
    }

    #[test]
    fn test_absent_required_fails() {
        let env = env();
        let err = env.get("NOPE").required().as_string().unwrap_err();
        assert!(matches!(err, EnvVarError::MissingRequired { .. }));
        assert_eq!(err.to_string(), "\"NOPE\" is a required variable, but it was not set");
    }

    #[test]
    fn test_required_if_false_disables_check() {
        let env = env();
        let var = env.get("NOPE").required().required_if(false);
        assert!(!var.is_required());
        assert_eq!(var.as_json().unwrap(), None);
    }

    #[test]
    fn test_required_empty_and_blank_fail() {
        let env = env();
        for name in ["EMPTY", "BLANK"] {
            let err = env.get(name).required().as_string().unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("\"{}\" is a required variable, but its value was empty", name)
            );
        }
    }

    #[test]
    fn test_empty_not_required_is_passed_through() {
        let env = env();
        assert_eq!(env.get("EMPTY").as_string().unwrap().as_deref(), Some(""));
        assert_eq!(env.get("EMPTY").as_array().unwrap(), Some(vec![]));
    }

    #[test]
    fn test_default_used_when_absent() {
        let env = env();
        assert_eq!(
            env.get("XXX_NOT_DEFINED").default("default").as_string().unwrap().as_deref(),
            Some("default")
        );
        assert_eq!(env.get("XXX_NOT_DEFINED").default(42).as_int().unwrap(), Some(42));
    }

    #[test]
    fn test_default_ignored_when_present() {
        let env = env();
        assert_eq!(env.get("INTEGER").default(42).as_int().unwrap(), Some(5));
    }

    #[test]
    fn test_empty_default_with_required_fails() {
        let env = env();
        let err = env.get("X").default("").required().as_string().unwrap_err();
        assert!(matches!(err, EnvVarError::MissingRequired { .. }));
    }

    #[test]
    fn test_try_default_rejects_null() {
        let env = env();
        let err = env.get("X").try_default(json!(null)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "values passed to default() must be of Number, String, Array, or Object type"
        );
    }

    #[test]
    fn test_try_default_error_includes_example() {
        let env = env();
        let err = env
            .get("X")
            .example("ex")
            .try_default(json!(false))
            .unwrap_err();
        assert!(matches!(err, EnvVarError::Configuration { .. }));
        assert_eq!(err.key(), "X");
        assert_eq!(
            err.to_string(),
            "values passed to default() must be of Number, String, Array, or Object type. An example of a valid value would be: ex"
        );
    }

    #[test]
    fn test_default_json_object() {
        let env = env();
        let object = env
            .get("X")
            .default_json(&json!({"a": 1}))
            .unwrap()
            .as_json_object()
            .unwrap()
            .unwrap();
        assert_eq!(object.get("a"), Some(&json!(1)));
    }

    #[test]
    fn test_base64() {
        let env = env();
        assert_eq!(
            env.get("VALID_BASE_64").convert_from_base64().as_string().unwrap().as_deref(),
            Some("hello")
        );
    }

    #[test]
    fn test_base64_invalid() {
        let env = env();
        let err = env
            .get("INVALID_BASE_64")
            .convert_from_base64()
            .as_string()
            .unwrap_err();
        assert!(matches!(err, EnvVarError::Decode { .. }));
        assert_eq!(
            err.to_string(),
            "\"INVALID_BASE_64\" should be a valid base64 string if using convertFromBase64, but is set to \"a|GV-sb*G8=\""
        );
    }

    #[test]
    fn test_conversion_error_message() {
        let env = env();
        let err = env.get("STRING").as_int().unwrap_err();
        assert!(matches!(err, EnvVarError::Conversion { .. }));
        assert_eq!(
            err.to_string(),
            "\"STRING\" should be a valid integer, but is set to \"oh hai\""
        );
    }

    #[test]
    fn test_example_appended_to_every_failure() {
        let env = env();
        let suffix = ". An example of a valid value would be: 8080";

        let missing = env.get("NOPE").required().example("8080").as_int().unwrap_err();
        let conversion = env.get("STRING").example("8080").as_int().unwrap_err();
        let decode = env
            .get("INVALID_BASE_64")
            .example("8080")
            .convert_from_base64()
            .as_int()
            .unwrap_err();
        let unknown = env.get("STRING").example("8080").call::<i64>("as_nothing", &[]).unwrap_err();

        for err in [missing, conversion, decode, unknown] {
            assert!(err.to_string().ends_with(suffix), "{}", err);
        }
    }

    #[test]
    fn test_multiple_terminal_calls_on_one_reader() {
        let env = env();
        let var = env.get("INTEGER").required();
        assert_eq!(var.as_int().unwrap(), Some(5));
        assert_eq!(var.as_float().unwrap(), Some(5.0));
        assert_eq!(var.as_string().unwrap().as_deref(), Some("5"));
    }

    #[test]
    fn test_enum() {
        let env = env();
        assert_eq!(env.get("ENUM").as_enum(&["VALID"]).unwrap().as_deref(), Some("VALID"));
        assert_eq!(
            env.get("ENUM").as_enum(&["INVALID"]).unwrap_err().to_string(),
            "\"ENUM\" should be one of [INVALID], but is set to \"VALID\""
        );
    }

    #[test]
    fn test_array_by_delimiter() {
        let env = EnvVars::new([("DASH_ARRAY", "1-2-3")]);
        assert_eq!(
            env.get("DASH_ARRAY").as_array_by("-").unwrap(),
            Some(vec!["1".to_string(), "2".to_string(), "3".to_string()])
        );
    }

    #[test]
    fn test_extra_accessor_not_invoked_for_absent_value() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let env = EnvVars::builder([("PRESENT", "x")])
            .with_accessor("as_counted", move |value: &str, _: &[&str]| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(value.len())
            })
            .build();

        assert_eq!(env.get("ABSENT").call::<usize>("as_counted", &[]).unwrap(), None);
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert_eq!(env.get("PRESENT").call::<usize>("as_counted", &[]).unwrap(), Some(1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_extra_accessor_sees_decoded_value_and_args() {
        let env = EnvVars::builder([("SECRET", "aGVsbG8=")])
            .with_accessor("as_tagged", |value: &str, args: &[&str]| {
                Ok(format!("{}{}", args.concat(), value))
            })
            .build();

        let tagged: Option<String> = env
            .get("SECRET")
            .convert_from_base64()
            .call("as_tagged", &["<", ">"])
            .unwrap();
        assert_eq!(tagged.as_deref(), Some("<>hello"));
    }

    #[test]
    fn test_extra_accessor_rejection_is_wrapped() {
        let env = EnvVars::builder([("N", "0")])
            .with_accessor("as_nonzero", |value: &str, _: &[&str]| {
                let n = accessors::as_int(value)?;
                if n == 0 {
                    return Err(Rejection::new("should not be zero"));
                }
                Ok(n)
            })
            .build();

        let err = env.get("N").call::<i64>("as_nonzero", &[]).unwrap_err();
        assert!(matches!(err, EnvVarError::Conversion { .. }));
        assert_eq!(err.to_string(), "\"N\" should not be zero, but is set to \"0\"");
    }

    #[test]
    fn test_call_wrong_type_is_configuration_error() {
        let env = EnvVars::builder([("A", "1")])
            .with_accessor("as_len", |value: &str, _: &[&str]| Ok(value.len()))
            .build();

        let err = env.get("A").call::<String>("as_len", &[]).unwrap_err();
        assert!(matches!(err, EnvVarError::Configuration { .. }));
        assert!(err.to_string().contains("does not produce a value of type"));
    }

    #[test]
    fn test_call_unknown_accessor() {
        let env = env();
        let err = env.get("NOPE").call::<String>("as_null", &[]).unwrap_err();
        assert!(matches!(err, EnvVarError::Configuration { .. }));
        assert_eq!(err.to_string(), "\"NOPE\" has no accessor named \"as_null\"");
    }

    #[test]
    fn test_override_builtin() {
        let env = EnvVars::builder([("STRING", "Hello, world!")])
            .with_accessor("as_string", |value: &str, _: &[&str]| {
                Ok(value.chars().rev().collect::<String>())
            })
            .build();

        assert_eq!(
            env.get("STRING").as_string().unwrap().as_deref(),
            Some("!dlrow ,olleH")
        );
    }

    #[test]
    fn test_override_receives_builtin_args() {
        let env = EnvVars::builder([("LIST", "a;b")])
            .with_accessor("as_array", |value: &str, args: &[&str]| {
                Ok(value.split(args[0]).map(str::to_uppercase).collect::<Vec<_>>())
            })
            .build();

        assert_eq!(
            env.get("LIST").as_array_by(";").unwrap(),
            Some(vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn test_has_accessor() {
        let env = EnvVars::builder([("A", "1")])
            .with_accessor("as_shout", |value: &str, _: &[&str]| Ok(value.to_uppercase()))
            .build();
        let var = env.get("A");
        assert!(var.has_accessor("as_shout"));
        assert!(var.has_accessor("as_int"));
        assert!(!var.has_accessor("as_null"));
    }

    #[test]
    fn test_logging_trace() {
        let lines = Arc::new(std::sync::Mutex::new(Vec::new()));
        let captured = Arc::clone(&lines);
        let env = EnvVars::builder([("A", "1")])
            .with_logger(Arc::new(move |key: &str, message: &str| {
                captured.lock().unwrap().push(format!("{}: {}", key, message));
            }))
            .build();

        let _ = env.get("B").default("2").as_int().unwrap();
        let lines = lines.lock().unwrap();
        assert_eq!(lines[0], "B: will be read from the environment");
        assert!(lines.iter().any(|l| l.contains("using the default value")));
        assert!(lines.iter().any(|l| l.contains("\"as_int\"")));
    }

    #[test]
    fn test_builtin_runs_once_per_call() {
        let runs = Cell::new(0);
        let env = env();
        let var = env.get("INTEGER");
        let out = var
            .apply("as_probe", &[], |value| {
                runs.set(runs.get() + 1);
                accessors::as_int(value)
            })
            .unwrap();
        assert_eq!(out, Some(5));
        assert_eq!(runs.get(), 1);
    }

    #[cfg(feature = "url")]
    #[test]
    fn test_url_accessors() {
        let env = env();
        assert_eq!(
            env.get("URL").as_url_string().unwrap().as_deref(),
            Some("http://google.com/")
        );
        assert_eq!(
            env.get("STRING").as_url_object().unwrap_err().to_string(),
            "\"STRING\" should be a valid URL, but is set to \"oh hai\""
        );
    }

    #[cfg(feature = "regexp")]
    #[test]
    fn test_regexp_accessor() {
        let env = EnvVars::new([("PATTERN", "^a+$"), ("BAD", "(")]);
        let re = env.get("PATTERN").as_regexp(Some("i")).unwrap().unwrap();
        assert!(re.is_match("AAA"));
        assert_eq!(
            env.get("BAD").as_regexp(None).unwrap_err().to_string(),
            "\"BAD\" should be a valid regexp, but is set to \"(\""
        );
        assert!(env
            .get("PATTERN")
            .as_regexp(Some("z"))
            .unwrap_err()
            .to_string()
            .contains("invalid regexp flags"));
    }
}
