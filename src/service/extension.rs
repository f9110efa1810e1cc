// SPDX-License-Identifier: MIT OR Apache-2.0

//! Extra accessors supplied by the caller.
//!
//! A binding can carry named accessor functions next to the built-in ones.
//! Each receives the resolved value (after default substitution, required
//! checks and base64 decoding) together with string arguments given at the
//! call site, and returns a value of any type or a [`Rejection`].
//!
//! Registering a function under the name of a built-in accessor, for example
//! `"as_string"`, replaces that built-in for every variable of the binding.

use crate::domain::accessors::AccessorResult;
use crate::domain::errors::Rejection;
use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Names of the built-in accessors, as used when overriding them.
pub const BUILTIN_ACCESSORS: &[&str] = &[
    "as_array",
    "as_bool",
    "as_bool_strict",
    "as_enum",
    "as_float",
    "as_float_negative",
    "as_float_positive",
    "as_int",
    "as_int_negative",
    "as_int_positive",
    "as_json",
    "as_json_array",
    "as_json_object",
    "as_json_typed",
    "as_port_number",
    "as_regexp",
    "as_string",
    "as_url_object",
    "as_url_string",
];

/// Type-erased extra accessor as stored in the registry.
pub type ExtraAccessor =
    Arc<dyn Fn(&str, &[&str]) -> Result<Box<dyn Any + Send>, Rejection> + Send + Sync>;

/// Registry of extra accessors belonging to one binding.
///
/// # Examples
///
/// ```rust
/// use envcast::domain::accessors;
/// use envcast::domain::Rejection;
/// use envcast::service::Extensions;
///
/// let extensions = Extensions::new().with("as_int_between", |value: &str, args: &[&str]| {
///     let n = accessors::as_int(value)?;
///     let (min, max) = match args {
///         [min, max] => (accessors::as_int(min)?, accessors::as_int(max)?),
///         _ => return Err(Rejection::new("needs a min and a max")),
///     };
///     if n < min || n > max {
///         return Err(Rejection::new(format!(
///             "should be an integer between the range of [{}, {}]",
///             min, max
///         )));
///     }
///     Ok(n)
/// });
///
/// let env = envcast::builder([("INSTANCES", "10")])
///     .with_extensions(extensions)
///     .build();
///
/// let n: Option<i64> = env.get("INSTANCES").call("as_int_between", &["1", "10"]).unwrap();
/// assert_eq!(n, Some(10));
/// ```
#[derive(Clone, Default)]
pub struct Extensions {
    accessors: HashMap<String, ExtraAccessor>,
}

impl Extensions {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `accessor` under `name`, replacing any previous entry.
    pub fn register<T, F>(&mut self, name: impl Into<String>, accessor: F)
    where
        T: Any + Send,
        F: Fn(&str, &[&str]) -> AccessorResult<T> + Send + Sync + 'static,
    {
        let name = name.into();
        if BUILTIN_ACCESSORS.contains(&name.as_str()) {
            tracing::debug!("Extra accessor '{}' overrides the built-in accessor", name);
        }

        let erased: ExtraAccessor = Arc::new(move |value: &str, args: &[&str]| {
            accessor(value, args).map(|v| Box::new(v) as Box<dyn Any + Send>)
        });
        self.accessors.insert(name, erased);
    }

    /// Registers `accessor` under `name` and returns the registry.
    pub fn with<T, F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        T: Any + Send,
        F: Fn(&str, &[&str]) -> AccessorResult<T> + Send + Sync + 'static,
    {
        self.register(name, accessor);
        self
    }

    /// Returns the accessor registered under `name`.
    pub fn get(&self, name: &str) -> Option<&ExtraAccessor> {
        self.accessors.get(name)
    }

    /// Returns `true` if an accessor is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered accessors.
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// Returns `true` if no accessor is registered.
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl fmt::Debug for Extensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Extensions")
            .field("accessors", &self.names())
            .finish()
    }
}
