// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source binding.
//!
//! This module provides `EnvVars`, which pairs a variable source with the
//! extra accessors and log sink that every `Variable` it hands out will use.

use crate::domain::accessors::AccessorResult;
use crate::ports::{LogSink, VarSource};
use crate::service::extension::{ExtraAccessor, Extensions};
use crate::service::variable::Variable;
use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// A variable source bound to the accessor engine.
///
/// Bindings are independent of each other: extra accessors and the log sink
/// registered on one are never visible through another, even when both read
/// the same source.
///
/// # Examples
///
/// ```rust
/// use envcast::service::EnvVars;
///
/// # fn main() -> envcast::domain::Result<()> {
/// let env = EnvVars::new([("A_BOOL", "true"), ("A_STRING", "blah")]);
///
/// assert_eq!(env.get("A_BOOL").required().as_bool()?, Some(true));
/// assert_eq!(env.get("DONTEXIST").as_string()?, None);
/// # Ok(())
/// # }
/// ```
pub struct EnvVars {
    /// Where raw values are read from
    source: Arc<dyn VarSource>,
    /// Extra accessors available on every variable of this binding
    extensions: Extensions,
    /// Optional diagnostic sink
    logger: Option<LogSink>,
}

impl EnvVars {
    /// Binds `source` with no extra accessors and no log sink.
    pub fn new(source: impl VarSource + 'static) -> Self {
        Self::builder(source).build()
    }

    /// Creates a builder for a binding over `source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envcast::service::EnvVars;
    ///
    /// let env = EnvVars::builder([("STRING", "Hello, world!")])
    ///     .with_accessor("as_shout", |value: &str, _: &[&str]| Ok(value.to_uppercase()))
    ///     .build();
    ///
    /// let shout: Option<String> = env.get("STRING").call("as_shout", &[]).unwrap();
    /// assert_eq!(shout.as_deref(), Some("HELLO, WORLD!"));
    /// ```
    pub fn builder(source: impl VarSource + 'static) -> EnvVarsBuilder {
        EnvVarsBuilder::new(source)
    }

    /// Returns a variable reader for `name`.
    pub fn get(&self, name: impl Into<String>) -> Variable<'_> {
        let name = name.into();
        self.log(&name, "will be read from the environment");
        Variable::new(self, name)
    }

    /// Returns every entry of the bound source.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.source.entries().into_iter().collect()
    }

    /// Returns the name of the bound source.
    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Returns the extra accessors of this binding.
    pub fn extensions(&self) -> &Extensions {
        &self.extensions
    }

    pub(crate) fn raw(&self, key: &str) -> Option<String> {
        self.source.get(key)
    }

    pub(crate) fn extension(&self, name: &str) -> Option<&ExtraAccessor> {
        self.extensions.get(name)
    }

    pub(crate) fn log(&self, key: &str, message: &str) {
        tracing::trace!(source = self.source.name(), key, "{}", message);
        if let Some(logger) = &self.logger {
            logger(key, message);
        }
    }
}

impl fmt::Debug for EnvVars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVars")
            .field("source", &self.source.name())
            .field("extensions", &self.extensions)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// Builder for constructing an `EnvVars` binding.
///
/// # Examples
///
/// ```rust
/// use envcast::service::{logger, EnvVarsBuilder};
///
/// let env = EnvVarsBuilder::new([("HOME", "/home/user")])
///     .with_logger(logger::tracing_logger(None))
///     .build();
///
/// assert_eq!(env.get("HOME").as_string().unwrap().as_deref(), Some("/home/user"));
/// ```
pub struct EnvVarsBuilder {
    source: Arc<dyn VarSource>,
    extensions: Extensions,
    logger: Option<LogSink>,
}

impl EnvVarsBuilder {
    /// Creates a new builder over `source`.
    pub fn new(source: impl VarSource + 'static) -> Self {
        Self {
            source: Arc::new(source),
            extensions: Extensions::new(),
            logger: None,
        }
    }

    /// Adds an extra accessor.
    ///
    /// Using the name of a built-in accessor replaces the built-in for this
    /// binding.
    pub fn with_accessor<T, F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        T: Any + Send,
        F: Fn(&str, &[&str]) -> AccessorResult<T> + Send + Sync + 'static,
    {
        self.extensions.register(name, accessor);
        self
    }

    /// Replaces the extra accessors with `extensions`.
    pub fn with_extensions(mut self, extensions: Extensions) -> Self {
        self.extensions = extensions;
        self
    }

    /// Sets the diagnostic sink.
    pub fn with_logger(mut self, logger: LogSink) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Builds the binding.
    pub fn build(self) -> EnvVars {
        tracing::debug!(
            "Binding source '{}' with {} extra accessor(s)",
            self.source.name(),
            self.extensions.len()
        );

        EnvVars {
            source: self.source,
            extensions: self.extensions,
            logger: self.logger,
        }
    }
}

impl fmt::Debug for EnvVarsBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvVarsBuilder")
            .field("source", &self.source.name())
            .field("extensions", &self.extensions)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}
