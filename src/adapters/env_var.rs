// SPDX-License-Identifier: MIT OR Apache-2.0

//! Process environment source adapter.
//!
//! This module provides an adapter that reads variables from a snapshot of the
//! process environment.

use crate::ports::VarSource;
use std::collections::HashMap;
use std::env;

/// Variable source backed by the process environment.
///
/// The environment is captured when the adapter is created; later changes to
/// the process environment are not observed. Create a new adapter to pick
/// them up. Variables whose name or value is not valid Unicode are skipped.
///
/// # Examples
///
/// ```rust
/// use envcast::adapters::ProcessEnv;
/// use envcast::ports::VarSource;
///
/// // Every variable of the process
/// let source = ProcessEnv::new();
///
/// // Only variables starting with "APP_", with the prefix stripped
/// let source = ProcessEnv::with_prefix("APP_");
/// ```
#[derive(Debug, Clone)]
pub struct ProcessEnv {
    /// Prefix that was stripped from every captured key
    prefix: Option<String>,
    /// Captured variables
    vars: HashMap<String, String>,
}

impl ProcessEnv {
    /// Captures every variable of the process environment.
    pub fn new() -> Self {
        Self::capture(None)
    }

    /// Captures the variables whose name starts with `prefix`.
    ///
    /// The prefix is stripped, so with prefix `"APP_"` the variable `APP_PORT`
    /// is read with key `"PORT"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use envcast::adapters::ProcessEnv;
    ///
    /// let source = ProcessEnv::with_prefix("MYAPP_");
    /// assert_eq!(source.prefix(), Some("MYAPP_"));
    /// ```
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self::capture(Some(prefix.into()))
    }

    /// Returns the prefix this adapter filters on, if any.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    fn capture(prefix: Option<String>) -> Self {
        let mut vars = HashMap::new();

        for (key, value) in env::vars_os() {
            let (key, value) = match (key.into_string(), value.into_string()) {
                (Ok(key), Ok(value)) => (key, value),
                (key, _) => {
                    tracing::debug!(
                        "Skipping environment variable with non-Unicode content: {:?}",
                        key
                    );
                    continue;
                }
            };

            let key = match &prefix {
                Some(prefix) => match key.strip_prefix(prefix.as_str()) {
                    Some(stripped) => stripped.to_string(),
                    None => continue,
                },
                None => key,
            };

            vars.insert(key, value);
        }

        tracing::debug!(
            "Captured {} environment variables (prefix={:?})",
            vars.len(),
            prefix
        );

        Self { prefix, vars }
    }
}

impl Default for ProcessEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl VarSource for ProcessEnv {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}
