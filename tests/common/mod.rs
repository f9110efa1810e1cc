// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared fixtures for integration tests.

use envcast::ports::VarSource;
use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Values every binding test starts from.
#[allow(dead_code)]
pub fn test_vars() -> HashMap<String, String> {
    [
        ("VALID_BASE_64", "aGVsbG8="),
        ("INVALID_BASE_64", "a|GV-sb*G8="),
        ("STRING", "oh hai"),
        ("FLOAT", "12.43"),
        ("INTEGER", "5"),
        ("BOOL", "false"),
        ("JSON", r#"{"name":"value"}"#),
        ("JSON_OBJECT", r#"{"name":"value"}"#),
        ("JSON_ARRAY", "[1,2,3]"),
        ("COMMA_ARRAY", "1,2,3"),
        ("EMPTY_ARRAY", ""),
        ("ARRAY_WITHOUT_DELIMITER", "value"),
        ("ARRAY_WITH_DELIMITER", "value,"),
        ("ARRAY_WITH_DELIMITER_PREFIX", ",value"),
        ("DASH_ARRAY", "1-2-3"),
        ("URL", "http://google.com/"),
        ("ENUM", "VALID"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Returns `test_vars()` with `key` set to `value`.
#[allow(dead_code)]
pub fn test_vars_with(key: &str, value: &str) -> HashMap<String, String> {
    let mut vars = test_vars();
    vars.insert(key.to_string(), value.to_string());
    vars
}

/// A source that counts how often it is read.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)]
pub struct RecordingSource {
    values: HashMap<String, String>,
    reads: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl RecordingSource {
    /// Creates a source holding `values`.
    pub fn new(values: HashMap<String, String>) -> Self {
        Self {
            values,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns a handle on the read counter.
    pub fn reads(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.reads)
    }
}

impl VarSource for RecordingSource {
    fn name(&self) -> &str {
        "recording"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.values.get(key).cloned()
    }

    fn entries(&self) -> Vec<(String, String)> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Helper to set and clean up environment variables
#[allow(dead_code)]
pub struct EnvGuard {
    keys: Vec<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new() -> Self {
        EnvGuard { keys: Vec::new() }
    }

    pub fn set(&mut self, key: &str, value: &str) {
        env::set_var(key, value);
        self.keys.push(key.to_string());
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        for key in &self.keys {
            env::remove_var(key);
        }
    }
}
