// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed, declarative accessors for environment variables.
//!
//! This crate reads named values, usually from the process environment, and
//! converts them into typed values (integers, floats, booleans, JSON, URLs,
//! arrays, enumerations, port numbers, regular expressions), enforcing
//! required/default/example rules and producing uniform error messages.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: errors, default values and the primitive accessors
//! - **Ports**: the `VarSource` trait and the `LogSink` type
//! - **Adapters**: the process environment source
//! - **Service**: the source binding (`EnvVars`) and the variable reader
//!
//! # Feature Flags
//!
//! - `env`: Enable the process environment source and the global binding (default)
//! - `url`: Enable the URL accessors (default)
//! - `regexp`: Enable the regular expression accessor (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust
//! use envcast::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let env = envcast::from([("PORT", "8080"), ("DEBUG", "true")]);
//!
//! let port = env.get("PORT").required().as_port_number()?;
//! let debug = env.get("DEBUG").default("false").as_bool()?;
//! let hosts = env.get("HOSTS").as_array()?;
//!
//! assert_eq!(port, Some(8080));
//! assert_eq!(debug, Some(true));
//! assert_eq!(hosts, None);
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every failure is an [`EnvVarError`](domain::EnvVarError) whose message reads
//!
//! `"<name>" <reason>[, but is set to "<value>"][. An example of a valid value would be: <example>]`
//!
//! ```rust
//! let env = envcast::from([("WORKERS", "many")]);
//! let err = env.get("WORKERS").example("4").as_int().unwrap_err();
//!
//! assert_eq!(
//!     err.to_string(),
//!     r#""WORKERS" should be a valid integer, but is set to "many". An example of a valid value would be: 4"#
//! );
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

use ports::VarSource;
use service::{EnvVars, EnvVarsBuilder};

#[cfg(feature = "env")]
use once_cell::sync::Lazy;
#[cfg(feature = "env")]
use std::collections::BTreeMap;

/// Binding over the process environment, captured on first use.
#[cfg(feature = "env")]
static PROCESS: Lazy<EnvVars> = Lazy::new(|| EnvVars::new(adapters::ProcessEnv::new()));

/// Returns a reader for the process environment variable `name`.
///
/// The environment is captured the first time any process-wide accessor is
/// used; use [`from`] with a fresh [`ProcessEnv`](adapters::ProcessEnv) to
/// observe later changes.
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> envcast::domain::Result<()> {
/// let port = envcast::get("PORT").default(3000).as_port_number()?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "env")]
pub fn get(name: impl Into<String>) -> service::Variable<'static> {
    PROCESS.get(name)
}

/// Returns every variable of the captured process environment.
#[cfg(feature = "env")]
pub fn snapshot() -> BTreeMap<String, String> {
    PROCESS.snapshot()
}

/// Returns the process-wide binding.
#[cfg(feature = "env")]
pub fn process() -> &'static EnvVars {
    &PROCESS
}

/// Binds `source` into a new, independent binding.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
///
/// let mut values = HashMap::new();
/// values.insert("A_STRING".to_string(), "blah".to_string());
///
/// let env = envcast::from(values);
/// assert_eq!(env.get("A_STRING").as_string().unwrap().as_deref(), Some("blah"));
/// ```
pub fn from(source: impl VarSource + 'static) -> EnvVars {
    EnvVars::new(source)
}

/// Starts building a binding over `source` with extra accessors or a logger.
pub fn builder(source: impl VarSource + 'static) -> EnvVarsBuilder {
    EnvVars::builder(source)
}

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{DefaultValue, EnvVarError, Rejection, Result};
    pub use crate::ports::{LogSink, VarSource};
    pub use crate::service::{EnvVars, EnvVarsBuilder, Extensions, Variable};

    // Re-export adapters based on feature flags
    #[cfg(feature = "env")]
    pub use crate::adapters::ProcessEnv;
}
