// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and conversions.
//!
//! This module contains the error types, the default value type and the
//! primitive accessors. It is independent of where variables come from.

pub mod accessors;
pub mod default_value;
pub mod errors;

// Re-export commonly used types
pub use default_value::DefaultValue;
pub use errors::{EnvVarError, Rejection, Result};
