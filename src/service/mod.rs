// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the accessor engine.
//!
//! This module contains the source binding (`EnvVars`), the per-variable
//! reader it hands out (`Variable`), the registry of extra accessors and the
//! ready-made logging sinks.

pub mod binding;
pub mod extension;
pub mod logger;
pub mod variable;

// Re-export commonly used types
pub use binding::{EnvVars, EnvVarsBuilder};
pub use extension::{ExtraAccessor, Extensions, BUILTIN_ACCESSORS};
pub use variable::Variable;
