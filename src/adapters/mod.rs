// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing variable source implementations.
//!
//! This module contains concrete implementations of the `VarSource` trait
//! defined in the ports layer. Plain maps and pair lists implement the trait
//! directly in [`crate::ports::source`]; the adapters here wrap outside state.

#[cfg(feature = "env")]
pub mod env_var;

// Re-export adapters based on feature flags
#[cfg(feature = "env")]
pub use env_var::ProcessEnv;
