// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the interfaces the accessor engine consumes from its
//! collaborators: the read-only key/value source a binding reads from, and
//! the sink that diagnostic messages are written to.

pub mod logger;
pub mod source;

// Re-export commonly used types
pub use logger::LogSink;
pub use source::VarSource;
