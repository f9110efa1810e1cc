// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logging sink definition.

use std::sync::Arc;

/// Type alias for diagnostic sinks.
///
/// The sink receives the name of the variable the message is about and the
/// message itself. It is invoked while variables are configured and resolved,
/// so it must not panic and should be cheap.
///
/// # Examples
///
/// ```rust
/// use envcast::ports::LogSink;
/// use std::sync::Arc;
///
/// let sink: LogSink = Arc::new(|key: &str, message: &str| {
///     eprintln!("{}: {}", key, message);
/// });
/// sink("PORT", "will be read from the environment");
/// ```
pub type LogSink = Arc<dyn Fn(&str, &str) + Send + Sync>;
