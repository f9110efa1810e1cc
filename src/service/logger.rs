// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ready-made logging sinks.
//!
//! A binding given a [`LogSink`] reports what it does with each variable:
//! where the value came from, which accessor it was handed to and so on.
//! The sinks built here format those reports as
//! `env-var (<variable>): <message>` and stay silent when the application
//! runs in production mode.

use crate::ports::LogSink;
use std::sync::Arc;

/// Mode names that silence the sinks built by this module.
pub const PRODUCTION_MODES: &[&str] = &["prod", "production"];

/// Returns `true` if `mode` names a production environment.
pub fn is_production(mode: Option<&str>) -> bool {
    mode.is_some_and(|mode| PRODUCTION_MODES.contains(&mode))
}

/// Formats a report line.
pub fn format_line(key: &str, message: &str) -> String {
    format!("env-var ({}): {}", key, message)
}

/// Builds a sink that passes each formatted line to `write`.
///
/// Nothing is written when `mode` is `"prod"` or `"production"`.
///
/// # Examples
///
/// ```rust
/// use envcast::service::logger;
///
/// let sink = logger::logger(|line: &str| eprintln!("{}", line), None);
/// sink("PORT", "will be read from the environment");
/// ```
pub fn logger<F>(write: F, mode: Option<&str>) -> LogSink
where
    F: Fn(&str) + Send + Sync + 'static,
{
    let silent = is_production(mode);
    Arc::new(move |key: &str, message: &str| {
        if !silent {
            write(&format_line(key, message));
        }
    })
}

/// Builds a sink that emits each formatted line as a `tracing` info event.
pub fn tracing_logger(mode: Option<&str>) -> LogSink {
    logger(|line: &str| tracing::info!("{}", line), mode)
}
