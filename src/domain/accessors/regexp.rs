// SPDX-License-Identifier: MIT OR Apache-2.0

//! Regular expression accessor backed by the `regex` crate.

use super::AccessorResult;
use crate::domain::errors::Rejection;
use regex::{Regex, RegexBuilder};

/// Compiles the value as a regular expression.
///
/// `flags` uses the familiar single-letter syntax:
///
/// - `i`: case-insensitive
/// - `m`: `^` and `$` match at line boundaries
/// - `s`: `.` matches newlines
/// - `u`, `v`: Unicode mode (always on)
/// - `g`, `y`, `d`: accepted, they describe how a match is driven rather
///   than the pattern itself
///
/// A repeated or unknown letter fails with `invalid regexp flags`.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_regexp;
///
/// let re = as_regexp("^ab+c$", Some("i")).unwrap();
/// assert!(re.is_match("ABBC"));
/// assert!(as_regexp("(", None).is_err());
/// ```
pub fn as_regexp(value: &str, flags: Option<&str>) -> AccessorResult<Regex> {
    let mut builder = RegexBuilder::new(value);
    let mut seen = String::new();

    for flag in flags.unwrap_or_default().chars() {
        if seen.contains(flag) {
            return Err(Rejection::new("invalid regexp flags"));
        }
        seen.push(flag);

        match flag {
            'i' => {
                builder.case_insensitive(true);
            }
            'm' => {
                builder.multi_line(true);
            }
            's' => {
                builder.dot_matches_new_line(true);
            }
            'u' | 'v' | 'g' | 'y' | 'd' => {}
            _ => return Err(Rejection::new("invalid regexp flags")),
        }
    }

    builder
        .build()
        .map_err(|_| Rejection::new("should be a valid regexp"))
}
