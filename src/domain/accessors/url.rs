// SPDX-License-Identifier: MIT OR Apache-2.0

//! URL accessors backed by the `url` crate.

use super::AccessorResult;
use crate::domain::errors::Rejection;
use url::Url;

/// Parses the value as an absolute URL.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::as_url_object;
///
/// let url = as_url_object("http://google.com/").unwrap();
/// assert_eq!(url.host_str(), Some("google.com"));
/// assert!(as_url_object("not a url").is_err());
/// ```
pub fn as_url_object(value: &str) -> AccessorResult<Url> {
    Url::parse(value).map_err(|_| Rejection::new("should be a valid URL"))
}

/// Validates the value as a URL and returns the original string.
pub fn as_url_string(value: &str) -> AccessorResult<String> {
    as_url_object(value)?;
    Ok(value.to_string())
}
