// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base64 decoding applied before an accessor when a variable is marked with
//! `convert_from_base64`.

use super::AccessorResult;
use crate::domain::errors::Rejection;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;

/// Reason reported for values that are not valid base64.
pub const INVALID_BASE64_REASON: &str =
    "should be a valid base64 string if using convertFromBase64";

/// Standard alphabet, padding optional, unused trailing bits ignored.
const ENGINE: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

fn is_base64_char(c: char) -> bool {
    matches!(c, 'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '/' | '-' | '_' | '=')
}

/// Decodes base64 text into UTF-8 text.
///
/// The value is only rejected when it contains characters outside the
/// standard and URL-safe alphabets (plus `=`). Decoding itself is lenient:
/// padding may be missing or excessive, decoding stops at the first `=`,
/// and a dangling final character is ignored. Bytes that are not valid
/// UTF-8 are replaced with `U+FFFD`.
///
/// # Examples
///
/// ```
/// use envcast::domain::accessors::decode_base64;
///
/// assert_eq!(decode_base64("aGVsbG8=").unwrap(), "hello");
/// assert_eq!(decode_base64("aGVsbG8").unwrap(), "hello");
/// assert!(decode_base64("a|GV-sb*G8=").is_err());
/// ```
pub fn decode_base64(value: &str) -> AccessorResult<String> {
    if !value.chars().all(is_base64_char) {
        return Err(Rejection::new(INVALID_BASE64_REASON));
    }

    let mut data: String = value
        .split('=')
        .next()
        .unwrap_or_default()
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            c => c,
        })
        .collect();

    // A lone trailing character carries fewer than 8 bits.
    if data.len() % 4 == 1 {
        data.pop();
    }

    let bytes = ENGINE
        .decode(&data)
        .map_err(|_| Rejection::new(INVALID_BASE64_REASON))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
