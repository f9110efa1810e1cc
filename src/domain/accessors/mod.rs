// SPDX-License-Identifier: MIT OR Apache-2.0

//! Primitive accessors.
//!
//! Each accessor is a pure function from the resolved string value (plus any
//! accessor-specific arguments) to a typed value, or a [`Rejection`] whose
//! reason ends up in the [`EnvVarError`](crate::domain::EnvVarError) message.
//! They know nothing about variables, defaults or sources, which also makes
//! them the building blocks for extra accessors.
//!
//! # Examples
//!
//! ```
//! use envcast::domain::accessors;
//!
//! assert_eq!(accessors::as_int("5").unwrap(), 5);
//! assert_eq!(accessors::as_array("a,b", ",").unwrap(), vec!["a", "b"]);
//! assert!(accessors::as_bool("nope").is_err());
//! ```

pub mod base64;
pub mod boolean;
pub mod json;
pub mod number;
#[cfg(feature = "regexp")]
pub mod regexp;
pub mod text;
#[cfg(feature = "url")]
pub mod url;

use crate::domain::errors::Rejection;

/// Result returned by every primitive accessor.
pub type AccessorResult<T> = std::result::Result<T, Rejection>;

pub use self::base64::decode_base64;
pub use boolean::{as_bool, as_bool_strict};
pub use json::{as_json, as_json_array, as_json_object, as_json_typed};
pub use number::{
    as_float, as_float_negative, as_float_positive, as_int, as_int_negative, as_int_positive,
    as_port_number,
};
#[cfg(feature = "regexp")]
pub use regexp::as_regexp;
pub use text::{as_array, as_enum, as_string};
#[cfg(feature = "url")]
pub use self::url::{as_url_object, as_url_string};
