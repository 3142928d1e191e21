//! serde support for ASCII-serializable fields.
//!
//! Use with `#[serde(with = "ascii_kit::serde_ascii")]` on a field whose type is
//! context-free [`AsciiSerializable`]. The field is written as a string holding
//! its raw value and read back through
//! [`AsciiParse::parse_ascii_str`].
//!
//! ```rust
//! use ascii_kit::Token;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Header {
//!     #[serde(with = "ascii_kit::serde_ascii")]
//!     name: Token,
//!     #[serde(with = "ascii_kit::serde_ascii")]
//!     length: num_bigint::BigUint,
//! }
//!
//! let json = r#"{"name":"Content-Length","length":"340282366920938463463374607431768211456"}"#;
//! let header: Header = serde_json::from_str(json).unwrap();
//! assert_eq!(header.name.as_str(), "Content-Length");
//! assert_eq!(serde_json::to_string(&header).unwrap(), json);
//!
//! assert!(serde_json::from_str::<Header>(r#"{"name":"bad name","length":"1"}"#).is_err());
//! ```

use crate::{AsciiParse, AsciiRawValue, AsciiSerializable};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::Serializer;
use std::borrow::Cow;
use std::fmt;

/// Serializes `value` as a string of its ASCII wire form.
///
/// # Errors
///
/// Returns the serializer's error if it rejects the string.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: AsciiSerializable,
    S: Serializer,
{
    serializer.serialize_str(&AsciiRawValue::raw_value(value))
}

/// Deserializes a string and parses it as `T`.
///
/// # Errors
///
/// Returns a custom deserializer error carrying `T`'s parse error message when
/// the string is not a valid wire form of `T`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: AsciiParse,
    T::Error: fmt::Display,
    D: Deserializer<'de>,
{
    let text = Cow::<'de, str>::deserialize(deserializer)?;
    T::parse_ascii_str(&text).map_err(de::Error::custom)
}
