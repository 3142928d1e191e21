//! # ascii_kit
//!
//! Standards-faithful processing of 7-bit ASCII (INCITS 4-1986 / ANSI X3.4).
//!
//! ## Key Features
//!
//! - **Classification**: `const fn` predicates exact at every boundary
//!   (0x00, 0x1F/0x20, 0x7E/0x7F, 0x80)
//! - **Validation**: single-pass, early-exit checks with the position of the first
//!   offending byte
//! - **Case conversion**: ASCII letters only; non-ASCII content passes through
//! - **Line endings**: detect LF, CR and CRLF, spot mixed files, normalize in one
//!   pass without allocating when nothing changes
//! - **Trimming**: strip any caller-supplied set from both ends of a slice
//! - **Serialization contract**: [`AsciiSerializable`] for types with an ASCII
//!   wire form, with optional parsing context and a round-trip guarantee
//! - **No Unsafe Code**: unchecked entry points skip validation, not safety
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_kit::{case, line_ending, trim, validate, LineEnding};
//!
//! assert!(validate::is_all_ascii(b"Hello, World!"));
//! assert_eq!(case::to_uppercase("hello"), "HELLO");
//! assert_eq!(trim::trim_ascii_whitespace(b"  hello  "), b"hello");
//!
//! let text = b"one\r\ntwo\nthree";
//! assert_eq!(line_ending::detect(text), Some(LineEnding::Crlf));
//! assert!(line_ending::has_mixed_line_endings(text));
//! assert_eq!(&*line_ending::normalize(text, LineEnding::Lf), b"one\ntwo\nthree");
//! ```
//!
//! ### Serializable Types
//!
//! ```rust
//! use ascii_kit::{AsciiParse, AsciiRawValue, AsciiSerializable, Delimited, ListOptions};
//!
//! // Context-free
//! let port = u16::parse_ascii(b"8080").unwrap();
//! assert_eq!(port.raw_value(), "8080");
//!
//! // Context-bearing: the list needs its delimiter to parse
//! let ports = Delimited::<u16>::parse(b"80,443", &ListOptions::new()).unwrap();
//!
//! // Compose into one buffer
//! let mut buffer = b"ports=".to_vec();
//! ports.serialize_into(&mut buffer);
//! assert_eq!(buffer, b"ports=80,443");
//! ```
//!
//! ## Performance Characteristics
//!
//! - **Classification**: O(1), range comparisons only
//! - **Validation and detection**: O(n) worst case, stops at the first deciding byte
//! - **Normalization**: O(n), one forward pass, borrows when unchanged
//! - **Trimming**: O(n), returns a sub-slice
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Every operation is a pure function of its input and safe to call from any
//!   thread
//! - Failures are returned as values; nothing in the public API panics

pub mod byte;
pub mod case;
pub mod constants;
pub mod delimited;
pub mod error;
pub mod line_ending;
pub mod options;
pub mod primitives;
pub mod serde_ascii;
pub mod serializable;
pub mod standard;
pub mod trim;
pub mod validate;

pub use byte::AsciiByte;
pub use case::CaseKind;
pub use delimited::{Delimited, Pair};
pub use error::{Error, Result};
pub use line_ending::LineEnding;
pub use options::{Delimiter, ListOptions};
pub use primitives::Token;
pub use serializable::{AsciiParse, AsciiRawValue, AsciiSerializable};
pub use trim::ElementSet;

/// Returns the bytes of `s` when it is entirely ASCII.
///
/// # Examples
///
/// ```rust
/// use ascii_kit::string_to_bytes;
///
/// assert_eq!(string_to_bytes("Hi!"), Some(b"Hi!".to_vec()));
/// assert_eq!(string_to_bytes("Hé"), None);
/// ```
#[must_use]
pub fn string_to_bytes(s: &str) -> Option<Vec<u8>> {
    validate::is_all_ascii(s.as_bytes()).then(|| s.as_bytes().to_vec())
}

/// Builds a string from `bytes` when they are entirely ASCII.
///
/// # Examples
///
/// ```rust
/// use ascii_kit::{bytes_to_string, string_to_bytes};
///
/// let bytes = string_to_bytes("Hello, World!").unwrap();
/// assert_eq!(bytes_to_string(&bytes).as_deref(), Some("Hello, World!"));
/// assert_eq!(bytes_to_string(&[0x48, 0x80]), None);
/// ```
#[must_use]
pub fn bytes_to_string(bytes: &[u8]) -> Option<String> {
    validate::is_all_ascii(bytes).then(|| bytes_to_string_unchecked(bytes))
}

/// Builds a string from `bytes` without checking that they are ASCII.
///
/// Each byte becomes the `char` of the same value, so bytes `>= 0x80` turn into
/// unrelated Latin-1 characters rather than an error. Use [`bytes_to_string`]
/// unless the input is already known to be ASCII.
#[must_use]
pub fn bytes_to_string_unchecked(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
