//! Whole-sequence validation.
//!
//! All checks scan left to right in a single pass and stop at the first byte
//! that decides the answer, so a violation near the front returns quickly while
//! a clean input is scanned in full. Nothing allocates.
//!
//! Empty input satisfies every `is_all_*` check and fails every `contains_*`
//! check.
//!
//! ```rust
//! use ascii_kit::validate;
//!
//! assert!(validate::is_all_ascii(b""));
//! assert!(validate::is_all_ascii(&[0x7F]));
//! assert!(!validate::is_all_ascii(&[0x80]));
//! assert_eq!(validate::first_non_ascii(b"ab\xFFc"), Some(2));
//! ```

use crate::byte;
use crate::{Error, Result};

/// Returns `true` when every byte satisfies `pred`.
#[inline]
pub fn is_all(bytes: &[u8], pred: impl Fn(u8) -> bool) -> bool {
    bytes.iter().all(|&b| pred(b))
}

/// Returns `true` when at least one byte satisfies `pred`.
#[inline]
pub fn contains(bytes: &[u8], pred: impl Fn(u8) -> bool) -> bool {
    bytes.iter().any(|&b| pred(b))
}

#[inline]
#[must_use]
pub fn is_all_ascii(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_ascii)
}

#[inline]
#[must_use]
pub fn contains_non_ascii(bytes: &[u8]) -> bool {
    !is_all_ascii(bytes)
}

/// Returns the index of the first byte `>= 0x80`.
#[inline]
#[must_use]
pub fn first_non_ascii(bytes: &[u8]) -> Option<usize> {
    bytes.iter().position(|&b| !byte::is_ascii(b))
}

/// Returns `bytes` unchanged when it is entirely ASCII.
///
/// # Errors
///
/// Returns [`Error::NonAscii`] describing the first byte `>= 0x80`.
pub fn validate(bytes: &[u8]) -> Result<&[u8]> {
    match first_non_ascii(bytes) {
        Some(position) => Err(Error::non_ascii(position, bytes[position])),
        None => Ok(bytes),
    }
}

/// [`validate`] for string slices.
///
/// # Errors
///
/// Returns [`Error::NonAscii`] with the byte offset of the first non-ASCII
/// character and the leading byte of its encoding.
pub fn validate_str(s: &str) -> Result<&str> {
    validate(s.as_bytes()).map(|_| s)
}

#[must_use]
pub fn is_all_digits(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_digit)
}

#[must_use]
pub fn is_all_hex_digits(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_hex_digit)
}

#[must_use]
pub fn is_all_letters(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_letter)
}

#[must_use]
pub fn is_all_alphanumeric(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_alphanumeric)
}

#[must_use]
pub fn is_all_whitespace(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_whitespace)
}

#[must_use]
pub fn is_all_printable(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_printable)
}

#[must_use]
pub fn is_all_visible(bytes: &[u8]) -> bool {
    is_all(bytes, byte::is_visible)
}

#[must_use]
pub fn contains_control(bytes: &[u8]) -> bool {
    contains(bytes, byte::is_control)
}

#[must_use]
pub fn contains_whitespace(bytes: &[u8]) -> bool {
    contains(bytes, byte::is_whitespace)
}

#[must_use]
pub fn contains_uppercase(bytes: &[u8]) -> bool {
    contains(bytes, byte::is_uppercase)
}

#[must_use]
pub fn contains_lowercase(bytes: &[u8]) -> bool {
    contains(bytes, byte::is_lowercase)
}
