//! ASCII case conversion.
//!
//! Letters move between `A-Z` and `a-z` by a fixed offset of 0x20. Every other
//! byte, including every byte `>= 0x80`, passes through unchanged, so converting
//! a UTF-8 string never touches the bytes of a multi-byte character.
//!
//! ```rust
//! use ascii_kit::case::{self, CaseKind};
//!
//! assert_eq!(case::to_uppercase("straße"), "STRAßE");
//! assert_eq!(case::convert(b"Mixed 123", CaseKind::Lower), b"mixed 123");
//! ```
//!
//! Conversion in one direction is idempotent. `Upper` and `Lower` are not
//! promised to be inverses of each other for arbitrary input.

use crate::byte;
use crate::constants::CASE_OFFSET;
use crate::{validate, Result};
use serde::{Deserialize, Serialize};

/// Direction of a case conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseKind {
    Upper,
    Lower,
}

/// Converts a single byte. Non-letters are returned unchanged.
#[inline]
#[must_use]
pub const fn convert_byte(b: u8, kind: CaseKind) -> u8 {
    match kind {
        CaseKind::Upper if byte::is_lowercase(b) => b - CASE_OFFSET,
        CaseKind::Lower if byte::is_uppercase(b) => b + CASE_OFFSET,
        _ => b,
    }
}

#[inline]
#[must_use]
pub const fn to_uppercase_byte(b: u8) -> u8 {
    convert_byte(b, CaseKind::Upper)
}

#[inline]
#[must_use]
pub const fn to_lowercase_byte(b: u8) -> u8 {
    convert_byte(b, CaseKind::Lower)
}

/// Maps [`convert_byte`] over `bytes`. The result always has the same length.
#[must_use]
pub fn convert(bytes: &[u8], kind: CaseKind) -> Vec<u8> {
    bytes.iter().map(|&b| convert_byte(b, kind)).collect()
}

/// Like [`convert`], but rejects input that is not entirely ASCII.
///
/// # Errors
///
/// Returns [`Error::NonAscii`](crate::Error::NonAscii) for the first byte
/// `>= 0x80`; nothing is converted in that case.
pub fn convert_checked(bytes: &[u8], kind: CaseKind) -> Result<Vec<u8>> {
    validate::validate(bytes).map(|bytes| convert(bytes, kind))
}

/// Converts the ASCII letters of `s`, copying every other character as is.
#[must_use]
pub fn convert_str(s: &str, kind: CaseKind) -> String {
    s.chars()
        .map(|ch| {
            if ch.is_ascii() {
                convert_byte(ch as u8, kind) as char
            } else {
                ch
            }
        })
        .collect()
}

#[must_use]
pub fn to_uppercase(s: &str) -> String {
    convert_str(s, CaseKind::Upper)
}

#[must_use]
pub fn to_lowercase(s: &str) -> String {
    convert_str(s, CaseKind::Lower)
}

/// Compares two byte sequences, treating corresponding ASCII letters of either
/// case as equal.
///
/// ```rust
/// use ascii_kit::case::eq_ignore_case;
///
/// assert!(eq_ignore_case(b"Content-Type", b"content-type"));
/// assert!(!eq_ignore_case(b"[", b"{"));
/// ```
#[must_use]
pub fn eq_ignore_case(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(&x, &y)| to_lowercase_byte(x) == to_lowercase_byte(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_byte_offsets() {
        assert_eq!(convert_byte(b'a', CaseKind::Upper), b'A');
        assert_eq!(convert_byte(b'z', CaseKind::Upper), b'Z');
        assert_eq!(convert_byte(b'A', CaseKind::Lower), b'a');
        assert_eq!(convert_byte(b'Z', CaseKind::Lower), b'z');

        // Neighbours of the letter ranges are not letters
        for b in [b'@', b'[', b'`', b'{'] {
            assert_eq!(convert_byte(b, CaseKind::Upper), b);
            assert_eq!(convert_byte(b, CaseKind::Lower), b);
        }
        assert_eq!(convert_byte(0xE1, CaseKind::Upper), 0xE1);
    }

    #[test]
    fn test_convert_preserves_length() {
        let input = b"Hello,\x00World\xFF";
        let upper = convert(input, CaseKind::Upper);
        assert_eq!(upper.len(), input.len());
        assert_eq!(upper, b"HELLO,\x00WORLD\xFF");
    }

    #[test]
    fn test_convert_checked() {
        assert_eq!(convert_checked(b"abc", CaseKind::Upper), Ok(b"ABC".to_vec()));
        assert!(convert_checked(b"ab\x80", CaseKind::Upper).is_err());
    }

    #[test]
    fn test_convert_str_leaves_non_ascii() {
        assert_eq!(to_uppercase("héllo wörld"), "HéLLO WöRLD");
        assert_eq!(to_lowercase("ÀBC"), "Àbc");
        assert_eq!(to_uppercase(""), "");
    }

    #[test]
    fn test_idempotent() {
        let s = "MiXeD cAsE 42 ünïcödé";
        assert_eq!(to_uppercase(&to_uppercase(s)), to_uppercase(s));
        assert_eq!(to_lowercase(&to_lowercase(s)), to_lowercase(s));
    }

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case(b"", b""));
        assert!(eq_ignore_case(b"ABC", b"abc"));
        assert!(!eq_ignore_case(b"abc", b"abcd"));
        assert!(!eq_ignore_case(b"@", b"`"));
    }

    #[test]
    fn test_case_kind_serde() {
        assert_eq!(serde_json::to_string(&CaseKind::Upper).unwrap(), "\"upper\"");
        let kind: CaseKind = serde_json::from_str("\"lower\"").unwrap();
        assert_eq!(kind, CaseKind::Lower);
    }
}
