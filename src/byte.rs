//! Single-byte classification.
//!
//! Every predicate here is a `const fn`, total over all 256 byte values, and
//! decided by direct range comparison. Bytes `>= 0x80` are never control,
//! printable, whitespace, letters or digits.
//!
//! ```rust
//! use ascii_kit::byte;
//!
//! assert!(byte::is_control(0x7F));
//! assert!(byte::is_printable(b' '));
//! assert!(!byte::is_visible(b' '));
//! assert!(!byte::is_whitespace(0x0B)); // vertical tab
//! ```
//!
//! [`AsciiByte`] wraps a `u8` that is known to be in the ASCII range.

use crate::case::{self, CaseKind};
use crate::constants::{
    control, ASCII_MAX, DIGIT_NINE, DIGIT_ZERO, EXCLAMATION_MARK, LOWER_A, LOWER_F, LOWER_Z,
    SPACE, TILDE, UPPER_A, UPPER_F, UPPER_Z,
};
use std::fmt;

#[inline]
#[must_use]
pub const fn is_ascii(b: u8) -> bool {
    b <= ASCII_MAX
}

/// 0x00-0x1F and 0x7F.
#[inline]
#[must_use]
pub const fn is_control(b: u8) -> bool {
    b <= control::US || b == control::DEL
}

/// 0x20-0x7E, space included.
#[inline]
#[must_use]
pub const fn is_printable(b: u8) -> bool {
    b >= SPACE && b <= TILDE
}

/// 0x21-0x7E, space excluded.
#[inline]
#[must_use]
pub const fn is_visible(b: u8) -> bool {
    b >= EXCLAMATION_MARK && b <= TILDE
}

/// SPACE, HTAB, LF or CR.
#[inline]
#[must_use]
pub const fn is_whitespace(b: u8) -> bool {
    matches!(b, SPACE | control::HT | control::LF | control::CR)
}

#[inline]
#[must_use]
pub const fn is_digit(b: u8) -> bool {
    b >= DIGIT_ZERO && b <= DIGIT_NINE
}

#[inline]
#[must_use]
pub const fn is_uppercase(b: u8) -> bool {
    b >= UPPER_A && b <= UPPER_Z
}

#[inline]
#[must_use]
pub const fn is_lowercase(b: u8) -> bool {
    b >= LOWER_A && b <= LOWER_Z
}

#[inline]
#[must_use]
pub const fn is_letter(b: u8) -> bool {
    is_uppercase(b) || is_lowercase(b)
}

#[inline]
#[must_use]
pub const fn is_alphanumeric(b: u8) -> bool {
    is_letter(b) || is_digit(b)
}

#[inline]
#[must_use]
pub const fn is_hex_digit(b: u8) -> bool {
    is_digit(b) || (b >= UPPER_A && b <= UPPER_F) || (b >= LOWER_A && b <= LOWER_F)
}

/// Returns the numeric value of a decimal digit.
#[inline]
#[must_use]
pub const fn digit_value(b: u8) -> Option<u8> {
    if is_digit(b) {
        Some(b - DIGIT_ZERO)
    } else {
        None
    }
}

/// Returns the numeric value of a hexadecimal digit of either case.
///
/// ```rust
/// use ascii_kit::byte::hex_value;
///
/// assert_eq!(hex_value(b'7'), Some(7));
/// assert_eq!(hex_value(b'f'), Some(15));
/// assert_eq!(hex_value(b'G'), None);
/// ```
#[inline]
#[must_use]
pub const fn hex_value(b: u8) -> Option<u8> {
    match b {
        DIGIT_ZERO..=DIGIT_NINE => Some(b - DIGIT_ZERO),
        UPPER_A..=UPPER_F => Some(b - UPPER_A + 10),
        LOWER_A..=LOWER_F => Some(b - LOWER_A + 10),
        _ => None,
    }
}

/// A byte known to be in the ASCII range, unless built with
/// [`AsciiByte::new_unchecked`].
///
/// # Examples
///
/// ```rust
/// use ascii_kit::AsciiByte;
///
/// let a = AsciiByte::new(b'a').unwrap();
/// assert!(a.is_lowercase());
/// assert_eq!(a.to_uppercase().as_char(), 'A');
///
/// assert!(AsciiByte::new(0x80).is_none());
/// assert!(AsciiByte::try_from('é').is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AsciiByte(u8);

impl AsciiByte {
    /// Returns `None` for bytes `>= 0x80`.
    #[inline]
    #[must_use]
    pub const fn new(b: u8) -> Option<Self> {
        if is_ascii(b) {
            Some(AsciiByte(b))
        } else {
            None
        }
    }

    /// Wraps `b` without checking its range.
    ///
    /// Classification of an out-of-range value still follows the range tables,
    /// but [`as_char`](Self::as_char) and serialization will not produce ASCII.
    #[inline]
    #[must_use]
    pub const fn new_unchecked(b: u8) -> Self {
        AsciiByte(b)
    }

    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0 as char
    }

    #[inline]
    #[must_use]
    pub const fn is_control(self) -> bool {
        is_control(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_printable(self) -> bool {
        is_printable(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_visible(self) -> bool {
        is_visible(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_whitespace(self) -> bool {
        is_whitespace(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_digit(self) -> bool {
        is_digit(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_uppercase(self) -> bool {
        is_uppercase(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_lowercase(self) -> bool {
        is_lowercase(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_letter(self) -> bool {
        is_letter(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_alphanumeric(self) -> bool {
        is_alphanumeric(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_hex_digit(self) -> bool {
        is_hex_digit(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn to_case(self, kind: CaseKind) -> Self {
        AsciiByte(case::convert_byte(self.0, kind))
    }

    #[inline]
    #[must_use]
    pub const fn to_uppercase(self) -> Self {
        self.to_case(CaseKind::Upper)
    }

    #[inline]
    #[must_use]
    pub const fn to_lowercase(self) -> Self {
        self.to_case(CaseKind::Lower)
    }
}

impl TryFrom<u8> for AsciiByte {
    type Error = crate::Error;

    fn try_from(b: u8) -> crate::Result<Self> {
        AsciiByte::new(b).ok_or_else(|| crate::Error::non_ascii(0, b))
    }
}

impl TryFrom<char> for AsciiByte {
    type Error = crate::Error;

    fn try_from(ch: char) -> crate::Result<Self> {
        if ch.is_ascii() {
            Ok(AsciiByte(ch as u8))
        } else {
            // Report the leading byte of the UTF-8 encoding.
            let mut buf = [0u8; 4];
            let lead = ch.encode_utf8(&mut buf).as_bytes()[0];
            Err(crate::Error::non_ascii(0, lead))
        }
    }
}

impl From<AsciiByte> for u8 {
    fn from(b: AsciiByte) -> u8 {
        b.0
    }
}

impl From<AsciiByte> for char {
    fn from(b: AsciiByte) -> char {
        b.as_char()
    }
}

impl fmt::Display for AsciiByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
