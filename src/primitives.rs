//! Built-in context-free [`AsciiSerializable`] implementations.
//!
//! - Integers (`u8`..`u64`, `usize`, `i8`..`i64`, `isize`) in canonical decimal
//! - [`AsciiByte`] as exactly one byte
//! - [`Token`], a non-empty run of visible characters
//! - [`BigInt`] and [`BigUint`] in canonical decimal of any length
//! - [`DateTime<Utc>`] as an RFC 3339 timestamp
//!
//! Canonical decimal means: at least one digit, no leading zeros other than a
//! lone `0`, no `+`, and for signed types an optional `-` that is never followed
//! by a lone `0`. Every value therefore has exactly one accepted spelling, which
//! is also the one it serializes to.
//!
//! ```rust
//! use ascii_kit::{AsciiParse, AsciiSerializable, Error};
//!
//! assert_eq!(i16::parse_ascii(b"-32768"), Ok(i16::MIN));
//! assert_eq!((-42i32).serialize(), b"-42");
//! assert!(matches!(u8::parse_ascii(b"256"), Err(Error::OutOfRange(_))));
//! assert!(matches!(u8::parse_ascii(b"007"), Err(Error::Malformed { .. })));
//! ```

use crate::byte::{self, AsciiByte};
use crate::constants::{DIGIT_ZERO, HYPHEN_MINUS};
use crate::{validate, AsciiParse, AsciiSerializable, Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use num_bigint::{BigInt, BigUint, Sign};
use std::fmt;
use std::str::FromStr;

fn reject(type_name: &str, err: Error) -> Error {
    log::trace!("rejected {type_name}: {err}");
    err
}

/// Checks `bytes` against the canonical decimal grammar.
///
/// Returns whether a `-` was present and the digits that follow it.
fn decimal_digits<'a>(
    bytes: &'a [u8],
    signed: bool,
    type_name: &str,
) -> Result<(bool, &'a [u8])> {
    let (negative, digits) = match bytes.split_first() {
        None => return Err(reject(type_name, Error::empty("decimal digits"))),
        Some((&HYPHEN_MINUS, rest)) if signed => (true, rest),
        Some(_) => (false, bytes),
    };
    let offset = usize::from(negative);

    if digits.is_empty() {
        return Err(reject(type_name, Error::malformed(offset, "sign without digits")));
    }
    if let Some(position) = digits.iter().position(|&b| !byte::is_digit(b)) {
        return Err(reject(
            type_name,
            Error::invalid_byte(position + offset, digits[position], "decimal digit"),
        ));
    }
    if digits.len() > 1 && digits[0] == DIGIT_ZERO {
        return Err(reject(type_name, Error::malformed(offset, "leading zero")));
    }
    if negative && digits == [DIGIT_ZERO] {
        return Err(reject(type_name, Error::malformed(0, "negative zero")));
    }
    Ok((negative, digits))
}

/// Appends the decimal form of a magnitude without allocating.
fn write_decimal(negative: bool, mut magnitude: u128, buffer: &mut Vec<u8>) {
    // u128::MAX has 39 digits
    let mut digits = [0u8; 39];
    let mut start = digits.len();
    loop {
        start -= 1;
        digits[start] = DIGIT_ZERO + (magnitude % 10) as u8;
        magnitude /= 10;
        if magnitude == 0 {
            break;
        }
    }
    if negative {
        buffer.push(HYPHEN_MINUS);
    }
    buffer.extend_from_slice(&digits[start..]);
}

macro_rules! impl_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl AsciiSerializable for $ty {
            type Context = ();
            type Error = Error;

            fn parse(bytes: &[u8], _: &()) -> Result<Self> {
                let (_, digits) = decimal_digits(bytes, false, stringify!($ty))?;
                digits
                    .iter()
                    .try_fold(0 as $ty, |acc, &b| {
                        acc.checked_mul(10)?.checked_add((b - DIGIT_ZERO) as $ty)
                    })
                    .ok_or_else(|| {
                        reject(
                            stringify!($ty),
                            Error::out_of_range(concat!("value does not fit in ", stringify!($ty))),
                        )
                    })
            }

            fn serialize_into(&self, buffer: &mut Vec<u8>) {
                write_decimal(false, *self as u128, buffer);
            }
        }
    )*};
}

macro_rules! impl_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl AsciiSerializable for $ty {
            type Context = ();
            type Error = Error;

            fn parse(bytes: &[u8], _: &()) -> Result<Self> {
                let (negative, digits) = decimal_digits(bytes, true, stringify!($ty))?;
                // Accumulate toward the sign so that MIN parses without overflow.
                digits
                    .iter()
                    .try_fold(0 as $ty, |acc, &b| {
                        let digit = (b - DIGIT_ZERO) as $ty;
                        if negative {
                            acc.checked_mul(10)?.checked_sub(digit)
                        } else {
                            acc.checked_mul(10)?.checked_add(digit)
                        }
                    })
                    .ok_or_else(|| {
                        reject(
                            stringify!($ty),
                            Error::out_of_range(concat!("value does not fit in ", stringify!($ty))),
                        )
                    })
            }

            fn serialize_into(&self, buffer: &mut Vec<u8>) {
                write_decimal(*self < 0, self.unsigned_abs() as u128, buffer);
            }
        }
    )*};
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);

impl AsciiSerializable for AsciiByte {
    type Context = ();
    type Error = Error;

    fn parse(bytes: &[u8], _: &()) -> Result<Self> {
        match bytes {
            [] => Err(reject("AsciiByte", Error::empty("one ASCII byte"))),
            [b] => {
                AsciiByte::new(*b).ok_or_else(|| reject("AsciiByte", Error::non_ascii(0, *b)))
            }
            _ => Err(reject("AsciiByte", Error::malformed(1, "expected exactly one byte"))),
        }
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        buffer.push(self.as_byte());
    }
}

/// A non-empty run of visible ASCII characters (0x21-0x7E).
///
/// Tokens contain no space, no control character and nothing outside ASCII, so
/// they can be embedded between whitespace or most delimiters unambiguously.
///
/// # Examples
///
/// ```rust
/// use ascii_kit::{Error, Token};
///
/// let token: Token = "Content-Type".parse().unwrap();
/// assert_eq!(token.as_str(), "Content-Type");
///
/// assert_eq!(
///     Token::new("two words"),
///     Err(Error::InvalidByte {
///         position: 3,
///         byte: b' ',
///         expected: "visible character".to_string(),
///     })
/// );
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(String);

impl Token {
    /// # Errors
    ///
    /// Returns an error if `s` is empty or contains anything but visible ASCII.
    pub fn new(s: &str) -> Result<Self> {
        Token::parse_ascii(s.as_bytes())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsciiSerializable for Token {
    type Context = ();
    type Error = Error;

    fn parse(bytes: &[u8], _: &()) -> Result<Self> {
        if bytes.is_empty() {
            return Err(reject("Token", Error::empty("visible characters")));
        }
        if let Some(position) = bytes.iter().position(|&b| !byte::is_visible(b)) {
            return Err(reject(
                "Token",
                Error::invalid_byte(position, bytes[position], "visible character"),
            ));
        }
        Ok(Token(bytes.iter().map(|&b| b as char).collect()))
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(self.0.as_bytes());
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Token::new(s)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsciiSerializable for BigUint {
    type Context = ();
    type Error = Error;

    fn parse(bytes: &[u8], _: &()) -> Result<Self> {
        let (_, digits) = decimal_digits(bytes, false, "BigUint")?;
        BigUint::parse_bytes(digits, 10).ok_or_else(|| Error::malformed(0, "invalid decimal"))
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(self.to_str_radix(10).as_bytes());
    }
}

impl AsciiSerializable for BigInt {
    type Context = ();
    type Error = Error;

    fn parse(bytes: &[u8], _: &()) -> Result<Self> {
        let (negative, digits) = decimal_digits(bytes, true, "BigInt")?;
        let magnitude = BigUint::parse_bytes(digits, 10)
            .ok_or_else(|| Error::malformed(usize::from(negative), "invalid decimal"))?;
        let sign = if negative { Sign::Minus } else { Sign::Plus };
        Ok(BigInt::from_biguint(sign, magnitude))
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        buffer.extend_from_slice(self.to_str_radix(10).as_bytes());
    }
}

/// RFC 3339. Any offset is accepted when parsing; serialization always writes
/// UTC with a `Z` suffix and only as many fractional digits as needed.
impl AsciiSerializable for DateTime<Utc> {
    type Context = ();
    type Error = Error;

    fn parse(bytes: &[u8], _: &()) -> Result<Self> {
        if bytes.is_empty() {
            return Err(reject("DateTime", Error::empty("RFC 3339 timestamp")));
        }
        let text = validate::validate(bytes)
            .and_then(|ascii| std::str::from_utf8(ascii).map_err(Error::custom))
            .map_err(|e| reject("DateTime", e))?;
        DateTime::parse_from_rfc3339(text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| reject("DateTime", Error::malformed(0, &e.to_string())))
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        let text = self.to_rfc3339_opts(SecondsFormat::AutoSi, true);
        buffer.extend_from_slice(text.as_bytes());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AsciiRawValue;
    use chrono::TimeZone;

    #[test]
    fn test_unsigned() {
        assert_eq!(u8::parse_ascii(b"0"), Ok(0));
        assert_eq!(u8::parse_ascii(b"255"), Ok(255));
        assert_eq!(u64::parse_ascii(b"18446744073709551615"), Ok(u64::MAX));
        assert_eq!(
            u8::parse_ascii(b"256"),
            Err(Error::out_of_range("value does not fit in u8"))
        );
        assert_eq!(
            u32::parse_ascii(b"-1"),
            Err(Error::invalid_byte(0, b'-', "decimal digit"))
        );
        assert_eq!(u32::parse_ascii(b""), Err(Error::empty("decimal digits")));
    }

    #[test]
    fn test_signed() {
        assert_eq!(i8::parse_ascii(b"-128"), Ok(i8::MIN));
        assert_eq!(i8::parse_ascii(b"127"), Ok(i8::MAX));
        assert!(matches!(i8::parse_ascii(b"128"), Err(Error::OutOfRange(_))));
        assert!(matches!(i8::parse_ascii(b"-129"), Err(Error::OutOfRange(_))));
        assert_eq!(i64::parse_ascii(b"-0"), Err(Error::malformed(0, "negative zero")));
        assert_eq!(i64::parse_ascii(b"-"), Err(Error::malformed(1, "sign without digits")));
        assert_eq!(i64::parse_ascii(b"-012"), Err(Error::malformed(1, "leading zero")));
    }

    #[test]
    fn test_rejects_non_canonical() {
        assert!(u16::parse_ascii(b"+5").is_err());
        assert!(u16::parse_ascii(b"05").is_err());
        assert!(u16::parse_ascii(b" 5").is_err());
        assert_eq!(
            u16::parse_ascii(b"5\xC3"),
            Err(Error::NonAscii {
                position: 1,
                byte: 0xC3
            })
        );
    }

    #[test]
    fn test_integer_serialization() {
        assert_eq!(0u8.serialize(), b"0");
        assert_eq!(u64::MAX.raw_value(), "18446744073709551615");
        assert_eq!(i64::MIN.raw_value(), "-9223372036854775808");
        assert_eq!(isize::MIN.raw_value(), isize::MIN.to_string());
        assert_eq!((-7i8).serialize(), b"-7");
    }

    #[test]
    fn test_ascii_byte() {
        assert_eq!(AsciiByte::parse_ascii(b"A").map(AsciiByte::as_byte), Ok(b'A'));
        assert_eq!(AsciiByte::parse_ascii(b"\x80"), Err(Error::non_ascii(0, 0x80)));
        assert!(AsciiByte::parse_ascii(b"").is_err());
        assert!(AsciiByte::parse_ascii(b"AB").is_err());
        assert_eq!(AsciiByte::new(b'\t').map(|b| b.serialize()), Some(vec![b'\t']));
    }

    #[test]
    fn test_token() {
        let token = Token::new("a!~").unwrap();
        assert_eq!(token.serialize(), b"a!~");
        assert_eq!(token.to_string(), "a!~");
        assert!(Token::new("").is_err());
        assert!(Token::new("tab\there").is_err());
        assert_eq!(
            Token::parse_ascii_str("café"),
            Err(Error::NonAscii {
                position: 3,
                byte: 0xC3
            })
        );
    }

    #[test]
    fn test_bigint() {
        let big = "123456789012345678901234567890";
        let value = BigUint::parse_ascii_str(big).unwrap();
        assert_eq!(value.raw_value(), big);

        let negative = BigInt::parse_ascii(b"-98765432109876543210").unwrap();
        assert_eq!(negative.sign(), Sign::Minus);
        assert_eq!(negative.serialize(), b"-98765432109876543210");

        assert_eq!(BigInt::parse_ascii(b"0").map(|v| v.raw_value()), Ok("0".to_string()));
        assert!(BigInt::parse_ascii(b"-0").is_err());
        assert!(BigUint::parse_ascii(b"00").is_err());
    }

    #[test]
    fn test_datetime() {
        let dt = DateTime::<Utc>::parse_ascii(b"2024-01-15T10:30:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap());
        assert_eq!(dt.raw_value(), "2024-01-15T10:30:00Z");

        let offset = DateTime::<Utc>::parse_ascii(b"2024-01-15T12:30:00+02:00").unwrap();
        assert_eq!(offset, dt);

        assert!(DateTime::<Utc>::parse_ascii(b"").is_err());
        assert!(DateTime::<Utc>::parse_ascii(b"2024-13-01T00:00:00Z").is_err());
        assert_eq!(
            DateTime::<Utc>::parse_ascii(b"2024\xFF"),
            Err(Error::non_ascii(4, 0xFF))
        );
    }

    #[test]
    fn test_datetime_fraction_round_trip() {
        let dt = DateTime::<Utc>::parse_ascii(b"2024-06-01T00:00:00.123456Z").unwrap();
        assert_eq!(DateTime::<Utc>::parse_ascii(&dt.serialize()), Ok(dt));
    }
}
