//! The ASCII serialization contract.
//!
//! A type implements [`AsciiSerializable`] to declare that it can be parsed from,
//! and reduced to, an ASCII byte sequence. Parsing may need outside information
//! (a delimiter, for example) which is supplied as the associated `Context`;
//! serialization never does, because a constructed value fully describes itself.
//!
//! ## Round trip
//!
//! For every value `v` returned by `parse`, parsing `v.serialize()` with the same
//! context yields a value equal to `v`. Implementations must uphold this.
//!
//! ## Composition
//!
//! [`serialize_into`](AsciiSerializable::serialize_into) appends to a
//! caller-owned buffer. A composite value serializes by calling it on each of its
//! parts in order, so one buffer grows for the whole value.
//!
//! ## Context-free types
//!
//! Types whose `Context` is `()` automatically implement [`AsciiParse`], which
//! adds [`parse_ascii`](AsciiParse::parse_ascii) and
//! [`parse_ascii_str`](AsciiParse::parse_ascii_str). Types that need context do not
//! get these methods, so parsing them without context does not compile.
//!
//! ## Raw values
//!
//! Every serializable type gets [`AsciiRawValue`], a string view computed by
//! serializing. `serialize_into` has no default and must be written from the
//! type's own fields: calling `raw_value` from inside `serialize_into` recurses
//! forever.
//!
//! ## Examples
//!
//! ```rust
//! use ascii_kit::{AsciiParse, AsciiRawValue, AsciiSerializable, Error};
//!
//! /// A two-letter upper-case country code.
//! #[derive(Debug, PartialEq)]
//! struct Country([u8; 2]);
//!
//! impl AsciiSerializable for Country {
//!     type Context = ();
//!     type Error = Error;
//!
//!     fn parse(bytes: &[u8], _: &()) -> Result<Self, Error> {
//!         match bytes {
//!             [] => Err(Error::empty("country code")),
//!             [a, b] if a.is_ascii_uppercase() && b.is_ascii_uppercase() => {
//!                 Ok(Country([*a, *b]))
//!             }
//!             _ => Err(Error::malformed(0, "expected two upper-case letters")),
//!         }
//!     }
//!
//!     fn serialize_into(&self, buffer: &mut Vec<u8>) {
//!         buffer.extend_from_slice(&self.0);
//!     }
//! }
//!
//! let nz = Country::parse_ascii_str("NZ").unwrap();
//! assert_eq!(nz.raw_value(), "NZ");
//! assert!(Country::parse_ascii(b"nz").is_err());
//! ```

use crate::Error;

/// A value with an ASCII wire form.
pub trait AsciiSerializable: Sized {
    /// Outside information needed to parse, `()` when none is needed.
    type Context;

    /// The type-specific parse error.
    type Error: From<Error>;

    /// Parses a value from `bytes` using `context`.
    ///
    /// # Errors
    ///
    /// Returns an error when `bytes` is empty but the type requires content, has
    /// a byte outside the type's alphabet, or violates the type's grammar.
    fn parse(bytes: &[u8], context: &Self::Context) -> Result<Self, Self::Error>;

    /// Appends the wire form of `self` to `buffer`.
    ///
    /// Must be written from the value's fields. Never implement this in terms of
    /// [`AsciiRawValue`]: the raw value is itself computed by calling this method.
    fn serialize_into(&self, buffer: &mut Vec<u8>);

    /// Returns the wire form of `self` in a new buffer.
    #[must_use]
    fn serialize(&self) -> Vec<u8> {
        let mut buffer = Vec::new();
        self.serialize_into(&mut buffer);
        buffer
    }
}

/// Context-free parsing, available when `Context` is `()`.
pub trait AsciiParse: AsciiSerializable<Context = ()> {
    /// # Errors
    ///
    /// Same as [`AsciiSerializable::parse`].
    fn parse_ascii(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::parse(bytes, &())
    }

    /// Parses from a string that must be entirely ASCII.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonAscii`] for the first non-ASCII character, otherwise
    /// the same errors as [`AsciiSerializable::parse`].
    fn parse_ascii_str(s: &str) -> Result<Self, Self::Error> {
        let bytes = crate::validate::validate(s.as_bytes())?;
        Self::parse(bytes, &())
    }
}

impl<T: AsciiSerializable<Context = ()>> AsciiParse for T {}

/// A string view of a serializable value, computed by serializing it.
///
/// Implemented for every [`AsciiSerializable`] type and cannot be overridden.
pub trait AsciiRawValue {
    fn raw_bytes(&self) -> Vec<u8>;

    fn raw_value(&self) -> String;
}

impl<T: AsciiSerializable> AsciiRawValue for T {
    fn raw_bytes(&self) -> Vec<u8> {
        self.serialize()
    }

    fn raw_value(&self) -> String {
        // Only values built through unchecked constructors can serialize to
        // non-ASCII bytes, and only those are substituted.
        String::from_utf8_lossy(&self.serialize()).into_owned()
    }
}

/// Serializes `items` into `buffer`, writing `separator` between them.
///
/// ```rust
/// use ascii_kit::serializable::serialize_joined;
///
/// let mut buffer = b"ids=".to_vec();
/// serialize_joined(&[1u32, 20, 300], b",", &mut buffer);
/// assert_eq!(buffer, b"ids=1,20,300");
/// ```
pub fn serialize_joined<'a, T, I>(items: I, separator: &[u8], buffer: &mut Vec<u8>)
where
    T: AsciiSerializable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            buffer.extend_from_slice(separator);
        }
        item.serialize_into(buffer);
    }
}
