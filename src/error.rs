//! Error types for ASCII validation and parsing.
//!
//! Every failure in this crate is a deterministic function of the input and is
//! reported to the caller as an [`Error`] value; nothing retries and nothing
//! aborts.
//!
//! ## Error Categories
//!
//! - **Range errors**: a byte `>= 0x80` where ASCII was required
//! - **Structural errors**: empty input, a byte outside a type's alphabet,
//!   a missing delimiter or a non-canonical form
//! - **Numeric errors**: a decimal value that does not fit the target type
//!
//! Where feasible the error carries the position of the first offending byte.
//!
//! ## Examples
//!
//! ```rust
//! use ascii_kit::{validate, Error};
//!
//! let err = validate::validate(b"caf\xC3\xA9").unwrap_err();
//! assert_eq!(err, Error::NonAscii { position: 3, byte: 0xC3 });
//! assert_eq!(err.position(), Some(3));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by checked conversions and by
/// [`AsciiSerializable::parse`](crate::AsciiSerializable::parse) implementations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A byte outside 0x00-0x7F was found where ASCII was required
    #[error("Non-ASCII byte 0x{byte:02X} at position {position}")]
    NonAscii { position: usize, byte: u8 },

    /// Input was empty but the grammar requires at least one byte
    #[error("Unexpected empty input\nExpected: {expected}")]
    Empty { expected: String },

    /// A byte outside the type's accepted alphabet
    #[error("Invalid byte 0x{byte:02X} at position {position}: expected {expected}")]
    InvalidByte {
        position: usize,
        byte: u8,
        expected: String,
    },

    /// A required delimiter never appeared
    #[error("Missing delimiter {delimiter:?}")]
    MissingDelimiter { delimiter: char },

    /// The input violates the type's grammar
    #[error("Malformed input at position {position}: {msg}")]
    Malformed { position: usize, msg: String },

    /// A numeric value does not fit the target type
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a range error for a byte `>= 0x80`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ascii_kit::Error;
    ///
    /// let err = Error::non_ascii(7, 0xFF);
    /// assert!(err.to_string().contains("0xFF"));
    /// ```
    pub fn non_ascii(position: usize, byte: u8) -> Self {
        Error::NonAscii { position, byte }
    }

    /// Creates an empty-input error describing what was expected instead.
    pub fn empty(expected: &str) -> Self {
        Error::Empty {
            expected: expected.to_string(),
        }
    }

    /// Creates an invalid-byte error for a byte outside a type's alphabet.
    ///
    /// Bytes `>= 0x80` are reported as [`Error::NonAscii`] instead, so callers can
    /// pass any offending byte here.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ascii_kit::Error;
    ///
    /// let err = Error::invalid_byte(2, b'x', "decimal digit");
    /// assert!(err.to_string().contains("expected decimal digit"));
    ///
    /// let err = Error::invalid_byte(2, 0x80, "decimal digit");
    /// assert_eq!(err, Error::NonAscii { position: 2, byte: 0x80 });
    /// ```
    pub fn invalid_byte(position: usize, byte: u8, expected: &str) -> Self {
        if byte > crate::constants::ASCII_MAX {
            return Error::NonAscii { position, byte };
        }
        Error::InvalidByte {
            position,
            byte,
            expected: expected.to_string(),
        }
    }

    /// Creates a missing-delimiter error.
    pub fn missing_delimiter(delimiter: char) -> Self {
        Error::MissingDelimiter { delimiter }
    }

    /// Creates a malformed-input error.
    pub fn malformed(position: usize, msg: &str) -> Self {
        Error::Malformed {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an out-of-range error for numeric overflow.
    pub fn out_of_range(msg: &str) -> Self {
        Error::OutOfRange(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns the byte position this error refers to, when it has one.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Error::NonAscii { position, .. }
            | Error::InvalidByte { position, .. }
            | Error::Malformed { position, .. } => Some(*position),
            _ => None,
        }
    }

    /// Shifts the position by `offset`.
    ///
    /// Composite parsers use this to report positions relative to their whole
    /// input rather than to the embedded field that failed.
    #[must_use]
    pub fn offset_by(self, offset: usize) -> Self {
        match self {
            Error::NonAscii { position, byte } => Error::NonAscii {
                position: position + offset,
                byte,
            },
            Error::InvalidByte {
                position,
                byte,
                expected,
            } => Error::InvalidByte {
                position: position + offset,
                byte,
                expected,
            },
            Error::Malformed { position, msg } => Error::Malformed {
                position: position + offset,
                msg,
            },
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
