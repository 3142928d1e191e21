//! Parsing configuration for delimited values.
//!
//! This module provides the context types passed to
//! [`AsciiSerializable::parse`](crate::AsciiSerializable::parse) by the
//! delimited built-ins:
//!
//! - [`Delimiter`]: the separator byte between fields
//! - [`ListOptions`]: how a [`Delimited`](crate::Delimited) list is split
//!
//! ## Examples
//!
//! ```rust
//! use ascii_kit::{AsciiSerializable, Delimited, Delimiter, ListOptions};
//!
//! let options = ListOptions::new()
//!     .with_delimiter(Delimiter::Pipe)
//!     .with_trim_fields(true);
//!
//! let list = Delimited::<u32>::parse(b"1 | 2 | 3", &options).unwrap();
//! assert_eq!(list.items(), &[1, 2, 3]);
//! assert_eq!(list.serialize(), b"1|2|3");
//! ```

use crate::constants::{control, COLON, COMMA, SEMICOLON, SPACE, VERTICAL_LINE};
use serde::{Deserialize, Serialize};

/// Separator between fields of a delimited value.
///
/// # Examples
///
/// ```rust
/// use ascii_kit::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_str(), ",");
/// assert_eq!(Delimiter::Tab.as_byte(), b'\t');
/// assert_eq!(Delimiter::from_byte(b'|'), Some(Delimiter::Pipe));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
    Colon,
    Space,
}

impl Delimiter {
    #[must_use]
    pub const fn as_byte(&self) -> u8 {
        match self {
            Delimiter::Comma => COMMA,
            Delimiter::Tab => control::HT,
            Delimiter::Pipe => VERTICAL_LINE,
            Delimiter::Semicolon => SEMICOLON,
            Delimiter::Colon => COLON,
            Delimiter::Space => SPACE,
        }
    }

    /// Returns the string representation of this delimiter.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Pipe => "|",
            Delimiter::Semicolon => ";",
            Delimiter::Colon => ":",
            Delimiter::Space => " ",
        }
    }

    #[must_use]
    pub const fn as_char(&self) -> char {
        self.as_byte() as char
    }

    #[must_use]
    pub const fn from_byte(b: u8) -> Option<Delimiter> {
        match b {
            COMMA => Some(Delimiter::Comma),
            control::HT => Some(Delimiter::Tab),
            VERTICAL_LINE => Some(Delimiter::Pipe),
            SEMICOLON => Some(Delimiter::Semicolon),
            COLON => Some(Delimiter::Colon),
            SPACE => Some(Delimiter::Space),
            _ => None,
        }
    }
}

/// Parsing context for [`Delimited`](crate::Delimited).
///
/// `C` is the context handed to every element's parser; it is `()` for
/// context-free element types.
///
/// # Examples
///
/// ```rust
/// use ascii_kit::{Delimiter, ListOptions};
///
/// // Default: comma separated, no empty list, fields used verbatim
/// let options = ListOptions::new();
/// assert_eq!(options.delimiter, Delimiter::Comma);
/// assert!(!options.allow_empty);
/// assert!(!options.trim_fields);
///
/// // Rows of columns: each row is split on ';', each element on ','
/// let rows = ListOptions::new()
///     .with_delimiter(Delimiter::Semicolon)
///     .with_element_context(ListOptions::new());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListOptions<C = ()> {
    pub delimiter: Delimiter,
    /// Accept empty input as a list of zero items.
    pub allow_empty: bool,
    /// Strip ASCII whitespace around each field before parsing it.
    pub trim_fields: bool,
    pub element: C,
}

impl Default for ListOptions<()> {
    fn default() -> Self {
        ListOptions {
            delimiter: Delimiter::default(),
            allow_empty: false,
            trim_fields: false,
            element: (),
        }
    }
}

impl ListOptions<()> {
    /// Creates default options (comma delimiter, no empty list, no trimming).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C> ListOptions<C> {
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Accept empty input as an empty list.
    ///
    /// Without this, empty input is an [`Error::Empty`](crate::Error::Empty).
    #[must_use]
    pub fn with_allow_empty(mut self, allow_empty: bool) -> Self {
        self.allow_empty = allow_empty;
        self
    }

    #[must_use]
    pub fn with_trim_fields(mut self, trim_fields: bool) -> Self {
        self.trim_fields = trim_fields;
        self
    }

    /// Replaces the element context, changing the element type it can parse.
    #[must_use]
    pub fn with_element_context<E>(self, element: E) -> ListOptions<E> {
        ListOptions {
            delimiter: self.delimiter,
            allow_empty: self.allow_empty,
            trim_fields: self.trim_fields,
            element,
        }
    }
}
