//! Context-bearing [`AsciiSerializable`] implementations.
//!
//! Both types here need to know their delimiter before they can be parsed, so
//! the delimiter is part of the parsing context. Once parsed they remember it,
//! which keeps serialization free of context.
//!
//! - [`Delimited`]: a list of values separated by a [`Delimiter`]
//! - [`Pair`]: two values around a required [`Delimiter`]
//!
//! ```rust
//! use ascii_kit::{AsciiSerializable, Delimited, Delimiter, ListOptions, Pair, Token};
//!
//! let options = ListOptions::new().with_delimiter(Delimiter::Semicolon);
//! let tags = Delimited::<Token>::parse(b"rust;ascii", &options).unwrap();
//! assert_eq!(tags.len(), 2);
//!
//! let header = Pair::<Token, Token>::parse(b"Host:example.org", &Delimiter::Colon).unwrap();
//! assert_eq!(header.first.as_str(), "Host");
//! assert_eq!(header.serialize(), b"Host:example.org");
//! ```

use crate::serializable::serialize_joined;
use crate::trim::trim_ascii_whitespace;
use crate::{AsciiSerializable, Delimiter, Error, ListOptions};

/// A list of values separated by a single delimiter byte.
///
/// Parsing splits on every occurrence of the delimiter and parses each field
/// with the element context from [`ListOptions`]. Serialization writes the
/// elements joined by the delimiter the list was parsed (or built) with.
///
/// A list built with [`Delimited::new`] from elements whose wire form contains
/// the delimiter will not parse back to the same list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Delimited<T> {
    delimiter: Delimiter,
    items: Vec<T>,
}

impl<T> Delimited<T> {
    #[must_use]
    pub fn new(delimiter: Delimiter, items: Vec<T>) -> Self {
        Delimited { delimiter, items }
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a Delimited<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: AsciiSerializable> AsciiSerializable for Delimited<T> {
    type Context = ListOptions<T::Context>;
    type Error = T::Error;

    fn parse(bytes: &[u8], context: &Self::Context) -> Result<Self, Self::Error> {
        let content = if context.trim_fields {
            trim_ascii_whitespace(bytes)
        } else {
            bytes
        };
        if content.is_empty() {
            return empty_list(context);
        }

        let separator = context.delimiter.as_byte();
        let mut items = Vec::new();
        for (index, field) in bytes.split(|&b| b == separator).enumerate() {
            let field = if context.trim_fields {
                trim_ascii_whitespace(field)
            } else {
                field
            };
            match T::parse(field, &context.element) {
                Ok(item) => items.push(item),
                Err(e) => {
                    log::trace!("rejected field {index} of delimited list");
                    return Err(e);
                }
            }
        }

        // A lone element with an empty wire form serializes to empty input.
        if let [only] = items.as_slice() {
            if only.serialize().is_empty() {
                return empty_list(context);
            }
        }

        Ok(Delimited::new(context.delimiter, items))
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        serialize_joined(&self.items, &[self.delimiter.as_byte()], buffer);
    }
}

fn empty_list<T, C, E>(context: &ListOptions<C>) -> Result<Delimited<T>, E>
where
    E: From<Error>,
{
    if context.allow_empty {
        return Ok(Delimited::new(context.delimiter, Vec::new()));
    }
    log::trace!("rejected empty delimited list");
    Err(Error::empty("delimited list").into())
}

/// Two context-free values joined by a delimiter.
///
/// Parsing splits at the first occurrence of the delimiter; the second value may
/// itself contain it.
///
/// # Examples
///
/// ```rust
/// use ascii_kit::{AsciiSerializable, Delimiter, Error, Pair};
///
/// let range = Pair::<u32, u32>::parse(b"10-20", &Delimiter::Comma);
/// assert_eq!(range, Err(Error::MissingDelimiter { delimiter: ',' }));
///
/// let range = Pair::<u32, u32>::parse(b"10,20", &Delimiter::Comma).unwrap();
/// assert_eq!((range.first, range.second), (10, 20));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
    delimiter: Delimiter,
}

impl<A, B> Pair<A, B> {
    #[must_use]
    pub fn new(first: A, delimiter: Delimiter, second: B) -> Self {
        Pair {
            first,
            second,
            delimiter,
        }
    }

    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        self.delimiter
    }

    #[must_use]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> AsciiSerializable for Pair<A, B>
where
    A: AsciiSerializable<Context = ()>,
    B: AsciiSerializable<Context = (), Error = A::Error>,
{
    type Context = Delimiter;
    type Error = A::Error;

    fn parse(bytes: &[u8], context: &Delimiter) -> Result<Self, Self::Error> {
        let separator = context.as_byte();
        let Some(split) = bytes.iter().position(|&b| b == separator) else {
            log::trace!("rejected pair without {context:?} delimiter");
            return Err(Error::missing_delimiter(context.as_char()).into());
        };
        Ok(Pair {
            first: A::parse(&bytes[..split], &())?,
            second: B::parse(&bytes[split + 1..], &())?,
            delimiter: *context,
        })
    }

    fn serialize_into(&self, buffer: &mut Vec<u8>) {
        self.first.serialize_into(buffer);
        buffer.push(self.delimiter.as_byte());
        self.second.serialize_into(buffer);
    }
}
