//! Set-based trimming.
//!
//! Trimming drops elements from both ends of a slice while they belong to a
//! caller-supplied set. Interior members are left alone and an empty set trims
//! nothing. The result always borrows from the input.
//!
//! ```rust
//! use ascii_kit::trim::{trim, trim_ascii_whitespace};
//!
//! assert_eq!(trim_ascii_whitespace(b"  hello  "), b"hello");
//! assert_eq!(trim(b"xxHelloxx", b"x"), b"Hello");
//! assert_eq!(trim(b"a b", b" "), b"a b");
//! ```

use crate::constants::ASCII_WHITESPACE;
use std::collections::{BTreeSet, HashSet};
use std::hash::{BuildHasher, Hash};

/// Membership test for the elements to trim.
///
/// Implemented for slices, arrays, `Vec`, `HashSet` and `BTreeSet`, so any of
/// these can be passed directly as the set.
pub trait ElementSet<T> {
    fn contains_element(&self, element: &T) -> bool;

    /// `true` when no element can match; trimming is then the identity.
    fn is_empty_set(&self) -> bool;
}

impl<T: PartialEq> ElementSet<T> for [T] {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

impl<T: PartialEq, const N: usize> ElementSet<T> for [T; N] {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn is_empty_set(&self) -> bool {
        N == 0
    }
}

impl<T: PartialEq> ElementSet<T> for Vec<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Eq + Hash, S: BuildHasher> ElementSet<T> for HashSet<T, S> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Ord> ElementSet<T> for BTreeSet<T> {
    fn contains_element(&self, element: &T) -> bool {
        self.contains(element)
    }

    fn is_empty_set(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S: ElementSet<T> + ?Sized> ElementSet<T> for &S {
    fn contains_element(&self, element: &T) -> bool {
        (**self).contains_element(element)
    }

    fn is_empty_set(&self) -> bool {
        (**self).is_empty_set()
    }
}

/// Drops leading and trailing elements while `pred` holds.
pub fn trim_matches<T>(seq: &[T], mut pred: impl FnMut(&T) -> bool) -> &[T] {
    let start = seq.iter().position(|x| !pred(x)).unwrap_or(seq.len());
    let end = seq[start..]
        .iter()
        .rposition(|x| !pred(x))
        .map_or(start, |last| start + last + 1);
    &seq[start..end]
}

/// Drops leading and trailing members of `set`.
pub fn trim<'a, T, S>(seq: &'a [T], set: &S) -> &'a [T]
where
    S: ElementSet<T> + ?Sized,
{
    if set.is_empty_set() {
        return seq;
    }
    trim_matches(seq, |x| set.contains_element(x))
}

/// Drops leading members of `set`.
pub fn trim_start<'a, T, S>(seq: &'a [T], set: &S) -> &'a [T]
where
    S: ElementSet<T> + ?Sized,
{
    let start = seq
        .iter()
        .position(|x| !set.contains_element(x))
        .unwrap_or(seq.len());
    &seq[start..]
}

/// Drops trailing members of `set`.
pub fn trim_end<'a, T, S>(seq: &'a [T], set: &S) -> &'a [T]
where
    S: ElementSet<T> + ?Sized,
{
    let end = seq
        .iter()
        .rposition(|x| !set.contains_element(x))
        .map_or(0, |last| last + 1);
    &seq[..end]
}

/// Trims SPACE, HTAB, LF and CR. Vertical tab and form feed are kept.
#[must_use]
pub fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    trim(bytes, &ASCII_WHITESPACE)
}

/// Trims characters of `set` from both ends of `s`.
///
/// ```rust
/// use ascii_kit::trim::trim_str;
///
/// assert_eq!(trim_str("--[ok]--", &['-', '[', ']']), "ok");
/// assert_eq!(trim_str("  hi  ", &[]), "  hi  ");
/// ```
#[must_use]
pub fn trim_str<'a>(s: &'a str, set: &[char]) -> &'a str {
    if set.is_empty() {
        return s;
    }
    s.trim_matches(|ch: char| set.contains(&ch))
}
