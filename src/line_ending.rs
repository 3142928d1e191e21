//! Line-ending detection and normalization.
//!
//! Three conventions are recognized: LF (`0x0A`), CR (`0x0D`) and CRLF
//! (`0x0D 0x0A`). A CR immediately followed by LF is always one CRLF ending,
//! never a CR and an LF. A CR followed by anything else, or at the end of input,
//! is a CR ending on its own.
//!
//! Every operation is built on [`LineEndings`], a single forward scan with one
//! byte of lookahead.
//!
//! ```rust
//! use ascii_kit::line_ending::{self, LineEnding};
//!
//! assert_eq!(line_ending::detect(b"a\r\nb"), Some(LineEnding::Crlf));
//! assert!(line_ending::has_mixed_line_endings(b"a\nb\r\nc"));
//! assert_eq!(
//!     &*line_ending::normalize(b"a\r\nb\nc\rd", LineEnding::Lf),
//!     b"a\nb\nc\nd"
//! );
//! ```

use crate::constants::control::{CR, LF};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[cfg(target_os = "windows")]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Crlf;

#[cfg(not(target_os = "windows"))]
pub const NATIVE_LINE_ENDING: LineEnding = LineEnding::Lf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LineEnding {
    /// U+000A -- LineFeed
    Lf,
    /// U+000D -- CarriageReturn
    Cr,
    /// CarriageReturn followed by LineFeed.
    Crlf,
}

impl LineEnding {
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            LineEnding::Lf => &[LF],
            LineEnding::Cr => &[CR],
            LineEnding::Crlf => &[CR, LF],
        }
    }

    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Cr => "\r",
            LineEnding::Crlf => "\r\n",
        }
    }

    /// Number of bytes in the encoding.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        match self {
            LineEnding::Crlf => 2,
            _ => 1,
        }
    }

    /// Matches `bytes` against the exact encoding of a line ending.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Option<LineEnding> {
        match bytes {
            [CR, LF] => Some(LineEnding::Crlf),
            [LF] => Some(LineEnding::Lf),
            [CR] => Some(LineEnding::Cr),
            _ => None,
        }
    }
}

/// Iterator over the line endings of a byte sequence.
///
/// Yields `(position, ending)` where `position` is the index of the ending's
/// first byte. Created by [`line_endings`].
#[derive(Clone, Debug)]
pub struct LineEndings<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Iterator for LineEndings<'a> {
    type Item = (usize, LineEnding);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.bytes[self.position..];
        let offset = rest.iter().position(|&b| b == CR || b == LF)?;
        let start = self.position + offset;

        let ending = if rest[offset] == LF {
            LineEnding::Lf
        } else if rest.get(offset + 1) == Some(&LF) {
            LineEnding::Crlf
        } else {
            LineEnding::Cr
        };

        self.position = start + ending.len();
        Some((start, ending))
    }
}

/// Scans `bytes` for line endings.
///
/// ```rust
/// use ascii_kit::line_ending::{line_endings, LineEnding};
///
/// let found: Vec<_> = line_endings(b"a\r\n\rb\n").collect();
/// assert_eq!(
///     found,
///     vec![(1, LineEnding::Crlf), (3, LineEnding::Cr), (5, LineEnding::Lf)]
/// );
/// ```
#[must_use]
pub fn line_endings(bytes: &[u8]) -> LineEndings<'_> {
    LineEndings { bytes, position: 0 }
}

/// Returns the first line ending in `bytes`, or `None` when there is none.
#[must_use]
pub fn detect(bytes: &[u8]) -> Option<LineEnding> {
    line_endings(bytes).next().map(|(_, ending)| ending)
}

#[must_use]
pub fn detect_str(s: &str) -> Option<LineEnding> {
    detect(s.as_bytes())
}

/// Returns `true` when more than one kind of line ending occurs.
///
/// Stops at the first ending that differs from the first one seen.
#[must_use]
pub fn has_mixed_line_endings(bytes: &[u8]) -> bool {
    let mut endings = line_endings(bytes).map(|(_, ending)| ending);
    match endings.next() {
        Some(first) => endings.any(|ending| ending != first),
        None => false,
    }
}

#[must_use]
pub fn has_mixed_line_endings_str(s: &str) -> bool {
    has_mixed_line_endings(s.as_bytes())
}

/// Counts each kind of line ending, keyed in order of first appearance.
///
/// ```rust
/// use ascii_kit::line_ending::{census, LineEnding};
///
/// let counts = census(b"a\r\nb\nc\r\n");
/// let order: Vec<_> = counts.keys().copied().collect();
/// assert_eq!(order, vec![LineEnding::Crlf, LineEnding::Lf]);
/// assert_eq!(counts[&LineEnding::Crlf], 2);
/// ```
#[must_use]
pub fn census(bytes: &[u8]) -> IndexMap<LineEnding, usize> {
    let mut counts = IndexMap::with_capacity(3);
    for (_, ending) in line_endings(bytes) {
        *counts.entry(ending).or_insert(0) += 1;
    }
    counts
}

/// Rewrites every line ending in `bytes` to `to`.
///
/// Content between endings, and the number and order of lines, are preserved.
/// When `bytes` has no endings, or every ending already is `to`, the input is
/// returned borrowed and nothing is allocated. Normalizing twice to the same
/// target is the same as normalizing once.
#[must_use]
pub fn normalize(bytes: &[u8], to: LineEnding) -> Cow<'_, [u8]> {
    let mut output: Option<Vec<u8>> = None;
    let mut copied = 0;

    for (position, ending) in line_endings(bytes) {
        if output.is_none() && ending == to {
            continue;
        }
        let buffer = output.get_or_insert_with(|| {
            log::trace!("normalizing line endings to {to:?} from offset {position}");
            Vec::with_capacity(bytes.len() + bytes.len() / 16 + 1)
        });
        buffer.extend_from_slice(&bytes[copied..position]);
        buffer.extend_from_slice(to.as_bytes());
        copied = position + ending.len();
    }

    match output {
        Some(mut buffer) => {
            buffer.extend_from_slice(&bytes[copied..]);
            Cow::Owned(buffer)
        }
        None => Cow::Borrowed(bytes),
    }
}

/// [`normalize`] for string slices.
///
/// Line endings are single-byte ASCII characters, so every split point falls on
/// a character boundary and non-ASCII content is copied verbatim.
#[must_use]
pub fn normalize_str(s: &str, to: LineEnding) -> Cow<'_, str> {
    let mut output: Option<String> = None;
    let mut copied = 0;

    for (position, ending) in line_endings(s.as_bytes()) {
        if output.is_none() && ending == to {
            continue;
        }
        let buffer = output.get_or_insert_with(|| {
            log::trace!("normalizing line endings to {to:?} from offset {position}");
            String::with_capacity(s.len() + s.len() / 16 + 1)
        });
        buffer.push_str(&s[copied..position]);
        buffer.push_str(to.as_str());
        copied = position + ending.len();
    }

    match output {
        Some(mut buffer) => {
            buffer.push_str(&s[copied..]);
            Cow::Owned(buffer)
        }
        None => Cow::Borrowed(s),
    }
}
