//! INCITS 4-1986 (ANSI X3.4) as implemented by this crate
//!
//! This module documents the character ranges and conventions the rest of the
//! crate follows. It contains no code.
//!
//! # Code Table
//!
//! ASCII is a 7-bit code: byte values 0x00 through 0x7F. Bytes 0x80 through 0xFF
//! have no meaning in the standard. This crate treats them uniformly as
//! "non-ASCII": checked operations reject them and pass-through operations copy
//! them unchanged. They are never letters, digits, whitespace, control or
//! printable characters.
//!
//! | Range | Class | Predicate |
//! |-------|-------|-----------|
//! | 0x00-0x1F | Control | [`is_control`](crate::byte::is_control) |
//! | 0x20 | Space (printable, not visible) | [`is_printable`](crate::byte::is_printable) |
//! | 0x21-0x7E | Graphic (visible) | [`is_visible`](crate::byte::is_visible) |
//! | 0x7F | Delete (control) | [`is_control`](crate::byte::is_control) |
//!
//! Over 0x00-0x7F exactly one of `is_control` and `is_printable` holds.
//!
//! ## Letters and Digits
//!
//! | Range | Class |
//! |-------|-------|
//! | 0x30-0x39 | Digits `0`-`9` |
//! | 0x41-0x5A | Uppercase `A`-`Z` |
//! | 0x61-0x7A | Lowercase `a`-`z` |
//! | 0x41-0x46, 0x61-0x66 | Hex letters `A`-`F`, `a`-`f` |
//!
//! Each lowercase letter is its uppercase counterpart plus 0x20
//! ([`CASE_OFFSET`](crate::constants::CASE_OFFSET)). The six characters between
//! the two letter ranges (`[ \ ] ^ _` and `` ` ``) are not letters and are never
//! changed by case conversion.
//!
//! # Whitespace
//!
//! The whitespace set has exactly four members:
//!
//! | Byte | Name |
//! |------|------|
//! | 0x20 | SPACE |
//! | 0x09 | HT (horizontal tab) |
//! | 0x0A | LF (line feed) |
//! | 0x0D | CR (carriage return) |
//!
//! VT (0x0B) and FF (0x0C) are not members, even though some
//! other conventions (C's `isspace`, for one) include them.
//!
//! # Line Endings
//!
//! | Convention | Bytes |
//! |------------|-------|
//! | LF | `0x0A` |
//! | CR | `0x0D` |
//! | CRLF | `0x0D 0x0A` |
//!
//! A CR directly followed by LF is a single CRLF ending. Any other CR is a CR
//! ending on its own, including one at the very end of the input.
//!
//! # Wire Forms
//!
//! Built-in [`AsciiSerializable`](crate::AsciiSerializable) types use these
//! grammars:
//!
//! ```text
//! unsigned  = "0" / nonzero *digit
//! signed    = unsigned / "-" nonzero *digit
//! token     = 1*visible                      ; 0x21-0x7E
//! byte      = %x00-7F
//! timestamp = RFC 3339 date-time             ; serialized with "Z"
//! list      = field *(delimiter field)       ; or empty when allowed
//! pair      = first delimiter second         ; split at the first delimiter
//! ```
