//! Conformance with the INCITS 4-1986 ranges, checked over all 256 byte values,
//! plus the documented behaviour of each component.

use ascii_kit::byte::{
    is_alphanumeric, is_ascii, is_control, is_digit, is_hex_digit, is_letter, is_lowercase,
    is_printable, is_uppercase, is_visible, is_whitespace,
};
use ascii_kit::case::{self, CaseKind};
use ascii_kit::constants::{control, ASCII_WHITESPACE, CASE_OFFSET};
use ascii_kit::line_ending::{self, LineEnding};
use ascii_kit::{bytes_to_string, string_to_bytes, trim, validate};

fn all_bytes() -> impl Iterator<Item = u8> {
    0..=u8::MAX
}

#[test]
fn test_classification_matches_range_table() {
    for b in all_bytes() {
        assert_eq!(is_ascii(b), b <= 0x7F, "ascii {b:#04x}");
        assert_eq!(is_control(b), b <= 0x1F || b == 0x7F, "control {b:#04x}");
        assert_eq!(is_printable(b), (0x20..=0x7E).contains(&b), "printable {b:#04x}");
        assert_eq!(is_visible(b), (0x21..=0x7E).contains(&b), "visible {b:#04x}");
        assert_eq!(
            is_whitespace(b),
            matches!(b, 0x20 | 0x09 | 0x0A | 0x0D),
            "whitespace {b:#04x}"
        );
        assert_eq!(is_digit(b), (0x30..=0x39).contains(&b), "digit {b:#04x}");
        assert_eq!(is_uppercase(b), (0x41..=0x5A).contains(&b), "upper {b:#04x}");
        assert_eq!(is_lowercase(b), (0x61..=0x7A).contains(&b), "lower {b:#04x}");
        assert_eq!(
            is_hex_digit(b),
            matches!(b, 0x30..=0x39 | 0x41..=0x46 | 0x61..=0x66),
            "hex {b:#04x}"
        );
    }
}

#[test]
fn test_classification_agrees_with_std_where_definitions_match() {
    for b in all_bytes() {
        assert_eq!(is_control(b), b.is_ascii_control(), "{b:#04x}");
        assert_eq!(is_visible(b), b.is_ascii_graphic(), "{b:#04x}");
        assert_eq!(is_letter(b), b.is_ascii_alphabetic(), "{b:#04x}");
        assert_eq!(is_hex_digit(b), b.is_ascii_hexdigit(), "{b:#04x}");
    }
    // std's notion of whitespace includes form feed; this crate's does not
    assert!(control::FF.is_ascii_whitespace());
    assert!(!is_whitespace(control::FF));
}

#[test]
fn test_control_and_printable_partition_ascii() {
    for b in 0..=0x7Fu8 {
        assert_ne!(is_control(b), is_printable(b), "{b:#04x}");
    }
    for b in 0x80..=0xFFu8 {
        assert!(!is_control(b) && !is_printable(b), "{b:#04x}");
    }
}

#[test]
fn test_class_implications() {
    for b in all_bytes() {
        assert!(!(is_uppercase(b) && is_lowercase(b)), "{b:#04x}");
        if is_letter(b) || is_digit(b) {
            assert!(is_alphanumeric(b), "{b:#04x}");
        }
        if is_visible(b) {
            assert!(is_printable(b), "{b:#04x}");
        }
        if is_whitespace(b) {
            assert!(!is_visible(b), "{b:#04x}");
        }
    }
}

#[test]
fn test_case_offset_for_every_letter_pair() {
    for (upper, lower) in (b'A'..=b'Z').zip(b'a'..=b'z') {
        assert_eq!(lower - upper, CASE_OFFSET);
        assert_eq!(case::to_uppercase_byte(lower), upper);
        assert_eq!(case::to_lowercase_byte(upper), lower);
    }
    for b in all_bytes().filter(|&b| !is_letter(b)) {
        assert_eq!(case::convert_byte(b, CaseKind::Upper), b);
        assert_eq!(case::convert_byte(b, CaseKind::Lower), b);
    }
}

#[test]
fn test_whitespace_set_constant() {
    assert_eq!(ASCII_WHITESPACE.len(), 4);
    assert!(ASCII_WHITESPACE.iter().all(|&b| is_whitespace(b)));
    assert!(!ASCII_WHITESPACE.contains(&control::VT));
    assert!(!ASCII_WHITESPACE.contains(&control::FF));
}

#[test]
fn test_documented_validation_examples() {
    assert!(validate::is_all_ascii(&[]));
    assert!(!validate::is_all_ascii(&[0x80]));
    assert!(validate::is_all_ascii(&[0x7F]));
    assert!(!validate::contains_non_ascii(&[]));
}

#[test]
fn test_documented_string_round_trip() {
    let bytes = string_to_bytes("Hello, World!").unwrap();
    assert_eq!(bytes_to_string(&bytes).as_deref(), Some("Hello, World!"));
}

#[test]
fn test_documented_line_ending_examples() {
    assert_eq!(line_ending::detect(b"a\r\nb"), Some(LineEnding::Crlf));
    assert_eq!(line_ending::detect(b"a\rb"), Some(LineEnding::Cr));
    assert_eq!(line_ending::detect(b"a\nb"), Some(LineEnding::Lf));
    assert_eq!(line_ending::detect(b"ab"), None);

    assert!(line_ending::has_mixed_line_endings(b"a\nb\r\nc"));
    assert!(!line_ending::has_mixed_line_endings(b"a\r\nb\r\n"));

    assert_eq!(
        line_ending::normalize_str("a\r\nb\nc\rd", LineEnding::Lf),
        "a\nb\nc\nd"
    );
}

#[test]
fn test_documented_trim_examples() {
    assert_eq!(trim::trim(b"  hello  ", &ASCII_WHITESPACE), b"hello");
    assert_eq!(trim::trim_str("xxHelloxx", &['x']), "Hello");
    let empty: &[u8] = &[];
    assert_eq!(trim::trim(b" s ", empty), b" s ");
}
