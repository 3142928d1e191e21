//! Named byte values from INCITS 4-1986.
//!
//! The [`control`] module names all 33 control characters. Graphic characters
//! are only named where the rest of the crate needs them.

/// Highest byte value in the ASCII range.
pub const ASCII_MAX: u8 = 0x7F;

/// Distance between an uppercase letter and its lowercase counterpart.
pub const CASE_OFFSET: u8 = 0x20;

/// The ASCII whitespace set used by trimming and classification.
///
/// Exactly SPACE, HTAB, LF and CR. Vertical tab and form feed are not members.
pub const ASCII_WHITESPACE: [u8; 4] = [SPACE, control::HT, control::LF, control::CR];

/// Control characters (0x00-0x1F and 0x7F).
pub mod control {
    pub const NUL: u8 = 0x00;
    pub const SOH: u8 = 0x01;
    pub const STX: u8 = 0x02;
    pub const ETX: u8 = 0x03;
    pub const EOT: u8 = 0x04;
    pub const ENQ: u8 = 0x05;
    pub const ACK: u8 = 0x06;
    pub const BEL: u8 = 0x07;
    pub const BS: u8 = 0x08;
    /// Horizontal tab.
    pub const HT: u8 = 0x09;
    /// Line feed.
    pub const LF: u8 = 0x0A;
    /// Vertical tab.
    pub const VT: u8 = 0x0B;
    /// Form feed.
    pub const FF: u8 = 0x0C;
    /// Carriage return.
    pub const CR: u8 = 0x0D;
    pub const SO: u8 = 0x0E;
    pub const SI: u8 = 0x0F;
    pub const DLE: u8 = 0x10;
    pub const DC1: u8 = 0x11;
    pub const DC2: u8 = 0x12;
    pub const DC3: u8 = 0x13;
    pub const DC4: u8 = 0x14;
    pub const NAK: u8 = 0x15;
    pub const SYN: u8 = 0x16;
    pub const ETB: u8 = 0x17;
    pub const CAN: u8 = 0x18;
    pub const EM: u8 = 0x19;
    pub const SUB: u8 = 0x1A;
    pub const ESC: u8 = 0x1B;
    pub const FS: u8 = 0x1C;
    pub const GS: u8 = 0x1D;
    pub const RS: u8 = 0x1E;
    pub const US: u8 = 0x1F;
    /// Delete, the only control character outside 0x00-0x1F.
    pub const DEL: u8 = 0x7F;
}

pub const SPACE: u8 = 0x20;
pub const EXCLAMATION_MARK: u8 = 0x21;
pub const PLUS_SIGN: u8 = 0x2B;
pub const COMMA: u8 = 0x2C;
pub const HYPHEN_MINUS: u8 = 0x2D;
pub const DIGIT_ZERO: u8 = 0x30;
pub const DIGIT_NINE: u8 = 0x39;
pub const COLON: u8 = 0x3A;
pub const SEMICOLON: u8 = 0x3B;
pub const UPPER_A: u8 = 0x41;
pub const UPPER_F: u8 = 0x46;
pub const UPPER_Z: u8 = 0x5A;
pub const LOWER_A: u8 = 0x61;
pub const LOWER_F: u8 = 0x66;
pub const LOWER_Z: u8 = 0x7A;
pub const VERTICAL_LINE: u8 = 0x7C;
pub const TILDE: u8 = 0x7E;
