//! Segment bit layout and glyph table
//!
//! Segment bits as wired on the display module:
//!
//! ```text
//!    -- a --
//!   |       |
//!   f       b
//!   |       |
//!    -- g --
//!   |       |
//!   e       c
//!   |       |
//!    -- d --   .dp
//! ```
//!
//! Bit 0 is segment `a`, bit 6 is segment `g`. Bit 7 drives the auxiliary
//! indicator, which on the 4-digit clock module is the colon between the
//! second and third digit.

/// Segment a (top)
pub const SEG_A: u8 = 0b0000_0001;
/// Segment b (top right)
pub const SEG_B: u8 = 0b0000_0010;
/// Segment c (bottom right)
pub const SEG_C: u8 = 0b0000_0100;
/// Segment d (bottom)
pub const SEG_D: u8 = 0b0000_1000;
/// Segment e (bottom left)
pub const SEG_E: u8 = 0b0001_0000;
/// Segment f (top left)
pub const SEG_F: u8 = 0b0010_0000;
/// Segment g (middle)
pub const SEG_G: u8 = 0b0100_0000;
/// Auxiliary indicator (colon / decimal point)
pub const SEG_DP: u8 = 0b1000_0000;

/// All segments off
pub const BLANK: u8 = 0;
/// Minus sign
pub const MINUS: u8 = SEG_G;
/// Degree symbol
pub const DEGREE: u8 = SEG_A | SEG_B | SEG_F | SEG_G;
/// Celsius symbol
pub const CELSIUS: u8 = SEG_A | SEG_D | SEG_E | SEG_F;

/// Number of entries in the glyph table
pub const GLYPH_COUNT: usize = 16;

/// Segment patterns for glyph values 0x0..=0xF
pub const GLYPHS: [u8; GLYPH_COUNT] = [
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
];

/// Look up the segment pattern for a glyph value
///
/// Returns `None` for values outside 0x0..=0xF.
pub fn glyph(value: u8) -> Option<u8> {
    GLYPHS.get(value as usize).copied()
}

/// Segment pattern for a glyph value reduced into the table range
///
/// Used where a digit is derived arithmetically and may exceed the table,
/// e.g. the tens digit of an unchecked hour value.
pub fn glyph_wrapping(value: u8) -> u8 {
    GLYPHS[value as usize % GLYPH_COUNT]
}

/// Set or clear the auxiliary indicator bit of a pattern
pub const fn with_dp(pattern: u8, on: bool) -> u8 {
    if on {
        pattern | SEG_DP
    } else {
        pattern & !SEG_DP
    }
}
