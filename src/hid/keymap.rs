//! Script character to key report translation.
//!
//! Maps one decoded script byte to a `(modifier, keycode)` pair for a
//! JIS-layout host. Characters outside the handled set map to the null
//! report: playback drops them and keeps going rather than halting.

use super::keyboard::{
    KeyReport, KEY_0, KEY_1, KEY_A, KEY_ENTER, KEY_TAB, MOD_LEFT_SHIFT,
};

/// Encode an entry that needs no modifier.
const fn n(keycode: u8) -> KeyReport {
    KeyReport::new(0, keycode)
}

/// Encode an entry typed with Shift held.
const fn s(keycode: u8) -> KeyReport {
    KeyReport::new(MOD_LEFT_SHIFT, keycode)
}

/// Key table for the 32 characters 0x20..=0x3F (space, punctuation and
/// digits), indexed by `c - 0x20`.
static SYMBOL_TABLE: [KeyReport; 32] = [
    n(0x2C),         // ' '
    s(0x1E),         // '!'
    s(0x1F),         // '"'
    s(0x20),         // '#'
    s(0x21),         // '$'
    s(0x22),         // '%'
    s(0x23),         // '&'
    s(0x24),         // '\''
    s(0x25),         // '('
    s(0x26),         // ')'
    s(0x34),         // '*'
    s(0x33),         // '+'
    n(0x36),         // ','
    n(0x2D),         // '-'
    n(0x37),         // '.'
    n(0x38),         // '/'
    n(KEY_0),        // '0'
    n(KEY_1),        // '1'
    n(KEY_1 + 1),    // '2'
    n(KEY_1 + 2),    // '3'
    n(KEY_1 + 3),    // '4'
    n(KEY_1 + 4),    // '5'
    n(KEY_1 + 5),    // '6'
    n(KEY_1 + 6),    // '7'
    n(KEY_1 + 7),    // '8'
    n(KEY_1 + 8),    // '9'
    n(0x34),         // ':'
    n(0x33),         // ';'
    s(0x36),         // '<'
    s(0x2D),         // '='
    s(0x37),         // '>'
    s(0x38),         // '?'
];

/// Map one effective script character to a key report.
///
/// Unhandled characters return `KeyReport::NULL` so a malformed page
/// degrades to a skipped keystroke, never an error.
pub fn encode_char(c: u8) -> KeyReport {
    match c {
        b'\n' => n(KEY_ENTER),
        b'\t' => n(KEY_TAB),
        b'a'..=b'z' => n(c - b'a' + KEY_A),
        b'A'..=b'Z' => s(c - b'A' + KEY_A),
        0x20..=0x3F => SYMBOL_TABLE[(c - 0x20) as usize],
        b'[' => n(0x30),
        b']' => n(0x32),
        b'{' => s(0x30),
        b'}' => s(0x32),
        b'\\' => n(0x87),
        b'^' => n(0x2E),
        b'|' => s(0x89),
        _ => KeyReport::NULL,
    }
}
