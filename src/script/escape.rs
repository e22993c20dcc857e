//! Percent-hex escape codec for non-ASCII page bytes.
//!
//! The keyboard channel can only type 7-bit ASCII, so any page byte
//! `>= 0x80` is spread over three keystrokes: `'%'`, then the high hex
//! nibble, then the low hex nibble. A companion decoder on the host
//! reassembles the bytes with standard URI percent-decoding.
//!
//! The raw byte is revisited on each of the three steps; the page
//! offset only moves past it when the low nibble has been emitted.

/// First character of an escape triple.
pub const ESCAPE_INTRODUCER: u8 = b'%';

/// Progress through the escape triple for one raw byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EscapeState {
    /// Not escaping; the next byte is read as-is.
    #[default]
    Idle,
    /// `'%'` has been emitted; the high nibble digit is next.
    HighNibble,
    /// High nibble emitted; the low nibble digit is next.
    LowNibble,
}

/// Uppercase hex digit for a nibble value.
pub fn hex_digit(nibble: u8) -> u8 {
    if nibble < 10 {
        b'0' + nibble
    } else {
        b'A' - 10 + nibble
    }
}

/// Run one codec step against the raw byte under the cursor.
///
/// Returns the effective character to encode this step and whether the
/// raw-byte offset advances afterwards. Bytes below 0x80 in the `Idle`
/// state pass straight through.
pub fn step(state: &mut EscapeState, raw: u8) -> (u8, bool) {
    match *state {
        EscapeState::Idle if raw >= 0x80 => {
            *state = EscapeState::HighNibble;
            (ESCAPE_INTRODUCER, false)
        }
        EscapeState::Idle => (raw, true),
        EscapeState::HighNibble => {
            *state = EscapeState::LowNibble;
            (hex_digit((raw >> 4) & 0xF), false)
        }
        EscapeState::LowNibble => {
            *state = EscapeState::Idle;
            (hex_digit(raw & 0xF), true)
        }
    }
}
