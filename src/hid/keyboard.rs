//! USB HID keyboard report (simplified, one key at a time).
//!
//! Layout (2 bytes):
//! ```text
//! Byte 0: Modifier keys (bitfield)
//!         Bit 0 = Left Ctrl,  Bit 1 = Left Shift,
//!         Bit 2 = Left Alt,   Bit 3 = Left GUI,
//!         Bit 4 = Right Ctrl, Bit 5 = Right Shift,
//!         Bit 6 = Right Alt,  Bit 7 = Right GUI
//! Byte 1: Single key code (USB HID usage code)
//! ```
//!
//! The playback engine only ever presses one key (plus modifiers) at a
//! time, so the boot-protocol 6-key array is not needed.

/// Keyboard report size in bytes.
pub const KEY_REPORT_SIZE: usize = 2;

// Modifier bitfield values.
pub const MOD_LEFT_CTRL: u8 = 1 << 0;
pub const MOD_LEFT_SHIFT: u8 = 1 << 1;
pub const MOD_LEFT_ALT: u8 = 1 << 2;
pub const MOD_LEFT_GUI: u8 = 1 << 3;

// Key usage codes the encoder needs, see the HID usage tables,
// chapter 10 Keyboard/Keypad Page.
pub const KEY_A: u8 = 0x04;
pub const KEY_1: u8 = 0x1E;
pub const KEY_0: u8 = 0x27;
pub const KEY_ENTER: u8 = 0x28;
pub const KEY_TAB: u8 = 0x2B;

/// Two-byte keyboard input report: modifier bitfield plus one key code.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyReport {
    /// Modifier key bitfield.
    pub modifier: u8,
    /// Currently pressed key code (0 = no key).
    pub keycode: u8,
}

impl KeyReport {
    /// The all-keys-released report.
    pub const NULL: Self = Self {
        modifier: 0,
        keycode: 0,
    };

    pub const fn new(modifier: u8, keycode: u8) -> Self {
        Self { modifier, keycode }
    }

    /// Serialise into a byte slice for USB HID transmission.
    /// Returns the number of bytes written (always 2).
    pub fn serialize(&self, buf: &mut [u8]) -> usize {
        if buf.len() < KEY_REPORT_SIZE {
            return 0;
        }
        buf[0] = self.modifier;
        buf[1] = self.keycode;
        KEY_REPORT_SIZE
    }

    /// Returns `true` if no keys are pressed (release event).
    pub fn is_null(&self) -> bool {
        self.modifier == 0 && self.keycode == 0
    }
}

/// USB HID Report Descriptor for the playback keyboard.
///
/// Declares a 2-byte input report:
///   - 8 modifier key bits
///   - one 8-bit key code (102-key range)
/// plus a 1-byte output report:
///   - 5 LED indicator bits + 3 constant padding bits
///
/// No boot protocol and no 6-key array; one simultaneous key press
/// (besides modifiers) is all the playback engine produces.
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Key code (1 byte) -
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x25, 0x65, //   Logical Maximum (101)
    0x19, 0x00, //   Usage Minimum (Reserved, no event)
    0x29, 0x90, //   Usage Maximum (Keyboard Application)
    0x81, 0x00, //   Input (Data, Array)
    //
    //   - LED output (5 bits + 3 padding) -
    0x95, 0x05, //   Report Count (5)
    0x75, 0x01, //   Report Size (1)
    0x05, 0x08, //   Usage Page (LEDs)
    0x19, 0x01, //   Usage Minimum (Num Lock)
    0x29, 0x05, //   Usage Maximum (Kana)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    0x95, 0x01, //   Report Count (1)
    0x75, 0x03, //   Report Size (3)
    0x91, 0x03, //   Output (Constant, Variable, Absolute)
    //
    0xC0, // End Collection
];

/// CapsLock bit in the 1-byte LED output report. The host toggling this
/// LED is used as the playback suppression signal.
pub const LED_CAPS_LOCK: u8 = 1 << 1;
