//! Application-wide constants and compile-time configuration.
//!
//! Timing parameters, USB identity, and pin assignments live here so
//! they can be tuned in one place.

// Playback pacing

/// A report is produced every 32nd ready tick (`ticks & MASK == 0`);
/// the remaining ticks keep the last submitted key state on the wire.
pub const TICK_GATE_MASK: u32 = 0x1F;

/// Gated ticks to idle at power-on, covering enumeration and the host
/// noticing the new keyboard.
pub const STARTUP_HOLD_TICKS: u16 = 300;

/// Gated ticks to idle when a script page requests a pause (`\a`).
pub const PAUSE_HOLD_TICKS: u16 = 100;

// USB

/// USB VID/PID - use the "pid.codes" open-source test VID.
/// Replace with your own allocated VID/PID for production.
pub const USB_VID: u16 = 0x1209;
pub const USB_PID: u16 = 0x0002;

/// USB device strings.
pub const USB_MANUFACTURER: &str = "pagetyper";
pub const USB_PRODUCT: &str = "Scripted HID Keyboard";
pub const USB_SERIAL_NUMBER: &str = "000001";

/// USB HID polling interval (ms). Also the playback tick period.
pub const USB_HID_POLL_MS: u8 = 1;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` pins are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button NEXT PAGE  → P0.11 (active low)
//   Button PREV PAGE  → P0.12 (active low)
