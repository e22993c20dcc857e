//! USB Device subsystem - presents the playback keyboard to the host.
//!
//! The nRF52840's built-in USB 2.0 Full-Speed controller is driven by
//! `embassy-usb`.  A single HID interface carries the 2-byte keyboard
//! report; the LED output report arriving over SET_REPORT doubles as
//! the host-controlled playback suppression signal.

pub mod hid_device;
