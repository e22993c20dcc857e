//! Host-testable library interface for pagetyper.
//!
//! The playback engine (script store, character encoding, escape codec,
//! cursor and pacing) is pure logic with no hardware dependencies, so
//! all of it lives here and is tested on the host with `cargo test`.
//!
//! The embedded binary in main.rs (`--features embedded`) drives this
//! engine from the Embassy USB stack on an nRF52840.

#![cfg_attr(not(test), no_std)]

pub mod config;
pub mod hid;
pub mod player;
pub mod script;

#[cfg(feature = "embedded")]
pub mod usb;

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
