//! HID report types and the script-character key map.

pub mod keyboard;
pub mod keymap;

pub use keyboard::KeyReport;
