//! Script storage - immutable pages of pre-programmed keystroke data.
//!
//! A page is an opaque byte blob. Besides printable ASCII it may carry
//! in-band control bytes:
//!
//! - [`PREFIX_CTRL`] / [`PREFIX_ALT`] / [`PREFIX_GUI`]: hold the named
//!   modifier while typing the next character (prefixes stack)
//! - [`PAUSE`] (`\a`): insert a timed delay before continuing
//! - `0`: end of page (implicit past the last stored byte)
//! - bytes `>= 0x80`: carried as a `%XX` percent-hex escape, see
//!   [`escape`]
//!
//! Interpretation of these bytes belongs to the encoder and playback
//! layers; the store itself is a read-only array of blobs.

pub mod escape;
pub mod pages;

/// Hold left Ctrl for the next character.
pub const PREFIX_CTRL: u8 = 0x03;
/// Hold left Alt for the next character.
pub const PREFIX_ALT: u8 = 0x04;
/// Hold left GUI (Windows key) for the next character.
pub const PREFIX_GUI: u8 = 0x05;
/// Pause playback for a fixed number of ticks (`\a`).
pub const PAUSE: u8 = 0x07;

/// One immutable unit of scripted content.
///
/// The zero terminator is not stored; any read at or past the end of
/// the data yields `0`, so a page behaves as a zero-terminated byte
/// sequence without the callers needing a bounds pre-check.
#[derive(Clone, Copy, Debug)]
pub struct Page<'a>(&'a [u8]);

impl<'a> Page<'a> {
    pub const fn new(data: &'a [u8]) -> Self {
        Self(data)
    }

    /// Byte at `offset`, or the terminator value `0` when out of range.
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.0.get(offset).copied().unwrap_or(0)
    }

    /// Number of content bytes (terminator excluded).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fixed, ordered collection of pages, built at initialisation time and
/// never mutated. Page indices are contiguous `0..page_count()`.
#[derive(Clone, Copy, Debug)]
pub struct ScriptStore<'a> {
    pages: &'a [Page<'a>],
}

impl<'a> ScriptStore<'a> {
    /// Wrap a page list. At least one page is required.
    pub const fn new(pages: &'a [Page<'a>]) -> Self {
        assert!(!pages.is_empty(), "script store needs at least one page");
        Self { pages }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn page(&self, index: usize) -> Page<'a> {
        self.pages[index]
    }

    /// Read one byte of a page; `0` past the page end.
    pub fn byte_at(&self, page_index: usize, offset: usize) -> u8 {
        self.pages[page_index].byte_at(offset)
    }
}
