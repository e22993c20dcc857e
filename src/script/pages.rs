//! Built-in demo script: a small self-describing "slide deck".
//!
//! Page 0 opens a plain-text editor through the GUI+r run dialog, with
//! pauses so the host can settle, then types a title slide. Each later
//! page selects the previous slide's text (Ctrl+A) so typing replaces
//! it, then copies the result (Ctrl+C). Page content is payload data;
//! nothing in the playback engine depends on it.

use super::{Page, ScriptStore};

static DEMO_PAGES: [Page<'static>; 5] = [
    // Open the editor, wait for focus, then the title slide.
    Page::new(
        b"\x05r\x07notepad\n\x07\x07\
          \x03a\n\n  pagetyper\n\n  a keyboard that types by itself\x03a\x03c\x07",
    ),
    Page::new(
        b"\x03a\nhow it works\n\n\
          - the device enumerates as a plain usb keyboard\n\
          - script pages are compiled into flash\n\
          - two buttons step between pages\x03a\x03c\x07",
    ),
    Page::new(
        b"\x03a\nevery character is a synthetic keystroke:\n\n\
            modifiers stack: \x03\x04x types ctrl-alt-x\n\
            shifted symbols: !\"#$%&'()\x03a\x03c\x07",
    ),
    // Multibyte text leaves the device as %XX percent-hex triples for a
    // host-side decoder to reassemble.
    Page::new(
        b"\x03a\nnon-ascii bytes are percent-escaped:\n\n  \
          \xE3\x81\x93\xE3\x82\x93\xE3\x81\xAB\xE3\x81\xA1\xE3\x81\xAF\x03a\x03c\x07",
    ),
    Page::new(b"\x03a\n\n  end of demo.\x03a\x03c"),
];

/// The compiled-in demo script store.
pub static DEMO_SCRIPT: ScriptStore<'static> = ScriptStore::new(&DEMO_PAGES);
