//! Playback engine: cursor state machine and report pacing.
//!
//! [`Player::tick`] is called once per transport poll. Every 32nd ready
//! tick it hands back the report to submit: a null report during hold
//! pauses and duplicate-key gaps, otherwise the report built on the
//! previous pass, after which the cursor advances and the next report is
//! built. Keeping one report in flight means key-state changes are never
//! lost between polls.

use crate::config::{PAUSE_HOLD_TICKS, STARTUP_HOLD_TICKS, TICK_GATE_MASK};
use crate::hid::keymap::encode_char;
use crate::hid::keyboard::{
    KeyReport, MOD_LEFT_ALT, MOD_LEFT_CTRL, MOD_LEFT_GUI,
};
use crate::script::escape::{self, EscapeState};
use crate::script::{ScriptStore, PAUSE, PREFIX_ALT, PREFIX_CTRL, PREFIX_GUI};

/// `last_key` value that can never match a built report's keycode,
/// forcing the next gated tick to submit.
const LAST_KEY_NONE: u8 = 0xFF;

/// Read position within the script store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Active page index, always `< page_count`.
    pub page: usize,
    /// Raw-byte offset into the active page.
    pub offset: usize,
    /// Escape codec progress for the byte under `offset`.
    pub escape: EscapeState,
}

impl Cursor {
    pub const fn start() -> Self {
        Self {
            page: 0,
            offset: 0,
            escape: EscapeState::Idle,
        }
    }

    /// Move to the next page if one exists; no-op on the last page.
    fn advance_page(&mut self, page_count: usize) {
        if self.page + 1 < page_count {
            self.rewind_to(self.page + 1);
        }
    }

    /// Move to the previous page if one exists; no-op on page 0.
    fn retreat_page(&mut self) {
        if self.page > 0 {
            self.rewind_to(self.page - 1);
        }
    }

    fn rewind_to(&mut self, page: usize) {
        self.page = page;
        self.offset = 0;
        self.escape = EscapeState::Idle;
    }
}

/// Outcome of one decode step, consumed by the pacing policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Decoded {
    /// An effective character was encoded (value kept for inspection).
    Key(u8),
    /// The pause sentinel (`\a`) was consumed.
    Pause,
    /// The page terminator was reached; the cursor did not advance.
    PageEnd,
}

/// Decode one step of the byte stream into a key report.
///
/// Consumes any run of modifier-prefix bytes (each stacks its modifier
/// bit idempotently), runs the escape codec on the byte reached, and
/// maps the effective character through the key table. The cursor
/// commits past consumed prefixes on every step; the raw byte itself is
/// held while an escape triple is mid-flight.
pub fn decode_step(store: &ScriptStore<'_>, cursor: &mut Cursor) -> (KeyReport, Decoded) {
    let page = store.page(cursor.page);
    let mut pos = cursor.offset;
    let mut mods = 0u8;

    let mut raw = page.byte_at(pos);
    while let Some(bit) = modifier_bit(raw) {
        mods |= bit;
        pos += 1;
        raw = page.byte_at(pos);
    }

    let (effective, consume) = escape::step(&mut cursor.escape, raw);

    if effective == 0 {
        // Terminator: prefixes (if any) are dropped, the offset parks
        // here so repeated steps keep reporting the page end.
        cursor.offset = pos;
        return (KeyReport::NULL, Decoded::PageEnd);
    }

    let mut report = encode_char(effective);
    report.modifier |= mods;

    cursor.offset = if consume { pos + 1 } else { pos };

    let decoded = if effective == PAUSE {
        Decoded::Pause
    } else {
        Decoded::Key(effective)
    };
    (report, decoded)
}

fn modifier_bit(c: u8) -> Option<u8> {
    match c {
        PREFIX_CTRL => Some(MOD_LEFT_CTRL),
        PREFIX_ALT => Some(MOD_LEFT_ALT),
        PREFIX_GUI => Some(MOD_LEFT_GUI),
        _ => None,
    }
}

/// Page navigation inputs, sampled on page exhaustion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NavSignals {
    /// Step to the next page.
    pub next: bool,
    /// Step back to the previous page.
    pub prev: bool,
}

impl NavSignals {
    pub const NONE: Self = Self {
        next: false,
        prev: false,
    };
}

/// Report pacing controller.
///
/// Owns all mutable playback state; the transport layer calls
/// [`Player::tick`] and submits whatever report comes back.
pub struct Player<'a> {
    store: &'a ScriptStore<'a>,
    cursor: Cursor,
    /// Report built ahead on the previous pass, submitted next.
    report: KeyReport,
    /// Keycode of the last submitted report, for duplicate suppression.
    last_key: u8,
    /// Remaining gated ticks to idle with null reports.
    hold: u16,
    /// Free-running ready-tick counter.
    ticks: u32,
}

impl<'a> Player<'a> {
    pub fn new(store: &'a ScriptStore<'a>) -> Self {
        Self {
            store,
            cursor: Cursor::start(),
            report: KeyReport::NULL,
            last_key: LAST_KEY_NONE,
            // Give the host time to finish enumeration and settle
            // before the first keystroke.
            hold: STARTUP_HOLD_TICKS,
            ticks: 0,
        }
    }

    /// Current cursor position (read-only).
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Advance the playback state machine by one transport poll.
    ///
    /// Returns the report to submit this tick, or `None` when nothing
    /// should be sent (transport not ready, off-gate tick, or playback
    /// suppressed). The tick counter only runs on ready ticks, so the
    /// 32-tick gate paces against actual host polling.
    pub fn tick(&mut self, ready: bool, nav: NavSignals, suppress: bool) -> Option<KeyReport> {
        if !ready {
            return None;
        }

        let on_gate = self.ticks & TICK_GATE_MASK == 0;
        self.ticks = self.ticks.wrapping_add(1);
        if !on_gate || suppress {
            return None;
        }

        // Timed pause: burn the tick with an all-keys-up report.
        if self.hold > 0 {
            self.hold -= 1;
            return Some(KeyReport::NULL);
        }

        // The same keycode twice in a row would read as one held key;
        // force a key-up pulse in between.
        if self.last_key == self.report.keycode {
            self.last_key = LAST_KEY_NONE;
            return Some(KeyReport::NULL);
        }

        let out = self.report;
        self.last_key = out.keycode;

        let (next, decoded) = decode_step(self.store, &mut self.cursor);
        self.report = next;
        match decoded {
            Decoded::Pause => self.hold = PAUSE_HOLD_TICKS,
            Decoded::PageEnd => {
                if nav.next {
                    self.cursor.advance_page(self.store.page_count());
                }
                if nav.prev {
                    self.cursor.retreat_page();
                }
            }
            Decoded::Key(_) => {}
        }

        Some(out)
    }
}
