//! End-to-end playback scenarios for the pagetyper host-testable engine.

use pagetyper::config::{PAUSE_HOLD_TICKS, STARTUP_HOLD_TICKS};
use pagetyper::hid::keyboard::{
    KeyReport, KEY_A, KEY_ENTER, MOD_LEFT_ALT, MOD_LEFT_CTRL, MOD_LEFT_SHIFT,
};
use pagetyper::player::{NavSignals, Player};
use pagetyper::script::{Page, ScriptStore};

/// Run ready ticks until the player's next gated submission.
fn gated_tick(player: &mut Player<'_>) -> KeyReport {
    for _ in 0..64 {
        if let Some(report) = player.tick(true, NavSignals::NONE, false) {
            return report;
        }
    }
    panic!("no gated tick within 64 ready ticks");
}

/// Drive the player to the end of its script, returning every non-null
/// report in submission order.
fn play_keystrokes(store: &ScriptStore<'_>, limit: usize) -> Vec<KeyReport> {
    let mut player = Player::new(store);
    let mut out = Vec::new();
    let mut idle_run = 0;
    for _ in 0..limit {
        let report = gated_tick(&mut player);
        if report.is_null() {
            idle_run += 1;
            // Startup and pause holds are long; only a run well past
            // them means the page is exhausted.
            if idle_run > STARTUP_HOLD_TICKS as usize + PAUSE_HOLD_TICKS as usize {
                break;
            }
        } else {
            idle_run = 0;
            out.push(report);
        }
    }
    out
}

#[test]
fn types_hi_pause_enter() {
    // Script: "Hi", pause, newline. Ignoring pacing nulls, the wire
    // sees Shift+H, I, Enter, then page exhaustion.
    static PAGES: [Page<'static>; 1] = [Page::new(b"Hi\x07\n")];
    let store = ScriptStore::new(&PAGES);

    let keys = play_keystrokes(&store, 4096);
    assert_eq!(
        keys,
        vec![
            KeyReport::new(MOD_LEFT_SHIFT, KEY_A + 7), // 'H'
            KeyReport::new(0, KEY_A + 8),              // 'i'
            KeyReport::new(0, KEY_ENTER),
        ]
    );
}

#[test]
fn pause_holds_for_the_configured_ticks() {
    static PAGES: [Page<'static>; 1] = [Page::new(b"a\x07b")];
    let store = ScriptStore::new(&PAGES);
    let mut player = Player::new(&store);

    // Drain startup hold plus the pre-seeded null report.
    for _ in 0..STARTUP_HOLD_TICKS as usize + 1 {
        assert!(gated_tick(&mut player).is_null());
    }

    assert_eq!(gated_tick(&mut player), KeyReport::new(0, KEY_A));

    // Exactly PAUSE_HOLD_TICKS nulls, the pause's own null report, then 'b'.
    let mut nulls = 0;
    loop {
        let report = gated_tick(&mut player);
        if !report.is_null() {
            assert_eq!(report, KeyReport::new(0, KEY_A + 1));
            break;
        }
        nulls += 1;
        assert!(nulls <= PAUSE_HOLD_TICKS as usize + 1);
    }
    assert_eq!(nulls, PAUSE_HOLD_TICKS as usize + 1);
}

#[test]
fn stacked_modifiers_type_one_chord() {
    // Ctrl and Alt prefixes apply to the single following character.
    static PAGES: [Page<'static>; 1] = [Page::new(b"\x03\x04x")];
    let store = ScriptStore::new(&PAGES);

    let keys = play_keystrokes(&store, 2048);
    assert_eq!(
        keys,
        vec![KeyReport::new(MOD_LEFT_CTRL | MOD_LEFT_ALT, KEY_A + 23)]
    );
}

#[test]
fn high_byte_leaves_as_percent_hex_triple() {
    // 0xC3 must go out as '%', 'C', '3' - three distinct reports that
    // percent-decode back to the original byte.
    static PAGES: [Page<'static>; 1] = [Page::new(&[0xC3])];
    let store = ScriptStore::new(&PAGES);

    let keys = play_keystrokes(&store, 2048);
    assert_eq!(
        keys,
        vec![
            KeyReport::new(MOD_LEFT_SHIFT, 0x22), // '%'
            KeyReport::new(MOD_LEFT_SHIFT, KEY_A + 2), // 'C'
            KeyReport::new(0, 0x1E + 2),          // '3'
        ]
    );
}

#[test]
fn repeated_letters_are_separated_by_a_key_up() {
    static PAGES: [Page<'static>; 1] = [Page::new(b"ooo")];
    let store = ScriptStore::new(&PAGES);
    let mut player = Player::new(&store);

    for _ in 0..STARTUP_HOLD_TICKS as usize + 1 {
        assert!(gated_tick(&mut player).is_null());
    }

    let o = KeyReport::new(0, KEY_A + 14);
    assert_eq!(gated_tick(&mut player), o);
    assert_eq!(gated_tick(&mut player), KeyReport::NULL);
    assert_eq!(gated_tick(&mut player), o);
    assert_eq!(gated_tick(&mut player), KeyReport::NULL);
    assert_eq!(gated_tick(&mut player), o);
}

#[test]
fn demo_script_first_page_plays_without_panicking() {
    let mut player = Player::new(&pagetyper::script::pages::DEMO_SCRIPT);
    for _ in 0..20_000 {
        player.tick(true, NavSignals::NONE, false);
    }
}
