//! Property-based tests for the RomajiIme state machine.
//!
//! Generates random keystroke sequences via proptest and verifies that
//! structural invariants hold after every event.

use proptest::prelude::*;

use super::{RomajiIme, RomajiTrie};
use crate::event::{InputEvent, InputType};

#[derive(Debug, Clone)]
enum Action {
    Type(char, u16),
    Space,
    LineBreak,
    Hyphen,
    ClearChar,
    ClearWord,
}

fn arb_romaji_char() -> impl Strategy<Value = char> {
    // Vowels at higher weight for more realistic romaji
    prop_oneof![
        3 => Just('a'),
        3 => Just('i'),
        3 => Just('u'),
        3 => Just('e'),
        3 => Just('o'),
        1 => Just('\''),
        2 => prop::sample::select(vec![
            'k', 's', 't', 'n', 'h', 'm', 'y', 'r', 'w',
            'g', 'z', 'd', 'b', 'p', 'c', 'f', 'j', 'l', 'v', 'x', 'q',
        ]),
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        40 => (arb_romaji_char(), 1u16..1000).prop_map(|(c, t)| Action::Type(c, t)),
        4 => Just(Action::Space),
        2 => Just(Action::LineBreak),
        2 => Just(Action::Hyphen),
        6 => Just(Action::ClearChar),
        1 => Just(Action::ClearWord),
    ]
}

fn to_event(action: &Action) -> InputEvent {
    match action {
        Action::Type(c, t) => InputEvent::append_char(*c, f64::from(*t), 0.0),
        Action::Space => InputEvent::append_char(' ', 100.0, 0.0),
        Action::LineBreak => InputEvent::line_break(100.0, 0.0),
        Action::Hyphen => InputEvent::append_char('-', 100.0, 0.0),
        Action::ClearChar => InputEvent::clear_char(0.0),
        Action::ClearWord => InputEvent::clear_word(0.0),
    }
}

fn is_valid_prefix(s: &str) -> bool {
    s.is_empty() || s == "n" || RomajiTrie::global().is_prefix(s)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn invariants_hold_after_every_event(actions in prop::collection::vec(arb_action(), 1..60)) {
        let mut ime = RomajiIme::new();
        for action in &actions {
            let event = to_event(action);
            let r = ime.consume(event);

            // The reported state matches the engine.
            prop_assert_eq!(&r.preedit, ime.preedit());
            prop_assert_eq!(r.valid, ime.valid());

            // Validity is exactly "the buffer is a prefix of some spelling".
            prop_assert_eq!(r.valid, is_valid_prefix(&r.preedit), "preedit={:?}", r.preedit);

            // Buffer holds only lower-case letters and apostrophes.
            prop_assert!(r.preedit.bytes().all(|b| b.is_ascii_lowercase() || b == b'\''));

            // Emitted characters are kana unless the event itself was forwarded.
            for out in &r.events {
                if out.input_type == InputType::AppendChar && *out != event {
                    prop_assert!(
                        crate::unicode::is_hiragana(out.code_point)
                            || out.code_point == crate::unicode::PROLONGED_SOUND_MARK,
                        "unexpected output {:?}", out.code_point
                    );
                }
            }
        }
    }

    #[test]
    fn complete_syllables_leave_nothing_pending(
        word in "[aiueo]{0,2}(k[aiueo]|sh[aiu]|kk[aiueo]|ky[auo]|n[aiueo]|nn|tsu){1,6}",
        times in prop::collection::vec(1u16..1000, 40),
    ) {
        let mut ime = RomajiIme::new();
        let mut events = Vec::new();
        for (c, t) in word.chars().zip(times.iter()) {
            events.extend(ime.consume(InputEvent::append_char(c, f64::from(*t), 0.0)).events);
        }
        prop_assert_eq!(ime.preedit(), "");
        prop_assert!(ime.valid());
        prop_assert!(!events.is_empty());

        // Every share is an average of some keystroke times.
        let used = &times[..word.len()];
        let min = f64::from(*used.iter().min().unwrap());
        let max = f64::from(*used.iter().max().unwrap());
        for e in &events {
            prop_assert!(e.time_to_type >= min - 1e-9 && e.time_to_type <= max + 1e-9);
        }
    }
}
