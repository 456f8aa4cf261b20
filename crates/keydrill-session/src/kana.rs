//! Glue between IME output and kana practice text.

use keydrill_core::event::{InputEvent, InputType};
use keydrill_core::unicode::{is_hiragana, is_katakana, to_hiragana, to_katakana, PROLONGED_SOUND_MARK};

use super::cursor::TextCursor;

fn is_small_y(c: char) -> bool {
    matches!(c, 'ゃ' | 'ゅ' | 'ょ')
}

/// The IME always writes hiragana; write katakana where the text expects it.
pub(crate) fn map_to_expected(event: InputEvent, expected: Option<char>) -> InputEvent {
    if event.input_type != InputType::AppendChar || event.code_point == PROLONGED_SOUND_MARK {
        return event;
    }
    match expected {
        Some(expected) if is_katakana(expected) && is_hiragana(event.code_point) => {
            event.with_char(to_katakana(event.code_point), event.time_to_type)
        }
        _ => event,
    }
}

/// Kana the learner should type next, in hiragana. Includes a following
/// small ゃゅょ so hints show the whole syllable.
pub(crate) fn expected_kana(cursor: &TextCursor) -> String {
    let Some(a) = cursor.expected().map(to_hiragana) else {
        return String::new();
    };
    let b = cursor.at(cursor.pos() + 1).map(to_hiragana);
    match b {
        Some(b) if is_hiragana(a) && is_small_y(b) => [a, b].iter().collect(),
        _ if is_hiragana(a) || a == PROLONGED_SOUND_MARK => a.to_string(),
        _ => String::new(),
    }
}
