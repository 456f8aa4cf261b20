//! Character-level Unicode classification for kana practice text.

/// Katakana-Hiragana prolonged sound mark ー (U+30FC).
pub const PROLONGED_SOUND_MARK: char = '\u{30FC}';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes ー.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

/// Kana letters that have a counterpart in the other script.
/// Hiragana ぁ..ゖ pairs with katakana ァ..ヶ.
fn is_convertible_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

fn is_convertible_katakana(c: char) -> bool {
    ('\u{30A1}'..='\u{30F6}').contains(&c)
}

pub fn to_katakana(c: char) -> char {
    if is_convertible_hiragana(c) {
        char::from_u32(c as u32 + 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Fold a katakana letter to hiragana. The prolonged sound mark and every
/// non-kana character are returned unchanged.
pub fn to_hiragana(c: char) -> char {
    if is_convertible_katakana(c) {
        char::from_u32(c as u32 - 0x60).unwrap_or(c)
    } else {
        c
    }
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars().map(to_katakana).collect()
}

pub fn katakana_to_hiragana(s: &str) -> String {
    s.chars().map(to_hiragana).collect()
}
