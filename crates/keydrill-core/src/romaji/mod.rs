//! Romaji-to-kana input method.
//!
//! A trie of romaji spellings drives an incremental engine that turns ASCII
//! keystrokes into hiragana, handling sokuon (っ), hatsuon (ん), and yōon (きゃ).

mod config;
mod ime;
mod table;
mod trie;

#[cfg(test)]
mod proptest_ime;

pub use config::{parse_romaji_toml, RomajiTableError, SpellingEntry};
pub use ime::{ImeResult, RomajiIme};
pub use trie::{romaji_options_for_kana, RomajiMatch, RomajiTrie};
