use tracing::{debug, debug_span};

use super::trie::RomajiTrie;
use crate::event::{InputEvent, InputType};
use crate::unicode::PROLONGED_SOUND_MARK;

const NASAL: &str = "ん";
const GEMINATE: &str = "っ";

#[derive(Debug, Clone, PartialEq)]
pub struct ImeResult {
    /// Events for the text matcher, in order.
    pub events: Vec<InputEvent>,
    /// Romaji typed but not yet committed.
    pub preedit: String,
    pub valid: bool,
}

fn is_vowel(b: u8) -> bool {
    matches!(b, b'a' | b'i' | b'u' | b'e' | b'o')
}

fn is_consonant(b: u8) -> bool {
    b.is_ascii_lowercase() && !is_vowel(b)
}

/// Streaming romaji-to-kana transliteration for a single practice attempt.
///
/// Raw keystrokes go in one at a time; committed kana come out as
/// `AppendChar` events whose `time_to_type` is the consumed keystroke time
/// spread evenly over the keystrokes of the spelling.
pub struct RomajiIme {
    trie: &'static RomajiTrie,
    /// Lower-case ASCII letters and apostrophes. `buffer.len() == times.len()`.
    buffer: String,
    times: Vec<f64>,
    valid: bool,
}

impl Default for RomajiIme {
    fn default() -> Self {
        Self::new()
    }
}

impl RomajiIme {
    pub fn new() -> Self {
        Self::with_trie(RomajiTrie::global())
    }

    pub fn with_trie(trie: &'static RomajiTrie) -> Self {
        Self {
            trie,
            buffer: String::new(),
            times: Vec::new(),
            valid: true,
        }
    }

    pub fn reset(&mut self) {
        self.buffer.clear();
        self.times.clear();
        self.valid = true;
    }

    pub fn preedit(&self) -> &str {
        &self.buffer
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn consume(&mut self, event: InputEvent) -> ImeResult {
        let _span = debug_span!("ime_consume", input_type = ?event.input_type).entered();

        match event.input_type {
            InputType::AppendLineBreak => self.flush_then_forward(event, true),
            InputType::ClearWord => {
                self.reset();
                self.result(vec![event])
            }
            InputType::ClearChar => {
                if self.buffer.pop().is_some() {
                    self.times.pop();
                    self.valid = self.is_prefix(&self.buffer);
                    self.result(Vec::new())
                } else {
                    self.result(vec![event])
                }
            }
            InputType::AppendChar => self.append_char(event),
        }
    }

    fn append_char(&mut self, event: InputEvent) -> ImeResult {
        let ch = event.code_point;
        if ch == ' ' {
            // A lone trailing "n" stays pending across a space; ん needs
            // "nn", "n'" or a following consonant.
            return self.flush_then_forward(event, false);
        }
        if ch == '-' {
            // Hard boundary: a pending lone "n" commits as ん before the ー.
            let mark = event.with_char(PROLONGED_SOUND_MARK, event.time_to_type);
            return self.flush_then_forward(mark, true);
        }
        if ch.is_ascii_alphabetic() || ch == '\'' {
            self.buffer.push(ch.to_ascii_lowercase());
            self.times.push(event.time_to_type);
            let events = self.flush(false, &event);
            self.valid = self.is_prefix(&self.buffer);
            return self.result(events);
        }
        self.flush_then_forward(event, true)
    }

    /// Flush, then pass `event` through only if nothing is left pending.
    /// Otherwise the boundary key is swallowed until the preedit is fixed.
    fn flush_then_forward(&mut self, event: InputEvent, at_boundary: bool) -> ImeResult {
        let mut events = self.flush(at_boundary, &event);
        if self.buffer.is_empty() && self.valid {
            events.push(event);
        }
        self.result(events)
    }

    fn flush(&mut self, at_boundary: bool, source: &InputEvent) -> Vec<InputEvent> {
        let trie = self.trie;
        let mut out = Vec::new();

        while !self.buffer.is_empty() {
            let bytes = self.buffer.as_bytes();

            // ん: "n'", "nn", lone "n" at a boundary, or "n" before a consonant.
            if bytes.starts_with(b"n'") || bytes.starts_with(b"nn") {
                self.commit(NASAL, 2, source, &mut out);
                continue;
            }
            if bytes == b"n" {
                if at_boundary {
                    self.commit(NASAL, 1, source, &mut out);
                }
                break;
            }
            if bytes[0] == b'n' {
                let next = bytes[1];
                if !is_vowel(next) && next != b'y' && next != b'\'' {
                    self.commit(NASAL, 1, source, &mut out);
                    continue;
                }
            }

            // っ: doubled consonant. The marker takes the first keystroke's time.
            if bytes.len() >= 2 && bytes[0] == bytes[1] && is_consonant(bytes[0]) {
                self.commit(GEMINATE, 1, source, &mut out);
                continue;
            }

            let Some(m) = trie.find_best_match(&self.buffer) else {
                if !self.is_prefix(&self.buffer) {
                    debug!(buffer = %self.buffer, "invalid romaji");
                    self.valid = false;
                }
                break;
            };

            // A table that maps "n" alone must not shadow "na", "nya", etc.
            if m.len == 1 && bytes[0] == b'n' {
                if self.buffer.len() > 1 {
                    self.valid = false;
                }
                break;
            }

            self.commit(m.kana, m.len, source, &mut out);
        }

        self.valid = self.is_prefix(&self.buffer);
        out
    }

    /// Consume `strokes` buffered keys and emit one event per kana character.
    fn commit(
        &mut self,
        kana: &str,
        strokes: usize,
        source: &InputEvent,
        out: &mut Vec<InputEvent>,
    ) {
        let total: f64 = self.times.drain(..strokes).sum();
        self.buffer.drain(..strokes);
        debug_assert_eq!(self.buffer.len(), self.times.len());

        // Per physical keystroke, so multi-key spellings do not look slow.
        let per = total / strokes as f64;
        debug!(kana, strokes, per);
        out.extend(kana.chars().map(|c| source.with_char(c, per)));
    }

    fn is_prefix(&self, s: &str) -> bool {
        s.is_empty() || s == "n" || self.trie.is_prefix(s)
    }

    fn result(&self, events: Vec<InputEvent>) -> ImeResult {
        ImeResult {
            events,
            preedit: self.buffer.clone(),
            valid: self.valid,
        }
    }
}
