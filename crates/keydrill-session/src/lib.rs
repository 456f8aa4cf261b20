//! One practice attempt: the generated text, the text cursor and, on the
//! romaji layout, the IME in front of it.
//!
//! `PracticeSession` takes raw keystrokes, turns them into kana when needed
//! and reports per-character feedback and the finished lesson.

mod cursor;
mod kana;
mod result;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use keydrill_core::event::InputEvent;
use keydrill_core::lesson::{GuidedLesson, KeyStatsMap, LessonKeys};
use keydrill_core::romaji::{romaji_options_for_kana, RomajiIme};
use rand::rngs::SmallRng;
use tracing::{debug, debug_span};

pub use cursor::{Feedback, Step, TextCursor};
pub use result::LessonResult;

pub struct PracticeSession {
    lesson: Arc<GuidedLesson>,
    lesson_keys: LessonKeys,
    rng: SmallRng,
    text: String,
    cursor: TextCursor,
    /// Present on the romaji layout only.
    ime: Option<RomajiIme>,
    ime_hints: Vec<&'static str>,
}

impl PracticeSession {
    /// Compute the key set from `stats` and generate the first text.
    pub fn new(lesson: Arc<GuidedLesson>, stats: &KeyStatsMap, mut rng: SmallRng) -> Self {
        let lesson_keys = lesson.update(stats);
        let text = lesson.generate(&lesson_keys, &mut rng);
        let ime = lesson.keyboard().is_romaji().then(RomajiIme::new);
        let cursor = TextCursor::new(&text);
        let mut session = Self {
            lesson,
            lesson_keys,
            rng,
            text,
            cursor,
            ime,
            ime_hints: Vec::new(),
        };
        session.update_hints();
        session
    }

    pub fn lesson_keys(&self) -> &LessonKeys {
        &self.lesson_keys
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> &TextCursor {
        &self.cursor
    }

    pub fn is_completed(&self) -> bool {
        self.cursor.completed()
    }

    pub fn ime_enabled(&self) -> bool {
        self.ime.is_some()
    }

    /// Romaji typed but not yet turned into kana.
    pub fn preedit(&self) -> &str {
        self.ime.as_ref().map_or("", RomajiIme::preedit)
    }

    pub fn ime_valid(&self) -> bool {
        self.ime.as_ref().map_or(true, RomajiIme::valid)
    }

    /// Spellings for the next expected kana.
    pub fn ime_hints(&self) -> &[&'static str] {
        &self.ime_hints
    }

    /// Feed one raw keystroke. Returns the feedback of every character that
    /// reached the text, possibly none while romaji is pending.
    pub fn on_input(&mut self, event: InputEvent) -> Vec<Feedback> {
        let _span = debug_span!("session_input", input_type = ?event.input_type).entered();

        let feedback = match self.ime.as_mut() {
            Some(ime) => {
                let res = ime.consume(event);
                let mut feedback = Vec::with_capacity(res.events.len());
                for ev in res.events {
                    if self.cursor.completed() {
                        break;
                    }
                    let mapped = kana::map_to_expected(ev, self.cursor.expected());
                    feedback.push(self.cursor.on_input(mapped));
                }
                feedback
            }
            None if self.cursor.completed() => Vec::new(),
            None => vec![self.cursor.on_input(event)],
        };
        self.update_hints();

        debug!(?feedback, pos = self.cursor.pos(), completed = self.cursor.completed());
        feedback
    }

    /// Start over on the same text.
    pub fn reset_lesson(&mut self) {
        self.cursor.reset();
        self.reset_ime();
    }

    /// Start over on a fresh text for the same key set.
    pub fn skip_lesson(&mut self) {
        self.text = self.lesson.generate(&self.lesson_keys, &mut self.rng);
        self.cursor = TextCursor::new(&self.text);
        self.reset_ime();
    }

    /// The finished lesson, once the whole text was typed.
    pub fn result(&self) -> Option<LessonResult> {
        if !self.cursor.completed() {
            return None;
        }
        let fold_kana = self.lesson.language().is_japanese();
        Some(LessonResult::new(
            &self.lesson.keyboard().layout_id,
            self.cursor.steps(),
            fold_kana,
        ))
    }

    fn reset_ime(&mut self) {
        if let Some(ime) = self.ime.as_mut() {
            ime.reset();
        }
        self.update_hints();
    }

    fn update_hints(&mut self) {
        self.ime_hints = if self.ime.is_some() && self.lesson.settings().japanese.show_romaji_helper
        {
            let kana = kana::expected_kana(&self.cursor);
            if kana.is_empty() {
                Vec::new()
            } else {
                romaji_options_for_kana(&kana)
            }
        } else {
            Vec::new()
        };
    }
}
