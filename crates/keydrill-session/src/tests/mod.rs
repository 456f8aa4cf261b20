
use std::sync::Arc;

use keydrill_core::event::InputEvent;
use keydrill_core::language::{Keyboard, Language, ROMAJI_LAYOUT};
use keydrill_core::lesson::{GuidedLesson, KeyStatsMap};
use keydrill_core::phonetic::{Filter, Letter, PhoneticModel, PUNCTUATORS};
use keydrill_core::settings::LessonSettings;
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use super::{Feedback, PracticeSession, TextCursor};

/// Always writes the same word.
pub(super) struct FixedWord {
    language: Language,
    letters: Vec<Letter>,
    word: &'static str,
}

impl FixedWord {
    pub(super) fn japanese(word: &'static str) -> Self {
        let letters = "あいうえおかきくけこ"
            .chars()
            .enumerate()
            .map(|(i, c)| Letter::new(c, 1.0 / (i + 1) as f64))
            .collect();
        Self {
            language: Language::japanese(),
            letters,
            word,
        }
    }

    pub(super) fn english(word: &'static str) -> Self {
        let letters = "etaoinshrd"
            .chars()
            .enumerate()
            .map(|(i, c)| Letter::new(c, 1.0 / (i + 1) as f64))
            .collect();
        Self {
            language: Language::english(),
            letters,
            word,
        }
    }
}

impl PhoneticModel for FixedWord {
    fn language(&self) -> &Language {
        &self.language
    }

    fn letters(&self) -> &[Letter] {
        &self.letters
    }

    fn next_word(&self, _filter: &Filter, _rng: &mut dyn RngCore) -> String {
        self.word.to_string()
    }
}

pub(super) fn pseudo_word_settings() -> LessonSettings {
    let mut settings = LessonSettings::default();
    settings.guided.natural_words = false;
    settings
}

pub(super) fn romaji_keyboard() -> Keyboard {
    Keyboard::uniform(ROMAJI_LAYOUT, ('a'..='z').chain(['-', '\'']))
}

pub(super) fn make_session(model: FixedWord, keyboard: Keyboard, settings: LessonSettings) -> PracticeSession {
    let lesson = Arc::new(GuidedLesson::new(
        settings,
        keyboard,
        Arc::new(model),
        Vec::<String>::new(),
    ));
    PracticeSession::new(lesson, &KeyStatsMap::new(), SmallRng::seed_from_u64(1))
}

/// Romaji session on a fixed practice text.
pub(super) fn romaji_session(text: &str) -> PracticeSession {
    let mut session = make_session(FixedWord::japanese("あいう"), romaji_keyboard(), pseudo_word_settings());
    session.load_text(text);
    session
}

/// Plain keyboard session on a fixed practice text.
pub(super) fn english_session(text: &str) -> PracticeSession {
    let keyboard = Keyboard::uniform("en-us", ('a'..='z').chain(PUNCTUATORS.iter().copied()));
    let mut session = make_session(FixedWord::english("tea"), keyboard, pseudo_word_settings());
    session.load_text(text);
    session
}

impl PracticeSession {
    pub(super) fn load_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.cursor = TextCursor::new(text);
        self.reset_ime();
    }
}

// Helper: simulate typing a string one key at a time, 100 ms apart
pub(super) fn type_keys(session: &mut PracticeSession, keys: &str) -> Vec<Feedback> {
    keys.chars()
        .enumerate()
        .flat_map(|(i, c)| session.on_input(InputEvent::append_char(c, 100.0, i as f64 * 100.0)))
        .collect()
}

pub(super) fn typed_text(session: &PracticeSession) -> String {
    session.cursor().steps().iter().map(|s| s.code_point).collect()
}
