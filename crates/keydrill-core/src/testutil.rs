//! Shared fixtures for unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use rand::RngCore;

use crate::language::{Keyboard, Language};
use crate::lesson::{KeyStats, KeyStatsMap, Target};
use crate::phonetic::{Filter, Letter, PhoneticModel, PUNCTUATORS};
use crate::settings::LessonSettings;

/// Ten letters `a..=j`, most frequent first.
pub const FAKE_LETTERS: [char; 10] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j'];

/// Cycles through a fixed word list and ignores the filter.
pub struct FakePhoneticModel {
    language: Language,
    letters: Vec<Letter>,
    words: Vec<String>,
    next: AtomicUsize,
}

impl FakePhoneticModel {
    pub fn new(words: &[&str]) -> Self {
        let letters = FAKE_LETTERS
            .iter()
            .enumerate()
            .map(|(i, &c)| Letter::new(c, (10 - i) as f64 / 55.0))
            .collect();
        Self {
            language: Language::english(),
            letters,
            words: words.iter().map(|w| w.to_string()).collect(),
            next: AtomicUsize::new(0),
        }
    }
}

impl PhoneticModel for FakePhoneticModel {
    fn language(&self) -> &Language {
        &self.language
    }

    fn letters(&self) -> &[Letter] {
        &self.letters
    }

    fn next_word(&self, _filter: &Filter, _rng: &mut dyn RngCore) -> String {
        if self.words.is_empty() {
            return String::new();
        }
        let i = self.next.fetch_add(1, Ordering::Relaxed);
        self.words[i % self.words.len()].clone()
    }
}

pub fn en_keyboard() -> Keyboard {
    Keyboard::uniform("en-us", ('a'..='z').chain(PUNCTUATORS.iter().copied()))
}

/// Statistics whose confidences under `settings` come out as given.
pub fn fake_key_stats_map(
    settings: &LessonSettings,
    rows: &[(char, Option<f64>, Option<f64>)],
) -> KeyStatsMap {
    let target = Target::from_settings(settings).time_to_type();
    let mut map = KeyStatsMap::new();
    for &(letter, confidence, best_confidence) in rows {
        let mut stats = KeyStats::empty(letter);
        stats.time_to_type = confidence.map(|c| target / c);
        stats.best_time_to_type = best_confidence.map(|c| target / c);
        map.insert(stats);
    }
    map
}
