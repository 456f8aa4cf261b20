use rand::RngCore;
use tracing::{debug, debug_span};

use super::words::Words;
use super::PLACEHOLDER;
use crate::settings::LessonSettings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FragmentOptions {
    /// Stop once this many letters (spaces excluded) were collected.
    pub letters: usize,
    /// Hard cap on the word count.
    pub words: usize,
    /// Each drawn word is written this many times in a row.
    pub repeat_words: usize,
}

impl FragmentOptions {
    pub fn from_settings(settings: &LessonSettings) -> Self {
        Self {
            letters: settings.text.fragment_letters,
            words: settings.text.fragment_words,
            repeat_words: settings.text.repeat_words.max(1),
        }
    }
}

impl Default for FragmentOptions {
    fn default() -> Self {
        Self {
            letters: 100,
            words: 100,
            repeat_words: 1,
        }
    }
}

/// Collect words into one space-separated line of practice text.
///
/// A source that runs dry contributes the placeholder word instead, so the
/// fragment always reaches its size limit.
pub fn generate_fragment(
    words: &mut dyn Words,
    rng: &mut dyn RngCore,
    options: FragmentOptions,
) -> String {
    let _span = debug_span!("generate_fragment").entered();

    let mut out: Vec<String> = Vec::new();
    let mut letters = 0usize;
    let mut placeholders = 0usize;
    let full = |out: &Vec<String>, letters: usize| {
        letters >= options.letters || out.len() >= options.words
    };

    while !full(&out, letters) {
        let word = match words.next_word(rng) {
            Some(word) if !word.is_empty() => word,
            _ => {
                placeholders += 1;
                PLACEHOLDER.to_string()
            }
        };
        for _ in 0..options.repeat_words.max(1) {
            if full(&out, letters) {
                break;
            }
            letters += word.chars().count();
            out.push(word.clone());
        }
    }

    debug!(words = out.len(), letters, placeholders);
    out.join(" ")
}
