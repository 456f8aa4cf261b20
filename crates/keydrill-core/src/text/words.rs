use std::sync::Arc;

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use crate::language::Language;
use crate::phonetic::{Filter, PhoneticModel};
use crate::unicode::hiragana_to_katakana;

/// Tries before a repeated word is let through.
const UNIQUE_RETRIES: usize = 10;
/// Share of words capitalized or punctuated mid-sentence.
const MANGLE_RATE: f64 = 0.1;
/// Every n-th balanced word is drawn for another unlocked key.
const BALANCE_PERIOD: usize = 4;

/// A pull-based word stream. `None` means the source has nothing to offer
/// right now; callers decide how to degrade.
pub trait Words {
    fn next_word(&mut self, rng: &mut dyn RngCore) -> Option<String>;
}

impl<W: Words + ?Sized> Words for Box<W> {
    fn next_word(&mut self, rng: &mut dyn RngCore) -> Option<String> {
        (**self).next_word(rng)
    }
}

/// Base word sources.
pub enum WordSource {
    /// Pseudo-words from a phonetic model.
    Phonetic {
        model: Arc<dyn PhoneticModel>,
        filter: Filter,
    },
    /// Uniform draw from a fixed list.
    Random(Vec<String>),
    Balanced(Box<Balanced>),
}

impl WordSource {
    pub fn phonetic(model: Arc<dyn PhoneticModel>, filter: Filter) -> Self {
        Self::Phonetic { model, filter }
    }
}

impl Words for WordSource {
    fn next_word(&mut self, rng: &mut dyn RngCore) -> Option<String> {
        match self {
            WordSource::Phonetic { model, filter } => {
                let word = model.next_word(filter, rng);
                (!word.is_empty()).then_some(word)
            }
            WordSource::Random(words) => words.choose(rng).cloned(),
            WordSource::Balanced(balanced) => balanced.next_word(rng),
        }
    }
}

/// Mostly draws from `base`, but every `BALANCE_PERIOD`-th word comes from
/// the next of `others` in round-robin order.
pub struct Balanced {
    base: WordSource,
    others: Vec<WordSource>,
    count: usize,
    next_other: usize,
}

impl Balanced {
    pub fn new(base: WordSource, others: Vec<WordSource>) -> Self {
        Self {
            base,
            others,
            count: 0,
            next_other: 0,
        }
    }

    fn next_word(&mut self, rng: &mut dyn RngCore) -> Option<String> {
        self.count += 1;
        if self.others.is_empty() || self.count % BALANCE_PERIOD != 0 {
            return self.base.next_word(rng);
        }
        let i = self.next_other % self.others.len();
        self.next_other += 1;
        self.others[i].next_word(rng)
    }
}

/// Suppresses immediate repetition of the same word.
pub struct UniqueWords<W> {
    inner: W,
    last: Option<String>,
}

impl<W: Words> UniqueWords<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, last: None }
    }
}

impl<W: Words> Words for UniqueWords<W> {
    fn next_word(&mut self, rng: &mut dyn RngCore) -> Option<String> {
        let mut word = self.inner.next_word(rng)?;
        for _ in 0..UNIQUE_RETRIES {
            if self.last.as_deref() != Some(word.as_str()) {
                break;
            }
            match self.inner.next_word(rng) {
                Some(next) => word = next,
                None => break,
            }
        }
        self.last = Some(word.clone());
        Some(word)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MangleOptions {
    pub capitals: bool,
    pub punctuators: bool,
}

/// Adds sentence capitalization and punctuation.
pub struct MangledWords<W> {
    inner: W,
    cased: bool,
    punctuators: Vec<char>,
    options: MangleOptions,
    sentence_start: bool,
}

impl<W: Words> MangledWords<W> {
    pub fn new(inner: W, language: &Language, punctuators: Vec<char>, options: MangleOptions) -> Self {
        Self {
            inner,
            cased: language.cased,
            punctuators,
            options,
            sentence_start: true,
        }
    }
}

impl<W: Words> Words for MangledWords<W> {
    fn next_word(&mut self, rng: &mut dyn RngCore) -> Option<String> {
        let mut word = self.inner.next_word(rng)?;
        if self.options.capitals && self.cased && (self.sentence_start || rng.gen_bool(MANGLE_RATE))
        {
            word = capitalize(&word);
        }
        self.sentence_start = false;
        if self.options.punctuators && !self.punctuators.is_empty() && rng.gen_bool(MANGLE_RATE) {
            if let Some(&p) = self.punctuators.choose(rng) {
                word.push(p);
                self.sentence_start = matches!(p, '.' | '!' | '?');
            }
        }
        Some(word)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rewrites a share of hiragana words in katakana.
pub struct KanaMix<W> {
    inner: W,
    katakana_ratio: f64,
}

impl<W: Words> KanaMix<W> {
    pub fn new(inner: W, katakana_ratio: f64) -> Self {
        Self {
            inner,
            katakana_ratio: katakana_ratio.clamp(0.0, 1.0),
        }
    }
}

impl<W: Words> Words for KanaMix<W> {
    fn next_word(&mut self, rng: &mut dyn RngCore) -> Option<String> {
        let word = self.inner.next_word(rng)?;
        if self.katakana_ratio > 0.0 && rng.gen_bool(self.katakana_ratio) {
            Some(hiragana_to_katakana(&word))
        } else {
            Some(word)
        }
    }
}
