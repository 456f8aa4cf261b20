use std::sync::Arc;

use rand::RngCore;
use tracing::{debug, debug_span};

use super::key::{LessonKey, LessonKeys};
use super::stats::KeyStatsMap;
use super::target::Target;
use crate::language::{Keyboard, Language};
use crate::phonetic::{Filter, Letter, PhoneticModel, PUNCTUATORS};
use crate::settings::{settings, LessonSettings};
use crate::text::{
    generate_fragment, Balanced, Dictionary, FragmentOptions, KanaMix, MangleOptions,
    MangledWords, UniqueWords, WordSource, Words, PLACEHOLDER,
};

/// Keys unlocked no matter how they perform.
pub const MIN_KEYS: usize = 6;
/// Dictionary words kept per generation.
const MAX_NATURAL_WORDS: usize = 1000;
/// Keys the romaji IME consumes itself; never written as punctuation.
const ROMAJI_KEYS: &[char] = &['\'', '-'];
/// Natural word lists shorter than this are topped up with pseudo-words.
const MIN_NATURAL_WORDS: usize = 15;

/// Adaptive lesson: unlocks keys as the learner reaches the target speed and
/// writes practice text around the weakest one.
pub struct GuidedLesson {
    settings: LessonSettings,
    keyboard: Keyboard,
    model: Arc<dyn PhoneticModel>,
    dictionary: Dictionary,
}

impl GuidedLesson {
    pub fn new<I, S>(
        settings: LessonSettings,
        keyboard: Keyboard,
        model: Arc<dyn PhoneticModel>,
        word_list: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let dictionary = if model.language().is_japanese() {
            let letters = model.letters();
            Dictionary::new(word_list, |c| letters.iter().any(|l| l.code_point == c))
        } else {
            Dictionary::new(word_list, |c| keyboard.contains(c))
        };
        Self {
            settings,
            keyboard,
            model,
            dictionary,
        }
    }

    /// Same as [`GuidedLesson::new`] with the process-wide settings.
    pub fn with_global_settings<I, S>(
        keyboard: Keyboard,
        model: Arc<dyn PhoneticModel>,
        word_list: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(settings().clone(), keyboard, model, word_list)
    }

    pub fn settings(&self) -> &LessonSettings {
        &self.settings
    }

    pub fn keyboard(&self) -> &Keyboard {
        &self.keyboard
    }

    pub fn language(&self) -> &Language {
        self.model.language()
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The model's letters, most frequent first.
    pub fn letters(&self) -> &[Letter] {
        self.model.letters()
    }

    /// Presentation order: script order for Japanese, otherwise frequency,
    /// optionally weighted by keyboard position.
    pub fn ordered_letters(&self) -> Vec<Letter> {
        let letters = self.model.letters();
        let language = self.model.language();
        if language.is_japanese() {
            Letter::alphabet_order(letters, &language.alphabet)
        } else if self.settings.guided.keyboard_order {
            Letter::weighted_frequency_order(letters, |c| self.keyboard.weight(c))
        } else {
            Letter::frequency_order(letters)
        }
    }

    /// Recompute the key set from a statistics snapshot.
    pub fn update(&self, stats: &KeyStatsMap) -> LessonKeys {
        let _span = debug_span!("lesson_update").entered();

        let target = Target::from_settings(&self.settings);
        let keys = self
            .ordered_letters()
            .into_iter()
            .map(|letter| LessonKey::from_stats(letter, stats.get(letter.code_point), &target))
            .collect();
        let lesson_keys = select_keys(
            keys,
            self.settings.guided.alphabet_size,
            self.settings.guided.recover_keys,
        );

        debug!(
            total = lesson_keys.len(),
            included = lesson_keys.find_included_keys().len(),
            focused = ?lesson_keys.find_focused_key().map(LessonKey::code_point),
        );
        lesson_keys
    }

    /// Practice text for a key set.
    pub fn generate(&self, lesson_keys: &LessonKeys, rng: &mut dyn RngCore) -> String {
        let included = lesson_keys.included_code_points();
        let focused = lesson_keys.find_focused_key().map(LessonKey::code_point);

        let source = if self.balances_kana() {
            self.balanced_source(&included, focused, rng)
        } else {
            self.word_source(Filter::new(included.iter().copied(), focused), rng)
        };

        let punctuators = Letter::restrict(PUNCTUATORS, |c| {
            self.keyboard.contains(c) && !(self.uses_ime() && ROMAJI_KEYS.contains(&c))
        });
        let options = MangleOptions {
            capitals: self.settings.text.capitals,
            punctuators: self.settings.text.punctuators,
        };
        let mangled = MangledWords::new(UniqueWords::new(source), self.language(), punctuators, options);
        let mut words: Box<dyn Words> = if self.language().is_japanese() {
            Box::new(KanaMix::new(mangled, self.settings.japanese.katakana_ratio))
        } else {
            Box::new(mangled)
        };

        generate_fragment(&mut words, rng, FragmentOptions::from_settings(&self.settings))
    }

    /// Japanese text typed through the romaji IME.
    fn uses_ime(&self) -> bool {
        self.language().is_japanese() && self.keyboard.is_romaji()
    }

    fn balances_kana(&self) -> bool {
        self.uses_ime() && self.settings.japanese.balance_kana
    }

    fn word_source(&self, filter: Filter, rng: &mut dyn RngCore) -> WordSource {
        let mut pseudo = WordSource::phonetic(Arc::clone(&self.model), filter.clone());
        if !self.settings.guided.natural_words {
            return pseudo;
        }
        let mut words: Vec<String> = self
            .dictionary
            .find(&filter)
            .into_iter()
            .take(MAX_NATURAL_WORDS)
            .map(str::to_string)
            .collect();
        while words.len() < MIN_NATURAL_WORDS {
            match pseudo.next_word(rng) {
                Some(word) => words.push(word),
                None => break,
            }
        }
        if words.is_empty() {
            debug!("no words for filter, using placeholder");
            words.push(PLACEHOLDER.to_string());
        }
        WordSource::Random(words)
    }

    fn balanced_source(
        &self,
        included: &[char],
        focused: Option<char>,
        rng: &mut dyn RngCore,
    ) -> WordSource {
        let base = self.word_source(Filter::new(included.iter().copied(), focused), rng);
        let Some(focused) = focused else {
            return base;
        };
        let mut others = Vec::new();
        for &c in included.iter().filter(|&&c| c != focused) {
            others.push(self.word_source(Filter::new(included.iter().copied(), Some(c)), rng));
        }
        if others.is_empty() {
            return base;
        }
        WordSource::Balanced(Box::new(Balanced::new(base, others)))
    }
}

/// Gated progressive unlock over keys in presentation order.
///
/// The first `MIN_KEYS` keys are always in. Up to the ceiling set by
/// `alphabet_size` further keys are forced in. Past that a key joins when it
/// was ever confident, or when every key already in is confident (currently
/// confident under `recover_keys`, ever confident otherwise). The weakest
/// included key below target gets the focus.
pub fn select_keys(keys: Vec<LessonKey>, alphabet_size: f64, recover_keys: bool) -> LessonKeys {
    let fraction = if alphabet_size.is_finite() {
        alphabet_size.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let total = keys.len();
    let max_size = MIN_KEYS + (total.saturating_sub(MIN_KEYS) as f64 * fraction).round() as usize;

    let best = |k: &LessonKey| k.best_confidence.unwrap_or(0.0);
    let gauge = |k: &LessonKey| {
        if recover_keys {
            k.confidence.unwrap_or(0.0)
        } else {
            best(k)
        }
    };

    let mut lesson_keys = LessonKeys::new(keys);
    let mut included = 0usize;
    for i in 0..total {
        let keys = lesson_keys.as_slice();
        if included < MIN_KEYS {
            lesson_keys.include(i);
        } else if included < max_size {
            lesson_keys.force(i);
        } else if best(&keys[i]) >= 1.0
            || keys[..i]
                .iter()
                .filter(|k| k.is_included())
                .all(|k| gauge(k) >= 1.0)
        {
            lesson_keys.include(i);
        } else {
            continue;
        }
        included += 1;
    }

    let weakest = lesson_keys
        .iter()
        .enumerate()
        .filter(|(_, k)| k.is_included() && gauge(*k) < 1.0)
        .min_by(|(_, a), (_, b)| gauge(*a).total_cmp(&gauge(*b)))
        .map(|(i, _)| i);
    if let Some(i) = weakest {
        lesson_keys.focus(i);
    }
    lesson_keys
}
