use std::collections::HashMap;

use rand::{Rng, RngCore};

use super::{Filter, Letter, PhoneticModel};
use crate::language::Language;

/// Word boundary marker in transition contexts.
const BOUNDARY: char = ' ';
const MIN_WORD_LEN: usize = 3;
const MAX_WORD_LEN: usize = 10;
const MAX_ATTEMPTS: usize = 50;

type Choices = Vec<(char, u32)>;

/// Second-order letter transition model trained on a word list, with
/// first-order backoff when the filter leaves no second-order choice.
pub struct TransitionModel {
    language: Language,
    letters: Vec<Letter>,
    order2: HashMap<(char, char), Choices>,
    order1: HashMap<char, Choices>,
}

impl TransitionModel {
    pub fn train<'a>(language: Language, words: impl IntoIterator<Item = &'a str>) -> Self {
        let mut counts: HashMap<char, u64> = HashMap::new();
        let mut order2: HashMap<(char, char), HashMap<char, u32>> = HashMap::new();
        let mut order1: HashMap<char, HashMap<char, u32>> = HashMap::new();

        for word in words {
            let (mut a, mut b) = (BOUNDARY, BOUNDARY);
            for c in word.chars().chain(std::iter::once(BOUNDARY)) {
                if c != BOUNDARY {
                    *counts.entry(c).or_default() += 1;
                }
                *order2.entry((a, b)).or_default().entry(c).or_default() += 1;
                *order1.entry(b).or_default().entry(c).or_default() += 1;
                a = b;
                b = c;
            }
        }

        let total: u64 = counts.values().sum();
        let letters = counts
            .into_iter()
            .map(|(c, n)| Letter::new(c, n as f64 / total.max(1) as f64))
            .collect::<Vec<_>>();

        Self {
            language,
            letters: Letter::frequency_order(&letters),
            order2: order2.into_iter().map(|(k, v)| (k, sorted(v))).collect(),
            order1: order1.into_iter().map(|(k, v)| (k, sorted(v))).collect(),
        }
    }

    fn walk(&self, filter: &Filter, rng: &mut dyn RngCore) -> String {
        let (mut a, mut b) = (BOUNDARY, BOUNDARY);
        let mut word = String::new();
        let mut len = 0;
        while len < MAX_WORD_LEN {
            let allowed = |&&(c, _): &&(char, u32)| {
                if c == BOUNDARY {
                    len >= MIN_WORD_LEN
                } else {
                    filter.includes(c)
                }
            };
            let mut options: Vec<&(char, u32)> = self
                .order2
                .get(&(a, b))
                .map(|v| v.iter().filter(allowed).collect())
                .unwrap_or_default();
            if options.is_empty() {
                options = self
                    .order1
                    .get(&b)
                    .map(|v| v.iter().filter(allowed).collect())
                    .unwrap_or_default();
            }
            let Some(next) = pick(&options, rng) else {
                break;
            };
            if next == BOUNDARY {
                break;
            }
            word.push(next);
            len += 1;
            a = b;
            b = next;
        }
        word
    }
}

fn sorted(counts: HashMap<char, u32>) -> Choices {
    let mut v: Choices = counts.into_iter().collect();
    v.sort_unstable_by_key(|&(c, _)| c);
    v
}

fn pick(options: &[&(char, u32)], rng: &mut dyn RngCore) -> Option<char> {
    let total: u32 = options.iter().map(|(_, n)| n).sum();
    if total == 0 {
        return None;
    }
    let mut r = rng.gen_range(0..total);
    for &&(c, n) in options {
        if r < n {
            return Some(c);
        }
        r -= n;
    }
    None
}

impl PhoneticModel for TransitionModel {
    fn language(&self) -> &Language {
        &self.language
    }

    fn letters(&self) -> &[Letter] {
        &self.letters
    }

    fn next_word(&self, filter: &Filter, rng: &mut dyn RngCore) -> String {
        for _ in 0..MAX_ATTEMPTS {
            let word = self.walk(filter, rng);
            if word.chars().count() >= MIN_WORD_LEN && filter.accepts(&word) {
                return word;
            }
        }
        String::new()
    }
}
