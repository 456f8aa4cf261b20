//! Phonetic models: letter inventories and pseudo-word synthesis.

mod letter;
mod transition;

use std::collections::BTreeSet;

use rand::RngCore;

use crate::language::Language;

pub use letter::{Letter, PUNCTUATORS};
pub use transition::TransitionModel;

/// Restricts word generation to the included code points and, optionally,
/// to words containing the focused one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filter {
    code_points: BTreeSet<char>,
    focused: Option<char>,
}

impl Filter {
    pub fn new(code_points: impl IntoIterator<Item = char>, focused: Option<char>) -> Self {
        Self {
            code_points: code_points.into_iter().collect(),
            focused,
        }
    }

    pub fn includes(&self, c: char) -> bool {
        self.code_points.contains(&c)
    }

    pub fn focused(&self) -> Option<char> {
        self.focused
    }

    /// All characters included and the focused one present (if any).
    pub fn accepts(&self, word: &str) -> bool {
        word.chars().all(|c| self.includes(c))
            && self.focused.map_or(true, |f| word.contains(f))
    }
}

/// Source of pseudo-words for a language. Implementations must tolerate any
/// filter, returning an empty string when they cannot satisfy it.
pub trait PhoneticModel: Send + Sync {
    fn language(&self) -> &Language;

    fn letters(&self) -> &[Letter];

    fn next_word(&self, filter: &Filter, rng: &mut dyn RngCore) -> String;
}
