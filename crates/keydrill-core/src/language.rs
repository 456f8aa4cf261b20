//! Practice languages and keyboard descriptions consumed by the lesson engine.

use std::collections::HashMap;

/// Layout id of the romaji keyboard that routes keystrokes through the IME.
pub const ROMAJI_LAYOUT: &str = "ja-romaji";

const GOJUON: &str = "あいうえおかきくけこさしすせそたちつてとなにぬねのはひふへほまみむめもやゆよらりるれろわをん\
がぎぐげござじずぜぞだぢづでどばびぶべぼぱぴぷぺぽぁぃぅぇぉゃゅょっゔー";

#[derive(Debug, Clone, PartialEq)]
pub struct Language {
    pub id: String,
    /// Canonical script order. Only consulted for the syllabary language.
    pub alphabet: Vec<char>,
    /// Whether words can be capitalized.
    pub cased: bool,
}

impl Language {
    pub fn new(id: impl Into<String>, alphabet: Vec<char>, cased: bool) -> Self {
        Self {
            id: id.into(),
            alphabet,
            cased,
        }
    }

    pub fn english() -> Self {
        Self::new("en", ('a'..='z').collect(), true)
    }

    pub fn japanese() -> Self {
        Self::new("ja", GOJUON.chars().collect(), false)
    }

    pub fn is_japanese(&self) -> bool {
        self.id == "ja"
    }
}

/// Keys reachable on the active layout, with a per-key position weight
/// (home row keys weigh more).
#[derive(Debug, Clone, PartialEq)]
pub struct Keyboard {
    pub layout_id: String,
    weights: HashMap<char, f64>,
}

impl Keyboard {
    pub fn new(layout_id: impl Into<String>, weights: HashMap<char, f64>) -> Self {
        Self {
            layout_id: layout_id.into(),
            weights,
        }
    }

    /// Every character weighs the same.
    pub fn uniform(layout_id: impl Into<String>, chars: impl IntoIterator<Item = char>) -> Self {
        Self::new(layout_id, chars.into_iter().map(|c| (c, 1.0)).collect())
    }

    pub fn is_romaji(&self) -> bool {
        self.layout_id == ROMAJI_LAYOUT
    }

    pub fn contains(&self, c: char) -> bool {
        self.weights.contains_key(&c)
    }

    /// Position weight, 0 for keys not on the layout.
    pub fn weight(&self, c: char) -> f64 {
        self.weights.get(&c).copied().unwrap_or(0.0)
    }
}
