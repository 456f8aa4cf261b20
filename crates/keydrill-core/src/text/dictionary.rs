use crate::phonetic::Filter;

/// Natural words usable on the current keyboard.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Keep words longer than two letters made only of `allowed` characters,
    /// in list order.
    pub fn new<I, S>(words: I, allowed: impl Fn(char) -> bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|w: &String| w.chars().count() > 2 && w.chars().all(&allowed))
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words the filter accepts, in list order.
    pub fn find(&self, filter: &Filter) -> Vec<&str> {
        self.words
            .iter()
            .filter(|w| filter.accepts(w))
            .map(String::as_str)
            .collect()
    }
}
