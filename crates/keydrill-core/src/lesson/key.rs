use std::fmt;

use super::stats::{KeySample, KeyStats};
use super::target::Target;
use crate::phonetic::Letter;

/// One row of a computed key set. Flags are set while the set is built and
/// frozen afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonKey {
    pub letter: Letter,
    pub samples: Vec<KeySample>,
    pub time_to_type: Option<f64>,
    pub best_time_to_type: Option<f64>,
    pub confidence: Option<f64>,
    pub best_confidence: Option<f64>,
    included: bool,
    focused: bool,
    forced: bool,
}

impl LessonKey {
    pub fn from_stats(letter: Letter, stats: KeyStats, target: &Target) -> Self {
        Self {
            letter,
            confidence: target.confidence(stats.time_to_type),
            best_confidence: target.confidence(stats.best_time_to_type),
            samples: stats.samples,
            time_to_type: stats.time_to_type,
            best_time_to_type: stats.best_time_to_type,
            included: false,
            focused: false,
            forced: false,
        }
    }

    /// Key built straight from a confidence snapshot, without speed history.
    pub fn from_confidence(
        letter: Letter,
        confidence: Option<f64>,
        best_confidence: Option<f64>,
    ) -> Self {
        Self {
            letter,
            samples: Vec::new(),
            time_to_type: None,
            best_time_to_type: None,
            confidence,
            best_confidence,
            included: false,
            focused: false,
            forced: false,
        }
    }

    pub fn code_point(&self) -> char {
        self.letter.code_point
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_forced(&self) -> bool {
        self.forced
    }
}

/// Keys in presentation order.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonKeys {
    keys: Vec<LessonKey>,
}

impl LessonKeys {
    pub fn new(keys: Vec<LessonKey>) -> Self {
        Self { keys }
    }

    pub(crate) fn include(&mut self, index: usize) {
        self.keys[index].included = true;
    }

    pub(crate) fn force(&mut self, index: usize) {
        let key = &mut self.keys[index];
        key.included = true;
        key.forced = true;
    }

    pub(crate) fn focus(&mut self, index: usize) {
        for (i, key) in self.keys.iter_mut().enumerate() {
            key.focused = i == index;
        }
    }

    pub(crate) fn as_slice(&self) -> &[LessonKey] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LessonKey> {
        self.keys.iter()
    }

    pub fn find_included_keys(&self) -> Vec<&LessonKey> {
        self.keys.iter().filter(|k| k.included).collect()
    }

    pub fn find_excluded_keys(&self) -> Vec<&LessonKey> {
        self.keys.iter().filter(|k| !k.included).collect()
    }

    pub fn find_focused_key(&self) -> Option<&LessonKey> {
        self.keys.iter().find(|k| k.focused)
    }

    pub fn included_code_points(&self) -> Vec<char> {
        self.keys
            .iter()
            .filter(|k| k.included)
            .map(LessonKey::code_point)
            .collect()
    }
}

impl<'a> IntoIterator for &'a LessonKeys {
    type Item = &'a LessonKey;
    type IntoIter = std::slice::Iter<'a, LessonKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

/// Included keys only: `[X]` focused, `!X` forced.
impl fmt::Display for LessonKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for key in self.keys.iter().filter(|k| k.included) {
            if key.focused {
                write!(f, "[{}]", key.letter)?;
            } else if key.forced {
                write!(f, "!{}", key.letter)?;
            } else {
                write!(f, "{}", key.letter)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::stats::KeyStatsMap;

    fn key(c: char) -> LessonKey {
        LessonKey::from_confidence(Letter::new(c, 1.0), None, None)
    }

    #[test]
    fn from_stats_derives_confidence() {
        let mut map = KeyStatsMap::new();
        map.record([('a', 2000.0)]);
        map.record([('a', 200.0)]);
        let key = LessonKey::from_stats(Letter::new('a', 0.5), map.get('a'), &Target::new(60.0));
        assert_eq!(key.samples.len(), 2);
        // 2000 then 2000 + 0.1 * (200 - 2000) = 1820
        assert!((key.confidence.unwrap() - 1000.0 / 1820.0).abs() < 1e-9);
        assert_eq!(key.best_confidence, key.confidence);
        assert!(!key.is_included());
    }

    #[test]
    fn display_and_queries() {
        let mut keys = LessonKeys::new(vec![key('a'), key('b'), key('c'), key('d')]);
        keys.include(0);
        keys.force(2);
        keys.include(1);
        keys.focus(1);
        assert_eq!(keys.to_string(), "a[b]!c");
        assert_eq!(keys.find_focused_key().map(LessonKey::code_point), Some('b'));
        assert_eq!(keys.included_code_points(), vec!['a', 'b', 'c']);
        assert_eq!(keys.find_excluded_keys().len(), 1);
        assert!(keys.find_included_keys()[2].is_forced());
    }

    #[test]
    fn focus_moves() {
        let mut keys = LessonKeys::new(vec![key('a'), key('b')]);
        keys.include(0);
        keys.include(1);
        keys.focus(0);
        keys.focus(1);
        assert_eq!(keys.iter().filter(|k| k.is_focused()).count(), 1);
        assert_eq!(keys.to_string(), "a[b]");
    }
}
