use std::collections::HashMap;

/// Smoothing factor of the per-key time average.
const ALPHA: f64 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeySample {
    /// Lesson number the sample was recorded in.
    pub index: usize,
    pub time_to_type: f64,
    pub filtered_time_to_type: f64,
}

/// Speed history of one key.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyStats {
    pub letter: char,
    pub samples: Vec<KeySample>,
    /// Latest smoothed time, in milliseconds.
    pub time_to_type: Option<f64>,
    /// Lowest smoothed time ever reached.
    pub best_time_to_type: Option<f64>,
}

impl KeyStats {
    pub fn empty(letter: char) -> Self {
        Self {
            letter,
            samples: Vec::new(),
            time_to_type: None,
            best_time_to_type: None,
        }
    }

    fn push(&mut self, index: usize, time_to_type: f64) {
        let filtered = match self.time_to_type {
            Some(prev) => prev + ALPHA * (time_to_type - prev),
            None => time_to_type,
        };
        self.samples.push(KeySample {
            index,
            time_to_type,
            filtered_time_to_type: filtered,
        });
        self.time_to_type = Some(filtered);
        self.best_time_to_type = Some(
            self.best_time_to_type
                .map_or(filtered, |best| best.min(filtered)),
        );
    }
}

/// Per-letter statistics over all finished lessons.
#[derive(Debug, Clone, Default)]
pub struct KeyStatsMap {
    stats: HashMap<char, KeyStats>,
    lessons: usize,
}

impl KeyStatsMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statistics of `letter`, empty when it was never typed.
    pub fn get(&self, letter: char) -> KeyStats {
        self.stats
            .get(&letter)
            .cloned()
            .unwrap_or_else(|| KeyStats::empty(letter))
    }

    /// Replace the statistics of one letter, e.g. when restoring saved history.
    pub fn insert(&mut self, stats: KeyStats) {
        self.stats.insert(stats.letter, stats);
    }

    /// Number of lessons recorded so far.
    pub fn lessons(&self) -> usize {
        self.lessons
    }

    /// Fold one finished lesson's mean per-letter times into the history.
    /// Non-positive or non-finite times are skipped.
    pub fn record(&mut self, samples: impl IntoIterator<Item = (char, f64)>) {
        let index = self.lessons;
        for (letter, time_to_type) in samples {
            if !(time_to_type.is_finite() && time_to_type > 0.0) {
                continue;
            }
            self.stats
                .entry(letter)
                .or_insert_with(|| KeyStats::empty(letter))
                .push(index, time_to_type);
        }
        self.lessons += 1;
    }
}
