use keydrill_core::unicode::to_hiragana;

use super::cursor::Step;

/// A completed lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonResult {
    pub layout_id: String,
    pub steps: Vec<Step>,
}

impl LessonResult {
    /// Katakana steps are recorded as their hiragana letter so both scripts
    /// train the same key. ー stays as is.
    pub(crate) fn new(layout_id: &str, steps: &[Step], fold_kana: bool) -> Self {
        let steps = steps
            .iter()
            .map(|step| Step {
                code_point: if fold_kana {
                    to_hiragana(step.code_point)
                } else {
                    step.code_point
                },
                ..*step
            })
            .collect();
        Self {
            layout_id: layout_id.to_string(),
            steps,
        }
    }

    pub fn length(&self) -> usize {
        self.steps.len()
    }

    /// Total milliseconds spent.
    pub fn time(&self) -> f64 {
        self.steps.iter().map(|s| s.time_to_type).sum()
    }

    pub fn errors(&self) -> usize {
        self.steps.iter().filter(|s| s.typo).count()
    }

    /// Characters per minute.
    pub fn speed(&self) -> f64 {
        let time = self.time();
        if time > 0.0 {
            self.length() as f64 * 60_000.0 / time
        } else {
            0.0
        }
    }

    /// Mean time per letter over clean steps, in order of first appearance.
    /// Spaces and mistyped positions are left out.
    pub fn letter_samples(&self) -> Vec<(char, f64)> {
        let mut acc: Vec<(char, f64, usize)> = Vec::new();
        for step in self.steps.iter().filter(|s| !s.typo && s.code_point != ' ') {
            match acc.iter_mut().find(|(c, _, _)| *c == step.code_point) {
                Some((_, sum, n)) => {
                    *sum += step.time_to_type;
                    *n += 1;
                }
                None => acc.push((step.code_point, step.time_to_type, 1)),
            }
        }
        acc.into_iter()
            .map(|(c, sum, n)| (c, sum / n as f64))
            .collect()
    }
}
