use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;

/// Punctuation characters that text mangling may add, when the keyboard has them.
pub const PUNCTUATORS: &[char] = &[',', '.', ';', ':', '!', '?', '\'', '"', '-'];

/// An atomic practice unit: a code point plus its relative frequency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letter {
    pub code_point: char,
    pub f: f64,
}

impl Letter {
    pub const fn new(code_point: char, f: f64) -> Self {
        Self { code_point, f }
    }

    /// Most frequent first, ties by code point.
    pub fn frequency_order(letters: &[Letter]) -> Vec<Letter> {
        let mut sorted = letters.to_vec();
        sorted.sort_by(|a, b| by_weight_desc(a.f, b.f).then(a.code_point.cmp(&b.code_point)));
        sorted
    }

    /// Frequency scaled by keyboard position weight, highest first, ties by
    /// code point.
    pub fn weighted_frequency_order(
        letters: &[Letter],
        weight: impl Fn(char) -> f64,
    ) -> Vec<Letter> {
        let mut keyed: Vec<(f64, Letter)> = letters
            .iter()
            .map(|l| (l.f * weight(l.code_point), *l))
            .collect();
        keyed.sort_by(|(wa, a), (wb, b)| {
            by_weight_desc(*wa, *wb).then(a.code_point.cmp(&b.code_point))
        });
        keyed.into_iter().map(|(_, l)| l).collect()
    }

    /// Fixed script order; letters missing from `alphabet` go last, by code point.
    pub fn alphabet_order(letters: &[Letter], alphabet: &[char]) -> Vec<Letter> {
        let index: HashMap<char, usize> = alphabet.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        let mut sorted = letters.to_vec();
        sorted.sort_by_key(|l| {
            (
                index.get(&l.code_point).copied().unwrap_or(usize::MAX),
                l.code_point,
            )
        });
        sorted
    }

    /// Keep only the letters whose code point is accepted by `allowed`.
    pub fn restrict(letters: &[char], allowed: impl Fn(char) -> bool) -> Vec<char> {
        letters.iter().copied().filter(|&c| allowed(c)).collect()
    }
}

fn by_weight_desc(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}

/// Key label: upper case where the script has one.
impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code_point.to_uppercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(letters: &[Letter]) -> String {
        letters.iter().map(|l| l.code_point).collect()
    }

    #[test]
    fn frequency_order_is_total() {
        let letters = [
            Letter::new('c', 0.1),
            Letter::new('a', 0.5),
            Letter::new('d', 0.1),
            Letter::new('b', 0.5),
        ];
        assert_eq!(chars(&Letter::frequency_order(&letters)), "abcd");
        // Stable across calls and input permutations.
        let mut reversed = letters;
        reversed.reverse();
        assert_eq!(chars(&Letter::frequency_order(&reversed)), "abcd");
    }

    #[test]
    fn weighted_order_uses_keyboard_weight() {
        let letters = [
            Letter::new('e', 0.12),
            Letter::new('t', 0.09),
            Letter::new('f', 0.02),
        ];
        let weight = |c: char| match c {
            'f' => 10.0,
            'e' => 1.0,
            _ => 2.0,
        };
        assert_eq!(chars(&Letter::weighted_frequency_order(&letters, weight)), "fte");
        // Equal products fall back to code point order.
        let tied = [Letter::new('y', 1.0), Letter::new('x', 2.0)];
        let half = |c: char| if c == 'x' { 0.5 } else { 1.0 };
        assert_eq!(chars(&Letter::weighted_frequency_order(&tied, half)), "xy");
    }

    #[test]
    fn alphabet_order_puts_unknown_last() {
        let letters = [
            Letter::new('か', 1.0),
            Letter::new('ゑ', 1.0),
            Letter::new('い', 0.1),
            Letter::new('ゐ', 1.0),
            Letter::new('あ', 0.1),
        ];
        let alphabet = ['あ', 'い', 'う', 'か'];
        assert_eq!(chars(&Letter::alphabet_order(&letters, &alphabet)), "あいかゐゑ");
    }

    #[test]
    fn display_is_upper_case() {
        assert_eq!(Letter::new('q', 0.1).to_string(), "Q");
        assert_eq!(Letter::new('か', 0.1).to_string(), "か");
    }

    #[test]
    fn restrict_to_keyboard() {
        let allowed = |c: char| c == '.' || c == ',';
        assert_eq!(Letter::restrict(PUNCTUATORS, allowed), vec![',', '.']);
    }
}
