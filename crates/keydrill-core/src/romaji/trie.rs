use std::collections::HashMap;
use std::sync::OnceLock;

use super::config::{parse_romaji_toml, RomajiTableError, SpellingEntry};
use super::table::DEFAULT_TOML;
use crate::unicode::katakana_to_hiragana;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

const NASAL_HINTS: &[&str] = &["nn", "n'", "n+consonant"];
const GEMINATE_HINTS: &[&str] = &["double consonant", "xtsu", "xtu", "ltsu", "ltu"];

#[derive(Debug, Clone, PartialEq, Eq)]
struct Output {
    kana: String,
    priority: u8,
}

#[derive(Debug, Default)]
struct Node {
    /// Sorted by edge byte.
    children: Vec<(u8, u32)>,
    /// Sorted by priority, ties kept in table order.
    outputs: Vec<Output>,
}

impl Node {
    fn child(&self, b: u8) -> Option<u32> {
        self.children
            .binary_search_by_key(&b, |&(k, _)| k)
            .ok()
            .map(|i| self.children[i].1)
    }
}

/// Longest spelling found at the start of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomajiMatch<'a> {
    /// Number of buffered keystrokes the spelling covers.
    pub len: usize,
    pub kana: &'a str,
    pub priority: u8,
}

/// Immutable romaji spelling trie. All nodes live in one arena; node 0 is the root.
#[derive(Debug)]
pub struct RomajiTrie {
    nodes: Vec<Node>,
    reverse: HashMap<String, Vec<String>>,
}

impl RomajiTrie {
    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), RomajiTableError> {
        // Validate eagerly
        parse_romaji_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| RomajiTableError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static RomajiTrie {
        static INSTANCE: OnceLock<RomajiTrie> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            RomajiTrie::from_toml(toml_str).expect("romaji TOML must be valid")
        })
    }

    pub fn from_toml(toml_str: &str) -> Result<Self, RomajiTableError> {
        Ok(Self::build(&parse_romaji_toml(toml_str)?))
    }

    pub fn build(entries: &[SpellingEntry]) -> Self {
        let mut nodes = vec![Node::default()];
        for entry in entries {
            let mut cur = 0usize;
            for &b in entry.romaji.as_bytes() {
                cur = match nodes[cur].child(b) {
                    Some(next) => next as usize,
                    None => {
                        let next = nodes.len();
                        nodes.push(Node::default());
                        let children = &mut nodes[cur].children;
                        let pos = children.partition_point(|&(k, _)| k < b);
                        children.insert(pos, (b, next as u32));
                        next
                    }
                };
            }
            nodes[cur].outputs.push(Output {
                kana: entry.kana.clone(),
                priority: entry.priority,
            });
        }
        for node in &mut nodes {
            node.outputs.sort_by_key(|o| o.priority);
        }

        let mut by_kana: HashMap<String, Vec<(u8, &str)>> = HashMap::new();
        for entry in entries {
            by_kana
                .entry(entry.kana.clone())
                .or_default()
                .push((entry.priority, entry.romaji.as_str()));
        }
        let reverse = by_kana
            .into_iter()
            .map(|(kana, mut list)| {
                list.sort();
                list.dedup();
                let spellings = list.into_iter().map(|(_, r)| r.to_string()).collect();
                (kana, spellings)
            })
            .collect();

        RomajiTrie { nodes, reverse }
    }

    /// Walk `input` and return the longest prefix that ends on a spelling.
    /// At each node the lowest-priority output wins.
    pub fn find_best_match(&self, input: &str) -> Option<RomajiMatch<'_>> {
        let mut node = &self.nodes[0];
        let mut best = None;
        for (i, &b) in input.as_bytes().iter().enumerate() {
            node = match node.child(b) {
                Some(next) => &self.nodes[next as usize],
                None => break,
            };
            if let Some(output) = node.outputs.first() {
                best = Some(RomajiMatch {
                    len: i + 1,
                    kana: &output.kana,
                    priority: output.priority,
                });
            }
        }
        best
    }

    /// True iff `input` is a path in the trie. The node need not carry an output.
    pub fn is_prefix(&self, input: &str) -> bool {
        let mut node = &self.nodes[0];
        for &b in input.as_bytes() {
            node = match node.child(b) {
                Some(next) => &self.nodes[next as usize],
                None => return false,
            };
        }
        true
    }

    /// Spellings that produce `kana`, by priority then alphabetically.
    ///
    /// ん and っ depend on the following keystroke rather than on a table
    /// entry, so they get fixed hint strings.
    pub fn romaji_options(&self, kana: &str) -> Vec<&str> {
        let folded = katakana_to_hiragana(kana);
        match folded.as_str() {
            "ん" => NASAL_HINTS.to_vec(),
            "っ" => GEMINATE_HINTS.to_vec(),
            _ => self
                .reverse
                .get(&folded)
                .map(|list| list.iter().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }
}

/// Hint strings for `kana` from the global table.
pub fn romaji_options_for_kana(kana: &str) -> Vec<&'static str> {
    RomajiTrie::global().romaji_options(kana)
}
