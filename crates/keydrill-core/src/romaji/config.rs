use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct RomajiConfig {
    scheme: Vec<SchemeConfig>,
}

#[derive(Deserialize)]
struct SchemeConfig {
    #[allow(dead_code)]
    name: String,
    priority: u8,
    mappings: BTreeMap<String, String>,
}

/// One romaji spelling and the kana it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpellingEntry {
    pub romaji: String,
    pub kana: String,
    /// Lower value wins (Hepburn first, Kunrei-compatible later).
    pub priority: u8,
}

#[derive(Debug, thiserror::Error)]
pub enum RomajiTableError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("spelling table is empty")]
    Empty,
    #[error("empty spelling in scheme with priority {0}")]
    EmptyKey(u8),
    #[error("non-ASCII spelling: {0}")]
    NonAsciiKey(String),
    #[error("empty output for spelling: {0}")]
    EmptyValue(String),
    #[error("romaji trie already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into spelling entries, ordered by scheme then by spelling.
pub fn parse_romaji_toml(toml_str: &str) -> Result<Vec<SpellingEntry>, RomajiTableError> {
    let config: RomajiConfig =
        toml::from_str(toml_str).map_err(|e| RomajiTableError::Parse(e.to_string()))?;

    let mut entries = Vec::new();
    for scheme in config.scheme {
        for (romaji, kana) in scheme.mappings {
            if romaji.is_empty() {
                return Err(RomajiTableError::EmptyKey(scheme.priority));
            }
            if !romaji.is_ascii() {
                return Err(RomajiTableError::NonAsciiKey(romaji));
            }
            if kana.is_empty() {
                return Err(RomajiTableError::EmptyValue(romaji));
            }
            entries.push(SpellingEntry {
                romaji,
                kana,
                priority: scheme.priority,
            });
        }
    }

    if entries.is_empty() {
        return Err(RomajiTableError::Empty);
    }
    Ok(entries)
}
