//! Lesson settings loaded from TOML, following the same OnceLock pattern as the
//! romaji table.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static LessonSettings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`
//! - `LessonSettings::from_flat_json` reads the flat `lesson.*` key/value store

use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static LessonSettings {
    static INSTANCE: OnceLock<LessonSettings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let toml_str = CUSTOM_TOML
            .get()
            .map(|s| s.as_str())
            .unwrap_or(DEFAULT_SETTINGS_TOML);
        parse_settings_toml(toml_str).expect("settings TOML must be valid")
    })
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LessonSettings {
    pub guided: GuidedSettings,
    pub japanese: JapaneseSettings,
    pub text: TextSettings,
    pub target: TargetSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GuidedSettings {
    pub alphabet_size: f64,
    pub recover_keys: bool,
    pub keyboard_order: bool,
    pub natural_words: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JapaneseSettings {
    pub balance_kana: bool,
    pub katakana_ratio: f64,
    pub show_romaji_helper: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TextSettings {
    pub capitals: bool,
    pub punctuators: bool,
    pub repeat_words: usize,
    pub fragment_letters: usize,
    pub fragment_words: usize,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TargetSettings {
    /// Characters per minute.
    pub speed: f64,
}

impl Default for LessonSettings {
    fn default() -> Self {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("default settings TOML must be valid")
    }
}

impl LessonSettings {
    /// Overlay a flat JSON object (`{"lesson.guided.alphabetSize": 0.5, ...}`)
    /// on the defaults. Unknown keys are ignored.
    pub fn from_flat_json(json: &str) -> Result<Self, SettingsError> {
        let map: Map<String, Value> =
            serde_json::from_str(json).map_err(|e| SettingsError::Parse(e.to_string()))?;
        let mut s = LessonSettings::default();

        if let Some(v) = get_f64(&map, "lesson.guided.alphabetSize")? {
            s.guided.alphabet_size = v;
        }
        if let Some(v) = get_bool(&map, "lesson.guided.recoverKeys")? {
            s.guided.recover_keys = v;
        }
        if let Some(v) = get_bool(&map, "lesson.guided.keyboardOrder")? {
            s.guided.keyboard_order = v;
        }
        if let Some(v) = get_bool(&map, "lesson.guided.naturalWords")? {
            s.guided.natural_words = v;
        }
        if let Some(v) = get_bool(&map, "lesson.japanese.balanceKana")? {
            s.japanese.balance_kana = v;
        }
        if let Some(v) = get_f64(&map, "lesson.japanese.katakanaRatio")? {
            s.japanese.katakana_ratio = v;
        }
        if let Some(v) = get_bool(&map, "lesson.japanese.romajiHelper")? {
            s.japanese.show_romaji_helper = v;
        }
        if let Some(v) = get_bool(&map, "lesson.capitals")? {
            s.text.capitals = v;
        }
        if let Some(v) = get_bool(&map, "lesson.punctuators")? {
            s.text.punctuators = v;
        }
        if let Some(v) = get_usize(&map, "lesson.repeatWords")? {
            s.text.repeat_words = v;
        }
        if let Some(v) = get_f64(&map, "lesson.targetSpeed")? {
            s.target.speed = v;
        }

        normalize(&mut s)?;
        Ok(s)
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<LessonSettings, SettingsError> {
    let mut s: LessonSettings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    normalize(&mut s)?;
    Ok(s)
}

fn type_error(key: &str, expected: &str) -> SettingsError {
    SettingsError::InvalidValue {
        field: key.to_string(),
        reason: format!("expected {expected}"),
    }
}

fn get_f64(map: &Map<String, Value>, key: &str) -> Result<Option<f64>, SettingsError> {
    map.get(key)
        .map(|v| v.as_f64().ok_or_else(|| type_error(key, "a number")))
        .transpose()
}

fn get_bool(map: &Map<String, Value>, key: &str) -> Result<Option<bool>, SettingsError> {
    map.get(key)
        .map(|v| v.as_bool().ok_or_else(|| type_error(key, "a boolean")))
        .transpose()
}

fn get_usize(map: &Map<String, Value>, key: &str) -> Result<Option<usize>, SettingsError> {
    map.get(key)
        .map(|v| {
            v.as_u64()
                .map(|n| n as usize)
                .ok_or_else(|| type_error(key, "a non-negative integer"))
        })
        .transpose()
}

/// Reject values the engines cannot work with; clamp fractions into [0, 1].
fn normalize(s: &mut LessonSettings) -> Result<(), SettingsError> {
    macro_rules! clamp_fraction {
        ($section:ident . $field:ident) => {
            if !s.$section.$field.is_finite() {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be a finite number".to_string(),
                });
            }
            s.$section.$field = s.$section.$field.clamp(0.0, 1.0);
        };
    }
    macro_rules! check_positive_usize {
        ($section:ident . $field:ident) => {
            if s.$section.$field == 0 {
                return Err(SettingsError::InvalidValue {
                    field: concat!(stringify!($section), ".", stringify!($field)).to_string(),
                    reason: "must be positive".to_string(),
                });
            }
        };
    }

    clamp_fraction!(guided.alphabet_size);
    clamp_fraction!(japanese.katakana_ratio);

    check_positive_usize!(text.repeat_words);
    check_positive_usize!(text.fragment_letters);
    check_positive_usize!(text.fragment_words);

    if !(s.target.speed.is_finite() && s.target.speed > 0.0) {
        return Err(SettingsError::InvalidValue {
            field: "target.speed".to_string(),
            reason: "must be positive".to_string(),
        });
    }

    Ok(())
}
