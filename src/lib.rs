//! Typing tutor engine.
//!
//! Re-exports the lesson engine from `keydrill-core` and the practice
//! session from `keydrill-session` so front ends depend on one crate.

#[cfg(feature = "trace")]
mod trace_init;

pub use keydrill_core::event::{InputEvent, InputType};
pub use keydrill_core::language::{Keyboard, Language, ROMAJI_LAYOUT};
pub use keydrill_core::lesson::{
    select_keys, GuidedLesson, KeyStats, KeyStatsMap, LessonKey, LessonKeys, Target, MIN_KEYS,
};
pub use keydrill_core::phonetic::{Filter, Letter, PhoneticModel, TransitionModel};
pub use keydrill_core::romaji::{romaji_options_for_kana, RomajiIme};
pub use keydrill_core::settings::{self, LessonSettings, SettingsError};
pub use keydrill_session::{Feedback, LessonResult, PracticeSession, Step, TextCursor};

#[cfg(feature = "trace")]
pub use trace_init::init_tracing;

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
