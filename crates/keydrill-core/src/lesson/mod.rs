//! Adaptive lesson engine: per-key statistics, confidence against a target
//! speed, the gated key unlock and text generation on top of it.

mod guided;
mod key;
mod stats;
mod target;

pub use guided::{select_keys, GuidedLesson, MIN_KEYS};
pub use key::{LessonKey, LessonKeys};
pub use stats::{KeySample, KeyStats, KeyStatsMap};
pub use target::Target;
