//! Practice text generation: word sources, adapters and fragment assembly.

mod dictionary;
mod fragment;
mod words;

pub use dictionary::Dictionary;
pub use fragment::{generate_fragment, FragmentOptions};
pub use words::{Balanced, KanaMix, MangleOptions, MangledWords, UniqueWords, WordSource, Words};

/// Written whenever no source can produce a word.
pub const PLACEHOLDER: &str = "?";
