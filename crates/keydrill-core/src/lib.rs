pub mod event;
pub mod language;
pub mod lesson;
pub mod phonetic;
pub mod romaji;
pub mod settings;
pub mod text;
pub mod unicode;

#[cfg(test)]
pub(crate) mod testutil;
