/// Embedded default spelling table (Hepburn, Kunrei-compatible, compat).
pub(super) const DEFAULT_TOML: &str = include_str!("default_romaji.toml");
