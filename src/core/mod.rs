//! Core processing building blocks: Roman numeral decoding, English-word
//! rendering, and per-line evaluation. These are pure primitives consumed
//! by the high-level `api` module.
pub mod line;
pub mod params;
pub mod roman;
pub mod words;
