//! Jaro and Jaro-Winkler string similarity, plus a small ranker that
//! turns a candidate list into "did you mean" suggestions.
//!
//! Scores are `f64` in `[0, 1]`: 0 means nothing in common, 1 means
//! identical. The Winkler variant boosts the base Jaro score for strings
//! sharing a short exact prefix, which suits typo correction over short
//! names.
//!
//! ```rust
//! use muster_fuzzy::{jaro_winkler, rank, DEFAULT_FLOOR};
//!
//! let score = jaro_winkler("martha", "marhta");
//! assert!((score - 0.961).abs() < 1e-3);
//!
//! let hits = rank("pikachuu", ["Pikachu", "Raichu", "Pichu"], DEFAULT_FLOOR);
//! assert_eq!(hits[0].candidate, "Pikachu");
//! ```

mod jaro;
mod suggest;

pub use jaro::{
    jaro, jaro_winkler, jaro_winkler_with, matching_characters, DEFAULT_PREFIX_LEN,
    DEFAULT_PREFIX_SCALE,
};
pub use suggest::{best, rank, Suggestion, DEFAULT_FLOOR};
