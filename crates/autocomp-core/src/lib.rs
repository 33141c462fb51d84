//! Shared types for the autocomp prefix suggestion engine.
//!
//! # Architecture
//!
//! - [`alphabet`] -- Supported character sets and word validation
//! - [`suggestion`] -- The `(word, frequency)` output unit

pub mod alphabet;
pub mod suggestion;

pub use alphabet::Alphabet;
pub use suggestion::Suggestion;

/// Error type for vocabulary insertion.
///
/// A word that fails validation is never partially inserted: the trie is
/// left exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InsertError {
    #[error("invalid character {ch:?} at position {position} in {word:?}")]
    InvalidCharacter {
        word: String,
        ch: char,
        /// Character (not byte) offset of `ch` within `word`.
        position: usize,
    },
    #[error("cannot insert an empty word")]
    EmptyWord,
}
