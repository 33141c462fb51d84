//! Frequency-ranked prefix suggestions with a near-miss fallback.
//!
//! A query first looks for stored words that start with the typed prefix.
//! Those words have their usage counts reinforced and are returned ranked
//! by count. When nothing matches, the engine walks the prefix as far as
//! the vocabulary allows and retries with adjacent swaps and
//! single-character substitutions from the first mismatch onward.
//!
//! # Architecture
//!
//! - [`candidates`] -- Swap and substitution candidate sources, budgeted
//! - [`frequency`] -- Per-word usage counters
//! - [`ranking`] -- Max-heap ordering by frequency, lexicographic ties
//! - [`engine`] -- The orchestrating [`SuggestionEngine`]
//!
//! # Example
//!
//! ```
//! use autocomp_core::Alphabet;
//! use autocomp_engine::SuggestionEngine;
//!
//! let mut engine =
//!     SuggestionEngine::from_words(Alphabet::Lowercase, ["app", "apple", "bat"]).unwrap();
//! let hits = engine.suggest("app");
//! assert_eq!(hits[0].word, "app");
//! assert_eq!(hits[0].frequency, 1);
//!
//! // "bta" has no exact match; swapping the last two letters finds "bat".
//! let fixed = engine.suggest("bta");
//! assert_eq!(fixed[0].word, "bat");
//! ```

pub mod candidates;
pub mod engine;
pub mod frequency;
pub mod ranking;

pub use autocomp_core::{Alphabet, InsertError, Suggestion};
pub use candidates::CandidateGenerator;
pub use engine::{Lookup, MatchKind, SuggestOptions, SuggestionEngine};
pub use frequency::FrequencyTable;

/// Error type for engine operations that read external input.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A word could not be added to the vocabulary.
    #[error("invalid vocabulary word: {0}")]
    Insert(#[from] InsertError),

    /// The word list could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}
