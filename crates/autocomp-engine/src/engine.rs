// SuggestionEngine: owns the vocabulary and the usage counts, answers
// prefix queries directly or through the swap/substitution fallback.
//
// Design notes:
// - Trie and frequency table are plain owned fields; all mutation goes
//   through `&mut self`, so one request at a time touches them. Callers
//   that share an engine across threads wrap it in a `Mutex`.
// - Only direct hits reinforce frequencies. Fallback answers are ranked by
//   the existing counts and leave them untouched.
// - The candidate generator is built per fallback call because the
//   substitution set of a Unicode vocabulary grows with insertions.

use std::io::BufRead;

use hashbrown::HashSet;
use tracing::{debug, trace};

use autocomp_core::{Alphabet, InsertError, Suggestion};
use autocomp_trie::PrefixTrie;

use crate::EngineError;
use crate::candidates::CandidateGenerator;
use crate::frequency::FrequencyTable;
use crate::ranking::rank;

/// Default cap on the number of fallback candidates per query.
pub const DEFAULT_MAX_CANDIDATES: usize = 4096;

/// Options controlling query output and fallback cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Maximum number of suggestions returned per query. `None` returns
    /// every match. Truncation happens after ranking, and on the direct
    /// path after every matched word has been reinforced.
    pub max_suggestions: Option<usize>,
    /// Maximum number of near-miss candidates generated per fallback.
    pub max_candidates: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            max_suggestions: None,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }
}

/// Which path produced a query's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchKind {
    /// Some stored word starts with the query.
    Direct,
    /// Nothing started with the query; the answer (possibly empty) came
    /// from the fuzzy fallback.
    Fallback,
}

/// A ranked answer together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lookup {
    pub kind: MatchKind,
    pub suggestions: Vec<Suggestion>,
}

/// Prefix autocomplete over a vocabulary with usage-based ranking.
#[derive(Debug, Clone, Default)]
pub struct SuggestionEngine {
    trie: PrefixTrie,
    frequencies: FrequencyTable,
    options: SuggestOptions,
}

impl SuggestionEngine {
    /// Create an empty engine for `alphabet` with default options.
    pub fn new(alphabet: Alphabet) -> Self {
        Self::with_options(alphabet, SuggestOptions::default())
    }

    pub fn with_options(alphabet: Alphabet, options: SuggestOptions) -> Self {
        Self {
            trie: PrefixTrie::new(alphabet),
            frequencies: FrequencyTable::new(),
            options,
        }
    }

    /// Create an engine and bulk-load `words` into it.
    pub fn from_words<I, S>(alphabet: Alphabet, words: I) -> Result<Self, InsertError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut engine = Self::new(alphabet);
        engine.extend(words)?;
        Ok(engine)
    }

    /// Add one word to the vocabulary. Frequencies are not touched.
    ///
    /// Returns `Ok(false)` if the word was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool, InsertError> {
        self.trie.insert(word)
    }

    /// Insert `words` in order, stopping at the first invalid one.
    ///
    /// Words before the failing one remain inserted. Returns the number of
    /// words that were new.
    pub fn extend<I, S>(&mut self, words: I) -> Result<usize, InsertError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for word in words {
            if self.trie.insert(word.as_ref())? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Load a word list: whitespace-separated tokens, one or more per line.
    ///
    /// Blank lines and lines whose first non-blank character is `#` are
    /// skipped. Returns the number of words that were new.
    pub fn load_words<R: BufRead>(&mut self, reader: R) -> Result<usize, EngineError> {
        let mut added = 0;
        for line in reader.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            added += self.extend(line.split_whitespace())?;
        }
        debug!(added, total = self.trie.len(), "loaded word list");
        Ok(added)
    }

    /// Ranked suggestions for `prefix`.
    ///
    /// See [`SuggestionEngine::lookup`].
    pub fn suggest(&mut self, prefix: &str) -> Vec<Suggestion> {
        self.lookup(prefix).suggestions
    }

    /// Answer a query, reporting which path produced the answer.
    ///
    /// When some stored word starts with `prefix`, each such word's
    /// frequency is incremented by one and the words are returned ranked.
    /// Otherwise the answer is [`SuggestionEngine::suggest_fallback`], which
    /// leaves frequencies unchanged.
    pub fn lookup(&mut self, prefix: &str) -> Lookup {
        let direct = self.trie.words_with_prefix(prefix);
        if direct.is_empty() {
            return Lookup {
                kind: MatchKind::Fallback,
                suggestions: self.suggest_fallback(prefix),
            };
        }

        trace!(prefix, hits = direct.len(), "direct prefix match");
        for word in &direct {
            self.frequencies.increment(word);
        }
        Lookup {
            kind: MatchKind::Direct,
            suggestions: rank(direct, &self.frequencies, self.options.max_suggestions),
        }
    }

    /// Fuzzy fallback for a prefix that matches nothing exactly.
    ///
    /// Anchors at the longest valid prefix, tries adjacent swaps and single
    /// substitutions from the first mismatch onward, and merges every
    /// resulting completion (plus the completions of the valid prefix
    /// itself) into one deduplicated, ranked list. Returns nothing when
    /// not even the first character is known.
    pub fn suggest_fallback(&self, prefix: &str) -> Vec<Suggestion> {
        let valid = self.trie.longest_valid_prefix(prefix);
        if valid.is_empty() {
            debug!(prefix, "no valid prefix, skipping fallback");
            return Vec::new();
        }

        let mut merged: HashSet<String> = self
            .trie
            .words_with_prefix(&valid.prefix)
            .into_iter()
            .collect();

        let generator = CandidateGenerator::near_miss(
            &self.trie.substitution_chars(),
            self.options.max_candidates,
        );
        let candidates = generator.generate(prefix, valid.fail_index);
        for candidate in &candidates {
            merged.extend(self.trie.words_with_prefix(candidate));
        }

        debug!(
            prefix,
            valid_prefix = %valid.prefix,
            fail_index = valid.fail_index,
            candidates = candidates.len(),
            merged = merged.len(),
            "fuzzy fallback"
        );
        rank(merged, &self.frequencies, self.options.max_suggestions)
    }

    /// Current usage count of `word`.
    pub fn frequency(&self, word: &str) -> u64 {
        self.frequencies.get(word)
    }

    pub fn trie(&self) -> &PrefixTrie {
        &self.trie
    }

    pub fn frequencies(&self) -> &FrequencyTable {
        &self.frequencies
    }

    pub fn options(&self) -> &SuggestOptions {
        &self.options
    }

    /// Set the maximum number of suggestions returned per query.
    pub fn set_max_suggestions(&mut self, max_suggestions: Option<usize>) {
        self.options.max_suggestions = max_suggestions;
    }
}
