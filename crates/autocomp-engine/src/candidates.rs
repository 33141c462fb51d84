// Near-miss candidate generation: alternative spellings of a prefix that
// stopped matching the trie at a known character index.
//
// Architecture mirrors a small strategy pipeline:
//   - `CandidateSource`: one class of edit (adjacent swap, substitution)
//   - `CandidateBuffer`: collects candidates and enforces the budget
//   - `CandidateGenerator`: runs its sources in order

/// Collects generated candidates up to a fixed budget.
pub struct CandidateBuffer {
    candidates: Vec<String>,
    max_candidates: usize,
}

impl CandidateBuffer {
    pub fn new(max_candidates: usize) -> Self {
        Self {
            candidates: Vec::new(),
            max_candidates,
        }
    }

    /// Returns `true` once the budget is used up.
    pub fn is_full(&self) -> bool {
        self.candidates.len() >= self.max_candidates
    }

    /// Record one candidate. Ignored once the buffer is full.
    pub fn push(&mut self, candidate: &[char]) {
        if self.is_full() {
            return;
        }
        self.candidates.push(candidate.iter().collect());
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn into_candidates(self) -> Vec<String> {
        self.candidates
    }
}

/// One class of single edit applied at or after the failure index.
///
/// Candidates are emitted without deduplication or validity checks; a
/// candidate that matches nothing simply yields no words downstream.
pub trait CandidateSource {
    fn generate(&self, word: &[char], fail_index: usize, out: &mut CandidateBuffer);
}

// ---------------------------------------------------------------------------
// AdjacentSwap
// ---------------------------------------------------------------------------

/// Swap each pair of neighbours `(i, i + 1)` for `i` in
/// `fail_index..len - 1`.
///
/// Words shorter than two characters produce nothing.
pub struct AdjacentSwap;

impl CandidateSource for AdjacentSwap {
    fn generate(&self, word: &[char], fail_index: usize, out: &mut CandidateBuffer) {
        if word.len() < 2 {
            return;
        }
        let mut buffer = word.to_vec();
        for i in fail_index..word.len() - 1 {
            if out.is_full() {
                break;
            }
            buffer.swap(i, i + 1);
            out.push(&buffer);
            buffer.swap(i, i + 1);
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace the character at each position in `fail_index..len` with every
/// character of `characters` that differs from the original.
pub struct Substitution {
    /// Replacement characters, tried in order.
    pub characters: Vec<char>,
}

impl CandidateSource for Substitution {
    fn generate(&self, word: &[char], fail_index: usize, out: &mut CandidateBuffer) {
        let mut buffer = word.to_vec();
        for i in fail_index..word.len() {
            for &ch in &self.characters {
                if ch == word[i] {
                    continue;
                }
                if out.is_full() {
                    return;
                }
                buffer[i] = ch;
                out.push(&buffer);
            }
            buffer[i] = word[i];
        }
    }
}

// ---------------------------------------------------------------------------
// CandidateGenerator
// ---------------------------------------------------------------------------

/// Runs a list of candidate sources over a failing prefix.
pub struct CandidateGenerator {
    max_candidates: usize,
    sources: Vec<Box<dyn CandidateSource>>,
}

impl CandidateGenerator {
    pub fn new(max_candidates: usize, sources: Vec<Box<dyn CandidateSource>>) -> Self {
        Self {
            max_candidates,
            sources,
        }
    }

    /// The fallback pipeline: adjacent swaps first, then single-character
    /// substitutions drawn from `substitutions`.
    pub fn near_miss(substitutions: &[char], max_candidates: usize) -> Self {
        Self::new(
            max_candidates,
            vec![
                Box::new(AdjacentSwap),
                Box::new(Substitution {
                    characters: substitutions.to_vec(),
                }),
            ],
        )
    }

    /// Generate candidates for `prefix`, editing only positions at or after
    /// the character index `fail_index`.
    ///
    /// Every candidate has the same character length as `prefix`.
    pub fn generate(&self, prefix: &str, fail_index: usize) -> Vec<String> {
        let word: Vec<char> = prefix.chars().collect();
        let mut out = CandidateBuffer::new(self.max_candidates);
        for source in &self.sources {
            if out.is_full() {
                break;
            }
            source.generate(&word, fail_index, &mut out);
        }
        out.into_candidates()
    }
}
