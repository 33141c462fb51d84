// Suggestion: one ranked output entry

/// A suggested word together with its current usage frequency.
///
/// Lists of suggestions are ordered by descending `frequency`, with equal
/// frequencies in ascending lexicographic order of `word`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// How many direct-hit queries have surfaced this word so far.
    pub frequency: u64,
}

impl Suggestion {
    pub fn new(word: impl Into<String>, frequency: u64) -> Self {
        Self {
            word: word.into(),
            frequency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_str_and_string() {
        let a = Suggestion::new("app", 2);
        let b = Suggestion::new(String::from("app"), 2);
        assert_eq!(a, b);
        assert_eq!(a.word, "app");
        assert_eq!(a.frequency, 2);
    }
}
