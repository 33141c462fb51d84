// Supported alphabets: which characters a vocabulary word may contain,
// and which characters the fuzzy fallback substitutes.

use crate::InsertError;

/// Substitution characters for [`Alphabet::Lowercase`].
pub const LOWERCASE_LETTERS: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// The set of characters a vocabulary may be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alphabet {
    /// ASCII `a` through `z` only.
    #[default]
    Lowercase,
    /// Any character that is neither whitespace nor a control character.
    ///
    /// Substitution candidates are drawn from the characters actually
    /// present in the vocabulary rather than from all of Unicode.
    Unicode,
}

impl Alphabet {
    /// Returns `true` if `ch` may appear in a stored word.
    pub fn contains(self, ch: char) -> bool {
        match self {
            Alphabet::Lowercase => ch.is_ascii_lowercase(),
            Alphabet::Unicode => !ch.is_whitespace() && !ch.is_control(),
        }
    }

    /// Check that `word` is non-empty and made only of characters from
    /// this alphabet.
    ///
    /// Reports the first offending character together with its character
    /// position.
    pub fn validate(self, word: &str) -> Result<(), InsertError> {
        if word.is_empty() {
            return Err(InsertError::EmptyWord);
        }
        match word.chars().enumerate().find(|&(_, ch)| !self.contains(ch)) {
            Some((position, ch)) => Err(InsertError::InvalidCharacter {
                word: word.to_string(),
                ch,
                position,
            }),
            None => Ok(()),
        }
    }

    /// The fixed substitution set for this alphabet, if it has one.
    ///
    /// `Unicode` returns `None`: its substitution set depends on the
    /// vocabulary and is computed by the trie.
    pub fn fixed_substitutions(self) -> Option<&'static [char]> {
        match self {
            Alphabet::Lowercase => Some(LOWERCASE_LETTERS),
            Alphabet::Unicode => None,
        }
    }
}
