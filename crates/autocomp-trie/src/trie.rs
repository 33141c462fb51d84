// PrefixTrie: vocabulary storage, prefix enumeration, longest-prefix walk

use std::borrow::Cow;
use std::collections::BTreeSet;

use autocomp_core::{Alphabet, InsertError};

use crate::node::TrieNode;

/// Result of walking an input string down the trie as far as it goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPrefix {
    /// The longest leading part of the input that has a trie path.
    pub prefix: String,
    /// Character index at which matching first failed. Equals the input's
    /// character count when the whole input matched.
    pub fail_index: usize,
}

impl ValidPrefix {
    /// `true` when not even the first character matched.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }
}

/// A prefix tree holding the vocabulary.
///
/// The set of terminal paths from the root is exactly the set of inserted
/// words. Insertion is idempotent.
#[derive(Debug, Clone, Default)]
pub struct PrefixTrie {
    root: TrieNode,
    alphabet: Alphabet,
    len: usize,
    /// Distinct characters of the stored vocabulary, used as the
    /// substitution set for [`Alphabet::Unicode`].
    seen_chars: BTreeSet<char>,
}

impl PrefixTrie {
    /// Create an empty trie accepting words from `alphabet`.
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            root: TrieNode::default(),
            alphabet,
            len: 0,
            seen_chars: BTreeSet::new(),
        }
    }

    /// Insert `word` into the vocabulary.
    ///
    /// The whole word is validated before any node is created, so a word
    /// with an out-of-alphabet character leaves the trie untouched.
    ///
    /// Returns `Ok(true)` if the word was new and `Ok(false)` if it was
    /// already stored.
    pub fn insert(&mut self, word: &str) -> Result<bool, InsertError> {
        self.alphabet.validate(word)?;

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.child_or_insert(ch);
        }
        let added = node.mark_terminal();
        if added {
            self.len += 1;
            if self.alphabet == Alphabet::Unicode {
                self.seen_chars.extend(word.chars());
            }
        }
        Ok(added)
    }

    /// Whether `word` is stored as a complete word.
    pub fn contains(&self, word: &str) -> bool {
        self.descend(word).is_some_and(TrieNode::is_terminal)
    }

    /// All stored words starting with `prefix`, in unspecified order.
    ///
    /// An unknown prefix yields an empty vector. The empty prefix yields
    /// the whole vocabulary.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let Some(node) = self.descend(prefix) else {
            return Vec::new();
        };
        let mut out = Vec::new();
        let mut path = prefix.to_string();
        node.collect_words(&mut path, &mut out);
        out
    }

    /// Walk `input` while each character has a matching child.
    ///
    /// Never fails. Characters outside the alphabet simply do not match.
    pub fn longest_valid_prefix(&self, input: &str) -> ValidPrefix {
        let mut node = &self.root;
        let mut prefix = String::with_capacity(input.len());
        let mut fail_index = 0;

        for ch in input.chars() {
            match node.child(ch) {
                Some(child) => {
                    node = child;
                    prefix.push(ch);
                    fail_index += 1;
                }
                None => break,
            }
        }
        ValidPrefix { prefix, fail_index }
    }

    /// Characters tried at each position by the substitution fallback.
    ///
    /// `Lowercase` uses `a`..=`z`. `Unicode` uses the sorted distinct
    /// characters of the vocabulary, which keeps the candidate count
    /// bounded by what could possibly match.
    pub fn substitution_chars(&self) -> Cow<'static, [char]> {
        match self.alphabet.fixed_substitutions() {
            Some(letters) => Cow::Borrowed(letters),
            None => Cow::Owned(self.seen_chars.iter().copied().collect()),
        }
    }

    /// The alphabet this trie validates against.
    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn descend(&self, prefix: &str) -> Option<&TrieNode> {
        prefix.chars().try_fold(&self.root, |node, ch| node.child(ch))
    }
}
