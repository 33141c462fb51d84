//! Owning prefix trie for the autocomp engine.
//!
//! Stores a vocabulary as a tree of uniquely owned nodes and answers two
//! questions about it: which stored words start with a given prefix, and
//! how far an arbitrary input can be walked before it leaves the tree.
//!
//! # Architecture
//!
//! - [`node`] -- A single node: character-keyed children and a terminal flag
//! - [`trie`] -- The vocabulary container, prefix enumeration, and the
//!   longest-valid-prefix walk

pub mod node;
pub mod trie;

pub use node::TrieNode;
pub use trie::{PrefixTrie, ValidPrefix};
