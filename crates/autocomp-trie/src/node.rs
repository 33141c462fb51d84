// Trie node: owned children keyed by character, plus a terminal flag

use hashbrown::HashMap;

/// A single trie node.
///
/// Each child is owned by exactly one parent; dropping a node drops its
/// whole subtree. The path from the root to a node spells the prefix the
/// node represents.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Return the child reached by `ch`, if any.
    pub fn child(&self, ch: char) -> Option<&TrieNode> {
        self.children.get(&ch)
    }

    /// Return the child reached by `ch`, creating an empty one if absent.
    pub fn child_or_insert(&mut self, ch: char) -> &mut TrieNode {
        self.children.entry(ch).or_default()
    }

    /// Whether a stored word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Mark this node as the end of a word.
    ///
    /// Returns `true` if the node was not terminal before.
    pub fn mark_terminal(&mut self) -> bool {
        !std::mem::replace(&mut self.terminal, true)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Depth-first collection of every word in this subtree.
    ///
    /// `path` holds the characters spelling the route to `self` and is
    /// restored to that value on return. Enumeration order follows the
    /// child map and is not specified.
    pub fn collect_words(&self, path: &mut String, out: &mut Vec<String>) {
        if self.terminal {
            out.push(path.clone());
        }
        for (&ch, child) in &self.children {
            path.push(ch);
            child.collect_words(path, out);
            path.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_empty_and_not_terminal() {
        let node = TrieNode::default();
        assert!(!node.is_terminal());
        assert_eq!(node.child_count(), 0);
        assert!(node.child('a').is_none());
    }

    #[test]
    fn child_or_insert_reuses_existing_child() {
        let mut node = TrieNode::default();
        node.child_or_insert('a').mark_terminal();
        node.child_or_insert('a');
        assert_eq!(node.child_count(), 1);
        assert!(node.child('a').unwrap().is_terminal());
    }

    #[test]
    fn mark_terminal_reports_first_marking_only() {
        let mut node = TrieNode::default();
        assert!(node.mark_terminal());
        assert!(!node.mark_terminal());
        assert!(node.is_terminal());
    }

    #[test]
    fn collect_words_restores_path() {
        let mut root = TrieNode::default();
        root.child_or_insert('a').child_or_insert('b').mark_terminal();
        root.child_or_insert('a').child_or_insert('c').mark_terminal();

        let mut path = String::from("x");
        let mut out = Vec::new();
        root.collect_words(&mut path, &mut out);
        out.sort();
        assert_eq!(out, vec!["xab".to_string(), "xac".to_string()]);
        assert_eq!(path, "x");
    }
}
