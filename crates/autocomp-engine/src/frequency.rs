// Per-word usage counters used for ranking

use hashbrown::HashMap;

/// Usage counts keyed by word.
///
/// A word with no entry has count zero. Counts never decrease.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current count for `word` (zero when never recorded).
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Add one to `word`'s count and return the new value.
    pub fn increment(&mut self, word: &str) -> u64 {
        if let Some(count) = self.counts.get_mut(word) {
            *count = count.saturating_add(1);
            return *count;
        }
        self.counts.insert(word.to_string(), 1);
        1
    }

    /// Number of words with a recorded count.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(w, &c)| (w.as_str(), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_word_counts_as_zero() {
        let table = FrequencyTable::new();
        assert_eq!(table.get("app"), 0);
        assert!(table.is_empty());
    }

    #[test]
    fn increment_returns_new_count() {
        let mut table = FrequencyTable::new();
        assert_eq!(table.increment("app"), 1);
        assert_eq!(table.increment("app"), 2);
        assert_eq!(table.increment("bat"), 1);
        assert_eq!(table.get("app"), 2);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn iter_yields_all_recorded_words() {
        let mut table = FrequencyTable::new();
        table.increment("cat");
        table.increment("call");
        table.increment("call");
        let mut entries: Vec<_> = table.iter().collect();
        entries.sort();
        assert_eq!(entries, vec![("call", 2), ("cat", 1)]);
    }
}
