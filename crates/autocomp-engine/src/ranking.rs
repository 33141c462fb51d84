// Frequency ranking via max-heap selection

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use autocomp_core::Suggestion;

use crate::frequency::FrequencyTable;

/// Heap entry: greater means "ranked earlier".
#[derive(Debug, PartialEq, Eq)]
struct Ranked {
    frequency: u64,
    word: String,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.frequency
            .cmp(&other.frequency)
            // Reversed so that the lexicographically smaller word wins ties.
            .then_with(|| other.word.cmp(&self.word))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Order `words` by descending frequency, breaking ties in ascending
/// lexicographic order.
///
/// `words` must already be unique. At most `limit` suggestions are
/// returned when a limit is given.
pub fn rank<I>(words: I, frequencies: &FrequencyTable, limit: Option<usize>) -> Vec<Suggestion>
where
    I: IntoIterator<Item = String>,
{
    let mut heap: BinaryHeap<Ranked> = words
        .into_iter()
        .map(|word| Ranked {
            frequency: frequencies.get(&word),
            word,
        })
        .collect();

    let take = limit.unwrap_or(usize::MAX).min(heap.len());
    let mut ranked = Vec::with_capacity(take);
    while ranked.len() < take {
        let Some(top) = heap.pop() else { break };
        ranked.push(Suggestion {
            word: top.word,
            frequency: top.frequency,
        });
    }
    ranked
}
