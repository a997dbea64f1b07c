//! Symbol frequency counting.
//!
//! A [`FrequencyTable`] maps every distinct character of a message to the
//! number of times it occurs. Entries are kept in order of first appearance,
//! which is the insertion order the tree builder uses to break ties.

use std::collections::HashMap;

/// Occurrence counts for the distinct symbols of a message.
///
/// # Invariants
/// - one entry per distinct symbol, in first-appearance order
/// - every count is at least 1
/// - counts sum to the message length in characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(char, u64)>,
}

impl FrequencyTable {
    /// Count the characters of `message`.
    pub fn from_message(message: &str) -> Self {
        Self::from_symbols(message.chars())
    }

    /// Count an arbitrary sequence of symbols.
    pub fn from_symbols(symbols: impl IntoIterator<Item = char>) -> Self {
        let mut index: HashMap<char, usize> = HashMap::new();
        let mut entries: Vec<(char, u64)> = Vec::new();

        for symbol in symbols {
            match index.get(&symbol) {
                Some(&slot) => entries[slot].1 += 1,
                None => {
                    index.insert(symbol, entries.len());
                    entries.push((symbol, 1));
                }
            }
        }

        Self { entries }
    }

    /// Count of `symbol`, or 0 if it never occurs.
    pub fn get(&self, symbol: char) -> u64 {
        self.entries
            .iter()
            .find(|(s, _)| *s == symbol)
            .map_or(0, |(_, count)| *count)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts (the message length in characters).
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    /// Iterate `(symbol, count)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.entries.iter().copied()
    }
}
