//! Prefix-code assignment.
//!
//! Each leaf's code is its root-to-leaf path, `0` for a left branch and `1`
//! for a right branch. The walk uses an explicit stack so that very skewed
//! trees (one code per level) cannot exhaust the call stack.

use std::collections::BTreeMap;
use std::fmt;

use crate::frequency::FrequencyTable;
use crate::tree::{HuffmanTree, Node};

/// A non-empty sequence of code bits.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    bits: Vec<bool>,
}

impl Code {
    /// Build a code from explicit bits.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Length in bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Code(\"{self}\")")
    }
}

/// Mapping from symbol to its prefix code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<char, Code>,
}

impl CodeTable {
    /// Assign codes from a tree; `None` yields an empty table.
    pub fn from_tree(tree: Option<&HuffmanTree>) -> Self {
        let mut codes = BTreeMap::new();

        match tree {
            None => {}
            // The lone leaf hangs off the root's left branch
            Some(HuffmanTree::Single { symbol, .. }) => {
                codes.insert(*symbol, Code::from_bits(vec![false]));
            }
            Some(HuffmanTree::Merged(root)) => {
                let mut stack: Vec<(&Node, Vec<bool>)> = vec![(root, Vec::new())];

                while let Some((node, mut path)) = stack.pop() {
                    match node {
                        Node::Leaf { symbol, .. } => {
                            if path.is_empty() {
                                path.push(false);
                            }
                            codes.insert(*symbol, Code::from_bits(path));
                        }
                        Node::Internal { left, right, .. } => {
                            let mut right_path = path.clone();
                            right_path.push(true);
                            path.push(false);

                            stack.push((right.as_ref(), right_path));
                            stack.push((left.as_ref(), path));
                        }
                    }
                }
            }
        }

        Self { codes }
    }

    /// Code for `symbol`, if it has one.
    pub fn get(&self, symbol: char) -> Option<&Code> {
        self.codes.get(&symbol)
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &Code)> + '_ {
        self.codes.iter().map(|(symbol, code)| (*symbol, code))
    }

    /// Entries ordered by code length, then symbol value.
    pub fn sorted_by_length(&self) -> Vec<(char, &Code)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by_key(|(symbol, code)| (code.len(), *symbol));
        entries
    }

    /// True if no code is a prefix of another.
    pub fn is_prefix_free(&self) -> bool {
        // In lexicographic order a prefix sorts immediately before some
        // extension of it, so checking neighbours is enough.
        let mut sorted: Vec<&Code> = self.codes.values().collect();
        sorted.sort();
        sorted.windows(2).all(|pair| !pair[0].is_prefix_of(pair[1]))
    }

    /// Bits needed to encode a message with the given symbol counts.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn encoded_bits(&self, frequencies: &FrequencyTable) -> u64 {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(symbol).map(|code| code.len() as u64 * count))
            .sum()
    }
}
