//! Huffman tree construction.
//!
//! Leaves are merged lowest-frequency-first using a min-heap keyed by
//! `(frequency, sequence)`. Every node pushed onto the heap receives the
//! next sequence number: leaves in [`FrequencyTable`] order (first
//! appearance in the message), merged nodes as they are created. Among
//! equal frequencies the earliest-inserted node is therefore extracted
//! first, which makes the resulting codes reproducible.
//!
//! The first node extracted from a merge becomes the `left` child (code
//! bit `0`), the second the `right` child (code bit `1`).

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::bitio::BitReader;
use crate::encoder::EncodedBits;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

/// A node of a merged Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        symbol: char,
        frequency: u64,
    },
    Internal {
        frequency: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } | Node::Internal { frequency, .. } => *frequency,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            frequency: left.frequency() + right.frequency(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// A Huffman tree built from a non-empty [`FrequencyTable`].
///
/// A message with a single distinct symbol has no merges to perform. That
/// shape is kept as its own variant: a root whose only child is the lone
/// leaf, reached through the left (`0`) branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanTree {
    /// Exactly one distinct symbol
    Single { symbol: char, frequency: u64 },
    /// Two or more distinct symbols; the root is always `Node::Internal`
    Merged(Node),
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest
/// `(frequency, sequence)` first.
#[derive(Debug)]
struct Pending {
    frequency: u64,
    sequence: u64,
    node: Node,
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behaviour
        (other.frequency, other.sequence).cmp(&(self.frequency, self.sequence))
    }
}

impl HuffmanTree {
    /// Build a tree from symbol counts.
    ///
    /// Returns `None` for an empty table. For `n >= 2` symbols exactly
    /// `n - 1` merges are performed.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut symbols = frequencies.iter();
        let mut merges = 0usize;

        let tree = match frequencies.len() {
            0 => return None,
            1 => {
                let (symbol, frequency) = symbols.next()?;
                HuffmanTree::Single { symbol, frequency }
            }
            n => {
                let mut heap: BinaryHeap<Pending> = symbols
                    .enumerate()
                    .map(|(sequence, (symbol, frequency))| Pending {
                        frequency,
                        sequence: sequence as u64,
                        node: Node::Leaf { symbol, frequency },
                    })
                    .collect();

                let mut next_sequence = n as u64;

                let root = loop {
                    let first = heap.pop()?;
                    let Some(second) = heap.pop() else {
                        break first.node;
                    };

                    trace!(
                        "merge #{}: {} + {} (seq {} and {})",
                        merges,
                        first.frequency,
                        second.frequency,
                        first.sequence,
                        second.sequence
                    );

                    let merged = Node::merge(first.node, second.node);
                    heap.push(Pending {
                        frequency: merged.frequency(),
                        sequence: next_sequence,
                        node: merged,
                    });
                    next_sequence += 1;
                    merges += 1;
                };

                debug_assert_eq!(merges, n - 1);
                debug_assert!(!root.is_leaf());
                HuffmanTree::Merged(root)
            }
        };

        debug_assert_eq!(merges, tree.merge_count());
        debug!(
            "built huffman tree: {} leaves, {} merges, depth {}, weight {}",
            tree.leaf_count(),
            merges,
            tree.depth(),
            tree.frequency()
        );

        Some(tree)
    }

    /// Total weight at the root (the message length in symbols).
    pub fn frequency(&self) -> u64 {
        match self {
            HuffmanTree::Single { frequency, .. } => *frequency,
            HuffmanTree::Merged(root) => root.frequency(),
        }
    }

    /// Number of leaves, equal to the number of distinct symbols.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanTree::Single { .. } => 1,
            HuffmanTree::Merged(root) => {
                let mut count = 0;
                let mut stack = vec![root];
                while let Some(node) = stack.pop() {
                    match node {
                        Node::Leaf { .. } => count += 1,
                        Node::Internal { left, right, .. } => {
                            stack.push(right.as_ref());
                            stack.push(left.as_ref());
                        }
                    }
                }
                count
            }
        }
    }

    /// Number of merges performed to build the tree.
    ///
    /// Every merge adds one internal node to a full binary tree, so this is
    /// one less than the leaf count.
    pub fn merge_count(&self) -> usize {
        self.leaf_count() - 1
    }

    /// Length of the longest root-to-leaf path, i.e. the longest code.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanTree::Single { .. } => 1,
            HuffmanTree::Merged(root) => {
                let mut deepest = 0;
                let mut stack = vec![(root, 0usize)];
                while let Some((node, depth)) = stack.pop() {
                    match node {
                        Node::Leaf { .. } => deepest = deepest.max(depth),
                        Node::Internal { left, right, .. } => {
                            stack.push((right.as_ref(), depth + 1));
                            stack.push((left.as_ref(), depth + 1));
                        }
                    }
                }
                deepest
            }
        }
    }

    /// Decode a bit sequence by walking from the root to a leaf per symbol.
    ///
    /// # Errors
    /// - `HuffmanError::InvalidCode` if a `1` bit is read on a single-symbol tree
    /// - `HuffmanError::TruncatedCode` if the bits end partway through a code
    pub fn decode(&self, bits: &EncodedBits) -> Result<String> {
        let mut reader = BitReader::new(bits.as_bytes(), bits.len());
        let mut decoded = String::new();

        match self {
            HuffmanTree::Single { symbol, .. } => {
                while !reader.is_empty() {
                    let position = reader.position();
                    if reader.read_bit()? {
                        return Err(HuffmanError::InvalidCode { position }.into());
                    }
                    decoded.push(*symbol);
                }
            }
            HuffmanTree::Merged(root) => {
                let mut node = root;
                while !reader.is_empty() {
                    if let Node::Internal { left, right, .. } = node {
                        node = if reader.read_bit()? { right.as_ref() } else { left.as_ref() };
                    }
                    if let Node::Leaf { symbol, .. } = node {
                        decoded.push(*symbol);
                        node = root;
                    }
                }
                if !std::ptr::eq(node, root) {
                    return Err(HuffmanError::TruncatedCode { bits: bits.len() }.into());
                }
            }
        }

        Ok(decoded)
    }
}
