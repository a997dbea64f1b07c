//! Property-based tests for prefix-code construction.
//!
//! Uses proptest to check the structural guarantees of the Huffman codes
//! over arbitrary messages.

use huffsize_core::{bits_to_size, compress_message, FrequencyTable, HuffmanTree};
use proptest::prelude::*;

// =============================================================================
// GENERATORS
// =============================================================================

/// Messages over a small alphabet, so symbols repeat and frequencies vary
fn small_alphabet_message() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['a', 'b', 'c', 'd', 'e', ' ', '\n', 'ñ']), 0..400)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Arbitrary Unicode messages
fn any_message() -> impl Strategy<Value = String> {
    prop::collection::vec(any::<char>(), 0..200).prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// CODE TABLE PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn prop_codes_are_prefix_free(message in small_alphabet_message()) {
        let compression = compress_message(&message).unwrap();
        let codes: Vec<_> = compression.codes.iter().collect();

        for (i, (_, a)) in codes.iter().enumerate() {
            for (_, b) in codes.iter().skip(i + 1) {
                prop_assert!(!a.is_prefix_of(b));
                prop_assert!(!b.is_prefix_of(a));
            }
        }
    }

    #[test]
    fn prop_codes_cover_exactly_the_message_symbols(message in any_message()) {
        let compression = compress_message(&message).unwrap();

        for symbol in message.chars() {
            prop_assert!(compression.codes.get(symbol).is_some_and(|code| !code.is_empty()));
        }
        for (symbol, _) in compression.codes.iter() {
            prop_assert!(message.contains(symbol));
        }
        prop_assert_eq!(compression.codes.len(), compression.frequencies.len());
    }

    #[test]
    fn prop_round_trip(message in any_message()) {
        let compression = compress_message(&message).unwrap();
        prop_assert_eq!(compression.decode().unwrap(), message);
    }

    #[test]
    fn prop_kraft_equality(message in small_alphabet_message()) {
        // A full binary tree's code lengths satisfy sum(2^-len) == 1
        let compression = compress_message(&message).unwrap();
        prop_assume!(compression.codes.len() >= 2);

        let sum: f64 = compression
            .codes
            .iter()
            .map(|(_, code)| 0.5f64.powi(code.len() as i32))
            .sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn prop_tree_weight_matches_message(message in any_message()) {
        let frequencies = FrequencyTable::from_message(&message);
        let tree = HuffmanTree::build(&frequencies);

        prop_assert_eq!(frequencies.total() as usize, message.chars().count());
        match tree {
            None => prop_assert!(message.is_empty()),
            Some(tree) => {
                prop_assert_eq!(tree.frequency(), frequencies.total());
                prop_assert_eq!(tree.leaf_count(), frequencies.len());
            }
        }
    }

    #[test]
    fn prop_encoded_length_is_weighted_code_length(message in small_alphabet_message()) {
        let compression = compress_message(&message).unwrap();
        let expected = compression.codes.encoded_bits(&compression.frequencies);

        prop_assert_eq!(compression.encoded.len() as u64, expected);
        prop_assert_eq!(compression.encoded.as_bytes().len(), compression.encoded.size().bytes);
    }

    #[test]
    fn prop_bits_to_size_rounds_up(bits in 0usize..1_000_000) {
        let (n, bytes) = bits_to_size(bits);

        prop_assert_eq!(n, bits);
        prop_assert!(bytes * 8 >= bits);
        prop_assert!(bytes * 8 < bits + 8);
    }
}
