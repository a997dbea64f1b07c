//! Sample message generation.
//!
//! With `--generate` the tool builds a message with interesting frequency
//! characteristics instead of reading one:
//! - runs of a single character (one very frequent symbol)
//! - text-like stretches over a lowercase alphabet
//! - short repeating patterns
//! - occasional non-ASCII characters
//!
//! All randomness comes from a seeded ChaCha8 RNG, so a seed fully
//! determines the message.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const TEXT_ALPHABET: &str = "etaoinshrdlucmfwypvbgkjqxz      .,\n";
const EXTRA_SYMBOLS: &str = "ñéü€→🦀";

/// Generate a message of exactly `length` characters.
pub fn generate_sample_message(seed: u64, length: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let text: Vec<char> = TEXT_ALPHABET.chars().collect();
    let extra: Vec<char> = EXTRA_SYMBOLS.chars().collect();

    let mut message: Vec<char> = Vec::with_capacity(length);

    while message.len() < length {
        let segment = (length - message.len()).min(rng.gen_range(8..=64));

        match rng.gen_range(0..10u8) {
            // 20% runs
            0..=1 => {
                let symbol = text[rng.gen_range(0..text.len())];
                message.extend(std::iter::repeat(symbol).take(segment));
            }

            // 50% text-like, biased toward the front of the alphabet
            2..=6 => {
                for _ in 0..segment {
                    let a = rng.gen_range(0..text.len());
                    let b = rng.gen_range(0..text.len());
                    message.push(text[a.min(b)]);
                }
            }

            // 20% repeating pattern
            7..=8 => {
                let pattern = generate_pattern(&mut rng, &text);
                message.extend(pattern.iter().cycle().take(segment));
            }

            // 10% rare symbols
            _ => {
                for _ in 0..segment.min(4) {
                    message.push(extra[rng.gen_range(0..extra.len())]);
                }
            }
        }
    }

    message.truncate(length);
    message.into_iter().collect()
}

/// Generate a short repeating pattern.
fn generate_pattern(rng: &mut ChaCha8Rng, alphabet: &[char]) -> Vec<char> {
    let pattern_len = rng.gen_range(2..=6);
    (0..pattern_len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}
