//! Message encoding and bit/byte size accounting.

use std::fmt;

use log::debug;

use crate::bitio::BitWriter;
use crate::codes::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;

/// Convert a bit count to `(bits, bytes)`, rounding bytes up.
pub const fn bits_to_size(bits: usize) -> (usize, usize) {
    (bits, bits.div_ceil(8))
}

/// A size expressed both in bits and in whole (rounded-up) bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub bits: usize,
    pub bytes: usize,
}

impl Size {
    pub const fn from_bits(bits: usize) -> Self {
        let (bits, bytes) = bits_to_size(bits);
        Self { bits, bytes }
    }

    /// Size of `byte_len` whole bytes.
    pub const fn from_bytes(byte_len: usize) -> Self {
        Self {
            bits: byte_len * 8,
            bytes: byte_len,
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bits ({} bytes)", self.bits, self.bytes)
    }
}

/// The concatenated codes of a message, packed MSB-first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedBits {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl EncodedBits {
    /// Wrap packed bytes holding `bit_len` meaningful bits.
    pub fn from_packed(bytes: Vec<u8>, bit_len: usize) -> Self {
        let bit_len = bit_len.min(bytes.len() * 8);
        Self { bytes, bit_len }
    }

    /// Number of meaningful bits.
    pub fn len(&self) -> usize {
        self.bit_len
    }

    pub fn is_empty(&self) -> bool {
        self.bit_len == 0
    }

    /// Packed bytes; bits past `len()` in the last byte are zero.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> Size {
        Size::from_bits(self.bit_len)
    }

    /// Iterate the meaningful bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_len).map(|i| self.bytes[i / 8] & (0x80 >> (i % 8)) != 0)
    }

    /// The bits as a string of `'0'` and `'1'`.
    pub fn to_bit_string(&self) -> String {
        self.iter().map(|bit| if bit { '1' } else { '0' }).collect()
    }

    /// The first `limit` bits as a string, with `...` appended if truncated.
    pub fn preview(&self, limit: usize) -> String {
        let mut shown: String = self
            .iter()
            .take(limit)
            .map(|bit| if bit { '1' } else { '0' })
            .collect();
        if self.bit_len > limit {
            shown.push_str("...");
        }
        shown
    }
}

/// Encode `message` by concatenating each character's code.
///
/// # Errors
/// `HuffmanError::MissingSymbol` if a character has no entry in `codes`.
pub fn encode(message: &str, codes: &CodeTable) -> Result<EncodedBits> {
    let frequencies = FrequencyTable::from_message(message);
    let mut writer = BitWriter::with_capacity(codes.encoded_bits(&frequencies) as usize);

    for (position, symbol) in message.chars().enumerate() {
        let code = codes
            .get(symbol)
            .ok_or(HuffmanError::MissingSymbol { symbol, position })?;
        writer.write_slice(code.bits());
    }

    let (bytes, bit_len) = writer.finish();
    debug!(
        "encoded {} symbols into {} bits",
        frequencies.total(),
        bit_len
    );

    Ok(EncodedBits { bytes, bit_len })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::tree::HuffmanTree;

    fn codes_for(message: &str) -> CodeTable {
        let tree = HuffmanTree::build(&FrequencyTable::from_message(message));
        CodeTable::from_tree(tree.as_ref())
    }

    #[test]
    fn test_bits_to_size() {
        assert_eq!(bits_to_size(0), (0, 0));
        assert_eq!(bits_to_size(1), (1, 1));
        assert_eq!(bits_to_size(8), (8, 1));
        assert_eq!(bits_to_size(9), (9, 2));
        assert_eq!(bits_to_size(64), (64, 8));
        assert_eq!(bits_to_size(65), (65, 9));
    }

    #[test]
    fn test_size_display() {
        assert_eq!(Size::from_bits(9).to_string(), "9 bits (2 bytes)");
        assert_eq!(Size::from_bytes(3), Size { bits: 24, bytes: 3 });
    }

    #[test]
    fn test_encode_empty() {
        let encoded = encode("", &codes_for("")).unwrap();
        assert!(encoded.is_empty());
        assert_eq!(encoded.size(), Size { bits: 0, bytes: 0 });
        assert_eq!(encoded.to_bit_string(), "");
    }

    #[test]
    fn test_encode_single_symbol() {
        let encoded = encode("aaaa", &codes_for("aaaa")).unwrap();
        assert_eq!(encoded.to_bit_string(), "0000");
        assert_eq!(encoded.size(), Size { bits: 4, bytes: 1 });
    }

    #[test]
    fn test_encode_two_symbols() {
        let encoded = encode("ab", &codes_for("ab")).unwrap();
        assert_eq!(encoded.len(), 2);
        assert_eq!(encoded.to_bit_string(), "01");
    }

    #[test]
    fn test_encode_concatenates_in_order() {
        // a -> 1, b -> 00, c -> 01
        let encoded = encode("aaabc", &codes_for("aaabc")).unwrap();
        assert_eq!(encoded.to_bit_string(), "1110001");
        assert_eq!(encoded.as_bytes(), &[0b1110_0010]);
    }

    #[test]
    fn test_encoded_length_matches_code_weights() {
        let message = "mississippi river";
        let codes = codes_for(message);
        let expected = codes.encoded_bits(&FrequencyTable::from_message(message));

        let encoded = encode(message, &codes).unwrap();
        assert_eq!(encoded.len() as u64, expected);
        assert_eq!(encoded.as_bytes().len(), encoded.len().div_ceil(8));
    }

    #[test]
    fn test_missing_symbol_is_an_error() {
        let codes = codes_for("abc");
        let err = encode("abz", &codes).unwrap_err();

        assert!(matches!(
            err,
            Error::Huffman(HuffmanError::MissingSymbol {
                symbol: 'z',
                position: 2
            })
        ));
    }

    #[test]
    fn test_preview_truncation() {
        let encoded = EncodedBits::from_packed(vec![0b1010_1010, 0b1100_0000], 10);

        assert_eq!(encoded.preview(128), "1010101011");
        assert_eq!(encoded.preview(10), "1010101011");
        assert_eq!(encoded.preview(4), "1010...");
    }

    #[test]
    fn test_from_packed_clamps_length() {
        let encoded = EncodedBits::from_packed(vec![0xFF], 12);
        assert_eq!(encoded.len(), 8);
    }
}
