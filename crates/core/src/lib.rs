//! huffsize-core: Huffman prefix codes and compressed-size accounting
//!
//! This library builds a prefix-free binary code for the characters of a
//! message and measures how many bits the encoded message needs:
//! - Count symbol frequencies
//! - Merge a Huffman tree lowest-frequency-first with a deterministic tie-break
//! - Assign each symbol its root-to-leaf path as a code
//! - Concatenate codes into a packed bit sequence and report sizes
//!
//! # Architecture
//!
//! - `frequency`: symbol counting
//! - `tree`: Huffman tree construction (and decoding, for verification)
//! - `codes`: prefix-code assignment
//! - `bitio`: low-level bit reading/writing
//! - `encoder`: message encoding and bit/byte conversion
//! - `report`: human-readable and key=value size reports
//! - `fnv`: standalone FNV-1 32-bit hash
//!
//! # Example
//! ```
//! use huffsize_core::compress_message;
//!
//! let compression = compress_message("aaaa").unwrap();
//! assert_eq!(compression.encoded.to_bit_string(), "0000");
//! assert_eq!(compression.encoded.size().bytes, 1);
//! assert_eq!(compression.decode().unwrap(), "aaaa");
//! ```

pub mod bitio;
pub mod codes;
pub mod encoder;
pub mod error;
pub mod fnv;
pub mod frequency;
pub mod report;
pub mod tree;

// Re-export commonly used types
pub use codes::{Code, CodeTable};
pub use encoder::{bits_to_size, encode, EncodedBits, Size};
pub use error::{Error, HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use report::CompressionReport;
pub use tree::HuffmanTree;

/// Every artifact produced while compressing one message.
#[derive(Debug, Clone)]
pub struct Compression {
    pub message: String,
    pub frequencies: FrequencyTable,
    /// `None` for an empty message
    pub tree: Option<HuffmanTree>,
    pub codes: CodeTable,
    pub encoded: EncodedBits,
}

impl Compression {
    /// Decode `encoded` back into text using `tree`.
    pub fn decode(&self) -> Result<String> {
        match &self.tree {
            Some(tree) => tree.decode(&self.encoded),
            None if self.encoded.is_empty() => Ok(String::new()),
            None => Err(HuffmanError::InvalidCode { position: 0 }.into()),
        }
    }
}

/// Run the full pipeline: count, build tree, assign codes, encode.
///
/// # Errors
/// Only fails if the derived code table misses a symbol of the message,
/// which indicates a construction bug.
pub fn compress_message(message: &str) -> Result<Compression> {
    let frequencies = FrequencyTable::from_message(message);
    let tree = HuffmanTree::build(&frequencies);
    let codes = CodeTable::from_tree(tree.as_ref());
    let encoded = encode(message, &codes)?;

    Ok(Compression {
        message: message.to_string(),
        frequencies,
        tree,
        codes,
        encoded,
    })
}
