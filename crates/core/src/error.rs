//! Error types for huffsize.
//!
//! The core is a set of pure computations, so very little can fail. The
//! variants below cover the guarded faults: encoding a symbol the code
//! table does not know, and reading a bit stream that does not decode.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Huffman: encode lookups and decode walks
/// - Bit I/O: reading/writing bits from/to byte buffers
/// - I/O: reading the message in the command-line front end
/// - Config: invalid command-line arguments
#[derive(Debug, Error)]
pub enum Error {
    /// Huffman codec error (e.g., unknown symbol, decode failure)
    #[error("huffman codec error: {0}")]
    Huffman(#[from] HuffmanError),

    /// Bit I/O operation failed (e.g., reading past end of buffer)
    #[error("bit I/O error: {0}")]
    BitIo(#[from] BitIoError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Bit-level I/O errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BitIoError {
    /// Attempted to read past the end of the buffer
    #[error("unexpected end of bit stream")]
    UnexpectedEof,
}

/// Huffman codec errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HuffmanError {
    /// The message contains a symbol with no entry in the code table
    #[error("symbol {symbol:?} at position {position} has no code")]
    MissingSymbol { symbol: char, position: usize },

    /// A bit sequence was decoded against an empty tree
    #[error("invalid huffman code at bit position {position}")]
    InvalidCode { position: usize },

    /// The bit sequence ended partway through a code
    #[error("bit sequence of {bits} bits ends inside a code")]
    TruncatedCode { bits: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
