//! Size reporting for a compressed message.
//!
//! A [`CompressionReport`] gathers everything the command-line front end
//! shows: original and compressed sizes, the compression ratio and savings,
//! the code listing, and a preview of the bit sequence.
//!
//! # Ratio
//!
//! The ratio is `compressed_bits / original_bits`, where the original size
//! is the UTF-8 encoding of the message. For an empty message the ratio is
//! not applicable and is reported as `None`.

use std::fmt;

use crate::codes::Code;
use crate::encoder::Size;
use crate::Compression;

/// Default number of bits shown in the preview.
pub const DEFAULT_PREVIEW_BITS: usize = 128;

/// Summary of one compression run.
#[derive(Debug, Clone)]
pub struct CompressionReport {
    /// The original message
    pub message: String,

    /// Size of the message as UTF-8
    pub original: Size,

    /// Size of the packed Huffman bits
    pub compressed: Size,

    /// Number of distinct symbols
    pub distinct_symbols: usize,

    /// Codes ordered by (length, symbol)
    pub codes: Vec<(char, Code)>,

    /// Leading bits of the encoded message, `None` if nothing was encoded
    pub bit_preview: Option<String>,
}

impl CompressionReport {
    /// Build a report, previewing at most `preview_bits` bits.
    pub fn new(compression: &Compression, preview_bits: usize) -> Self {
        let encoded = &compression.encoded;

        Self {
            message: compression.message.clone(),
            original: Size::from_bytes(compression.message.len()),
            compressed: encoded.size(),
            distinct_symbols: compression.frequencies.len(),
            codes: compression
                .codes
                .sorted_by_length()
                .into_iter()
                .map(|(symbol, code)| (symbol, code.clone()))
                .collect(),
            bit_preview: (!encoded.is_empty()).then(|| encoded.preview(preview_bits)),
        }
    }

    /// Compressed bits over original bits, or `None` for an empty message.
    pub fn compression_ratio(&self) -> Option<f64> {
        if self.original.bits == 0 {
            None
        } else {
            Some(self.compressed.bits as f64 / self.original.bits as f64)
        }
    }

    /// Percentage of bits saved, `(1 - ratio) * 100`.
    pub fn savings_percent(&self) -> Option<f64> {
        self.compression_ratio().map(|ratio| (1.0 - ratio) * 100.0)
    }

    /// Human-readable report; same text as the `Display` impl.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Export as `key=value` lines (for parsing/testing).
    pub fn export_text(&self) -> String {
        let ratio = self
            .compression_ratio()
            .map_or_else(|| "n/a".to_string(), |r| format!("{r:.4}"));

        format!(
            "original_bits={}\n\
             original_bytes={}\n\
             compressed_bits={}\n\
             compressed_bytes={}\n\
             distinct_symbols={}\n\
             compression_ratio={}\n",
            self.original.bits,
            self.original.bytes,
            self.compressed.bits,
            self.compressed.bytes,
            self.distinct_symbols,
            ratio,
        )
    }
}

impl fmt::Display for CompressionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman compression")?;
        writeln!(f, "  Message: {}", self.message)?;
        writeln!(f, "  Original size: {}", self.original)?;
        writeln!(f, "  Compressed size: {}", self.compressed)?;

        match (self.compression_ratio(), self.savings_percent()) {
            (Some(ratio), Some(savings)) => {
                writeln!(f, "  Compression ratio: {ratio:.3} (compressed / original)")?;
                writeln!(f, "  Savings: {savings:.2}%")?;
            }
            _ => writeln!(f, "  Compression ratio: N/A (empty message)")?,
        }

        writeln!(f)?;
        writeln!(f, "  Codes used:")?;
        for (symbol, code) in &self.codes {
            writeln!(f, "    {} : {}", display_symbol(*symbol), code)?;
        }

        if let Some(preview) = &self.bit_preview {
            writeln!(f)?;
            writeln!(f, "  First compressed bits: {preview}")?;
        }

        Ok(())
    }
}

/// Quote a symbol for display, escaping control and non-printable characters.
///
/// A single quote is wrapped in double quotes instead of being escaped.
pub fn display_symbol(symbol: char) -> String {
    match symbol {
        '\'' => "\"'\"".to_string(),
        '"' => "'\"'".to_string(),
        _ => format!("'{}'", symbol.escape_debug()),
    }
}
