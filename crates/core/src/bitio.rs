//! Bit-level I/O for packing prefix codes into bytes.
//!
//! [`BitWriter`] appends bits MSB-first and [`BitReader`] reads them back in
//! the same order. The final partial byte is padded with zero bits; the
//! writer remembers the exact bit length so padding is never mistaken for
//! data.
//!
//! # Example
//! ```
//! use huffsize_core::bitio::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.write_slice(&[true, false, true]);
//! writer.write_bit(true);
//! let (bytes, bit_len) = writer.finish();
//! assert_eq!(bytes, vec![0b1011_0000]);
//! assert_eq!(bit_len, 4);
//!
//! let mut reader = BitReader::new(&bytes, bit_len);
//! assert!(reader.read_bit().unwrap());
//! assert!(!reader.read_bit().unwrap());
//! assert_eq!(reader.bits_remaining(), 2);
//! ```

use crate::error::{BitIoError, Result};

/// Appends bits MSB-first into a growing byte buffer.
///
/// # Invariants
/// - `pending_bits` < 8; a full accumulator is flushed immediately
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    /// Completed bytes
    bytes: Vec<u8>,
    /// Partial byte, filled from the MSB down
    pending: u8,
    /// Number of bits used in `pending`
    pending_bits: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer with room for `bit_capacity` bits.
    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(bit_capacity.div_ceil(8)),
            ..Self::default()
        }
    }

    /// Append one bit.
    pub fn write_bit(&mut self, bit: bool) {
        if bit {
            self.pending |= 0x80 >> self.pending_bits;
        }
        self.pending_bits += 1;

        if self.pending_bits == 8 {
            self.bytes.push(self.pending);
            self.pending = 0;
            self.pending_bits = 0;
        }
    }

    /// Append a run of bits in order.
    pub fn write_slice(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.write_bit(bit);
        }
    }

    /// Total number of bits written.
    pub fn bit_len(&self) -> usize {
        self.bytes.len() * 8 + self.pending_bits as usize
    }

    /// Flush the partial byte (zero padded) and return `(bytes, bit_len)`.
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        let bit_len = self.bit_len();
        if self.pending_bits > 0 {
            self.bytes.push(self.pending);
        }
        (self.bytes, bit_len)
    }
}

/// Reads bits MSB-first from a byte buffer holding `bit_len` valid bits.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    data: &'a [u8],
    bit_len: usize,
    /// Next bit to read (0 = MSB of first byte)
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader over the first `bit_len` bits of `data`.
    ///
    /// `bit_len` is clamped to the bits actually present.
    pub fn new(data: &'a [u8], bit_len: usize) -> Self {
        Self {
            data,
            bit_len: bit_len.min(data.len() * 8),
            position: 0,
        }
    }

    /// Read one bit.
    ///
    /// # Errors
    /// `BitIoError::UnexpectedEof` once all valid bits are consumed.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.bit_len {
            return Err(BitIoError::UnexpectedEof.into());
        }

        let byte = self.data[self.position / 8];
        let bit = byte & (0x80 >> (self.position % 8)) != 0;
        self.position += 1;

        Ok(bit)
    }

    pub fn bits_remaining(&self) -> usize {
        self.bit_len - self.position
    }

    /// Current bit position.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_empty(&self) -> bool {
        self.position >= self.bit_len
    }
}
