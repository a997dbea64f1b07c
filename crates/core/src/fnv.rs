//! FNV-1 (32-bit) hashing.
//!
//! Standalone utility with no connection to the Huffman pipeline. FNV-1
//! multiplies by the prime before XOR-ing in each byte (FNV-1a does the
//! reverse).

/// FNV-1 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hash `data` with 32-bit FNV-1.
pub fn fnv1_32(data: &[u8]) -> u32 {
    data.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        hash.wrapping_mul(FNV_PRIME) ^ u32::from(byte)
    })
}

/// Format a hash as zero-padded lowercase hex, e.g. `0x811c9dc5`.
pub fn format_hash_32(hash: u32) -> String {
    format!("{hash:#010x}")
}
