//! Move-to-front transform over bytes.
//!
//! Each block is encoded against a 256-entry symbol table initialized to
//! `[0, 1, ..., 255]`. Every input byte is replaced by its current index in
//! the table, after which that symbol is moved to the front. Decoding
//! mirrors the same table walk in reverse.

use crate::error::Result;
use crate::framer::{self, iter_frames};
use crate::traits::Codec;

/// Move-to-front codec parameterized by block size.
#[derive(Debug, Clone, Copy)]
pub struct Mtf {
    block_size: usize,
}

impl Mtf {
    /// Create a new MTF codec with the given block size.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(crate::error::CodecError::ZeroBlockSize);
        }
        Ok(Self { block_size })
    }

    fn identity_table() -> [u8; 256] {
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        table
    }

    fn encode_block(block: &[u8]) -> Vec<u8> {
        let mut table = Self::identity_table();
        // index_of[v] tracks v's current position in `table`, so a byte's
        // position is a direct lookup instead of a linear search.
        let mut index_of = Self::identity_table();
        let mut out = Vec::with_capacity(block.len());
        for &byte in block {
            let pos = index_of[byte as usize] as usize;
            out.push(pos as u8);
            table[..=pos].rotate_right(1);
            for (i, &value) in table[..=pos].iter().enumerate() {
                index_of[value as usize] = i as u8;
            }
        }
        out
    }

    fn decode_block(block: &[u8]) -> Vec<u8> {
        let mut table = Self::identity_table();
        let mut out = Vec::with_capacity(block.len());
        for &index in block {
            let pos = index as usize;
            let byte = table[pos];
            out.push(byte);
            table[..=pos].rotate_right(1);
        }
        out
    }
}

impl Codec for Mtf {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for block in framer::split(data, self.block_size) {
            out.extend(framer::wrap(&Self::encode_block(block)));
        }
        Ok(out)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for payload in iter_frames(data) {
            out.extend(Self::decode_block(payload?));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: &[u8], block_size: usize) {
        let codec = Mtf::new(block_size).unwrap();
        let encoded = codec.encode(data).unwrap();
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn empty_input() {
        roundtrip(b"", 4096);
    }

    #[test]
    fn repeated_byte_collapses_to_zeros() {
        let codec = Mtf::new(4096).unwrap();
        let encoded = codec.encode(&[0x00, 0x00, 0x00]).unwrap();
        assert_eq!(&encoded[4..], &[0x00, 0x00, 0x00]);
        roundtrip(&[0x00, 0x00, 0x00], 4096);
    }

    #[test]
    fn ascending_bytes_are_identity() {
        let codec = Mtf::new(4096).unwrap();
        let encoded = codec.encode(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(&encoded[4..], &[0x01, 0x02, 0x03]);
        roundtrip(&[0x01, 0x02, 0x03], 4096);
    }

    #[test]
    fn recency_pattern() {
        // b, a, b -> table starts [a,b,c...]; 'b' is index 1, then table
        // becomes [b,a,c...]; 'a' is now index 1; 'b' is index 0 again.
        let data = [b'b', b'a', b'b'];
        let codec = Mtf::new(4096).unwrap();
        let encoded = codec.encode(&data).unwrap();
        assert_eq!(&encoded[4..], &[1, 1, 0]);
        roundtrip(&data, 4096);
    }

    #[test]
    fn block_boundaries_reset_table() {
        let data = [b'b', b'b', b'a', b'a'];
        roundtrip(&data, 2);
    }

    #[test]
    fn all_byte_values_roundtrip() {
        let data: Vec<u8> = (0..=255u8).collect();
        roundtrip(&data, 64);
    }
}
