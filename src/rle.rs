//! Run-length encoding over bytes.
//!
//! Each block is encoded as a sequence of `(count, value)` pairs with
//! `count` capped at 255; a run longer than 255 bytes is split across
//! multiple pairs carrying the same `value`.
//!
//! # Example
//!
//! ```
//! use blockcodecs::rle::Rle;
//! use blockcodecs::Codec;
//!
//! let rle = Rle::new(4096).unwrap();
//! let data = [0u8; 300];
//! let encoded = rle.encode(&data).unwrap();
//! assert_eq!(rle.decode(&encoded).unwrap(), data);
//! ```

use crate::error::{CodecError, Result};
use crate::framer::{self, iter_frames};
use crate::traits::Codec;

/// Run-length codec parameterized by block size.
#[derive(Debug, Clone, Copy)]
pub struct Rle {
    block_size: usize,
}

impl Rle {
    /// Create a new RLE codec with the given block size.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(CodecError::ZeroBlockSize);
        }
        Ok(Self { block_size })
    }

    fn encode_block(block: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut iter = block.iter();
        let Some(&first) = iter.next() else {
            return out;
        };

        let mut value = first;
        let mut count: u16 = 1;
        for &byte in iter {
            if byte == value && count < 255 {
                count += 1;
            } else {
                out.push(count as u8);
                out.push(value);
                value = byte;
                count = 1;
            }
        }
        out.push(count as u8);
        out.push(value);
        out
    }

    fn decode_block(block: &[u8]) -> Result<Vec<u8>> {
        if block.len() % 2 != 0 {
            return Err(CodecError::OddRleTail { len: block.len() });
        }
        let mut out = Vec::with_capacity(block.len());
        for pair in block.chunks_exact(2) {
            let count = pair[0];
            let value = pair[1];
            out.resize(out.len() + count as usize, value);
        }
        Ok(out)
    }
}

impl Codec for Rle {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for block in framer::split(data, self.block_size) {
            if block.is_empty() {
                continue;
            }
            out.extend(framer::wrap(&Self::encode_block(block)));
        }
        Ok(out)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for payload in iter_frames(data) {
            out.extend(Self::decode_block(payload?)?);
        }
        Ok(out)
    }
}
