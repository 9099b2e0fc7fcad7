//! Burrows-Wheeler transform over bytes.
//!
//! Each block is rotated into every possible cyclic shift, the shifts are
//! sorted lexicographically, and the last column of the sorted rotation
//! matrix becomes the block's output, alongside the index of the original
//! block within the sorted order. Ties between equal rotations are broken by
//! original position, which falls out of Rust's stable sort for free and is
//! required for the inverse transform to be well defined.
//!
//! Wire format per block: `BE_u32(orig_index) ‖ BE_u32(block_len) ‖
//! last_column`.

use crate::error::{CodecError, Result};
use crate::framer::{self, iter_frames};
use crate::traits::Codec;

const HEADER_LEN: usize = 8;

/// Burrows-Wheeler transform codec parameterized by block size.
#[derive(Debug, Clone, Copy)]
pub struct Bwt {
    block_size: usize,
}

impl Bwt {
    /// Create a new BWT codec with the given block size.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(CodecError::ZeroBlockSize);
        }
        Ok(Self { block_size })
    }

    fn encode_block(block: &[u8]) -> Vec<u8> {
        let n = block.len();
        if n == 0 {
            let mut out = Vec::with_capacity(HEADER_LEN);
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(&0u32.to_be_bytes());
            return out;
        }

        let mut rotation_starts: Vec<usize> = (0..n).collect();
        rotation_starts.sort_by(|&a, &b| {
            rotation_of(block, a).cmp(rotation_of(block, b))
        });

        // rotation_starts is a permutation of 0..n, so inverting it into a
        // lookup table is total: every original position, including 0,
        // has a sorted position recorded here.
        let mut sorted_position_of = vec![0usize; n];
        for (sorted_pos, &start) in rotation_starts.iter().enumerate() {
            sorted_position_of[start] = sorted_pos;
        }
        let orig_index = sorted_position_of[0];

        let last_column: Vec<u8> = rotation_starts
            .iter()
            .map(|&start| block[(start + n - 1) % n])
            .collect();

        let mut out = Vec::with_capacity(HEADER_LEN + n);
        out.extend_from_slice(&(orig_index as u32).to_be_bytes());
        out.extend_from_slice(&(n as u32).to_be_bytes());
        out.extend_from_slice(&last_column);
        out
    }

    fn decode_block(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() < HEADER_LEN {
            return Err(CodecError::BwtBlockTooShort { len: payload.len() });
        }
        let orig_index = u32::from_be_bytes(payload[0..4].try_into().unwrap()) as usize;
        let declared_len = u32::from_be_bytes(payload[4..8].try_into().unwrap()) as usize;
        let last_column = &payload[HEADER_LEN..];

        if last_column.len() != declared_len {
            return Err(CodecError::BwtLengthMismatch {
                declared: declared_len,
                actual: last_column.len(),
            });
        }
        if declared_len == 0 {
            return Ok(Vec::new());
        }

        // Standard LF mapping: pair each last-column byte with its stable
        // rank among equal bytes, then locate that occurrence within the
        // (implicit, sorted) first column. Walking `idx = lf[idx]` from
        // `orig_index` and emitting `last_column[idx]` at each step,
        // filled back-to-front, reconstructs the original block.
        let n = declared_len;
        let mut counts = [0usize; 256];
        let mut rank = vec![0usize; n];
        for (i, &b) in last_column.iter().enumerate() {
            rank[i] = counts[b as usize];
            counts[b as usize] += 1;
        }

        let mut base = [0usize; 256];
        let mut total = 0usize;
        for (byte, count) in counts.iter().enumerate() {
            base[byte] = total;
            total += count;
        }

        let mut lf = vec![0usize; n];
        for i in 0..n {
            let byte = last_column[i] as usize;
            lf[i] = base[byte] + rank[i];
        }

        let mut out = vec![0u8; n];
        let mut idx = orig_index;
        for slot in out.iter_mut().rev() {
            *slot = last_column[idx];
            idx = lf[idx];
        }
        Ok(out)
    }
}

fn rotation_of(block: &[u8], start: usize) -> RotationView<'_> {
    RotationView { block, start }
}

struct RotationView<'a> {
    block: &'a [u8],
    start: usize,
}

impl<'a> RotationView<'a> {
    fn byte_at(&self, i: usize) -> u8 {
        self.block[(self.start + i) % self.block.len()]
    }
}

impl<'a> PartialEq for RotationView<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}
impl<'a> Eq for RotationView<'a> {}

impl<'a> PartialOrd for RotationView<'a> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<'a> Ord for RotationView<'a> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        let n = self.block.len();
        for i in 0..n {
            let ordering = self.byte_at(i).cmp(&other.byte_at(i));
            if ordering != std::cmp::Ordering::Equal {
                return ordering;
            }
        }
        std::cmp::Ordering::Equal
    }
}

impl Codec for Bwt {
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
            out.extend(Self::decode_block(payload?)?);
        }
        Ok(out)
    }
}
