//! Canonical-by-construction Huffman coding over bytes.
//!
//! The codebook is built with the classic heap merge: start with one leaf
//! per distinct byte, repeatedly pop the two lowest-weight nodes, prefix
//! `'0'` to every code under the first and `'1'` to every code under the
//! second, and push the merged node back in. Ties are broken the same way
//! Python's `heapq` breaks them on `[weight, [symbol, code], ...]` lists:
//! by comparing weights, then comparing the pair lists element-wise. A
//! block with only one distinct byte is special-cased to the 1-bit code
//! `"0"`, since the heap merge alone never runs for it and would otherwise
//! leave an empty, unpackable code.
//!
//! Wire format per block: `padding: u8 ‖ num_symbols: u16 (BE) ‖
//! (symbol: u8, count: u32 (BE))* ‖ packed_bits`, with bits packed
//! MSB-first via [`crate::bitio`].

use std::collections::BinaryHeap;
use std::cmp::Reverse;
use std::collections::HashMap;

use crate::bitio::{MsbBitReader, MsbBitWriter};
use crate::error::{CodecError, Result};
use crate::framer::{self, iter_frames};
use crate::traits::Codec;

/// Huffman codec parameterized by block size.
#[derive(Debug, Clone, Copy)]
pub struct Huffman {
    block_size: usize,
}

impl Huffman {
    /// Create a new Huffman codec with the given block size.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(CodecError::ZeroBlockSize);
        }
        Ok(Self { block_size })
    }

    fn encode_block(block: &[u8]) -> Vec<u8> {
        if block.is_empty() {
            let mut out = Vec::new();
            out.push(0u8);
            out.extend_from_slice(&0u16.to_be_bytes());
            return out;
        }

        let mut freq: HashMap<u8, u32> = HashMap::new();
        for &b in block {
            *freq.entry(b).or_insert(0) += 1;
        }

        let codes = build_codebook(&freq);

        let mut writer = MsbBitWriter::new();
        for &b in block {
            writer.write_code(&codes[&b]);
        }
        let (packed, padding) = writer.finish();

        let mut out = Vec::new();
        out.push(padding);
        out.extend_from_slice(&(freq.len() as u16).to_be_bytes());
        // Sorted for determinism independent of hash map iteration order.
        let mut entries: Vec<(u8, u32)> = freq.into_iter().collect();
        entries.sort_by_key(|&(sym, _)| sym);
        for (sym, count) in entries {
            out.push(sym);
            out.extend_from_slice(&count.to_be_bytes());
        }
        out.extend_from_slice(&packed);
        out
    }

    fn decode_block(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.is_empty() {
            return Err(CodecError::TruncatedHuffmanHeader {
                expected: 3,
                available: 0,
            });
        }
        let padding = payload[0];
        if payload.len() < 3 {
            return Err(CodecError::TruncatedHuffmanHeader {
                expected: 3,
                available: payload.len(),
            });
        }
        let num_syms = u16::from_be_bytes([payload[1], payload[2]]) as usize;

        let header_len = 3 + num_syms * 5;
        if payload.len() < header_len {
            return Err(CodecError::TruncatedHuffmanHeader {
                expected: header_len,
                available: payload.len(),
            });
        }

        let mut freq: HashMap<u8, u32> = HashMap::with_capacity(num_syms);
        let mut pos = 3;
        for _ in 0..num_syms {
            let sym = payload[pos];
            let count = u32::from_be_bytes(payload[pos + 1..pos + 5].try_into().unwrap());
            freq.insert(sym, count);
            pos += 5;
        }

        if num_syms == 0 {
            return Ok(Vec::new());
        }

        let codes = build_codebook(&freq);
        let mut rev_codes: HashMap<String, u8> = HashMap::with_capacity(codes.len());
        for (&sym, code) in &codes {
            rev_codes.insert(code.clone(), sym);
        }

        let total_symbols: u32 = freq.values().sum();
        let packed = &payload[pos..];
        let mut reader = MsbBitReader::new(packed);
        let total_bits = reader.total_bits().saturating_sub(padding as usize);

        let mut out = Vec::with_capacity(total_symbols as usize);
        let mut current = String::new();
        while reader.position() < total_bits {
            let Some(bit) = reader.read_bit() else {
                break;
            };
            current.push(if bit { '1' } else { '0' });
            if let Some(&sym) = rev_codes.get(&current) {
                out.push(sym);
                current.clear();
            }
        }

        if out.len() != total_symbols as usize || !current.is_empty() {
            return Err(CodecError::InvalidHuffmanCode {
                bit_position: reader.position(),
            });
        }

        Ok(out)
    }
}

/// A node in the heap merge: total weight plus every `(symbol, code)` pair
/// accumulated under it so far. `Ord` matches Python's `heapq` comparison
/// of `[weight, [sym, code], ...]` lists: weight first, then the pair list
/// lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct HeapItem {
    weight: u32,
    pairs: Vec<(u8, String)>,
}

fn build_codebook(freq: &HashMap<u8, u32>) -> HashMap<u8, String> {
    if freq.len() == 1 {
        let sym = *freq.keys().next().unwrap();
        let mut codes = HashMap::new();
        codes.insert(sym, "0".to_string());
        return codes;
    }

    let mut heap: BinaryHeap<Reverse<HeapItem>> = freq
        .iter()
        .map(|(&sym, &weight)| {
            Reverse(HeapItem {
                weight,
                pairs: vec![(sym, String::new())],
            })
        })
        .collect();

    while heap.len() > 1 {
        let Reverse(mut lo) = heap.pop().unwrap();
        let Reverse(mut hi) = heap.pop().unwrap();
        for (_, code) in lo.pairs.iter_mut() {
            code.insert(0, '0');
        }
        for (_, code) in hi.pairs.iter_mut() {
            code.insert(0, '1');
        }
        lo.pairs.append(&mut hi.pairs);
        heap.push(Reverse(HeapItem {
            weight: lo.weight + hi.weight,
            pairs: lo.pairs,
        }));
    }

    let Reverse(root) = heap.pop().unwrap();
    root.pairs.into_iter().collect()
}

impl Codec for Huffman {
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
