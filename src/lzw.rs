//! LZW compression over bytes, with 16-bit codes and a fresh dictionary
//! for every block.
//!
//! The dictionary starts as the 256 single-byte strings and grows by one
//! entry per emitted code, exactly as in the classic algorithm. Because
//! codes are packed as 16-bit big-endian words, a block whose dictionary
//! would need to exceed 65,536 entries cannot be encoded; callers must
//! pick a smaller block size.

use std::collections::HashMap;

use crate::error::{CodecError, Result};
use crate::framer::{self, iter_frames};
use crate::traits::Codec;

const INITIAL_DICT_SIZE: u32 = 256;
const MAX_DICT_SIZE: u32 = 1 << 16;

/// LZW codec parameterized by block size.
#[derive(Debug, Clone, Copy)]
pub struct Lzw {
    block_size: usize,
}

impl Lzw {
    /// Create a new LZW codec with the given block size.
    pub fn new(block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(CodecError::ZeroBlockSize);
        }
        Ok(Self { block_size })
    }

    fn encode_block(block: &[u8]) -> Result<Vec<u8>> {
        let mut dictionary: HashMap<Vec<u8>, u32> =
            (0u32..INITIAL_DICT_SIZE).map(|i| (vec![i as u8], i)).collect();
        let mut dict_size = INITIAL_DICT_SIZE;

        let mut out = Vec::new();
        let mut w: Vec<u8> = Vec::new();

        for &c in block {
            let mut wc = w.clone();
            wc.push(c);
            if dictionary.contains_key(&wc) {
                w = wc;
            } else {
                out.extend_from_slice(&(dictionary[&w] as u16).to_be_bytes());
                if dict_size >= MAX_DICT_SIZE {
                    return Err(CodecError::LzwDictionaryOverflow);
                }
                dictionary.insert(wc, dict_size);
                dict_size += 1;
                w = vec![c];
            }
        }
        if !w.is_empty() {
            out.extend_from_slice(&(dictionary[&w] as u16).to_be_bytes());
        }
        Ok(out)
    }

    fn decode_block(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() < 2 {
            return Ok(Vec::new());
        }

        let mut rev_dict: HashMap<u32, Vec<u8>> =
            (0u32..INITIAL_DICT_SIZE).map(|i| (i, vec![i as u8])).collect();
        let mut dict_size = INITIAL_DICT_SIZE;

        let mut idx = 0;
        let first_code = u16::from_be_bytes([payload[0], payload[1]]) as u32;
        idx += 2;
        let Some(mut prev) = rev_dict.get(&first_code).cloned() else {
            return Ok(Vec::new());
        };

        let mut out = prev.clone();

        while idx + 2 <= payload.len() {
            let code = u16::from_be_bytes([payload[idx], payload[idx + 1]]) as u32;
            idx += 2;

            let entry = if let Some(entry) = rev_dict.get(&code) {
                entry.clone()
            } else if code == dict_size {
                let mut entry = prev.clone();
                entry.push(prev[0]);
                entry
            } else {
                return Err(CodecError::InvalidLzwCode {
                    code: code as u16,
                    next_code: dict_size as u16,
                });
            };

            out.extend_from_slice(&entry);

            let mut new_entry = prev.clone();
            new_entry.push(entry[0]);
            rev_dict.insert(dict_size, new_entry);
            dict_size += 1;

            prev = entry;
        }

        Ok(out)
    }
}

impl Codec for Lzw {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        for block in framer::split(data, self.block_size) {
            out.extend(framer::wrap(&Self::encode_block(block)?));
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

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(data: &[u8], block_size: usize) {
        let codec = Lzw::new(block_size).unwrap();
        let encoded = codec.encode(data).unwrap();
        let decoded = codec.decode(&encoded).unwrap();
        assert_eq!(decoded, data);
    }

    #[test]
    fn empty_input() {
        roundtrip(b"", 4096);
    }

    #[test]
    fn single_byte() {
        roundtrip(b"x", 4096);
    }

    #[test]
    fn repetitive_input() {
        roundtrip(&[b'a'; 200], 4096);
    }

    #[test]
    fn classic_kwkwk_case() {
        // The "cScSc" style repeated-prefix pattern that exercises the
        // code == dict_size branch in decode.
        roundtrip(b"TOBEORNOTTOBEORTOBEORNOT", 4096);
    }

    #[test]
    fn block_boundaries_reset_dictionary() {
        let data = b"abababababababab";
        roundtrip(data, 4);
    }

    #[test]
    fn all_byte_values() {
        let data: Vec<u8> = (0..=255u8).collect();
        roundtrip(&data, 4096);
    }

    #[test]
    fn determinism() {
        let data = b"banana banana banana";
        let codec = Lzw::new(4096).unwrap();
        assert_eq!(codec.encode(data).unwrap(), codec.encode(data).unwrap());
    }

    #[test]
    fn invalid_code_is_an_error() {
        // First code 0x00FF is valid (byte 255), second code way out of
        // range is neither in dict nor equal to dict_size.
        let mut payload = Vec::new();
        payload.extend_from_slice(&0x00FFu16.to_be_bytes());
        payload.extend_from_slice(&0xFFFFu16.to_be_bytes());
        let err = Lzw::decode_block(&payload).unwrap_err();
        assert!(matches!(err, CodecError::InvalidLzwCode { .. }));
    }
}
