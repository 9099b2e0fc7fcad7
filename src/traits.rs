//! The shared codec capability used by every concrete codec and by
//! [`crate::pipeline::Pipeline`].

use crate::error::Result;

/// A byte-oriented codec: `decode(encode(x)) == x` for every `x`.
///
/// Implementors are plain, cheaply-constructed configuration structs (a
/// block size, and for LZSS a window size). They hold no state that
/// survives a single `encode`/`decode` call, so a single instance can be
/// reused across calls, including from independent concurrent callers.
pub trait Codec {
    /// Encode `data`, producing a self-framed byte stream.
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Decode a byte stream previously produced by [`Codec::encode`].
    fn decode(&self, data: &[u8]) -> Result<Vec<u8>>;
}
