//! Error types for block-codec operations.
//!
//! This module provides a single error type covering every failure mode the
//! codecs in this crate can produce: malformed frame headers, per-codec
//! format violations, and invalid construction parameters.

use thiserror::Error;

/// The error type for block-codec operations.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum CodecError {
    /// Reserved for a truncated frame length prefix. The framer itself
    /// treats any `<4`-byte tail as a clean end of stream rather than
    /// raising this, but the variant stays available for callers that
    /// layer stricter framing on top.
    #[error("truncated frame header at offset {offset}: need 4 bytes, found {available}")]
    TruncatedFrameHeader {
        /// Byte offset where the truncated header starts.
        offset: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// A frame's declared length runs past the end of the input.
    #[error("frame at offset {offset} declares length {declared} but only {available} bytes remain")]
    FrameLengthOverrun {
        /// Byte offset of the frame header.
        offset: usize,
        /// Length the frame header declared.
        declared: usize,
        /// Bytes actually available after the header.
        available: usize,
    },

    /// RLE payload had an odd number of bytes (pairs cannot be formed).
    #[error("RLE block has an odd trailing byte (length {len})")]
    OddRleTail {
        /// Length of the offending block payload.
        len: usize,
    },

    /// A BWT block payload was shorter than the 8-byte header it must carry.
    #[error("BWT block too short: {len} bytes, need at least 8")]
    BwtBlockTooShort {
        /// Length of the offending block payload.
        len: usize,
    },

    /// A BWT block's declared length did not match its last-column length.
    #[error("BWT block length mismatch: header says {declared}, last column has {actual}")]
    BwtLengthMismatch {
        /// Length declared in the block header.
        declared: usize,
        /// Length of the last column actually present.
        actual: usize,
    },

    /// A Huffman block's header was truncated before the frequency table ended.
    #[error("truncated Huffman header: expected {expected} bytes, found {available}")]
    TruncatedHuffmanHeader {
        /// Bytes the header claims to need.
        expected: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// The Huffman bit stream contained a code that matches no symbol.
    #[error("invalid Huffman code at bit position {bit_position}")]
    InvalidHuffmanCode {
        /// Bit position at which decoding got stuck.
        bit_position: usize,
    },

    /// An LZW code referenced neither an existing dictionary entry nor the
    /// one about to be created (the classic `cur == next_code + 1` case).
    #[error("invalid LZW code {code} (next_code was {next_code})")]
    InvalidLzwCode {
        /// The offending code.
        code: u16,
        /// The dictionary's `next_code` at the time.
        next_code: u16,
    },

    /// An LZSS back-reference pointed before the start of the output.
    #[error("LZSS reference out of bounds: offset {offset} at output length {output_len}")]
    LzssReferenceOutOfBounds {
        /// Back-reference offset that was out of range.
        offset: usize,
        /// Length of the output produced so far.
        output_len: usize,
    },

    /// A codec was constructed with a block size of zero.
    #[error("block size must be at least 1")]
    ZeroBlockSize,

    /// An LZSS codec was constructed with a window size exceeding the
    /// 15-bit offset field (32,767).
    #[error("window size {0} exceeds the maximum representable offset 32767")]
    WindowTooLarge(usize),

    /// An LZW block would need more than 65,536 dictionary entries.
    #[error("LZW block overflowed the 16-bit code space (next_code would exceed 65536)")]
    LzwDictionaryOverflow,

    /// The named pipeline string did not match a recognized pipeline.
    #[error("unrecognized pipeline name: {0}")]
    UnknownPipeline(String),
}

/// Result type alias for block-codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
