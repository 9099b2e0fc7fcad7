//! Composable byte-oriented lossless compression codecs.
//!
//! This crate implements six classic block-based codecs — run-length
//! encoding, move-to-front, the Burrows-Wheeler transform, Huffman coding,
//! LZW, and LZSS — over a shared framing substrate, plus a [`Pipeline`]
//! type for chaining them together.
//!
//! ```text
//!            +----------+     +----------+     +----------+
//!  input --> |  codec A | --> |  codec B | --> |  codec C | --> output
//!            +----------+     +----------+     +----------+
//!                 ^                                  |
//!                 |            Pipeline::encode       |
//!                 +----------- folds left -------------
//! ```
//!
//! Every codec implements [`Codec`] and operates one fixed-size block at a
//! time; each encoded block is wrapped in a length-prefixed frame by
//! [`framer`], so a [`Pipeline`] can hand one codec's raw output straight
//! to the next without any shared out-of-band state.
//!
//! # Example
//!
//! ```
//! use blockcodecs::{Codec, Pipeline};
//!
//! let pipeline = Pipeline::named("BWT+MTF+RLE+HA", 4096, 4096).unwrap();
//! let data = b"the quick brown fox jumps over the lazy dog";
//! let encoded = pipeline.encode(data).unwrap();
//! assert_eq!(pipeline.decode(&encoded).unwrap(), data);
//! ```

pub mod bitio;
pub mod bwt;
pub mod error;
pub mod framer;
pub mod huffman;
pub mod lzss;
pub mod lzw;
pub mod mtf;
pub mod pipeline;
pub mod rle;
pub mod traits;

pub use bwt::Bwt;
pub use error::{CodecError, Result};
pub use huffman::Huffman;
pub use lzss::Lzss;
pub use lzw::Lzw;
pub use mtf::Mtf;
pub use pipeline::Pipeline;
pub use rle::Rle;
pub use traits::Codec;
