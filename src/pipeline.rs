//! Composition of multiple codecs into a single encode/decode operation.

use crate::bwt::Bwt;
use crate::error::Result;
use crate::huffman::Huffman;
use crate::lzss::Lzss;
use crate::lzw::Lzw;
use crate::mtf::Mtf;
use crate::rle::Rle;
use crate::traits::Codec;

/// An ordered list of codecs applied in sequence.
///
/// `encode` folds `encode` left over the list (codec 0 runs first on the
/// raw input, its output feeds codec 1, and so on); `decode` folds
/// `decode` right (the last codec's output is undone first).
pub struct Pipeline {
    codecs: Vec<Box<dyn Codec>>,
}

impl Pipeline {
    /// Build a pipeline from an explicit codec list, applied in order.
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Self {
        Self { codecs }
    }

    /// Resolve one of the recognized named pipelines.
    ///
    /// Recognized names: `HA`, `RLE`, `BWT+RLE`, `BWT+MTF+HA`,
    /// `BWT+MTF+RLE+HA`, `LZSS`, `LZSS+HA`, `LZW`, `LZW+HA`, where `HA`
    /// means Huffman. Returns `None` for any other name.
    pub fn named(name: &str, block_size: usize, window_size: usize) -> Option<Self> {
        let bs = block_size;
        let ws = window_size;

        let codecs: Vec<Box<dyn Codec>> = match name {
            "HA" => vec![Box::new(Huffman::new(bs).ok()?)],
            "RLE" => vec![Box::new(Rle::new(bs).ok()?)],
            "BWT+RLE" => vec![Box::new(Bwt::new(bs).ok()?), Box::new(Rle::new(bs).ok()?)],
            "BWT+MTF+HA" => vec![
                Box::new(Bwt::new(bs).ok()?),
                Box::new(Mtf::new(bs).ok()?),
                Box::new(Huffman::new(bs).ok()?),
            ],
            "BWT+MTF+RLE+HA" => vec![
                Box::new(Bwt::new(bs).ok()?),
                Box::new(Mtf::new(bs).ok()?),
                Box::new(Rle::new(bs).ok()?),
                Box::new(Huffman::new(bs).ok()?),
            ],
            "LZSS" => vec![Box::new(Lzss::new(bs, ws).ok()?)],
            "LZSS+HA" => vec![
                Box::new(Lzss::new(bs, ws).ok()?),
                Box::new(Huffman::new(bs).ok()?),
            ],
            "LZW" => vec![Box::new(Lzw::new(bs).ok()?)],
            "LZW+HA" => vec![Box::new(Lzw::new(bs).ok()?), Box::new(Huffman::new(bs).ok()?)],
            _ => return None,
        };

        Some(Self::new(codecs))
    }
}

impl Codec for Pipeline {
    fn encode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut buf = data.to_vec();
        for codec in &self.codecs {
            buf = codec.encode(&buf)?;
        }
        Ok(buf)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut buf = data.to_vec();
        for codec in self.codecs.iter().rev() {
            buf = codec.decode(&buf)?;
        }
        Ok(buf)
    }
}
