//! Compression of the IDAT stream.
//!
//! PNG compression method 0 is a zlib stream. [`ZlibCompressor`] produces one
//! with `flate2`; anything else implementing [`Compressor`] can be plugged into
//! [`PngEncoder`](crate::PngEncoder) instead.

use std::io::{self, Write};

use flate2::{write::ZlibEncoder, Compression};

pub trait Compressor {
    /// Compresses the concatenated scanlines of an image
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>>;
}

impl<F> Compressor for F
where
    F: Fn(&[u8]) -> io::Result<Vec<u8>>,
{
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        self(data)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ZlibCompressor {
    level: Compression,
}

impl ZlibCompressor {
    pub const fn new(level: Compression) -> Self {
        Self { level }
    }

    pub fn level(&self) -> Compression {
        self.level
    }
}

impl Compressor for ZlibCompressor {
    fn compress(&self, data: &[u8]) -> io::Result<Vec<u8>> {
        let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), self.level);
        encoder.write_all(data)?;
        encoder.finish()
    }
}
