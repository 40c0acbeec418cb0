use super::{chunk_kind, filter::Filter, Chunk, PngColor};

/// Contents of the IHDR chunk. Compression method is always 0 (zlib) and
/// images are never interlaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: u32,
    pub height: u32,
    pub color: PngColor,
    pub filter: Filter,
}

impl Header {
    pub const LEN: usize = 13;

    const COMPRESSION_METHOD: u8 = 0;
    const INTERLACE_METHOD: u8 = 0;

    pub fn new(width: u32, height: u32, color: PngColor) -> Self {
        Self {
            width,
            height,
            color,
            filter: Filter::default(),
        }
    }

    pub fn to_bytes(&self) -> [u8; Self::LEN] {
        let mut data = [0u8; Self::LEN];
        data[..4].copy_from_slice(&self.width.to_be_bytes());
        data[4..8].copy_from_slice(&self.height.to_be_bytes());
        data[8] = self.color.depth().bits();
        data[9] = self.color.kind().code();
        data[10] = Self::COMPRESSION_METHOD;
        data[11] = self.filter.into();
        data[12] = Self::INTERLACE_METHOD;
        data
    }

    pub fn to_chunk(&self) -> Chunk {
        Chunk::new(chunk_kind::IHDR, Box::new(self.to_bytes()))
    }
}
