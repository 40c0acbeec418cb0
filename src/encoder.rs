use std::io::Write;

use flate2::Compression;
use log::{debug, trace};

use crate::{
    compress::{Compressor, ZlibCompressor},
    intermediate::{
        chunk_kind,
        scanline::{pack_scanline, scanline_len},
        Chunk, Header, PngColor, BOUND_LEN, PNG_SIG,
    },
    Color, EncodeError, Result,
};

/// Largest width or height a PNG can declare
const MAX_DIMENSION: usize = 2usize.pow(31) - 1;

/// Turns rows of hex colors into a PNG datastream using the smallest color
/// type and bit depth that keep every color exact.
///
/// E
/// | classify
/// | truncate channels
/// | pack scanlines
/// | compress
/// v chunk
#[derive(Debug, Default, Clone)]
pub struct PngEncoder<C = ZlibCompressor> {
    compressor: C,
}

impl PngEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(level: Compression) -> Self {
        Self::with_compressor(ZlibCompressor::new(level))
    }
}

impl<C> PngEncoder<C> {
    pub const fn with_compressor(compressor: C) -> Self {
        Self { compressor }
    }

    pub fn compressor(&self) -> &C {
        &self.compressor
    }
}

impl<C: Compressor> PngEncoder<C> {
    /// Encodes `image`, a list of rows of `#RGB`, `#RGBA`, `#RRGGBB` or
    /// `#RRGGBBAA` colors. All rows must be the same non-zero length.
    ///
    /// Returns the signature followed by IHDR, IDAT and IEND chunks. Nothing is
    /// returned unless the whole image encodes.
    pub fn encode<R, S>(&self, image: &[R]) -> Result<Vec<u8>>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let (width, height) = dimensions(image)?;
        let rows = parse_rows(image)?;
        let color = PngColor::for_colors(rows.iter().flatten())?;
        debug!(
            "encoding {width}x{height} image as {} bit {:?}",
            color.depth().bits(),
            color.kind()
        );

        let header = Header::new(width as u32, height as u32, color).to_chunk();
        let data = self.image_data(&rows, color)?;
        let end = Chunk::new(chunk_kind::IEND, Box::default());

        let mut png = Vec::with_capacity(PNG_SIG.len() + Header::LEN + data.len() + 3 * BOUND_LEN);
        png.extend_from_slice(&PNG_SIG);
        for chunk in [&header, &data, &end] {
            chunk.extend_bytes(&mut png);
        }
        debug!("encoded png is {} bytes", png.len());

        Ok(png)
    }

    /// Encodes `image` and writes the datastream to `writer`
    pub fn write_to<R, S>(&self, image: &[R], writer: &mut impl Write) -> Result<()>
    where
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let png = self.encode(image)?;
        writer.write_all(&png)?;
        Ok(())
    }

    /// Packs every row into a scanline and compresses them into an IDAT chunk
    fn image_data(&self, rows: &[Vec<Color>], color: PngColor) -> Result<Chunk> {
        let width = rows.first().map_or(0, Vec::len);
        let samples_per_row = width * color.channels() as usize;
        let mut raw = Vec::with_capacity(rows.len() * scanline_len(samples_per_row, color.depth()));
        let mut samples = Vec::with_capacity(samples_per_row);

        for (y, row) in rows.iter().enumerate() {
            samples.clear();
            for &pixel in row {
                samples.extend_from_slice(&color.encode(pixel)?);
            }
            let scanline = pack_scanline(samples.iter().copied(), color.depth());
            trace!("scanline {y}: {} bytes", scanline.len());
            raw.extend_from_slice(&scanline);
        }

        let compressed = self.compressor.compress(&raw)?;
        trace!("compressed {} bytes of scanlines to {}", raw.len(), compressed.len());

        Ok(Chunk::new(chunk_kind::IDAT, compressed.into_boxed_slice()))
    }
}

/// Width and height of a non-empty rectangular image
fn dimensions<R, S>(image: &[R]) -> Result<(usize, usize)>
where
    R: AsRef<[S]>,
{
    let width = image.first().map_or(0, |row| row.as_ref().len());
    if width == 0 {
        return Err(EncodeError::EmptyImage);
    }

    if let Some((row, found)) = image
        .iter()
        .map(|r| r.as_ref().len())
        .enumerate()
        .find(|&(_, len)| len != width)
    {
        return Err(EncodeError::NonRectangularImage {
            row,
            expected: width,
            found,
        });
    }

    let height = image.len();
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(EncodeError::ImageTooLarge { width, height });
    }

    Ok((width, height))
}

fn parse_rows<R, S>(image: &[R]) -> Result<Vec<Vec<Color>>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    image
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|hex| Color::from_hex(hex.as_ref()))
                .collect()
        })
        .collect()
}
