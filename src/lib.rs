use std::{
    fmt::{LowerHex, UpperHex},
    str::FromStr,
};

pub mod compress;
pub mod encoder;
mod error;
pub mod intermediate;

pub use compress::{Compressor, ZlibCompressor};
pub use encoder::PngEncoder;
pub use error::{EncodeError, Result};
pub use intermediate::{BitDepth, ColorKind, PngColor};

/// 16 bit representation of rgba color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(u16, u16, u16, u16);

impl Color {
    pub const fn new(red: u16, green: u16, blue: u16, alpha: u16) -> Self {
        Self(red, green, blue, alpha)
    }

    pub const fn new_opaque(red: u16, green: u16, blue: u16) -> Self {
        Self::new(red, green, blue, u16::MAX)
    }

    /// Parses `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (any case).
    ///
    /// Shorthand digits are doubled (`#abc` is `#aabbcc`) and every byte is
    /// widened to 16 bits by repeating it, so `#80` becomes `0x8080`. A missing
    /// alpha channel is fully opaque.
    pub fn from_hex(text: &str) -> Result<Self> {
        let invalid = || EncodeError::InvalidColorFormat(text.to_owned());

        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.bytes().all(|d| d.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let mut bytes = [u8::MAX; 4];
        match digits.len() {
            3 | 4 => {
                for (byte, d) in bytes.iter_mut().zip(digits.bytes()) {
                    let nibble = hex_value(d);
                    *byte = nibble << 4 | nibble;
                }
            }
            6 | 8 => {
                for (byte, pair) in bytes.iter_mut().zip(digits.as_bytes().chunks_exact(2)) {
                    *byte = hex_value(pair[0]) << 4 | hex_value(pair[1]);
                }
            }
            _ => return Err(invalid()),
        }

        let [red, green, blue, alpha] = bytes.map(widen);
        Ok(Self::new(red, green, blue, alpha))
    }

    /// Red channel
    pub const fn red(self) -> u16 {
        self.0
    }
    /// Green channel
    pub const fn green(self) -> u16 {
        self.1
    }
    /// Blue channel
    pub const fn blue(self) -> u16 {
        self.2
    }
    /// Alpha channel
    pub const fn alpha(self) -> u16 {
        self.3
    }

    /// Red, green and blue are all equal
    pub const fn is_achromatic(self) -> bool {
        self.0 == self.1 && self.1 == self.2
    }
}

impl FromStr for Color {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl UpperHex for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Color(r, g, b, a) = self;
        write!(f, "{r:04X}{g:04X}{b:04X}{a:04X}")
    }
}

impl LowerHex for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Color(r, g, b, a) = self;
        write!(f, "{r:04x}{g:04x}{b:04x}{a:04x}")
    }
}

/// Only called on bytes already checked with `is_ascii_hexdigit`
const fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

const fn widen(byte: u8) -> u16 {
    (byte as u16) << 8 | byte as u16
}

/// Encodes rows of hex colors into a PNG datastream with the default encoder.
///
/// Every row must have the same, non-zero number of colors.
pub fn encode<R, S>(image: &[R]) -> Result<Vec<u8>>
where
    R: AsRef<[S]>,
    S: AsRef<str>,
{
    PngEncoder::new().encode(image)
}
