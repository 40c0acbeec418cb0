use std::ops::Deref;

use super::BitDepth;
use crate::{Color, EncodeError, Result};

/// Color type and bit depth pair, as written to the IHDR chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngColor {
    kind: ColorKind,
    depth: BitDepth,
}

impl PngColor {
    /// One bit greyscale, the cheapest encoding there is
    pub const MINIMAL: Self = Self {
        kind: ColorKind::Grey(false),
        depth: BitDepth::One,
    };

    pub fn new(kind: ColorKind, depth: BitDepth) -> Result<Self, &'static str> {
        if kind.allowed_bit_depth() & depth.bits() == 0 {
            return Err("Invalid color type/bit depth combination");
        }

        Ok(Self { kind, depth })
    }

    /// Cheapest encoding that holds this single color without loss.
    ///
    /// Fully transparent colors always come out as 8 bit grey with alpha; their
    /// red, green and blue are never visible so they are not kept.
    pub fn classify(color: Color) -> Self {
        let Color(red, green, blue, alpha) = color;
        let grey = color.is_achromatic();

        match alpha {
            0 => Self {
                kind: ColorKind::Grey(true),
                depth: BitDepth::Eight,
            },
            u16::MAX if grey => Self {
                kind: ColorKind::Grey(false),
                depth: grey_depth(red),
            },
            u16::MAX => Self {
                kind: ColorKind::True(false),
                depth: wide_depth(&[red, green, blue]),
            },
            _ => Self {
                kind: if grey {
                    ColorKind::Grey(true)
                } else {
                    ColorKind::True(true)
                },
                depth: wide_depth(&[red, green, blue, alpha]),
            },
        }
    }

    /// Folds the per-color encodings of every color into one that fits them
    /// all: the deepest bit depth and the union of the color types.
    pub fn for_colors<'a>(colors: impl IntoIterator<Item = &'a Color>) -> Result<Self> {
        colors
            .into_iter()
            .try_fold(Self::MINIMAL, |acc, &color| acc.union(Self::classify(color)))
    }

    fn union(self, other: Self) -> Result<Self> {
        Ok(Self {
            kind: self.kind.combine(other.kind)?,
            depth: self.depth.max(other.depth),
        })
    }

    pub const fn kind(&self) -> ColorKind {
        self.kind
    }

    pub const fn depth(&self) -> BitDepth {
        self.depth
    }

    pub const fn channels(&self) -> u8 {
        self.kind.channels()
    }

    pub const fn channel_mask(&self) -> u16 {
        self.depth.mask()
    }

    /// Truncates the channels of `color` to this bit depth, keeping only the
    /// channels this color type stores.
    ///
    /// Does not check that the dropped bits were redundant; `color` should
    /// have been part of what this encoding was classified from.
    pub fn encode(&self, color: Color) -> Result<Channels> {
        let mask = self.channel_mask();
        let Color(r, g, b, a) = color;
        let (r, g, b, a) = (r & mask, g & mask, b & mask, a & mask);
        let channels = match self.kind {
            ColorKind::Grey(false) => Channels::new(&[r]),
            ColorKind::True(false) => Channels::new(&[r, g, b]),
            ColorKind::Grey(true) => Channels::new(&[r, a]),
            ColorKind::True(true) => Channels::new(&[r, g, b, a]),
            ColorKind::Indexed => return Err(EncodeError::UnsupportedColorType),
        };
        Ok(channels)
    }
}

/// Anything that isn't opaque grey takes 8 or 16 bits
fn wide_depth(channels: &[u16]) -> BitDepth {
    if BitDepth::Eight.is_redundant(channels) {
        BitDepth::Eight
    } else {
        BitDepth::Sixteen
    }
}

/// Opaque grey: the narrowest unit the channel repeats at
fn grey_depth(value: u16) -> BitDepth {
    let redundant = |depth: BitDepth| depth.is_redundant(&[value]);
    if !redundant(BitDepth::Eight) {
        BitDepth::Sixteen
    } else if !redundant(BitDepth::Four) {
        BitDepth::Eight
    } else if !redundant(BitDepth::Two) {
        BitDepth::Four
    } else if redundant(BitDepth::One) {
        BitDepth::One
    } else {
        BitDepth::Two
    }
}

/// Samples of one encoded pixel, at most four
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channels {
    values: [u16; 4],
    len: usize,
}

impl Channels {
    fn new(values: &[u16]) -> Self {
        let mut channels = Self {
            values: [0; 4],
            len: values.len(),
        };
        channels.values[..values.len()].copy_from_slice(values);
        channels
    }
}

impl Deref for Channels {
    type Target = [u16];

    fn deref(&self) -> &[u16] {
        &self.values[..self.len]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    /// Greyscale (with alpha)
    Grey(bool),
    /// Truecolor (with alpha)
    True(bool),
    /// Indexed-color
    Indexed,
}

impl ColorKind {
    /// Returns all allowed bit depths for the given color type. The allowed bit
    /// depths are all powers of two, so all can stored in a single u8.
    pub const fn allowed_bit_depth(self) -> u8 {
        use ColorKind::*;
        match self {
            Grey(false) => 0b11111,
            True(_) | Grey(true) => 0b11000,
            Indexed => 0b1111,
        }
    }

    pub const fn channels(self) -> u8 {
        match self {
            Self::Grey(false) => 1,
            Self::Grey(true) => 2,
            Self::True(false) => 3,
            Self::True(true) => 4,
            Self::Indexed => 1,
        }
    }

    /// Color type byte of the IHDR chunk
    pub const fn code(self) -> u8 {
        match self {
            Self::Grey(false) => 0,
            Self::True(false) => 2,
            Self::Indexed => 3,
            Self::Grey(true) => 4,
            Self::True(true) => 6,
        }
    }

    /// Color type able to hold pixels of both kinds. The codes are bit flags
    /// (2 for color, 4 for alpha) so this is their union, as long as the
    /// union is still a color type.
    pub fn combine(self, other: Self) -> Result<Self> {
        let code = self.code() | other.code();
        Self::try_from(code).map_err(|_| EncodeError::InvalidColorTypeCombination(code))
    }
}

impl TryFrom<u8> for ColorKind {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Grey(false)),
            2 => Ok(Self::True(false)),
            3 => Ok(Self::Indexed),
            4 => Ok(Self::Grey(true)),
            6 => Ok(Self::True(true)),
            _ => Err("Unknown color kind"),
        }
    }
}
