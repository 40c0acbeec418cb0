use std::io;

pub type Result<T, E = EncodeError> = std::result::Result<T, E>;

/// Everything that can stop a single image from being encoded.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("invalid color format {0:?}: use #RGB, #RGBA, #RRGGBB or #RRGGBBAA")]
    InvalidColorFormat(String),

    #[error("image is empty")]
    EmptyImage,

    #[error("image is not rectangular: row {row} has {found} colors, expected {expected}")]
    NonRectangularImage {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("{0} is not a valid color type")]
    InvalidColorTypeCombination(u8),

    #[error("color type 3 (indexed) is not supported")]
    UnsupportedColorType,

    #[error("image of {width}x{height} is too large for png")]
    ImageTooLarge { width: usize, height: usize },

    /// Raised by the compressor or the output writer
    #[error(transparent)]
    Io(#[from] io::Error),
}
