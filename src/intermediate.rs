pub mod bit_depth;
pub mod chunk;
pub mod chunk_kind;
pub mod color_kind;
pub mod filter;
pub mod header;
pub mod scanline;

pub use bit_depth::*;
pub use chunk::*;
pub use chunk_kind::*;
pub use color_kind::*;
pub use header::*;

pub const PNG_SIG: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];
