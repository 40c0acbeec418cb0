pub const IHDR: ChunkKind = ChunkKind(*b"IHDR");
pub const IDAT: ChunkKind = ChunkKind(*b"IDAT");
pub const IEND: ChunkKind = ChunkKind(*b"IEND");

/// Four letter chunk type. The encoder only writes the three critical chunks
/// above.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ChunkKind([u8; 4]);

impl ChunkKind {
    /// Returns a reference to the raw chunk type
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }
}

impl std::fmt::Debug for ChunkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            std::str::from_utf8(&self.0).expect("Always valid ascii characters")
        )
    }
}

impl TryFrom<&[u8; 4]> for ChunkKind {
    type Error = &'static str;

    fn try_from(value: &[u8; 4]) -> Result<Self, Self::Error> {
        if value.iter().all(u8::is_ascii_alphabetic) {
            Ok(Self(*value))
        } else {
            Err("Invalid chunk type")
        }
    }
}
