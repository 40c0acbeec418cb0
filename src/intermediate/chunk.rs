use std::io::{self, Write};

use super::ChunkKind;

/// Bytes for CRC + length + kind
pub const BOUND_LEN: usize = 12;
const CRC_TABLE: [u32; 256] = make_crc_table();

#[derive(Clone, PartialEq, Eq)]
pub struct Chunk {
    kind: ChunkKind,
    data: Box<[u8]>,
}

impl Chunk {
    pub const fn new(kind: ChunkKind, data: Box<[u8]>) -> Self {
        Chunk { kind, data }
    }

    /// Raw data of the chunk
    pub fn data(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Length of the chunk data in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Chunk type
    pub fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// Cyclic Redundancy Code for the chunk
    pub fn crc(&self) -> u32 {
        // based off of https://www.w3.org/TR/png-3/#D-CRCAppendix
        let mut crc = u32::MAX;
        for &b in self.kind.as_bytes().iter().chain(self.data()) {
            let lookup_ind = (crc ^ b as u32) as usize & 0xff;
            crc = CRC_TABLE[lookup_ind] ^ (crc >> 8);
        }

        crc ^ u32::MAX
    }

    /// Writes length, kind, data and crc, all big endian.
    pub fn write(&self, writer: &mut impl Write) -> io::Result<()> {
        writer.write_all(&(self.len() as u32).to_be_bytes())?;
        writer.write_all(self.kind.as_bytes())?;
        writer.write_all(self.data())?;
        writer.write_all(&self.crc().to_be_bytes())
    }

    /// Serialized form of the chunk, [`BOUND_LEN`] bytes longer than its data
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.len() + BOUND_LEN);
        self.extend_bytes(&mut out);
        out
    }

    pub(crate) fn extend_bytes(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&(self.len() as u32).to_be_bytes());
        out.extend_from_slice(self.kind.as_bytes());
        out.extend_from_slice(self.data());
        out.extend_from_slice(&self.crc().to_be_bytes());
    }
}

const fn make_crc_table() -> [u32; 256] {
    // based off of https://www.w3.org/TR/png-3/#D-CRCAppendix
    let mut table = [0; 256];
    let mut n = 0;
    while n < 256 {
        let mut c = n as u32;
        let mut k = 0;
        while k < 8 {
            if c & 1 == 1 {
                c = 0xedb88320u32 ^ (c >> 1);
            } else {
                c >>= 1;
            }
            k += 1;
        }
        table[n] = c;
        n += 1
    }
    table
}

impl std::fmt::Debug for Chunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunk {{\n    kind: {:?}\n    len: {}\n}}",
            self.kind,
            self.data.len()
        )
    }
}
