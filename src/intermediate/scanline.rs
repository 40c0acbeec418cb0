use super::{filter::FilterKind, BitDepth};

/// Collects samples most significant bit first, flushing whole bytes
struct BitPacker {
    out: Vec<u8>,
    acc: u32,
    bits: u8,
}

impl BitPacker {
    fn new(out: Vec<u8>) -> Self {
        Self { out, acc: 0, bits: 0 }
    }

    fn push(&mut self, value: u16, depth: BitDepth) {
        self.acc = (self.acc << depth.bits()) | u32::from(value & depth.mask());
        self.bits += depth.bits();
        while self.bits >= 8 {
            self.bits -= 8;
            self.out.push((self.acc >> self.bits) as u8);
            self.acc &= (1u32 << self.bits) - 1;
        }
    }

    /// Pads the last partial byte with zero bits
    fn finish(mut self) -> Vec<u8> {
        if self.bits > 0 {
            self.out.push((self.acc << (8 - self.bits)) as u8);
        }
        self.out
    }
}

/// Packs one row of samples into a scanline: a filter type byte followed by
/// the samples at `depth` bits each, padded to a whole byte.
pub fn pack_scanline(samples: impl IntoIterator<Item = u16>, depth: BitDepth) -> Vec<u8> {
    let mut packer = BitPacker::new(vec![u8::from(FilterKind::None)]);
    for sample in samples {
        packer.push(sample, depth);
    }
    packer.finish()
}

/// Length in bytes of a packed scanline, filter byte included
pub const fn scanline_len(samples: usize, depth: BitDepth) -> usize {
    (samples * depth.bits() as usize).div_ceil(8) + 1
}
