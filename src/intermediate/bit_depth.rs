/// Number of bits per sample. Ordered, so the larger of two depths is the one
/// that can hold both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitDepth {
    One,
    Two,
    Four,
    Eight,
    Sixteen,
}

impl BitDepth {
    pub const fn bits(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Four => 4,
            Self::Eight => 8,
            Self::Sixteen => 16,
        }
    }

    /// Mask keeping the low `bits()` bits of a sample
    pub const fn mask(self) -> u16 {
        match self {
            Self::Sixteen => u16::MAX,
            d => (1 << d.bits()) - 1,
        }
    }

    /// A 16 bit channel is redundant at this depth when its bit pattern is a
    /// `bits()` wide unit repeated, the same way an 8 bit hex byte is widened
    /// to 16 bits. Such a channel survives truncation to this depth.
    pub fn is_redundant(self, channels: &[u16]) -> bool {
        let bits = u32::from(self.bits());
        let mask = (1u32 << bits) - 1;
        channels.iter().all(|&c| {
            let c = u32::from(c);
            (c >> bits) & mask == c & mask
        })
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = &'static str;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            4 => Ok(Self::Four),
            8 => Ok(Self::Eight),
            16 => Ok(Self::Sixteen),
            _ => Err("Invalid bit depth"),
        }
    }
}
