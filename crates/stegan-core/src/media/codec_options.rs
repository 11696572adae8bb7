use crate::error::SteganoError;
use crate::result::Result;

/// Codec configuration for steganography encoding/decoding
///
/// Hiding always happens in the least significant bits of the pixel channels,
/// the output is a lossless PNG (or BMP).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOptions {
    Lsb(LsbCodecOptions),
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self::Lsb(LsbCodecOptions::default())
    }
}

impl CodecOptions {
    pub fn bit_depth(&self) -> BitDepth {
        match self {
            CodecOptions::Lsb(options) => options.bit_depth,
        }
    }
}

impl From<LsbCodecOptions> for CodecOptions {
    fn from(options: LsbCodecOptions) -> Self {
        Self::Lsb(options)
    }
}

impl From<BitDepth> for CodecOptions {
    fn from(bit_depth: BitDepth) -> Self {
        Self::Lsb(LsbCodecOptions { bit_depth })
    }
}

/// Options for LSB (Least Significant Bit) image encoding
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LsbCodecOptions {
    /// Number of low bits of every color channel that carry payload.
    ///
    /// Note this number influences the capacity directly, and the image
    /// distortion as well.
    pub bit_depth: BitDepth,
}

impl LsbCodecOptions {
    pub fn with_bit_depth(mut self, bit_depth: BitDepth) -> Self {
        self.bit_depth = bit_depth;
        self
    }
}

/// Number of least significant bits used per channel, 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BitDepth(u8);

impl BitDepth {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 4;

    pub fn new(bits: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&bits) {
            Ok(Self(bits))
        } else {
            Err(SteganoError::InvalidBitDepth(bits))
        }
    }

    #[inline]
    pub fn get(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0 as u32
    }

    /// `(1 << d) - 1`
    #[inline]
    pub fn mask(self) -> u8 {
        (1u8 << self.0) - 1
    }
}

impl Default for BitDepth {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = SteganoError;

    fn try_from(bits: u8) -> Result<Self> {
        Self::new(bits)
    }
}

impl std::fmt::Display for BitDepth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_depth_accepts_one_to_four() {
        for bits in 1..=4 {
            let depth = BitDepth::try_from(bits).unwrap();
            assert_eq!(depth.get(), bits);
        }
        for bits in [0, 5, 8, 255] {
            assert!(matches!(
                BitDepth::new(bits),
                Err(SteganoError::InvalidBitDepth(b)) if b == bits
            ));
        }
    }

    #[test]
    fn bit_depth_mask() {
        assert_eq!(BitDepth::new(1).unwrap().mask(), 0b0001);
        assert_eq!(BitDepth::new(3).unwrap().mask(), 0b0111);
        assert_eq!(BitDepth::new(4).unwrap().mask(), 0b1111);
    }

    #[test]
    fn defaults_to_one_bit() {
        assert_eq!(CodecOptions::default().bit_depth().get(), 1);
        assert_eq!(LsbCodecOptions::default().bit_depth, BitDepth::default());

        let options: CodecOptions = LsbCodecOptions::default()
            .with_bit_depth(BitDepth::new(2).unwrap())
            .into();
        assert_eq!(options.bit_depth().get(), 2);
    }
}
