use bitstream_io::{BigEndian, BitWrite, BitWriter};

use super::encoder::BitChunks;
use super::iterators::PermutedChannels;
use crate::media::codec_options::BitDepth;
use crate::media::PixelBuffer;
use crate::permutation::Permutation;

/// Reads bytes back from the low bits of the carrier channels, following the
/// same pixel permutation the encoder used.
///
/// Every call to [`LsbDecoder::unveil`] starts over at the first position of
/// the permutation.
pub struct LsbDecoder<'i> {
    carrier: &'i [u8],
    order: &'i Permutation,
    channels: usize,
    bit_depth: BitDepth,
}

impl<'i> LsbDecoder<'i> {
    pub fn new(carrier: &'i PixelBuffer, order: &'i Permutation, bit_depth: BitDepth) -> Self {
        Self {
            carrier: carrier.as_raw(),
            order,
            channels: carrier.channels(),
            bit_depth,
        }
    }

    /// Recovers the first `len` hidden bytes, `None` when the carrier does
    /// not have enough channels for them.
    pub fn unveil(&self, len: usize) -> Option<Vec<u8>> {
        let chunks = BitChunks::count_for(len.checked_mul(8)?, self.bit_depth);
        let positions = PermutedChannels::new(self.order, self.channels);
        if chunks > positions.len() {
            return None;
        }

        let depth = self.bit_depth.bits();
        let mask = self.bit_depth.mask();
        let mut bytes = Vec::with_capacity(len + 1);
        {
            let mut writer = BitWriter::endian(&mut bytes, BigEndian);
            for offset in positions.take(chunks) {
                writer.write(depth, self.carrier[offset] & mask).ok()?;
            }
            writer.byte_align().ok()?;
        }
        bytes.truncate(len);

        Some(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::image::encoder::LsbEncoder;
    use crate::media::PixelLayout;

    #[test]
    fn should_read_low_bits_msb_first() {
        let carrier = PixelBuffer::from_raw(
            8,
            1,
            1,
            vec![0xf1, 0x00, 0x01, 0x01, 0xfe, 0x02, 0x03, 0x00],
        )
        .unwrap();
        let order = Permutation::identity(8);

        let bytes = LsbDecoder::new(&carrier, &order, BitDepth::default()).unveil(1);

        assert_eq!(bytes, Some(vec![0b1011_0010]));
    }

    #[test]
    fn should_drop_padding_bits() {
        let mut carrier = PixelBuffer::from_fn(4, 4, PixelLayout::Luma, |_, _, _| 0x80);
        let order = Permutation::from_password("pad", 16);
        let depth = BitDepth::new(3).unwrap();
        LsbEncoder::new(&mut carrier, &order, depth)
            .hide(&[0xde, 0xad])
            .unwrap();

        let decoder = LsbDecoder::new(&carrier, &order, depth);
        assert_eq!(decoder.unveil(2), Some(vec![0xde, 0xad]));
        assert_eq!(decoder.unveil(1), Some(vec![0xde]));
    }

    #[test]
    fn should_not_read_past_the_carrier() {
        let carrier = PixelBuffer::from_fn(2, 2, PixelLayout::Rgb, |_, _, _| 0);
        let order = Permutation::identity(4);
        let decoder = LsbDecoder::new(&carrier, &order, BitDepth::new(2).unwrap());

        // 12 channels with 2 bits each
        assert_eq!(decoder.unveil(3), Some(vec![0; 3]));
        assert_eq!(decoder.unveil(4), None);
        assert_eq!(decoder.unveil(usize::MAX), None);
    }
}
