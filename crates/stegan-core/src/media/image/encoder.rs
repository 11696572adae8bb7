use bitstream_io::{BigEndian, BitRead, BitReader};

use super::iterators::PermutedChannels;
use crate::error::SteganoError;
use crate::media::codec_options::BitDepth;
use crate::media::PixelBuffer;
use crate::permutation::Permutation;
use crate::result::Result;

/// Splits bytes into runs of `bit_depth` bits, most significant bit first.
///
/// When the bit count is not a multiple of the depth the last run is padded
/// with zeros on the right.
pub(crate) struct BitChunks<'a> {
    reader: BitReader<&'a [u8], BigEndian>,
    remaining: u64,
    depth: u32,
}

impl<'a> BitChunks<'a> {
    pub fn new(data: &'a [u8], bit_depth: BitDepth) -> Self {
        Self {
            reader: BitReader::endian(data, BigEndian),
            remaining: data.len() as u64 * 8,
            depth: bit_depth.bits(),
        }
    }

    /// Number of chunks `bits` bits are split into.
    pub fn count_for(bits: usize, bit_depth: BitDepth) -> usize {
        bits.div_ceil(bit_depth.bits() as usize)
    }
}

impl Iterator for BitChunks<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let take = (self.depth as u64).min(self.remaining) as u32;
        let chunk: u8 = self.reader.read(take).ok()?;
        self.remaining -= take as u64;

        Some(chunk << (self.depth - take))
    }
}

/// Writes bytes into the low bits of the carrier channels, following a
/// pixel permutation.
pub struct LsbEncoder<'i> {
    carrier: &'i mut [u8],
    positions: PermutedChannels<'i>,
    bit_depth: BitDepth,
}

impl<'i> LsbEncoder<'i> {
    pub fn new(carrier: &'i mut PixelBuffer, order: &'i Permutation, bit_depth: BitDepth) -> Self {
        let channels = carrier.channels();
        Self {
            carrier: carrier.as_raw_mut(),
            positions: PermutedChannels::new(order, channels),
            bit_depth,
        }
    }

    /// Hides all of `data`, returns the number of channels touched.
    ///
    /// Fails without touching the carrier when `data` does not fit.
    pub fn hide(self, data: &[u8]) -> Result<usize> {
        let required = BitChunks::count_for(data.len() * 8, self.bit_depth);
        let available = self.positions.len();
        if required > available {
            return Err(SteganoError::PayloadTooLarge {
                required: data.len() * 8,
                available: available * self.bit_depth.bits() as usize,
            });
        }

        let keep = !self.bit_depth.mask();
        let mut written = 0;
        for (offset, chunk) in self.positions.zip(BitChunks::new(data, self.bit_depth)) {
            let channel = &mut self.carrier[offset];
            *channel = (*channel & keep) | chunk;
            written += 1;
        }

        Ok(written)
    }
}
