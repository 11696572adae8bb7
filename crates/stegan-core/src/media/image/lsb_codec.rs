use log::debug;

use super::decoder::LsbDecoder;
use super::encoder::LsbEncoder;
use crate::media::codec_options::{BitDepth, CodecOptions};
use crate::media::PixelBuffer;
use crate::permutation::Permutation;

/// Factory for decoder and encoder
pub struct LsbCodec;

impl LsbCodec {
    /// Number of bits `carrier` can hold: pixels × channels × bit depth.
    pub fn capacity(carrier: &PixelBuffer, bit_depth: BitDepth) -> usize {
        let capacity = carrier.pixel_count() * carrier.channels() * bit_depth.bits() as usize;
        debug!(
            "capacity of {}x{} {:?} at {bit_depth} bit(s): {capacity} bits",
            carrier.width(),
            carrier.height(),
            carrier.layout()
        );

        capacity
    }

    /// builds a LSB Image Decoder
    pub fn decoder<'i>(
        input: &'i PixelBuffer,
        order: &'i Permutation,
        opts: &CodecOptions,
    ) -> LsbDecoder<'i> {
        LsbDecoder::new(input, order, opts.bit_depth())
    }

    /// builds a LSB Image Encoder
    pub fn encoder<'i>(
        carrier: &'i mut PixelBuffer,
        order: &'i Permutation,
        opts: &CodecOptions,
    ) -> LsbEncoder<'i> {
        LsbEncoder::new(carrier, order, opts.bit_depth())
    }
}
