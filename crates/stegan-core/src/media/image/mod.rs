pub mod decoder;
pub mod encoder;
mod iterators;
pub mod lsb_codec;

pub use decoder::LsbDecoder;
pub use encoder::LsbEncoder;
pub use lsb_codec::LsbCodec;
