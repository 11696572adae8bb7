pub mod codec_options;
pub mod image;
pub mod payload;
mod pixel_buffer;
mod types;

use std::path::Path;

pub use codec_options::{BitDepth, CodecOptions, LsbCodecOptions};
pub use pixel_buffer::*;
pub use types::*;

pub trait Persist {
    fn save_as(&self, _: &Path) -> crate::Result<()>;
}
