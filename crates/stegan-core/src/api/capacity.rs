use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use crate::media::payload::HEADER_LEN;
use crate::media::{BitDepth, CodecOptions, Media};
use crate::SteganoError;

pub fn prepare() -> CapacityApi {
    CapacityApi::default()
}

/// How much an image can hide at a bit depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capacity {
    pub bits: usize,
    pub bit_depth: BitDepth,
}

impl Capacity {
    /// Bytes left for file name and content once the header is stored.
    pub fn payload_bytes(&self) -> usize {
        (self.bits / 8).saturating_sub(HEADER_LEN)
    }
}

impl Display for Capacity {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} bits at bit depth {}, {} bytes for file name and content",
            self.bits,
            self.bit_depth,
            self.payload_bytes()
        )
    }
}

#[derive(Default, Debug)]
pub struct CapacityApi {
    image: Option<PathBuf>,
    options: CodecOptions,
}

impl CapacityApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<Capacity, SteganoError> {
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let media = Media::from_file(&image)?;

        Ok(Capacity {
            bits: media.capacity(&self.options),
            bit_depth: self.options.bit_depth(),
        })
    }
}
