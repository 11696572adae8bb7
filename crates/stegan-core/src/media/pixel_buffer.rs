use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};

use crate::error::SteganoError;
use crate::result::Result;

/// The shape shared by every pixel of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// single 8-bit scalar, grayscale or an already resolved palette index
    Luma,
    Rgb,
    Rgba,
}

impl PixelLayout {
    pub fn from_channels(channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::Luma),
            3 => Ok(Self::Rgb),
            4 => Ok(Self::Rgba),
            channels => Err(SteganoError::UnsupportedPixelMode { channels }),
        }
    }

    /// Channels per pixel, alpha included.
    #[inline]
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Luma => 1,
            PixelLayout::Rgb => 3,
            PixelLayout::Rgba => 4,
        }
    }

    /// Channels taken into account by the quality metric, alpha is left out.
    #[inline]
    pub fn compared_channels(self) -> usize {
        match self {
            PixelLayout::Luma => 1,
            PixelLayout::Rgb | PixelLayout::Rgba => 3,
        }
    }
}

/// Decoded, row-major image data with 8 bits per channel.
///
/// Pixel `i` is the one at `x + width * y` and occupies the bytes
/// `i * channels .. (i + 1) * channels` of the raw data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    layout: PixelLayout,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps raw channel data, checking it against the dimensions.
    pub fn new(width: u32, height: u32, layout: PixelLayout, data: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * layout.channels();
        if data.len() != expected {
            return Err(SteganoError::PixelDataMismatch {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            layout,
            data,
        })
    }

    /// Same as [`PixelBuffer::new`] with the layout given as channel count.
    pub fn from_raw(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
        Self::new(width, height, PixelLayout::from_channels(channels)?, data)
    }

    /// Builds a buffer by asking `f(x, y, channel)` for every channel value.
    pub fn from_fn<F>(width: u32, height: u32, layout: PixelLayout, mut f: F) -> Self
    where
        F: FnMut(u32, u32, usize) -> u8,
    {
        let channels = layout.channels();
        let mut data = Vec::with_capacity(width as usize * height as usize * channels);
        for y in 0..height {
            for x in 0..width {
                data.extend((0..channels).map(|c| f(x, y, c)));
            }
        }

        Self {
            width,
            height,
            layout,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    #[inline]
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// The channels of pixel `index`.
    pub fn pixel(&self, index: usize) -> &[u8] {
        let channels = self.channels();
        &self.data[index * channels..(index + 1) * channels]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    pub fn into_dynamic_image(self) -> Result<DynamicImage> {
        let (width, height) = self.dimensions();
        let image = match self.layout {
            PixelLayout::Luma => {
                GrayImage::from_raw(width, height, self.data).map(DynamicImage::ImageLuma8)
            }
            PixelLayout::Rgb => {
                RgbImage::from_raw(width, height, self.data).map(DynamicImage::ImageRgb8)
            }
            PixelLayout::Rgba => {
                RgbaImage::from_raw(width, height, self.data).map(DynamicImage::ImageRgba8)
            }
        };

        image.ok_or(SteganoError::ImageEncodingError)
    }
}

impl TryFrom<DynamicImage> for PixelBuffer {
    type Error = SteganoError;

    fn try_from(image: DynamicImage) -> Result<Self> {
        match image {
            DynamicImage::ImageLuma8(i) => {
                let (width, height) = i.dimensions();
                Self::new(width, height, PixelLayout::Luma, i.into_raw())
            }
            DynamicImage::ImageRgb8(i) => {
                let (width, height) = i.dimensions();
                Self::new(width, height, PixelLayout::Rgb, i.into_raw())
            }
            DynamicImage::ImageRgba8(i) => {
                let (width, height) = i.dimensions();
                Self::new(width, height, PixelLayout::Rgba, i.into_raw())
            }
            other => Err(SteganoError::UnsupportedPixelMode {
                channels: other.color().channel_count() as usize,
            }),
        }
    }
}
