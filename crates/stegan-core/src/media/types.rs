use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path;

use image::{ColorType, ImageFormat};
use log::{debug, error};

use crate::engine;
use crate::error::SteganoError;
use crate::media::codec_options::CodecOptions;
use crate::media::payload::Envelope;
use crate::media::{PixelBuffer, PixelLayout};
use crate::result::Result;

use super::Persist;

/// a media container for steganography
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    image: PixelBuffer,
}

impl Media {
    pub fn from_image(image: PixelBuffer) -> Self {
        Self { image }
    }

    /// Decodes a PNG or BMP file into pixels.
    pub fn from_file(f: &Path) -> Result<Self> {
        let ext = f
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or(SteganoError::UnsupportedMedia)?;

        let format = match ext.as_str() {
            "png" => ImageFormat::Png,
            "bmp" => ImageFormat::Bmp,
            _ => return Err(SteganoError::UnsupportedMedia),
        };
        let image = image::open(f).map_err(|e| {
            debug!("Error decoding {f:?} as {format:?}: {e}");
            SteganoError::InvalidImageMedia
        })?;

        Ok(Self::from_image(PixelBuffer::try_from(image)?))
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.image
    }

    pub fn into_pixels(self) -> PixelBuffer {
        self.image
    }

    /// Hides `content` under `filename`, returning the stego media.
    pub fn hide_data(
        &self,
        filename: &str,
        content: &[u8],
        password: &str,
        opts: &CodecOptions,
    ) -> Result<Media> {
        let image = engine::hide(&self.image, filename, content, password, opts.bit_depth())?;

        Ok(Self::from_image(image))
    }

    pub fn unveil_data(&self, password: &str, opts: &CodecOptions) -> Result<Option<Envelope>> {
        engine::unveil(&self.image, password, opts.bit_depth())
    }

    pub fn capacity(&self, opts: &CodecOptions) -> usize {
        engine::capacity_of(&self.image, opts.bit_depth())
    }

    pub fn save_to_writer<W: Write + Seek>(&self, mut writer: W, format: ImageFormat) -> Result<()> {
        self.ensure_lossless(format)?;
        let (width, height) = self.image.dimensions();
        image::write_buffer_with_format(
            &mut writer,
            self.image.as_raw(),
            width,
            height,
            color_type(self.image.layout()),
            format,
        )
        .map_err(|e| {
            error!("Error saving image: {e}");
            SteganoError::ImageEncodingError
        })
    }

    /// Gray BMPs are written with a palette and read back as RGB, which
    /// moves every hidden bit.
    fn ensure_lossless(&self, format: ImageFormat) -> Result<()> {
        if format == ImageFormat::Bmp && self.image.layout() == PixelLayout::Luma {
            return Err(SteganoError::LossyOutputFormat {
                layout: "grayscale",
                format: "BMP",
            });
        }

        Ok(())
    }
}

impl Persist for Media {
    /// Writes a BMP for `.bmp` targets and a PNG for everything else.
    fn save_as(&self, file: &Path) -> Result<()> {
        let format = match file.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bmp") => ImageFormat::Bmp,
            _ => ImageFormat::Png,
        };
        self.ensure_lossless(format)?;
        let f = File::create(file).map_err(|e| {
            error!("Error creating file {file:?}: {e}");
            SteganoError::WriteError { source: e }
        })?;
        let mut writer = BufWriter::new(f);
        self.save_to_writer(&mut writer, format)?;
        writer.flush().map_err(|source| SteganoError::WriteError { source })
    }
}

fn color_type(layout: PixelLayout) -> ColorType {
    match layout {
        PixelLayout::Luma => ColorType::L8,
        PixelLayout::Rgb => ColorType::Rgb8,
        PixelLayout::Rgba => ColorType::Rgba8,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::prepare_5x5_image;
    use tempfile::TempDir;

    #[test]
    fn should_reject_unsupported_files() {
        assert!(matches!(
            Media::from_file(Path::new("Cargo.toml")),
            Err(SteganoError::UnsupportedMedia)
        ));
        assert!(matches!(
            Media::from_file(Path::new("no-extension")),
            Err(SteganoError::UnsupportedMedia)
        ));
        assert!(matches!(
            Media::from_file(Path::new("some_random_file.png")),
            Err(SteganoError::InvalidImageMedia)
        ));
    }

    #[test]
    fn should_save_and_load_lossless() -> Result<()> {
        let out_dir = TempDir::new()?;
        let rgba = Media::from_image(prepare_5x5_image());
        let rgb = Media::from_image(PixelBuffer::from_fn(4, 3, PixelLayout::Rgb, |x, y, c| {
            (x * 50 + y * 7 + c as u32) as u8
        }));

        for (name, media) in [("image.png", &rgba), ("image.PNG", &rgba), ("image.bmp", &rgb)] {
            let target = out_dir.path().join(name);
            media.save_as(&target)?;

            assert_eq!(&Media::from_file(&target)?, media, "{name} was not lossless");
        }

        Ok(())
    }

    #[test]
    fn should_keep_grayscale_single_channel() -> Result<()> {
        let out_dir = TempDir::new()?;
        let target = out_dir.path().join("gray.png");
        let gray = PixelBuffer::from_fn(3, 2, PixelLayout::Luma, |x, y, _| (x * 40 + y) as u8);
        Media::from_image(gray.clone()).save_as(&target)?;

        let loaded = Media::from_file(&target)?;
        assert_eq!(loaded.pixels().layout(), PixelLayout::Luma);
        assert_eq!(loaded.into_pixels(), gray);

        Ok(())
    }

    #[test]
    fn should_refuse_to_save_grayscale_as_bmp() -> Result<()> {
        let out_dir = TempDir::new()?;
        let target = out_dir.path().join("gray.bmp");
        let gray = PixelBuffer::from_fn(3, 2, PixelLayout::Luma, |x, y, _| (x * 40 + y) as u8);

        assert!(matches!(
            Media::from_image(gray).save_as(&target),
            Err(SteganoError::LossyOutputFormat { .. })
        ));
        assert!(!target.exists());

        Ok(())
    }

    #[test]
    fn should_expand_palette_bmp_to_rgb() -> Result<()> {
        let out_dir = TempDir::new()?;
        let target = out_dir.path().join("palette.bmp");
        image::GrayImage::from_fn(4, 2, |x, y| image::Luma([(x * 60 + y) as u8]))
            .save(&target)
            .expect("Cannot write palette BMP");

        let loaded = Media::from_file(&target)?.into_pixels();

        assert_eq!(loaded.layout(), PixelLayout::Rgb);
        assert_eq!(loaded.pixel(5), &[61, 61, 61]);

        Ok(())
    }

    #[test]
    fn should_hide_and_unveil_through_media() -> Result<()> {
        let media = Media::from_image(prepare_5x5_image());
        let opts = CodecOptions::default();

        let secret = media.hide_data("a", b"hi", "pw", &opts)?;
        assert_ne!(secret, media);

        let envelope = secret.unveil_data("pw", &opts)?.expect("payload expected");
        assert_eq!(envelope.filename(), "a");
        assert_eq!(envelope.content(), b"hi");

        Ok(())
    }
}
