use std::path::{Path, PathBuf};

use crate::media::Media;
use crate::quality::{quality, Quality};
use crate::SteganoError;

pub fn prepare() -> QualityApi {
    QualityApi::default()
}

/// Compares two image files, usually a carrier and its stego image.
#[derive(Default, Debug)]
pub struct QualityApi {
    reference: Option<PathBuf>,
    candidate: Option<PathBuf>,
}

impl QualityApi {
    pub fn with_reference<A: AsRef<Path>>(mut self, reference: A) -> Self {
        self.reference = Some(reference.as_ref().to_path_buf());
        self
    }

    pub fn with_candidate<A: AsRef<Path>>(mut self, candidate: A) -> Self {
        self.candidate = Some(candidate.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<Quality, SteganoError> {
        let (Some(reference), Some(candidate)) = (self.reference, self.candidate) else {
            return Err(SteganoError::MissingComparison);
        };
        let reference = Media::from_file(&reference)?;
        let candidate = Media::from_file(&candidate)?;

        quality(reference.pixels(), candidate.pixels())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::media::{PixelBuffer, PixelLayout};
    use crate::{Persist, Psnr};

    #[test]
    fn should_compare_two_files() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let a = temp_dir.path().join("a.png");
        let b = temp_dir.path().join("b.bmp");
        let image = PixelBuffer::from_fn(8, 8, PixelLayout::Rgb, |x, y, c| (x + y) as u8 + c as u8);
        Media::from_image(image.clone()).save_as(&a).unwrap();
        Media::from_image(image).save_as(&b).unwrap();

        let q = prepare().with_reference(&a).with_candidate(&b).execute().unwrap();

        assert_eq!(q.psnr, Psnr::Identical);
    }

    #[test]
    fn should_need_both_images() {
        assert!(matches!(
            prepare().with_reference("a.png").execute(),
            Err(SteganoError::MissingComparison)
        ));
    }
}
