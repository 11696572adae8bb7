use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::media::{CodecOptions, Media, Persist};
use crate::quality::{quality, Quality};
use crate::{SteganoError, SECRET_MESSAGE_FILENAME};

use super::Password;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// Hides a file or a text message inside an image and writes the result.
///
/// A file takes precedence over a message when both are set.
#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    file: Option<PathBuf>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl HideApi {
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// The message is stored as `secret-message.txt`
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_file<A: AsRef<Path>>(mut self, data_file: A) -> Self {
        self.file = Some(data_file.as_ref().to_path_buf());
        self
    }

    pub fn use_file(mut self, data_file: Option<PathBuf>) -> Self {
        self.file = data_file;
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Set the password
    pub fn with_password(mut self, password: &str) -> Self {
        self.password = password.into();
        self
    }

    /// Set the password
    /// If `None` is passed, no password will be used, leads to no de-/encryption used
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Hides the payload, saves the image and reports how much it changed.
    pub fn execute(self) -> Result<Quality, SteganoError> {
        let (filename, content) = self.payload()?;
        let Some(image) = self.image else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(SteganoError::TargetNotSet);
        };

        let carrier = Media::from_file(&image)?;
        let secret = carrier.hide_data(&filename, &content, self.password.as_str(), &self.options)?;
        secret.save_as(&output)?;
        info!("hid {filename:?} ({} bytes) in {output:?}", content.len());

        quality(carrier.pixels(), secret.pixels())
    }

    fn payload(&self) -> Result<(String, Vec<u8>), SteganoError> {
        if let Some(file) = &self.file {
            let filename = file
                .file_name()
                .and_then(|name| name.to_str())
                .ok_or(SteganoError::InvalidFileName)?
                .to_string();
            let content = fs::read(file).map_err(|source| SteganoError::ReadError { source })?;

            return Ok((filename, content));
        }

        match &self.message {
            Some(message) => Ok((
                SECRET_MESSAGE_FILENAME.to_string(),
                message.as_bytes().to_vec(),
            )),
            None => Err(SteganoError::MissingMessage),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::media::PixelLayout;
    use crate::test_utils::prepare_noise_image;
    use crate::Psnr;

    #[test]
    fn illustrate_api_usage() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let carrier = temp_dir.path().join("carrier.png");
        Media::from_image(prepare_noise_image(64, 64, PixelLayout::Rgba))
            .save_as(&carrier)
            .expect("Failed to write carrier image");

        let quality = crate::api::hide::prepare()
            .with_message("Hello, World!")
            .with_image(&carrier)
            .with_password("SuperSecret42")
            .with_output(temp_dir.path().join("image-with-secret.png"))
            .execute()
            .expect("Failed to hide message in image");

        assert!(matches!(quality.psnr, Psnr::Decibels(db) if db > 50.0));
        assert!(temp_dir.path().join("image-with-secret.png").exists());
    }

    #[test]
    fn should_require_a_message_or_file() {
        assert!(matches!(
            prepare().with_image("a.png").with_output("b.png").execute(),
            Err(SteganoError::MissingMessage)
        ));
    }

    #[test]
    fn should_require_image_and_output() {
        assert!(matches!(
            prepare().with_message("hi").with_output("b.png").execute(),
            Err(SteganoError::CarrierNotSet)
        ));
        assert!(matches!(
            prepare().with_message("hi").with_image("a.png").execute(),
            Err(SteganoError::TargetNotSet)
        ));
    }

    #[test]
    fn should_fail_for_unreadable_data_file() {
        assert!(matches!(
            prepare()
                .with_file("foofile")
                .with_image("a.png")
                .with_output("b.png")
                .execute(),
            Err(SteganoError::ReadError { .. })
        ));
    }
}
