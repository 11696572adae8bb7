use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::media::{CodecOptions, Media};
use crate::SteganoError;

use super::Password;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    output_folder: Option<PathBuf>,
    password: Password,
    options: CodecOptions,
}

impl UnveilApi {
    /// Use the given codec options, the bit depth must match the one used for hiding
    pub fn with_options(mut self, options: CodecOptions) -> Self {
        self.options = options;
        self
    }

    /// This is the secret image that contains the data to be unveiled
    pub fn from_secret_file(mut self, secret_image: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_image.as_ref().to_path_buf());
        self
    }

    /// This is the folder where the data will be saved to
    pub fn into_output_folder(mut self, output_folder: impl AsRef<Path>) -> Self {
        self.output_folder = Some(output_folder.as_ref().to_path_buf());
        self
    }

    /// Set the password used for hiding the data
    /// If `None` is passed, no password will be used, leads to no de-/encryption used
    pub fn using_password<P: Into<Password>>(mut self, password: P) -> Self {
        self.password = password.into();
        self
    }

    /// Execute the unveil process and blocks until it is finished
    ///
    /// Returns the path of the unveiled file, or `None` if the image holds
    /// nothing for this password and bit depth.
    pub fn execute(self) -> Result<Option<PathBuf>, SteganoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(SteganoError::CarrierNotSet);
        };
        let Some(output_folder) = self.output_folder else {
            return Err(SteganoError::TargetNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let Some(envelope) = media.unveil_data(self.password.as_str(), &self.options)? else {
            warn!("no secret found in {secret_media:?}");
            return Ok(None);
        };

        // only the last path component, a hidden name must not escape the folder
        let file_name = Path::new(envelope.filename())
            .file_name()
            .ok_or(SteganoError::InvalidFileName)?;
        let target = output_folder.join(file_name);
        let mut target_file =
            File::create(&target).map_err(|source| SteganoError::WriteError { source })?;
        target_file
            .write_all(envelope.content())
            .map_err(|source| SteganoError::WriteError { source })?;
        info!("unveiled {} bytes into {target:?}", envelope.content().len());

        Ok(Some(target))
    }
}
