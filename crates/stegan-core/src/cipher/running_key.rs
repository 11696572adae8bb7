use std::fs;
use std::path::Path;

use super::alphabet::RepeatingKey;
use super::Cipher;
use crate::error::SteganoError;
use crate::result::Result;

/// Vigenere keyed by the letters of an external text, usually a book page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningKey {
    stream: RepeatingKey,
}

impl RunningKey {
    pub fn from_text(text: &str) -> Result<Self> {
        let stream = RepeatingKey::from_text(text).ok_or(SteganoError::MissingCipherKey)?;

        Ok(Self { stream })
    }

    /// Reads the key text from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| SteganoError::ReadError { source })?;

        Self::from_text(&text)
    }
}

impl Cipher for RunningKey {
    fn encrypt(&self, plain: &[u8]) -> Vec<u8> {
        self.stream.encrypt(plain)
    }

    fn decrypt(&self, cipher: &[u8]) -> Vec<u8> {
        self.stream.decrypt(cipher)
    }
}
