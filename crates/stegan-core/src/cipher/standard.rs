use super::alphabet::RepeatingKey;
use super::Cipher;
use crate::error::SteganoError;
use crate::result::Result;

/// Classic Vigenere: `c = (p + k) mod 26`, the key repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standard {
    key: RepeatingKey,
}

impl Standard {
    pub fn new(key: &str) -> Result<Self> {
        let key = RepeatingKey::from_text(key).ok_or(SteganoError::MissingCipherKey)?;

        Ok(Self { key })
    }
}

impl Cipher for Standard {
    fn encrypt(&self, plain: &[u8]) -> Vec<u8> {
        self.key.encrypt(plain)
    }

    fn decrypt(&self, cipher: &[u8]) -> Vec<u8> {
        self.key.decrypt(cipher)
    }
}
