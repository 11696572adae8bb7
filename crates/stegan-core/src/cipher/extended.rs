use super::Cipher;
use crate::error::SteganoError;
use crate::result::Result;

/// Byte wise Vigenere: `c = (p + k) mod 256`.
///
/// No alphabet restriction, every byte consumes key material. This is the
/// variant used for binary payloads.
#[derive(Clone, PartialEq, Eq)]
pub struct Extended {
    key: Vec<u8>,
}

impl std::fmt::Debug for Extended {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Extended({})", "*".repeat(self.key.len()))
    }
}

impl Extended {
    pub fn new<K: Into<Vec<u8>>>(key: K) -> Result<Self> {
        let key = key.into();
        if key.is_empty() {
            return Err(SteganoError::MissingCipherKey);
        }

        Ok(Self { key })
    }
}

impl Cipher for Extended {
    fn encrypt(&self, plain: &[u8]) -> Vec<u8> {
        plain
            .iter()
            .zip(self.key.iter().cycle())
            .map(|(p, k)| p.wrapping_add(*k))
            .collect()
    }

    fn decrypt(&self, cipher: &[u8]) -> Vec<u8> {
        cipher
            .iter()
            .zip(self.key.iter().cycle())
            .map(|(c, k)| c.wrapping_sub(*k))
            .collect()
    }
}
