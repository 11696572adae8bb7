//! Vigenere cipher family.
//!
//! Five variants are supported, each one a distinct algorithm with only the
//! state it needs. [`Vigenere`] is the sum type that dispatches to them.
//!
//! ```rust
//! use stegan_core::cipher::{Cipher, CipherKey, Vigenere, VigenereVariant};
//!
//! let cipher = Vigenere::new(VigenereVariant::Standard, Some(CipherKey::from("lemon")))
//!     .expect("valid key");
//! assert_eq!(cipher.encrypt_text("attack at dawn").unwrap(), "LXFOPV EF RNHR");
//! ```

mod alphabet;
mod auto_key;
mod extended;
mod full;
mod latin_square;
mod running_key;
mod standard;

use std::path::Path;

use enum_dispatch::enum_dispatch;

pub use auto_key::AutoKey;
pub use extended::Extended;
pub use full::Full;
pub use latin_square::LatinSquare;
pub use running_key::RunningKey;
pub use standard::Standard;

use crate::error::SteganoError;
use crate::result::Result;

/// Reversible symbol transform, `decrypt(encrypt(x)) == x` for a fixed key.
///
/// Text variants fold ASCII letters to upper case, so for them the inverse law
/// holds for upper case text. [`Vigenere::encrypt_text`] upper cases the whole
/// text first.
#[enum_dispatch]
pub trait Cipher {
    fn encrypt(&self, plain: &[u8]) -> Vec<u8>;

    fn decrypt(&self, cipher: &[u8]) -> Vec<u8>;
}

#[enum_dispatch(Cipher)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Vigenere {
    Standard(Standard),
    Full(Full),
    AutoKey(AutoKey),
    RunningKey(RunningKey),
    Extended(Extended),
}

/// Numeric variant tags, `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum VigenereVariant {
    Standard = 1,
    Full = 2,
    AutoKey = 3,
    RunningKey = 4,
    Extended = 5,
}

impl TryFrom<u8> for VigenereVariant {
    type Error = SteganoError;

    fn try_from(tag: u8) -> Result<Self> {
        match tag {
            1 => Ok(Self::Standard),
            2 => Ok(Self::Full),
            3 => Ok(Self::AutoKey),
            4 => Ok(Self::RunningKey),
            5 => Ok(Self::Extended),
            other => Err(SteganoError::InvalidCipherVariant(other)),
        }
    }
}

/// Key material, either text (letters are used) or raw bytes.
///
/// For [`VigenereVariant::RunningKey`] the text is the external key text.
#[derive(Clone, PartialEq, Eq)]
pub enum CipherKey {
    Text(String),
    Bytes(Vec<u8>),
}

impl std::fmt::Debug for CipherKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CipherKey::Text(text) => write!(f, "Text({})", "*".repeat(text.len())),
            CipherKey::Bytes(bytes) => write!(f, "Bytes({})", "*".repeat(bytes.len())),
        }
    }
}

impl From<&str> for CipherKey {
    fn from(text: &str) -> Self {
        CipherKey::Text(text.to_string())
    }
}

impl From<&[u8]> for CipherKey {
    fn from(bytes: &[u8]) -> Self {
        CipherKey::Bytes(bytes.to_vec())
    }
}

impl Vigenere {
    /// Builds the cipher for `variant`, validating the key once.
    pub fn new(variant: VigenereVariant, key: Option<CipherKey>) -> Result<Self> {
        let key = key.ok_or(SteganoError::MissingCipherKey)?;

        Ok(match (variant, key) {
            (VigenereVariant::Extended, CipherKey::Bytes(bytes)) => Extended::new(bytes)?.into(),
            (VigenereVariant::Extended, CipherKey::Text(_)) => {
                return Err(SteganoError::InvalidCipherKeyType)
            }
            (_, CipherKey::Bytes(_)) => return Err(SteganoError::InvalidCipherKeyType),
            (VigenereVariant::Standard, CipherKey::Text(text)) => Standard::new(&text)?.into(),
            (VigenereVariant::Full, CipherKey::Text(text)) => Full::new(&text)?.into(),
            (VigenereVariant::AutoKey, CipherKey::Text(text)) => AutoKey::new(&text)?.into(),
            (VigenereVariant::RunningKey, CipherKey::Text(text)) => {
                RunningKey::from_text(&text)?.into()
            }
        })
    }

    /// Same as [`Vigenere::new`] but with the raw numeric variant tag.
    pub fn from_tag(tag: u8, key: Option<CipherKey>) -> Result<Self> {
        Self::new(VigenereVariant::try_from(tag)?, key)
    }

    /// Running key cipher with the key text read from `path`.
    pub fn running_key_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(RunningKey::from_file(path)?.into())
    }

    pub fn variant(&self) -> VigenereVariant {
        match self {
            Vigenere::Standard(_) => VigenereVariant::Standard,
            Vigenere::Full(_) => VigenereVariant::Full,
            Vigenere::AutoKey(_) => VigenereVariant::AutoKey,
            Vigenere::RunningKey(_) => VigenereVariant::RunningKey,
            Vigenere::Extended(_) => VigenereVariant::Extended,
        }
    }

    /// Encrypts UTF-8 text, the result is upper case.
    ///
    /// The whole text is upper cased first (`ß` becomes `SS`, `ä` becomes
    /// `Ä`), then only `A..=Z` are substituted.
    pub fn encrypt_text(&self, plain: &str) -> Result<String> {
        Ok(String::from_utf8(self.encrypt(plain.to_uppercase().as_bytes()))?)
    }

    /// Decrypts UTF-8 text, the result is upper case.
    pub fn decrypt_text(&self, cipher: &str) -> Result<String> {
        Ok(String::from_utf8(self.decrypt(cipher.to_uppercase().as_bytes()))?)
    }
}
