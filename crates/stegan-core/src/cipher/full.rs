use super::alphabet::{substitute, RepeatingKey};
use super::latin_square::LatinSquare;
use super::Cipher;
use crate::error::SteganoError;
use crate::prng::{hash_seed, seeded};
use crate::result::Result;

/// Vigenere with a full substitution table.
///
/// Instead of shifting, the key letter selects a row of a Latin square that is
/// generated from the key itself, the plain letter selects the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Full {
    key: RepeatingKey,
    square: LatinSquare,
}

impl Full {
    pub fn new(key: &str) -> Result<Self> {
        let key = RepeatingKey::from_text(key).ok_or(SteganoError::MissingCipherKey)?;
        let seed: Vec<u8> = (0..key.len()).map(|i| b'A' + key.at(i)).collect();
        let square = LatinSquare::generate(&mut seeded(hash_seed(&seed)));

        Ok(Self { key, square })
    }

    pub fn square(&self) -> &LatinSquare {
        &self.square
    }
}

impl Cipher for Full {
    fn encrypt(&self, plain: &[u8]) -> Vec<u8> {
        let mut i = 0;
        substitute(plain, |p| {
            let k = self.key.at(i);
            i += 1;
            self.square.get(k, p) - 1
        })
    }

    fn decrypt(&self, cipher: &[u8]) -> Vec<u8> {
        let mut i = 0;
        substitute(cipher, |c| {
            let k = self.key.at(i);
            i += 1;
            self.square.column_of(k, c + 1)
        })
    }
}
