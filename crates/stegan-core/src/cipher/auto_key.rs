use super::alphabet::{add, sub, substitute, RepeatingKey};
use super::Cipher;
use crate::error::SteganoError;
use crate::result::Result;

/// Autokey Vigenere.
///
/// The key is used once, after that the plain text itself continues the key
/// stream: letter `i` is shifted by plain letter `i - len(key)`. Decryption
/// therefore has to run strictly front to back, feeding every recovered
/// letter into the key stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoKey {
    key: RepeatingKey,
}

impl AutoKey {
    pub fn new(key: &str) -> Result<Self> {
        let key = RepeatingKey::from_text(key).ok_or(SteganoError::MissingCipherKey)?;

        Ok(Self { key })
    }

    #[inline]
    fn shift(&self, i: usize, plain_letters: &[u8]) -> u8 {
        if i < self.key.len() {
            self.key.at(i)
        } else {
            plain_letters[i - self.key.len()]
        }
    }
}

impl Cipher for AutoKey {
    fn encrypt(&self, plain: &[u8]) -> Vec<u8> {
        let mut plain_letters = Vec::with_capacity(plain.len());
        substitute(plain, |p| {
            let k = self.shift(plain_letters.len(), &plain_letters);
            plain_letters.push(p);
            add(p, k)
        })
    }

    fn decrypt(&self, cipher: &[u8]) -> Vec<u8> {
        let mut recovered = Vec::with_capacity(cipher.len());
        substitute(cipher, |c| {
            let k = self.shift(recovered.len(), &recovered);
            let p = sub(c, k);
            recovered.push(p);
            p
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_encrypt_the_textbook_example() {
        let cipher = AutoKey::new("QUEENLY").unwrap();

        assert_eq!(
            cipher.encrypt(b"ATTACKATDAWN"),
            b"QNXEPVYTWTWP".to_vec()
        );
        assert_eq!(
            cipher.decrypt(b"QNXEPVYTWTWP"),
            b"ATTACKATDAWN".to_vec()
        );
    }

    #[test]
    fn should_continue_key_stream_across_non_letters() {
        let cipher = AutoKey::new("QUEENLY").unwrap();

        let encrypted = cipher.encrypt(b"attack, at dawn");
        assert_eq!(encrypted, b"QNXEPV, YT WTWP".to_vec());
        assert_eq!(cipher.decrypt(&encrypted), b"ATTACK, AT DAWN".to_vec());
    }

    #[test]
    fn should_handle_text_shorter_than_key() {
        let cipher = AutoKey::new("LONGERKEY").unwrap();

        assert_eq!(cipher.decrypt(&cipher.encrypt(b"HI")), b"HI".to_vec());
    }
}
