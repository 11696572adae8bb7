//! The 26 letter alphabet shared by all text variants.
//!
//! Text is processed as UTF-8 bytes. Only ASCII letters are substituted, every
//! other byte is copied, so multi byte characters survive untouched and the
//! output stays valid UTF-8.

pub(crate) const ALPHABET_LEN: u8 = 26;

/// Position of an ASCII letter in `A..=Z`, lower case letters are folded to upper case.
#[inline]
pub(crate) fn letter_index(symbol: u8) -> Option<u8> {
    let upper = symbol.to_ascii_uppercase();
    upper.is_ascii_uppercase().then(|| upper - b'A')
}

#[inline]
pub(crate) fn letter(index: u8) -> u8 {
    b'A' + index
}

/// Reduces a text to the alphabet positions of its letters.
pub(crate) fn key_stream(text: &str) -> Vec<u8> {
    text.bytes().filter_map(letter_index).collect()
}

/// Maps every letter of `input` through `shift`, in order of appearance.
///
/// `shift` is only called for letters, so non letters never consume key material.
pub(crate) fn substitute<F>(input: &[u8], mut shift: F) -> Vec<u8>
where
    F: FnMut(u8) -> u8,
{
    input
        .iter()
        .map(|&symbol| match letter_index(symbol) {
            Some(position) => letter(shift(position)),
            None => symbol,
        })
        .collect()
}

#[inline]
pub(crate) fn add(position: u8, shift: u8) -> u8 {
    (position + shift) % ALPHABET_LEN
}

#[inline]
pub(crate) fn sub(position: u8, shift: u8) -> u8 {
    (position + ALPHABET_LEN - shift) % ALPHABET_LEN
}

/// A key stream that wraps around at its end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RepeatingKey(Vec<u8>);

impl RepeatingKey {
    /// `None` when the text holds no letters at all.
    pub fn from_text(text: &str) -> Option<Self> {
        let stream = key_stream(text);
        (!stream.is_empty()).then_some(Self(stream))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn at(&self, i: usize) -> u8 {
        self.0[i % self.0.len()]
    }

    pub fn encrypt(&self, plain: &[u8]) -> Vec<u8> {
        let mut i = 0;
        substitute(plain, |p| {
            let k = self.at(i);
            i += 1;
            add(p, k)
        })
    }

    pub fn decrypt(&self, cipher: &[u8]) -> Vec<u8> {
        let mut i = 0;
        substitute(cipher, |c| {
            let k = self.at(i);
            i += 1;
            sub(c, k)
        })
    }
}
