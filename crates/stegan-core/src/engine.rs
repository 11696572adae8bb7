//! Embedding and extraction of envelopes.
//!
//! Content is encrypted (when a password is given), framed into an
//! [`Envelope`] and written along the password permutation into the low bits
//! of the pixel channels. Extraction walks the same permutation twice: once
//! for the fixed size header and once for the whole envelope it announces.

use log::{debug, warn};

use crate::cipher::{Cipher, CipherKey, Vigenere, VigenereVariant};
use crate::error::SteganoError;
use crate::media::image::{LsbCodec, LsbDecoder, LsbEncoder};
use crate::media::payload::{Envelope, EnvelopeHeader, HEADER_LEN};
use crate::media::{BitDepth, PixelBuffer};
use crate::permutation::Permutation;
use crate::result::Result;

/// Capacity of `image` in bits at `bit_depth`.
pub fn capacity(image: &PixelBuffer, bit_depth: u8) -> Result<usize> {
    Ok(capacity_of(image, BitDepth::new(bit_depth)?))
}

/// Returns a new image with `filename` and `content` hidden inside.
///
/// The carrier is left untouched, also when the payload does not fit.
pub fn embed(
    image: &PixelBuffer,
    filename: &str,
    content: &[u8],
    password: &str,
    bit_depth: u8,
) -> Result<PixelBuffer> {
    hide(image, filename, content, password, BitDepth::new(bit_depth)?)
}

/// Recovers filename and content, `Ok(None)` when the image carries no
/// payload for this password and bit depth.
pub fn extract(
    image: &PixelBuffer,
    password: &str,
    bit_depth: u8,
) -> Result<Option<(String, Vec<u8>)>> {
    Ok(unveil(image, password, BitDepth::new(bit_depth)?)?.map(Envelope::into_parts))
}

pub(crate) fn capacity_of(image: &PixelBuffer, bit_depth: BitDepth) -> usize {
    LsbCodec::capacity(image, bit_depth)
}

pub(crate) fn hide(
    carrier: &PixelBuffer,
    filename: &str,
    content: &[u8],
    password: &str,
    bit_depth: BitDepth,
) -> Result<PixelBuffer> {
    let content = match content_cipher(password)? {
        Some(cipher) => cipher.encrypt(content),
        None => content.to_vec(),
    };
    let data = Envelope::new(filename, content).encode()?;

    let required = data.len() * 8;
    let available = capacity_of(carrier, bit_depth);
    if required > available {
        return Err(SteganoError::PayloadTooLarge {
            required,
            available,
        });
    }
    debug!("hiding {required} of {available} bits at bit depth {bit_depth}");

    let order = Permutation::from_password(password, carrier.pixel_count());
    let mut stego = carrier.clone();
    LsbEncoder::new(&mut stego, &order, bit_depth).hide(&data)?;

    Ok(stego)
}

pub(crate) fn unveil(
    carrier: &PixelBuffer,
    password: &str,
    bit_depth: BitDepth,
) -> Result<Option<Envelope>> {
    let order = Permutation::from_password(password, carrier.pixel_count());
    let decoder = LsbDecoder::new(carrier, &order, bit_depth);

    let Some(header) = decoder.unveil(HEADER_LEN) else {
        debug!("image is too small to hold an envelope header");
        return Ok(None);
    };
    let Some(header) = EnvelopeHeader::parse(&header) else {
        return Ok(None);
    };
    let Some(bytes) = header.envelope_len().and_then(|len| decoder.unveil(len)) else {
        warn!("envelope header announces {header:?}, more than the image holds");
        return Ok(None);
    };
    let Some(envelope) = Envelope::decode(&bytes) else {
        return Ok(None);
    };

    let (filename, content) = envelope.into_parts();
    let content = match content_cipher(password)? {
        Some(cipher) => cipher.decrypt(&content),
        None => content,
    };

    Ok(Some(Envelope::new(filename, content)))
}

/// Content is encrypted byte wise with the password, unless it is empty.
fn content_cipher(password: &str) -> Result<Option<Vigenere>> {
    if password.is_empty() {
        return Ok(None);
    }
    let key = CipherKey::from(password.as_bytes());

    Ok(Some(Vigenere::new(VigenereVariant::Extended, Some(key))?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::PixelLayout;
    use crate::test_utils::{prepare_5x5_image, prepare_noise_image};

    #[test]
    fn should_roundtrip_with_and_without_password() -> Result<()> {
        let image = prepare_noise_image(16, 16, PixelLayout::Rgb);

        for password in ["", "x", "Secret42"] {
            let stego = embed(&image, "note.txt", b"Hello World!", password, 1)?;

            assert_eq!(
                extract(&stego, password, 1)?,
                Some(("note.txt".to_string(), b"Hello World!".to_vec()))
            );
        }

        Ok(())
    }

    #[test]
    fn should_encrypt_content_but_not_filename() -> Result<()> {
        let image = prepare_noise_image(16, 16, PixelLayout::Rgba);
        let stego = embed(&image, "plain.txt", b"secret", "pw", 2)?;

        let order = Permutation::from_password("pw", image.pixel_count());
        let raw = LsbDecoder::new(&stego, &order, BitDepth::new(2)?)
            .unveil(HEADER_LEN + 9 + 6)
            .expect("enough channels");

        assert_eq!(&raw[HEADER_LEN..HEADER_LEN + 9], b"plain.txt");
        assert_ne!(&raw[HEADER_LEN + 9..], b"secret");

        Ok(())
    }

    #[test]
    fn should_reject_invalid_bit_depths() {
        let image = prepare_5x5_image();

        for bits in [0, 5] {
            assert!(matches!(
                embed(&image, "a", b"b", "", bits),
                Err(SteganoError::InvalidBitDepth(b)) if b == bits
            ));
            assert!(matches!(
                extract(&image, "", bits),
                Err(SteganoError::InvalidBitDepth(b)) if b == bits
            ));
            assert!(matches!(
                capacity(&image, bits),
                Err(SteganoError::InvalidBitDepth(b)) if b == bits
            ));
        }
    }

    #[test]
    fn should_report_payload_too_large_before_embedding() {
        // 5x5 RGBA at one bit: 100 bits, the bare header already takes 64
        let image = prepare_5x5_image();

        assert!(matches!(
            embed(&image, "abc", b"de", "", 1),
            Err(SteganoError::PayloadTooLarge {
                required: 104,
                available: 100
            })
        ));
    }

    #[test]
    fn should_find_nothing_in_tiny_images() -> Result<()> {
        // 2x2 gray at 4 bits holds 16 bits, less than a header
        let image = PixelBuffer::from_fn(2, 2, PixelLayout::Luma, |_, _, _| 0xff);

        assert_eq!(extract(&image, "", 4)?, None);
        assert_eq!(extract(&image, "pw", 1)?, None);

        Ok(())
    }

    #[test]
    fn should_find_nothing_when_header_announces_too_much() -> Result<()> {
        // magic followed by a content length way beyond the image
        let mut data = Vec::new();
        EnvelopeHeader {
            filename_len: 0,
            content_len: u32::MAX,
        }
        .write_to(&mut data)?;

        let mut image = prepare_noise_image(8, 8, PixelLayout::Rgb);
        let order = Permutation::from_password("", image.pixel_count());
        LsbEncoder::new(&mut image, &order, BitDepth::default()).hide(&data)?;

        assert_eq!(extract(&image, "", 1)?, None);

        Ok(())
    }
}
