//! # Stegan Core API
//!
//! Hides a file (its name and content) in the least significant bits of the
//! pixels of an image. The pixels are visited in an order derived from a
//! password and the content is encrypted with it, so only someone with the
//! same password and bit depth gets the file back.
//!
//! The core works on decoded [`PixelBuffer`]s:
//! - [`capacity`] tells how many bits an image can hold
//! - [`embed`] returns a new image with the payload inside
//! - [`extract`] gets it back, or `None`
//! - [`quality()`] measures the distortion as MSE and PSNR
//!
//! The [`api`] module wraps all of that for image files on disk.
//!
//! # Usage Examples
//!
//! ## Hide data inside an image
//!
//! ```rust
//! use stegan_core::{embed, extract, PixelBuffer, PixelLayout};
//!
//! let carrier = PixelBuffer::from_fn(32, 32, PixelLayout::Rgb, |x, y, c| {
//!     (x * 7 + y * 3 + c as u32) as u8
//! });
//!
//! let secret = embed(&carrier, "hello.txt", b"Hello, World!", "SuperSecret42", 2)
//!     .expect("Failed to hide message in image");
//!
//! let (filename, content) = extract(&secret, "SuperSecret42", 2)
//!     .expect("Failed to unveil message from image")
//!     .expect("No message found");
//! assert_eq!(filename, "hello.txt");
//! assert_eq!(content, b"Hello, World!");
//! ```
//!
//! ## Measure the distortion
//!
//! ```rust
//! use stegan_core::{embed, quality, PixelBuffer, PixelLayout, Psnr};
//!
//! let carrier = PixelBuffer::from_fn(32, 32, PixelLayout::Luma, |x, y, _| (x ^ y) as u8);
//! let secret = embed(&carrier, "a", b"b", "", 1).unwrap();
//!
//! let q = quality(&carrier, &secret).unwrap();
//! assert!(matches!(q.psnr, Psnr::Decibels(db) if db > 40.0));
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod cipher;
mod engine;
pub mod error;
pub mod media;
pub mod permutation;
pub mod prng;
pub mod quality;
pub mod result;

pub use crate::engine::{capacity, embed, extract};
pub use crate::error::SteganoError;
pub use crate::media::{
    BitDepth, CodecOptions, LsbCodecOptions, Media, Persist, PixelBuffer, PixelLayout,
};
pub use crate::quality::{quality, Psnr, Quality};
pub use crate::result::Result;

/// Filename a plain text message is stored under.
pub const SECRET_MESSAGE_FILENAME: &str = "secret-message.txt";

#[cfg(test)]
mod test_utils {
    use crate::media::{PixelBuffer, PixelLayout};
    use crate::prng::seeded;

    /// This image has some traits:
    /// --------------x-------------
    /// | 0,0 -> (0, 1, 2, 3 ) | 1,0 -> (4, 5, 6, 7 ) | ...
    /// | 0,1 -> (20,21,22,23) | 1,1 -> (24,25,26,27) | ...
    /// | 0,2 -> (40,41,42,43) | 1,2 -> (44,45,46,47) | ...
    /// y ...
    pub fn prepare_5x5_image() -> PixelBuffer {
        PixelBuffer::from_fn(5, 5, PixelLayout::Rgba, |x, y, c| {
            (4 * x + 20 * y) as u8 + c as u8
        })
    }

    /// Deterministic noise, looks like a photo to the low bits.
    pub fn prepare_noise_image(width: u32, height: u32, layout: PixelLayout) -> PixelBuffer {
        let mut rng = seeded(u64::from(width) << 32 | u64::from(height));
        PixelBuffer::from_fn(width, height, layout, |_, _, _| rng.u8(..))
    }
}
