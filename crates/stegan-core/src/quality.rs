//! Distortion introduced by hiding, measured as MSE and PSNR.

use std::fmt::{self, Display, Formatter};

use crate::error::SteganoError;
use crate::media::PixelBuffer;
use crate::result::Result;

const MAX_VALUE: f64 = 255.0;

/// Peak signal to noise ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Psnr {
    /// The images do not differ, the ratio is unbounded.
    Identical,
    Decibels(f64),
}

impl Psnr {
    pub fn from_mse(mse: f64) -> Self {
        if mse == 0.0 {
            Psnr::Identical
        } else {
            Psnr::Decibels(10.0 * (MAX_VALUE * MAX_VALUE / mse).log10())
        }
    }

    pub fn decibels(self) -> Option<f64> {
        match self {
            Psnr::Identical => None,
            Psnr::Decibels(db) => Some(db),
        }
    }
}

impl Display for Psnr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Psnr::Identical => write!(f, "identical"),
            Psnr::Decibels(db) => write!(f, "{db:.2} dB"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quality {
    pub mse: f64,
    pub psnr: Psnr,
}

/// Compares a candidate image against its reference.
///
/// Only the color channels count: the single channel of grayscale images or
/// the first three of RGB and RGBA. Images of different size or pixel layout
/// cannot be compared.
pub fn quality(reference: &PixelBuffer, candidate: &PixelBuffer) -> Result<Quality> {
    let mse = mse(reference, candidate)?;

    Ok(Quality {
        mse,
        psnr: Psnr::from_mse(mse),
    })
}

pub fn mse(reference: &PixelBuffer, candidate: &PixelBuffer) -> Result<f64> {
    if reference.dimensions() != candidate.dimensions() || reference.layout() != candidate.layout()
    {
        let (w1, h1) = reference.dimensions();
        let (w2, h2) = candidate.dimensions();
        return Err(SteganoError::SizeMismatch(w1, h1, w2, h2));
    }
    let pixels = reference.pixel_count();
    if pixels == 0 {
        return Ok(0.0);
    }

    let channels = reference.channels();
    let compared = reference.layout().compared_channels();
    let sum: u64 = reference
        .as_raw()
        .chunks_exact(channels)
        .zip(candidate.as_raw().chunks_exact(channels))
        .flat_map(|(a, b)| a[..compared].iter().zip(&b[..compared]))
        .map(|(&a, &b)| {
            let d = a.abs_diff(b) as u64;
            d * d
        })
        .sum();

    Ok(sum as f64 / compared as f64 / pixels as f64)
}
