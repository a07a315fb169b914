//! Distortion between a carrier and its modified counterpart.
//!
//! All measures require both images to have the same dimensions and report
//! `0.0` for two empty images.

use std::fmt;

use image::{Rgb, RgbImage};
use log::debug;

use crate::{HuffstegoError, Result};

/// The three distortion measures of one carrier / stego image pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistortionMetrics {
    pub percent_difference: f64,
    pub norm_l1: f64,
    pub norm_l2: f64,
}

impl DistortionMetrics {
    pub fn measure(original: &RgbImage, modified: &RgbImage) -> Result<Self> {
        let metrics = Self {
            percent_difference: percent_difference(original, modified)?,
            norm_l1: norm_l1(original, modified)?,
            norm_l2: norm_l2(original, modified)?,
        };
        debug!("measured distortion: {metrics:?}");

        Ok(metrics)
    }
}

impl fmt::Display for DistortionMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "L1 norm between carrier and stego image: {}", self.norm_l1)?;
        writeln!(f, "L2 norm between carrier and stego image: {}", self.norm_l2)?;
        write!(f, "Difference: {}%", self.percent_difference)
    }
}

/// `100 × Σ|luma(a) - luma(b)| / pixel count`
///
/// Note that the value is not bounded by 100, a completely inverted image
/// scores far above.
pub fn percent_difference(a: &RgbImage, b: &RgbImage) -> Result<f64> {
    ensure_same_dimensions(a, b)?;
    let pixel_count = a.width() as usize * a.height() as usize;
    if pixel_count == 0 {
        return Ok(0.0);
    }

    let sum: u64 = a
        .pixels()
        .zip(b.pixels())
        .map(|(pa, pb)| u64::from(luma(pa).abs_diff(luma(pb))))
        .sum();

    Ok(sum as f64 / pixel_count as f64 * 100.0)
}

/// mean absolute difference over all channels
pub fn norm_l1(a: &RgbImage, b: &RgbImage) -> Result<f64> {
    ensure_same_dimensions(a, b)?;
    if a.is_empty() {
        return Ok(0.0);
    }

    let sum: u64 = channel_differences(a, b).map(u64::from).sum();

    Ok(sum as f64 / a.len() as f64)
}

/// root of the mean squared difference over all channels
pub fn norm_l2(a: &RgbImage, b: &RgbImage) -> Result<f64> {
    ensure_same_dimensions(a, b)?;
    if a.is_empty() {
        return Ok(0.0);
    }

    let sum: u64 = channel_differences(a, b)
        .map(|d| u64::from(d) * u64::from(d))
        .sum();

    Ok((sum as f64 / a.len() as f64).sqrt())
}

fn ensure_same_dimensions(a: &RgbImage, b: &RgbImage) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(HuffstegoError::SizeMismatch(
            a.width(),
            a.height(),
            b.width(),
            b.height(),
        ));
    }
    Ok(())
}

fn channel_differences<'a>(a: &'a RgbImage, b: &'a RgbImage) -> impl Iterator<Item = u8> + 'a {
    a.iter().zip(b.iter()).map(|(ca, cb)| ca.abs_diff(*cb))
}

/// BT.601 luma in 14 bit fixed point, rounded to the nearest byte
fn luma(p: &Rgb<u8>) -> u8 {
    const R: u32 = 4899;
    const G: u32 = 9617;
    const B: u32 = 1868;
    let [r, g, b] = p.0;
    let y = (u32::from(r) * R + u32::from(g) * G + u32::from(b) * B + (1 << 13)) >> 14;
    y as u8
}
