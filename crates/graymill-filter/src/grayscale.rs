//! Color-to-grayscale conversion
//!
//! Maps each color pixel to one intensity with the standard luminance
//! weights 0.299/0.587/0.114. The bulk of the buffer goes through a
//! fixed-point lane path (weights scaled to /256, eight pixels per
//! batch); the remainder after the last full batch uses the scalar
//! floating-point formula. The two paths agree within one intensity
//! level for every input, which the tests assert as an invariant.

use crate::FilterResult;
use graymill_core::{GrayRaster, Rgb, RgbRaster};

/// Batch width of the fixed-point conversion loop.
pub const LANE_WIDTH: usize = 8;

// Luminance weights scaled by 256: 0.299, 0.587, 0.114.
const WR: u32 = 77;
const WG: u32 = 150;
const WB: u32 = 29;

/// Weighted luminance of one pixel, floating-point reference formula:
/// `round(0.299*R + 0.587*G + 0.114*B)` clamped to `[0, 255]`.
#[inline]
pub fn luminance(pixel: Rgb) -> u8 {
    let sum = 0.299 * pixel.r as f32 + 0.587 * pixel.g as f32 + 0.114 * pixel.b as f32;
    sum.round().clamp(0.0, 255.0) as u8
}

/// Fixed-point luminance: `(77*R + 150*G + 29*B) >> 8`.
///
/// The weights sum to exactly 256, so white maps to 255 and the result
/// never exceeds 255 (no clamp needed). Within ±1 of [`luminance`].
#[inline]
pub fn luminance_fixed(pixel: Rgb) -> u8 {
    ((WR * pixel.r as u32 + WG * pixel.g as u32 + WB * pixel.b as u32) >> 8) as u8
}

/// Convert a color raster to a grayscale raster of the same dimensions.
///
/// Runs [`LANE_WIDTH`]-pixel batches through the fixed-point formula and
/// finishes the `len % LANE_WIDTH` tail with the scalar floating-point
/// formula. Each output pixel depends only on the pixel at the same
/// index.
pub fn to_gray(src: &RgbRaster) -> FilterResult<GrayRaster> {
    let mut out = GrayRaster::new(src.width(), src.height())?;

    let pixels = src.pixels();
    let data = out.data_mut();

    let batches = pixels.len() / LANE_WIDTH * LANE_WIDTH;
    for (dst, batch) in data
        .chunks_exact_mut(LANE_WIDTH)
        .zip(pixels.chunks_exact(LANE_WIDTH))
    {
        for lane in 0..LANE_WIDTH {
            dst[lane] = luminance_fixed(batch[lane]);
        }
    }

    // Scalar fallback for the remaining pixels.
    for (dst, &pixel) in data[batches..].iter_mut().zip(&pixels[batches..]) {
        *dst = luminance(pixel);
    }

    Ok(out)
}
