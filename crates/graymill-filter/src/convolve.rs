//! Spatial convolution
//!
//! 3x3 convolution over a grayscale raster with replicate (clamp) border
//! handling: out-of-bounds neighbor coordinates are clamped to the
//! nearest in-bounds coordinate along each axis independently, so edges
//! are never darkened by implicit zero padding.

use crate::{FilterResult, Kernel3};
use graymill_core::GrayRaster;

/// Convolve a grayscale raster with a 3x3 kernel.
///
/// Each output pixel is the kernel-weighted sum of its 3x3 neighborhood,
/// accumulated in floating point and rounded and clamped to `[0, 255]`
/// exactly once at the end. The output is always a fresh buffer: the
/// neighborhood reads make in-place computation impossible.
///
/// A 1x1 raster convolves against its single pixel sampled nine times.
pub fn convolve(src: &GrayRaster, kernel: &Kernel3) -> FilterResult<GrayRaster> {
    let w = src.width();
    let h = src.height();
    let mut out = GrayRaster::new(w, h)?;

    let wi = w as i64;
    let hi = h as i64;
    for y in 0..h {
        for x in 0..w {
            let mut sum = 0.0f32;
            for dy in -1i64..=1 {
                let sy = (y as i64 + dy).clamp(0, hi - 1) as usize;
                for dx in -1i64..=1 {
                    let sx = (x as i64 + dx).clamp(0, wi - 1) as usize;
                    sum += kernel.get(dx as i32, dy as i32) * src.get(sx, sy) as f32;
                }
            }
            out.set(x, y, sum.round().clamp(0.0, 255.0) as u8);
        }
    }

    Ok(out)
}
