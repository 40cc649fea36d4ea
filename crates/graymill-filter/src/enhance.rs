//! Tone remapping
//!
//! Histogram equalization and gamma correction, both expressed as
//! 256-entry lookup tables built once per stage and applied in a single
//! pass over the raster.

use crate::{FilterError, FilterResult};
use graymill_core::{GrayRaster, Histogram};

/// A 256-entry lookup table mapping input intensity to output intensity.
pub type GrayLut = [u8; 256];

/// The identity lookup table.
pub fn identity_lut() -> GrayLut {
    core::array::from_fn(|i| i as u8)
}

/// Build the histogram-equalization lookup table for a raster.
///
/// With `cum` the cumulative histogram, `gmin` the smallest populated
/// level and `hmin = cum[gmin]`, the table is
///
/// ```text
/// T[0] = 0
/// T[i] = round(255 * (cum[i] - hmin) / (N - hmin))   clamped to [0, 255]
/// ```
///
/// A raster holding a single constant value would make the divisor zero;
/// that case returns the identity table, since a uniform image is valid
/// input rather than an error. The resulting table is not guaranteed
/// monotonic for sparse histograms; the mapping is applied as computed.
pub fn equalize_lut(raster: &GrayRaster) -> GrayLut {
    let hist = Histogram::of(raster);
    let cum = hist.cumulative();
    let total = hist.total();
    let hmin = cum[hist.min_level() as usize];

    if total == hmin {
        return identity_lut();
    }

    let span = (total - hmin) as f64;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate().skip(1) {
        let scaled = 255.0 * (cum[i] as f64 - hmin as f64) / span;
        *entry = scaled.round().clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Build a gamma-correction lookup table:
/// `L[i] = round(255 * (i/255)^gamma)` clamped to `[0, 255]`.
///
/// `gamma` must be a positive finite number. `gamma == 1.0` yields the
/// identity table; larger values darken midtones, smaller values
/// brighten them.
pub fn gamma_lut(gamma: f32) -> FilterResult<GrayLut> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(FilterError::InvalidParameter(format!(
            "gamma must be positive, got {gamma}"
        )));
    }

    let gamma = gamma as f64;
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let mapped = 255.0 * (i as f64 / 255.0).powf(gamma);
        *entry = mapped.round().clamp(0.0, 255.0) as u8;
    }
    Ok(lut)
}

/// Remap every pixel of a raster through a lookup table, producing a new
/// raster of the same dimensions.
pub fn map_through(src: &GrayRaster, lut: &GrayLut) -> FilterResult<GrayRaster> {
    let mut out = GrayRaster::new(src.width(), src.height())?;
    for (dst, &value) in out.data_mut().iter_mut().zip(src.data()) {
        *dst = lut[value as usize];
    }
    Ok(out)
}

/// Equalize the intensity histogram of a raster.
pub fn equalize(src: &GrayRaster) -> FilterResult<GrayRaster> {
    let lut = equalize_lut(src);
    map_through(src, &lut)
}

/// Apply gamma correction to a raster.
pub fn gamma_correct(src: &GrayRaster, gamma: f32) -> FilterResult<GrayRaster> {
    let lut = gamma_lut(gamma)?;
    map_through(src, &lut)
}
