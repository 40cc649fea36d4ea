//! Global thresholding
//!
//! Otsu's method: pick the threshold that minimizes the sum of
//! within-class intensity variances of the two partitions it induces,
//! then binarize the raster against it.

use crate::FilterResult;
use graymill_core::{GrayRaster, Histogram, LEVELS};

/// Highest candidate threshold considered by the scan.
const MAX_CANDIDATE: usize = 253;

/// Probability mass and weighted variance of the levels in `lo..=hi`.
///
/// Returns `omega` (total probability of the class) and
/// `omega * variance` (the class's contribution to the within-class
/// cost). An empty class contributes zero.
fn class_cost(counts: &[u64; LEVELS], total: f64, lo: usize, hi: usize) -> f64 {
    let mut omega = 0.0f64;
    let mut mean_acc = 0.0f64;
    for (level, &count) in counts.iter().enumerate().take(hi + 1).skip(lo) {
        let p = count as f64 / total;
        omega += p;
        mean_acc += level as f64 * p;
    }
    if omega <= 0.0 {
        return 0.0;
    }
    let mean = mean_acc / omega;

    let mut weighted_var = 0.0f64;
    for (level, &count) in counts.iter().enumerate().take(hi + 1).skip(lo) {
        let p = count as f64 / total;
        let d = level as f64 - mean;
        weighted_var += p * d * d;
    }
    weighted_var
}

/// Select the Otsu threshold for a histogram.
///
/// Every candidate `t` in `0..=253` splits the levels into background
/// `[0, t]` and foreground `[t+1, 255]`; the candidate with the smallest
/// `omega_b * var_b + omega_f * var_f` wins. Ties resolve to the
/// smallest `t` (the scan runs ascending and only a strictly smaller
/// cost replaces the incumbent).
pub fn otsu_threshold(hist: &Histogram) -> u8 {
    let counts = hist.counts();
    let total = hist.total() as f64;

    let mut best = 0usize;
    let mut best_cost = f64::INFINITY;
    for t in 0..=MAX_CANDIDATE {
        let cost =
            class_cost(counts, total, 0, t) + class_cost(counts, total, t + 1, LEVELS - 1);
        if cost < best_cost {
            best_cost = cost;
            best = t;
        }
    }
    best as u8
}

/// Binarize a raster against a threshold: intensities above `threshold`
/// become 255, all others 0.
pub fn binarize(src: &GrayRaster, threshold: u8) -> FilterResult<GrayRaster> {
    let mut out = GrayRaster::new(src.width(), src.height())?;
    for (dst, &value) in out.data_mut().iter_mut().zip(src.data()) {
        *dst = if value > threshold { 255 } else { 0 };
    }
    Ok(out)
}

/// Binarize a raster against its Otsu threshold.
///
/// Returns the binarized raster together with the selected threshold.
pub fn binarize_otsu(src: &GrayRaster) -> FilterResult<(GrayRaster, u8)> {
    let threshold = otsu_threshold(&Histogram::of(src));
    let out = binarize(src, threshold)?;
    Ok((out, threshold))
}
