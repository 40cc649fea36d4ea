//! Intensity histograms
//!
//! Occurrence counts over the 256 gray levels of a raster. The histogram
//! is an owned value scoped to the stage that builds it; stages pass it
//! by reference to their helpers and drop it with the call frame.

use crate::raster::GrayRaster;

/// Number of representable gray levels.
pub const LEVELS: usize = 256;

/// Occurrence counts for each of the 256 gray levels of a raster.
///
/// The sum of all counts equals the pixel count of the raster the
/// histogram was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    counts: [u64; LEVELS],
}

impl Histogram {
    /// Count the intensities of a grayscale raster.
    pub fn of(raster: &GrayRaster) -> Self {
        let mut counts = [0u64; LEVELS];
        for &value in raster.data() {
            counts[value as usize] += 1;
        }
        Histogram { counts }
    }

    #[inline]
    pub fn counts(&self) -> &[u64; LEVELS] {
        &self.counts
    }

    /// Occurrence count of one gray level.
    #[inline]
    pub fn count(&self, level: u8) -> u64 {
        self.counts[level as usize]
    }

    /// Total number of counted pixels.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Cumulative counts: `cumulative()[i]` is the number of pixels with
    /// intensity `<= i`.
    pub fn cumulative(&self) -> [u64; LEVELS] {
        let mut cumulative = [0u64; LEVELS];
        let mut running = 0u64;
        for (bin, &count) in cumulative.iter_mut().zip(self.counts.iter()) {
            running += count;
            *bin = running;
        }
        cumulative
    }

    /// Smallest gray level with a nonzero count.
    ///
    /// A raster always has at least one pixel, so some bin is populated.
    pub fn min_level(&self) -> u8 {
        self.counts
            .iter()
            .position(|&count| count > 0)
            .unwrap_or(0) as u8
    }
}
