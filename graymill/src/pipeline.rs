//! Pipeline orchestration
//!
//! Composes the processing stages in their fixed order: luminance
//! extraction, histogram equalization, gamma correction, smoothing,
//! binarization. Stage selection and parameters live in
//! [`PipelineConfig`]; the order itself is not configurable.
//!
//! Execution is single-threaded with a full-buffer barrier between
//! stages: the histogram stages and the convolution need the complete
//! previous buffer before any of their own output exists. Each stage
//! returns a fresh buffer and the previous one is dropped at the
//! rebinding, so no two stages ever alias a buffer.

use std::path::Path;

use graymill_core::{GrayRaster, RgbRaster};
use graymill_filter::{Kernel3, convolve, enhance, grayscale, threshold};
use thiserror::Error;
use tracing::{debug, info};

/// Stage selection and parameters for one conversion.
///
/// The default configuration runs the full pipeline: equalization,
/// gamma 2.0, uniform 3x3 smoothing, and Otsu binarization. Luminance
/// extraction always runs; it is what makes the output grayscale.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Apply histogram equalization.
    pub equalize: bool,
    /// Apply gamma correction with this exponent.
    pub gamma: Option<f32>,
    /// Convolve with this kernel.
    pub smooth: Option<Kernel3>,
    /// Apply Otsu binarization.
    pub binarize: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            equalize: true,
            gamma: Some(2.0),
            smooth: Some(Kernel3::mean()),
            binarize: true,
        }
    }
}

impl PipelineConfig {
    /// Plain grayscale conversion with every optional stage disabled.
    pub fn luminance_only() -> Self {
        PipelineConfig {
            equalize: false,
            gamma: None,
            smooth: None,
            binarize: false,
        }
    }
}

/// Error produced by a conversion run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Decoding or encoding failed
    #[error(transparent)]
    Io(#[from] graymill_io::IoError),

    /// A processing stage failed
    #[error(transparent)]
    Filter(#[from] graymill_filter::FilterError),

    /// A buffer could not be constructed
    #[error(transparent)]
    Core(#[from] graymill_core::Error),
}

/// Result type for pipeline runs.
pub type PipelineResult<T> = Result<T, PipelineError>;

/// Run the grayscale stages on a decoded color raster.
///
/// Dimensions are invariant through every stage; the returned raster has
/// the width and height of the input.
pub fn process(raster: &RgbRaster, config: &PipelineConfig) -> PipelineResult<GrayRaster> {
    let mut gray = grayscale::to_gray(raster)?;
    debug!(width = gray.width(), height = gray.height(), "luminance extracted");

    if config.equalize {
        gray = enhance::equalize(&gray)?;
        debug!("histogram equalized");
    }

    if let Some(gamma) = config.gamma {
        gray = enhance::gamma_correct(&gray, gamma)?;
        debug!(gamma, "gamma corrected");
    }

    if let Some(kernel) = &config.smooth {
        gray = convolve::convolve(&gray, kernel)?;
        debug!("smoothed");
    }

    if config.binarize {
        let (bilevel, selected) = threshold::binarize_otsu(&gray)?;
        debug!(threshold = selected, "binarized");
        gray = bilevel;
    }

    Ok(gray)
}

/// Convert a PPM file into a PGM file through the configured stages.
///
/// The destination is only opened once the source has been fully decoded
/// and processed, so a failed run performs no partial output writes.
pub fn run_file(
    source: &Path,
    destination: &Path,
    config: &PipelineConfig,
) -> PipelineResult<()> {
    let raster = graymill_io::read_ppm_file(source)?;
    info!(
        width = raster.width(),
        height = raster.height(),
        source = %source.display(),
        "decoded source raster"
    );

    let gray = process(&raster, config)?;

    graymill_io::write_pgm_file(destination, &gray)?;
    info!(destination = %destination.display(), "wrote grayscale raster");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graymill_core::Rgb;

    #[test]
    fn test_process_preserves_dimensions() {
        let raster = RgbRaster::new(13, 7).unwrap();
        let gray = process(&raster, &PipelineConfig::default()).unwrap();
        assert_eq!(gray.width(), 13);
        assert_eq!(gray.height(), 7);
    }

    #[test]
    fn test_luminance_only_white() {
        let raster = RgbRaster::from_pixels(2, 2, vec![Rgb::WHITE; 4]).unwrap();
        let gray = process(&raster, &PipelineConfig::luminance_only()).unwrap();
        assert_eq!(gray.data(), &[255, 255, 255, 255]);
    }

    #[test]
    fn test_default_pipeline_output_is_bilevel() {
        let pixels = (0..64)
            .map(|i| {
                let v = (i * 4) as u8;
                Rgb::new(v, v / 2, v)
            })
            .collect();
        let raster = RgbRaster::from_pixels(8, 8, pixels).unwrap();
        let gray = process(&raster, &PipelineConfig::default()).unwrap();
        assert!(gray.data().iter().all(|&v| v == 0 || v == 255));
    }

    #[test]
    fn test_default_pipeline_uniform_white_stays_white() {
        // Uniform raster exercises the equalizer's guarded identity path
        // end to end.
        let raster = RgbRaster::from_pixels(3, 3, vec![Rgb::WHITE; 9]).unwrap();
        let gray = process(&raster, &PipelineConfig::default()).unwrap();
        assert_eq!(gray.data(), &[255; 9]);
    }

    #[test]
    fn test_invalid_gamma_is_rejected() {
        let raster = RgbRaster::new(2, 2).unwrap();
        let config = PipelineConfig {
            gamma: Some(0.0),
            ..PipelineConfig::luminance_only()
        };
        assert!(matches!(
            process(&raster, &config),
            Err(PipelineError::Filter(_))
        ));
    }
}
