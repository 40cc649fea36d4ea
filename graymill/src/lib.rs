//! graymill - PPM to PGM conversion through a staged grayscale pipeline
//!
//! Decodes a binary color raster (PPM/P6), runs it through luminance
//! extraction, histogram equalization, gamma correction, 3x3 smoothing
//! and Otsu binarization, and encodes the result as a binary grayscale
//! raster (PGM/P5). Stages after luminance extraction are individually
//! switchable through [`PipelineConfig`].
//!
//! This crate re-exports the workspace members:
//!
//! - [`graymill_core`] - raster containers and histograms
//! - [`graymill_io`] - PNM decode/encode
//! - [`graymill_filter`] - the processing stages

pub mod pipeline;

pub use graymill_core::{GrayRaster, Histogram, Rgb, RgbRaster};
pub use graymill_filter::{Kernel3, binarize_otsu, convolve, equalize, gamma_correct, to_gray};
pub use graymill_io::{read_ppm, read_ppm_file, write_pgm, write_pgm_file};
pub use pipeline::{PipelineConfig, PipelineError, PipelineResult, process, run_file};
