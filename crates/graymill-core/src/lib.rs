//! graymill-core - Raster containers for the graymill pipeline
//!
//! This crate provides the data structures shared by every pipeline
//! stage:
//!
//! - [`RgbRaster`] - decoded color raster (row-major, 8 bits per channel)
//! - [`GrayRaster`] - single-channel 8-bit raster
//! - [`Histogram`] - 256-bin intensity histogram
//!
//! Buffers are owned values with an explicit length invariant
//! (`width * height`), handed off between stages rather than shared.

pub mod error;
pub mod histogram;
pub mod raster;

pub use error::{Error, Result};
pub use histogram::{Histogram, LEVELS};
pub use raster::{GrayRaster, Rgb, RgbRaster};
