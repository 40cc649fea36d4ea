//! graymill-io - Raster I/O for the graymill pipeline
//!
//! Decodes binary PPM (P6) color rasters and encodes binary PGM (P5)
//! grayscale rasters. All error conditions are fatal to a conversion;
//! there are no partial writes or retries.

mod error;
pub mod pnm;

pub use error::{IoError, IoResult};
pub use pnm::{read_ppm, read_ppm_file, write_pgm, write_pgm_file};
