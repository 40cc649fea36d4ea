//! Error types for graymill-core
//!
//! Provides a unified error type for raster construction and buffer
//! handling. Each variant captures enough context for diagnostics.

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster dimensions
    #[error("invalid raster dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Pixel data length does not match the declared dimensions
    #[error("raster data length mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Buffer allocation failed
    #[error("raster allocation failed")]
    AllocationFailed,
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, Error>;
