//! I/O error types
//!
//! Provides a unified error type for raster decoding and encoding.
//! Every condition is fatal to the conversion; callers report the
//! message and stop.

use thiserror::Error;

/// Error type for raster I/O operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// Standard I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while the header was still being scanned
    #[error("unexpected end of input while reading header")]
    TruncatedHeader,

    /// Payload read completed with fewer bytes than the header declared
    #[error("unexpected end of input: expected {expected} payload bytes, got {actual}")]
    UnexpectedEof { expected: usize, actual: usize },

    /// Header does not begin with the expected magic token
    #[error("bad file format: expected magic \"P6\", got {0:?}")]
    BadMagic(String),

    /// A header token failed to parse as the expected integer
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// Structurally valid input that this converter does not handle
    #[error("unsupported input: {0}")]
    Unsupported(String),

    /// An error from the core library (dimension or allocation failure)
    #[error("core error: {0}")]
    Core(#[from] graymill_core::Error),
}

/// Convenience alias for I/O results.
pub type IoResult<T> = Result<T, IoError>;
