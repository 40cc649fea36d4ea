//! Error types for graymill-filter

use thiserror::Error;

/// Errors that can occur during a processing stage
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] graymill_core::Error),

    /// Invalid stage parameter
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
