//! Error handling for sample construction.

use thiserror::Error;

/// Validation failures raised before any variate is drawn.
///
/// An unrecognized distribution kind is deliberately not an error: that path
/// constructs an un-drawn [`Sample`](crate::Sample) and logs a warning.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SampleError {
    #[error("sample size must be at least 2 to compute summary statistics, got {size}")]
    InvalidSize { size: usize },

    #[error("standard deviation must be finite and non-negative, got {std_dev}")]
    InvalidStdDev { std_dev: f64 },
}

/// Result type alias for sampling operations.
pub type Result<T> = std::result::Result<T, SampleError>;
