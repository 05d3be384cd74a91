//! Error types for the standard-error study
//!
//! Provides a unified error type for all se-* crates.

use thiserror::Error;

/// Core error type for study operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function or configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a non-finite value
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} is NaN or infinite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("resamples must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: resamples must be positive");

        let err = Error::InvalidInput("empty sample".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty sample");

        let err = Error::InsufficientData { expected: 2, actual: 1 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 2 samples, got 1"
        );

        let err = Error::Computation("overflow".to_string());
        assert_eq!(err.to_string(), "Computation error: overflow");
    }

    #[test]
    fn test_error_helper_functions() {
        assert_eq!(
            Error::empty_input(),
            Error::InsufficientData { expected: 1, actual: 0 }
        );

        let err = Error::non_finite("standard deviation");
        assert_eq!(
            err.to_string(),
            "Computation error: standard deviation is NaN or infinite"
        );
    }
}
