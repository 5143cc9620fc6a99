//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The error taxonomy shared by every pricing entry point
//! - `PricingResult`: Convenience alias for `Result<T, PricingError>`
//!
//! Errors signal caller misuse, never transient faults: they are returned
//! before any simulation work starts and are never retried internally.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidArgument`: A precondition on an input was violated
///   (non-positive spot or strike, negative volatility or maturity, zero path
///   or step count, non-positive bump size, confidence level outside (0, 1))
/// - `InsufficientSamples`: Fewer samples than a variance estimate needs
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_argument("spot must be > 0");
/// assert_eq!(format!("{}", err), "Invalid argument: spot must be > 0");
///
/// let err = PricingError::InsufficientSamples { required: 2, actual: 1 };
/// assert_eq!(
///     format!("{}", err),
///     "Insufficient samples: need at least 2, got 1"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Violated precondition on an input parameter.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Not enough samples to estimate a variance.
    #[error("Insufficient samples: need at least {required}, got {actual}")]
    InsufficientSamples {
        /// Minimum number of samples required
        required: usize,
        /// Number of samples supplied
        actual: usize,
    },
}

impl PricingError {
    /// Creates an `InvalidArgument` error.
    #[inline]
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Creates an `InsufficientSamples` error.
    #[inline]
    pub fn insufficient_samples(required: usize, actual: usize) -> Self {
        Self::InsufficientSamples { required, actual }
    }

    /// Returns true for `InvalidArgument`.
    #[inline]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }

    /// Returns true for `InsufficientSamples`.
    #[inline]
    pub fn is_insufficient_samples(&self) -> bool {
        matches!(self, Self::InsufficientSamples { .. })
    }
}

/// Result alias used by every fallible pricing operation.
pub type PricingResult<T> = Result<T, PricingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PricingError::invalid_argument("K must be > 0");
        assert_eq!(format!("{}", err), "Invalid argument: K must be > 0");
        assert!(err.is_invalid_argument());
        assert!(!err.is_insufficient_samples());
    }

    #[test]
    fn test_insufficient_samples_display() {
        let err = PricingError::insufficient_samples(2, 1);
        assert_eq!(
            format!("{}", err),
            "Insufficient samples: need at least 2, got 1"
        );
        assert!(err.is_insufficient_samples());
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::invalid_argument("sigma must be >= 0");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::insufficient_samples(2, 0);
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
