//! Monte Carlo estimate with its statistical metadata.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use pricer_core::types::PricingError;

use super::config::MonteCarloConfig;
use super::estimator::{confidence_interval, mean_and_std_error};

/// Variance-reduction control applied to an estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ControlKind {
    /// Plain sample mean.
    #[default]
    None,
    /// Discounted terminal underlying e^{-rT}·S_T with known mean S0·e^{-qT}.
    DiscountedUnderlying,
}

impl ControlKind {
    /// Label used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ControlKind::None => "none",
            ControlKind::DiscountedUnderlying => "discounted_underlying",
        }
    }
}

/// Monte Carlo estimate of a price or a Greek.
///
/// When `std_error > 0` the interval satisfies `ci_low <= estimate <= ci_high`;
/// when `std_error == 0` all three are equal.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{EstimateResult, MonteCarloConfig};
///
/// let config = MonteCarloConfig::builder().n_paths(4).seed(1).build().unwrap();
/// let result = EstimateResult::from_samples(&[1.0, 2.0, 3.0, 4.0], &config).unwrap();
///
/// assert_eq!(result.estimate, 2.5);
/// assert!(result.contains(2.5));
/// assert_eq!(result.seed, Some(1));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EstimateResult {
    /// Point estimate.
    pub estimate: f64,
    /// Standard error of the estimate.
    pub std_error: f64,
    /// Lower bound of the confidence interval.
    pub ci_low: f64,
    /// Upper bound of the confidence interval.
    pub ci_high: f64,
    /// Two-sided confidence level of the interval.
    pub confidence_level: f64,
    /// Number of simulated paths.
    pub n_paths: usize,
    /// Seed of the draws, if one was supplied.
    pub seed: Option<u64>,
    /// Whether the draws were antithetically paired.
    pub antithetic: bool,
    /// Control variate applied.
    pub control: ControlKind,
    /// Control-variate coefficient β, when a control was applied.
    pub beta: Option<f64>,
}

impl EstimateResult {
    /// Aggregates per-path samples under the given configuration.
    ///
    /// # Errors
    ///
    /// - `PricingError::InsufficientSamples` for fewer than 2 samples
    /// - `PricingError::InvalidArgument` for an invalid confidence level
    pub fn from_samples(samples: &[f64], config: &MonteCarloConfig) -> Result<Self, PricingError> {
        let (estimate, std_error) = mean_and_std_error(samples)?;
        let (ci_low, ci_high) =
            confidence_interval(estimate, std_error, config.confidence_level())?;

        Ok(Self {
            estimate,
            std_error,
            ci_low,
            ci_high,
            confidence_level: config.confidence_level(),
            n_paths: samples.len(),
            seed: config.seed(),
            antithetic: config.antithetic(),
            control: ControlKind::None,
            beta: None,
        })
    }

    /// Tags the result with the control variate that produced it.
    #[inline]
    pub fn with_control(mut self, control: ControlKind, beta: f64) -> Self {
        self.control = control;
        self.beta = Some(beta);
        self
    }

    /// Confidence interval as a tuple.
    #[inline]
    pub fn ci(&self) -> (f64, f64) {
        (self.ci_low, self.ci_high)
    }

    /// Half-width of the confidence interval.
    #[inline]
    pub fn half_width(&self) -> f64 {
        0.5 * (self.ci_high - self.ci_low)
    }

    /// Returns true if `value` lies in the closed confidence interval.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.ci_low <= value && value <= self.ci_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::estimator::Z_95;
    use approx::assert_relative_eq;

    fn config(n: usize) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_paths(n)
            .seed(3)
            .antithetic(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_from_samples_metadata() {
        let result = EstimateResult::from_samples(&[1.0, 3.0], &config(2)).unwrap();

        assert_eq!(result.estimate, 2.0);
        assert_relative_eq!(result.std_error, 1.0, epsilon = 1e-15);
        assert_relative_eq!(result.half_width(), Z_95, epsilon = 1e-12);
        assert_eq!(result.n_paths, 2);
        assert_eq!(result.seed, Some(3));
        assert!(result.antithetic);
        assert_eq!(result.control, ControlKind::None);
        assert_eq!(result.beta, None);
    }

    #[test]
    fn test_zero_error_collapses_interval() {
        let result = EstimateResult::from_samples(&[4.2; 5], &config(5)).unwrap();
        assert_eq!(result.std_error, 0.0);
        assert_eq!(result.ci(), (4.2, 4.2));
        assert!(result.contains(4.2));
        assert!(!result.contains(4.2 + 1e-12));
    }

    #[test]
    fn test_with_control() {
        let result = EstimateResult::from_samples(&[1.0, 2.0], &config(2))
            .unwrap()
            .with_control(ControlKind::DiscountedUnderlying, 0.4);
        assert_eq!(result.control, ControlKind::DiscountedUnderlying);
        assert_eq!(result.beta, Some(0.4));
        assert_eq!(result.control.as_str(), "discounted_underlying");
    }

    #[test]
    fn test_single_sample_rejected() {
        assert_eq!(
            EstimateResult::from_samples(&[1.0], &config(1)),
            Err(PricingError::InsufficientSamples { required: 2, actual: 1 })
        );
    }
}
