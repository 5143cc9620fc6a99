//! Simulation settings for a pricing request.
//!
//! This module provides the validated request settings shared by every
//! estimator: path count, monitoring steps for path-dependent products, seed,
//! antithetic pairing and confidence level.

use pricer_core::types::PricingError;

/// Upper bound on `n_paths`.
pub const MAX_PATHS: usize = 10_000_000;

/// Upper bound on monitoring steps per path.
pub const MAX_STEPS: usize = 10_000;

/// Upper bound on `n_paths × n_steps` for time-stepped simulation.
pub const MAX_GRID_DRAWS: usize = 50_000_000;

/// Monitoring steps used for arithmetic Asian options when none are set.
pub const DEFAULT_ASIAN_STEPS: usize = 50;

/// Confidence level of reported intervals when none is set.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;

/// Validated path count, step count, seed, antithetic flag and confidence
/// level. Only [`MonteCarloConfigBuilder::build`] produces one.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(10_000)
///     .seed(42)
///     .antithetic(true)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 10_000);
/// assert_eq!(config.n_steps(), 50);
/// assert_eq!(config.confidence_level(), 0.95);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MonteCarloConfig {
    n_paths: usize,
    /// Number of monitoring steps per path (path-dependent products only).
    n_steps: usize,
    /// `None` seeds from entropy.
    seed: Option<u64>,
    /// Pair each draw with its negation.
    antithetic: bool,
    /// Two-sided confidence level of reported intervals.
    confidence_level: f64,
}

impl MonteCarloConfig {
    /// Starts a builder with every default applied.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Paths per estimate.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Monitoring steps per path for the Asian pricer.
    #[inline]
    pub fn n_steps(&self) -> usize {
        self.n_steps
    }

    /// Seed of the draw stream, if fixed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns true when draws are antithetically paired.
    #[inline]
    pub fn antithetic(&self) -> bool {
        self.antithetic
    }

    /// Returns the confidence level of reported intervals.
    #[inline]
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Checks every field against its bounds.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` if:
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_steps` is 0 or greater than [`MAX_STEPS`]
    /// - `confidence_level` is not in (0, 1)
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(PricingError::invalid_argument(format!(
                "n_paths {} outside [1, {}]",
                self.n_paths, MAX_PATHS
            )));
        }
        if self.n_steps == 0 || self.n_steps > MAX_STEPS {
            return Err(PricingError::invalid_argument(format!(
                "n_steps {} outside [1, {}]",
                self.n_steps, MAX_STEPS
            )));
        }
        validate_confidence_level(self.confidence_level)
    }

    /// Draws needed to simulate every path on the monitoring grid.
    ///
    /// Only the time-stepped Asian pricer needs the grid, so the bound is
    /// checked here rather than in [`MonteCarloConfig::validate`].
    ///
    /// # Errors
    ///
    /// See [`grid_len`].
    #[inline]
    pub fn grid_len(&self) -> Result<usize, PricingError> {
        grid_len(self.n_paths, self.n_steps)
    }
}

/// Length of an `n_paths × n_steps` draw grid.
///
/// # Errors
///
/// `PricingError::InvalidArgument` when the product overflows or exceeds
/// [`MAX_GRID_DRAWS`].
pub fn grid_len(n_paths: usize, n_steps: usize) -> Result<usize, PricingError> {
    n_paths
        .checked_mul(n_steps)
        .filter(|&len| len <= MAX_GRID_DRAWS)
        .ok_or_else(|| {
            PricingError::invalid_argument(format!(
                "{} paths × {} steps exceeds {} draws",
                n_paths, n_steps, MAX_GRID_DRAWS
            ))
        })
}

/// Checks that a confidence level lies strictly inside (0, 1).
pub(crate) fn validate_confidence_level(level: f64) -> Result<(), PricingError> {
    if level > 0.0 && level < 1.0 {
        Ok(())
    } else {
        Err(PricingError::invalid_argument(format!(
            "confidence level must be in (0, 1), got {}",
            level
        )))
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// `n_paths` is required; `n_steps` defaults to [`DEFAULT_ASIAN_STEPS`] and
/// `confidence_level` to [`DEFAULT_CONFIDENCE_LEVEL`].
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_paths: Option<usize>,
    n_steps: Option<usize>,
    seed: Option<u64>,
    antithetic: bool,
    confidence_level: Option<f64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the number of monitoring steps per path, in [1, 10_000].
    #[inline]
    pub fn n_steps(mut self, n_steps: usize) -> Self {
        self.n_steps = Some(n_steps);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables antithetic pairing.
    #[inline]
    pub fn antithetic(mut self, antithetic: bool) -> Self {
        self.antithetic = antithetic;
        self
    }

    /// Sets the two-sided confidence level, in (0, 1).
    #[inline]
    pub fn confidence_level(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::InvalidArgument` if `n_paths` is not set or
    /// any value is out of range.
    pub fn build(self) -> Result<MonteCarloConfig, PricingError> {
        let n_paths = self
            .n_paths
            .ok_or_else(|| PricingError::invalid_argument("n_paths must be specified"))?;

        let config = MonteCarloConfig {
            n_paths,
            n_steps: self.n_steps.unwrap_or(DEFAULT_ASIAN_STEPS),
            seed: self.seed,
            antithetic: self.antithetic,
            confidence_level: self.confidence_level.unwrap_or(DEFAULT_CONFIDENCE_LEVEL),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = MonteCarloConfig::builder().n_paths(10_000).build().unwrap();

        assert_eq!(config.n_paths(), 10_000);
        assert_eq!(config.n_steps(), DEFAULT_ASIAN_STEPS);
        assert_eq!(config.seed(), None);
        assert!(!config.antithetic());
        assert_eq!(config.confidence_level(), DEFAULT_CONFIDENCE_LEVEL);
    }

    #[test]
    fn test_config_builder_all_fields() {
        let config = MonteCarloConfig::builder()
            .n_paths(1000)
            .n_steps(12)
            .seed(42)
            .antithetic(true)
            .confidence_level(0.99)
            .build()
            .unwrap();

        assert_eq!(config.n_steps(), 12);
        assert_eq!(config.seed(), Some(42));
        assert!(config.antithetic());
        assert_eq!(config.confidence_level(), 0.99);
    }

    #[test]
    fn test_config_single_path_is_valid() {
        // variance-based estimators reject it later with InsufficientSamples
        assert!(MonteCarloConfig::builder().n_paths(1).build().is_ok());
    }

    #[test]
    fn test_config_invalid_zero_paths() {
        let result = MonteCarloConfig::builder().n_paths(0).build();
        assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
    }

    #[test]
    fn test_config_invalid_too_many_paths() {
        let result = MonteCarloConfig::builder().n_paths(MAX_PATHS + 1).build();
        assert!(matches!(result, Err(PricingError::InvalidArgument(_))));
    }

    #[test]
    fn test_config_invalid_steps() {
        assert!(MonteCarloConfig::builder().n_paths(10).n_steps(0).build().is_err());
        assert!(MonteCarloConfig::builder()
            .n_paths(10)
            .n_steps(MAX_STEPS + 1)
            .build()
            .is_err());
    }

    #[test]
    fn test_config_invalid_confidence_level() {
        for level in [0.0, 1.0, -0.5, 1.5, f64::NAN] {
            let result = MonteCarloConfig::builder()
                .n_paths(10)
                .confidence_level(level)
                .build();
            assert!(matches!(result, Err(PricingError::InvalidArgument(_))), "level {}", level);
        }
    }

    #[test]
    fn test_config_missing_paths() {
        let result = MonteCarloConfig::builder().n_steps(100).build();
        assert!(matches!(result, Err(PricingError::InvalidArgument(msg)) if msg.contains("n_paths")));
    }

    #[test]
    fn test_grid_len_bounded() {
        assert_eq!(grid_len(1_000, 50), Ok(50_000));
        assert_eq!(grid_len(MAX_GRID_DRAWS, 1), Ok(MAX_GRID_DRAWS));
        assert!(grid_len(MAX_GRID_DRAWS + 1, 1).unwrap_err().is_invalid_argument());
        assert!(grid_len(usize::MAX, 2).unwrap_err().is_invalid_argument());

        // both caps at once build fine for European pricing, not for the grid
        let config = MonteCarloConfig::builder()
            .n_paths(MAX_PATHS)
            .n_steps(MAX_STEPS)
            .build()
            .unwrap();
        assert!(config.grid_len().unwrap_err().is_invalid_argument());
    }
}
