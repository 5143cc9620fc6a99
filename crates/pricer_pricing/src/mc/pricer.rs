//! Monte Carlo pricing engine.
//!
//! The [`MonteCarloPricer`] coordinates:
//! 1. Normal draws (via [`standard_normals`] / [`standard_normal_grid`])
//! 2. State simulation (via [`simulate_terminal`] / [`simulate_paths`])
//! 3. Payoff evaluation and discounting
//! 4. Aggregation into an [`EstimateResult`]
//!
//! Sensitivities are added to the same type in [`crate::greeks`].
//!
//! Degenerate regimes (T = 0 or σ = 0) still consume their draws so that the
//! random stream of a request does not depend on the parameter values.

use pricer_core::types::{ModelParameters, OptionType, PricingError};
use rayon::prelude::*;

use super::config::MonteCarloConfig;
use super::estimator::{apply_control_variate, MIN_SAMPLES};
use super::paths::{simulate_paths, simulate_terminal, GbmParams};
use super::payoff::{asian_arithmetic_payoffs, vanilla_payoffs, PayoffParams};
use super::result::{ControlKind, EstimateResult};
use crate::rng::{standard_normal_grid, standard_normals};

/// Monte Carlo pricer for options on a GBM underlying.
///
/// Holds an immutable, validated [`MonteCarloConfig`]; every call is an
/// independent pure computation, so one pricer can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ModelParameters, OptionType};
/// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
///
/// let config = MonteCarloConfig::builder()
///     .n_paths(20_000)
///     .seed(42)
///     .antithetic(true)
///     .build()
///     .unwrap();
/// let pricer = MonteCarloPricer::new(config);
///
/// let params = ModelParameters::new(100.0, 100.0, 0.02, 0.01, 0.2, 1.0).unwrap();
/// let call = pricer.price_european(&params, OptionType::Call).unwrap();
///
/// assert!(call.estimate > 0.0);
/// assert!(call.ci_low <= call.estimate && call.estimate <= call.ci_high);
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloPricer {
    config: MonteCarloConfig,
}

impl MonteCarloPricer {
    /// Creates a pricer from a validated configuration.
    #[inline]
    pub fn new(config: MonteCarloConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &MonteCarloConfig {
        &self.config
    }

    /// Fails with `InsufficientSamples` before any simulation work when the
    /// configured path count cannot support a standard error.
    pub(crate) fn ensure_estimable(&self) -> Result<(), PricingError> {
        let n = self.config.n_paths();
        if n < MIN_SAMPLES {
            return Err(PricingError::insufficient_samples(MIN_SAMPLES, n));
        }
        Ok(())
    }

    /// One standard normal per path, honouring seed and antithetic pairing.
    pub(crate) fn terminal_normals(&self) -> Result<Vec<f64>, PricingError> {
        standard_normals(
            self.config.n_paths(),
            self.config.seed(),
            self.config.antithetic(),
        )
    }

    /// Aggregates per-path samples under this pricer's configuration.
    #[inline]
    pub(crate) fn summarise(&self, samples: &[f64]) -> Result<EstimateResult, PricingError> {
        EstimateResult::from_samples(samples, &self.config)
    }

    /// Prices a European option.
    ///
    /// Per path: e^{-rT}·payoff(S_T). Returns the sample mean with its
    /// standard error and confidence interval.
    ///
    /// # Errors
    ///
    /// - `PricingError::InsufficientSamples` when `n_paths < 2`
    /// - `PricingError::InvalidArgument` for invalid inputs
    pub fn price_european(
        &self,
        params: &ModelParameters,
        option: OptionType,
    ) -> Result<EstimateResult, PricingError> {
        self.ensure_estimable()?;
        let gbm = GbmParams::from(params);
        let payoff = PayoffParams::new(option, params.strike());

        let terminal = simulate_terminal(&gbm, &self.terminal_normals()?)?;
        let discounted = discount(&vanilla_payoffs(&terminal, payoff)?, gbm.discount_factor());

        self.summarise(&discounted)
    }

    /// Prices a European option with the discounted terminal underlying as
    /// control variate.
    ///
    /// The control e^{-rT}·S_T has known expectation S₀·e^{-qT}. The result
    /// carries [`ControlKind::DiscountedUnderlying`] and the fitted β.
    ///
    /// # Errors
    ///
    /// - `PricingError::InsufficientSamples` when `n_paths < 2`
    /// - `PricingError::InvalidArgument` for invalid inputs
    pub fn price_european_cv(
        &self,
        params: &ModelParameters,
        option: OptionType,
    ) -> Result<EstimateResult, PricingError> {
        self.ensure_estimable()?;
        let gbm = GbmParams::from(params);
        let payoff = PayoffParams::new(option, params.strike());
        let df = gbm.discount_factor();

        let terminal = simulate_terminal(&gbm, &self.terminal_normals()?)?;
        let discounted = discount(&vanilla_payoffs(&terminal, payoff)?, df);
        let control = discount(&terminal, df);
        let expectation = params.spot() * params.dividend_discount_factor();

        let (adjusted, beta) = apply_control_variate(&discounted, &control, expectation)?;

        Ok(self
            .summarise(&adjusted)?
            .with_control(ControlKind::DiscountedUnderlying, beta))
    }

    /// Prices an arithmetic-average Asian option.
    ///
    /// Paths are monitored on `n_steps` equidistant dates; the average runs
    /// over the `n_steps + 1` points including the initial spot.
    ///
    /// # Errors
    ///
    /// - `PricingError::InsufficientSamples` when `n_paths < 2`
    /// - `PricingError::InvalidArgument` for invalid inputs or a grid larger
    ///   than [`MAX_GRID_DRAWS`](crate::mc::MAX_GRID_DRAWS)
    pub fn price_asian_arithmetic(
        &self,
        params: &ModelParameters,
        option: OptionType,
    ) -> Result<EstimateResult, PricingError> {
        self.ensure_estimable()?;
        self.config.grid_len()?;
        let gbm = GbmParams::from(params);
        let payoff = PayoffParams::new(option, params.strike());
        let (n_paths, n_steps) = (self.config.n_paths(), self.config.n_steps());

        let normals = standard_normal_grid(
            n_paths,
            n_steps,
            self.config.seed(),
            self.config.antithetic(),
        )?;
        let ensemble = simulate_paths(&gbm, n_paths, n_steps, &normals)?;
        let discounted = discount(
            &asian_arithmetic_payoffs(&ensemble, payoff)?,
            gbm.discount_factor(),
        );

        self.summarise(&discounted)
    }
}

/// Multiplies every value by the discount factor.
#[inline]
pub(crate) fn discount(values: &[f64], df: f64) -> Vec<f64> {
    values.par_iter().map(|&v| df * v).collect()
}
