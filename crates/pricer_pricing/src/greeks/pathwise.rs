//! Pathwise delta for vanilla options.
//!
//! Differentiating the discounted payoff along each path gives
//!
//! ```text
//! call:  e^{-rT} · 1{S_T > K} · S_T / S₀
//! put:  -e^{-rT} · 1{S_T < K} · S_T / S₀
//! ```
//!
//! since ∂S_T/∂S₀ = S_T/S₀ under GBM.

use pricer_core::types::{ModelParameters, OptionType, PricingError};
use rayon::prelude::*;

use crate::mc::{simulate_terminal, EstimateResult, GbmParams, MonteCarloPricer};

impl MonteCarloPricer {
    /// Delta by the pathwise estimator.
    ///
    /// With T = 0 or σ = 0 the payoff is not differentiable along a random
    /// path, so the delta is the deterministic step: 1 or 0 for a call, -1 or
    /// 0 for a put, depending on whether the terminal value finishes in the
    /// money. The standard error is then 0.
    ///
    /// # Errors
    ///
    /// - `PricingError::InsufficientSamples` when `n_paths < 2`
    /// - `PricingError::InvalidArgument` for invalid inputs
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_core::types::{ModelParameters, OptionType};
    /// use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
    ///
    /// let config = MonteCarloConfig::builder().n_paths(10).seed(1).build().unwrap();
    /// let pricer = MonteCarloPricer::new(config);
    ///
    /// let expired = ModelParameters::new(120.0, 100.0, 0.01, 0.0, 0.2, 0.0).unwrap();
    /// let delta = pricer.delta_pathwise(&expired, OptionType::Call).unwrap();
    /// assert_eq!(delta.estimate, 1.0);
    /// assert_eq!(delta.std_error, 0.0);
    /// ```
    pub fn delta_pathwise(
        &self,
        params: &ModelParameters,
        option: OptionType,
    ) -> Result<EstimateResult, PricingError> {
        self.ensure_estimable()?;
        let gbm = GbmParams::from(params);
        let strike = params.strike();

        let terminal = simulate_terminal(&gbm, &self.terminal_normals()?)?;

        let samples: Vec<f64> = if gbm.is_degenerate() {
            terminal.par_iter().map(|&st| step(option, st, strike)).collect()
        } else {
            let scale = gbm.discount_factor() / gbm.spot;
            terminal
                .par_iter()
                .map(|&st| match option {
                    OptionType::Call if st > strike => scale * st,
                    OptionType::Put if st < strike => -scale * st,
                    _ => 0.0,
                })
                .collect()
        };

        self.summarise(&samples)
    }
}

/// Deterministic delta of a path that finishes at `st`.
#[inline]
fn step(option: OptionType, st: f64, strike: f64) -> f64 {
    match option {
        OptionType::Call if st > strike => 1.0,
        OptionType::Put if st < strike => -1.0,
        _ => 0.0,
    }
}
