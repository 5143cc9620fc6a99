//! Monte Carlo Greeks for vanilla options.
//!
//! Three estimators are provided as methods on
//! [`MonteCarloPricer`](crate::mc::MonteCarloPricer), each returning an
//! [`EstimateResult`](crate::mc::EstimateResult):
//!
//! | Method | Greek | Estimator |
//! |--------|-------|-----------|
//! | `delta_pathwise` | Delta | Pathwise derivative of the payoff |
//! | `delta_fd_crn` | Delta | Central difference in spot, common random numbers |
//! | `vega_fd_crn` | Vega | Central difference in volatility, common random numbers |
//!
//! Bump widths for the finite-difference estimators come from
//! [`GreeksConfig`].
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::{ModelParameters, OptionType};
//! use pricer_pricing::greeks::GreeksConfig;
//! use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(20_000)
//!     .seed(42)
//!     .antithetic(true)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config);
//! let params = ModelParameters::new(100.0, 100.0, 0.02, 0.01, 0.2, 1.0).unwrap();
//!
//! let delta = pricer.delta_pathwise(&params, OptionType::Call).unwrap();
//! let vega = pricer
//!     .vega_fd_crn(&params, OptionType::Call, &GreeksConfig::default())
//!     .unwrap();
//!
//! assert!(delta.estimate > 0.0 && delta.estimate < 1.0);
//! assert!(vega.estimate > 0.0);
//! ```

mod config;
mod finite_difference;
mod pathwise;

pub use config::{GreeksConfig, GreeksConfigBuilder};

#[cfg(test)]
mod tests;
