//! Monte Carlo pricing kernels for options on a GBM underlying.
//!
//! # Pipeline
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig   (paths, steps, seed, antithetic, confidence level)
//! ├── rng                (standard normal vector / grid)
//! ├── paths              (terminal values / time-stepped ensembles)
//! ├── payoff             (vanilla / arithmetic Asian)
//! └── estimator          (mean, standard error, interval, control variate)
//!     └── EstimateResult
//! ```
//!
//! Element-wise maps run on rayon; every reduction over paths runs
//! sequentially in [`estimator`], so a seeded request is bit-reproducible.
//!
//! # Example
//!
//! ```rust
//! use pricer_core::types::{ModelParameters, OptionType};
//! use pricer_pricing::mc::{ControlKind, MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(10_000)
//!     .seed(42)
//!     .antithetic(true)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config);
//! let params = ModelParameters::new(100.0, 100.0, 0.02, 0.01, 0.2, 1.0).unwrap();
//!
//! let plain = pricer.price_european(&params, OptionType::Put).unwrap();
//! let cv = pricer.price_european_cv(&params, OptionType::Put).unwrap();
//! assert_eq!(cv.control, ControlKind::DiscountedUnderlying);
//! assert!(plain.std_error > 0.0);
//! ```

pub mod config;
pub mod estimator;
pub mod paths;
pub mod payoff;
pub mod pricer;
pub mod result;

pub use config::{
    grid_len, MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_ASIAN_STEPS,
    DEFAULT_CONFIDENCE_LEVEL, MAX_GRID_DRAWS, MAX_PATHS, MAX_STEPS,
};
pub use estimator::{apply_control_variate, confidence_interval, mean_and_std_error, Z_95};
pub use paths::{simulate_paths, simulate_terminal, GbmParams, PathEnsemble};
pub use payoff::{asian_arithmetic_payoffs, vanilla_payoffs, PayoffParams};
pub use pricer::MonteCarloPricer;
pub use result::{ControlKind, EstimateResult};
