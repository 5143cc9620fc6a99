//! # Pricer Pricing (Layer 3: Monte Carlo Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing prices European and arithmetic Asian options on a
//! geometric Brownian motion underlying by Monte Carlo simulation:
//! - Seeded standard normal draws with optional antithetic pairing (`rng`)
//! - Exact terminal and time-stepped GBM simulation (`mc::paths`)
//! - Sample mean, standard error, confidence interval and control variate
//!   (`mc::estimator`)
//! - Pathwise and finite-difference (common random numbers) Greeks (`greeks`)
//!
//! Every estimate is returned as an [`EstimateResult`] carrying its standard
//! error, interval and the simulation metadata that produced it.
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `ModelParameters`, `OptionType`, `PricingError`,
//!   inverse normal CDF
//! - Layer 2 (pricer_models): closed-form Black-Scholes oracle, used by the
//!   tests and benchmarks only
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{ModelParameters, OptionType};
//! use pricer_pricing::{GreeksConfig, MonteCarloConfig, MonteCarloPricer};
//!
//! let config = MonteCarloConfig::builder()
//!     .n_paths(50_000)
//!     .seed(42)
//!     .antithetic(true)
//!     .build()
//!     .unwrap();
//! let pricer = MonteCarloPricer::new(config);
//! let params = ModelParameters::new(100.0, 100.0, 0.02, 0.01, 0.2, 1.0).unwrap();
//!
//! let call = pricer.price_european_cv(&params, OptionType::Call).unwrap();
//! let delta = pricer
//!     .delta_fd_crn(&params, OptionType::Call, &GreeksConfig::default())
//!     .unwrap();
//!
//! println!("call = {:.4} ± {:.4}", call.estimate, call.half_width());
//! println!("delta = {:.4}", delta.estimate);
//! ```
//!
//! ## Reproducibility
//!
//! With a seed, results are bit-identical across runs and thread counts:
//! draws come from one sequential stream, element-wise maps are
//! order-preserving, and sums over paths are sequential.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`EstimateResult`] and
//!   [`ControlKind`](mc::ControlKind)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
// Allow unknown lints for clippy compatibility across versions
#![allow(unknown_lints)]

// Random number generation infrastructure
pub mod rng;

// Monte Carlo kernel
pub mod mc;

// Greeks estimators and bump configuration
pub mod greeks;

// Re-export commonly used items for convenience
pub use greeks::GreeksConfig;
pub use mc::{EstimateResult, MonteCarloConfig, MonteCarloPricer};
