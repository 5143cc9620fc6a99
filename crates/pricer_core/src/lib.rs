//! # pricer_core: Foundation Types for the Monte Carlo Option Pricer
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricer workspace, providing:
//! - Validated Black-Scholes model inputs (`types::params`)
//! - Option kind (`types::option`)
//! - The error taxonomy shared by every entry point (`types::error`)
//! - Standard normal CDF, PDF and inverse CDF (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Generic floating-point maths for the distribution functions
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_inv_cdf};
//! use pricer_core::types::{ModelParameters, OptionType, PricingError};
//!
//! let params = ModelParameters::new(100.0, 100.0, 0.02, 0.01, 0.2, 1.0).unwrap();
//! assert_eq!(params.spot(), 100.0);
//!
//! // Invalid inputs fail fast
//! let err = ModelParameters::new(-1.0, 100.0, 0.02, 0.01, 0.2, 1.0).unwrap_err();
//! assert!(matches!(err, PricingError::InvalidArgument(_)));
//!
//! // Option kind parsing
//! let kind: OptionType = "put".parse().unwrap();
//! assert_eq!(kind, OptionType::Put);
//!
//! // Distribution functions
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! assert!((norm_inv_cdf(0.975) - 1.959963984540054).abs() < 1e-8);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `OptionType`, `ModelParameters`
//!   and `PricingError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
