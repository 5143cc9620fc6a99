//! Core value types for Monte Carlo pricing.
//!
//! This module provides:
//! - `error`: Structured error taxonomy (`InvalidArgument`, `InsufficientSamples`)
//! - `option`: Call/put option kind
//! - `params`: Validated Black-Scholes model parameters
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingError`], [`PricingResult`] from `error`
//! - [`OptionType`] from `option`
//! - [`ModelParameters`] from `params`

pub mod error;
pub mod option;
pub mod params;

// Re-export commonly used types at module level
pub use error::{PricingError, PricingResult};
pub use option::OptionType;
pub use params::ModelParameters;
