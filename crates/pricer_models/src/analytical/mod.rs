//! Analytical pricing formulas for European options.
//!
//! - Black-Scholes model for lognormal dynamics with dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega)
//!
//! Normal distribution functions come from `pricer_core::math::distributions`.

pub mod black_scholes;

// Re-export main types at module level
pub use black_scholes::{BlackScholes, Greeks};
