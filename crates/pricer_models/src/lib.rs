//! # Pricer Models (L2: Reference Models)
//!
//! Closed-form Black-Scholes formulas for European options.
//!
//! This crate provides:
//! - Prices for calls and puts with a continuous dividend yield
//! - Analytical Greeks (Delta, Gamma, Vega)
//! - The put-call parity value C - P
//!
//! These formulas are the oracle the Monte Carlo engine in `pricer_pricing`
//! is tested, benchmarked and demonstrated against. The engine itself never
//! calls into this crate.
//!
//! ## Degenerate Regimes
//!
//! - **T = 0**: price is the intrinsic value, delta a step (call 1/0, put -1/0)
//! - **σ = 0**: price is the discounted payoff of the deterministic forward,
//!   delta is e^{-qT} times the same step
//! - Gamma and vega are zero in both regimes

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
