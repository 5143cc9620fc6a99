//! # Random Number Generation Infrastructure
//!
//! This module provides the random inputs of every Monte Carlo estimate.
//!
//! ## Design
//!
//! - **Reproducibility**: the same seed, count, step count and antithetic flag
//!   always produce a bit-identical buffer
//! - **Single stream**: draws are generated sequentially from one seeded
//!   generator; only the downstream element-wise maps run in parallel
//! - **Entropy fallback**: with no seed, the generator is seeded from
//!   operating-system entropy
//!
//! ## Module Structure
//!
//! - [`PricerRng`]: Seeded PRNG wrapper around `rand::rngs::StdRng`
//! - [`standard_normals`] / [`standard_normal_grid`]: Draw buffers with
//!   optional antithetic pairing
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::{standard_normal_grid, PricerRng};
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//! let mut buffer = vec![0.0; 1000];
//! rng.fill_normal(&mut buffer);
//!
//! // 4 paths × 3 steps, rows 2 and 3 mirror rows 0 and 1
//! let grid = standard_normal_grid(4, 3, Some(12345), true).unwrap();
//! assert_eq!(grid[6], -grid[0]);
//! ```

mod draws;
mod prng;

// Public re-exports
pub use draws::{standard_normal_grid, standard_normals};
pub use prng::PricerRng;
