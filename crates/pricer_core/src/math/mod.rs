//! Mathematical primitives.
//!
//! - `distributions`: Standard normal CDF, PDF and inverse CDF

pub mod distributions;

pub use distributions::{norm_cdf, norm_inv_cdf, norm_pdf};
