//! Undiscounted payoffs per simulated path.
//!
//! - Vanilla: max(S_T - K, 0) or max(K - S_T, 0)
//! - Arithmetic Asian: the same formulas applied to the arithmetic mean of
//!   every monitored point of the path, the initial spot included

use pricer_core::types::{OptionType, PricingError};
use rayon::prelude::*;

use super::paths::PathEnsemble;

/// Strike and option kind of a payoff.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::PayoffParams;
///
/// let call = PayoffParams::call(100.0);
/// assert_eq!(call.evaluate(112.5), 12.5);
/// assert_eq!(PayoffParams::put(100.0).evaluate(112.5), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PayoffParams {
    /// Strike price (K).
    pub strike: f64,
    /// Call or put.
    pub option: OptionType,
}

impl PayoffParams {
    /// Creates payoff parameters.
    #[inline]
    pub fn new(option: OptionType, strike: f64) -> Self {
        Self { strike, option }
    }

    /// Call with the given strike.
    #[inline]
    pub fn call(strike: f64) -> Self {
        Self::new(OptionType::Call, strike)
    }

    /// Put with the given strike.
    #[inline]
    pub fn put(strike: f64) -> Self {
        Self::new(OptionType::Put, strike)
    }

    /// Validates the strike.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidArgument` if the strike is not finite and > 0.
    pub fn validate(&self) -> Result<(), PricingError> {
        if self.strike.is_finite() && self.strike > 0.0 {
            Ok(())
        } else {
            Err(PricingError::invalid_argument(format!(
                "strike must be > 0, got {}",
                self.strike
            )))
        }
    }

    /// Payoff for one underlying value.
    #[inline]
    pub fn evaluate(&self, underlying: f64) -> f64 {
        self.option.intrinsic(underlying, self.strike)
    }
}

/// Vanilla payoff of every terminal value.
///
/// # Errors
///
/// `PricingError::InvalidArgument` if the strike is invalid.
pub fn vanilla_payoffs(terminal: &[f64], payoff: PayoffParams) -> Result<Vec<f64>, PricingError> {
    payoff.validate()?;
    Ok(terminal.par_iter().map(|&s| payoff.evaluate(s)).collect())
}

/// Arithmetic-average Asian payoff of every path.
///
/// The average runs over all `points_per_path` monitored values, the
/// initial spot included.
///
/// # Errors
///
/// `PricingError::InvalidArgument` if the strike is invalid.
pub fn asian_arithmetic_payoffs(
    paths: &PathEnsemble,
    payoff: PayoffParams,
) -> Result<Vec<f64>, PricingError> {
    payoff.validate()?;
    let points = paths.points_per_path() as f64;

    Ok(paths
        .as_slice()
        .par_chunks_exact(paths.points_per_path())
        .map(|path| payoff.evaluate(path.iter().sum::<f64>() / points))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mc::paths::{simulate_paths, GbmParams};
    use proptest::prelude::*;

    #[test]
    fn test_vanilla_call_and_put() {
        let terminal = [80.0, 100.0, 120.0];
        assert_eq!(
            vanilla_payoffs(&terminal, PayoffParams::call(100.0)).unwrap(),
            vec![0.0, 0.0, 20.0]
        );
        assert_eq!(
            vanilla_payoffs(&terminal, PayoffParams::put(100.0)).unwrap(),
            vec![20.0, 0.0, 0.0]
        );
    }

    #[test]
    fn test_invalid_strike_rejected() {
        for strike in [0.0, -5.0, f64::NAN] {
            assert!(matches!(
                vanilla_payoffs(&[100.0], PayoffParams::call(strike)),
                Err(PricingError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_asian_average_includes_initial_spot() {
        // deterministic curve: average of S0·e^{r t_i} over t = 0, 0.5, 1
        let gbm = GbmParams::new(100.0, 0.1, 0.0, 0.0, 1.0);
        let ensemble = simulate_paths(&gbm, 2, 2, &[0.0; 4]).unwrap();
        let payoffs = asian_arithmetic_payoffs(&ensemble, PayoffParams::call(100.0)).unwrap();

        let avg = (100.0 + 100.0 * (0.05_f64).exp() + 100.0 * (0.1_f64).exp()) / 3.0;
        assert_eq!(payoffs.len(), 2);
        assert!((payoffs[0] - (avg - 100.0)).abs() < 1e-12);
        assert_eq!(payoffs[0], payoffs[1]);
    }

    proptest! {
        #[test]
        fn prop_payoffs_non_negative(
            s in proptest::collection::vec(0.01f64..1000.0, 1..64),
            k in 0.01f64..1000.0,
        ) {
            for option in OptionType::ALL {
                let out = vanilla_payoffs(&s, PayoffParams::new(option, k)).unwrap();
                prop_assert_eq!(out.len(), s.len());
                prop_assert!(out.iter().all(|&p| p >= 0.0));
            }
        }

        #[test]
        fn prop_call_minus_put_is_forward_payoff(s in 0.01f64..1000.0, k in 0.01f64..1000.0) {
            let c = PayoffParams::call(k).evaluate(s);
            let p = PayoffParams::put(k).evaluate(s);
            prop_assert!((c - p - (s - k)).abs() <= 1e-9 * s.max(k));
        }
    }
}
