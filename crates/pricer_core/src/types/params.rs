//! Black-Scholes model parameters.
//!
//! This module provides the immutable, eagerly validated parameter set shared
//! by the Monte Carlo engine and the closed-form oracle.

use super::error::PricingError;

/// Market and contract inputs under constant-parameter GBM.
///
/// All values are validated at construction:
/// - `spot` and `strike` must be finite and strictly positive
/// - `rate` and `dividend_yield` must be finite (any sign)
/// - `volatility` and `maturity` must be finite and non-negative
///
/// `volatility == 0` and `maturity == 0` are valid degenerate regimes; they
/// are never clamped.
///
/// # Examples
/// ```
/// use pricer_core::types::ModelParameters;
///
/// let params = ModelParameters::new(100.0, 105.0, 0.02, 0.01, 0.2, 1.0).unwrap();
/// assert_eq!(params.strike(), 105.0);
/// assert!((params.forward() - 100.0 * (0.01_f64).exp()).abs() < 1e-12);
///
/// assert!(ModelParameters::new(100.0, 0.0, 0.02, 0.01, 0.2, 1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ModelParameters {
    spot: f64,
    strike: f64,
    rate: f64,
    dividend_yield: f64,
    volatility: f64,
    maturity: f64,
}

impl ModelParameters {
    /// Creates a validated parameter set.
    ///
    /// # Arguments
    /// * `spot` - Initial underlying price S0 (> 0)
    /// * `strike` - Strike K (> 0)
    /// * `rate` - Continuously compounded risk-free rate r
    /// * `dividend_yield` - Continuous dividend yield q
    /// * `volatility` - Volatility σ (>= 0)
    /// * `maturity` - Time to expiry T in years (>= 0)
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` naming the first violated precondition.
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        maturity: f64,
    ) -> Result<Self, PricingError> {
        require_positive("spot", spot)?;
        require_positive("strike", strike)?;
        require_finite("rate", rate)?;
        require_finite("dividend_yield", dividend_yield)?;
        require_non_negative("volatility", volatility)?;
        require_non_negative("maturity", maturity)?;

        Ok(Self {
            spot,
            strike,
            rate,
            dividend_yield,
            volatility,
            maturity,
        })
    }

    /// Initial underlying price S0.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Strike K.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Risk-free rate r.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Dividend yield q.
    #[inline]
    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield
    }

    /// Volatility σ.
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Maturity T in years.
    #[inline]
    pub fn maturity(&self) -> f64 {
        self.maturity
    }

    /// Risk-free discount factor e^{-rT}.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Dividend discount factor e^{-qT}.
    #[inline]
    pub fn dividend_discount_factor(&self) -> f64 {
        (-self.dividend_yield * self.maturity).exp()
    }

    /// Forward price S0·e^{(r-q)T}.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate - self.dividend_yield) * self.maturity).exp()
    }

    /// Returns true when the terminal price is deterministic (T == 0 or σ == 0).
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.maturity == 0.0 || self.volatility == 0.0
    }

    /// Copy with a different spot, re-validated.
    pub fn with_spot(&self, spot: f64) -> Result<Self, PricingError> {
        require_positive("spot", spot)?;
        Ok(Self { spot, ..*self })
    }

    /// Copy with a different volatility, re-validated.
    pub fn with_volatility(&self, volatility: f64) -> Result<Self, PricingError> {
        require_non_negative("volatility", volatility)?;
        Ok(Self { volatility, ..*self })
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::ModelParameters;
    use serde::{de, Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(deny_unknown_fields)]
    struct RawModelParameters {
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        maturity: f64,
    }

    // Deserialised values go through the same checks as `new`.
    impl<'de> Deserialize<'de> for ModelParameters {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let raw = RawModelParameters::deserialize(deserializer)?;
            ModelParameters::new(
                raw.spot,
                raw.strike,
                raw.rate,
                raw.dividend_yield,
                raw.volatility,
                raw.maturity,
            )
            .map_err(de::Error::custom)
        }
    }
}

fn require_finite(name: &str, value: f64) -> Result<(), PricingError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(PricingError::invalid_argument(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

fn require_positive(name: &str, value: f64) -> Result<(), PricingError> {
    require_finite(name, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid_argument(format!(
            "{} must be > 0, got {}",
            name, value
        )))
    }
}

fn require_non_negative(name: &str, value: f64) -> Result<(), PricingError> {
    require_finite(name, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(PricingError::invalid_argument(format!(
            "{} must be >= 0, got {}",
            name, value
        )))
    }
}
