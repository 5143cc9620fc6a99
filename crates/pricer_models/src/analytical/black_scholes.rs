//! Black-Scholes pricing model for European options.
//!
//! This module provides closed-form prices and Greeks for European calls and
//! puts on an underlying paying a continuous dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T

use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{ModelParameters, OptionType, PricingError};

/// Price and first/second order sensitivities for one option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks {
    /// Option value
    pub price: f64,
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
}

/// Black-Scholes model for European option pricing.
///
/// Wraps a validated [`ModelParameters`], so every method is infallible.
///
/// # Examples
/// ```
/// use pricer_core::types::{ModelParameters, OptionType};
/// use pricer_models::analytical::BlackScholes;
///
/// let params = ModelParameters::new(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).unwrap();
/// let bs = BlackScholes::new(&params);
///
/// let call = bs.price(OptionType::Call);
/// let put = bs.price(OptionType::Put);
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    params: ModelParameters,
}

impl BlackScholes {
    /// Creates a model over already validated parameters.
    pub fn new(params: &ModelParameters) -> Self {
        Self { params: *params }
    }

    /// Validates raw inputs and creates a model.
    ///
    /// # Errors
    /// `PricingError::InvalidArgument` if S0 ≤ 0, K ≤ 0, σ < 0, T < 0 or any
    /// input is non-finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::from_inputs(100.0, 100.0, 0.05, 0.0, 0.2, 1.0).is_ok());
    /// assert!(BlackScholes::from_inputs(-100.0, 100.0, 0.05, 0.0, 0.2, 1.0).is_err());
    /// ```
    pub fn from_inputs(
        spot: f64,
        strike: f64,
        rate: f64,
        dividend_yield: f64,
        volatility: f64,
        maturity: f64,
    ) -> Result<Self, PricingError> {
        let params = ModelParameters::new(spot, strike, rate, dividend_yield, volatility, maturity)?;
        Ok(Self::new(&params))
    }

    /// Returns the underlying parameters.
    #[inline]
    pub fn params(&self) -> &ModelParameters {
        &self.params
    }

    /// d₁ and d₂; only meaningful when T > 0 and σ > 0.
    #[inline]
    fn d1_d2(&self) -> (f64, f64) {
        let p = &self.params;
        let vol_sqrt_t = p.volatility() * p.maturity().sqrt();
        let d1 = ((p.spot() / p.strike()).ln()
            + (p.rate() - p.dividend_yield() + 0.5 * p.volatility() * p.volatility())
                * p.maturity())
            / vol_sqrt_t;
        (d1, d1 - vol_sqrt_t)
    }

    /// European option price.
    ///
    /// - T = 0: intrinsic value max(S - K, 0) / max(K - S, 0)
    /// - σ = 0: e^(-rT) times the payoff of the forward S·e^((r-q)T)
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// let expired = BlackScholes::from_inputs(110.0, 100.0, 0.05, 0.0, 0.2, 0.0).unwrap();
    /// assert_eq!(expired.price(OptionType::Call), 10.0);
    /// assert_eq!(expired.price(OptionType::Put), 0.0);
    /// ```
    pub fn price(&self, option: OptionType) -> f64 {
        let p = &self.params;

        if p.maturity() == 0.0 {
            return option.intrinsic(p.spot(), p.strike());
        }

        if p.volatility() == 0.0 {
            return p.discount_factor() * option.intrinsic(p.forward(), p.strike());
        }

        let (d1, d2) = self.d1_d2();
        let df_r = p.discount_factor();
        let df_q = p.dividend_discount_factor();

        match option {
            OptionType::Call => p.spot() * df_q * norm_cdf(d1) - p.strike() * df_r * norm_cdf(d2),
            OptionType::Put => p.strike() * df_r * norm_cdf(-d2) - p.spot() * df_q * norm_cdf(-d1),
        }
    }

    /// Delta (∂V/∂S).
    ///
    /// - Call Delta = e^(-qT)·N(d₁)
    /// - Put Delta = e^(-qT)·(N(d₁) - 1)
    ///
    /// At T = 0 the delta is the step 1{S > K} (call) or -1{S < K} (put); at
    /// σ = 0 it is e^(-qT) times the same step evaluated at the forward.
    pub fn delta(&self, option: OptionType) -> f64 {
        let p = &self.params;

        if p.maturity() == 0.0 {
            return step(option, p.spot(), p.strike());
        }

        let df_q = p.dividend_discount_factor();

        if p.volatility() == 0.0 {
            return df_q * step(option, p.forward(), p.strike());
        }

        let (d1, _) = self.d1_d2();
        match option {
            OptionType::Call => df_q * norm_cdf(d1),
            OptionType::Put => df_q * (norm_cdf(d1) - 1.0),
        }
    }

    /// Gamma (∂²V/∂S²), identical for calls and puts.
    ///
    /// Gamma = e^(-qT)·φ(d₁) / (S·σ·√T), and 0 when T = 0 or σ = 0.
    pub fn gamma(&self) -> f64 {
        let p = &self.params;
        if p.is_degenerate() {
            return 0.0;
        }

        let (d1, _) = self.d1_d2();
        p.dividend_discount_factor() * norm_pdf(d1)
            / (p.spot() * p.volatility() * p.maturity().sqrt())
    }

    /// Vega (∂V/∂σ), identical for calls and puts.
    ///
    /// Vega = S·e^(-qT)·φ(d₁)·√T, and 0 when T = 0 or σ = 0.
    pub fn vega(&self) -> f64 {
        let p = &self.params;
        if p.is_degenerate() {
            return 0.0;
        }

        let (d1, _) = self.d1_d2();
        p.spot() * p.dividend_discount_factor() * norm_pdf(d1) * p.maturity().sqrt()
    }

    /// C - P, computed from the two prices.
    ///
    /// Equals S·e^(-qT) - K·e^(-rT) up to rounding.
    pub fn put_call_parity(&self) -> f64 {
        self.price(OptionType::Call) - self.price(OptionType::Put)
    }

    /// Right-hand side of put-call parity, S·e^(-qT) - K·e^(-rT).
    pub fn parity_forward_value(&self) -> f64 {
        let p = &self.params;
        p.spot() * p.dividend_discount_factor() - p.strike() * p.discount_factor()
    }

    /// Price, delta, gamma and vega in one call.
    pub fn greeks(&self, option: OptionType) -> Greeks {
        Greeks {
            price: self.price(option),
            delta: self.delta(option),
            gamma: self.gamma(),
            vega: self.vega(),
        }
    }
}

/// Delta of a deterministic payoff: call 1/0, put -1/0 with the strict
/// inequality on the in-the-money side.
#[inline]
fn step(option: OptionType, underlying: f64, strike: f64) -> f64 {
    match option {
        OptionType::Call if underlying > strike => 1.0,
        OptionType::Put if underlying < strike => -1.0,
        _ => 0.0,
    }
}
