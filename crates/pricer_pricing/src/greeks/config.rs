//! Bump widths for finite-difference Greeks.

use pricer_core::types::PricingError;

/// Configuration for finite-difference Greeks.
///
/// # Default Values
///
/// | Parameter | Default | Description |
/// |-----------|---------|-------------|
/// | `spot_bump_relative` | 1e-4 | Relative bump for spot, h = S₀·ε |
/// | `vol_bump_absolute` | 1e-4 | Absolute bump for volatility |
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::greeks::GreeksConfig;
///
/// let config = GreeksConfig::default();
/// assert!(config.validate().is_ok());
///
/// let config = GreeksConfig::builder()
///     .spot_bump_relative(1e-3)
///     .vol_bump_absolute(5e-4)
///     .build()
///     .unwrap();
/// assert_eq!(config.spot_bump_relative, 1e-3);
///
/// assert!(GreeksConfig::builder().spot_bump_relative(1.0).build().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreeksConfig {
    /// Relative bump for spot price; the actual bump is `spot_bump_relative * spot`.
    pub spot_bump_relative: f64,

    /// Absolute bump for volatility.
    pub vol_bump_absolute: f64,
}

impl Default for GreeksConfig {
    fn default() -> Self {
        Self {
            spot_bump_relative: 1e-4,
            vol_bump_absolute: 1e-4,
        }
    }
}

impl GreeksConfig {
    /// Creates a new builder starting from the defaults.
    pub fn builder() -> GreeksConfigBuilder {
        GreeksConfigBuilder::default()
    }

    /// Validates both bumps.
    ///
    /// # Errors
    ///
    /// See [`GreeksConfig::validate_spot_bump`] and
    /// [`GreeksConfig::validate_vol_bump`].
    pub fn validate(&self) -> Result<(), PricingError> {
        self.validate_spot_bump()?;
        self.validate_vol_bump()
    }

    /// Checks the bump used by FD delta.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidArgument` unless `spot_bump_relative` lies in
    /// (0, 1), so S₀ - h stays positive.
    pub fn validate_spot_bump(&self) -> Result<(), PricingError> {
        let s = self.spot_bump_relative;
        if s > 0.0 && s < 1.0 {
            Ok(())
        } else {
            Err(PricingError::invalid_argument(format!(
                "spot_bump_relative must be in (0, 1), got {}",
                s
            )))
        }
    }

    /// Checks the bump used by FD vega.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidArgument` unless `vol_bump_absolute` is finite
    /// and > 0.
    pub fn validate_vol_bump(&self) -> Result<(), PricingError> {
        let v = self.vol_bump_absolute;
        if v.is_finite() && v > 0.0 {
            Ok(())
        } else {
            Err(PricingError::invalid_argument(format!(
                "vol_bump_absolute must be positive, got {}",
                v
            )))
        }
    }
}

/// Builder for [`GreeksConfig`].
#[derive(Clone, Debug, Default)]
pub struct GreeksConfigBuilder {
    config: GreeksConfig,
}

impl GreeksConfigBuilder {
    /// Sets the relative spot bump.
    pub fn spot_bump_relative(mut self, bump: f64) -> Self {
        self.config.spot_bump_relative = bump;
        self
    }

    /// Sets the absolute volatility bump.
    pub fn vol_bump_absolute(mut self, bump: f64) -> Self {
        self.config.vol_bump_absolute = bump;
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// See [`GreeksConfig::validate`].
    pub fn build(self) -> Result<GreeksConfig, PricingError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
