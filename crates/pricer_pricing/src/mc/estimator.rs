//! Aggregate statistics of Monte Carlo samples.
//!
//! This is the only place sums over paths are taken. Every reduction runs
//! sequentially in path order so results are bit-reproducible regardless of
//! how the per-path samples were produced.

use pricer_core::math::distributions::norm_inv_cdf;
use pricer_core::types::PricingError;

use super::config::validate_confidence_level;

/// Two-sided 95% standard normal critical value.
pub const Z_95: f64 = 1.959963984540054;

/// Minimum sample count for a variance estimate.
pub const MIN_SAMPLES: usize = 2;

fn require_samples(n: usize) -> Result<(), PricingError> {
    if n < MIN_SAMPLES {
        Err(PricingError::insufficient_samples(MIN_SAMPLES, n))
    } else {
        Ok(())
    }
}

/// Returns the common value when every sample is bit-identical.
#[inline]
fn constant_value(samples: &[f64]) -> Option<f64> {
    let first = *samples.first()?;
    samples.iter().all(|&x| x == first).then_some(first)
}

#[inline]
fn mean(samples: &[f64]) -> f64 {
    samples.iter().sum::<f64>() / samples.len() as f64
}

/// Sample variance with Bessel's correction; exactly 0 for constant samples.
fn sample_variance(samples: &[f64]) -> f64 {
    if constant_value(samples).is_some() {
        return 0.0;
    }
    let m = mean(samples);
    samples.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / (samples.len() - 1) as f64
}

/// Sample mean and standard error of the mean.
///
/// stderr = s / √n with s the Bessel-corrected sample standard deviation.
/// When every sample is identical the mean is that value exactly and the
/// standard error is exactly 0.
///
/// # Errors
///
/// `PricingError::InsufficientSamples` when fewer than 2 samples are given.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::estimator::mean_and_std_error;
///
/// let (mean, se) = mean_and_std_error(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(mean, 2.5);
/// assert!((se - (5.0_f64 / 3.0 / 4.0).sqrt()).abs() < 1e-15);
///
/// let (mean, se) = mean_and_std_error(&[0.1; 3]).unwrap();
/// assert_eq!(mean, 0.1);
/// assert_eq!(se, 0.0);
///
/// assert!(mean_and_std_error(&[1.0]).is_err());
/// ```
pub fn mean_and_std_error(samples: &[f64]) -> Result<(f64, f64), PricingError> {
    require_samples(samples.len())?;

    if let Some(value) = constant_value(samples) {
        return Ok((value, 0.0));
    }

    let n = samples.len() as f64;
    Ok((mean(samples), sample_variance(samples).sqrt() / n.sqrt()))
}

/// Two-sided standard normal critical value for a confidence level.
///
/// Returns [`Z_95`] at 0.95, otherwise Φ⁻¹(½ + level/2).
///
/// # Errors
///
/// `PricingError::InvalidArgument` unless 0 < level < 1.
pub fn critical_value(level: f64) -> Result<f64, PricingError> {
    validate_confidence_level(level)?;
    if (level - 0.95).abs() < 1e-12 {
        return Ok(Z_95);
    }
    Ok(norm_inv_cdf(0.5 + level / 2.0))
}

/// Normal-approximation interval `estimate ± z·std_error`.
///
/// A zero standard error collapses the interval onto the estimate.
///
/// # Errors
///
/// `PricingError::InvalidArgument` unless 0 < level < 1.
pub fn confidence_interval(
    estimate: f64,
    std_error: f64,
    level: f64,
) -> Result<(f64, f64), PricingError> {
    let z = critical_value(level)?;
    if std_error == 0.0 {
        return Ok((estimate, estimate));
    }
    let half_width = z * std_error;
    Ok((estimate - half_width, estimate + half_width))
}

/// Control-variate adjustment of target samples `y` by control samples `x`
/// with known expectation `expectation`.
///
/// With x' = x - E[x] and β = Cov(y, x') / Var(x') (both Bessel-corrected),
/// returns `(y - β·x', β)`. A constant control gives β = 0 and `y` unchanged.
///
/// # Errors
///
/// - `PricingError::InvalidArgument` when the lengths differ
/// - `PricingError::InsufficientSamples` when fewer than 2 samples are given
pub fn apply_control_variate(
    y: &[f64],
    x: &[f64],
    expectation: f64,
) -> Result<(Vec<f64>, f64), PricingError> {
    if y.len() != x.len() {
        return Err(PricingError::invalid_argument(format!(
            "target has {} samples but control has {}",
            y.len(),
            x.len()
        )));
    }
    require_samples(y.len())?;

    let centred: Vec<f64> = x.iter().map(|&xi| xi - expectation).collect();
    let var_x = sample_variance(&centred);
    if var_x == 0.0 {
        return Ok((y.to_vec(), 0.0));
    }

    let mean_y = mean(y);
    let mean_x = mean(&centred);
    let cov = y
        .iter()
        .zip(centred.iter())
        .map(|(&yi, &xi)| (yi - mean_y) * (xi - mean_x))
        .sum::<f64>()
        / (y.len() - 1) as f64;

    let beta = cov / var_x;
    let adjusted = y
        .iter()
        .zip(centred.iter())
        .map(|(&yi, &xi)| yi - beta * xi)
        .collect();

    Ok((adjusted, beta))
}
