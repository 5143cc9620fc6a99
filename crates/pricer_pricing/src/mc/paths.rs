//! Terminal-value and path simulation under Geometric Brownian Motion.
//!
//! Both simulators map caller-supplied standard normals to prices, so the
//! same draws can be pushed through bumped parameters for common random
//! numbers. Simulation is exact in log space:
//!
//! ```text
//! S(t+dt) = S(t) × exp((r - q - ½σ²)dt + σ√dt × Z)
//! ```
//!
//! # Degenerate Regimes
//!
//! - `maturity == 0`: every value is the spot
//! - `volatility == 0`: values follow the deterministic curve S₀·e^{(r-q)t}
//!
//! Both are evaluated in closed form rather than through the stochastic
//! formula, so every path is bit-identical.
//!
//! # Memory Layout
//!
//! Paths are stored in row-major order: `values[path_idx * (n_steps + 1) + step_idx]`
//! where `step_idx = 0` contains the initial spot price.

use pricer_core::types::{ModelParameters, PricingError};
use rayon::prelude::*;

use super::config::grid_len;

/// Parameters for Geometric Brownian Motion simulation.
///
/// # Model
///
/// Under the risk-neutral measure:
/// ```text
/// dS = (r - q) S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams {
///     spot: 100.0,
///     rate: 0.05,
///     dividend_yield: 0.0,
///     volatility: 0.2,
///     maturity: 1.0,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Continuous dividend yield (q) - annualised.
    pub dividend_yield: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, dividend_yield: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            dividend_yield,
            volatility,
            maturity,
        }
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidArgument` if spot ≤ 0, σ < 0, T < 0 or any value
    /// is non-finite.
    pub fn validate(&self) -> Result<(), PricingError> {
        if !(self.spot.is_finite() && self.spot > 0.0) {
            return Err(PricingError::invalid_argument(format!(
                "spot must be > 0, got {}",
                self.spot
            )));
        }
        if !self.rate.is_finite() || !self.dividend_yield.is_finite() {
            return Err(PricingError::invalid_argument(
                "rate and dividend_yield must be finite",
            ));
        }
        if !(self.volatility.is_finite() && self.volatility >= 0.0) {
            return Err(PricingError::invalid_argument(format!(
                "volatility must be >= 0, got {}",
                self.volatility
            )));
        }
        if !(self.maturity.is_finite() && self.maturity >= 0.0) {
            return Err(PricingError::invalid_argument(format!(
                "maturity must be >= 0, got {}",
                self.maturity
            )));
        }
        Ok(())
    }

    /// Returns true when every simulated value is deterministic.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.maturity == 0.0 || self.volatility == 0.0
    }

    /// Risk-free discount factor e^{-rT}.
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Deterministic value S₀·e^{(r-q)t} at time `t`.
    #[inline]
    fn forward_at(&self, t: f64) -> f64 {
        self.spot * ((self.rate - self.dividend_yield) * t).exp()
    }
}

impl Default for GbmParams {
    fn default() -> Self {
        Self {
            spot: 100.0,
            rate: 0.05,
            dividend_yield: 0.0,
            volatility: 0.2,
            maturity: 1.0,
        }
    }
}

impl From<&ModelParameters> for GbmParams {
    fn from(params: &ModelParameters) -> Self {
        Self {
            spot: params.spot(),
            rate: params.rate(),
            dividend_yield: params.dividend_yield(),
            volatility: params.volatility(),
            maturity: params.maturity(),
        }
    }
}

/// Simulated trajectories for one request.
///
/// Row-major buffer with [`points_per_path`](PathEnsemble::points_per_path)
/// values per path, the first being the initial spot.
#[derive(Clone, Debug, PartialEq)]
pub struct PathEnsemble {
    values: Vec<f64>,
    n_paths: usize,
    points_per_path: usize,
}

impl PathEnsemble {
    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Points per path, `n_steps + 1`.
    #[inline]
    pub fn points_per_path(&self) -> usize {
        self.points_per_path
    }

    /// Monitoring points of path `index`, or `None` when out of range.
    #[inline]
    pub fn path(&self, index: usize) -> Option<&[f64]> {
        let start = index.checked_mul(self.points_per_path)?;
        self.values.get(start..start + self.points_per_path)
    }

    /// Iterates over paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.values.chunks_exact(self.points_per_path)
    }

    /// Terminal value of every path.
    pub fn terminal(&self) -> Vec<f64> {
        self.paths().map(|path| path[path.len() - 1]).collect()
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

/// Maps standard normals to terminal prices S_T, one per draw.
///
/// S_T = S₀·exp((r - q - ½σ²)T + σ√T·Z)
///
/// # Errors
///
/// `PricingError::InvalidArgument` for invalid parameters or an empty
/// `normals` buffer.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{simulate_terminal, GbmParams};
///
/// let frozen = GbmParams { volatility: 0.0, ..GbmParams::default() };
/// let st = simulate_terminal(&frozen, &[0.3, -1.2]).unwrap();
/// assert_eq!(st[0], st[1]);
/// ```
pub fn simulate_terminal(gbm: &GbmParams, normals: &[f64]) -> Result<Vec<f64>, PricingError> {
    gbm.validate()?;
    if normals.is_empty() {
        return Err(PricingError::invalid_argument("at least one normal draw is required"));
    }

    if gbm.maturity == 0.0 {
        return Ok(vec![gbm.spot; normals.len()]);
    }
    if gbm.volatility == 0.0 {
        return Ok(vec![gbm.forward_at(gbm.maturity); normals.len()]);
    }

    let drift = (gbm.rate - gbm.dividend_yield - 0.5 * gbm.volatility * gbm.volatility)
        * gbm.maturity;
    let vol_sqrt_t = gbm.volatility * gbm.maturity.sqrt();
    let spot = gbm.spot;

    Ok(normals
        .par_iter()
        .map(|&z| spot * (drift + vol_sqrt_t * z).exp())
        .collect())
}

/// Maps an `n_paths × n_steps` normal grid to full price paths.
///
/// The grid is equidistant with dt = T / n_steps and includes the initial
/// spot, giving `n_steps + 1` points per path.
///
/// # Errors
///
/// `PricingError::InvalidArgument` for invalid parameters, a zero path or
/// step count, a grid beyond [`MAX_GRID_DRAWS`](super::MAX_GRID_DRAWS), or
/// `normals.len() != n_paths * n_steps`.
pub fn simulate_paths(
    gbm: &GbmParams,
    n_paths: usize,
    n_steps: usize,
    normals: &[f64],
) -> Result<PathEnsemble, PricingError> {
    gbm.validate()?;
    if n_paths == 0 {
        return Err(PricingError::invalid_argument("n_paths must be > 0"));
    }
    if n_steps == 0 {
        return Err(PricingError::invalid_argument("n_steps must be > 0"));
    }
    if normals.len() != grid_len(n_paths, n_steps)? {
        return Err(PricingError::invalid_argument(format!(
            "normal buffer has {} values, expected {} × {}",
            normals.len(),
            n_paths,
            n_steps
        )));
    }

    let points_per_path = n_steps + 1;
    let mut values = vec![0.0; n_paths * points_per_path];

    if gbm.maturity == 0.0 {
        values.fill(gbm.spot);
    } else if gbm.volatility == 0.0 {
        let dt = gbm.maturity / n_steps as f64;
        let curve: Vec<f64> = (0..points_per_path)
            .map(|i| {
                let t = if i == n_steps { gbm.maturity } else { i as f64 * dt };
                gbm.forward_at(t)
            })
            .collect();
        for row in values.chunks_exact_mut(points_per_path) {
            row.copy_from_slice(&curve);
        }
    } else {
        let dt = gbm.maturity / n_steps as f64;
        let drift_dt =
            (gbm.rate - gbm.dividend_yield - 0.5 * gbm.volatility * gbm.volatility) * dt;
        let vol_sqrt_dt = gbm.volatility * dt.sqrt();
        let spot = gbm.spot;

        values
            .par_chunks_exact_mut(points_per_path)
            .zip(normals.par_chunks_exact(n_steps))
            .for_each(|(row, z)| {
                row[0] = spot;
                let mut log_s = 0.0;
                for (step, &zi) in z.iter().enumerate() {
                    log_s += drift_dt + vol_sqrt_dt * zi;
                    row[step + 1] = spot * log_s.exp();
                }
            });
    }

    Ok(PathEnsemble {
        values,
        n_paths,
        points_per_path,
    })
}
