//! Standard normal distribution functions.
//!
//! This module provides:
//! - `norm_cdf`: Cumulative distribution function (CDF)
//! - `norm_pdf`: Probability density function (PDF)
//! - `norm_inv_cdf`: Inverse CDF (quantile function)
//!
//! `norm_cdf` and `norm_pdf` are generic over `T: Float` so they serve both
//! `f64` pricing and `f32` bulk evaluation.

use num_traits::Float;

/// Square root of 2.
const SQRT_2: f64 = std::f64::consts::SQRT_2;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Acklam rational-approximation coefficients, central region numerator.
const ACKLAM_A: [f64; 6] = [
    -3.969_683_028_665_376e1,
    2.209_460_984_245_205e2,
    -2.759_285_104_469_687e2,
    1.383_577_518_672_69e2,
    -3.066_479_806_614_716e1,
    2.506_628_277_459_239,
];

/// Central region denominator.
const ACKLAM_B: [f64; 5] = [
    -5.447_609_879_822_406e1,
    1.615_858_368_580_409e2,
    -1.556_989_798_598_866e2,
    6.680_131_188_771_972e1,
    -1.328_068_155_288_572e1,
];

/// Tail numerator.
const ACKLAM_C: [f64; 6] = [
    -7.784_894_002_430_293e-3,
    -3.223_964_580_411_365e-1,
    -2.400_758_277_161_838,
    -2.549_732_539_343_734,
    4.374_664_141_464_968,
    2.938_163_982_698_783,
];

/// Tail denominator.
const ACKLAM_D: [f64; 4] = [
    7.784_695_709_041_462e-3,
    3.224_671_290_700_398e-1,
    2.445_134_137_142_996,
    3.754_408_661_907_416,
];

/// Boundary between the lower tail and the central region.
const INV_CDF_P_LOW: f64 = 0.024_25;
const INV_CDF_P_HIGH: f64 = 1.0 - INV_CDF_P_LOW;

/// Converts an `f64` literal into `T`.
///
/// Every `Float` implementor in use (`f32`, `f64`) represents these
/// constants, so the NaN fallback is unreachable in practice.
#[inline]
fn lit<T: Float>(v: f64) -> T {
    T::from(v).unwrap_or_else(T::nan)
}

/// Complementary error function approximation using Horner's method.
///
/// Uses the Abramowitz and Stegun approximation (formula 7.1.26) which provides
/// maximum error of 1.5e-7 for all x.
///
/// # Mathematical Definition
/// erfc(x) = 1 - erf(x) = (2/√π) ∫_x^∞ e^(-t²) dt
#[inline]
fn erfc_approx<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let a1 = lit::<T>(0.254829592);
    let a2 = lit::<T>(-0.284496736);
    let a3 = lit::<T>(1.421413741);
    let a4 = lit::<T>(-1.453152027);
    let a5 = lit::<T>(1.061405429);
    let p = lit::<T>(0.3275911);

    let t = one / (one + p * abs_x);
    let poly = a1 + t * (a2 + t * (a3 + t * (a4 + t * a5)));
    let erfc_abs = t * poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < T::zero() {
        lit::<T>(2.0) - erfc_abs
    } else {
        erfc_abs
    }
}

/// Standard normal cumulative distribution function.
///
/// Computes P(X <= x) where X ~ N(0, 1) as Φ(x) = ½·erfc(-x / √2).
///
/// # Accuracy
/// Absolute error below 1e-7 for all finite x.
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!(norm_cdf(-3.0_f64) < 0.01);
/// assert!(norm_cdf(3.0_f64) > 0.99);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    lit::<T>(0.5) * erfc_approx(-x / lit::<T>(SQRT_2))
}

/// Standard normal probability density function.
///
/// φ(x) = (1 / √(2π)) · exp(-x² / 2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.3989422804).abs() < 1e-7);
/// assert!((norm_pdf(1.0_f64) - 0.2419707245).abs() < 1e-7);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    lit::<T>(FRAC_1_SQRT_2PI) * (-lit::<T>(0.5) * x * x).exp()
}

/// Standard normal quantile function Φ⁻¹(p).
///
/// Acklam's rational approximation, split into a lower tail, a central region
/// and an upper tail. Relative error is below 1.2e-9 over (0, 1).
///
/// Returns `-inf` at `p = 0`, `+inf` at `p = 1` and NaN outside [0, 1].
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_inv_cdf;
///
/// assert_eq!(norm_inv_cdf(0.5), 0.0);
/// assert!((norm_inv_cdf(0.975) - 1.959963984540054).abs() < 1e-8);
/// ```
pub fn norm_inv_cdf(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }
    if p == 0.5 {
        return 0.0;
    }

    if p < INV_CDF_P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        tail_ratio(q)
    } else if p <= INV_CDF_P_HIGH {
        let q = p - 0.5;
        let r = q * q;
        let num = ((((ACKLAM_A[0] * r + ACKLAM_A[1]) * r + ACKLAM_A[2]) * r + ACKLAM_A[3]) * r
            + ACKLAM_A[4])
            * r
            + ACKLAM_A[5];
        let den = ((((ACKLAM_B[0] * r + ACKLAM_B[1]) * r + ACKLAM_B[2]) * r + ACKLAM_B[3]) * r
            + ACKLAM_B[4])
            * r
            + 1.0;
        num * q / den
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -tail_ratio(q)
    }
}

/// Lower-tail rational function in q = √(-2 ln p).
#[inline]
fn tail_ratio(q: f64) -> f64 {
    let num = ((((ACKLAM_C[0] * q + ACKLAM_C[1]) * q + ACKLAM_C[2]) * q + ACKLAM_C[3]) * q
        + ACKLAM_C[4])
        * q
        + ACKLAM_C[5];
    let den = (((ACKLAM_D[0] * q + ACKLAM_D[1]) * q + ACKLAM_D[2]) * q + ACKLAM_D[3]) * q + 1.0;
    num / den
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_norm_cdf_reference_values() {
        assert_relative_eq!(norm_cdf(0.0_f64), 0.5, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(1.0_f64), 0.8413447460685429, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-1.0_f64), 0.15865525393145707, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(2.0_f64), 0.9772498680518208, epsilon = 1e-7);
        assert_relative_eq!(norm_cdf(-2.0_f64), 0.022750131948179195, epsilon = 1e-7);
    }

    #[test]
    fn test_norm_cdf_symmetry() {
        for &x in &[0.1, 0.5, 1.0, 1.5, 2.5, 4.0] {
            assert_relative_eq!(norm_cdf(x) + norm_cdf(-x), 1.0_f64, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_norm_cdf_extreme_values() {
        let hi = norm_cdf(10.0_f64);
        assert!(hi > 0.9999999 && hi <= 1.0);
        let lo = norm_cdf(-10.0_f64);
        assert!((0.0..1e-7).contains(&lo));
    }

    #[test]
    fn test_norm_cdf_f32_compatibility() {
        assert!((norm_cdf(0.0_f32) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn test_norm_pdf_reference_values() {
        assert_relative_eq!(norm_pdf(0.0_f64), FRAC_1_SQRT_2PI, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(1.0_f64), 0.24197072451914337, epsilon = 1e-12);
        assert_relative_eq!(norm_pdf(2.0_f64), 0.05399096651318806, epsilon = 1e-12);
    }

    #[test]
    fn test_cdf_pdf_relationship() {
        let h = 1e-3;
        for &x in &[-2.0, -0.5, 0.0, 0.7, 1.8] {
            let derivative = (norm_cdf(x + h) - norm_cdf(x - h)) / (2.0 * h);
            assert_relative_eq!(derivative, norm_pdf(x), epsilon = 1e-3);
        }
    }

    #[test]
    fn test_norm_inv_cdf_reference_values() {
        assert_eq!(norm_inv_cdf(0.5), 0.0);
        assert_relative_eq!(norm_inv_cdf(0.975), 1.959963984540054, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.025), -1.959963984540054, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.995), 2.5758293035489004, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.95), 1.6448536269514722, epsilon = 1e-8);
        assert_relative_eq!(norm_inv_cdf(0.001), -3.090232306167813, epsilon = 1e-8);
    }

    #[test]
    fn test_norm_inv_cdf_boundaries() {
        assert_eq!(norm_inv_cdf(0.0), f64::NEG_INFINITY);
        assert_eq!(norm_inv_cdf(1.0), f64::INFINITY);
        assert!(norm_inv_cdf(-0.1).is_nan());
        assert!(norm_inv_cdf(1.1).is_nan());
        assert!(norm_inv_cdf(f64::NAN).is_nan());
    }

    proptest! {
        #[test]
        fn prop_inv_cdf_inverts_cdf(p in 0.001f64..0.999) {
            let x = norm_inv_cdf(p);
            prop_assert!((norm_cdf(x) - p).abs() < 1e-6);
        }

        #[test]
        fn prop_inv_cdf_monotonic(a in 0.0001f64..0.9999, b in 0.0001f64..0.9999) {
            prop_assume!(a < b);
            prop_assert!(norm_inv_cdf(a) <= norm_inv_cdf(b));
        }
    }
}
