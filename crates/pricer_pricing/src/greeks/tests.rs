//! Tests for Monte Carlo Greeks.
//!
//! This module contains tests verifying:
//! - Deterministic steps in degenerate regimes
//! - Agreement of pathwise and finite-difference estimators with closed form
//! - Eager validation of bumps and sample counts

use super::*;
use crate::mc::{
    mean_and_std_error, simulate_terminal, vanilla_payoffs, GbmParams, MonteCarloConfig,
    MonteCarloPricer, PayoffParams,
};
use crate::rng::standard_normals;
use approx::assert_relative_eq;
use pricer_core::types::{ModelParameters, OptionType, PricingError};
use pricer_models::analytical::BlackScholes;

fn pricer(n_paths: usize, seed: u64) -> MonteCarloPricer {
    MonteCarloPricer::new(
        MonteCarloConfig::builder()
            .n_paths(n_paths)
            .seed(seed)
            .antithetic(true)
            .build()
            .unwrap(),
    )
}

fn canonical() -> ModelParameters {
    ModelParameters::new(100.0, 100.0, 0.02, 0.01, 0.2, 1.0).unwrap()
}

// =============================================================================
// Degenerate regimes
// =============================================================================

mod degenerate_tests {
    use super::*;

    #[test]
    fn test_pathwise_step_at_expiry() {
        let p = pricer(16, 1);
        let itm = ModelParameters::new(120.0, 100.0, 0.03, 0.0, 0.2, 0.0).unwrap();
        let otm = ModelParameters::new(80.0, 100.0, 0.03, 0.0, 0.2, 0.0).unwrap();

        let cases = [
            (&itm, OptionType::Call, 1.0),
            (&itm, OptionType::Put, 0.0),
            (&otm, OptionType::Call, 0.0),
            (&otm, OptionType::Put, -1.0),
        ];
        for (params, option, expected) in cases {
            let delta = p.delta_pathwise(params, option).unwrap();
            assert_eq!(delta.estimate, expected, "{:?}", option);
            assert_eq!(delta.std_error, 0.0);
            assert_eq!(delta.ci(), (expected, expected));
        }
    }

    #[test]
    fn test_pathwise_step_without_volatility() {
        // forward 100·e^{0.05} > 95
        let params = ModelParameters::new(100.0, 95.0, 0.05, 0.0, 0.0, 1.0).unwrap();
        let p = pricer(16, 2);
        assert_eq!(p.delta_pathwise(&params, OptionType::Call).unwrap().estimate, 1.0);
        assert_eq!(p.delta_pathwise(&params, OptionType::Put).unwrap().estimate, 0.0);
    }

    #[test]
    fn test_fd_delta_at_expiry() {
        let params = ModelParameters::new(110.0, 100.0, 0.05, 0.0, 0.3, 0.0).unwrap();
        let delta = pricer(16, 3)
            .delta_fd_crn(&params, OptionType::Call, &GreeksConfig::default())
            .unwrap();
        assert_relative_eq!(delta.estimate, 1.0, epsilon = 1e-9);
        assert_eq!(delta.std_error, 0.0);
    }

    #[test]
    fn test_fd_vega_at_expiry_is_zero() {
        let params = ModelParameters::new(110.0, 100.0, 0.05, 0.0, 0.3, 0.0).unwrap();
        let vega = pricer(16, 4)
            .vega_fd_crn(&params, OptionType::Put, &GreeksConfig::default())
            .unwrap();
        assert_eq!(vega.estimate, 0.0);
        assert_eq!(vega.std_error, 0.0);
    }

    #[test]
    fn test_vega_down_bump_floored_at_zero() {
        // forward equals strike, so the floored leg pays nothing
        let sigma = 5e-5;
        let bump = 1e-4;
        let params = ModelParameters::new(100.0, 100.0, 0.0, 0.0, sigma, 1.0).unwrap();
        let config = GreeksConfig::builder().vol_bump_absolute(bump).build().unwrap();
        let vega = pricer(1_000, 5)
            .vega_fd_crn(&params, OptionType::Call, &config)
            .unwrap();

        let sigma_up = sigma + bump;
        let span = sigma_up - 0.0;
        let normals = standard_normals(1_000, Some(5), true).unwrap();
        let payoff = PayoffParams::call(100.0);
        let gbm_up = GbmParams::new(100.0, 0.0, 0.0, sigma_up, 1.0);
        let gbm_down = GbmParams::new(100.0, 0.0, 0.0, 0.0, 1.0);
        let up = simulate_terminal(&gbm_up, &normals).unwrap();
        let down = simulate_terminal(&gbm_down, &normals).unwrap();
        let payoff_up = vanilla_payoffs(&up, payoff).unwrap();
        let payoff_down = vanilla_payoffs(&down, payoff).unwrap();
        assert!(payoff_down.iter().all(|&d| d == 0.0));

        let scale = params.discount_factor() / span;
        let samples: Vec<f64> = payoff_up
            .iter()
            .zip(&payoff_down)
            .map(|(&u, &d)| scale * (u - d))
            .collect();
        let (expected, expected_se) = mean_and_std_error(&samples).unwrap();

        assert_relative_eq!(vega.estimate, expected, max_relative = 1e-12);
        assert_relative_eq!(vega.std_error, expected_se, max_relative = 1e-12);

        // dividing by the nominal 2ε would understate by a quarter
        let nominal = expected * span / (2.0 * bump);
        assert!((vega.estimate - nominal).abs() > 0.2 * vega.estimate.abs());
        // small-σ limit of the closed form: S·√T·φ(0)
        assert!((vega.estimate - 39.894).abs() < 7.0, "vega {}", vega.estimate);
    }
}

// =============================================================================
// Closed-form agreement
// =============================================================================

mod estimator_tests {
    use super::*;

    const N: usize = 50_000;

    #[test]
    fn test_pathwise_delta_matches_closed_form() {
        let params = canonical();
        let bs = BlackScholes::new(&params);
        for option in OptionType::ALL {
            let delta = pricer(N, 42).delta_pathwise(&params, option).unwrap();
            let err = (delta.estimate - bs.delta(option)).abs();
            assert!(err < 5.0 * delta.std_error, "{:?}: err {}", option, err);
        }
    }

    #[test]
    fn test_fd_delta_matches_closed_form() {
        let params = canonical();
        let bs = BlackScholes::new(&params);
        let delta = pricer(N, 42)
            .delta_fd_crn(&params, OptionType::Call, &GreeksConfig::default())
            .unwrap();
        assert!((delta.estimate - bs.delta(OptionType::Call)).abs() < 5.0 * delta.std_error);
    }

    #[test]
    fn test_fd_vega_matches_closed_form() {
        let params = canonical();
        let bs = BlackScholes::new(&params);
        let vega = pricer(N, 42)
            .vega_fd_crn(&params, OptionType::Call, &GreeksConfig::default())
            .unwrap();
        assert!((vega.estimate - bs.vega()).abs() < 5.0 * vega.std_error);
    }

    #[test]
    fn test_fd_and_pathwise_delta_close_with_crn() {
        // same draws, tiny bump: per-path samples nearly coincide
        let params = canonical();
        let p = pricer(20_000, 9);
        let pathwise = p.delta_pathwise(&params, OptionType::Call).unwrap();
        let fd = p
            .delta_fd_crn(&params, OptionType::Call, &GreeksConfig::default())
            .unwrap();
        assert!((pathwise.estimate - fd.estimate).abs() < 0.5 * pathwise.std_error);
    }

    #[test]
    fn test_greeks_are_deterministic() {
        let params = canonical();
        let p = pricer(2_000, 77);
        let config = GreeksConfig::default();
        assert_eq!(
            p.vega_fd_crn(&params, OptionType::Put, &config).unwrap(),
            p.vega_fd_crn(&params, OptionType::Put, &config).unwrap()
        );
        assert_eq!(
            p.delta_pathwise(&params, OptionType::Put).unwrap(),
            p.delta_pathwise(&params, OptionType::Put).unwrap()
        );
    }
}

// =============================================================================
// Validation
// =============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_single_path_rejected() {
        let p = pricer(1, 1);
        let params = canonical();
        let config = GreeksConfig::default();
        let expected = Err(PricingError::InsufficientSamples { required: 2, actual: 1 });

        assert_eq!(p.delta_pathwise(&params, OptionType::Call), expected);
        assert_eq!(p.delta_fd_crn(&params, OptionType::Call, &config), expected);
        assert_eq!(p.vega_fd_crn(&params, OptionType::Call, &config), expected);
    }

    #[test]
    fn test_single_path_rejected_in_degenerate_regime() {
        let params = ModelParameters::new(100.0, 90.0, 0.0, 0.0, 0.0, 1.0).unwrap();
        assert!(matches!(
            pricer(1, 1).delta_pathwise(&params, OptionType::Call),
            Err(PricingError::InsufficientSamples { .. })
        ));
    }

    #[test]
    fn test_invalid_bumps_rejected() {
        let p = pricer(100, 1);
        let params = canonical();

        let bad_spot = GreeksConfig {
            spot_bump_relative: 1.5,
            ..GreeksConfig::default()
        };
        assert!(matches!(
            p.delta_fd_crn(&params, OptionType::Call, &bad_spot),
            Err(PricingError::InvalidArgument(_))
        ));

        let bad_vol = GreeksConfig {
            vol_bump_absolute: 0.0,
            ..GreeksConfig::default()
        };
        assert!(matches!(
            p.vega_fd_crn(&params, OptionType::Call, &bad_vol),
            Err(PricingError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_each_estimator_checks_only_its_own_bump() {
        let p = pricer(100, 1);
        let params = canonical();

        let bad_spot = GreeksConfig {
            spot_bump_relative: 1.5,
            ..GreeksConfig::default()
        };
        assert!(p.vega_fd_crn(&params, OptionType::Call, &bad_spot).is_ok());

        let bad_vol = GreeksConfig {
            vol_bump_absolute: f64::NAN,
            ..GreeksConfig::default()
        };
        assert!(p.delta_fd_crn(&params, OptionType::Put, &bad_vol).is_ok());
    }
}
