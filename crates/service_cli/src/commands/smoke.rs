//! Smoke command: end-to-end statistical check against Black-Scholes.
//!
//! Fixed inputs (S0=K=100, r=2%, q=1%, σ=20%, T=1, 80k antithetic paths,
//! seed 42) keep the check fast and reproducible. Tolerances:
//! - prices within 5 standard errors
//! - control-variate standard error at most 1.05× the plain one
//! - deltas within 5 and vega within 6 standard errors

use pricer_core::types::{ModelParameters, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_pricing::greeks::GreeksConfig;
use pricer_pricing::mc::{EstimateResult, MonteCarloConfig, MonteCarloPricer};
use tracing::{info, warn};

use crate::{CliError, Result};

const N_PATHS: usize = 80_000;
const SEED: u64 = 42;

/// Outcome of one smoke check
#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

fn within(name: &str, result: &EstimateResult, reference: f64, k: f64) -> Check {
    let err = (result.estimate - reference).abs();
    Check {
        name: name.to_string(),
        passed: err <= k * result.std_error,
        detail: format!(
            "MC={:.6}  stderr={:.6}  ref={:.6}  |err|={:.6}  limit={}*stderr",
            result.estimate, result.std_error, reference, err, k
        ),
    }
}

/// Runs every smoke check without failing early
pub fn checks() -> Result<Vec<Check>> {
    let params = ModelParameters::new(100.0, 100.0, 0.02, 0.01, 0.2, 1.0)?;
    let config = MonteCarloConfig::builder()
        .n_paths(N_PATHS)
        .seed(SEED)
        .antithetic(true)
        .build()?;
    let pricer = MonteCarloPricer::new(config);
    let bs = BlackScholes::new(&params);
    let bumps = GreeksConfig::default();

    let mut out = Vec::new();
    for option in OptionType::ALL {
        let plain = pricer.price_european(&params, option)?;
        out.push(within(&format!("{} price", option), &plain, bs.price(option), 5.0));

        let cv = pricer.price_european_cv(&params, option)?;
        out.push(Check {
            name: format!("{} control variate", option),
            passed: cv.std_error <= 1.05 * plain.std_error,
            detail: format!(
                "cv stderr={:.6}  plain stderr={:.6}  beta={:.4}",
                cv.std_error,
                plain.std_error,
                cv.beta.unwrap_or(f64::NAN)
            ),
        });
    }

    let call = OptionType::Call;
    let delta = bs.delta(call);
    out.push(within(
        "delta (pathwise)",
        &pricer.delta_pathwise(&params, call)?,
        delta,
        5.0,
    ));
    out.push(within(
        "delta (FD+CRN)",
        &pricer.delta_fd_crn(&params, call, &bumps)?,
        delta,
        5.0,
    ));
    out.push(within(
        "vega (FD+CRN)",
        &pricer.vega_fd_crn(&params, call, &bumps)?,
        bs.vega(),
        6.0,
    ));

    Ok(out)
}

/// Runs the smoke test, failing with [`CliError::SmokeFailure`] if any check fails
pub fn run() -> Result<()> {
    println!("E2E smoke parameters:");
    println!("  S0=100, K=100, r=0.02, q=0.01, sigma=0.2, T=1");
    println!("  n_paths={}, seed={}, antithetic=true\n", N_PATHS, SEED);

    let results = checks()?;
    let mut failed = Vec::new();
    for check in &results {
        let status = if check.passed { "ok" } else { "FAIL" };
        println!("  [{:>4}] {:<24} {}", status, check.name, check.detail);
        if !check.passed {
            warn!(check = %check.name, detail = %check.detail, "Smoke check failed");
            failed.push(check.name.clone());
        }
    }

    if failed.is_empty() {
        info!(checks = results.len(), "Smoke test passed");
        println!("\nE2E smoke passed.");
        Ok(())
    } else {
        Err(CliError::SmokeFailure(failed.join(", ")))
    }
}
