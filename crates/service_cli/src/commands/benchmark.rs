//! Benchmark command: wall-clock timing of the European call estimators.

use clap::Args;
use pricer_core::types::OptionType;
use pricer_models::analytical::BlackScholes;
use pricer_pricing::mc::{EstimateResult, MonteCarloConfig, MonteCarloPricer};
use std::time::Instant;
use tracing::info;

use crate::config::CliConfig;
use crate::Result;

/// Flags of the `benchmark` subcommand
#[derive(Args, Debug, Clone)]
pub struct BenchmarkArgs {
    /// Number of Monte Carlo paths
    #[arg(long)]
    pub n_paths: Option<usize>,
    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
}

impl BenchmarkArgs {
    /// Merge flags into the configuration (flags take precedence)
    pub fn apply(&self, config: &mut CliConfig) {
        if let Some(n) = self.n_paths {
            config.simulation.n_paths = n;
        }
        if let Some(seed) = self.seed {
            config.simulation.seed = Some(seed);
        }
    }
}

/// One timed estimator
#[derive(Debug, Clone)]
pub struct BenchmarkRow {
    pub label: &'static str,
    pub result: EstimateResult,
    pub seconds: f64,
}

fn timed<F>(label: &'static str, f: F) -> Result<BenchmarkRow>
where
    F: FnOnce() -> pricer_core::types::PricingResult<EstimateResult>,
{
    let start = Instant::now();
    let result = f()?;
    let seconds = start.elapsed().as_secs_f64();
    info!(label, seconds, "Benchmark run finished");
    Ok(BenchmarkRow {
        label,
        result,
        seconds,
    })
}

/// Times plain, antithetic and control-variate pricing of the call
pub fn measure(config: &CliConfig) -> Result<Vec<BenchmarkRow>> {
    let params = config.model_parameters()?;
    let base = config.monte_carlo_config()?;
    let with_antithetic = |antithetic: bool| -> Result<MonteCarloPricer> {
        let mc = MonteCarloConfig::builder()
            .n_paths(base.n_paths())
            .maybe_seed(base.seed())
            .antithetic(antithetic)
            .confidence_level(base.confidence_level())
            .build()?;
        Ok(MonteCarloPricer::new(mc))
    };
    let plain = with_antithetic(false)?;
    let anti = with_antithetic(true)?;
    let call = OptionType::Call;

    Ok(vec![
        timed("plain", || plain.price_european(&params, call))?,
        timed("antithetic", || anti.price_european(&params, call))?,
        timed("control-variate (antithetic)", || {
            anti.price_european_cv(&params, call)
        })?,
    ])
}

/// Renders the benchmark table
pub fn render(config: &CliConfig, rows: &[BenchmarkRow]) -> Result<String> {
    let bs = BlackScholes::new(&config.model_parameters()?).price(OptionType::Call);
    let seed = config
        .simulation
        .seed
        .map_or_else(|| "none".to_string(), |s| s.to_string());

    let mut out = format!(
        "Benchmark: European CALL  n_paths={}  seed={}\nBS price: {:.6}\n\n",
        config.simulation.n_paths, seed, bs
    );
    out.push_str(&format!(
        "{:<30} {:>12} {:>12} {:>12} {:>10}\n",
        "method", "price", "stderr", "|err|", "time(s)"
    ));
    out.push_str(&"-".repeat(80));
    out.push('\n');
    for row in rows {
        let r = &row.result;
        out.push_str(&format!(
            "{:<30} {:12.6} {:12.6} {:12.6} {:10.3}\n",
            row.label,
            r.estimate,
            r.std_error,
            (r.estimate - bs).abs(),
            row.seconds
        ));
    }
    Ok(out)
}

/// Runs the benchmark and prints the table
pub fn run(config: &CliConfig) -> Result<()> {
    let rows = measure(config)?;
    print!("{}", render(config, &rows)?);
    Ok(())
}
