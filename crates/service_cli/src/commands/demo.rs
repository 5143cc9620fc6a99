//! Demo command: Monte Carlo prices and Greeks next to Black-Scholes.
//!
//! # Example Output
//!
//! ```text
//!  CALL | MC=  8.433141  stderr=0.029502  CI95=[ 8.375318,  8.490964]  BS=  8.432015
//!       | CV=  8.431880  stderr=0.012841  CI95=[ 8.406712,  8.457048]  beta=0.6132
//! ```

use clap::{Args, ValueEnum};
use pricer_core::types::{ModelParameters, OptionType};
use pricer_models::analytical::BlackScholes;
use pricer_pricing::mc::{EstimateResult, MonteCarloPricer};
use serde::Serialize;
use tracing::{debug, info};

use crate::config::CliConfig;
use crate::Result;

/// Which option kinds to price
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OptionChoice {
    Call,
    Put,
    Both,
}

impl OptionChoice {
    /// Option kinds in print order
    pub fn kinds(&self) -> &'static [OptionType] {
        match self {
            OptionChoice::Call => &[OptionType::Call],
            OptionChoice::Put => &[OptionType::Put],
            OptionChoice::Both => &OptionType::ALL,
        }
    }
}

/// Output rendering
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Flags of the `demo` subcommand; unset values fall back to the config
#[derive(Args, Debug, Clone)]
pub struct DemoArgs {
    /// Spot price
    #[arg(long)]
    pub s0: Option<f64>,
    /// Strike
    #[arg(long)]
    pub k: Option<f64>,
    /// Risk-free rate
    #[arg(long, allow_negative_numbers = true)]
    pub r: Option<f64>,
    /// Dividend yield
    #[arg(long, allow_negative_numbers = true)]
    pub q: Option<f64>,
    /// Volatility
    #[arg(long)]
    pub sigma: Option<f64>,
    /// Maturity in years
    #[arg(long)]
    pub t: Option<f64>,

    /// Option kinds to price
    #[arg(long, value_enum, default_value_t = OptionChoice::Both)]
    pub option: OptionChoice,
    /// Number of Monte Carlo paths
    #[arg(long)]
    pub n_paths: Option<usize>,
    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,
    /// Pair every draw with its negation
    #[arg(long)]
    pub antithetic: bool,

    /// Also price with the discounted-underlying control variate
    #[arg(long)]
    pub cv: bool,
    /// Also compute Monte Carlo Greeks for the call
    #[arg(long)]
    pub greeks: bool,
    /// Relative spot bump for the finite-difference delta
    #[arg(long)]
    pub bump_s0: Option<f64>,
    /// Absolute volatility bump for the finite-difference vega
    #[arg(long)]
    pub bump_sigma: Option<f64>,
    /// Also price the arithmetic Asian option
    #[arg(long)]
    pub asian: bool,
    /// Monitoring steps for the Asian option
    #[arg(long)]
    pub asian_steps: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

impl DemoArgs {
    /// Merge flags into the configuration (flags take precedence)
    pub fn apply(&self, config: &mut CliConfig) {
        let m = &mut config.market;
        let overrides = [
            (self.s0, &mut m.s0),
            (self.k, &mut m.k),
            (self.r, &mut m.r),
            (self.q, &mut m.q),
            (self.sigma, &mut m.sigma),
            (self.t, &mut m.t),
        ];
        for (flag, slot) in overrides {
            if let Some(value) = flag {
                *slot = value;
            }
        }

        let s = &mut config.simulation;
        if let Some(n) = self.n_paths {
            s.n_paths = n;
        }
        if let Some(seed) = self.seed {
            s.seed = Some(seed);
        }
        if self.antithetic {
            s.antithetic = true;
        }
        if let Some(bump) = self.bump_s0 {
            s.bump_s0 = bump;
        }
        if let Some(bump) = self.bump_sigma {
            s.bump_sigma = bump;
        }
        if let Some(steps) = self.asian_steps {
            s.asian_steps = steps;
        }
    }

    /// What the demo computes
    pub fn sections(&self) -> DemoSections {
        DemoSections {
            option: self.option,
            cv: self.cv,
            greeks: self.greeks,
            asian: self.asian || self.asian_steps.is_some(),
        }
    }
}

/// Selection of demo outputs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DemoSections {
    pub option: OptionChoice,
    pub cv: bool,
    pub greeks: bool,
    pub asian: bool,
}

/// Estimator used for a price line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    Plain,
    ControlVariate,
    AsianArithmetic,
}

/// One priced line
#[derive(Debug, Clone, Serialize)]
pub struct PriceLine {
    pub option: OptionType,
    pub method: Method,
    pub result: EstimateResult,
    /// Closed-form reference, where one exists
    pub black_scholes: Option<f64>,
}

/// One Greek estimate with its closed-form reference
#[derive(Debug, Clone, Serialize)]
pub struct GreekLine {
    pub name: &'static str,
    pub result: EstimateResult,
    pub black_scholes: f64,
}

/// Everything the demo reports
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub parameters: ModelParameters,
    pub n_paths: usize,
    pub seed: Option<u64>,
    pub antithetic: bool,
    pub asian_steps: usize,
    pub prices: Vec<PriceLine>,
    pub greeks: Vec<GreekLine>,
}

/// Runs the demo and prints the report
pub fn run(config: &CliConfig, sections: DemoSections, format: OutputFormat) -> Result<()> {
    let report = build_report(config, sections)?;

    let rendered = match format {
        OutputFormat::Table => render_table(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    println!("{}", rendered);
    Ok(())
}

/// Computes every requested estimate
pub fn build_report(config: &CliConfig, sections: DemoSections) -> Result<DemoReport> {
    let params = config.model_parameters()?;
    let mc_config = config.monte_carlo_config()?;
    let pricer = MonteCarloPricer::new(mc_config.clone());
    let bs = BlackScholes::new(&params);

    info!(
        n_paths = mc_config.n_paths(),
        seed = ?mc_config.seed(),
        antithetic = mc_config.antithetic(),
        "Running demo"
    );

    let mut prices = Vec::new();
    for &option in sections.option.kinds() {
        let result = pricer.price_european(&params, option)?;
        debug!(%option, estimate = result.estimate, std_error = result.std_error, "Priced");
        prices.push(PriceLine {
            option,
            method: Method::Plain,
            result,
            black_scholes: Some(bs.price(option)),
        });

        if sections.cv {
            let result = pricer.price_european_cv(&params, option)?;
            debug!(%option, beta = ?result.beta, "Priced with control variate");
            prices.push(PriceLine {
                option,
                method: Method::ControlVariate,
                result,
                black_scholes: Some(bs.price(option)),
            });
        }

        if sections.asian {
            prices.push(PriceLine {
                option,
                method: Method::AsianArithmetic,
                result: pricer.price_asian_arithmetic(&params, option)?,
                black_scholes: None,
            });
        }
    }

    let mut greeks = Vec::new();
    if sections.greeks {
        let bumps = config.greeks_config()?;
        let call = OptionType::Call;
        greeks.push(GreekLine {
            name: "Delta (pathwise)",
            result: pricer.delta_pathwise(&params, call)?,
            black_scholes: bs.delta(call),
        });
        greeks.push(GreekLine {
            name: "Delta (FD+CRN)",
            result: pricer.delta_fd_crn(&params, call, &bumps)?,
            black_scholes: bs.delta(call),
        });
        greeks.push(GreekLine {
            name: "Vega  (FD+CRN)",
            result: pricer.vega_fd_crn(&params, call, &bumps)?,
            black_scholes: bs.vega(),
        });
    }

    Ok(DemoReport {
        parameters: params,
        n_paths: mc_config.n_paths(),
        seed: mc_config.seed(),
        antithetic: mc_config.antithetic(),
        asian_steps: mc_config.n_steps(),
        prices,
        greeks,
    })
}

fn ci_label(result: &EstimateResult) -> String {
    format!("CI{:.0}", result.confidence_level * 100.0)
}

/// Renders the report as a text table
pub fn render_table(report: &DemoReport) -> String {
    let p = &report.parameters;
    let seed = report
        .seed
        .map_or_else(|| "none".to_string(), |s| s.to_string());

    let mut out = format!(
        "Parameters:\n  S0={}, K={}, r={}, q={}, sigma={}, T={}\n  n_paths={}, seed={}, antithetic={}\n\n",
        p.spot(),
        p.strike(),
        p.rate(),
        p.dividend_yield(),
        p.volatility(),
        p.maturity(),
        report.n_paths,
        seed,
        report.antithetic
    );

    for line in &report.prices {
        let r = &line.result;
        let (tag, label) = match line.method {
            Method::Plain => (line.option.as_str().to_uppercase(), "MC"),
            Method::ControlVariate => (String::new(), "CV"),
            Method::AsianArithmetic => (String::new(), "AS"),
        };
        let tail = match (line.method, line.black_scholes, r.beta) {
            (Method::ControlVariate, _, Some(beta)) => format!("beta={:.4}", beta),
            (_, Some(bs), _) => format!("BS={:9.6}", bs),
            _ => format!("steps={}", report.asian_steps),
        };
        out.push_str(&format!(
            "{:>5} | {}= {:9.6}  stderr={:8.6}  {}=[{:9.6}, {:9.6}]  {}\n",
            tag,
            label,
            r.estimate,
            r.std_error,
            ci_label(r),
            r.ci_low,
            r.ci_high,
            tail
        ));
    }

    if !report.greeks.is_empty() {
        out.push_str("\nGreeks (CALL):\n");
        for g in &report.greeks {
            let r = &g.result;
            out.push_str(&format!(
                "  {}: {:.6}  {}=[{:.6}, {:.6}]  BS={:.6}\n",
                g.name,
                r.estimate,
                ci_label(r),
                r.ci_low,
                r.ci_high,
                g.black_scholes
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        demo: DemoArgs,
    }

    fn small_config() -> CliConfig {
        let mut config = CliConfig::default();
        config.simulation.n_paths = 2_000;
        config.simulation.antithetic = true;
        config.simulation.asian_steps = 4;
        config
    }

    #[test]
    fn test_flags_override_config() {
        let args = Harness::parse_from([
            "demo", "--s0", "95", "--r", "-0.01", "--seed", "9", "--antithetic", "--n-paths", "500",
            "--asian-steps", "12",
        ])
        .demo;
        let mut config = CliConfig::default();
        args.apply(&mut config);

        assert_eq!(config.market.s0, 95.0);
        assert_eq!(config.market.r, -0.01);
        assert_eq!(config.market.k, 100.0);
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.simulation.n_paths, 500);
        assert_eq!(config.simulation.asian_steps, 12);
        assert!(config.simulation.antithetic);
        assert!(args.sections().asian);
        assert_eq!(args.option, OptionChoice::Both);
        assert_eq!(args.format, OutputFormat::Table);
    }

    #[test]
    fn test_report_sections() {
        let sections = DemoSections {
            option: OptionChoice::Both,
            cv: true,
            greeks: true,
            asian: true,
        };
        let report = build_report(&small_config(), sections).unwrap();

        assert_eq!(report.prices.len(), 6);
        assert_eq!(report.prices[1].method, Method::ControlVariate);
        assert!(report.prices[1].result.beta.is_some());
        assert_eq!(report.prices[2].method, Method::AsianArithmetic);
        assert!(report.prices[2].black_scholes.is_none());
        assert_eq!(report.greeks.len(), 3);
        assert_eq!(report.asian_steps, 4);
    }

    #[test]
    fn test_table_and_json_rendering() {
        let sections = DemoSections {
            option: OptionChoice::Call,
            cv: true,
            greeks: false,
            asian: false,
        };
        let report = build_report(&small_config(), sections).unwrap();

        let table = render_table(&report);
        assert!(table.contains(" CALL | MC="));
        assert!(table.contains("CV="));
        assert!(table.contains("beta="));
        assert!(table.contains("CI95=["));
        assert!(!table.contains("Greeks"));

        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).unwrap()).unwrap();
        assert_eq!(json["prices"][0]["option"], "call");
        assert_eq!(json["prices"][1]["method"], "control_variate");
        assert_eq!(json["prices"][1]["result"]["control"], "discounted_underlying");
        assert_eq!(json["n_paths"].as_u64(), Some(2_000));
    }

    #[test]
    fn test_invalid_market_is_reported() {
        let mut config = small_config();
        config.market.k = -1.0;
        let sections = DemoSections {
            option: OptionChoice::Put,
            cv: false,
            greeks: false,
            asian: false,
        };
        assert!(matches!(
            build_report(&config, sections),
            Err(crate::CliError::Pricing(_))
        ));
    }
}
