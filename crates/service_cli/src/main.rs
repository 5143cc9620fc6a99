//! mc-pricer - Command Line Operations for the Monte Carlo Option Pricer
//!
//! # Commands
//!
//! - `mc-pricer demo` - Price European (and optionally Asian) options, compare with Black-Scholes
//! - `mc-pricer benchmark` - Time plain, antithetic and control-variate estimators
//! - `mc-pricer smoke` - End-to-end statistical smoke test
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate wires configuration and
//! logging around the pricer_pricing engine and the pricer_models oracle.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::benchmark::BenchmarkArgs;
use commands::demo::DemoArgs;
use config::{CliConfig, LogLevel};

/// Monte Carlo option pricer CLI
#[derive(Parser)]
#[command(name = "mc-pricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price European options and compare against Black-Scholes
    Demo(DemoArgs),

    /// Time the European call estimators
    Benchmark(BenchmarkArgs),

    /// Run the end-to-end statistical smoke test
    Smoke,
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = CliConfig::load(cli.config.as_deref())?;
    if let Some(level) = &cli.log_level {
        config.log_level = LogLevel::from_str(level)?;
    }
    match &cli.command {
        Commands::Demo(args) => args.apply(&mut config),
        Commands::Benchmark(args) => args.apply(&mut config),
        Commands::Smoke => {}
    }
    config.validate()?;

    init_tracing(config.log_level);
    info!(
        config_file = ?cli.config,
        log_level = %config.log_level,
        n_paths = config.simulation.n_paths,
        seed = ?config.simulation.seed,
        "Configuration loaded"
    );

    match cli.command {
        Commands::Demo(args) => commands::demo::run(&config, args.sections(), args.format),
        Commands::Benchmark(_) => commands::benchmark::run(&config),
        Commands::Smoke => commands::smoke::run(),
    }
}
