//! CLI configuration management
//!
//! Handles loading configuration from a TOML file, environment variables and
//! command-line flags.
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables (`MC_PRICER_SEED`, `MC_PRICER_PATHS`,
//!    `MC_PRICER_LOG_LEVEL`)
//! 3. Config file
//! 4. Default values
//!
//! ```toml
//! log_level = "info"
//!
//! [market]
//! s0 = 100.0
//! k = 105.0
//! sigma = 0.25
//!
//! [simulation]
//! n_paths = 100000
//! seed = 7
//! antithetic = true
//! ```

use pricer_core::types::{ModelParameters, PricingError};
use pricer_pricing::greeks::GreeksConfig;
use pricer_pricing::mc::MonteCarloConfig;
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the seed.
pub const ENV_SEED: &str = "MC_PRICER_SEED";
/// Environment variable overriding the path count.
pub const ENV_PATHS: &str = "MC_PRICER_PATHS";
/// Environment variable overriding the log level.
pub const ENV_LOG_LEVEL: &str = "MC_PRICER_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),

    #[error("Invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

/// Black-Scholes market inputs (`[market]` table)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Spot price
    pub s0: f64,
    /// Strike
    pub k: f64,
    /// Risk-free rate
    pub r: f64,
    /// Dividend yield
    pub q: f64,
    /// Volatility
    pub sigma: f64,
    /// Maturity in years
    pub t: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            s0: 100.0,
            k: 100.0,
            r: 0.02,
            q: 0.01,
            sigma: 0.2,
            t: 1.0,
        }
    }
}

/// Simulation settings (`[simulation]` table)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of Monte Carlo paths
    pub n_paths: usize,
    /// Seed; `None` seeds from OS entropy
    pub seed: Option<u64>,
    /// Antithetic pairing
    pub antithetic: bool,
    /// Monitoring steps for arithmetic Asian options
    pub asian_steps: usize,
    /// Confidence level of reported intervals
    pub confidence_level: f64,
    /// Relative spot bump for finite-difference delta
    pub bump_s0: f64,
    /// Absolute volatility bump for finite-difference vega
    pub bump_sigma: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_paths: 200_000,
            seed: Some(42),
            antithetic: false,
            asian_steps: pricer_pricing::mc::DEFAULT_ASIAN_STEPS,
            confidence_level: pricer_pricing::mc::DEFAULT_CONFIDENCE_LEVEL,
            bump_s0: 1e-4,
            bump_sigma: 1e-4,
        }
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Market inputs
    pub market: MarketConfig,
    /// Simulation settings
    pub simulation: SimulationConfig,
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))
    }

    /// File (if any) then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply environment overrides read through `lookup`
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            let seed = seed.trim().parse::<u64>().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not an unsigned integer", ENV_SEED, seed))
            })?;
            self.simulation.seed = Some(seed);
        }

        if let Some(paths) = lookup(ENV_PATHS) {
            self.simulation.n_paths = paths.trim().parse::<usize>().map_err(|_| {
                ConfigError::EnvError(format!("{}={} is not an unsigned integer", ENV_PATHS, paths))
            })?;
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(level.trim())?;
        }

        Ok(())
    }

    /// Validate the configuration, reporting every problem at once
    ///
    /// Each table is checked by the constructor that will consume it, so the
    /// CLI accepts exactly what the engine accepts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let greeks = GreeksConfig {
            spot_bump_relative: self.simulation.bump_s0,
            vol_bump_absolute: self.simulation.bump_sigma,
        };
        let checks = [
            ("market", self.model_parameters().map(|_| ())),
            ("simulation", self.monte_carlo_config().map(|_| ())),
            ("simulation.bump_s0", greeks.validate_spot_bump()),
            ("simulation.bump_sigma", greeks.validate_vol_bump()),
        ];

        let problems: Vec<String> = checks
            .into_iter()
            .filter_map(|(table, check)| check.err().map(|e| format!("{}: {}", table, e)))
            .collect();

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(problems))
        }
    }

    /// Model inputs as validated [`ModelParameters`]
    pub fn model_parameters(&self) -> Result<ModelParameters, PricingError> {
        let m = &self.market;
        ModelParameters::new(m.s0, m.k, m.r, m.q, m.sigma, m.t)
    }

    /// Simulation settings as a validated [`MonteCarloConfig`]
    pub fn monte_carlo_config(&self) -> Result<MonteCarloConfig, PricingError> {
        let s = &self.simulation;
        MonteCarloConfig::builder()
            .n_paths(s.n_paths)
            .n_steps(s.asian_steps)
            .maybe_seed(s.seed)
            .antithetic(s.antithetic)
            .confidence_level(s.confidence_level)
            .build()
    }

    /// Bump widths as a validated [`GreeksConfig`]
    pub fn greeks_config(&self) -> Result<GreeksConfig, PricingError> {
        GreeksConfig::builder()
            .spot_bump_relative(self.simulation.bump_s0)
            .vol_bump_absolute(self.simulation.bump_sigma)
            .build()
    }
}
