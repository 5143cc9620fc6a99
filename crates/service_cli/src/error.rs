//! CLI error types

use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `mc-pricer` binary
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialisation error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Smoke test failed: {0}")]
    SmokeFailure(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
