//! CLI error types

use thiserror::Error;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Scenario file could not be used
    #[error("Invalid scenario: {0}")]
    Scenario(String),

    /// Governance call rejected outside a scenario
    #[error("Consortium error: {0}")]
    Consortium(#[from] consortium_types::ConsortiumError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
