//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid word API base URL")]
    InvalidWordApiUrl,

    #[error("Invalid Ollama URL")]
    InvalidOllamaUrl,

    #[error("Model name must not be empty")]
    EmptyModelName,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,
}
