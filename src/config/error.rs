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

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("max_retries {0} exceeds 10")]
    TooManyRetries(u32),

    #[error("Temperature {0} is outside 0.0..=2.0")]
    InvalidTemperature(f32),

    #[error("Invalid AI base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("Question count {0} is outside 1..=20")]
    QuestionCountOutOfRange(u32),

    #[error("At least one extraction attempt is required")]
    InvalidExtractionAttempts,

    #[error("Invalid log filter: {0}")]
    InvalidLogFilter(String),
}
