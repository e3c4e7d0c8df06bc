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
    #[error("Invalid host address")]
    InvalidHost,

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Recommendation cutoff must be between 1 and 5")]
    InvalidRecommendationCutoff,

    #[error("Max recommendations must be at least 1")]
    InvalidMaxRecommendations,

    #[error("Fit bands must satisfy 0 <= poor_below < strong_above <= 100")]
    InvalidFitBands,
}
