//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Environment file could not be read: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host or port")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid database URL format")]
    InvalidDatabaseUrl,

    #[error("Pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("Pool size exceeds maximum allowed (100)")]
    PoolSizeTooLarge,

    #[error("JWT secret must be at least 32 bytes in production")]
    JwtSecretTooShort,

    #[error("Token lifetimes must be between 1 second and one year, with access shorter than refresh")]
    InvalidTokenLifetime,

    #[error("bcrypt cost must be between 4 and 31")]
    InvalidBcryptCost,

    #[error("Temperature must be between 0.0 and 2.0")]
    InvalidTemperature,

    #[error("Completion timeout must be between 1 and 300 seconds")]
    InvalidCompletionTimeout,

    #[error("Field length limit for {0} must be positive")]
    InvalidLengthLimit(&'static str),
}
