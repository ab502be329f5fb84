//! Content generation error types.

use thiserror::Error;

use crate::ports::{AIError, RepositoryError};

/// Failures of the generation capability.
///
/// The provider detail in `FailedDependency` is kept as the error source for
/// logs only; clients see a fixed message.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("completion provider failed")]
    FailedDependency(#[source] AIError),

    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}

impl GenerationError {
    pub fn infrastructure(message: impl Into<String>) -> Self {
        GenerationError::Infrastructure(message.into())
    }
}

impl From<AIError> for GenerationError {
    fn from(err: AIError) -> Self {
        GenerationError::FailedDependency(err)
    }
}

impl From<RepositoryError> for GenerationError {
    fn from(err: RepositoryError) -> Self {
        GenerationError::Infrastructure(err.to_string())
    }
}
