use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("password hashing failed: {0}")]
pub struct PasswordHashError(pub String);

/// One-way password hashing.
///
/// Async because hashing is deliberately slow and runs off the request task.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, PasswordHashError>;

    /// Returns `Ok(false)` for a mismatch; errors are reserved for unusable hashes.
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordHashError>;
}
