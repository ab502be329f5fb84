use async_trait::async_trait;
use uuid::Uuid;

use super::RepositoryError;
use crate::domain::foundation::{Timestamp, UserId};

/// Revoked refresh tokens, keyed by `jti`.
#[async_trait]
pub trait TokenBlacklist: Send + Sync {
    /// Revokes `jti` until `expires_at`. Revoking twice is not an error.
    async fn revoke(
        &self,
        jti: Uuid,
        user_id: UserId,
        expires_at: Timestamp,
    ) -> Result<(), RepositoryError>;

    async fn is_revoked(&self, jti: Uuid) -> Result<bool, RepositoryError>;
}
