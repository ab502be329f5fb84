use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{RepositoryError, TokenBlacklist};

/// In-memory revoked token set.
///
/// Expired entries are never pruned; a revoked token past its expiry fails
/// signature validation anyway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTokenBlacklist {
    revoked: Arc<RwLock<HashMap<Uuid, (UserId, Timestamp)>>>,
}

impl InMemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.revoked.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl TokenBlacklist for InMemoryTokenBlacklist {
    async fn revoke(
        &self,
        jti: Uuid,
        user_id: UserId,
        expires_at: Timestamp,
    ) -> Result<(), RepositoryError> {
        self.revoked
            .write()
            .await
            .entry(jti)
            .or_insert((user_id, expires_at));
        Ok(())
    }

    async fn is_revoked(&self, jti: Uuid) -> Result<bool, RepositoryError> {
        Ok(self.revoked.read().await.contains_key(&jti))
    }
}
