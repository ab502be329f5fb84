//! PostgreSQL implementation of TokenBlacklist.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::foundation::{Timestamp, UserId};
use crate::ports::{RepositoryError, TokenBlacklist};

pub struct PostgresTokenBlacklist {
    pool: PgPool,
}

impl PostgresTokenBlacklist {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenBlacklist for PostgresTokenBlacklist {
    async fn revoke(
        &self,
        jti: Uuid,
        user_id: UserId,
        expires_at: Timestamp,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO token_blacklist (jti, user_id, expires_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (jti) DO NOTHING
            "#,
        )
        .bind(jti)
        .bind(user_id.value())
        .bind(expires_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to blacklist token: {}", e)))?;

        Ok(())
    }

    async fn is_revoked(&self, jti: Uuid) -> Result<bool, RepositoryError> {
        let revoked: bool =
            sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM token_blacklist WHERE jti = $1)")
                .bind(jti)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| RepositoryError::database(e.to_string()))?;

        Ok(revoked)
    }
}
