use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::generation::ContentGenerationLog;
use crate::ports::{GenerationLogRepository, RepositoryError};

/// Writes generation audit rows to `content_generation_logs`.
pub struct PostgresGenerationLogRepository {
    pool: PgPool,
}

impl PostgresGenerationLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenerationLogRepository for PostgresGenerationLogRepository {
    async fn save(&self, log: &ContentGenerationLog) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO content_generation_logs (
                title, objective, data, return_format, response, model_used,
                temperature, prompt_tokens, completion_tokens, created_by, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(&log.title)
        .bind(&log.objective)
        .bind(&log.data)
        .bind(&log.return_format)
        .bind(&log.response)
        .bind(&log.model_used)
        .bind(log.temperature)
        .bind(i32::try_from(log.prompt_tokens).unwrap_or(i32::MAX))
        .bind(i32::try_from(log.completion_tokens).unwrap_or(i32::MAX))
        .bind(log.created_by.value())
        .bind(log.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| {
            RepositoryError::database(format!("Failed to save generation log: {}", e))
        })?;

        Ok(())
    }
}
