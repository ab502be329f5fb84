use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::diagnostics::DiagnosticRecord;
use crate::ports::{DiagnosticLogRepository, RepositoryError};

/// Writes unexpected-failure records to `log_system`.
pub struct PostgresDiagnosticLogRepository {
    pool: PgPool,
}

impl PostgresDiagnosticLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DiagnosticLogRepository for PostgresDiagnosticLogRepository {
    async fn save(&self, record: &DiagnosticRecord) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO log_system (
                user_id, timestamp, request_path, request_method, request_data,
                logger_name, module, function_name, traceback
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.user_id.map(|id| id.value()))
        .bind(record.timestamp.as_datetime())
        .bind(&record.request_path)
        .bind(&record.request_method)
        .bind(&record.request_data)
        .bind(&record.logger_name)
        .bind(&record.module)
        .bind(&record.function_name)
        .bind(&record.traceback)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to save diagnostic record: {}", e)))?;

        Ok(())
    }
}
