use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::generation::ContentGenerationLog;

/// Append-only audit trail of successful generations.
#[async_trait]
pub trait GenerationLogRepository: Send + Sync {
    async fn save(&self, log: &ContentGenerationLog) -> Result<(), RepositoryError>;
}
