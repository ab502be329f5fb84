use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::diagnostics::DiagnosticRecord;

/// Store for records of unexpected failures.
#[async_trait]
pub trait DiagnosticLogRepository: Send + Sync {
    async fn save(&self, record: &DiagnosticRecord) -> Result<(), RepositoryError>;
}
