use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::diagnostics::DiagnosticRecord;
use crate::ports::{DiagnosticLogRepository, RepositoryError};

/// In-memory diagnostic record store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDiagnosticLogRepository {
    records: Arc<RwLock<Vec<DiagnosticRecord>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryDiagnosticLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent save fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn records(&self) -> Vec<DiagnosticRecord> {
        self.records.read().await.clone()
    }
}

#[async_trait]
impl DiagnosticLogRepository for InMemoryDiagnosticLogRepository {
    async fn save(&self, record: &DiagnosticRecord) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::database("log store unavailable"));
        }
        self.records.write().await.push(record.clone());
        Ok(())
    }
}
