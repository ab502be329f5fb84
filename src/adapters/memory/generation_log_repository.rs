use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::generation::ContentGenerationLog;
use crate::ports::{GenerationLogRepository, RepositoryError};

/// In-memory generation audit trail.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGenerationLogRepository {
    logs: Arc<RwLock<Vec<ContentGenerationLog>>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryGenerationLogRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent save fail.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub async fn logs(&self) -> Vec<ContentGenerationLog> {
        self.logs.read().await.clone()
    }
}

#[async_trait]
impl GenerationLogRepository for InMemoryGenerationLogRepository {
    async fn save(&self, log: &ContentGenerationLog) -> Result<(), RepositoryError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepositoryError::database("disk full"));
        }
        self.logs.write().await.push(log.clone());
        Ok(())
    }
}
