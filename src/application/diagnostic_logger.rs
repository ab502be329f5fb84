//! Persists records of unexpected request failures.

use std::sync::Arc;

use crate::domain::diagnostics::{DiagnosticRecord, FailureOrigin, RequestContext};
use crate::domain::foundation::Timestamp;
use crate::ports::DiagnosticLogRepository;

/// Writes one [`DiagnosticRecord`] per unexpected failure.
///
/// Never fails: a store error is reported on the `fallback` target and the
/// caller carries on with its 500 response.
#[derive(Clone)]
pub struct DiagnosticLogger {
    store: Arc<dyn DiagnosticLogRepository>,
}

impl DiagnosticLogger {
    pub fn new(store: Arc<dyn DiagnosticLogRepository>) -> Self {
        Self { store }
    }

    pub async fn record(&self, context: &RequestContext, origin: &FailureOrigin, traceback: &str) {
        tracing::error!(
            path = %context.path,
            method = %context.method,
            user_id = ?context.user_id.map(|id| id.value()),
            function = %origin.function_name,
            error = %traceback,
            "unexpected failure"
        );

        let record = DiagnosticRecord::new(context, origin, traceback, Timestamp::now());
        if let Err(err) = self.store.save(&record).await {
            tracing::warn!(
                target: "fallback",
                error = %err,
                path = %record.request_path,
                traceback = %record.traceback,
                "failed to persist diagnostic record"
            );
        }
    }
}
