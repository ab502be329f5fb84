//! Records of unexpected request failures.
//!
//! A [`DiagnosticRecord`] is written once per request that ended in an
//! internal server error and is never modified afterwards.

use serde_json::Value;

use crate::domain::foundation::{Timestamp, UserId};

/// Body keys whose values never reach a diagnostic record.
const REDACTED_KEYS: &[&str] = &["password", "refresh_token"];

/// Replacement written in place of a redacted value.
pub const REDACTED: &str = "[redacted]";

/// Request facts captured before the handler runs.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestContext {
    pub user_id: Option<UserId>,
    pub path: String,
    pub method: String,
    /// JSON body for POST/PUT/PATCH, an empty object otherwise. Credentials
    /// are redacted.
    pub data: Value,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            user_id: None,
            path: path.into(),
            method: method.into(),
            data: Value::Object(Default::default()),
        }
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_data(mut self, mut data: Value) -> Self {
        redact(&mut data);
        self.data = data;
        self
    }

    /// Whether the method carries a body worth recording.
    pub fn method_has_body(method: &str) -> bool {
        matches!(method, "POST" | "PUT" | "PATCH")
    }
}

/// Where in the code the failure surfaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailureOrigin {
    pub logger_name: String,
    pub module: String,
    pub function_name: String,
}

impl FailureOrigin {
    pub fn new(
        logger_name: impl Into<String>,
        module: impl Into<String>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            logger_name: logger_name.into(),
            module: module.into(),
            function_name: function_name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiagnosticRecord {
    pub user_id: Option<UserId>,
    pub timestamp: Timestamp,
    pub request_path: String,
    pub request_method: String,
    pub request_data: Value,
    pub logger_name: String,
    pub module: String,
    pub function_name: String,
    pub traceback: String,
}

impl DiagnosticRecord {
    pub fn new(
        context: &RequestContext,
        origin: &FailureOrigin,
        traceback: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            user_id: context.user_id,
            timestamp,
            request_path: context.path.clone(),
            request_method: context.method.clone(),
            request_data: context.data.clone(),
            logger_name: origin.logger_name.clone(),
            module: origin.module.clone(),
            function_name: origin.function_name.clone(),
            traceback: traceback.into(),
        }
    }
}

/// Replaces credential values at any depth.
fn redact(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, field) in map.iter_mut() {
                if REDACTED_KEYS.contains(&key.as_str()) {
                    *field = Value::from(REDACTED);
                } else {
                    redact(field);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact),
        _ => {}
    }
}

/// Renders an error and its source chain, outermost first.
pub fn traceback(err: &(dyn std::error::Error + 'static)) -> String {
    let mut lines = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        lines.push(format!("caused by: {cause}"));
        source = cause.source();
    }
    lines.join("\n")
}
