use std::time::Duration;

use serde::Serialize;

use super::GenerationSpec;
use crate::domain::foundation::{Timestamp, UserId};

/// Model parameters fixed at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSettings {
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

/// Successful generation as returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedContent {
    /// Model name reported by the provider.
    pub model: String,
    /// Unix seconds.
    pub created: i64,
    pub generated_content: String,
}

/// Audit record of one successful generation.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentGenerationLog {
    pub title: String,
    pub objective: String,
    pub data: String,
    pub return_format: String,
    pub response: String,
    pub model_used: String,
    pub temperature: f32,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub created_by: UserId,
    pub created_at: Timestamp,
}

impl ContentGenerationLog {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spec: GenerationSpec,
        response: impl Into<String>,
        settings: &GenerationSettings,
        prompt_tokens: u32,
        completion_tokens: u32,
        created_by: UserId,
        created_at: Timestamp,
    ) -> Self {
        Self {
            title: spec.title,
            objective: spec.objective,
            data: spec.data,
            return_format: spec.return_format,
            response: response.into(),
            model_used: settings.model.clone(),
            temperature: settings.temperature,
            prompt_tokens,
            completion_tokens,
            created_by,
            created_at,
        }
    }
}
