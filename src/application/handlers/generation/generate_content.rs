//! GenerateContentHandler - Sends a structured HR prompt to the completion provider.
//!
//! The provider is called once, bounded by the configured timeout. Only
//! successful generations are logged.

use std::sync::Arc;

use crate::domain::foundation::{Timestamp, UserId};
use crate::domain::generation::{
    prompt, ContentGenerationLog, GeneratedContent, GenerationError, GenerationSettings,
    GenerationSpec,
};
use crate::ports::{AIError, AIProvider, CompletionRequest, GenerationLogRepository, MessageRole};

/// Command to generate content on behalf of an authenticated user.
#[derive(Debug, Clone)]
pub struct GenerateContentCommand {
    pub spec: GenerationSpec,
    pub requested_by: UserId,
}

pub struct GenerateContentHandler {
    provider: Arc<dyn AIProvider>,
    logs: Arc<dyn GenerationLogRepository>,
    settings: GenerationSettings,
}

impl GenerateContentHandler {
    pub fn new(
        provider: Arc<dyn AIProvider>,
        logs: Arc<dyn GenerationLogRepository>,
        settings: GenerationSettings,
    ) -> Self {
        Self {
            provider,
            logs,
            settings,
        }
    }

    pub async fn handle(
        &self,
        cmd: GenerateContentCommand,
    ) -> Result<GeneratedContent, GenerationError> {
        let request = CompletionRequest::new()
            .with_message(MessageRole::System, prompt::SYSTEM_PROMPT)
            .with_message(MessageRole::User, prompt::user_prompt(&cmd.spec))
            .with_model(self.settings.model.clone())
            .with_temperature(self.settings.temperature);

        let response = tokio::time::timeout(self.settings.timeout, self.provider.complete(request))
            .await
            .map_err(|_| AIError::Timeout {
                timeout_secs: self.settings.timeout.as_secs(),
            })?
            .map_err(|e| {
                tracing::warn!(error = %e, model = %self.settings.model, "completion failed");
                e
            })?;

        let content = response.content.trim().to_string();
        let created = Timestamp::now();

        let log = ContentGenerationLog::new(
            cmd.spec,
            content.clone(),
            &self.settings,
            response.usage.prompt_tokens,
            response.usage.completion_tokens,
            cmd.requested_by,
            created,
        );
        self.logs.save(&log).await?;

        tracing::info!(
            user_id = %cmd.requested_by,
            model = %response.model,
            prompt_tokens = response.usage.prompt_tokens,
            completion_tokens = response.usage.completion_tokens,
            "content generated"
        );

        Ok(GeneratedContent {
            model: response.model,
            created: created.as_unix_secs(),
            generated_content: content,
        })
    }
}
