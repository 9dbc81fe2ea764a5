//! Moderate Content use case.
//!
//! Asks the provider for a JSON verdict on user content. Moderation never
//! blocks on failure: a provider error, non-JSON reply or JSON without a
//! boolean `approved` yields [`ModerationVerdict::permissive`].

use crate::config::GenerationParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::use_cases::shared::complete_with_timeout;
use commons_domain::{ChatMessage, ModerationVerdict, StructuredPrompt};
use std::sync::Arc;
use tracing::{debug, warn};

/// Content type assumed when the caller names none.
pub const DEFAULT_CONTENT_TYPE: &str = "message";

#[derive(Clone)]
pub struct ModerateContentUseCase {
    provider: Arc<dyn CompletionProvider>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ModerateContentUseCase {
    pub fn new(provider: Arc<dyn CompletionProvider>, params: GenerationParams) -> Self {
        Self {
            provider,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(&self, content: &str, content_type: Option<&str>) -> ModerationVerdict {
        let content_type = content_type
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE);

        let messages = [
            ChatMessage::system(StructuredPrompt::moderation_system(content_type)),
            ChatMessage::user(StructuredPrompt::moderation_request(content)),
        ];

        let outcome = complete_with_timeout(
            self.provider.as_ref(),
            &messages,
            &self.params.moderation_options(),
            self.params.timeout,
        )
        .await;

        let reason = match outcome {
            Ok(parsed) => match parsed.as_structured().and_then(ModerationVerdict::from_value) {
                Some(verdict) => {
                    debug!(approved = verdict.approved, severity = %verdict.severity, "Moderation verdict");
                    return verdict;
                }
                None => "unparseable".to_string(),
            },
            Err(e) => {
                warn!(category = %e.category(), "Moderation provider call failed: {}", e);
                e.category().to_string()
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            events::MODERATION_FALLBACK,
            serde_json::json!({
                "content_type": content_type,
                "reason": reason,
            }),
        ));
        ModerationVerdict::permissive()
    }
}
