//! Recommend Resources use case.
//!
//! Asks the provider for resources matched to a reader's interests and
//! story context. Any failure yields an empty list.

use crate::config::GenerationParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::use_cases::shared::complete_with_timeout;
use commons_domain::{ChatMessage, Recommendation, StructuredPrompt, UserProfile};
use std::sync::Arc;
use tracing::{debug, warn};

/// Story context assumed when the caller gives none.
pub const DEFAULT_STORY_CONTEXT: &str = "General economic justice interest";

#[derive(Clone)]
pub struct RecommendResourcesUseCase {
    provider: Arc<dyn CompletionProvider>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl RecommendResourcesUseCase {
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

    pub async fn execute(
        &self,
        profile: &UserProfile,
        story_context: Option<&str>,
    ) -> Vec<Recommendation> {
        let story_context = story_context
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_STORY_CONTEXT);

        let messages = [
            ChatMessage::system(StructuredPrompt::recommendations_system()),
            ChatMessage::user(StructuredPrompt::recommendations_request(
                profile,
                story_context,
            )),
        ];

        let outcome = complete_with_timeout(
            self.provider.as_ref(),
            &messages,
            &self.params.recommendation_options(),
            self.params.timeout,
        )
        .await;

        let reason = match outcome {
            Ok(parsed) => {
                let list = parsed
                    .as_structured()
                    .map(Recommendation::list_from_value)
                    .unwrap_or_default();
                if !list.is_empty() {
                    debug!(count = list.len(), "Recommendations generated");
                    return list;
                }
                "unparseable".to_string()
            }
            Err(e) => {
                warn!(category = %e.category(), "Recommendation provider call failed: {}", e);
                e.category().to_string()
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            events::RECOMMENDATION_FALLBACK,
            serde_json::json!({
                "interests": profile.interests,
                "reason": reason,
            }),
        ));
        Vec::new()
    }
}
