//! Community Sentiment use case.
//!
//! Summarizes the mood of a sample of stories and comments. Returns `None`
//! when the provider fails or its reply carries no report.

use crate::config::GenerationParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::use_cases::shared::complete_with_timeout;
use commons_domain::{ChatMessage, CommunitySentiment, StructuredPrompt};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct CommunitySentimentUseCase {
    provider: Arc<dyn CompletionProvider>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl CommunitySentimentUseCase {
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

    pub async fn execute(&self, stories: &[String], comments: &[String]) -> Option<CommunitySentiment> {
        let messages = [
            ChatMessage::system(StructuredPrompt::community_sentiment_system()),
            ChatMessage::user(StructuredPrompt::community_sentiment_request(
                stories, comments,
            )),
        ];

        let outcome = complete_with_timeout(
            self.provider.as_ref(),
            &messages,
            &self.params.sentiment_options(),
            self.params.timeout,
        )
        .await;

        let reason = match outcome {
            Ok(parsed) => match parsed.as_structured().and_then(CommunitySentiment::from_value) {
                Some(report) => {
                    debug!(tone = %report.overall_sentiment.primary_tone, "Community sentiment");
                    return Some(report);
                }
                None => "unparseable".to_string(),
            },
            Err(e) => {
                warn!(category = %e.category(), "Sentiment provider call failed: {}", e);
                e.category().to_string()
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            events::SENTIMENT_FALLBACK,
            serde_json::json!({
                "stories": stories.len(),
                "comments": comments.len(),
                "reason": reason,
            }),
        ));
        None
    }
}
