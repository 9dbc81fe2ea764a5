//! Analyze Story use case.
//!
//! Extracts themes, sentiment, tags and resource suggestions from a
//! personal story. Returns `None` when the provider fails or its reply does
//! not carry an analysis.

use crate::config::GenerationParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::use_cases::shared::complete_with_timeout;
use commons_domain::{ChatMessage, StoryAnalysis, StructuredPrompt};
use std::sync::Arc;
use tracing::{debug, warn};

#[derive(Clone)]
pub struct AnalyzeStoryUseCase {
    provider: Arc<dyn CompletionProvider>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeStoryUseCase {
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

    pub async fn execute(&self, story: &str) -> Option<StoryAnalysis> {
        let messages = [
            ChatMessage::system(StructuredPrompt::story_analysis_system()),
            ChatMessage::user(StructuredPrompt::story_analysis_request(story)),
        ];

        let outcome = complete_with_timeout(
            self.provider.as_ref(),
            &messages,
            &self.params.analysis_options(),
            self.params.timeout,
        )
        .await;

        let reason = match outcome {
            Ok(parsed) => match parsed.as_structured().and_then(StoryAnalysis::from_value) {
                Some(analysis) => return Some(analysis),
                None => {
                    debug!("Story analysis reply carried no analysis");
                    "unparseable".to_string()
                }
            },
            Err(e) => {
                warn!(category = %e.category(), "Story analysis provider call failed: {}", e);
                e.category().to_string()
            }
        };

        self.conversation_logger.log(ConversationEvent::new(
            events::ANALYSIS_FALLBACK,
            serde_json::json!({
                "reason": reason,
                "length": story.chars().count(),
            }),
        ));
        None
    }
}
