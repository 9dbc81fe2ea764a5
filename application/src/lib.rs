//! Application layer for commons-council
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::GenerationParams;
pub use ports::{
    completion_provider::{CompletionProvider, ProviderError, ProviderErrorCategory},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger, events},
};
pub use use_cases::analyze_story::AnalyzeStoryUseCase;
pub use use_cases::community_sentiment::CommunitySentimentUseCase;
pub use use_cases::council::{ChatReply, Council, CouncilError};
pub use use_cases::follow_up::{FollowUp, FollowUpInput, FollowUpUseCase};
pub use use_cases::generate_response::{
    GenerateResponseUseCase, GeneratedResponse, ResponseSource, USER_AUTHOR,
};
pub use use_cases::moderate_content::{DEFAULT_CONTENT_TYPE, ModerateContentUseCase};
pub use use_cases::recommend_resources::{DEFAULT_STORY_CONTEXT, RecommendResourcesUseCase};
