//! Council facade.
//!
//! The single entry point used by the HTTP and CLI layers. Holds the
//! immutable registry and selection engine plus one instance of every use
//! case, and is shared as `Arc<Council>` across request handlers. No
//! per-conversation state lives here: history is passed in by the caller.

use crate::config::GenerationParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::use_cases::analyze_story::AnalyzeStoryUseCase;
use crate::use_cases::community_sentiment::CommunitySentimentUseCase;
use crate::use_cases::follow_up::{FollowUp, FollowUpInput, FollowUpUseCase};
use crate::use_cases::generate_response::{GenerateResponseUseCase, GeneratedResponse};
use crate::use_cases::moderate_content::ModerateContentUseCase;
use crate::use_cases::recommend_resources::RecommendResourcesUseCase;
use commons_domain::core::string::truncate;
use commons_domain::{
    CommunitySentiment, ConversationContext, ConversationHistory, DomainError, ModerationVerdict,
    Participant, ParticipantId, ParticipantRegistry, ParticipantSummary, RandomSource,
    Recommendation, ScoringConfig, SelectionEngine, SelectionResult, StoryAnalysis, Topic,
    TopicCatalog, UserProfile,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors surfaced to callers of the [`Council`].
///
/// Provider failures never appear here; they are absorbed by fallbacks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CouncilError {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),
}

/// A primary response together with who produced it
#[derive(Debug, Clone, PartialEq)]
pub struct ChatReply {
    pub participant_id: ParticipantId,
    /// Display name of the participant.
    pub agent: String,
    pub response: GeneratedResponse,
    /// Present when the participant was chosen by the selection engine.
    pub selection: Option<SelectionResult>,
}

pub struct Council {
    registry: Arc<ParticipantRegistry>,
    engine: Arc<SelectionEngine>,
    topics: TopicCatalog,
    provider: Arc<dyn CompletionProvider>,
    generate: GenerateResponseUseCase,
    follow_up: FollowUpUseCase,
    moderate: ModerateContentUseCase,
    analyze: AnalyzeStoryUseCase,
    recommend: RecommendResourcesUseCase,
    sentiment: CommunitySentimentUseCase,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl Council {
    /// Build a council, validating the scoring data against the registry.
    pub fn new(
        registry: ParticipantRegistry,
        scoring: ScoringConfig,
        provider: Arc<dyn CompletionProvider>,
        random: Arc<dyn RandomSource>,
        params: GenerationParams,
    ) -> Result<Self, DomainError> {
        let engine = SelectionEngine::new(&registry, scoring)?;
        let registry = Arc::new(registry);

        Ok(Self {
            generate: GenerateResponseUseCase::new(provider.clone(), random.clone(), params.clone()),
            follow_up: FollowUpUseCase::new(
                registry.clone(),
                provider.clone(),
                random,
                params.clone(),
            ),
            moderate: ModerateContentUseCase::new(provider.clone(), params.clone()),
            analyze: AnalyzeStoryUseCase::new(provider.clone(), params.clone()),
            recommend: RecommendResourcesUseCase::new(provider.clone(), params.clone()),
            sentiment: CommunitySentimentUseCase::new(provider.clone(), params),
            registry,
            engine: Arc::new(engine),
            topics: TopicCatalog,
            provider,
            conversation_logger: Arc::new(NoConversationLogger),
        })
    }

    /// Council over the built-in roster and scoring data.
    pub fn builtin(
        provider: Arc<dyn CompletionProvider>,
        random: Arc<dyn RandomSource>,
        params: GenerationParams,
    ) -> Result<Self, DomainError> {
        Self::new(
            ParticipantRegistry::builtin()?,
            ScoringConfig::builtin(),
            provider,
            random,
            params,
        )
    }

    /// Create with a conversation logger shared by every use case.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.generate = self.generate.with_conversation_logger(logger.clone());
        self.follow_up = self.follow_up.with_conversation_logger(logger.clone());
        self.moderate = self.moderate.with_conversation_logger(logger.clone());
        self.analyze = self.analyze.with_conversation_logger(logger.clone());
        self.recommend = self.recommend.with_conversation_logger(logger.clone());
        self.sentiment = self.sentiment.with_conversation_logger(logger.clone());
        self.conversation_logger = logger;
        self
    }

    // ==================== Queries ====================

    pub fn registry(&self) -> &ParticipantRegistry {
        &self.registry
    }

    fn participant(&self, id: &str) -> Result<&Participant, CouncilError> {
        self.registry
            .get(id)
            .map_err(|_| CouncilError::ParticipantNotFound(id.to_string()))
    }

    pub fn list_participants(&self) -> Vec<ParticipantSummary> {
        self.registry.all()
    }

    pub fn topics(&self) -> &'static [Topic] {
        self.topics.all()
    }

    pub fn is_configured(&self) -> bool {
        self.provider.is_configured()
    }

    pub fn model_name(&self) -> &str {
        self.provider.model_name()
    }

    /// Route a message to a participant. Deterministic.
    pub fn select(&self, message: &str, context: &ConversationContext) -> SelectionResult {
        let result = self.engine.select(message, context);

        info!(
            participant = %result.participant_id,
            score = result.score,
            reason = %result.reason,
            "Participant selected"
        );
        self.conversation_logger.log(ConversationEvent::new(
            events::PARTICIPANT_SELECTED,
            serde_json::json!({
                "participant": result.participant_id.as_str(),
                "score": result.score,
                "reason": result.reason,
                "topic": context.topic(),
                "message": truncate(message, 200),
            }),
        ));

        result
    }

    // ==================== Generation ====================

    /// Generate a reply from a specific participant.
    ///
    /// Fails only for an unknown participant id; provider problems yield a
    /// fallback response.
    pub async fn generate(
        &self,
        participant_id: &str,
        message: &str,
        context: &ConversationContext,
        history: &mut ConversationHistory,
    ) -> Result<GeneratedResponse, CouncilError> {
        let participant = self.participant(participant_id)?;
        let context = context.clone().resolve(&self.topics);
        Ok(self
            .generate
            .execute(participant, message, &context, history)
            .await)
    }

    /// Select (unless `participant_id` is given) and generate in one step.
    pub async fn chat(
        &self,
        message: &str,
        context: &ConversationContext,
        history: &mut ConversationHistory,
        participant_id: Option<&str>,
    ) -> Result<ChatReply, CouncilError> {
        let (participant_id, selection) = match participant_id {
            Some(id) => (ParticipantId::new(id), None),
            None => {
                let result = self.select(message, context);
                (result.participant_id.clone(), Some(result))
            }
        };

        let participant = self.participant(participant_id.as_str())?;
        let response = self
            .generate(participant_id.as_str(), message, context, history)
            .await?;

        Ok(ChatReply {
            agent: participant.name().to_string(),
            participant_id,
            response,
            selection,
        })
    }

    /// A brief contribution from a participant other than the excluded one.
    pub async fn follow_up(&self, input: FollowUpInput) -> Option<FollowUp> {
        let input = FollowUpInput {
            context: input.context.clone().resolve(&self.topics),
            ..input
        };
        self.follow_up.execute(&input).await
    }

    pub async fn moderate(&self, content: &str, content_type: Option<&str>) -> ModerationVerdict {
        self.moderate.execute(content, content_type).await
    }

    pub async fn analyze_story(&self, story: &str) -> Option<StoryAnalysis> {
        self.analyze.execute(story).await
    }

    /// Resources for a reader; empty when the provider has nothing usable.
    pub async fn recommend(
        &self,
        profile: &UserProfile,
        story_context: Option<&str>,
    ) -> Vec<Recommendation> {
        self.recommend.execute(profile, story_context).await
    }

    pub async fn community_sentiment(
        &self,
        stories: &[String],
        comments: &[String],
    ) -> Option<CommunitySentiment> {
        self.sentiment.execute(stories, comments).await
    }
}
