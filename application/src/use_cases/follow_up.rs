//! Follow-up use case.
//!
//! After a primary response, a different participant adds a brief
//! complementary perspective. Same failure contract as
//! [`GenerateResponseUseCase`](super::generate_response::GenerateResponseUseCase),
//! but the fallback comes from the participant's follow-up catalog.

use crate::config::GenerationParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::use_cases::generate_response::{ResponseSource, fallback_text};
use crate::use_cases::shared::complete_with_timeout;
use commons_domain::{
    ChatMessage, ConversationContext, ParticipantId, ParticipantRegistry, PromptAssembler,
    RandomSource, choose,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Focus line used when a participant declares no response styles.
const DEFAULT_FOCUS: &str = "adding constructive insight";

/// A follow-up contribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FollowUp {
    pub participant_id: ParticipantId,
    /// Display name of the participant that produced the text.
    pub agent: String,
    pub text: String,
    pub source: ResponseSource,
}

/// Input for the [`FollowUpUseCase`].
#[derive(Debug, Clone)]
pub struct FollowUpInput {
    pub original_message: String,
    pub first_response: String,
    pub context: ConversationContext,
    /// Participant that gave the first response.
    pub exclude_participant_id: Option<String>,
}

impl FollowUpInput {
    pub fn new(original_message: impl Into<String>, first_response: impl Into<String>) -> Self {
        Self {
            original_message: original_message.into(),
            first_response: first_response.into(),
            context: ConversationContext::default(),
            exclude_participant_id: None,
        }
    }

    pub fn with_context(mut self, context: ConversationContext) -> Self {
        self.context = context;
        self
    }

    pub fn excluding(mut self, participant_id: impl Into<String>) -> Self {
        self.exclude_participant_id = Some(participant_id.into());
        self
    }
}

/// Use case for generating a follow-up from a different participant.
///
/// 1. Pick a participant via [`ParticipantRegistry::random_other_than`]
/// 2. Pick one of its response styles as the focus
/// 3. Send `[system, user]` with follow-up token limit and temperature
/// 4. Return the parsed prose, or a random follow-up fallback
#[derive(Clone)]
pub struct FollowUpUseCase {
    registry: Arc<ParticipantRegistry>,
    provider: Arc<dyn CompletionProvider>,
    random: Arc<dyn RandomSource>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl FollowUpUseCase {
    pub fn new(
        registry: Arc<ParticipantRegistry>,
        provider: Arc<dyn CompletionProvider>,
        random: Arc<dyn RandomSource>,
        params: GenerationParams,
    ) -> Self {
        Self {
            registry,
            provider,
            random,
            params,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Returns `None` only for an empty registry.
    pub async fn execute(&self, input: &FollowUpInput) -> Option<FollowUp> {
        let participant = self
            .registry
            .random_other_than(input.exclude_participant_id.as_deref(), self.random.as_ref())?;

        debug!(
            participant = %participant.id(),
            exclude = ?input.exclude_participant_id,
            "Follow-up participant chosen"
        );

        let focus = choose(participant.response_styles(), self.random.as_ref())
            .map(String::as_str)
            .unwrap_or(DEFAULT_FOCUS);
        let system_prompt = PromptAssembler::follow_up(
            participant,
            &input.original_message,
            &input.first_response,
            &input.context,
            focus,
        );
        let messages = [
            ChatMessage::system(system_prompt),
            ChatMessage::user(PromptAssembler::follow_up_request()),
        ];

        let outcome = complete_with_timeout(
            self.provider.as_ref(),
            &messages,
            &self.params.follow_up_options(),
            self.params.timeout,
        )
        .await;

        let (text, source, reason) = match outcome.map(|p| p.usable_text()) {
            Ok(Some(text)) => (text, ResponseSource::Provider, None),
            Ok(None) => (
                fallback_text(participant.follow_up_fallbacks(), self.random.as_ref()),
                ResponseSource::Fallback,
                Some("unusable".to_string()),
            ),
            Err(e) => {
                warn!(
                    participant = %participant.id(),
                    category = %e.category(),
                    "Follow-up provider call failed: {}",
                    e
                );
                (
                    fallback_text(participant.follow_up_fallbacks(), self.random.as_ref()),
                    ResponseSource::Fallback,
                    Some(e.category().to_string()),
                )
            }
        };

        let event_type = match source {
            ResponseSource::Provider => events::FOLLOW_UP_GENERATED,
            ResponseSource::Fallback => events::FOLLOW_UP_FALLBACK,
        };
        self.conversation_logger.log(ConversationEvent::new(
            event_type,
            serde_json::json!({
                "participant": participant.id().as_str(),
                "exclude": input.exclude_participant_id,
                "reason": reason,
                "response": text,
            }),
        ));

        Some(FollowUp {
            participant_id: participant.id().clone(),
            agent: participant.name().to_string(),
            text,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_provider::ProviderError;
    use crate::testing::{
        CyclingRandom, FailingProvider, FixedRandom, RecordingLogger, ScriptedProvider, registry,
    };
    use commons_domain::Role;

    fn use_case(
        registry: ParticipantRegistry,
        provider: Arc<dyn CompletionProvider>,
        random: Arc<dyn RandomSource>,
    ) -> FollowUpUseCase {
        FollowUpUseCase::new(
            Arc::new(registry),
            provider,
            random,
            GenerationParams::default(),
        )
    }

    #[tokio::test]
    async fn test_never_returns_excluded_participant() {
        let uc = use_case(
            ParticipantRegistry::builtin().unwrap(),
            Arc::new(FailingProvider(ProviderError::Timeout)),
            Arc::new(CyclingRandom::default()),
        );
        let input = FollowUpInput::new("How do co-ops start?", "With members.").excluding("economist");

        for _ in 0..100 {
            let follow_up = uc.execute(&input).await.unwrap();
            assert_ne!(follow_up.participant_id, "economist");
        }
    }

    #[tokio::test]
    async fn test_single_participant_cannot_be_excluded() {
        let uc = use_case(
            registry(&["solo"]),
            Arc::new(FailingProvider(ProviderError::Timeout)),
            Arc::new(FixedRandom(0)),
        );
        let follow_up = uc
            .execute(&FollowUpInput::new("a", "b").excluding("solo"))
            .await
            .unwrap();
        assert_eq!(follow_up.participant_id, "solo");
    }

    #[tokio::test]
    async fn test_failure_uses_follow_up_catalog() {
        let uc = use_case(
            registry(&["a", "b"]),
            Arc::new(FailingProvider(ProviderError::Status {
                status: 500,
                body: "oops".into(),
            })),
            Arc::new(FixedRandom(0)),
        );
        let follow_up = uc
            .execute(&FollowUpInput::new("q", "r").excluding("a"))
            .await
            .unwrap();
        assert_eq!(follow_up.participant_id, "b");
        assert_eq!(follow_up.text, "b follow-up");
        assert_eq!(follow_up.source, ResponseSource::Fallback);
    }

    #[tokio::test]
    async fn test_success_sends_follow_up_prompt() {
        let provider = Arc::new(ScriptedProvider::replying(&["History rhymes here."]));
        let logger = Arc::new(RecordingLogger::default());
        let uc = use_case(
            registry(&["a", "b"]),
            provider.clone(),
            Arc::new(FixedRandom(0)),
        )
        .with_conversation_logger(logger.clone());

        let input = FollowUpInput::new("Why strike?", "Leverage.")
            .with_context(ConversationContext::new().with_topic("worker-ownership"))
            .excluding("b");
        let follow_up = uc.execute(&input).await.unwrap();

        assert_eq!(follow_up.participant_id, "a");
        assert_eq!(follow_up.agent, "a-bot");
        assert_eq!(follow_up.text, "History rhymes here.");

        let (messages, options) = &provider.calls()[0];
        assert_eq!(messages[0].role, Role::System);
        assert!(messages[0].content.contains(r#"The user said: "Why strike?""#));
        assert!(messages[0].content.contains(r#"Another participant responded: "Leverage.""#));
        assert!(messages[0].content.contains("Focus on: Plain"));
        assert_eq!(messages[1].role, Role::User);
        assert_eq!(options.max_tokens, 150);
        assert_eq!(options.temperature, 0.8);
        assert!(options.frequency_penalty.is_none());

        assert_eq!(logger.types(), vec![events::FOLLOW_UP_GENERATED]);
    }

    #[tokio::test]
    async fn test_no_exclusion_considers_everyone() {
        let uc = use_case(
            registry(&["a", "b", "c"]),
            Arc::new(FailingProvider(ProviderError::Timeout)),
            Arc::new(FixedRandom(2)),
        );
        let follow_up = uc.execute(&FollowUpInput::new("q", "r")).await.unwrap();
        assert_eq!(follow_up.participant_id, "c");
    }
}
