//! Generate Response use case.
//!
//! Produces a participant's primary reply to a user message. Provider
//! failures never escape: any timeout, transport error, bad status,
//! malformed payload or unusable reply is replaced by a canned sentence
//! from the participant's fallback catalog.

use crate::config::GenerationParams;
use crate::ports::completion_provider::CompletionProvider;
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger, events,
};
use crate::use_cases::shared::complete_with_timeout;
use commons_domain::core::string::truncate;
use commons_domain::{
    ChatMessage, ConversationContext, ConversationHistory, HistoryEntry, Participant,
    PromptAssembler, RandomSource, choose,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Author label recorded in history for the user's side of an exchange.
pub const USER_AUTHOR: &str = "User";

/// Where the returned text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    Provider,
    Fallback,
}

/// Text produced for a participant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedResponse {
    pub text: String,
    pub source: ResponseSource,
}

impl GeneratedResponse {
    pub fn is_fallback(&self) -> bool {
        self.source == ResponseSource::Fallback
    }
}

/// Use case for generating a participant's primary response.
///
/// 1. Assemble the system prompt via [`PromptAssembler`]
/// 2. Send `[system, user]` with persona temperature and fixed penalties
/// 3. Return the parsed prose, or a random fallback-catalog entry
/// 4. On provider success only, append the exchange to the caller's history
#[derive(Clone)]
pub struct GenerateResponseUseCase {
    provider: Arc<dyn CompletionProvider>,
    random: Arc<dyn RandomSource>,
    params: GenerationParams,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl GenerateResponseUseCase {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        random: Arc<dyn RandomSource>,
        params: GenerationParams,
    ) -> Self {
        Self {
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

    pub async fn execute(
        &self,
        participant: &Participant,
        message: &str,
        context: &ConversationContext,
        history: &mut ConversationHistory,
    ) -> GeneratedResponse {
        info!(
            participant = %participant.id(),
            "Generating response: {}",
            truncate(message, 80)
        );

        let system_prompt = PromptAssembler::build_with_window(
            participant,
            context,
            history,
            self.params.history_window,
        );
        let messages = [ChatMessage::system(system_prompt), ChatMessage::user(message)];
        let options = self.params.primary_options(participant.temperature());

        let outcome = complete_with_timeout(
            self.provider.as_ref(),
            &messages,
            &options,
            self.params.timeout,
        )
        .await;

        let failure = match outcome {
            Ok(parsed) => match parsed.usable_text() {
                Some(text) => {
                    debug!(participant = %participant.id(), "Provider reply accepted");
                    self.record_exchange(participant, message, &text, history);
                    self.conversation_logger.log(ConversationEvent::new(
                        events::RESPONSE_GENERATED,
                        serde_json::json!({
                            "participant": participant.id().as_str(),
                            "message": message,
                            "response": text,
                        }),
                    ));
                    return GeneratedResponse {
                        text,
                        source: ResponseSource::Provider,
                    };
                }
                None => "unusable".to_string(),
            },
            Err(e) => {
                warn!(
                    participant = %participant.id(),
                    category = %e.category(),
                    "Provider call failed: {}",
                    e
                );
                e.category().to_string()
            }
        };

        let text = fallback_text(participant.fallback_catalog(), self.random.as_ref());
        info!(participant = %participant.id(), reason = %failure, "Using fallback response");
        self.conversation_logger.log(ConversationEvent::new(
            events::RESPONSE_FALLBACK,
            serde_json::json!({
                "participant": participant.id().as_str(),
                "message": message,
                "reason": failure,
                "response": text,
            }),
        ));

        GeneratedResponse {
            text,
            source: ResponseSource::Fallback,
        }
    }

    fn record_exchange(
        &self,
        participant: &Participant,
        message: &str,
        reply: &str,
        history: &mut ConversationHistory,
    ) {
        let now = chrono::Utc::now().to_rfc3339();
        history.push(HistoryEntry::new(USER_AUTHOR, message).with_timestamp(now.clone()));
        history.push(HistoryEntry::new(participant.name(), reply).with_timestamp(now));
    }
}

/// Pick a canned sentence. Catalogs are validated non-empty at registry
/// construction, so the empty case only guards against misuse.
pub(crate) fn fallback_text(catalog: &[String], random: &dyn RandomSource) -> String {
    choose(catalog, random).cloned().unwrap_or_default()
}
