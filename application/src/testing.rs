//! Test doubles shared by the use case tests.

use crate::ports::completion_provider::{CompletionProvider, ProviderError};
use crate::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use async_trait::async_trait;
use commons_domain::{
    ChatMessage, CompletionOptions, ParticipantRegistry, ParticipantSpec, RandomSource,
    RawCompletion,
};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fails every call with the same error.
pub struct FailingProvider(pub ProviderError);

#[async_trait]
impl CompletionProvider for FailingProvider {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<RawCompletion, ProviderError> {
        Err(self.0.clone())
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}

/// Never completes.
pub struct HangingProvider;

#[async_trait]
impl CompletionProvider for HangingProvider {
    async fn complete(
        &self,
        _messages: &[ChatMessage],
        _options: &CompletionOptions,
    ) -> Result<RawCompletion, ProviderError> {
        std::future::pending().await
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn model_name(&self) -> &str {
        "hanging"
    }
}

/// Returns scripted replies in order and records every request.
///
/// An exhausted script fails with [`ProviderError::Malformed`].
#[derive(Default)]
pub struct ScriptedProvider {
    replies: Mutex<VecDeque<Result<RawCompletion, ProviderError>>>,
    calls: Mutex<Vec<(Vec<ChatMessage>, CompletionOptions)>>,
}

impl ScriptedProvider {
    pub fn replying(contents: &[&str]) -> Self {
        let provider = Self::default();
        for c in contents {
            provider.push(Ok(RawCompletion::new(*c)));
        }
        provider
    }

    pub fn push(&self, reply: Result<RawCompletion, ProviderError>) {
        self.replies.lock().unwrap().push_back(reply);
    }

    pub fn calls(&self) -> Vec<(Vec<ChatMessage>, CompletionOptions)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionProvider for ScriptedProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<RawCompletion, ProviderError> {
        self.calls
            .lock()
            .unwrap()
            .push((messages.to_vec(), options.clone()));
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::Malformed("script exhausted".into())))
    }

    fn is_configured(&self) -> bool {
        true
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Collects every logged event.
#[derive(Default)]
pub struct RecordingLogger {
    events: Mutex<Vec<ConversationEvent>>,
}

impl RecordingLogger {
    pub fn types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(|e| e.event_type)
            .collect()
    }

    pub fn events(&self) -> Vec<ConversationEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl ConversationLogger for RecordingLogger {
    fn log(&self, event: ConversationEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Always picks the same index, modulo `len`.
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.0 % len
    }
}

/// Cycles 0, 1, 2, ... modulo `len`.
#[derive(Default)]
pub struct CyclingRandom {
    next: AtomicUsize,
}

impl RandomSource for CyclingRandom {
    fn pick_index(&self, len: usize) -> usize {
        self.next.fetch_add(1, Ordering::Relaxed) % len
    }
}

/// Registry of minimal participants with the given ids.
pub fn registry(ids: &[&str]) -> ParticipantRegistry {
    ParticipantRegistry::from_specs(
        ids.iter()
            .map(|id| ParticipantSpec {
                id: id.to_string(),
                name: format!("{}-bot", id),
                role: format!("AI {}", id),
                specialty: format!("{} studies", id),
                persona: "Steady".into(),
                expertise: vec!["one".into()],
                response_styles: vec!["Plain".into()],
                fallback_catalog: vec![format!("{} fallback", id)],
                follow_up_fallbacks: vec![format!("{} follow-up", id)],
                ..Default::default()
            })
            .collect(),
    )
    .unwrap()
}
