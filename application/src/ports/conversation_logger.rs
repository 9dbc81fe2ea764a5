//! Port for structured conversation logging.
//!
//! Defines the [`ConversationLogger`] trait for recording council events
//! (participant selection, generated and fallback responses, follow-ups,
//! structured-output fallbacks) to a structured log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures a
//! machine-readable record of every routing and generation decision.

use serde_json::Value;

/// Event type names written by the use cases.
pub mod events {
    pub const PARTICIPANT_SELECTED: &str = "participant_selected";
    pub const RESPONSE_GENERATED: &str = "response_generated";
    pub const RESPONSE_FALLBACK: &str = "response_fallback";
    pub const FOLLOW_UP_GENERATED: &str = "follow_up_generated";
    pub const FOLLOW_UP_FALLBACK: &str = "follow_up_fallback";
    pub const MODERATION_FALLBACK: &str = "moderation_fallback";
    pub const ANALYSIS_FALLBACK: &str = "analysis_fallback";
    pub const RECOMMENDATION_FALLBACK: &str = "recommendation_fallback";
    pub const SENTIMENT_FALLBACK: &str = "sentiment_fallback";
}

/// A structured conversation event for logging.
///
/// The adapter adds the timestamp when the event is written.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// Event type identifier, one of [`events`].
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging conversation events to a structured log.
///
/// `log` is synchronous and non-fallible; write failures are dropped so a
/// request never fails because of logging.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
