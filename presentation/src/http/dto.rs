//! Wire types for the `/api/ai` endpoints
//!
//! Field names are camelCase to match the web client.

use commons_application::{ChatReply, FollowUp, FollowUpInput};
use commons_domain::{
    CommunitySentiment, ConversationContext, ConversationHistory, HistoryEntry, ModerationVerdict,
    ParticipantSummary, Recommendation, StoryAnalysis, Topic, UserProfile,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Current time in the format the web client expects (`toISOString`).
pub fn timestamp() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// ==================== Requests ====================

/// One entry of the client's `messages` array. Only `content` is read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireMessage {
    pub role: Option<String>,
    pub content: String,
}

/// One entry of `conversationHistory`. Loosely shaped: missing fields are empty.
///
/// `timestamp` may be an ISO string or a `Date.now()` epoch number; either is
/// kept as opaque text.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireHistoryEntry {
    pub author: String,
    pub content: String,
    pub timestamp: Option<Value>,
}

impl From<WireHistoryEntry> for HistoryEntry {
    fn from(entry: WireHistoryEntry) -> Self {
        let converted = HistoryEntry::new(entry.author, entry.content);
        match entry.timestamp {
            Some(Value::Null) | None => converted,
            Some(Value::String(ts)) => converted.with_timestamp(ts),
            Some(other) => converted.with_timestamp(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<WireMessage>,
    pub context: ConversationContext,
    pub conversation_history: Vec<WireHistoryEntry>,
    pub participant_id: Option<String>,
}

impl ChatRequest {
    /// Content of the last message, or `None` when there are no messages.
    pub fn active_message(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }

    /// Explicit participant, ignoring blank ids.
    pub fn participant_id(&self) -> Option<&str> {
        self.participant_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    pub fn history(&self) -> ConversationHistory {
        let mut history = ConversationHistory::new();
        for entry in &self.conversation_history {
            history.push(entry.clone().into());
        }
        history
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FollowUpRequest {
    pub original_message: String,
    pub first_response: String,
    pub context: ConversationContext,
    pub exclude_participant_id: Option<String>,
}

impl FollowUpRequest {
    pub fn is_complete(&self) -> bool {
        !self.original_message.trim().is_empty() && !self.first_response.trim().is_empty()
    }

    pub fn into_input(self) -> FollowUpInput {
        let input = FollowUpInput::new(self.original_message, self.first_response)
            .with_context(self.context);
        match self.exclude_participant_id.filter(|id| !id.trim().is_empty()) {
            Some(id) => input.excluding(id),
            None => input,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ModerateRequest {
    pub content: String,
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StoryRequest {
    pub content: String,
}

/// Query string of `GET /recommendations`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RecommendationsQuery {
    /// Comma-separated interests.
    pub interests: Option<String>,
    pub context: Option<String>,
}

impl RecommendationsQuery {
    pub fn profile(&self) -> UserProfile {
        UserProfile::from_interest_list(self.interests.as_deref().unwrap_or_default())
    }
}

/// A story or comment; only `content` is read.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WireContent {
    pub content: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SentimentRequest {
    pub stories: Vec<WireContent>,
    pub comments: Vec<WireContent>,
}

impl SentimentRequest {
    /// Non-blank story and comment texts.
    pub fn into_texts(self) -> (Vec<String>, Vec<String>) {
        let texts = |items: Vec<WireContent>| -> Vec<String> {
            items
                .into_iter()
                .map(|i| i.content)
                .filter(|c| !c.trim().is_empty())
                .collect()
        };
        (texts(self.stories), texts(self.comments))
    }
}

// ==================== Responses ====================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub agent: String,
    pub participant_id: String,
    /// True when the text came from the fallback catalog.
    pub fallback: bool,
    pub timestamp: String,
    /// The request's history with this exchange appended. Fallback replies
    /// are not appended, so the client can resend it unchanged.
    pub conversation_history: ConversationHistory,
}

impl ChatResponse {
    pub fn new(reply: ChatReply, history: ConversationHistory) -> Self {
        Self {
            success: true,
            fallback: reply.response.is_fallback(),
            response: reply.response.text,
            agent: reply.agent,
            participant_id: reply.participant_id.to_string(),
            timestamp: timestamp(),
            conversation_history: history,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpResponse {
    pub success: bool,
    pub response: Option<String>,
    pub agent: Option<String>,
    pub participant_id: Option<String>,
    pub timestamp: String,
}

impl From<Option<FollowUp>> for FollowUpResponse {
    fn from(follow_up: Option<FollowUp>) -> Self {
        let (response, agent, participant_id) = match follow_up {
            Some(f) => (
                Some(f.text),
                Some(f.agent),
                Some(f.participant_id.to_string()),
            ),
            None => (None, None, None),
        };
        Self {
            success: true,
            response,
            agent,
            participant_id,
            timestamp: timestamp(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParticipantsResponse {
    pub success: bool,
    pub participants: Vec<ParticipantSummary>,
    pub count: usize,
}

impl From<Vec<ParticipantSummary>> for ParticipantsResponse {
    fn from(participants: Vec<ParticipantSummary>) -> Self {
        Self {
            success: true,
            count: participants.len(),
            participants,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicsResponse {
    pub topics: &'static [Topic],
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModerateResponse {
    pub success: bool,
    pub moderation: ModerationVerdict,
    pub moderated_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StoryResponse {
    pub success: bool,
    pub analysis: Option<StoryAnalysis>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<Recommendation>,
    pub generated_at: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct SampleSize {
    pub stories: usize,
    pub comments: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SentimentResponse {
    pub success: bool,
    pub sentiment: Option<CommunitySentiment>,
    pub analyzed_at: String,
    pub sample_size: SampleSize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub configured: bool,
    pub model: String,
    pub timestamp: String,
    pub participants: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
