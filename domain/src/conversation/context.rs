//! Conversation context value object

use super::topic::TopicCatalog;
use serde::{Deserialize, Serialize};

/// Mode label used when the caller supplies none.
pub const DEFAULT_MODE: &str = "discussion";

/// Caller-supplied discussion metadata (Value Object)
///
/// Supplied fresh per request; never retained between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversationContext {
    pub topic: Option<String>,
    pub description: Option<String>,
    pub key_points: Vec<String>,
    pub mode: Option<String>,
}

impl ConversationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_key_points<I, S>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_points = points.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// The topic id, if one was supplied and is not blank.
    pub fn topic(&self) -> Option<&str> {
        self.topic.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn mode(&self) -> &str {
        self.mode
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_MODE)
    }

    /// Fill an absent description or key-point list from the topic catalog.
    ///
    /// Values supplied by the caller always win.
    pub fn resolve(mut self, catalog: &TopicCatalog) -> Self {
        let Some(topic) = self.topic().and_then(|t| catalog.get(t)) else {
            return self;
        };

        if self.description.as_deref().is_none_or(|d| d.trim().is_empty()) {
            self.description = Some(topic.description.to_string());
        }
        if self.key_points.is_empty() {
            self.key_points = topic.key_points.iter().map(|s| s.to_string()).collect();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_wire_shape() {
        let json = r#"{"topic":"housing-justice","description":"Rent","keyPoints":["a","b"],"mode":"debate"}"#;
        let ctx: ConversationContext = serde_json::from_str(json).unwrap();
        assert_eq!(ctx.topic(), Some("housing-justice"));
        assert_eq!(ctx.key_points, vec!["a", "b"]);
        assert_eq!(ctx.mode(), "debate");
    }

    #[test]
    fn test_missing_fields_default() {
        let ctx: ConversationContext = serde_json::from_str("{}").unwrap();
        assert_eq!(ctx.topic(), None);
        assert_eq!(ctx.mode(), DEFAULT_MODE);
    }

    #[test]
    fn test_blank_topic_is_none() {
        let ctx = ConversationContext::new().with_topic("  ");
        assert_eq!(ctx.topic(), None);
    }

    #[test]
    fn test_resolve_fills_from_catalog() {
        let ctx = ConversationContext::new()
            .with_topic("debt-abolition")
            .resolve(&TopicCatalog);
        assert_eq!(
            ctx.description.as_deref(),
            Some("Strategies for eliminating exploitative debt systems")
        );
        assert!(ctx.key_points.contains(&"debt strikes".to_string()));
    }

    #[test]
    fn test_resolve_keeps_caller_values() {
        let ctx = ConversationContext::new()
            .with_topic("debt-abolition")
            .with_description("Our own framing")
            .with_key_points(["jubilee"])
            .resolve(&TopicCatalog);
        assert_eq!(ctx.description.as_deref(), Some("Our own framing"));
        assert_eq!(ctx.key_points, vec!["jubilee"]);
    }

    #[test]
    fn test_resolve_unknown_topic_is_noop() {
        let ctx = ConversationContext::new().with_topic("gardening");
        assert_eq!(ctx.clone().resolve(&TopicCatalog), ctx);
    }
}
