//! Story analysis result

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sentiment {
    pub primary: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationFlags {
    pub needs_review: bool,
    pub reasons: Vec<String>,
    pub confidence: f64,
}

/// Structured insights extracted from a personal story (Value Object)
///
/// Field names follow the snake_case JSON the provider is asked to emit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoryAnalysis {
    pub themes: Vec<String>,
    pub sentiment: Sentiment,
    pub community_tags: Vec<String>,
    pub recommended_resources: Vec<String>,
    pub moderation_flags: ModerationFlags,
}

impl StoryAnalysis {
    /// Read an analysis from provider JSON.
    ///
    /// The value must be an object carrying a `themes` list; anything else
    /// (including objects of the wrong shape) is `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.get("themes").is_some_and(Value::is_array) {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_full_value() {
        let analysis = StoryAnalysis::from_value(&json!({
            "themes": ["medical_debt", "healthcare_access"],
            "sentiment": {"primary": "negative", "confidence": 0.88},
            "community_tags": ["healthcare"],
            "recommended_resources": ["financial_counseling"],
            "moderation_flags": {"needs_review": false, "reasons": [], "confidence": 0.0}
        }))
        .unwrap();
        assert_eq!(analysis.themes.len(), 2);
        assert_eq!(analysis.sentiment.primary, "negative");
        assert!(!analysis.moderation_flags.needs_review);
    }

    #[test]
    fn test_partial_value_uses_defaults() {
        let analysis = StoryAnalysis::from_value(&json!({"themes": ["housing"]})).unwrap();
        assert_eq!(analysis.sentiment, Sentiment::default());
        assert!(analysis.community_tags.is_empty());
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(StoryAnalysis::from_value(&json!({"response": "mock_data"})).is_none());
        assert!(StoryAnalysis::from_value(&json!({"themes": "housing"})).is_none());
        assert!(StoryAnalysis::from_value(&json!({"themes": [], "sentiment": 5})).is_none());
    }
}
