//! Community sentiment result

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Stories included in a sentiment prompt; the rest are ignored.
pub const STORY_SAMPLE_LIMIT: usize = 5;

/// Comments included in a sentiment prompt; the rest are ignored.
pub const COMMENT_SAMPLE_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverallSentiment {
    /// positive, negative, neutral or mixed
    pub primary_tone: String,
    pub confidence: f64,
    pub dominant_emotions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonTheme {
    pub theme: String,
    /// high, medium or low
    pub prevalence: String,
    pub examples: Vec<String>,
}

/// Aggregate mood of a sample of stories and comments (Value Object)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunitySentiment {
    pub overall_sentiment: OverallSentiment,
    pub common_themes: Vec<CommonTheme>,
    pub emerging_issues: Vec<String>,
    pub community_strengths: Vec<String>,
    pub recommended_actions: Vec<String>,
}

impl CommunitySentiment {
    /// Read a sentiment report from provider JSON.
    ///
    /// The value must carry an `overall_sentiment` object.
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.get("overall_sentiment").is_some_and(Value::is_object) {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}
