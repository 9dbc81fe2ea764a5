//! Resource recommendations

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// What the recommendation engine knows about the reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub interests: Vec<String>,
}

impl UserProfile {
    /// Profile from a comma-separated interest list, skipping blank items.
    pub fn from_interest_list(list: &str) -> Self {
        Self {
            interests: list
                .split(',')
                .map(str::trim)
                .filter(|i| !i.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// One suggested resource (Value Object)
///
/// `kind` is one of education, community, advocacy, support or learning, but
/// is kept as the provider wrote it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub why_relevant: String,
    pub action_url: String,
}

impl Recommendation {
    /// Read the `recommendations` list from provider JSON.
    ///
    /// Entries that are not well-formed objects or have no title are dropped.
    /// Any other shape yields an empty list.
    pub fn list_from_value(value: &Value) -> Vec<Self> {
        let Some(items) = value.get("recommendations").and_then(Value::as_array) else {
            return Vec::new();
        };

        items
            .iter()
            .filter_map(|item| serde_json::from_value::<Self>(item.clone()).ok())
            .filter(|r| !r.title.trim().is_empty())
            .collect()
    }
}
