//! Content moderation verdict

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Suggestion text of the permissive default verdict.
pub const PERMISSIVE_SUGGESTION: &str = "Content appears acceptable";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Low,
    Medium,
    High,
}

impl Severity {
    /// Lenient parse; anything unrecognised is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Severity::Low),
            "medium" => Some(Severity::Medium),
            "high" => Some(Severity::High),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{}", s)
    }
}

/// Outcome of moderating one piece of content (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationVerdict {
    pub approved: bool,
    pub reasons: Vec<String>,
    pub severity: Severity,
    pub suggestions: String,
}

impl ModerationVerdict {
    /// Verdict used whenever the provider gives nothing usable.
    ///
    /// Moderation failures never block content.
    pub fn permissive() -> Self {
        Self {
            approved: true,
            reasons: Vec::new(),
            severity: Severity::Low,
            suggestions: PERMISSIVE_SUGGESTION.to_string(),
        }
    }

    /// Read a verdict from provider JSON.
    ///
    /// `approved` must be a boolean; the other fields are optional and
    /// tolerate loose shapes (a single reason string, unknown severity).
    pub fn from_value(value: &Value) -> Option<Self> {
        let approved = value.get("approved")?.as_bool()?;

        let reasons = match value.get("reasons") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
            _ => Vec::new(),
        };

        let severity = value
            .get("severity")
            .and_then(Value::as_str)
            .and_then(Severity::parse)
            .unwrap_or_default();

        let suggestions = value
            .get("suggestions")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Some(Self {
            approved,
            reasons,
            severity,
            suggestions,
        })
    }
}

impl Default for ModerationVerdict {
    fn default() -> Self {
        Self::permissive()
    }
}
