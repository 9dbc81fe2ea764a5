//! Provider output parsing
//!
//! The provider is a free-text model that is sometimes asked for JSON and
//! sometimes for prose, and answers in either shape regardless. Parsing is
//! three-tiered:
//!
//! 1. The whole content as JSON.
//! 2. The interior of the first fenced code block (```` ``` ```` or
//!    ```` ```json ````) as JSON.
//! 3. The whole content as plain text.
//!
//! Parsing itself never fails; callers decide whether the result is usable.

use super::message::RawCompletion;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static FENCED_BLOCK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?[ \t]*\r?\n?(.*?)```")
        .expect("FENCED_BLOCK_RE regex should compile")
});

/// Keys checked, in order, when prose is wrapped in a JSON object.
const TEXT_KEYS: &[&str] = &["response", "message", "text", "content", "answer"];

/// Result of parsing a [`RawCompletion`]
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedCompletion {
    /// The content (or its fenced interior) was valid JSON.
    Structured(Value),
    /// Plain text reply.
    Text(String),
}

impl ParsedCompletion {
    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            ParsedCompletion::Structured(v) => Some(v),
            ParsedCompletion::Text(_) => None,
        }
    }

    pub fn into_structured(self) -> Option<Value> {
        match self {
            ParsedCompletion::Structured(v) => Some(v),
            ParsedCompletion::Text(_) => None,
        }
    }

    /// Prose suitable for returning to a user, if any.
    ///
    /// - Text: the trimmed text.
    /// - JSON string: the string itself.
    /// - JSON object: the first non-blank string among `response`, `message`,
    ///   `text`, `content`, `answer`.
    /// - JSON number or bool: its rendering.
    ///
    /// Blank results are `None`.
    pub fn usable_text(&self) -> Option<String> {
        let text = match self {
            ParsedCompletion::Text(t) => Some(t.trim().to_string()),
            ParsedCompletion::Structured(value) => value_text(value),
        };
        text.filter(|t| !t.trim().is_empty())
    }
}

fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Object(map) => TEXT_KEYS
            .iter()
            .filter_map(|k| map.get(*k))
            .filter_map(Value::as_str)
            .map(str::trim)
            .find(|s| !s.is_empty())
            .map(str::to_string),
        Value::Null | Value::Array(_) => None,
    }
}

/// Parse a raw completion.
pub fn parse_completion(raw: &RawCompletion) -> ParsedCompletion {
    let content = raw.content.trim();

    if let Ok(value) = serde_json::from_str::<Value>(content) {
        return ParsedCompletion::Structured(value);
    }

    if let Some(inner) = FENCED_BLOCK_RE.captures(content).and_then(|c| c.get(1))
        && let Ok(value) = serde_json::from_str::<Value>(inner.as_str().trim())
    {
        return ParsedCompletion::Structured(value);
    }

    ParsedCompletion::Text(raw.content.clone())
}
