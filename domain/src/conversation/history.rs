//! Conversation history
//!
//! The history is owned by the caller (or its session store) and passed in
//! per request. The core reads a bounded suffix of it and, after a
//! successful generation, appends the exchange through `&mut`; it never
//! keeps a reference past the call.

use serde::{Deserialize, Serialize};

/// Number of trailing entries rendered into a prompt.
pub const HISTORY_WINDOW: usize = 6;

/// One line of a conversation transcript (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub author: String,
    pub content: String,
    /// RFC 3339 timestamp as supplied by the caller; opaque to the core.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl HistoryEntry {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }
}

/// Caller-owned ordered sequence of history entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    entries: Vec<HistoryEntry>,
}

impl ConversationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// The last `window` entries, oldest first.
    pub fn recent(&self, window: usize) -> &[HistoryEntry] {
        let start = self.entries.len().saturating_sub(window);
        &self.entries[start..]
    }

    /// Render the last `window` entries as `"{author}: {content}"` lines.
    ///
    /// Returns an empty string for an empty history.
    pub fn transcript(&self, window: usize) -> String {
        self.recent(window)
            .iter()
            .map(|e| format!("{}: {}", e.author, e.content))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_entries(self) -> Vec<HistoryEntry> {
        self.entries
    }
}

impl From<Vec<HistoryEntry>> for ConversationHistory {
    fn from(entries: Vec<HistoryEntry>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(n: usize) -> ConversationHistory {
        (0..n)
            .map(|i| HistoryEntry::new(format!("user{}", i), format!("message {}", i)))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_recent_window() {
        let h = history(10);
        let recent = h.recent(HISTORY_WINDOW);
        assert_eq!(recent.len(), 6);
        assert_eq!(recent[0].content, "message 4");
        assert_eq!(recent[5].content, "message 9");
    }

    #[test]
    fn test_recent_shorter_than_window() {
        assert_eq!(history(2).recent(HISTORY_WINDOW).len(), 2);
    }

    #[test]
    fn test_transcript_format() {
        let h = history(7);
        let transcript = h.transcript(HISTORY_WINDOW);
        assert!(!transcript.contains("message 0"));
        assert!(transcript.starts_with("user1: message 1"));
        assert_eq!(transcript.lines().count(), 6);
    }

    #[test]
    fn test_empty_transcript() {
        assert_eq!(ConversationHistory::new().transcript(HISTORY_WINDOW), "");
    }

    #[test]
    fn test_wire_shape_is_plain_array() {
        let json = r#"[{"author":"Ana","content":"hello","timestamp":"2024-01-01T00:00:00Z"},{"author":"Bo","content":"hi"}]"#;
        let h: ConversationHistory = serde_json::from_str(json).unwrap();
        assert_eq!(h.len(), 2);
        assert_eq!(h.entries()[1].timestamp, None);
    }
}
