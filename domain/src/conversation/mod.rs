//! Conversation domain
//!
//! Per-request inputs supplied by the caller: the discussion context, the
//! transcript history, and the catalog of known topics.

pub mod context;
pub mod history;
pub mod topic;

pub use context::ConversationContext;
pub use history::{ConversationHistory, HISTORY_WINDOW, HistoryEntry};
pub use topic::{Topic, TopicCatalog};
