//! Domain layer for commons-council
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Participants
//!
//! A council of specialist personas (economist, organizer, historian, ...)
//! held in a read-only [`ParticipantRegistry`] built once at startup.
//!
//! ## Selection
//!
//! [`SelectionEngine`] routes a message to the best-suited participant by
//! weighted keyword scores, topic multipliers and a deterministic
//! tie-break order, with message-shape heuristics for sparse messages.
//!
//! ## Prompts and parsing
//!
//! [`PromptAssembler`] renders persona, context and recent history into the
//! provider instruction text; [`parse_completion`] reads whatever shape the
//! provider answers in.

pub mod completion;
pub mod conversation;
pub mod core;
pub mod moderation;
pub mod participant;
pub mod prompt;
pub mod selection;

// Re-export commonly used types
pub use completion::{
    ChatMessage, CompletionOptions, ParsedCompletion, RawCompletion, Role, parse_completion,
};
pub use conversation::{
    ConversationContext, ConversationHistory, HISTORY_WINDOW, HistoryEntry, Topic, TopicCatalog,
};
pub use core::{
    error::DomainError,
    random::{RandomSource, choose},
};
pub use moderation::{
    CommunitySentiment, ModerationFlags, ModerationVerdict, Recommendation, Sentiment, Severity,
    StoryAnalysis, UserProfile,
};
pub use participant::{
    Participant, ParticipantId, ParticipantRegistry, ParticipantSpec, ParticipantSummary,
};
pub use prompt::{PromptAssembler, StructuredPrompt};
pub use selection::{
    ParticipantScore, ScoreTable, ScoringConfig, SelectionEngine, SelectionReason,
    SelectionResult,
};
