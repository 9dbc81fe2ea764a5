//! Participant selection
//!
//! Keyword scoring with topic multipliers, then message-shape heuristics
//! when no participant scores confidently.

pub mod engine;
pub mod heuristics;
pub mod score_table;

pub use engine::{
    MIN_CONFIDENCE, ParticipantScore, SelectionEngine, SelectionReason, SelectionResult,
};
pub use score_table::{ScoreTable, ScoringConfig, WORD_BOUNDARY_BONUS};
