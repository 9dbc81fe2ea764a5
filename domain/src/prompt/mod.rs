//! Prompt domain
//!
//! Pure text construction for every provider call: participant responses,
//! follow-ups, and the structured-output callers.

mod participant;
mod structured;

pub use participant::{DEFAULT_DESCRIPTION, DEFAULT_KEY_POINTS, DEFAULT_TOPIC, PromptAssembler};
pub use structured::StructuredPrompt;
