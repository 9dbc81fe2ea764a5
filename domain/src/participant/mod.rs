//! Participant domain
//!
//! Specialist personas and the read-only registry that holds them.

pub mod entities;
pub mod registry;
pub mod roster;

pub use entities::{Participant, ParticipantId, ParticipantSpec, ParticipantSummary};
pub use registry::ParticipantRegistry;
