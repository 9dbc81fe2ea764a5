//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Participant not found: {0}")]
    ParticipantNotFound(String),

    #[error("No participants configured")]
    EmptyRegistry,

    #[error("Invalid participant '{id}': {reason}")]
    InvalidParticipant { id: String, reason: String },

    #[error("Duplicate participant id: {0}")]
    DuplicateParticipant(String),

    #[error("Score table references unknown participant: {0}")]
    UnknownScoreTableParticipant(String),
}

impl DomainError {
    /// Check if this error represents an unknown participant lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, DomainError::ParticipantNotFound(_))
    }

    /// Errors raised while building the registry or score tables.
    ///
    /// The process should refuse to start on any of these.
    pub fn is_configuration_error(&self) -> bool {
        !self.is_not_found()
    }
}
