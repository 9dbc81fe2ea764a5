//! Completion provider port
//!
//! Defines the interface for calling an external text-completion service.

use async_trait::async_trait;
use commons_domain::{ChatMessage, CompletionOptions, RawCompletion};
use thiserror::Error;

/// Errors that can occur during a provider call
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("Provider call timed out")]
    Timeout,

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Provider returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed provider payload: {0}")]
    Malformed(String),
}

/// Coarse classification of a [`ProviderError`], for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderErrorCategory {
    Timeout,
    Auth,
    Transport,
    Status,
    Malformed,
}

impl ProviderErrorCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderErrorCategory::Timeout => "timeout",
            ProviderErrorCategory::Auth => "auth",
            ProviderErrorCategory::Transport => "transport",
            ProviderErrorCategory::Status => "status",
            ProviderErrorCategory::Malformed => "malformed",
        }
    }
}

impl std::fmt::Display for ProviderErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ProviderError {
    pub fn category(&self) -> ProviderErrorCategory {
        match self {
            ProviderError::Timeout => ProviderErrorCategory::Timeout,
            ProviderError::Auth(_) => ProviderErrorCategory::Auth,
            ProviderError::Transport(_) => ProviderErrorCategory::Transport,
            ProviderError::Status { .. } => ProviderErrorCategory::Status,
            ProviderError::Malformed(_) => ProviderErrorCategory::Malformed,
        }
    }
}

/// Gateway to a text-completion provider
///
/// Implementations (adapters) live in the infrastructure layer. Callers
/// apply their own timeout around [`CompletionProvider::complete`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send an ordered message exchange and return the assistant content.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<RawCompletion, ProviderError>;

    /// Whether credentials are present. Unconfigured providers still accept
    /// calls and fail them with [`ProviderError::Auth`].
    fn is_configured(&self) -> bool;

    /// Model identifier reported by health checks.
    fn model_name(&self) -> &str;
}
