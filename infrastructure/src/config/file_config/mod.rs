//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types at the
//! composition root.

mod generation;
mod logging;
mod provider;
mod server;

pub use generation::FileGenerationConfig;
pub use logging::FileLoggingConfig;
pub use provider::{API_KEY_ENV, FileProviderConfig};
pub use server::FileServerConfig;

use commons_application::GenerationParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("provider.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("provider.model cannot be empty")]
    EmptyModelName,

    #[error("provider.base_url cannot be empty")]
    EmptyBaseUrl,

    #[error("{0} cannot be 0")]
    ZeroTokenLimit(&'static str),

    #[error("server.bind cannot be empty")]
    EmptyBind,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Completion provider settings
    pub provider: FileProviderConfig,
    /// Sampling and history settings
    pub generation: FileGenerationConfig,
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning every detected issue.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        if self.provider.timeout_seconds == 0 {
            errors.push(ConfigValidationError::InvalidTimeout);
        }
        if self.provider.model.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyModelName);
        }
        if self.provider.base_url.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyBaseUrl);
        }
        if self.generation.max_tokens == 0 {
            errors.push(ConfigValidationError::ZeroTokenLimit("generation.max_tokens"));
        }
        if self.generation.follow_up_max_tokens == 0 {
            errors.push(ConfigValidationError::ZeroTokenLimit(
                "generation.follow_up_max_tokens",
            ));
        }
        if self.server.bind.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyBind);
        }

        errors
    }

    /// Application generation parameters.
    pub fn generation_params(&self) -> GenerationParams {
        self.generation.to_params(self.provider.timeout_seconds)
    }
}
