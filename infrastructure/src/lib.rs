//! Infrastructure layer for commons-council
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod providers;
pub mod random;

// Re-export commonly used types
pub use config::{
    API_KEY_ENV, ConfigLoader, ConfigValidationError, FileConfig, FileGenerationConfig,
    FileLoggingConfig, FileProviderConfig, FileServerConfig,
};
pub use logging::JsonlConversationLogger;
pub use providers::OpenAiCompatProvider;
pub use random::{SeededRandom, ThreadRandom};
