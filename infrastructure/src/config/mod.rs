//! Configuration file loading for commons-council
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `COMMONS_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./commons.toml` or `./.commons.toml`
//! 4. Global: `$XDG_CONFIG_HOME/commons-council/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    API_KEY_ENV, ConfigValidationError, FileConfig, FileGenerationConfig, FileLoggingConfig,
    FileProviderConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
