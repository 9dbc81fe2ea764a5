//! HTTP server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Listen address
    pub bind: String,
    /// Origins allowed by CORS
    pub cors_origins: Vec<String>,
    /// Maximum accepted request body size
    pub body_limit_bytes: usize,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            cors_origins: vec!["http://localhost:8000".to_string()],
            body_limit_bytes: 1024 * 1024,
        }
    }
}
