//! Provider configuration from TOML (`[provider]` section)

use serde::{Deserialize, Serialize};

/// Environment variable consulted when no API key is configured.
pub const API_KEY_ENV: &str = "DEEPSEEK_API_KEY";

/// OpenAI-compatible chat-completions provider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Base URL; `/chat/completions` is appended.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// API key. Falls back to `DEEPSEEK_API_KEY` when unset.
    pub api_key: Option<String>,
    /// Per-call timeout in seconds (0 is rejected by validation).
    pub timeout_seconds: u64,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.deepseek.com/v1".to_string(),
            model: "deepseek-chat".to_string(),
            api_key: None,
            timeout_seconds: 30,
        }
    }
}

impl FileProviderConfig {
    /// Configured key, or `env_key` when none is set. Blank keys count as unset.
    pub fn resolve_api_key(&mut self, env_key: Option<String>) {
        let configured = self
            .api_key
            .take()
            .filter(|k| !k.trim().is_empty());
        self.api_key = configured.or_else(|| env_key.filter(|k| !k.trim().is_empty()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_key_wins() {
        let mut config = FileProviderConfig {
            api_key: Some("from-file".into()),
            ..Default::default()
        };
        config.resolve_api_key(Some("from-env".into()));
        assert_eq!(config.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn test_env_key_fills_blank() {
        let mut config = FileProviderConfig {
            api_key: Some("  ".into()),
            ..Default::default()
        };
        config.resolve_api_key(Some("from-env".into()));
        assert_eq!(config.api_key.as_deref(), Some("from-env"));

        let mut config = FileProviderConfig::default();
        config.resolve_api_key(None);
        assert!(config.api_key.is_none());
    }
}
