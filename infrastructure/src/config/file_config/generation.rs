//! Generation configuration from TOML (`[generation]` section)

use commons_application::GenerationParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Max tokens for primary responses
    pub max_tokens: u32,
    /// Max tokens for follow-ups
    pub follow_up_max_tokens: u32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub follow_up_temperature: f32,
    /// Trailing history entries rendered into prompts
    pub history_window: usize,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        let params = GenerationParams::default();
        Self {
            max_tokens: params.max_tokens,
            follow_up_max_tokens: params.follow_up_max_tokens,
            frequency_penalty: params.frequency_penalty,
            presence_penalty: params.presence_penalty,
            follow_up_temperature: params.follow_up_temperature,
            history_window: params.history_window,
        }
    }
}

impl FileGenerationConfig {
    /// Build application parameters, taking the call timeout from `[provider]`.
    pub fn to_params(&self, timeout_seconds: u64) -> GenerationParams {
        GenerationParams::default()
            .with_max_tokens(self.max_tokens)
            .with_follow_up_max_tokens(self.follow_up_max_tokens)
            .with_penalties(self.frequency_penalty, self.presence_penalty)
            .with_follow_up_temperature(self.follow_up_temperature)
            .with_history_window(self.history_window)
            .with_timeout(Duration::from_secs(timeout_seconds))
    }
}
