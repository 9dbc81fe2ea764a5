//! Generation parameters: provider call control.
//!
//! [`GenerationParams`] groups the static sampling and timeout settings used
//! by every use case that calls the completion provider. These are
//! application-layer concerns, not domain policy; the per-participant
//! temperature stays on [`Participant`](commons_domain::Participant).

use commons_domain::{CompletionOptions, HISTORY_WINDOW};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provider call parameters.
///
/// | Caller | max tokens | temperature | penalties |
/// |--------|-----------|-------------|-----------|
/// | Primary response | `max_tokens` | persona | frequency / presence |
/// | Follow-up | `follow_up_max_tokens` | `follow_up_temperature` | none |
/// | Moderation | `moderation_max_tokens` | `moderation_temperature` | none |
/// | Story analysis | `analysis_max_tokens` | `analysis_temperature` | none |
/// | Recommendations | `recommendation_max_tokens` | `analysis_temperature` | none |
/// | Community sentiment | `sentiment_max_tokens` | `analysis_temperature` | none |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub follow_up_max_tokens: u32,
    pub frequency_penalty: f32,
    pub presence_penalty: f32,
    pub follow_up_temperature: f32,
    pub moderation_max_tokens: u32,
    pub moderation_temperature: f32,
    pub analysis_max_tokens: u32,
    pub analysis_temperature: f32,
    pub recommendation_max_tokens: u32,
    pub sentiment_max_tokens: u32,
    /// Number of trailing history entries rendered into prompts.
    pub history_window: usize,
    /// Bound on each provider call; expiry takes the fallback path.
    pub timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 300,
            follow_up_max_tokens: 150,
            frequency_penalty: 0.5,
            presence_penalty: 0.3,
            follow_up_temperature: 0.8,
            moderation_max_tokens: 200,
            moderation_temperature: 0.3,
            analysis_max_tokens: 1000,
            analysis_temperature: 0.7,
            recommendation_max_tokens: 1500,
            sentiment_max_tokens: 2000,
            history_window: HISTORY_WINDOW,
            timeout: Duration::from_secs(30),
        }
    }
}

impl GenerationParams {
    // ==================== Builder Methods ====================

    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    pub fn with_follow_up_max_tokens(mut self, max: u32) -> Self {
        self.follow_up_max_tokens = max;
        self
    }

    pub fn with_penalties(mut self, frequency: f32, presence: f32) -> Self {
        self.frequency_penalty = frequency;
        self.presence_penalty = presence;
        self
    }

    pub fn with_follow_up_temperature(mut self, temperature: f32) -> Self {
        self.follow_up_temperature = temperature;
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    // ==================== Per-call Options ====================

    pub fn primary_options(&self, temperature: f32) -> CompletionOptions {
        CompletionOptions::new(self.max_tokens, temperature)
            .with_penalties(self.frequency_penalty, self.presence_penalty)
    }

    pub fn follow_up_options(&self) -> CompletionOptions {
        CompletionOptions::new(self.follow_up_max_tokens, self.follow_up_temperature)
    }

    pub fn moderation_options(&self) -> CompletionOptions {
        CompletionOptions::new(self.moderation_max_tokens, self.moderation_temperature)
    }

    pub fn analysis_options(&self) -> CompletionOptions {
        CompletionOptions::new(self.analysis_max_tokens, self.analysis_temperature)
    }

    pub fn recommendation_options(&self) -> CompletionOptions {
        CompletionOptions::new(self.recommendation_max_tokens, self.analysis_temperature)
    }

    pub fn sentiment_options(&self) -> CompletionOptions {
        CompletionOptions::new(self.sentiment_max_tokens, self.analysis_temperature)
    }
}
