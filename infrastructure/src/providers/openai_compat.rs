//! OpenAI-compatible chat-completions adapter.
//!
//! Talks to any endpoint that accepts `POST {base_url}/chat/completions`
//! with a Bearer token (DeepSeek by default).

use crate::config::FileProviderConfig;
use async_trait::async_trait;
use commons_application::ports::completion_provider::{CompletionProvider, ProviderError};
use commons_domain::core::string::truncate;
use commons_domain::{ChatMessage, CompletionOptions, RawCompletion};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Longest error body kept in a [`ProviderError::Status`].
const MAX_ERROR_BODY: usize = 500;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    #[serde(flatten)]
    options: &'a CompletionOptions,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Pull `choices[0].message.content` out of a response body.
fn extract_content(body: &str) -> Result<String, ProviderError> {
    let response: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::Malformed(format!("invalid JSON body: {}", e)))?;

    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or_else(|| ProviderError::Malformed("missing choices[0].message.content".into()))
}

/// Map a non-success HTTP status to a provider error.
fn status_error(status: reqwest::StatusCode, body: &str) -> ProviderError {
    match status.as_u16() {
        401 | 403 => ProviderError::Auth(format!("provider rejected credentials ({})", status)),
        code => ProviderError::Status {
            status: code,
            body: truncate(body.trim(), MAX_ERROR_BODY),
        },
    }
}

fn send_error(error: reqwest::Error) -> ProviderError {
    if error.is_timeout() {
        ProviderError::Timeout
    } else {
        ProviderError::Transport(error.to_string())
    }
}

/// [`CompletionProvider`] over an OpenAI-compatible HTTP API.
pub struct OpenAiCompatProvider {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl OpenAiCompatProvider {
    /// Build from the `[provider]` config section.
    ///
    /// The API key must already be resolved (see
    /// [`FileProviderConfig::resolve_api_key`]).
    pub fn from_config(config: &FileProviderConfig) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ProviderError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: format!("{}/chat/completions", config.base_url.trim_end_matches('/')),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        options: &CompletionOptions,
    ) -> Result<RawCompletion, ProviderError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(ProviderError::Auth("no API key configured".into()));
        };

        let request = ChatRequest {
            model: &self.model,
            messages,
            options,
            stream: false,
        };

        let start = Instant::now();
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(send_error)?;

        let status = response.status();
        let body = response.text().await.map_err(send_error)?;

        debug!(
            status = status.as_u16(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            bytes = body.len(),
            "Provider responded"
        );

        if !status.is_success() {
            let error = status_error(status, &body);
            warn!("Provider call failed: {}", error);
            return Err(error);
        }

        extract_content(&body).map(RawCompletion::new)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider(api_key: Option<&str>) -> OpenAiCompatProvider {
        OpenAiCompatProvider::from_config(&FileProviderConfig {
            base_url: "http://127.0.0.1:9/v1/".into(),
            api_key: api_key.map(String::from),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        assert_eq!(
            provider(None).endpoint(),
            "http://127.0.0.1:9/v1/chat/completions"
        );
    }

    #[test]
    fn test_request_body_shape() {
        let messages = [ChatMessage::system("sys"), ChatMessage::user("hi")];
        let options = CompletionOptions::new(300, 0.7).with_penalties(0.5, 0.3);
        let request = ChatRequest {
            model: "deepseek-chat",
            messages: &messages,
            options: &options,
            stream: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "deepseek-chat");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "hi");
        assert_eq!(value["max_tokens"], 300);
        assert_eq!(value["stream"], false);
        assert!(value.get("frequency_penalty").is_some());
    }

    #[test]
    fn test_request_body_omits_unset_penalties() {
        let options = CompletionOptions::new(150, 0.8);
        let request = ChatRequest {
            model: "m",
            messages: &[],
            options: &options,
            stream: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("frequency_penalty").is_none());
        assert!(value.get("presence_penalty").is_none());
    }

    #[test]
    fn test_extract_content() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"Hello"}}]}"#;
        assert_eq!(extract_content(body).unwrap(), "Hello");
    }

    #[test]
    fn test_extract_content_missing_is_malformed() {
        for body in [r#"{"choices":[]}"#, r#"{"choices":[{"message":{}}]}"#, "not json"] {
            assert!(matches!(
                extract_content(body),
                Err(ProviderError::Malformed(_))
            ));
        }
    }

    #[test]
    fn test_status_mapping() {
        assert!(matches!(
            status_error(reqwest::StatusCode::UNAUTHORIZED, ""),
            ProviderError::Auth(_)
        ));
        assert_eq!(
            status_error(reqwest::StatusCode::TOO_MANY_REQUESTS, " slow down "),
            ProviderError::Status {
                status: 429,
                body: "slow down".into()
            }
        );
    }

    #[tokio::test]
    async fn test_missing_key_is_auth_error_without_network() {
        let p = provider(None);
        assert!(!p.is_configured());
        let err = p
            .complete(&[ChatMessage::user("hi")], &CompletionOptions::new(10, 0.5))
            .await
            .unwrap_err();
        assert!(matches!(err, ProviderError::Auth(_)));
    }

    #[test]
    fn test_configured_with_key() {
        let p = provider(Some("sk-test"));
        assert!(p.is_configured());
        assert_eq!(p.model_name(), "deepseek-chat");
    }
}
