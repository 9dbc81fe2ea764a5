//! HTTP surface
//!
//! An axum router exposing the [`Council`] under `/api/ai`. The council is
//! the only shared state; every request carries its own context and history.

pub mod dto;
mod error;
mod handlers;

pub use error::ApiError;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{Method, header};
use axum::routing::{get, post};
use commons_application::Council;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Route prefix for every endpoint.
pub const API_PREFIX: &str = "/api/ai";

pub(crate) type SharedCouncil = Arc<Council>;

/// Transport settings for the router
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpOptions {
    /// Allowed CORS origins; `"*"` allows any.
    pub cors_origins: Vec<String>,
    pub body_limit_bytes: usize,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            cors_origins: vec!["http://localhost:8000".to_string()],
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl HttpOptions {
    fn cors_layer(&self) -> CorsLayer {
        let layer = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE]);

        if self.cors_origins.iter().any(|o| o == "*") {
            return layer.allow_origin(Any);
        }

        let origins: Vec<_> = self
            .cors_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Build the application router.
pub fn router(council: Arc<Council>, options: &HttpOptions) -> Router {
    let api = Router::new()
        .route("/chat", post(handlers::chat))
        .route("/chat/followup", post(handlers::follow_up))
        .route("/participants", get(handlers::participants))
        .route("/topics", get(handlers::topics))
        .route("/moderate", post(handlers::moderate))
        .route("/analyze/story", post(handlers::analyze_story))
        .route("/recommendations", get(handlers::recommendations))
        .route(
            "/sentiment/community",
            get(handlers::sample_sentiment).post(handlers::community_sentiment),
        )
        .route("/health", get(handlers::health));

    Router::new()
        .nest(API_PREFIX, api)
        .with_state(council)
        .layer(DefaultBodyLimit::max(options.body_limit_bytes))
        .layer(options.cors_layer())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use commons_application::{CompletionProvider, GenerationParams, ProviderError};
    use commons_domain::{ChatMessage, CompletionOptions, RandomSource, RawCompletion};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    /// Replies with a fixed text, or fails when `reply` is `None`.
    struct StubProvider {
        reply: Option<String>,
    }

    impl StubProvider {
        fn replying(text: &str) -> Self {
            Self {
                reply: Some(text.to_string()),
            }
        }

        fn failing() -> Self {
            Self { reply: None }
        }
    }

    #[async_trait]
    impl CompletionProvider for StubProvider {
        async fn complete(
            &self,
            _messages: &[ChatMessage],
            _options: &CompletionOptions,
        ) -> Result<RawCompletion, ProviderError> {
            self.reply
                .clone()
                .map(RawCompletion::new)
                .ok_or_else(|| ProviderError::Transport("connection refused".into()))
        }

        fn is_configured(&self) -> bool {
            self.reply.is_some()
        }

        fn model_name(&self) -> &str {
            "stub-model"
        }
    }

    struct FirstIndex;

    impl RandomSource for FirstIndex {
        fn pick_index(&self, _len: usize) -> usize {
            0
        }
    }

    fn app(provider: StubProvider) -> Router {
        let council = Council::builtin(
            Arc::new(provider),
            Arc::new(FirstIndex),
            GenerationParams::default(),
        )
        .unwrap();
        router(Arc::new(council), &HttpOptions::default())
    }

    async fn send(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_health_reports_configuration() {
        let (status, body) = send(app(StubProvider::failing()), "GET", "/api/ai/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "not_configured");
        assert_eq!(body["configured"], false);
        assert_eq!(body["model"], "stub-model");
        assert_eq!(body["participants"], 7);
    }

    #[tokio::test]
    async fn test_participants_listing() {
        let (status, body) =
            send(app(StubProvider::failing()), "GET", "/api/ai/participants", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 7);
        assert_eq!(body["participants"][0]["id"], "economist");
        assert_eq!(body["participants"][0]["name"], "EconAgent");
    }

    #[tokio::test]
    async fn test_topics_listing() {
        let (status, body) = send(app(StubProvider::failing()), "GET", "/api/ai/topics", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["topics"].as_array().unwrap().len(), 8);
        assert!(body["topics"][0]["keyPoints"].is_array());
    }

    #[tokio::test]
    async fn test_chat_selects_participant() {
        let (status, body) = send(
            app(StubProvider::replying("Call your representative.")),
            "POST",
            "/api/ai/chat",
            Some(json!({
                "messages": [{"role": "user", "content": "What policy changes would help with this legislation?"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["participantId"], "policy");
        assert_eq!(body["agent"], "PolicyPro");
        assert_eq!(body["response"], "Call your representative.");
        assert_eq!(body["fallback"], false);
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_chat_accepts_epoch_history_timestamp() {
        let (status, body) = send(
            app(StubProvider::replying("Welcome back, Ana.")),
            "POST",
            "/api/ai/chat",
            Some(json!({
                "messages": [{"content": "hi again"}],
                "conversationHistory": [
                    {"author": "Ana", "content": "hello", "timestamp": 1712345678000u64}
                ]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let history = body["conversationHistory"].as_array().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0]["timestamp"], "1712345678000");
        assert_eq!(history[1]["content"], "hi again");
        assert_eq!(history[2]["content"], "Welcome back, Ana.");
    }

    #[tokio::test]
    async fn test_chat_fallback_leaves_history_unchanged() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/chat",
            Some(json!({
                "messages": [{"content": "hi"}],
                "conversationHistory": [{"author": "Ana", "content": "hello"}]
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["conversationHistory"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_chat_provider_failure_is_fallback_not_5xx() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/chat",
            Some(json!({"messages": [{"content": "hi"}]})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["participantId"], "economist");
        assert_eq!(body["fallback"], true);
        assert!(!body["response"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_chat_empty_messages_is_bad_request() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/chat",
            Some(json!({"messages": []})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Messages array is required");
    }

    #[tokio::test]
    async fn test_chat_unknown_participant_is_not_found() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/chat",
            Some(json!({"messages": [{"content": "hi"}], "participantId": "astrologer"})),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("astrologer"));
    }

    #[tokio::test]
    async fn test_malformed_json_is_json_error() {
        let request = Request::builder()
            .method("POST")
            .uri("/api/ai/chat")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app(StubProvider::failing()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn test_follow_up_excludes_first_participant() {
        let (status, body) = send(
            app(StubProvider::replying("History offers a precedent.")),
            "POST",
            "/api/ai/chat/followup",
            Some(json!({
                "originalMessage": "How do we fund this?",
                "firstResponse": "Public banking.",
                "excludeParticipantId": "economist"
            })),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["response"], "History offers a precedent.");
        assert_ne!(body["participantId"], "economist");
        assert!(body["agent"].is_string());
    }

    #[tokio::test]
    async fn test_follow_up_requires_both_texts() {
        let (status, _) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/chat/followup",
            Some(json!({"originalMessage": "q"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_moderate_failure_is_permissive() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/moderate",
            Some(json!({"content": "hello neighbours", "contentType": "comment"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["moderation"]["approved"], true);
        assert_eq!(body["moderation"]["severity"], "low");
        assert!(body["moderatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_moderate_requires_content() {
        let (status, _) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/moderate",
            Some(json!({"content": ""})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_analyze_story() {
        let reply = r#"{"themes": ["eviction"], "sentiment": {"primary": "negative", "confidence": 0.9}}"#;
        let (status, body) = send(
            app(StubProvider::replying(reply)),
            "POST",
            "/api/ai/analyze/story",
            Some(json!({"content": "We were evicted last winter."})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["themes"][0], "eviction");
    }

    #[tokio::test]
    async fn test_analyze_story_failure_is_null() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/analyze/story",
            Some(json!({"content": "story"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["analysis"].is_null());
    }

    #[tokio::test]
    async fn test_recommendations() {
        let reply = r#"{"recommendations": [{"type": "learning", "title": "Intro to Cooperatives"}]}"#;
        let (status, body) = send(
            app(StubProvider::replying(reply)),
            "GET",
            "/api/ai/recommendations?interests=housing,cooperatives&context=New%20member",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["recommendations"][0]["type"], "learning");
        assert_eq!(body["recommendations"][0]["title"], "Intro to Cooperatives");
        assert!(body["generatedAt"].is_string());
    }

    #[tokio::test]
    async fn test_recommendations_failure_is_empty_list() {
        let (status, body) =
            send(app(StubProvider::failing()), "GET", "/api/ai/recommendations", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["recommendations"], json!([]));
    }

    #[tokio::test]
    async fn test_sample_community_sentiment() {
        let reply = r#"{"overall_sentiment": {"primary_tone": "mixed", "confidence": 0.7}}"#;
        let (status, body) = send(
            app(StubProvider::replying(reply)),
            "GET",
            "/api/ai/sentiment/community",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sentiment"]["overall_sentiment"]["primary_tone"], "mixed");
        assert_eq!(body["sampleSize"]["stories"], 2);
        assert_eq!(body["sampleSize"]["comments"], 2);
        assert!(body["analyzedAt"].is_string());
    }

    #[tokio::test]
    async fn test_posted_community_sentiment() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/sentiment/community",
            Some(json!({"stories": [{"content": "Rent doubled."}], "comments": []})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["sentiment"].is_null());
        assert_eq!(body["sampleSize"]["stories"], 1);
    }

    #[tokio::test]
    async fn test_posted_community_sentiment_requires_content() {
        let (status, body) = send(
            app(StubProvider::failing()),
            "POST",
            "/api/ai/sentiment/community",
            Some(json!({"stories": [], "comments": [{"content": " "}]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Stories or comments are required");
    }

    #[test]
    fn test_invalid_origin_is_skipped() {
        let options = HttpOptions {
            cors_origins: vec!["http://ok.example".into(), "bad\norigin".into()],
            ..Default::default()
        };
        // Building the layer must not panic on a bad entry
        let _ = options.cors_layer();
    }
}
