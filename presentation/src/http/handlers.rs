//! Request handlers for the `/api/ai` endpoints

use super::SharedCouncil;
use super::dto::{
    ChatRequest, ChatResponse, FollowUpRequest, FollowUpResponse, HealthResponse,
    ModerateRequest, ModerateResponse, ParticipantsResponse, RecommendationsQuery,
    RecommendationsResponse, SampleSize, SentimentRequest, SentimentResponse, StoryRequest,
    StoryResponse, TopicsResponse, timestamp,
};
use super::error::ApiError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use commons_domain::core::string::truncate;
use tracing::{debug, info};

pub(super) async fn chat(
    State(council): State<SharedCouncil>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, ApiError> {
    let Json(request) = payload?;
    let message = request
        .active_message()
        .ok_or_else(|| ApiError::bad_request("Messages array is required"))?
        .to_string();

    debug!(message = %truncate(&message, 80), "Chat request");

    let mut history = request.history();
    let reply = council
        .chat(
            &message,
            &request.context,
            &mut history,
            request.participant_id(),
        )
        .await?;

    info!(
        participant = %reply.participant_id,
        fallback = reply.response.is_fallback(),
        "Chat reply"
    );
    Ok(Json(ChatResponse::new(reply, history)))
}

pub(super) async fn follow_up(
    State(council): State<SharedCouncil>,
    payload: Result<Json<FollowUpRequest>, JsonRejection>,
) -> Result<Json<FollowUpResponse>, ApiError> {
    let Json(request) = payload?;
    if !request.is_complete() {
        return Err(ApiError::bad_request(
            "Original message and first response are required",
        ));
    }

    let follow_up = council.follow_up(request.into_input()).await;
    Ok(Json(follow_up.into()))
}

pub(super) async fn participants(State(council): State<SharedCouncil>) -> Json<ParticipantsResponse> {
    Json(council.list_participants().into())
}

pub(super) async fn topics(State(council): State<SharedCouncil>) -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: council.topics(),
    })
}

pub(super) async fn moderate(
    State(council): State<SharedCouncil>,
    payload: Result<Json<ModerateRequest>, JsonRejection>,
) -> Result<Json<ModerateResponse>, ApiError> {
    let Json(request) = payload?;
    if request.content.trim().is_empty() {
        return Err(ApiError::bad_request("Content is required for moderation"));
    }

    let moderation = council
        .moderate(&request.content, request.content_type.as_deref())
        .await;
    Ok(Json(ModerateResponse {
        success: true,
        moderation,
        moderated_at: timestamp(),
    }))
}

pub(super) async fn analyze_story(
    State(council): State<SharedCouncil>,
    payload: Result<Json<StoryRequest>, JsonRejection>,
) -> Result<Json<StoryResponse>, ApiError> {
    let Json(request) = payload?;
    if request.content.trim().is_empty() {
        return Err(ApiError::bad_request("Story content is required"));
    }

    let analysis = council.analyze_story(&request.content).await;
    Ok(Json(StoryResponse {
        success: true,
        analysis,
    }))
}

pub(super) async fn recommendations(
    State(council): State<SharedCouncil>,
    query: Result<Query<RecommendationsQuery>, QueryRejection>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let Query(query) = query?;
    let recommendations = council
        .recommend(&query.profile(), query.context.as_deref())
        .await;
    Ok(Json(RecommendationsResponse {
        success: true,
        recommendations,
        generated_at: timestamp(),
    }))
}

/// Sample used by `GET /sentiment/community` until a story store exists.
const SAMPLE_STORIES: [&str; 2] = [
    "I've been struggling with medical debt and it's overwhelming...",
    "Our community came together to support a local business...",
];

const SAMPLE_COMMENTS: [&str; 2] = [
    "This is so important! Thank you for sharing.",
    "I've experienced something similar and it's comforting to know I'm not alone.",
];

pub(super) async fn sample_sentiment(
    State(council): State<SharedCouncil>,
) -> Json<SentimentResponse> {
    let stories: Vec<String> = SAMPLE_STORIES.iter().map(|s| s.to_string()).collect();
    let comments: Vec<String> = SAMPLE_COMMENTS.iter().map(|c| c.to_string()).collect();
    Json(sentiment_response(&council, stories, comments).await)
}

pub(super) async fn community_sentiment(
    State(council): State<SharedCouncil>,
    payload: Result<Json<SentimentRequest>, JsonRejection>,
) -> Result<Json<SentimentResponse>, ApiError> {
    let Json(request) = payload?;
    let (stories, comments) = request.into_texts();
    if stories.is_empty() && comments.is_empty() {
        return Err(ApiError::bad_request("Stories or comments are required"));
    }
    Ok(Json(sentiment_response(&council, stories, comments).await))
}

async fn sentiment_response(
    council: &SharedCouncil,
    stories: Vec<String>,
    comments: Vec<String>,
) -> SentimentResponse {
    let sentiment = council.community_sentiment(&stories, &comments).await;
    SentimentResponse {
        success: true,
        sentiment,
        analyzed_at: timestamp(),
        sample_size: SampleSize {
            stories: stories.len(),
            comments: comments.len(),
        },
    }
}

pub(super) async fn health(State(council): State<SharedCouncil>) -> Json<HealthResponse> {
    let configured = council.is_configured();
    Json(HealthResponse {
        service: "AI Integration",
        status: if configured { "configured" } else { "not_configured" },
        configured,
        model: council.model_name().to_string(),
        timestamp: timestamp(),
        participants: council.registry().len(),
    })
}
