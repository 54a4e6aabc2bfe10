//! HTTP handlers for the chat endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{ChatRequestBody, ChatResponseBody, ErrorBody, HealthResponse};
use crate::application::ChatService;

/// Application state for the chat endpoints.
#[derive(Clone)]
pub struct ChatAppState {
    /// The chat service handling questions.
    pub chat: Arc<ChatService>,
}

/// Answer a question.
///
/// POST /chat with `{"question": "...", "language": "english"}`.
///
/// Returns 400 only for malformed requests; routing, model, and tool
/// failures all come back as 200 with an explanatory answer.
pub async fn chat(
    State(state): State<ChatAppState>,
    body: Result<Json<ChatRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(body)) = body else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Invalid JSON body".to_string(),
            }),
        )
            .into_response();
    };

    let question = body.question.as_deref().unwrap_or("").trim().to_string();
    if question.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody {
                error: "Missing question parameter".to_string(),
            }),
        )
            .into_response();
    }

    let answer = state.chat.answer(&question, &body.language).await;

    Json(ChatResponseBody {
        question,
        language: body.language,
        answer,
    })
    .into_response()
}

/// Health check.
///
/// GET /health.
pub async fn health(State(state): State<ChatAppState>) -> impl IntoResponse {
    let info = state.chat.provider_info();

    Json(HealthResponse {
        status: "ok".to_string(),
        server: "lexigate".to_string(),
        tools_available: state.chat.tool_count(),
        model: info.model,
        provider: info.name,
    })
}
