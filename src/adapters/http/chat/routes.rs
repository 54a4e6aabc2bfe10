//! Axum router for the chat endpoints.
//!
//! # Routes
//!
//! - `POST /chat` - answer a question
//! - `GET /health` - health check

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{chat, health, ChatAppState};

/// Create the chat router with the given state.
pub fn chat_router(state: ChatAppState) -> Router {
    Router::new()
        .route("/chat", post(chat))
        .route("/health", get(health))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockChatModel;
    use crate::adapters::wordapi::MockWordApi;
    use crate::application::ChatService;
    use crate::config::LlmConfig;
    use crate::domain::tools::ToolCatalog;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(model: MockChatModel) -> Router {
        let llm = LlmConfig {
            openai_api_key: Some("sk-test".to_string()),
            ..Default::default()
        };
        let chat = ChatService::new(
            Arc::new(model),
            Arc::new(MockWordApi::new()),
            Arc::new(ToolCatalog::builtin().unwrap()),
            llm,
            true,
        );
        chat_router(ChatAppState {
            chat: Arc::new(chat),
        })
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn missing_question_returns_400() {
        let response = app(MockChatModel::new())
            .oneshot(post_chat("{}"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Missing question parameter");
    }

    #[tokio::test]
    async fn blank_question_returns_400() {
        let response = app(MockChatModel::new())
            .oneshot(post_chat(r#"{"question": "   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Missing question parameter");
    }

    #[tokio::test]
    async fn malformed_json_returns_400() {
        let response = app(MockChatModel::new())
            .oneshot(post_chat("{not json"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], "Invalid JSON body");
    }

    #[tokio::test]
    async fn valid_question_returns_200_with_answer() {
        let model = MockChatModel::new()
            .with_text_turn(r#"{"action": "direct"}"#)
            .with_text_turn("Hello! Ask me about words.");

        let response = app(model)
            .oneshot(post_chat(r#"{"question": "hello"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["question"], "hello");
        assert_eq!(body["language"], "english");
        assert_eq!(body["answer"], "Hello! Ask me about words.");
    }

    #[tokio::test]
    async fn health_reports_catalog_and_provider() {
        let response = app(MockChatModel::new())
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["server"], "lexigate");
        assert_eq!(body["tools_available"], 36);
        assert_eq!(body["provider"], "mock");
    }
}
