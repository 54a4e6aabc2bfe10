//! Lexigate server entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lexigate::adapters::ai::OpenAiCompatProvider;
use lexigate::adapters::http::{chat_router, ChatAppState};
use lexigate::adapters::wordapi::HttpWordApi;
use lexigate::application::ChatService;
use lexigate::config::AppConfig;
use lexigate::domain::tools::ToolCatalog;
use lexigate::ports::{ChatModel, WordApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.server.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = Arc::new(ToolCatalog::builtin()?);

    let model: Arc<dyn ChatModel> = Arc::new(OpenAiCompatProvider::from_config(&config.llm)?);
    let word_api: Arc<dyn WordApi> = Arc::new(HttpWordApi::new(&config.word_api)?);

    let chat = Arc::new(ChatService::new(
        model,
        word_api,
        catalog.clone(),
        config.llm.clone(),
        config.word_api.fold_keywords,
    ));

    let cors = build_cors_layer(&config.server.cors_origins_list())?;
    let app = chat_router(ChatAppState { chat })
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors);

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "starting lexigate");
    tracing::info!(word_api = %config.word_api.base_url, "word API backend");
    tracing::info!(
        provider = config.llm.provider.as_str(),
        model = %config.llm.model,
        tools = catalog.tool_count(),
        "model provider"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// CORS for the browser frontend: explicit origins when configured,
/// otherwise any origin.
fn build_cors_layer(origins: &[String]) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    if origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let parsed = origins
        .iter()
        .map(|o| o.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(layer.allow_origin(parsed))
}
