//! OpenAI-compatible provider - ChatModel over the chat-completions wire.
//!
//! OpenAI, Gemini (via its OpenAI-compatibility endpoint), and Ollama all
//! speak the same `/chat/completions` protocol, so one adapter covers all
//! three; the constructors differ only in base URL and credentials.
//!
//! # Configuration
//!
//! ```ignore
//! let provider = OpenAiCompatProvider::openai(api_key, "gpt-4o-mini", timeout);
//! let provider = OpenAiCompatProvider::ollama("http://localhost:11434", "mistral", timeout);
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::{LlmConfig, LlmProvider};
use crate::ports::{
    ChatMessage, ChatModel, ChatRequest, FinishReason, ModelError, ModelTurn, ProviderInfo,
    ToolCallRequest,
};

/// Gemini's OpenAI-compatibility endpoint.
const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";

/// ChatModel implementation for any OpenAI-compatible service.
pub struct OpenAiCompatProvider {
    provider_name: String,
    model: String,
    base_url: String,
    api_key: Secret<String>,
    client: Client,
    timeout: Duration,
}

impl OpenAiCompatProvider {
    fn build(
        provider_name: impl Into<String>,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            provider_name: provider_name.into(),
            model: model.into(),
            base_url: base_url.into(),
            api_key: Secret::new(api_key.into()),
            client,
            timeout,
        })
    }

    /// Creates a provider for the OpenAI API.
    pub fn openai(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        Self::build("openai", "https://api.openai.com/v1", api_key, model, timeout)
    }

    /// Creates a provider for Gemini via its OpenAI-compatibility endpoint.
    pub fn gemini(
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        Self::build("gemini", GEMINI_BASE_URL, api_key, model, timeout)
    }

    /// Creates a provider for a local Ollama server.
    ///
    /// Ollama ignores the API key but the wire format requires one.
    pub fn ollama(
        url: &str,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ModelError> {
        let base_url = format!("{}/v1", url.trim_end_matches('/'));
        Self::build("ollama", base_url, "ollama", model, timeout)
    }

    /// Creates the provider selected by configuration.
    ///
    /// Missing credentials are not an error here; they surface per request
    /// via [`LlmConfig::missing_credential`].
    pub fn from_config(config: &LlmConfig) -> Result<Self, ModelError> {
        let timeout = config.timeout();
        match config.provider {
            LlmProvider::OpenAI => Self::openai(
                config.openai_api_key.clone().unwrap_or_default(),
                &config.model,
                timeout,
            ),
            LlmProvider::Gemini => Self::gemini(
                config.gemini_api_key.clone().unwrap_or_default(),
                &config.model,
                timeout,
            ),
            LlmProvider::Ollama => Self::ollama(&config.ollama_url, &config.model, timeout),
        }
    }

    /// Builds the chat completions endpoint URL.
    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    /// Converts a request to the wire format.
    fn to_wire_request(&self, request: &ChatRequest) -> WireRequest {
        let messages = request.messages.iter().map(WireMessage::from).collect();

        WireRequest {
            model: self.model.clone(),
            messages,
            tools: request.tools.clone(),
            max_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }

    /// Maps non-success statuses onto model errors.
    async fn handle_response_status(&self, response: Response) -> Result<Response, ModelError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();

        match status.as_u16() {
            401 | 403 => Err(ModelError::AuthenticationFailed),
            429 => Err(ModelError::RateLimited),
            400 => Err(ModelError::InvalidRequest(error_body)),
            code @ 500..=599 => Err(ModelError::Unavailable {
                status: code,
                message: error_body,
            }),
            code => Err(ModelError::Network(format!(
                "unexpected status {code}: {error_body}"
            ))),
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiCompatProvider {
    async fn complete(&self, request: ChatRequest) -> Result<ModelTurn, ModelError> {
        let wire_request = self.to_wire_request(&request);

        let response = self
            .client
            .post(self.completions_url())
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .header("Content-Type", "application/json")
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelError::Network(format!(
                        "request timed out after {}s",
                        self.timeout.as_secs()
                    ))
                } else if e.is_connect() {
                    ModelError::Network(format!("connection failed: {e}"))
                } else {
                    ModelError::Network(e.to_string())
                }
            })?;

        let response = self.handle_response_status(response).await?;

        let body: WireResponse = response
            .json()
            .await
            .map_err(|e| ModelError::Parse(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| ModelError::Parse("response contained no choices".to_string()))?;

        let tool_calls = choice
            .message
            .tool_calls
            .unwrap_or_default()
            .into_iter()
            .map(|call| ToolCallRequest {
                id: call.id,
                name: call.function.name,
                arguments: call.function.arguments,
            })
            .collect::<Vec<_>>();

        let finish_reason = match choice.finish_reason.as_deref() {
            Some("stop") => FinishReason::Stop,
            Some("length") => FinishReason::Length,
            Some("tool_calls") => FinishReason::ToolCalls,
            Some("content_filter") => FinishReason::ContentFilter,
            None if !tool_calls.is_empty() => FinishReason::ToolCalls,
            None => FinishReason::Stop,
            Some(_) => FinishReason::Other,
        };

        Ok(ModelTurn {
            content: choice.message.content,
            tool_calls,
            finish_reason,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new(&self.provider_name, &self.model)
    }
}

// ── Wire format (private DTOs) ─────────────────────────────────────────

#[derive(Debug, Serialize)]
struct WireRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<Vec<serde_json::Value>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_calls: Option<Vec<WireToolCall>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_call_id: Option<String>,
}

impl From<&ChatMessage> for WireMessage {
    fn from(message: &ChatMessage) -> Self {
        match message {
            ChatMessage::System { content } => Self {
                role: "system",
                content: Some(content.clone()),
                tool_calls: None,
                tool_call_id: None,
            },
            ChatMessage::User { content } => Self {
                role: "user",
                content: Some(content.clone()),
                tool_calls: None,
                tool_call_id: None,
            },
            ChatMessage::Assistant {
                content,
                tool_calls,
            } => Self {
                role: "assistant",
                content: content.clone(),
                tool_calls: if tool_calls.is_empty() {
                    None
                } else {
                    Some(tool_calls.iter().map(WireToolCall::from).collect())
                },
                tool_call_id: None,
            },
            ChatMessage::Tool {
                tool_call_id,
                content,
            } => Self {
                role: "tool",
                content: Some(content.clone()),
                tool_calls: None,
                tool_call_id: Some(tool_call_id.clone()),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WireToolCall {
    id: String,
    #[serde(rename = "type")]
    call_type: String,
    function: WireFunction,
}

impl From<&ToolCallRequest> for WireToolCall {
    fn from(call: &ToolCallRequest) -> Self {
        Self {
            id: call.id.clone(),
            call_type: "function".to_string(),
            function: WireFunction {
                name: call.name.clone(),
                arguments: call.arguments.clone(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct WireFunction {
    name: String,
    arguments: String,
}

#[derive(Debug, Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Debug, Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireResponseMessage {
    content: Option<String>,
    tool_calls: Option<Vec<WireToolCall>>,
}
