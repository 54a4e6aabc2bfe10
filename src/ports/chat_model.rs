//! Chat Model Port - Interface for LLM provider integrations.
//!
//! Abstracts the OpenAI-compatible chat-completions surface that OpenAI,
//! Gemini, and Ollama all expose, so the router and orchestration loop
//! never couple to a specific provider.
//!
//! # Design
//!
//! - Single non-streaming `complete` call; the gateway returns whole answers
//! - Messages carry tool calls and tool results for the orchestration loop
//! - Tool schemas travel as pre-rendered JSON (the catalog produces them)

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Port for chat-completion providers.
///
/// Implementations connect to an external model service and translate
/// between its wire format and these types.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Generate a single model turn for the given request.
    async fn complete(&self, request: ChatRequest) -> Result<ModelTurn, ModelError>;

    /// Get provider information (name and model).
    fn provider_info(&self) -> ProviderInfo;
}

/// A tool invocation requested by the model.
///
/// `arguments` is the raw JSON string from the wire; the orchestration
/// loop parses it and treats malformed JSON as an empty argument set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Provider-assigned call id, echoed back in the tool result message.
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// JSON-encoded arguments, exactly as the model produced them.
    pub arguments: String,
}

/// A message in the conversation sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatMessage {
    /// System instructions.
    System { content: String },
    /// User input.
    User { content: String },
    /// Assistant turn; may carry text, tool calls, or both.
    Assistant {
        content: Option<String>,
        tool_calls: Vec<ToolCallRequest>,
    },
    /// Result of a tool invocation, echoing the call id.
    Tool {
        tool_call_id: String,
        content: String,
    },
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System {
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User {
            content: content.into(),
        }
    }

    /// Creates a plain assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant {
            content: Some(content.into()),
            tool_calls: Vec::new(),
        }
    }

    /// Creates a tool-result message for the given call.
    pub fn tool_result(tool_call_id: impl Into<String>, content: impl Into<String>) -> Self {
        Self::Tool {
            tool_call_id: tool_call_id.into(),
            content: content.into(),
        }
    }
}

/// Request for a chat completion.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Conversation so far, in order.
    pub messages: Vec<ChatMessage>,
    /// Tool schemas in OpenAI function-calling format, if tools are offered.
    pub tools: Option<Vec<serde_json::Value>>,
    /// Maximum tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

impl ChatRequest {
    /// Creates a request with the given messages and no tools.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            tools: None,
            max_tokens: 1200,
            temperature: 0.2,
        }
    }

    /// Offers tools to the model.
    pub fn with_tools(mut self, tools: Vec<serde_json::Value>) -> Self {
        if !tools.is_empty() {
            self.tools = Some(tools);
        }
        self
    }

    /// Sets the maximum tokens to generate.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = max;
        self
    }

    /// Sets the temperature.
    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = temp;
        self
    }
}

/// One model turn: either a final answer or a batch of tool calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTurn {
    /// Text content, if the model produced any.
    pub content: Option<String>,
    /// Tool calls the model wants executed before answering.
    pub tool_calls: Vec<ToolCallRequest>,
    /// Why the model stopped generating.
    pub finish_reason: FinishReason,
}

impl ModelTurn {
    /// Creates a plain text turn.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: Vec::new(),
            finish_reason: FinishReason::Stop,
        }
    }

    /// Creates a tool-calling turn.
    pub fn tool_calls(calls: Vec<ToolCallRequest>) -> Self {
        Self {
            content: None,
            tool_calls: calls,
            finish_reason: FinishReason::ToolCalls,
        }
    }

    /// Whether this turn requests tool execution.
    pub fn has_tool_calls(&self) -> bool {
        !self.tool_calls.is_empty()
    }

    /// Text content with surrounding whitespace trimmed.
    pub fn trimmed_content(&self) -> String {
        self.content.as_deref().unwrap_or("").trim().to_string()
    }
}

/// Reason the model stopped generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop (end of response).
    Stop,
    /// Hit max_tokens limit.
    Length,
    /// Model requested tool execution.
    ToolCalls,
    /// Content was filtered for safety.
    ContentFilter,
    /// Provider reported something else.
    Other,
}

/// Provider information exposed on /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderInfo {
    /// Provider name (e.g. "openai", "gemini", "ollama").
    pub name: String,
    /// Model identifier (e.g. "gpt-4o-mini").
    pub model: String,
}

impl ProviderInfo {
    /// Creates new provider info.
    pub fn new(name: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            model: model.into(),
        }
    }
}

/// Chat model errors.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// API key or authentication failed.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Rate limited by provider.
    #[error("rate limited by provider")]
    RateLimited,

    /// Provider rejected the request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Provider returned an unexpected status.
    #[error("provider unavailable: status {status}: {message}")]
    Unavailable { status: u16, message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Failed to parse provider response.
    #[error("parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_builder_works() {
        let request = ChatRequest::new(vec![ChatMessage::user("Hello")])
            .with_tools(vec![serde_json::json!({"type": "function"})])
            .with_max_tokens(120)
            .with_temperature(0.0);

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.max_tokens, 120);
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.tools.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn empty_tool_list_stays_none() {
        let request = ChatRequest::new(vec![]).with_tools(vec![]);
        assert!(request.tools.is_none());
    }

    #[test]
    fn turn_detects_tool_calls() {
        let turn = ModelTurn::tool_calls(vec![ToolCallRequest {
            id: "call_1".to_string(),
            name: "reverse_text".to_string(),
            arguments: r#"{"word": "hello"}"#.to_string(),
        }]);

        assert!(turn.has_tool_calls());
        assert_eq!(turn.finish_reason, FinishReason::ToolCalls);
    }

    #[test]
    fn trimmed_content_handles_missing_text() {
        assert_eq!(ModelTurn::tool_calls(vec![]).trimmed_content(), "");
        assert_eq!(ModelTurn::text("  hi  ").trimmed_content(), "hi");
    }
}
