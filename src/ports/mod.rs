//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ChatModel` - chat-completion providers (OpenAI, Gemini, Ollama)
//! - `WordApi` - the remote word-processing service

mod chat_model;
mod word_api;

pub use chat_model::{
    ChatMessage, ChatModel, ChatRequest, FinishReason, ModelError, ModelTurn, ProviderInfo,
    ToolCallRequest,
};
pub use word_api::{WordApi, WordApiError, WordOperation};
