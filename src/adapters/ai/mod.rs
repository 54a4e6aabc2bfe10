//! Chat model adapters.
//!
//! Implementations of the ChatModel port:
//!
//! - `OpenAiCompatProvider` - OpenAI, Gemini, and Ollama over the
//!   OpenAI-compatible chat-completions wire
//! - `MockChatModel` - scripted mock for testing

mod mock_provider;
mod openai_compat;

pub use mock_provider::{MockChatModel, MockModelError, MockTurn};
pub use openai_compat::OpenAiCompatProvider;
