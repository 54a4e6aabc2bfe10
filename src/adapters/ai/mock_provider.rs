//! Mock chat model for testing.
//!
//! Provides a configurable mock implementation of the ChatModel port,
//! allowing router and orchestration tests to run without a real provider.
//!
//! # Features
//!
//! - Scripted turns, consumed in order
//! - Error injection for resilience testing
//! - Call tracking for verification
//!
//! # Example
//!
//! ```ignore
//! let model = MockChatModel::new()
//!     .with_text_turn(r#"{"action": "direct"}"#)
//!     .with_text_turn("Hello!");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{
    ChatModel, ChatRequest, ModelError, ModelTurn, ProviderInfo, ToolCallRequest,
};

/// A scripted mock outcome.
#[derive(Debug, Clone)]
pub enum MockTurn {
    /// Return a turn.
    Turn(ModelTurn),
    /// Return an error.
    Error(MockModelError),
}

/// Cloneable stand-ins for the non-clone [`ModelError`].
#[derive(Debug, Clone)]
pub enum MockModelError {
    AuthenticationFailed,
    RateLimited,
    Unavailable { status: u16, message: String },
    Network { message: String },
}

impl From<MockModelError> for ModelError {
    fn from(err: MockModelError) -> Self {
        match err {
            MockModelError::AuthenticationFailed => ModelError::AuthenticationFailed,
            MockModelError::RateLimited => ModelError::RateLimited,
            MockModelError::Unavailable { status, message } => {
                ModelError::Unavailable { status, message }
            }
            MockModelError::Network { message } => ModelError::Network(message),
        }
    }
}

/// Mock chat model with scripted turns and call tracking.
#[derive(Debug, Clone, Default)]
pub struct MockChatModel {
    turns: Arc<Mutex<VecDeque<MockTurn>>>,
    calls: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockChatModel {
    /// Creates a new mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a plain text turn.
    pub fn with_text_turn(self, content: impl Into<String>) -> Self {
        self.push(MockTurn::Turn(ModelTurn::text(content)));
        self
    }

    /// Queues a tool-calling turn.
    pub fn with_tool_call_turn(self, calls: Vec<ToolCallRequest>) -> Self {
        self.push(MockTurn::Turn(ModelTurn::tool_calls(calls)));
        self
    }

    /// Queues an error.
    pub fn with_error(self, error: MockModelError) -> Self {
        self.push(MockTurn::Error(error));
        self
    }

    fn push(&self, turn: MockTurn) {
        self.turns.lock().unwrap().push_back(turn);
    }

    /// Number of completion calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Copy of all requests received, in order.
    pub fn calls(&self) -> Vec<ChatRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(&self, request: ChatRequest) -> Result<ModelTurn, ModelError> {
        self.calls.lock().unwrap().push(request);

        let next = self.turns.lock().unwrap().pop_front();
        match next {
            Some(MockTurn::Turn(turn)) => Ok(turn),
            Some(MockTurn::Error(err)) => Err(err.into()),
            None => Ok(ModelTurn::text("")),
        }
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock-model-1")
    }
}
