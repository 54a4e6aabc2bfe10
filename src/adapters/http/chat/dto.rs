//! Request and response DTOs for the chat endpoints.

use serde::{Deserialize, Serialize};

/// Body of POST /chat.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequestBody {
    /// The question to answer.
    pub question: Option<String>,
    /// Requested language; defaults to "english".
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "english".to_string()
}

/// Body of a successful POST /chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponseBody {
    /// The question, echoed back.
    pub question: String,
    /// The language, echoed back.
    pub language: String,
    /// The answer text.
    pub answer: String,
}

/// Body of an error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error description.
    pub error: String,
}

/// Body of GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" when the service is up.
    pub status: String,
    /// Service name.
    pub server: String,
    /// Number of registered tools.
    pub tools_available: usize,
    /// Configured model name.
    pub model: String,
    /// Configured provider name.
    pub provider: String,
}
