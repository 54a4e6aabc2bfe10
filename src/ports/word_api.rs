//! Word API Port - Interface to the remote word-processing service.
//!
//! The service is a plain HTTP API: `GET {base}/{category}/{action}` with
//! positional query parameters (`string`, `input2`, `input3`, `count`,
//! `language`). A [`WordOperation`] carries one fully-bound call; the
//! adapter owns the transport and the response envelope.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::domain::tools::ToolDefinition;

/// Port for executing word-processing operations.
#[async_trait]
pub trait WordApi: Send + Sync {
    /// Execute one operation and return the result as a string.
    ///
    /// A successful upstream envelope yields its unwrapped payload; an
    /// envelope with `success: false` yields an `API Error: ...` string.
    /// Transport and HTTP-level failures are returned as errors.
    async fn execute(&self, operation: &WordOperation) -> Result<String, WordApiError>;
}

/// One fully-bound upstream call: endpoint segments plus query pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOperation {
    /// API category segment (e.g. "analysis").
    pub category: String,
    /// API action segment (e.g. "is-palindrome").
    pub action: String,
    /// Query pairs in declaration order; absent optionals are omitted.
    pub query: Vec<(String, String)>,
}

impl WordOperation {
    /// Binds a tool's extracted arguments onto its upstream endpoint.
    ///
    /// Walks the tool's declared parameters in order, mapping each present
    /// argument to its query key. Absent optional parameters produce no
    /// query pair at all.
    pub fn for_tool(tool: &ToolDefinition, args: &Map<String, Value>) -> Self {
        let query = tool
            .parameters()
            .iter()
            .filter_map(|param| {
                args.get(&param.name)
                    .filter(|v| !v.is_null())
                    .map(|v| (param.query_key.clone(), render_query_value(v)))
            })
            .collect();

        Self {
            category: tool.endpoint().category().to_string(),
            action: tool.endpoint().action().to_string(),
            query,
        }
    }
}

/// Renders a JSON argument as a query-string value.
fn render_query_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Word API errors.
#[derive(Debug, thiserror::Error)]
pub enum WordApiError {
    /// Upstream returned a non-success HTTP status.
    #[error("word API returned status {code}: {body}")]
    Status { code: u16, body: String },

    /// Network or timeout failure reaching the service.
    #[error("word API transport error: {0}")]
    Transport(String),

    /// Response body could not be read.
    #[error("word API response could not be decoded: {0}")]
    Decode(String),
}
