//! HTTP client for the remote word-processing service.
//!
//! Calls `GET {base}/{category}/{action}` with the operation's query pairs
//! and unwraps the response envelope `{success, result|data, error}`:
//!
//! - `success: false` with an error yields the string `API Error: {error}`
//!   as a regular result, so the model (or the direct formatter) can
//!   explain the failure instead of the request blowing up
//! - otherwise `result` is preferred, then `data`, then the whole body
//!
//! The unwrapped value is re-serialized to JSON text; that text is what
//! flows into tool-result messages and the direct-answer formatter.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use crate::config::WordApiConfig;
use crate::ports::{WordApi, WordApiError, WordOperation};

/// WordApi implementation over plain HTTP GET.
pub struct HttpWordApi {
    base_url: String,
    client: Client,
}

impl HttpWordApi {
    /// Creates a client from configuration.
    pub fn new(config: &WordApiConfig) -> Result<Self, WordApiError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| WordApiError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn operation_url(&self, operation: &WordOperation) -> String {
        format!("{}/{}/{}", self.base_url, operation.category, operation.action)
    }

    /// Unwraps the response envelope into the value the tools report.
    fn extract_result(body: Value) -> Value {
        let Value::Object(map) = body else {
            return body;
        };

        let failed = map.get("success") == Some(&Value::Bool(false));
        if failed {
            if let Some(error) = map.get("error").filter(|e| !e.is_null()) {
                let error = match error {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                return Value::String(format!("API Error: {error}"));
            }
        }

        map.get("result")
            .or_else(|| map.get("data"))
            .cloned()
            .unwrap_or(Value::Object(map))
    }
}

#[async_trait]
impl WordApi for HttpWordApi {
    async fn execute(&self, operation: &WordOperation) -> Result<String, WordApiError> {
        let response = self
            .client
            .get(self.operation_url(operation))
            .query(&operation.query)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    WordApiError::Transport("request timed out".to_string())
                } else {
                    WordApiError::Transport(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(WordApiError::Status {
                code: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| WordApiError::Decode(e.to_string()))?;

        let result = Self::extract_result(body);
        serde_json::to_string(&result).map_err(|e| WordApiError::Decode(e.to_string()))
    }
}
