//! Mock word API for testing.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::ports::{WordApi, WordApiError, WordOperation};

/// A scripted mock outcome.
#[derive(Debug, Clone)]
enum MockResult {
    Ok(String),
    Status { code: u16, body: String },
    Transport(String),
}

/// Mock word API with scripted results and call tracking.
#[derive(Debug, Clone, Default)]
pub struct MockWordApi {
    results: Arc<Mutex<VecDeque<MockResult>>>,
    calls: Arc<Mutex<Vec<WordOperation>>>,
}

impl MockWordApi {
    /// Creates a new mock with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful result string.
    pub fn with_result(self, result: impl Into<String>) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(MockResult::Ok(result.into()));
        self
    }

    /// Queues an HTTP status failure.
    pub fn with_status_error(self, code: u16, body: impl Into<String>) -> Self {
        self.results.lock().unwrap().push_back(MockResult::Status {
            code,
            body: body.into(),
        });
        self
    }

    /// Queues a transport failure.
    pub fn with_transport_error(self, message: impl Into<String>) -> Self {
        self.results
            .lock()
            .unwrap()
            .push_back(MockResult::Transport(message.into()));
        self
    }

    /// Number of operations executed so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Copy of all operations received, in order.
    pub fn calls(&self) -> Vec<WordOperation> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WordApi for MockWordApi {
    async fn execute(&self, operation: &WordOperation) -> Result<String, WordApiError> {
        self.calls.lock().unwrap().push(operation.clone());

        let next = self.results.lock().unwrap().pop_front();
        match next {
            Some(MockResult::Ok(result)) => Ok(result),
            Some(MockResult::Status { code, body }) => Err(WordApiError::Status { code, body }),
            Some(MockResult::Transport(message)) => Err(WordApiError::Transport(message)),
            None => Ok("null".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn op() -> WordOperation {
        WordOperation {
            category: "text".to_string(),
            action: "reverse".to_string(),
            query: vec![("string".to_string(), "abc".to_string())],
        }
    }

    #[tokio::test]
    async fn returns_scripted_results_and_tracks_calls() {
        let api = MockWordApi::new()
            .with_result(r#""cba""#)
            .with_status_error(500, "boom");

        assert_eq!(api.execute(&op()).await.unwrap(), r#""cba""#);
        assert!(matches!(
            api.execute(&op()).await,
            Err(WordApiError::Status { code: 500, .. })
        ));
        assert_eq!(api.call_count(), 2);
        assert_eq!(api.calls()[0].action, "reverse");
    }
}
