//! Stage-1 intent routing.
//!
//! One cheap model call classifies the question: a single tool (with
//! extracted parameters), the multi-tool loop, or a direct answer. The
//! call runs with a tight token budget and zero temperature; any failure
//! falls open to the multi path so routing can never lose a question.

use std::sync::Arc;

use tracing::{debug, warn};

use super::prompts::{router_prompt, ROUTER_SYSTEM_PROMPT};
use crate::domain::tools::{parse_stage1_reply, IntentDecision, ToolCatalog};
use crate::ports::{ChatMessage, ChatModel, ChatRequest};

/// Token budget for the routing reply; it only has to fit a small JSON object.
const ROUTER_MAX_TOKENS: u32 = 120;

/// Routes questions with a single compact model call.
pub struct IntentRouter {
    model: Arc<dyn ChatModel>,
    catalog: Arc<ToolCatalog>,
}

impl IntentRouter {
    /// Creates a router over the given model and catalog.
    pub fn new(model: Arc<dyn ChatModel>, catalog: Arc<ToolCatalog>) -> Self {
        Self { model, catalog }
    }

    /// Classifies a question into an [`IntentDecision`].
    ///
    /// Model failures and unparseable replies resolve to
    /// [`IntentDecision::Multi`].
    pub async fn route(&self, question: &str, language: &str) -> IntentDecision {
        let prompt = router_prompt(&self.catalog.compact_listing(), question, language);

        let request = ChatRequest::new(vec![
            ChatMessage::system(ROUTER_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ])
        .with_max_tokens(ROUTER_MAX_TOKENS)
        .with_temperature(0.0);

        match self.model.complete(request).await {
            Ok(turn) => {
                let raw = turn.trimmed_content();
                debug!(reply = %raw, "stage 1 raw reply");
                parse_stage1_reply(&raw, |name| self.catalog.contains(name))
            }
            Err(e) => {
                warn!(error = %e, "stage 1 routing call failed, falling back to multi");
                IntentDecision::Multi
            }
        }
    }
}
