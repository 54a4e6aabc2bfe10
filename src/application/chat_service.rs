//! Chat service - the three-path request flow behind POST /chat.
//!
//! Stage 1 routes the question; the result picks one of three paths:
//!
//! - **fast**: one tool call, answer rendered from a template, no second
//!   model round-trip
//! - **direct**: the model answers from knowledge, no tools offered
//! - **multi**: keyword-filtered tools plus the orchestration loop
//!
//! Every failure becomes an explanatory answer with HTTP 200; the
//! endpoint only rejects malformed requests.

use std::sync::Arc;

use tracing::{info, warn};

use super::category_filter::select_tools;
use super::intent_router::IntentRouter;
use super::orchestrator::Orchestrator;
use super::prompts::{user_message, SYSTEM_PROMPT};
use crate::config::LlmConfig;
use crate::domain::answer::format_direct_answer;
use crate::domain::tools::{IntentDecision, ToolCatalog};
use crate::ports::{ChatMessage, ChatModel, ChatRequest, ProviderInfo, WordApi};

/// Handles chat questions end to end.
pub struct ChatService {
    model: Arc<dyn ChatModel>,
    catalog: Arc<ToolCatalog>,
    router: IntentRouter,
    orchestrator: Orchestrator,
    llm: LlmConfig,
    fold_keywords: bool,
}

impl ChatService {
    /// Wires the service together.
    pub fn new(
        model: Arc<dyn ChatModel>,
        word_api: Arc<dyn WordApi>,
        catalog: Arc<ToolCatalog>,
        llm: LlmConfig,
        fold_keywords: bool,
    ) -> Self {
        let router = IntentRouter::new(model.clone(), catalog.clone());
        let orchestrator = Orchestrator::new(
            model.clone(),
            word_api,
            catalog.clone(),
            llm.max_tokens,
            llm.temperature,
        );

        Self {
            model,
            catalog,
            router,
            orchestrator,
            llm,
            fold_keywords,
        }
    }

    /// Answers a question. Never fails; problems become explanatory text.
    pub async fn answer(&self, question: &str, language: &str) -> String {
        // Credentials are checked per request so the service still starts
        // (and /health still responds) without a key.
        if let Some(var) = self.llm.missing_credential() {
            return format!(
                "Error: {var} is not configured. Please set it in the server environment."
            );
        }

        let intent = self.router.route(question, language).await;
        info!(?intent, "stage 1 decision");

        match intent {
            IntentDecision::Direct => return self.answer_direct(question, language).await,
            IntentDecision::Tool { name, params } => {
                // Stage 1 sometimes extracts only partial params for
                // multi-arg tools; demote to the multi path rather than
                // call with holes.
                let missing: Vec<&str> = self
                    .catalog
                    .get(&name)
                    .map(|tool| {
                        tool.required_params()
                            .into_iter()
                            .filter(|p| !params.contains_key(*p))
                            .collect()
                    })
                    .unwrap_or_default();

                if missing.is_empty() {
                    info!(tool = %name, "fast path");
                    let result = self.orchestrator.execute_tool(&name, &params).await;
                    return format_direct_answer(&name, &params, &result);
                }
                warn!(tool = %name, ?missing, "fast path missing required params, falling to multi");
            }
            IntentDecision::Multi => {}
        }

        let selection = select_tools(&self.catalog, question, self.fold_keywords);
        if selection.is_filtered() {
            info!(
                categories = ?selection.categories,
                tools = selection.tools.len(),
                "multi path with filtered tools"
            );
        } else {
            info!(tools = selection.tools.len(), "multi path with full catalog");
        }
        self.orchestrator
            .run(question, language, &selection.tools)
            .await
    }

    /// Direct path: the model answers from knowledge, no tools offered.
    async fn answer_direct(&self, question: &str, language: &str) -> String {
        info!("direct path, no tools");
        let request = ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_message(question, language)),
        ])
        .with_max_tokens(self.llm.max_tokens)
        .with_temperature(self.llm.temperature);

        match self.model.complete(request).await {
            Ok(turn) => turn.trimmed_content(),
            Err(e) => format!("LLM service error: {e}"),
        }
    }

    /// Provider details for the health endpoint.
    pub fn provider_info(&self) -> ProviderInfo {
        self.model.provider_info()
    }

    /// Number of registered tools, for the health endpoint.
    pub fn tool_count(&self) -> usize {
        self.catalog.tool_count()
    }
}
