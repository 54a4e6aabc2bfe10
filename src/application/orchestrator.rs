//! Multi-tool orchestration loop.
//!
//! Runs the conversation with the model, executing the tool calls it
//! requests and feeding the results back, until the model produces a text
//! answer or the round cap is hit. Tool-level failures never abort the
//! loop: they are returned to the model as `{"error": ...}` results so it
//! can recover or explain.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::{json, Map, Value};
use tracing::{debug, error, info, warn};

use super::prompts::{user_message, SYSTEM_PROMPT};
use crate::domain::tools::ToolCatalog;
use crate::ports::{ChatMessage, ChatModel, ChatRequest, FinishReason, WordApi, WordOperation};

/// Round cap for the loop; hitting it returns a fixed apology.
const MAX_ROUNDS: usize = 10;

/// Answer returned when the loop exhausts its round cap.
const TOO_MANY_STEPS: &str =
    "I processed your request but it required too many steps. Please try a simpler question.";

/// Drives the tool-calling conversation for the multi path.
pub struct Orchestrator {
    model: Arc<dyn ChatModel>,
    word_api: Arc<dyn WordApi>,
    catalog: Arc<ToolCatalog>,
    max_tokens: u32,
    temperature: f32,
}

impl Orchestrator {
    /// Creates an orchestrator with the answering-call generation settings.
    pub fn new(
        model: Arc<dyn ChatModel>,
        word_api: Arc<dyn WordApi>,
        catalog: Arc<ToolCatalog>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            model,
            word_api,
            catalog,
            max_tokens,
            temperature,
        }
    }

    /// Runs the loop and returns the final answer text.
    pub async fn run(
        &self,
        question: &str,
        language: &str,
        tool_names: &BTreeSet<String>,
    ) -> String {
        let tools = self.catalog.to_openai_tools(tool_names);

        let mut messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_message(question, language)),
        ];

        for round in 0..MAX_ROUNDS {
            let request = ChatRequest::new(messages.clone())
                .with_tools(tools.clone())
                .with_max_tokens(self.max_tokens)
                .with_temperature(self.temperature);

            let turn = match self.model.complete(request).await {
                Ok(turn) => turn,
                Err(e) => {
                    error!(error = %e, round, "model call failed in orchestration loop");
                    return format!("LLM service error: {e}");
                }
            };

            if turn.finish_reason == FinishReason::Stop || !turn.has_tool_calls() {
                info!(rounds = round + 1, "multi path complete");
                return turn.trimmed_content();
            }

            messages.push(ChatMessage::Assistant {
                content: turn.content.clone(),
                tool_calls: turn.tool_calls.clone(),
            });

            for call in &turn.tool_calls {
                let args = parse_arguments(&call.arguments);
                info!(tool = %call.name, "executing tool");
                let result = self.execute_tool(&call.name, &args).await;
                messages.push(ChatMessage::tool_result(&call.id, result));
            }
        }

        warn!(max_rounds = MAX_ROUNDS, "orchestration loop hit round cap");
        TOO_MANY_STEPS.to_string()
    }

    /// Executes one tool call, turning every failure into an error result.
    pub async fn execute_tool(&self, name: &str, args: &Map<String, Value>) -> String {
        let Some(tool) = self.catalog.get(name) else {
            return json!({"error": format!("Unknown tool: {name}")}).to_string();
        };

        let operation = WordOperation::for_tool(tool, args);
        match self.word_api.execute(&operation).await {
            Ok(result) => {
                debug!(
                    tool = %name,
                    result = %result.chars().take(200).collect::<String>(),
                    "tool result"
                );
                result
            }
            Err(e) => {
                warn!(tool = %name, error = %e, "tool execution failed");
                json!({"error": e.to_string()}).to_string()
            }
        }
    }
}

/// Parses model-produced tool arguments; malformed JSON becomes an empty set.
fn parse_arguments(raw: &str) -> Map<String, Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}
