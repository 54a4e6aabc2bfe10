//! Stage-1 intent decision parsing.
//!
//! The routing model replies with a small JSON object. Models wrap it in
//! code fences, flatten the shape, or invent action values, so parsing is
//! deliberately tolerant: anything that cannot be resolved to a known tool
//! or an explicit "direct" falls back to the multi-tool path.

use serde_json::{Map, Value};

/// Outcome of the stage-1 routing call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentDecision {
    /// Single tool call with pre-extracted parameters (fast path).
    Tool {
        name: String,
        params: Map<String, Value>,
    },
    /// Multi-step question; run the full orchestration loop.
    Multi,
    /// Conversational question; answer without tools.
    Direct,
}

/// Strips a Markdown code fence (``` or ```json) wrapping the reply.
fn strip_fences(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") up to the first newline.
    let rest = match rest.find('\n') {
        Some(pos) => &rest[pos + 1..],
        None => rest,
    };
    rest.trim_end_matches('`').trim()
}

/// Parses the stage-1 reply into an [`IntentDecision`].
///
/// `is_known_tool` checks names against the catalog. Recovery rules:
/// - fenced JSON is unwrapped before parsing
/// - unparseable or non-object replies resolve to [`IntentDecision::Multi`]
/// - `action` set to a known tool name (the flattened shape) is treated as
///   a tool decision with the remaining fields as its parameters
/// - a tool decision naming an unknown tool resolves to `Multi`
pub fn parse_stage1_reply(
    reply: &str,
    is_known_tool: impl Fn(&str) -> bool,
) -> IntentDecision {
    let Ok(Value::Object(mut decision)) =
        serde_json::from_str::<Value>(strip_fences(reply))
    else {
        return IntentDecision::Multi;
    };

    let action = match decision.get("action").and_then(Value::as_str) {
        Some(action) => action.to_string(),
        None => return IntentDecision::Multi,
    };

    match action.as_str() {
        "direct" => IntentDecision::Direct,
        "multi" => IntentDecision::Multi,
        "tool" => {
            let name = match decision.get("tool").and_then(Value::as_str) {
                Some(name) if is_known_tool(name) => name.to_string(),
                _ => return IntentDecision::Multi,
            };
            let params = match decision.remove("params") {
                Some(Value::Object(map)) => map,
                Some(_) => return IntentDecision::Multi,
                None => Map::new(),
            };
            IntentDecision::Tool { name, params }
        }
        // Flattened shape: the model put the tool name in "action" and the
        // parameters at the top level.
        flattened if is_known_tool(flattened) => {
            let name = flattened.to_string();
            decision.remove("action");
            IntentDecision::Tool {
                name,
                params: decision,
            }
        }
        _ => IntentDecision::Multi,
    }
}
