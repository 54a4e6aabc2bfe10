//! Application layer - the request flow between the HTTP surface and the
//! domain.
//!
//! - `IntentRouter` - stage-1 classification call
//! - `select_tools` - keyword category filter for the multi path
//! - `Orchestrator` - tool-calling conversation loop
//! - `ChatService` - the three-path flow behind POST /chat

mod category_filter;
mod chat_service;
mod intent_router;
mod orchestrator;
mod prompts;

pub use category_filter::{select_tools, ToolSelection};
pub use chat_service::ChatService;
pub use intent_router::IntentRouter;
pub use orchestrator::Orchestrator;
pub use prompts::SYSTEM_PROMPT;
