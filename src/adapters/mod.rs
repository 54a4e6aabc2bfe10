//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to external systems:
//! - `ai` - chat model providers (OpenAI-compatible wire, plus a mock)
//! - `wordapi` - the remote word-processing service
//! - `http` - the inbound HTTP surface

pub mod ai;
pub mod http;
pub mod wordapi;
