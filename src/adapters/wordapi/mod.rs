//! Word API adapters.
//!
//! - `HttpWordApi` - GET client for the remote word-processing service
//! - `MockWordApi` - scripted mock for testing

mod client;
mod mock;

pub use client::HttpWordApi;
pub use mock::MockWordApi;
