//! Lexigate - LLM tool-routing gateway for a remote word-analysis API.
//!
//! Exposes a word-processing service (English and Indic scripts) to LLMs
//! as a catalog of callable tools, routes each question through a
//! two-stage intent pipeline, and serves the result over POST /chat.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
