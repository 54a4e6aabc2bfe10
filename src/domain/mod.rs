//! Domain layer - pure business logic with no I/O.
//!
//! Everything here is deterministic and synchronous: the tool catalog,
//! intent parsing, and answer formatting. Network effects live in the
//! adapters; orchestration lives in the application layer.

pub mod answer;
pub mod tools;
