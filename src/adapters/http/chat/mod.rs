//! Chat HTTP surface: POST /chat and GET /health.

pub mod dto;
mod handlers;
mod routes;

pub use handlers::ChatAppState;
pub use routes::chat_router;
