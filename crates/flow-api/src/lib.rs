//! Flow API crate - axum HTTP server and route handlers.
//!
//! Provides the REST surface for the conversation practice app: the chat
//! reply endpoint and a health check. Replies come from the same selector
//! that powers in-process sessions, so both paths stay in lockstep.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
