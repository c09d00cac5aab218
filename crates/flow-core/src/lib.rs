//! Shared kernel for the Flow conversation-practice system.
//!
//! Provides the configuration layer, the cross-crate error taxonomy,
//! and the transcript data model used by the chat engine and the API.

pub mod config;
pub mod error;
pub mod types;

pub use config::FlowConfig;
pub use error::{FlowError, Result};
pub use types::{Message, Role};
