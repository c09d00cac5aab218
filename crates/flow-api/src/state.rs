//! Application state shared across route handlers.
//!
//! AppState is passed to handlers via axum's State extractor. It is small
//! and cheap to clone: the config sits behind an `Arc` and the credential
//! is read once at startup.

use std::sync::Arc;

use flow_core::config::FlowConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<FlowConfig>,
    /// Hugging Face API key from the environment, if present.
    ///
    /// Absence does not block startup; the chat endpoint reports it as a
    /// configuration error per request instead.
    pub api_key: Option<String>,
}

impl AppState {
    /// Create a new AppState from the loaded config and optional credential.
    pub fn new(config: FlowConfig, api_key: Option<String>) -> Self {
        Self {
            config: Arc::new(config),
            api_key,
        }
    }
}
