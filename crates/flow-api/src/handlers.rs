//! Route handler functions for the chat API.
//!
//! The chat endpoint validates the request, checks the reply-service
//! credential, and runs the same reply selector session transcripts use.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use flow_chat::selector;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request types
// =============================================================================

/// Request body for POST /chat.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// The learner's utterance. Required and must be non-empty.
    pub user_message: Option<String>,
    /// Active topic title. Accepted for the wire contract; selection
    /// currently ignores it.
    pub topic: Option<String>,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatReply {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /chat - select a reply for one learner utterance.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    // Missing and empty are both rejected; whitespace-only passes through
    // and falls to the default reply pool.
    let user_message = body
        .user_message
        .filter(|message| !message.is_empty())
        .ok_or_else(|| ApiError::BadRequest("User message is required".to_string()))?;

    if state.api_key.is_none() {
        return Err(ApiError::Configuration(
            "Hugging Face API key not configured".to_string(),
        ));
    }

    tracing::debug!(message = %user_message, "Received chat message");
    let reply = selector::select_reply(&user_message, body.topic.as_deref());
    tracing::debug!(reply = %reply, "Sending reply");

    Ok(Json(ChatReply {
        success: true,
        message: reply.to_string(),
    }))
}

/// GET /health - liveness check.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Server is running!".to_string(),
    })
}
