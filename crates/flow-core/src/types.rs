use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Enums
// =============================================================================

/// Who authored a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The learner practicing conversation.
    User,
    /// The canned-reply generator.
    Assistant,
}

// =============================================================================
// Records
// =============================================================================

/// One turn entry in a conversation transcript.
///
/// Messages are immutable once created: they are appended to a session's
/// transcript and never mutated or deleted afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    /// Unique message ID.
    pub id: Uuid,
    /// Author of the message.
    pub role: Role,
    /// Message text.
    pub text: String,
    /// Creation time.
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message authored by the user.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create a message authored by the assistant.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Role::Assistant, text)
    }

    fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
