//! Error types for the conversation engine.

use flow_core::error::FlowError;
use thiserror::Error;

/// Errors raised by session, speech, and sign-in operations.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Speech capture was started while already listening.
    #[error("speech capture is already active")]
    CaptureAlreadyActive,

    /// A capture operation needs an active capture and there is none.
    #[error("speech capture is not active")]
    CaptureNotActive,

    /// Sign-in was attempted with a blank email or access key.
    #[error("email and access key are required")]
    MissingCredentials,

    /// A custom topic title was blank after trimming.
    #[error("topic title cannot be empty")]
    EmptyTopic,
}

impl From<ChatError> for FlowError {
    fn from(err: ChatError) -> Self {
        match err {
            ChatError::CaptureAlreadyActive | ChatError::CaptureNotActive => {
                FlowError::Speech(err.to_string())
            }
            ChatError::MissingCredentials | ChatError::EmptyTopic => {
                FlowError::Chat(err.to_string())
            }
        }
    }
}
