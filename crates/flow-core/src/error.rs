use thiserror::Error;

/// Top-level error type for the Flow system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for FlowError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FlowError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for FlowError {
    fn from(err: toml::de::Error) -> Self {
        FlowError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for FlowError {
    fn from(err: toml::ser::Error) -> Self {
        FlowError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for FlowError {
    fn from(err: serde_json::Error) -> Self {
        FlowError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Flow operations.
pub type Result<T> = std::result::Result<T, FlowError>;
