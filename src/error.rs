use thiserror::Error;

/// Errors that can occur during user registry operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserError {
    #[error("{0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}
