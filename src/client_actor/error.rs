use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur during client directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    #[error("Client not found: {0}")]
    NotFound(String),
    #[error("Client validation error: {0}")]
    ValidationError(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ClientError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ClientError::NotFound(id),
            FrameworkError::Rejected(msg) => ClientError::ValidationError(msg),
            other => ClientError::ActorCommunicationError(other.to_string()),
        }
    }
}
