use thiserror::Error;

use crate::composer::SubmissionError;
use crate::order_actor::OrderError;

/// Errors returned by a draft service.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DraftError {
    /// The draft did not pass the submission gate; nothing was sent.
    #[error(transparent)]
    Incomplete(#[from] SubmissionError),
    /// The order book refused the order. The draft is unchanged.
    #[error("Order rejected: {0}")]
    Rejected(#[from] OrderError),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
