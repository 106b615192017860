use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::Money;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Price changed: quoted {quoted}, now {current}")]
    PriceChanged { quoted: Money, current: Money },
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),
    #[error("Product rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ProductError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Rejected(msg) => ProductError::Rejected(msg),
            other => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}
