//! The order-in-progress container and its actor form.

pub mod error;
pub mod service;
mod store;

pub use error::DraftError;
pub use service::{DraftClient, DraftRequest, DraftService};
pub use store::OrderStore;
