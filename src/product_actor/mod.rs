//! Product catalog records, including stock management actions.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::ProductCatalog;
use crate::domain::Product;

/// Creates a new Product actor and its catalog handle.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductCatalog) {
    let (actor, inner) = ResourceActor::new(buffer_size, sequential_ids("product"));
    (actor, ProductCatalog::new(inner))
}
