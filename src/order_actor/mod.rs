//! Submitted orders and their status lifecycle.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::actor_framework::{sequential_ids, ResourceActor};
use crate::clients::{ClientDirectory, OrderBook, ProductCatalog};
use crate::domain::Order;

/// Creates a new Order actor and the order book handle that orchestrates it.
pub fn new(
    buffer_size: usize,
    client_directory: ClientDirectory,
    product_catalog: ProductCatalog,
) -> (ResourceActor<Order>, OrderBook) {
    let (actor, inner) = ResourceActor::new(buffer_size, sequential_ids("order"));
    (actor, OrderBook::new(inner, client_directory, product_catalog))
}
