//! # Order Composer
//!
//! The order-entry flow of a back-office application: pick a client,
//! multi-select products, enter per-product quantities, watch the total and
//! submit.
//!
//! ## Layers
//!
//! - **Composition core** - pure, synchronous state machine → [`composer`]
//!     - [`reconcile`](composer::reconcile) merges a fresh product selection with entered quantities
//!     - [`set_quantity`](composer::set_quantity) floors unusable input to 0 and reports it
//!     - [`compute_total`](composer::compute_total) sums lines in integer cents
//!     - [`reduce`](composer::reduce) applies one [`OrderAction`](composer::OrderAction)
//!     - [`build_payload`](composer::build_payload) projects the draft onto the creation payload
//! - **Order store** - owned container with a single dispatch point → [`OrderStore`],
//!   and its actor form → [`DraftService`] / [`DraftClient`]
//! - **Collaborators** - in-memory actors standing in for the data API →
//!   [`ClientDirectory`], [`ProductCatalog`], [`OrderBook`]
//! - **System** - startup, draft flows, shutdown, config and tracing → [`OrderSystem`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # use order_composer::*;
//! # async fn demo(products: Vec<domain::Product>, client: domain::ClientRef) -> Result<(), Box<dyn std::error::Error>> {
//! let mut system = OrderSystem::new(SystemConfig::from_env());
//! let draft = system.open_draft();
//!
//! draft.select_client(client).await?;
//! draft.select_products(products).await?;
//! draft.set_quantity("product_1".to_string(), 2u32.into()).await?;
//! draft.recompute_total().await?;
//!
//! if draft.can_submit().await? {
//!     let order_id = draft.submit().await?;
//! }
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod actor_framework;
pub mod app_system;
pub mod client_actor;
pub mod clients;
pub mod composer;
pub mod domain;
pub mod order_actor;
pub mod order_store;
pub mod product_actor;

#[cfg(test)]
mod integration_tests;
#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, OrderSystem, SystemConfig};
pub use clients::{ClientDirectory, OrderBook, ProductCatalog};
pub use order_store::{DraftClient, DraftError, DraftService, OrderStore};
