use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

use crate::clients::{ClientDirectory, OrderBook, ProductCatalog};
use crate::order_store::{DraftClient, DraftService};
use crate::{client_actor, order_actor, product_actor};

use super::SystemConfig;

/// The main application system that orchestrates all actors.
///
/// Starts the resource actors in dependency order, injects their handles
/// into the order book, and opens draft flows on demand.
pub struct OrderSystem {
    pub client_directory: ClientDirectory,
    pub product_catalog: ProductCatalog,
    pub order_book: OrderBook,
    config: SystemConfig,
    handles: Vec<JoinHandle<()>>,
    drafts: Vec<JoinHandle<()>>,
}

impl Default for OrderSystem {
    fn default() -> Self {
        Self::new(SystemConfig::default())
    }
}

impl OrderSystem {
    /// Create and start the actor system. Must be called inside a tokio runtime.
    #[instrument(name = "order_system", skip(config), fields(buffer_size = config.buffer_size))]
    pub fn new(config: SystemConfig) -> Self {
        info!("Starting order system");

        let (client_actor, client_directory) = client_actor::new(config.buffer_size);
        let client_handle = tokio::spawn(client_actor.run());

        let (product_actor, product_catalog) = product_actor::new(config.buffer_size);
        let product_handle = tokio::spawn(product_actor.run());

        let (order_actor, order_book) = order_actor::new(
            config.buffer_size,
            client_directory.clone(),
            product_catalog.clone(),
        );
        let order_handle = tokio::spawn(order_actor.run());

        info!("Order system started successfully");

        Self {
            client_directory,
            product_catalog,
            order_book,
            config,
            handles: vec![client_handle, product_handle, order_handle],
            drafts: Vec::new(),
        }
    }

    /// Enters the order-entry flow with a fresh, empty draft.
    #[instrument(skip(self))]
    pub fn open_draft(&mut self) -> DraftClient {
        let (service, draft) = DraftService::new(self.config.buffer_size, self.order_book.clone());
        self.drafts.push(tokio::spawn(service.run()));
        info!(open_drafts = self.drafts.len(), "Draft opened");
        draft
    }

    /// Gracefully shutdown the entire actor system.
    ///
    /// Open drafts are abandoned first. Resource actors stop once the last
    /// handle to them is dropped, so the handles are dropped before waiting.
    /// Every task is awaited even when an earlier one failed; the failures
    /// are reported together.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system");

        let Self {
            client_directory,
            product_catalog,
            order_book,
            handles,
            drafts,
            ..
        } = self;

        let mut failures = Vec::new();

        for handle in drafts {
            handle.abort();
            if let Err(e) = handle.await {
                if !e.is_cancelled() {
                    error!(error = ?e, "Draft task failed");
                    failures.push(format!("Draft task failed: {}", e));
                }
            }
        }

        drop(order_book);
        drop(product_catalog);
        drop(client_directory);

        for handle in handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                failures.push(format!("Actor task failed: {}", e));
            }
        }

        if !failures.is_empty() {
            return Err(failures.join("; "));
        }

        info!("Order system shutdown complete");
        Ok(())
    }
}
