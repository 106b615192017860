use tracing::{debug, error, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::clients::{ClientDirectory, ProductCatalog};
use crate::domain::{Order, OrderPayload, OrderStatus, PayloadLine};
use crate::order_actor::{OrderBookAction, OrderError};
use crate::product_actor::ProductError;

/// Handle to the Order actor.
///
/// Creating an order is orchestrated here: the client and the stock are
/// checked against their own actors before the order is recorded. Each line
/// is booked only at the price the catalog currently holds.
#[derive(Clone)]
pub struct OrderBook {
    inner: ResourceClient<Order>,
    client_directory: ClientDirectory,
    product_catalog: ProductCatalog,
}

impl_client_methods!(OrderBook, Order, OrderError, order);

impl OrderBook {
    pub fn new(
        inner: ResourceClient<Order>,
        client_directory: ClientDirectory,
        product_catalog: ProductCatalog,
    ) -> Self {
        Self {
            inner,
            client_directory,
            product_catalog,
        }
    }

    #[instrument(
        skip(self, payload),
        fields(client_id = %payload.client_id, line_count = payload.lines.len(), total = %payload.total)
    )]
    pub async fn create_order(&self, payload: OrderPayload) -> Result<String, OrderError> {
        info!("Processing create_order request");

        // Step 1: Validate client
        match self.client_directory.get_client(payload.client_id.clone()).await {
            Ok(Some(client)) => info!(client_name = %client.name, "Client validation successful"),
            Ok(None) => {
                error!("Client not found");
                return Err(OrderError::InvalidClient(payload.client_id));
            }
            Err(e) => {
                error!(error = %e, "Client validation failed");
                return Err(OrderError::InvalidClient(format!("Client validation failed: {}", e)));
            }
        }

        // Step 2: Validate lines and total
        if payload.lines.is_empty() {
            error!("Order has no lines");
            return Err(OrderError::ValidationError("Order has no lines".to_string()));
        }
        if let Some(line) = payload.lines.iter().find(|line| line.quantity == 0) {
            error!(product_id = %line.id, "Line without quantity");
            return Err(OrderError::ValidationError(format!("No quantity for {}", line.id)));
        }
        let expected = payload.line_total();
        if expected != payload.total {
            error!(expected = %expected, "Total does not match the lines");
            return Err(OrderError::ValidationError(format!(
                "Total {} does not match lines {}",
                payload.total, expected
            )));
        }

        // Step 3: Reserve stock at the quoted prices, undoing earlier reservations on failure
        let mut reserved: Vec<(String, u32)> = Vec::with_capacity(payload.lines.len());
        for line in &payload.lines {
            match self
                .product_catalog
                .reserve_stock(line.id.clone(), line.quantity, line.price)
                .await
            {
                Ok(left) => {
                    info!(product_id = %line.id, remaining_stock = left, "Stock reserved");
                    reserved.push((line.id.clone(), line.quantity));
                }
                Err(e) => {
                    error!(product_id = %line.id, error = %e, "Stock reservation failed");
                    self.release(&reserved).await;
                    return Err(reservation_error(line, e));
                }
            }
        }

        // Step 4: Record the order
        match self.inner.create(payload).await {
            Ok(id) => {
                info!(order_id = %id, "Order created successfully");
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, "Order could not be recorded");
                self.release(&reserved).await;
                Err(e.into())
            }
        }
    }

    async fn release(&self, reserved: &[(String, u32)]) {
        for (product_id, quantity) in reserved {
            if let Err(e) = self
                .product_catalog
                .release_stock(product_id.clone(), *quantity)
                .await
            {
                warn!(product_id = %product_id, error = %e, "Stock release failed");
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn change_status(&self, id: String, status: OrderStatus) -> Result<OrderStatus, OrderError> {
        debug!("Sending request");
        self.inner
            .perform_action(id, OrderBookAction::ChangeStatus(status))
            .await
            .map_err(OrderError::from)
    }
}

fn reservation_error(line: &PayloadLine, e: ProductError) -> OrderError {
    match e {
        ProductError::InsufficientStock { .. } => {
            OrderError::InsufficientStock(format!("{}: {}", line.name, e))
        }
        ProductError::PriceChanged { .. } => OrderError::PriceChanged(format!("{}: {}", line.name, e)),
        ProductError::NotFound(id) => OrderError::InvalidProduct(id),
        other => OrderError::InvalidProduct(format!("{}: {}", line.id, other)),
    }
}
