use order_composer::domain::{Client, Money, OrderStatus, Product};
use order_composer::{setup_tracing, OrderSystem, SystemConfig};
use tracing::{error, info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = SystemConfig::from_env();
    setup_tracing(&config.log_filter);

    info!("Starting order composer demo");

    let mut system = OrderSystem::new(config);

    // Seed the collaborators the order-entry flow reads from
    let span = tracing::info_span!("seeding");
    async {
        info!("Registering clients and products");
        for client in [
            Client::new("Ann", "Smith", "Acme", "ann@example.com"),
            Client::new("Bob", "Jones", "Initech", "bob@example.com"),
        ] {
            system
                .client_directory
                .create_client(client)
                .await
                .map_err(|e| e.to_string())?;
        }

        for (name, cents, stock) in [("Widget", 500, 10), ("Gadget", 350, 4), ("Gizmo", 1250, 1)] {
            system
                .product_catalog
                .create_product(Product::new("", name, Money::from_cents(cents), stock))
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let clients = system.client_directory.list_clients().await.map_err(|e| e.to_string())?;
    let products = system.product_catalog.list_products().await.map_err(|e| e.to_string())?;
    let client = clients.first().ok_or("No client registered")?.to_ref();

    let draft = system.open_draft();

    let span = tracing::info_span!("order_entry", client_id = %client.id);
    let order_result = async {
        draft.select_client(client).await?;
        let lines = draft.select_products(products.iter().take(2).cloned().collect()).await?;

        for (line, typed) in lines.iter().zip(["2", "abc"]) {
            if let Some(rejected) = draft.set_quantity(line.id.clone(), typed.into()).await? {
                warn!(product_id = %line.id, error = %rejected, "Quantity input rejected");
            }
        }
        if let Some(second) = lines.get(1) {
            draft.set_quantity(second.id.clone(), 1u32.into()).await?;
        }

        let total = draft.recompute_total().await?;
        info!(total = %total, "Total recomputed");

        let blockers = draft.blockers().await?;
        if !blockers.is_empty() {
            warn!(?blockers, "Draft not ready");
        }

        let snapshot = draft.snapshot().await?;
        if let Some(client) = &snapshot.client {
            match order_composer::composer::build_payload(&snapshot) {
                Ok(payload) => match serde_json::to_string_pretty(&payload) {
                    Ok(json) => info!(client = %client.name, "Submitting payload:\n{}", json),
                    Err(e) => warn!(error = %e, "Payload could not be rendered"),
                },
                Err(e) => warn!(error = %e, "Payload could not be built"),
            }
        }

        draft.submit().await
    }
    .instrument(span)
    .await;

    match order_result {
        Ok(order_id) => {
            info!(order_id = %order_id, "Order submitted successfully");
            let status = system
                .order_book
                .change_status(order_id.clone(), OrderStatus::Delivered)
                .await
                .map_err(|e| e.to_string())?;
            info!(order_id = %order_id, status = %status, "Order status changed");
        }
        Err(e) => error!(error = %e, "Order submission failed"),
    }

    draft.abandon().await.map_err(|e| e.to_string())?;

    // Shutdown system gracefully
    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
