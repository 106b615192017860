use crate::actor_framework::FrameworkError;
use crate::client_actor::ClientError;
use crate::clients::{ClientDirectory, OrderBook, ProductCatalog};
use crate::composer::SubmitBlocker;
use crate::domain::{
    Client, ClientRef, ClientUpdate, Money, Order, OrderPayload, OrderStatus, PayloadLine, Product,
    ProductUpdate,
};
use crate::mock_framework::{create_mock_client, expect_action, expect_create, expect_get};
use crate::order_actor::OrderError;
use crate::order_store::{DraftError, DraftService};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::{OrderSystem, SystemConfig};

fn registered_client(id: &str) -> Client {
    let mut client = Client::new("Ann", "Smith", "Acme", "ann@example.com");
    client.id = id.to_string();
    client
}

fn payload_line(id: &str, price: u64, quantity: u32) -> PayloadLine {
    PayloadLine {
        id: id.to_string(),
        name: format!("Product {}", id),
        price: Money::from_units(price),
        quantity,
    }
}

#[tokio::test]
async fn test_order_creation_flow() {
    // 1. Setup Mocks
    let (client_inner, mut client_rx) = create_mock_client::<Client>(10);
    let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
    let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

    let order_book = OrderBook::new(
        order_inner,
        ClientDirectory::new(client_inner),
        ProductCatalog::new(product_inner),
    );

    // 2. Execute Order Creation in background
    let order_task = tokio::spawn(async move {
        let payload = OrderPayload {
            client_id: "client_1".to_string(),
            total: Money::from_units(13),
            lines: vec![payload_line("product_1", 5, 2), payload_line("product_2", 3, 1)],
        };
        order_book.create_order(payload).await
    });

    // 3. Verify Interactions
    let (client_id, responder) = expect_get(&mut client_rx).await.expect("Expected Client Get");
    assert_eq!(client_id, "client_1");
    responder.send(Ok(Some(registered_client("client_1")))).unwrap();

    for (expected_id, expected_qty, expected_price) in [("product_1", 2, 5), ("product_2", 1, 3)] {
        let (product_id, action, responder) =
            expect_action(&mut product_rx).await.expect("Expected Product Action");
        assert_eq!(product_id, expected_id);
        assert_eq!(
            action,
            ProductAction::ReserveStock {
                quantity: expected_qty,
                unit_price: Money::from_units(expected_price),
            }
        );
        responder.send(Ok(ProductActionResult::Reserved(10))).unwrap();
    }

    let (params, responder) = expect_create(&mut order_rx).await.expect("Expected Order Create");
    assert_eq!(params.client_id, "client_1");
    assert_eq!(params.lines.len(), 2);
    assert_eq!(params.total, Money::from_units(13));
    responder.send(Ok("order_1".to_string())).unwrap();

    // 4. Verify Result
    let result = order_task.await.unwrap();
    assert_eq!(result, Ok("order_1".to_string()));
}

#[tokio::test]
async fn test_failed_reservation_releases_earlier_lines() {
    let (client_inner, mut client_rx) = create_mock_client::<Client>(10);
    let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
    let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

    let order_book = OrderBook::new(
        order_inner,
        ClientDirectory::new(client_inner),
        ProductCatalog::new(product_inner),
    );

    let order_task = tokio::spawn(async move {
        let payload = OrderPayload {
            client_id: "client_1".to_string(),
            total: Money::from_units(25),
            lines: vec![payload_line("product_1", 5, 2), payload_line("product_2", 3, 5)],
        };
        order_book.create_order(payload).await
    });

    let (_, responder) = expect_get(&mut client_rx).await.expect("Expected Client Get");
    responder.send(Ok(Some(registered_client("client_1")))).unwrap();

    let (_, _, responder) = expect_action(&mut product_rx).await.expect("Expected first reservation");
    responder.send(Ok(ProductActionResult::Reserved(8))).unwrap();

    let (_, _, responder) = expect_action(&mut product_rx).await.expect("Expected second reservation");
    responder
        .send(Ok(ProductActionResult::Shortfall {
            requested: 5,
            available: 1,
        }))
        .unwrap();

    let (product_id, action, responder) =
        expect_action(&mut product_rx).await.expect("Expected release");
    assert_eq!(product_id, "product_1");
    assert_eq!(action, ProductAction::ReleaseStock(2));
    responder.send(Ok(ProductActionResult::Released(10))).unwrap();

    let result = order_task.await.unwrap();
    assert!(matches!(result, Err(OrderError::InsufficientStock(_))));
    assert!(order_rx.try_recv().is_err(), "Order must not be created");
}

#[tokio::test]
async fn test_repriced_line_releases_earlier_lines() {
    let (client_inner, mut client_rx) = create_mock_client::<Client>(10);
    let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
    let (order_inner, mut order_rx) = create_mock_client::<Order>(10);

    let order_book = OrderBook::new(
        order_inner,
        ClientDirectory::new(client_inner),
        ProductCatalog::new(product_inner),
    );

    let order_task = tokio::spawn(async move {
        let payload = OrderPayload {
            client_id: "client_1".to_string(),
            total: Money::from_units(13),
            lines: vec![payload_line("product_1", 5, 2), payload_line("product_2", 3, 1)],
        };
        order_book.create_order(payload).await
    });

    let (_, responder) = expect_get(&mut client_rx).await.expect("Expected Client Get");
    responder.send(Ok(Some(registered_client("client_1")))).unwrap();

    let (_, _, responder) = expect_action(&mut product_rx).await.expect("Expected first reservation");
    responder.send(Ok(ProductActionResult::Reserved(8))).unwrap();

    let (product_id, _, responder) =
        expect_action(&mut product_rx).await.expect("Expected second reservation");
    assert_eq!(product_id, "product_2");
    responder
        .send(Ok(ProductActionResult::PriceChanged {
            quoted: Money::from_units(3),
            current: Money::from_units(4),
        }))
        .unwrap();

    let (product_id, action, responder) =
        expect_action(&mut product_rx).await.expect("Expected release");
    assert_eq!(product_id, "product_1");
    assert_eq!(action, ProductAction::ReleaseStock(2));
    responder.send(Ok(ProductActionResult::Released(10))).unwrap();

    let result = order_task.await.unwrap();
    assert!(matches!(result, Err(OrderError::PriceChanged(_))));
    assert!(order_rx.try_recv().is_err(), "Order must not be created");
}

#[tokio::test]
async fn test_unknown_client_is_rejected_before_stock() {
    let (client_inner, mut client_rx) = create_mock_client::<Client>(10);
    let (product_inner, mut product_rx) = create_mock_client::<Product>(10);
    let (order_inner, _order_rx) = create_mock_client::<Order>(10);

    let order_book = OrderBook::new(
        order_inner,
        ClientDirectory::new(client_inner),
        ProductCatalog::new(product_inner),
    );

    let order_task = tokio::spawn(async move {
        let payload = OrderPayload {
            client_id: "ghost".to_string(),
            total: Money::from_units(5),
            lines: vec![payload_line("product_1", 5, 1)],
        };
        order_book.create_order(payload).await
    });

    let (_, responder) = expect_get(&mut client_rx).await.expect("Expected Client Get");
    responder.send(Ok(None)).unwrap();

    assert_eq!(
        order_task.await.unwrap(),
        Err(OrderError::InvalidClient("ghost".to_string()))
    );
    assert!(product_rx.try_recv().is_err());
}

#[tokio::test]
async fn test_draft_submission_rejected_keeps_draft() {
    let (client_inner, mut client_rx) = create_mock_client::<Client>(10);
    let (product_inner, _product_rx) = create_mock_client::<Product>(10);
    let (order_inner, _order_rx) = create_mock_client::<Order>(10);
    let order_book = OrderBook::new(
        order_inner,
        ClientDirectory::new(client_inner),
        ProductCatalog::new(product_inner),
    );

    let (service, draft) = DraftService::new(10, order_book);
    tokio::spawn(service.run());

    draft.select_client(ClientRef::new("client_9", "Gone")).await.unwrap();
    draft
        .select_products(vec![Product::new("product_1", "Widget", Money::from_units(5), 3)])
        .await
        .unwrap();
    draft.set_quantity("product_1".to_string(), 1u32.into()).await.unwrap();
    draft.recompute_total().await.unwrap();
    let before = draft.snapshot().await.unwrap();

    let submit = tokio::spawn({
        let draft = draft.clone();
        async move { draft.submit().await }
    });

    let (_, responder) = expect_get(&mut client_rx).await.expect("Expected Client Get");
    responder.send(Err(FrameworkError::ActorClosed)).unwrap();

    let result = submit.await.unwrap();
    assert!(matches!(
        result,
        Err(DraftError::Rejected(OrderError::InvalidClient(_)))
    ));
    assert_eq!(draft.snapshot().await.unwrap(), before);
}

async fn seeded_system() -> (OrderSystem, Vec<Product>, ClientRef) {
    let system = OrderSystem::new(SystemConfig::default());

    let client_id = system
        .client_directory
        .create_client(Client::new("Ann", "Smith", "Acme", "ann@example.com"))
        .await
        .unwrap();

    for (name, price, stock) in [("Widget", 5, 10), ("Gadget", 3, 10), ("Gizmo", 8, 1)] {
        system
            .product_catalog
            .create_product(Product::new("", name, Money::from_units(price), stock))
            .await
            .unwrap();
    }

    let products = system.product_catalog.list_products().await.unwrap();
    let client = system
        .client_directory
        .get_client(client_id)
        .await
        .unwrap()
        .unwrap()
        .to_ref();
    (system, products, client)
}

#[tokio::test]
async fn test_end_to_end_wizard() {
    let (mut system, products, client) = seeded_system().await;
    let (p1, p2, p3) = (products[0].clone(), products[1].clone(), products[2].clone());
    let draft = system.open_draft();

    draft.select_client(client.clone()).await.unwrap();
    draft.select_products(vec![p1.clone(), p2.clone()]).await.unwrap();
    draft.set_quantity(p1.id.clone(), 2u32.into()).await.unwrap();
    draft.set_quantity(p2.id.clone(), 1u32.into()).await.unwrap();
    assert_eq!(draft.recompute_total().await.unwrap(), Money::from_units(13));
    assert!(draft.can_submit().await.unwrap());

    let lines = draft.select_products(vec![p1.clone(), p3.clone()]).await.unwrap();
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(lines[1].quantity, 0);
    assert!(!draft.can_submit().await.unwrap());
    assert_eq!(
        draft.blockers().await.unwrap(),
        vec![
            SubmitBlocker::MissingQuantity { product_id: p3.id.clone() },
            SubmitBlocker::StaleTotal,
        ]
    );

    // Gizmo has a single item in stock: the order book refuses, the draft stays.
    draft.set_quantity(p3.id.clone(), 2u32.into()).await.unwrap();
    draft.recompute_total().await.unwrap();
    let err = draft.submit().await.unwrap_err();
    assert!(matches!(err, DraftError::Rejected(OrderError::InsufficientStock(_))));
    assert_eq!(system.product_catalog.check_stock(p1.id.clone()).await.unwrap(), 10);
    assert_eq!(draft.snapshot().await.unwrap().line(&p3.id).map(|l| l.quantity), Some(2));

    draft.set_quantity(p3.id.clone(), 1u32.into()).await.unwrap();
    assert_eq!(draft.recompute_total().await.unwrap(), Money::from_units(18));
    let order_id = draft.submit().await.unwrap();

    assert!(draft.snapshot().await.unwrap().is_empty());
    assert_eq!(system.product_catalog.check_stock(p1.id.clone()).await.unwrap(), 8);
    assert_eq!(system.product_catalog.check_stock(p3.id.clone()).await.unwrap(), 0);

    let order = system.order_book.get_order(order_id.clone()).await.unwrap().unwrap();
    assert_eq!(order.client_id, client.id);
    assert_eq!(order.total, Money::from_units(18));
    assert_eq!(order.status, OrderStatus::Pending);

    assert_eq!(
        system
            .order_book
            .change_status(order_id.clone(), OrderStatus::Delivered)
            .await
            .unwrap(),
        OrderStatus::Delivered
    );
    assert_eq!(system.order_book.list_orders().await.unwrap().len(), 1);
    system.order_book.delete_order(order_id).await.unwrap();
    assert!(system.order_book.list_orders().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_changes_reach_the_next_selection() {
    let (mut system, products, client) = seeded_system().await;
    let widget = products[0].clone();

    let draft = system.open_draft();
    draft.select_client(client).await.unwrap();
    draft.select_products(vec![widget.clone()]).await.unwrap();
    draft.set_quantity(widget.id.clone(), "2".into()).await.unwrap();
    assert_eq!(draft.recompute_total().await.unwrap(), Money::from_units(10));

    let updated = system
        .product_catalog
        .update_product(
            widget.id.clone(),
            ProductUpdate {
                name: Some("Widget Pro".to_string()),
                price: Some(Money::from_cents(650)),
                stock: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Widget Pro");
    assert_eq!(updated.price, Money::from_cents(650));
    assert_eq!(updated.stock, 10);

    // The draft still quotes the old price: nothing is booked.
    let err = draft.submit().await.unwrap_err();
    assert!(matches!(err, DraftError::Rejected(OrderError::PriceChanged(_))));
    assert_eq!(system.product_catalog.check_stock(widget.id.clone()).await.unwrap(), 10);
    assert!(system.order_book.list_orders().await.unwrap().is_empty());

    system.product_catalog.delete_product(products[1].id.clone()).await.unwrap();
    assert_eq!(
        system
            .product_catalog
            .reserve_stock(products[1].id.clone(), 1, products[1].price)
            .await,
        Err(ProductError::NotFound(products[1].id.clone()))
    );

    // A fresh catalog read picks up the new price; the quantity survives.
    let fresh = system.product_catalog.list_products().await.unwrap();
    assert_eq!(fresh.len(), 2);
    let lines = draft.select_products(vec![fresh[0].clone()]).await.unwrap();
    assert_eq!(lines[0].name, "Widget Pro");
    assert_eq!(lines[0].price, Money::from_cents(650));
    assert_eq!(lines[0].quantity, 2);
    assert_eq!(draft.recompute_total().await.unwrap(), Money::from_cents(1300));

    let order_id = draft.submit().await.unwrap();
    let order = system.order_book.get_order(order_id).await.unwrap().unwrap();
    assert_eq!(order.total, Money::from_cents(1300));
    assert_eq!(system.product_catalog.check_stock(widget.id.clone()).await.unwrap(), 8);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_edit() {
    let (system, _, client) = seeded_system().await;

    let edited = system
        .client_directory
        .update_client(
            client.id.clone(),
            ClientUpdate {
                last_name: Some("Jones".to_string()),
                phone: Some("555-0199".to_string()),
                ..ClientUpdate::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.display_name(), "Ann Jones");
    assert_eq!(edited.phone, "555-0199");
    assert_eq!(edited.email, "ann@example.com");

    let stored = system.client_directory.get_client(client.id.clone()).await.unwrap().unwrap();
    assert_eq!(stored, edited);

    let err = system
        .client_directory
        .update_client(
            client.id.clone(),
            ClientUpdate {
                email: Some("not-an-email".to_string()),
                ..ClientUpdate::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::ValidationError(_)));

    assert_eq!(
        system
            .client_directory
            .update_client("client_404".to_string(), ClientUpdate::default())
            .await,
        Err(ClientError::NotFound("client_404".to_string()))
    );

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reopened_flow_starts_empty() {
    let (mut system, products, client) = seeded_system().await;

    let first = system.open_draft();
    first.select_client(client).await.unwrap();
    first.select_products(products.clone()).await.unwrap();
    first.abandon().await.unwrap();

    let second = system.open_draft();
    assert!(second.snapshot().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}
