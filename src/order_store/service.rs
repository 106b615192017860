use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, instrument};

use crate::clients::OrderBook;
use crate::composer::{OrderDraft, ProductLine, QuantityError, QuantityInput, SubmitBlocker};
use crate::domain::{ClientRef, Money, Product};

use super::error::DraftError;
use super::store::OrderStore;

pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Macro for clean error response handling
macro_rules! send_error {
    ($respond_to:expr, $error:expr) => {{
        let _ = $respond_to.send(Err($error));
        return;
    }};
}

/// Requests understood by a [`DraftService`].
#[derive(Debug)]
pub enum DraftRequest {
    SelectClient {
        client: ClientRef,
        respond_to: ServiceResponse<(), DraftError>,
    },
    SelectProducts {
        products: Vec<Product>,
        respond_to: ServiceResponse<Vec<ProductLine>, DraftError>,
    },
    SetQuantity {
        product_id: String,
        quantity: QuantityInput,
        respond_to: ServiceResponse<Option<QuantityError>, DraftError>,
    },
    RecomputeTotal {
        respond_to: ServiceResponse<Money, DraftError>,
    },
    Snapshot {
        respond_to: ServiceResponse<OrderDraft, DraftError>,
    },
    Blockers {
        respond_to: ServiceResponse<Vec<SubmitBlocker>, DraftError>,
    },
    Submit {
        respond_to: ServiceResponse<String, DraftError>,
    },
    Shutdown,
}

/// Actor owning one order-in-progress.
///
/// Requests are handled one at a time, so the draft never sees two
/// mutations interleave. A submission is awaited inside its handler: no
/// other request touches the draft until the order book has answered.
pub struct DraftService {
    receiver: mpsc::Receiver<DraftRequest>,
    store: OrderStore,
    order_book: OrderBook,
}

impl DraftService {
    pub fn new(buffer_size: usize, order_book: OrderBook) -> (Self, DraftClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            store: OrderStore::new(),
            order_book,
        };
        (service, DraftClient::new(sender))
    }

    #[instrument(name = "draft_service", skip(self))]
    pub async fn run(mut self) {
        info!("DraftService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                DraftRequest::SelectClient { client, respond_to } => {
                    self.handle_select_client(client, respond_to);
                }
                DraftRequest::SelectProducts {
                    products,
                    respond_to,
                } => {
                    self.handle_select_products(products, respond_to);
                }
                DraftRequest::SetQuantity {
                    product_id,
                    quantity,
                    respond_to,
                } => {
                    self.handle_set_quantity(product_id, quantity, respond_to);
                }
                DraftRequest::RecomputeTotal { respond_to } => {
                    let total = self.store.recompute_total();
                    debug!(total = %total, "Total recomputed");
                    let _ = respond_to.send(Ok(total));
                }
                DraftRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.draft().clone()));
                }
                DraftRequest::Blockers { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.blockers()));
                }
                DraftRequest::Submit { respond_to } => {
                    self.handle_submit(respond_to).await;
                }
                DraftRequest::Shutdown => {
                    info!("DraftService shutting down, draft abandoned");
                    break;
                }
            }
        }

        info!("DraftService stopped");
    }

    #[instrument(fields(client_id = %client.id), skip(self, client, respond_to))]
    fn handle_select_client(&mut self, client: ClientRef, respond_to: ServiceResponse<(), DraftError>) {
        self.store.select_client(client);
        info!("Client selected");
        let _ = respond_to.send(Ok(()));
    }

    #[instrument(fields(selected = products.len()), skip(self, products, respond_to))]
    fn handle_select_products(
        &mut self,
        products: Vec<Product>,
        respond_to: ServiceResponse<Vec<ProductLine>, DraftError>,
    ) {
        self.store.select_products(products);
        info!(line_count = self.store.products().len(), "Products selected");
        let _ = respond_to.send(Ok(self.store.products().to_vec()));
    }

    #[instrument(fields(product_id = %product_id, quantity = ?quantity), skip(self, product_id, quantity, respond_to))]
    fn handle_set_quantity(
        &mut self,
        product_id: String,
        quantity: QuantityInput,
        respond_to: ServiceResponse<Option<QuantityError>, DraftError>,
    ) {
        let rejected = self.store.set_quantity(product_id, quantity);
        debug!(rejected = rejected.is_some(), "Quantity updated");
        let _ = respond_to.send(Ok(rejected));
    }

    /// Validates the draft, hands the payload to the order book and discards
    /// the draft once the order exists. A failed call leaves the draft as is.
    #[instrument(skip(self, respond_to))]
    async fn handle_submit(&mut self, respond_to: ServiceResponse<String, DraftError>) {
        info!("Processing submit request");

        let payload = match self.store.payload() {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "Submission blocked");
                send_error!(respond_to, e.into());
            }
        };

        match self.order_book.create_order(payload).await {
            Ok(order_id) => {
                info!(order_id = %order_id, "Order submitted");
                self.store.clear();
                let _ = respond_to.send(Ok(order_id));
            }
            Err(e) => {
                error!(error = %e, "Order creation failed, draft kept");
                send_error!(respond_to, e.into());
            }
        }
    }
}

// =============================================================================
// DRAFT CLIENT
// =============================================================================

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, DraftError> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| DraftError::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| DraftError::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle to a [`DraftService`]: the dispatch contract offered to a UI layer.
#[derive(Clone)]
pub struct DraftClient {
    sender: mpsc::Sender<DraftRequest>,
}

impl DraftClient {
    pub fn new(sender: mpsc::Sender<DraftRequest>) -> Self {
        Self { sender }
    }

    pub async fn can_submit(&self) -> Result<bool, DraftError> {
        Ok(self.blockers().await?.is_empty())
    }

    /// Leaves the order-entry flow. The draft is dropped with the service.
    #[instrument(skip(self))]
    pub async fn abandon(&self) -> Result<(), DraftError> {
        debug!("Sending shutdown request");
        self.sender
            .send(DraftRequest::Shutdown)
            .await
            .map_err(|_| DraftError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(DraftClient => fn select_client(client: ClientRef) -> () as DraftRequest::SelectClient);
client_method!(DraftClient => fn select_products(products: Vec<Product>) -> Vec<ProductLine> as DraftRequest::SelectProducts);
client_method!(DraftClient => fn set_quantity(product_id: String, quantity: QuantityInput) -> Option<QuantityError> as DraftRequest::SetQuantity);
client_method!(DraftClient => fn recompute_total() -> Money as DraftRequest::RecomputeTotal);
client_method!(DraftClient => fn snapshot() -> OrderDraft as DraftRequest::Snapshot);
client_method!(DraftClient => fn blockers() -> Vec<SubmitBlocker> as DraftRequest::Blockers);
client_method!(DraftClient => fn submit() -> String as DraftRequest::Submit);
