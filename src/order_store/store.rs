use tracing::info;

use crate::composer::{
    self, compute_total, reduce, OrderAction, OrderDraft, ProductLine, QuantityError,
    QuantityInput, SubmissionError, SubmitBlocker,
};
use crate::domain::{ClientRef, Money, OrderPayload, Product};

/// Owner of the single order-in-progress.
///
/// Every mutation goes through [`OrderStore::dispatch`]; the named
/// dispatchers are shorthands for it.
#[derive(Debug, Clone, Default)]
pub struct OrderStore {
    draft: OrderDraft,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn client(&self) -> Option<&ClientRef> {
        self.draft.client.as_ref()
    }

    pub fn products(&self) -> &[ProductLine] {
        &self.draft.products
    }

    pub fn total(&self) -> Money {
        self.draft.total
    }

    pub fn draft(&self) -> &OrderDraft {
        &self.draft
    }

    /// Applies `action` and returns the quantity input it had to correct, if any.
    pub fn dispatch(&mut self, action: OrderAction) -> Option<QuantityError> {
        let reduction = reduce(std::mem::take(&mut self.draft), action);
        self.draft = reduction.draft;
        reduction.rejected
    }

    pub fn select_client(&mut self, client: ClientRef) {
        self.dispatch(OrderAction::SelectClient(client));
    }

    pub fn select_products(&mut self, selection: Vec<Product>) {
        self.dispatch(OrderAction::SelectProducts(selection));
    }

    pub fn set_quantity(
        &mut self,
        product_id: impl Into<String>,
        quantity: impl Into<QuantityInput>,
    ) -> Option<QuantityError> {
        self.dispatch(OrderAction::SetQuantity {
            product_id: product_id.into(),
            quantity: quantity.into(),
        })
    }

    pub fn recompute_total(&mut self) -> Money {
        self.dispatch(OrderAction::RecomputeTotal);
        self.draft.total
    }

    /// True while a quantity or selection change has not been followed by a recompute.
    pub fn is_total_stale(&self) -> bool {
        compute_total(&self.draft.products) != self.draft.total
    }

    pub fn blockers(&self) -> Vec<SubmitBlocker> {
        composer::submission_blockers(&self.draft)
    }

    pub fn can_submit(&self) -> bool {
        composer::can_submit(&self.draft)
    }

    /// Validated payload for the order creation call.
    pub fn payload(&self) -> Result<OrderPayload, SubmissionError> {
        composer::validate(&self.draft)?;
        composer::build_payload(&self.draft)
    }

    /// Discards the draft, e.g. after a successful submission.
    pub fn clear(&mut self) {
        info!("Order draft discarded");
        self.draft = OrderDraft::default();
    }
}
