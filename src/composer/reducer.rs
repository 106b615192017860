//! State transitions of the order draft.
//!
//! Any action is accepted in any state and only touches its own slice of the
//! draft. The total is written by [`OrderAction::RecomputeTotal`] alone.

use tracing::debug;

use crate::domain::{ClientRef, Product};

use super::quantity::{set_quantity, QuantityError, QuantityInput};
use super::reconcile::reconcile;
use super::total::compute_total;
use super::OrderDraft;

#[derive(Debug, Clone, PartialEq)]
pub enum OrderAction {
    SelectClient(ClientRef),
    SelectProducts(Vec<Product>),
    SetQuantity {
        product_id: String,
        quantity: QuantityInput,
    },
    RecomputeTotal,
}

/// The draft produced by an action, plus any input the reducer had to correct.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub draft: OrderDraft,
    pub rejected: Option<QuantityError>,
}

impl From<OrderDraft> for Reduction {
    fn from(draft: OrderDraft) -> Self {
        Self {
            draft,
            rejected: None,
        }
    }
}

pub fn reduce(mut draft: OrderDraft, action: OrderAction) -> Reduction {
    match action {
        OrderAction::SelectClient(client) => {
            debug!(client_id = %client.id, "Client selected");
            draft.client = Some(client);
            draft.into()
        }
        OrderAction::SelectProducts(selection) => {
            draft.products = reconcile(&draft.products, &selection);
            debug!(line_count = draft.products.len(), "Products selected");
            draft.into()
        }
        OrderAction::SetQuantity {
            product_id,
            quantity,
        } => {
            let update = set_quantity(std::mem::take(&mut draft.products), &product_id, quantity);
            if !update.matched {
                debug!(product_id = %product_id, "Quantity set for a product that is not selected");
            }
            draft.products = update.lines;
            Reduction {
                draft,
                rejected: update.rejected,
            }
        }
        OrderAction::RecomputeTotal => {
            draft.total = compute_total(&draft.products);
            debug!(total = %draft.total, "Total recomputed");
            draft.into()
        }
    }
}
