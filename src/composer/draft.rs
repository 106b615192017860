use serde::{Deserialize, Serialize};

use crate::domain::{ClientRef, Money, Product};

/// One product of the order being composed.
///
/// Everything except `quantity` is a snapshot of the catalog record taken
/// when the product was selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductLine {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub stock: u32,
    pub quantity: u32,
}

impl ProductLine {
    /// A freshly selected line. Quantity starts at 0 until the operator edits it.
    pub fn from_product(product: &Product) -> Self {
        Self::with_quantity(product, 0)
    }

    pub fn with_quantity(product: &Product, quantity: u32) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            stock: product.stock,
            quantity,
        }
    }

    pub fn subtotal(&self) -> Money {
        self.price.times(self.quantity)
    }
}

/// The order-in-progress.
///
/// `total` is a cached value. It is only written by an explicit recompute
/// and may lag behind `products` between a quantity edit and that recompute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub client: Option<ClientRef>,
    pub products: Vec<ProductLine>,
    pub total: Money,
}

impl OrderDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&self, product_id: &str) -> Option<&ProductLine> {
        self.products.iter().find(|line| line.id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.client.is_none() && self.products.is_empty()
    }
}
