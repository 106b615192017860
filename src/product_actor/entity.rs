use crate::actor_framework::Entity;
use crate::domain::{Product, ProductCreate, ProductUpdate};

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;

impl Entity for Product {
    type Id = String;
    type CreateParams = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;

    /// Creates a new Product from creation parameters.
    ///
    /// # Errors
    /// Rejects products without a name.
    fn from_create_params(id: String, params: ProductCreate) -> Result<Self, String> {
        if params.name.trim().is_empty() {
            return Err("Product name required".to_string());
        }
        Ok(Self {
            id,
            name: params.name,
            price: params.price,
            stock: params.stock,
        })
    }

    /// Updates the product's name, price and/or stock.
    ///
    /// # Errors
    /// A blank name is rejected and nothing is changed.
    fn on_update(&mut self, update: ProductUpdate) -> Result<(), String> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err("Product name required".to_string());
            }
            self.name = name;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(stock) = update.stock {
            self.stock = stock;
        }
        Ok(())
    }

    /// Handles stock actions.
    ///
    /// Reserving more than the available stock answers with a
    /// [`ProductActionResult::Shortfall`], and reserving at a price other
    /// than the current one with [`ProductActionResult::PriceChanged`].
    /// Stock is unchanged in both cases.
    ///
    /// # Errors
    /// Reserving zero items is rejected.
    fn handle_action(&mut self, action: ProductAction) -> Result<ProductActionResult, String> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::StockLevel(self.stock)),
            ProductAction::ReserveStock {
                quantity: amount,
                unit_price,
            } => {
                if amount == 0 {
                    return Err(ProductError::InvalidQuantity(amount).to_string());
                }
                if unit_price != self.price {
                    return Ok(ProductActionResult::PriceChanged {
                        quoted: unit_price,
                        current: self.price,
                    });
                }
                if self.stock >= amount {
                    self.stock -= amount;
                    Ok(ProductActionResult::Reserved(self.stock))
                } else {
                    Ok(ProductActionResult::Shortfall {
                        requested: amount,
                        available: self.stock,
                    })
                }
            }
            ProductAction::ReleaseStock(amount) => {
                self.stock = self.stock.saturating_add(amount);
                Ok(ProductActionResult::Released(self.stock))
            }
        }
    }
}
