use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::domain::{Money, Product, ProductCreate, ProductUpdate};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};

/// Handle to the Product actor.
#[derive(Clone)]
pub struct ProductCatalog {
    inner: ResourceClient<Product>,
}

impl_basic_client!(ProductCatalog, Product, ProductError, product);

impl ProductCatalog {
    #[instrument(skip(self, product), fields(product_name = %product.name))]
    pub async fn create_product(&self, product: Product) -> Result<String, ProductError> {
        debug!("Sending request");
        let params = ProductCreate {
            name: product.name,
            price: product.price,
            stock: product.stock,
        };
        self.inner.create(params).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: String,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(ProductError::from)
    }

    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: String) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::CheckStock).await {
            Ok(ProductActionResult::StockLevel(level)) => Ok(level),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(e.into()),
        }
    }

    /// Takes `quantity` out of stock, provided the product still sells at
    /// `unit_price`, and returns what is left.
    #[instrument(skip(self))]
    pub async fn reserve_stock(
        &self,
        id: String,
        quantity: u32,
        unit_price: Money,
    ) -> Result<u32, ProductError> {
        debug!("Sending request");
        let action = ProductAction::ReserveStock {
            quantity,
            unit_price,
        };
        match self.inner.perform_action(id, action).await {
            Ok(ProductActionResult::Reserved(left)) => Ok(left),
            Ok(ProductActionResult::PriceChanged { quoted, current }) => {
                Err(ProductError::PriceChanged { quoted, current })
            }
            Ok(ProductActionResult::Shortfall {
                requested,
                available,
            }) => Err(ProductError::InsufficientStock {
                requested,
                available,
            }),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self))]
    pub async fn release_stock(&self, id: String, quantity: u32) -> Result<u32, ProductError> {
        debug!("Sending request");
        match self.inner.perform_action(id, ProductAction::ReleaseStock(quantity)).await {
            Ok(ProductActionResult::Released(stock)) => Ok(stock),
            Ok(other) => Err(unexpected(other)),
            Err(e) => Err(e.into()),
        }
    }
}

fn unexpected(result: ProductActionResult) -> ProductError {
    ProductError::ActorCommunicationError(format!("Unexpected result: {:?}", result))
}
