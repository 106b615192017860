use crate::domain::Money;

/// Custom actions for Product entities.
///
/// These actions represent stock operations performed on a catalog product
/// beyond standard CRUD operations.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Returns the current stock level without modifying it.
    CheckStock,
    /// Takes a quantity out of the available stock at the price the order
    /// was composed with. Stock is left untouched when the requested amount
    /// exceeds it or the catalog price has moved since.
    ReserveStock { quantity: u32, unit_price: Money },
    /// Puts a previously reserved quantity back.
    ReleaseStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq)]
pub enum ProductActionResult {
    /// Current stock level
    StockLevel(u32),
    /// Stock left after the reservation
    Reserved(u32),
    /// The reservation did not fit into the available stock
    Shortfall { requested: u32, available: u32 },
    /// The catalog price differs from the one quoted in the reservation
    PriceChanged { quoted: Money, current: Money },
    /// Stock after the release
    Released(u32),
}
