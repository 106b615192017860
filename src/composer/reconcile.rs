//! Merging a fresh product multi-selection into the lines already held by a draft.

use std::collections::{HashMap, HashSet};

use crate::domain::Product;

use super::ProductLine;

/// Rebuilds the working set of lines from a new selection.
///
/// Each selected product takes its fresh catalog data. If a line with the
/// same id was already present its quantity carries over, otherwise the new
/// line starts at 0. Lines whose product is no longer selected are dropped
/// along with their quantity: a re-selection replaces the working set.
///
/// The result follows the order of `selected`. A product listed twice in
/// `selected` only keeps its first occurrence.
pub fn reconcile(previous: &[ProductLine], selected: &[Product]) -> Vec<ProductLine> {
    let quantities: HashMap<&str, u32> = previous
        .iter()
        .map(|line| (line.id.as_str(), line.quantity))
        .collect();

    let mut seen = HashSet::with_capacity(selected.len());
    selected
        .iter()
        .filter(|product| seen.insert(product.id.as_str()))
        .map(|product| {
            let quantity = quantities.get(product.id.as_str()).copied().unwrap_or(0);
            ProductLine::with_quantity(product, quantity)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Money;

    fn product(id: &str, price: u64) -> Product {
        Product::new(id, format!("Product {}", id), Money::from_units(price), 10)
    }

    fn line(id: &str, price: u64, quantity: u32) -> ProductLine {
        ProductLine::with_quantity(&product(id, price), quantity)
    }

    #[test]
    fn test_first_selection_starts_at_zero() {
        let merged = reconcile(&[], &[product("p1", 5), product("p2", 3)]);
        assert_eq!(merged.len(), 2);
        assert!(merged.iter().all(|line| line.quantity == 0));
    }

    #[test]
    fn test_keeps_quantities_for_products_still_selected() {
        let previous = vec![line("p1", 5, 2), line("p2", 3, 1)];
        let merged = reconcile(&previous, &[product("p1", 5), product("p3", 7)]);

        let ids: Vec<&str> = merged.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p3"]);
        assert_eq!(merged[0].quantity, 2);
        assert_eq!(merged[1].quantity, 0);
    }

    #[test]
    fn test_takes_fresh_catalog_metadata() {
        let previous = vec![line("p1", 5, 4)];
        let mut repriced = product("p1", 6);
        repriced.name = "Renamed".to_string();
        repriced.stock = 1;

        let merged = reconcile(&previous, &[repriced]);
        assert_eq!(merged[0].price, Money::from_units(6));
        assert_eq!(merged[0].name, "Renamed");
        assert_eq!(merged[0].stock, 1);
        assert_eq!(merged[0].quantity, 4);
    }

    #[test]
    fn test_deselected_quantity_is_lost() {
        let previous = vec![line("p1", 5, 2)];
        let without = reconcile(&previous, &[product("p2", 1)]);
        let again = reconcile(&without, &[product("p1", 5), product("p2", 1)]);
        assert_eq!(again[0].quantity, 0);
    }

    #[test]
    fn test_follows_selection_order_and_dedups() {
        let previous = vec![line("p1", 5, 2), line("p2", 3, 1)];
        let merged = reconcile(
            &previous,
            &[product("p2", 3), product("p1", 5), product("p2", 3)],
        );
        let ids: Vec<&str> = merged.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["p2", "p1"]);
        assert_eq!(merged[0].quantity, 1);
        assert_eq!(merged[1].quantity, 2);
    }

    #[test]
    fn test_empty_selection_clears_lines() {
        let previous = vec![line("p1", 5, 2)];
        assert!(reconcile(&previous, &[]).is_empty());
    }
}
