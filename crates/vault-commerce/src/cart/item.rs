//! Cart line item type.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// One product-and-quantity entry in a cart.
///
/// The product is an owned snapshot taken when the item was first added;
/// it is never re-fetched, so catalog price changes do not retroactively
/// affect carted items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Id of the referenced product.
    pub product_id: ProductId,
    /// Product data snapshotted at add time.
    pub product: Product,
    /// Units of the product in the cart. Always positive.
    pub quantity: i64,
    /// Unix timestamp of first insertion. Never changes afterward, even
    /// when the quantity is updated.
    pub added_at: i64,
}

impl LineItem {
    /// Create a line item snapshotting the given product.
    pub fn new(product: Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            product,
            quantity,
            added_at: current_timestamp(),
        }
    }

    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> Money {
        self.product.price * self.quantity
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_snapshots_product() {
        let product = Product::new(1u64, "USB Hub", Money::from_dollars(24.99));
        let item = LineItem::new(product.clone(), 2);

        assert_eq!(item.product_id, product.id);
        assert_eq!(item.product, product);
        assert_eq!(item.quantity, 2);
        assert!(item.added_at > 0);
    }

    #[test]
    fn test_line_total() {
        let product = Product::new(1u64, "USB Hub", Money::from_dollars(24.99));
        let item = LineItem::new(product, 3);
        assert_eq!(item.line_total(), Money::from_dollars(74.97));
    }

    #[test]
    fn test_serde_round_trip() {
        let product = Product::new(7u64, "Desk Lamp", Money::from_dollars(34.50));
        let item = LineItem::new(product, 1);

        let json = serde_json::to_string(&item).unwrap();
        let back: LineItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
