//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// The same type is embedded into a cart line item as a snapshot taken at
/// add time, so later catalog changes never affect items already carted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Brand name.
    pub brand: String,
    /// Category name (e.g., "Laptops").
    pub category: String,
    /// Current unit price.
    pub price: Money,
    /// Previous price, when the product is discounted.
    pub old_price: Option<Money>,
    /// Average review rating, 0.0 to 5.0.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Whether the product is purchasable at all.
    pub in_stock: bool,
    /// Units available; the UI layer clamps cart quantities to this.
    pub stock_count: i64,
    /// Image references.
    pub images: Vec<String>,
    /// Full description.
    pub description: String,
    /// Whether the product is featured on the home page.
    pub featured: bool,
    /// Unix timestamp of creation.
    pub created_at: i64,
}

impl Product {
    /// Create a product with the given identity and price; remaining
    /// fields start empty.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: String::new(),
            category: String::new(),
            price,
            old_price: None,
            rating: 0.0,
            review_count: 0,
            in_stock: true,
            stock_count: 0,
            images: Vec::new(),
            description: String::new(),
            featured: false,
            created_at: current_timestamp(),
        }
    }

    /// Check if the product carries a visible discount.
    pub fn is_discounted(&self) -> bool {
        self.old_price.map(|old| old > self.price).unwrap_or(false)
    }

    /// Discount as a percentage of the old price, if any.
    pub fn discount_percent(&self) -> Option<f64> {
        let old = self.old_price?;
        if old.cents() <= 0 || old <= self.price {
            return None;
        }
        Some((old - self.price).cents() as f64 / old.cents() as f64 * 100.0)
    }

    /// Check if the product can currently be added to a cart.
    pub fn is_available(&self) -> bool {
        self.in_stock && self.stock_count > 0
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
