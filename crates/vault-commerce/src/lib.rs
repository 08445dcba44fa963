//! Storefront domain types and logic for TechVault.
//!
//! This crate provides the core of a storefront session:
//!
//! - **Catalog**: products and in-memory lookup/filtering
//! - **Cart**: the session cart store with durable persistence and
//!   order-total calculation
//! - **Checkout**: multi-step checkout flow, customer/payment validation,
//!   orders
//!
//! # Example
//!
//! ```
//! use vault_commerce::prelude::*;
//! use vault_kv::MemoryStore;
//!
//! let mut product = Product::new(1u64, "Wireless Headphones", Money::from_dollars(49.99));
//! product.stock_count = 10;
//!
//! // Open a cart and add items
//! let mut cart = CartStore::open(KvCartStorage::new(MemoryStore::new()));
//! cart.add_item(&product, 2);
//!
//! // Derive totals for checkout
//! let totals = calculate_totals(
//!     cart.items(),
//!     ShippingMethod::Standard,
//!     &PricingRules::default(),
//! );
//! assert_eq!(totals.subtotal, Money::from_dollars(99.98));
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;

pub use error::CommerceError;
pub use ids::{OrderId, ProductId};
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{OrderId, ProductId};
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{Catalog, CategorySummary, Product, ProductFilter, SortOption};

    // Cart
    pub use crate::cart::{
        calculate_totals, CartEvent, CartStorage, CartStore, KvCartStorage, LineItem,
        OrderTotals, PricingRules, ShippingMethod, SubscriberId, CART_STORAGE_KEY,
    };

    // Checkout
    pub use crate::checkout::{
        CheckoutFlow, CheckoutStep, CustomerInfo, Order, OrderBook, OrderDraft, OrderLine,
        OrderStatus, PaymentCard, PaymentSummary, ShippingAddress,
    };
}
