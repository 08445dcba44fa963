//! Order types and the in-memory order registry.

use crate::cart::{LineItem, OrderTotals, ShippingMethod};
use crate::checkout::{CustomerInfo, PaymentSummary};
use crate::error::CommerceError;
use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Days between order placement and the delivery estimate.
const ESTIMATED_DELIVERY_DAYS: i64 = 5;

/// Order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    /// Order placed and being prepared.
    #[default]
    Processing,
    /// Order shipped.
    Shipped,
    /// Order delivered.
    Delivered,
    /// Order cancelled.
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// Check if the order is in a terminal state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }
}

/// A line on a submitted order: the slice of a cart line item that the
/// order record keeps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderLine {
    /// Product ordered.
    pub product_id: ProductId,
    /// Product name at time of order.
    pub name: String,
    /// Quantity ordered.
    pub quantity: i64,
    /// Unit price at time of order.
    pub unit_price: Money,
}

impl From<&LineItem> for OrderLine {
    fn from(item: &LineItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.product.name.clone(),
            quantity: item.quantity,
            unit_price: item.product.price,
        }
    }
}

/// Everything checkout submits to place an order.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Lines snapshotted from the cart.
    pub lines: Vec<OrderLine>,
    /// Totals as shown to the shopper.
    pub totals: OrderTotals,
    /// Delivery option.
    pub shipping_method: ShippingMethod,
    /// Who placed the order.
    pub customer: CustomerInfo,
    /// Masked payment details.
    pub payment: PaymentSummary,
}

impl OrderDraft {
    /// Build a draft from cart items and the amounts derived from them.
    pub fn from_items(
        items: &[LineItem],
        totals: OrderTotals,
        shipping_method: ShippingMethod,
        customer: CustomerInfo,
        payment: PaymentSummary,
    ) -> Self {
        Self {
            lines: items.iter().map(OrderLine::from).collect(),
            totals,
            shipping_method,
            customer,
            payment,
        }
    }
}

/// A submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Ordered lines.
    pub lines: Vec<OrderLine>,
    /// Amounts charged.
    pub totals: OrderTotals,
    /// Delivery option.
    pub shipping_method: ShippingMethod,
    /// Who placed the order.
    pub customer: CustomerInfo,
    /// Masked payment details.
    pub payment: PaymentSummary,
    /// Current status.
    pub status: OrderStatus,
    /// Unix timestamp of placement.
    pub created_at: i64,
    /// Unix timestamp of the last status change.
    pub updated_at: Option<i64>,
    /// Unix timestamp of the delivery estimate.
    pub estimated_delivery: i64,
}

impl Order {
    /// Get total item count.
    pub fn item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }
}

/// In-memory order registry.
///
/// Assigns sequential order ids and tracks status changes; nothing is
/// persisted beyond the process.
#[derive(Debug, Clone)]
pub struct OrderBook {
    orders: Vec<Order>,
    next_id: u64,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    /// Create an empty order book.
    pub fn new() -> Self {
        Self {
            orders: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of orders placed.
    pub fn len(&self) -> usize {
        self.orders.len()
    }

    /// Check if no orders have been placed.
    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Place an order from a draft, assigning the next id.
    pub fn create(&mut self, draft: OrderDraft) -> Order {
        let now = current_timestamp();
        let order = Order {
            id: OrderId::new(format!("ORD-{}", self.next_id)),
            lines: draft.lines,
            totals: draft.totals,
            shipping_method: draft.shipping_method,
            customer: draft.customer,
            payment: draft.payment,
            status: OrderStatus::Processing,
            created_at: now,
            updated_at: None,
            estimated_delivery: now + ESTIMATED_DELIVERY_DAYS * 24 * 60 * 60,
        };
        self.next_id += 1;
        self.orders.push(order.clone());
        order
    }

    /// Look up an order by id.
    pub fn get(&self, id: &OrderId) -> Result<&Order, CommerceError> {
        self.orders
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))
    }

    /// Update an order's status, stamping `updated_at`.
    pub fn set_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<(), CommerceError> {
        let order = self
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| CommerceError::OrderNotFound(id.to_string()))?;

        order.status = status;
        order.updated_at = Some(current_timestamp());
        Ok(())
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
