//! Order total calculation.
//!
//! A pure function of a line-item list and a shipping method: no state,
//! no side effects, identical inputs give identical outputs.

use crate::cart::LineItem;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Shipping pricing tier selected at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingMethod {
    /// 5-7 business days; free above the order threshold.
    #[default]
    Standard,
    /// 2-3 business days; flat fee, never free.
    Express,
    /// Next business day; flat fee, never free.
    NextDay,
}

impl ShippingMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "standard",
            ShippingMethod::Express => "express",
            ShippingMethod::NextDay => "nextday",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ShippingMethod::Standard => "Standard Delivery",
            ShippingMethod::Express => "Express Delivery",
            ShippingMethod::NextDay => "Next-Day Delivery",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(ShippingMethod::Standard),
            "express" => Some(ShippingMethod::Express),
            "nextday" => Some(ShippingMethod::NextDay),
            _ => None,
        }
    }
}

/// Business rules for deriving order totals.
///
/// A value type so callers and tests can construct alternates; the default
/// set is the storefront's production rates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRules {
    /// Tax rate as a percentage of the subtotal.
    pub tax_rate_percent: f64,
    /// Subtotal at or above which standard shipping is free.
    pub free_shipping_threshold: Money,
    /// Flat fee for standard shipping below the threshold.
    pub standard_fee: Money,
    /// Flat fee for express shipping.
    pub express_fee: Money,
    /// Flat fee for next-day shipping.
    pub next_day_fee: Money,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tax_rate_percent: 8.5,
            free_shipping_threshold: Money::from_dollars(100.0),
            standard_fee: Money::from_dollars(9.99),
            express_fee: Money::from_dollars(15.99),
            next_day_fee: Money::from_dollars(24.99),
        }
    }
}

impl PricingRules {
    /// Shipping cost for a method at a given subtotal.
    pub fn shipping_for(&self, method: ShippingMethod, subtotal: Money) -> Money {
        match method {
            ShippingMethod::Standard if subtotal >= self.free_shipping_threshold => Money::zero(),
            ShippingMethod::Standard => self.standard_fee,
            ShippingMethod::Express => self.express_fee,
            ShippingMethod::NextDay => self.next_day_fee,
        }
    }
}

/// The derived subtotal/shipping/tax/total for a set of line items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderTotals {
    /// Sum of unit price times quantity over all items.
    pub subtotal: Money,
    /// Shipping cost under the selected method.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Amount charged: subtotal + shipping + tax.
    pub total: Money,
}

impl OrderTotals {
    /// All-zero totals, as derived from an empty cart.
    pub const fn zero() -> Self {
        Self {
            subtotal: Money::zero(),
            shipping: Money::zero(),
            tax: Money::zero(),
            total: Money::zero(),
        }
    }

    /// Check if standard shipping came out free.
    pub fn has_free_shipping(&self) -> bool {
        self.shipping.is_zero()
    }
}

/// Derive order totals from line items and a shipping method.
///
/// Empty items yield all-zero totals. Tax is rounded half-up at the cent
/// boundary; every other value is exact cents by construction.
pub fn calculate_totals(
    items: &[LineItem],
    method: ShippingMethod,
    rules: &PricingRules,
) -> OrderTotals {
    let subtotal: Money = items.iter().map(LineItem::line_total).sum();
    let shipping = rules.shipping_for(method, subtotal);
    let tax = subtotal.percent(rules.tax_rate_percent);

    OrderTotals {
        subtotal,
        shipping,
        tax,
        total: subtotal + shipping + tax,
    }
}
