//! Checkout flow state machine.

use crate::cart::ShippingMethod;
use crate::checkout::{CustomerInfo, PaymentCard};
use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// Steps in the checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CheckoutStep {
    /// Cart review.
    #[default]
    Cart,
    /// Contact details, shipping address, and delivery option.
    Shipping,
    /// Payment details.
    Payment,
    /// Order placed.
    Confirmation,
}

impl CheckoutStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "cart",
            CheckoutStep::Shipping => "shipping",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Confirmation => "confirmation",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CheckoutStep::Cart => "Cart",
            CheckoutStep::Shipping => "Shipping",
            CheckoutStep::Payment => "Payment",
            CheckoutStep::Confirmation => "Confirmation",
        }
    }

    /// Get the step number (1-indexed).
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Cart => 1,
            CheckoutStep::Shipping => 2,
            CheckoutStep::Payment => 3,
            CheckoutStep::Confirmation => 4,
        }
    }
}

/// Checkout flow state.
///
/// Holds what the shopper has entered so far and gates advancement on it:
/// payment is unreachable without validated customer details, confirmation
/// without payment details.
#[derive(Debug, Clone, Default)]
pub struct CheckoutFlow {
    /// Current step.
    step: CheckoutStep,
    /// Validated customer details, once entered.
    customer: Option<CustomerInfo>,
    /// Selected delivery option.
    shipping_method: ShippingMethod,
    /// Validated payment details, once entered.
    payment: Option<PaymentCard>,
}

impl CheckoutFlow {
    /// Start a checkout at the cart review step.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step.
    pub fn step(&self) -> CheckoutStep {
        self.step
    }

    /// The customer details, if entered.
    pub fn customer(&self) -> Option<&CustomerInfo> {
        self.customer.as_ref()
    }

    /// The selected delivery option.
    pub fn shipping_method(&self) -> ShippingMethod {
        self.shipping_method
    }

    /// The payment details, if entered.
    pub fn payment(&self) -> Option<&PaymentCard> {
        self.payment.as_ref()
    }

    /// Store customer details after validating them.
    pub fn set_customer(&mut self, customer: CustomerInfo) -> Result<(), CommerceError> {
        customer.validate()?;
        self.customer = Some(customer);
        Ok(())
    }

    /// Select the delivery option.
    pub fn set_shipping_method(&mut self, method: ShippingMethod) {
        self.shipping_method = method;
    }

    /// Store payment details after validating them.
    pub fn set_payment(&mut self, card: PaymentCard) -> Result<(), CommerceError> {
        card.validate()?;
        self.payment = Some(card);
        Ok(())
    }

    /// Check if checkout can advance to a step.
    pub fn can_advance_to(&self, step: CheckoutStep) -> bool {
        match step {
            CheckoutStep::Cart => true,
            CheckoutStep::Shipping => true,
            CheckoutStep::Payment => self.customer.is_some(),
            CheckoutStep::Confirmation => self.customer.is_some() && self.payment.is_some(),
        }
    }

    /// Advance to the next step.
    pub fn advance(&mut self) -> Result<CheckoutStep, CommerceError> {
        let next = match self.step {
            CheckoutStep::Cart => CheckoutStep::Shipping,
            CheckoutStep::Shipping => CheckoutStep::Payment,
            CheckoutStep::Payment => CheckoutStep::Confirmation,
            CheckoutStep::Confirmation => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: "confirmation".to_string(),
                    to: "none".to_string(),
                })
            }
        };

        if !self.can_advance_to(next) {
            return Err(CommerceError::CheckoutIncomplete(
                self.missing_for_step(next).join(", "),
            ));
        }

        self.step = next;
        Ok(next)
    }

    /// Go back to the previous step.
    pub fn go_back(&mut self) -> Result<CheckoutStep, CommerceError> {
        let prev = match self.step {
            CheckoutStep::Cart => {
                return Err(CommerceError::InvalidCheckoutTransition {
                    from: "cart".to_string(),
                    to: "none".to_string(),
                })
            }
            CheckoutStep::Shipping => CheckoutStep::Cart,
            CheckoutStep::Payment => CheckoutStep::Shipping,
            CheckoutStep::Confirmation => CheckoutStep::Payment,
        };

        self.step = prev;
        Ok(prev)
    }

    /// Get what's missing to advance to a step.
    fn missing_for_step(&self, step: CheckoutStep) -> Vec<&'static str> {
        let mut missing = Vec::new();
        match step {
            CheckoutStep::Payment => {
                if self.customer.is_none() {
                    missing.push("customer details");
                }
            }
            CheckoutStep::Confirmation => {
                if self.customer.is_none() {
                    missing.push("customer details");
                }
                if self.payment.is_none() {
                    missing.push("payment details");
                }
            }
            _ => {}
        }
        missing
    }

    /// Check if the order has been placed.
    pub fn is_complete(&self) -> bool {
        self.step == CheckoutStep::Confirmation
    }

    /// Get progress percentage.
    pub fn progress_percent(&self) -> u8 {
        ((self.step.number() as f64 / 4.0) * 100.0) as u8
    }
}
