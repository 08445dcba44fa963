//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order not found.
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// Checkout incomplete.
    #[error("Checkout incomplete: missing {0}")]
    CheckoutIncomplete(String),

    /// A submitted field failed validation.
    #[error("Invalid {field}: {message}")]
    Validation { field: String, message: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Storage error.
    #[error("Storage error: {0}")]
    Storage(#[from] vault_kv::StoreError),
}

impl CommerceError {
    /// Build a field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        CommerceError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
