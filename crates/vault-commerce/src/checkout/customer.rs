//! Customer and payment details collected during checkout.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};

/// A shipping address.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl ShippingAddress {
    /// Validate that all fields are filled in.
    pub fn validate(&self) -> Result<(), CommerceError> {
        for (field, value) in [
            ("street", &self.street),
            ("city", &self.city),
            ("state", &self.state),
            ("zip_code", &self.zip_code),
        ] {
            if value.trim().is_empty() {
                return Err(CommerceError::validation(field, "is required"));
            }
        }
        Ok(())
    }
}

/// Contact information for the person placing the order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerInfo {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub address: ShippingAddress,
}

impl CustomerInfo {
    /// Validate contact fields and the shipping address.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.email.trim().is_empty() {
            return Err(CommerceError::validation("email", "is required"));
        }
        if !email_is_valid(&self.email) {
            return Err(CommerceError::validation("email", "is not a valid address"));
        }
        for (field, value) in [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("phone", &self.phone),
        ] {
            if value.trim().is_empty() {
                return Err(CommerceError::validation(field, "is required"));
            }
        }
        self.address.validate()
    }
}

/// Card details entered at the payment step.
///
/// Only the summary derived by [`PaymentCard::summary`] is kept on the
/// submitted order; full card data never leaves checkout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct PaymentCard {
    /// Card number; groups of digits may be separated by spaces.
    pub card_number: String,
    /// Expiry in MM/YY form.
    pub expiry: String,
    /// Three-digit security code.
    pub cvv: String,
    /// Name as printed on the card.
    pub cardholder_name: String,
}

impl PaymentCard {
    /// Validate the card fields.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let digits = self.digits();
        if digits.is_empty() {
            return Err(CommerceError::validation("card_number", "is required"));
        }
        if digits.len() != 16 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::validation("card_number", "must be 16 digits"));
        }

        if self.expiry.is_empty() {
            return Err(CommerceError::validation("expiry", "is required"));
        }
        if !expiry_is_valid(&self.expiry) {
            return Err(CommerceError::validation("expiry", "must be in MM/YY format"));
        }

        if self.cvv.is_empty() {
            return Err(CommerceError::validation("cvv", "is required"));
        }
        if self.cvv.len() != 3 || !self.cvv.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::validation("cvv", "must be 3 digits"));
        }

        if self.cardholder_name.trim().is_empty() {
            return Err(CommerceError::validation("cardholder_name", "is required"));
        }
        Ok(())
    }

    /// Card number with separators stripped.
    fn digits(&self) -> String {
        self.card_number.chars().filter(|c| !c.is_whitespace()).collect()
    }

    /// Derive the storable summary: cardholder name and last four digits.
    pub fn summary(&self) -> Result<PaymentSummary, CommerceError> {
        self.validate()?;
        let digits = self.digits();
        Ok(PaymentSummary {
            card_last_four: digits[digits.len() - 4..].to_string(),
            cardholder_name: self.cardholder_name.clone(),
        })
    }
}

/// The payment details retained on a submitted order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentSummary {
    /// Last four digits of the card number.
    pub card_last_four: String,
    /// Name as printed on the card.
    pub cardholder_name: String,
}

/// Check an expiry for the shape `MM/YY`.
fn expiry_is_valid(expiry: &str) -> bool {
    let bytes = expiry.as_bytes();
    bytes.len() == 5
        && bytes[2] == b'/'
        && bytes[0].is_ascii_digit()
        && bytes[1].is_ascii_digit()
        && bytes[3].is_ascii_digit()
        && bytes[4].is_ascii_digit()
}

/// Check an email for the shape `local@domain.tld` with no whitespace.
fn email_is_valid(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}
