//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront is
//! single-currency (USD); amounts are always whole cents, so "rounded to
//! two decimal places" holds by construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary value in whole cents.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Create a Money value from cents.
    pub const fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use vault_commerce::Money;
    /// let price = Money::from_dollars(49.99);
    /// assert_eq!(price.cents(), 4999);
    /// ```
    pub fn from_dollars(dollars: f64) -> Self {
        Self {
            cents: (dollars * 100.0).round() as i64,
        }
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Amount in cents.
    pub const fn cents(&self) -> i64 {
        self.cents
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Check if this is positive.
    pub const fn is_positive(&self) -> bool {
        self.cents > 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_dollars(&self) -> f64 {
        self.cents as f64 / 100.0
    }

    /// Multiply by a scalar quantity.
    pub const fn multiply(&self, factor: i64) -> Money {
        Money::from_cents(self.cents * factor)
    }

    /// Calculate a percentage of this amount, rounded half-up to the cent.
    ///
    /// ```
    /// use vault_commerce::Money;
    /// let subtotal = Money::from_dollars(200.0);
    /// assert_eq!(subtotal.percent(8.0), Money::from_dollars(16.0));
    /// ```
    pub fn percent(&self, rate: f64) -> Money {
        Money::from_cents((self.cents as f64 * rate / 100.0).round() as i64)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::from_cents(self.cents + other.cents)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.cents += other.cents;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::from_cents(self.cents - other.cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.abs();
        write!(f, "{}${}.{:02}", sign, abs / 100, abs % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(4999);
        assert_eq!(m.cents(), 4999);
    }

    #[test]
    fn test_from_dollars() {
        assert_eq!(Money::from_dollars(49.99).cents(), 4999);
        assert_eq!(Money::from_dollars(100.0).cents(), 10000);
    }

    #[test]
    fn test_to_dollars() {
        let m = Money::from_cents(4999);
        assert!((m.to_dollars() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_cents(4999).to_string(), "$49.99");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::from_cents(-150).to_string(), "-$1.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);
        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 250, 9]
            .into_iter()
            .map(Money::from_cents)
            .sum();
        assert_eq!(total.cents(), 359);
    }

    #[test]
    fn test_percent_rounds_half_up() {
        // 16497 * 8.5% = 1402.245 -> 1402
        assert_eq!(Money::from_cents(16497).percent(8.5).cents(), 1402);
        // 10 * 8.5% = 0.85 -> 1
        assert_eq!(Money::from_cents(10).percent(8.5).cents(), 1);
        // 50 * 1% = 0.5 -> rounds up to 1
        assert_eq!(Money::from_cents(50).percent(1.0).cents(), 1);
    }

    #[test]
    fn test_ordering() {
        assert!(Money::from_dollars(99.99) < Money::from_dollars(100.0));
        assert!(Money::from_dollars(100.0) >= Money::from_dollars(100.0));
    }

    #[test]
    fn test_serde_transparent() {
        let m = Money::from_cents(1299);
        assert_eq!(serde_json::to_string(&m).unwrap(), "1299");

        let back: Money = serde_json::from_str("1299").unwrap();
        assert_eq!(back, m);
    }
}
