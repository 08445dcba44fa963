//! Catalog filter and sort types.

use crate::catalog::Product;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by name A-Z.
    #[default]
    Name,
    /// Sort by newest first.
    Newest,
}

impl SortOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "price_low",
            SortOption::PriceDesc => "price_high",
            SortOption::Rating => "rating",
            SortOption::Name => "name",
            SortOption::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Name => "Name: A-Z",
            SortOption::Newest => "Newest",
        }
    }

    /// Ordering of two products under this sort.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::PriceAsc => a.price.cmp(&b.price),
            SortOption::PriceDesc => b.price.cmp(&a.price),
            SortOption::Rating => b
                .rating
                .partial_cmp(&a.rating)
                .unwrap_or(Ordering::Equal),
            SortOption::Name => a.name.cmp(&b.name),
            SortOption::Newest => b.created_at.cmp(&a.created_at),
        }
    }
}

/// A catalog filter; unset fields match everything.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProductFilter {
    /// Restrict to a category (case-insensitive).
    pub category: Option<String>,
    /// Restrict to any of these brands; empty means all brands.
    pub brands: Vec<String>,
    /// Minimum price, inclusive.
    pub min_price: Option<Money>,
    /// Maximum price, inclusive.
    pub max_price: Option<Money>,
    /// Only include purchasable products.
    pub in_stock_only: bool,
    /// Minimum rating, inclusive.
    pub min_rating: Option<f64>,
    /// Sort applied to the filtered results.
    pub sort: Option<SortOption>,
}

impl ProductFilter {
    /// Filter matching the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Add a brand to the allowed set.
    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.push(brand.into());
        self
    }

    /// Restrict to a price range; either bound may be open.
    pub fn price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    /// Only include purchasable products.
    pub fn in_stock(mut self) -> Self {
        self.in_stock_only = true;
        self
    }

    /// Require a minimum rating.
    pub fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Sort the results.
    pub fn sort_by(mut self, sort: SortOption) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Check whether a product passes the filter.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if !self.brands.is_empty() && !self.brands.iter().any(|b| b == &product.brand) {
            return false;
        }
        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }
        if self.in_stock_only && !product.is_available() {
            return false;
        }
        if let Some(min_rating) = self.min_rating {
            if product.rating < min_rating {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop() -> Product {
        let mut p = Product::new(1u64, "Laptop", Money::from_dollars(999.0));
        p.brand = "Lenvo".to_string();
        p.category = "Computers".to_string();
        p.rating = 4.6;
        p.stock_count = 4;
        p
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(ProductFilter::new().matches(&laptop()));
    }

    #[test]
    fn test_category_case_insensitive() {
        let filter = ProductFilter::new().category("computers");
        assert!(filter.matches(&laptop()));

        let filter = ProductFilter::new().category("Audio");
        assert!(!filter.matches(&laptop()));
    }

    #[test]
    fn test_brand_set() {
        let filter = ProductFilter::new().brand("Lenvo").brand("Otherbrand");
        assert!(filter.matches(&laptop()));

        let filter = ProductFilter::new().brand("Otherbrand");
        assert!(!filter.matches(&laptop()));
    }

    #[test]
    fn test_price_range_inclusive() {
        let filter = ProductFilter::new().price_range(
            Some(Money::from_dollars(999.0)),
            Some(Money::from_dollars(999.0)),
        );
        assert!(filter.matches(&laptop()));

        let filter =
            ProductFilter::new().price_range(None, Some(Money::from_dollars(500.0)));
        assert!(!filter.matches(&laptop()));
    }

    #[test]
    fn test_in_stock_only() {
        let mut p = laptop();
        p.stock_count = 0;
        assert!(!ProductFilter::new().in_stock().matches(&p));
        assert!(ProductFilter::new().matches(&p));
    }

    #[test]
    fn test_min_rating() {
        assert!(ProductFilter::new().min_rating(4.5).matches(&laptop()));
        assert!(!ProductFilter::new().min_rating(4.7).matches(&laptop()));
    }

    #[test]
    fn test_sort_compare() {
        let cheap = Product::new(1u64, "A", Money::from_dollars(10.0));
        let pricey = Product::new(2u64, "B", Money::from_dollars(20.0));

        assert_eq!(SortOption::PriceAsc.compare(&cheap, &pricey), Ordering::Less);
        assert_eq!(SortOption::PriceDesc.compare(&cheap, &pricey), Ordering::Greater);
        assert_eq!(SortOption::Name.compare(&cheap, &pricey), Ordering::Less);
    }
}
