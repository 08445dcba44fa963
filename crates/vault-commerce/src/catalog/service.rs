//! In-memory product catalog.

use crate::catalog::{Product, ProductFilter};
use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// Cap on products returned by [`Catalog::featured`].
const FEATURED_LIMIT: usize = 8;

/// Cap on products returned by [`Catalog::related`].
const RELATED_LIMIT: usize = 4;

/// Rating at or above which a product counts as featured.
const FEATURED_RATING: f64 = 4.5;

/// A category with its product count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    /// Category name as it appears on products.
    pub name: String,
    /// Number of products in the category.
    pub count: usize,
}

/// The product catalog, held in memory.
///
/// Lookups are thin filters over the product list; there is no index.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from a product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn all(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn get(&self, id: &ProductId) -> Result<&Product, CommerceError> {
        self.products
            .iter()
            .find(|p| &p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Products in a category (case-insensitive).
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category.eq_ignore_ascii_case(category))
            .collect()
    }

    /// Search name, brand, description, and category for a term
    /// (case-insensitive substring match).
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let term = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.brand.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
                    || p.category.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Highly rated or explicitly flagged products, capped at eight.
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.rating >= FEATURED_RATING || p.featured)
            .take(FEATURED_LIMIT)
            .collect()
    }

    /// Products in the same category as the given one, excluding it,
    /// capped at four.
    pub fn related(&self, product_id: &ProductId, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| &p.id != product_id && p.category.eq_ignore_ascii_case(category))
            .take(RELATED_LIMIT)
            .collect()
    }

    /// Apply a filter, then its sort.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        let mut results: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect();

        if let Some(sort) = filter.sort {
            results.sort_by(|a, b| sort.compare(a, b));
        }
        results
    }

    /// Distinct categories with product counts, in first-seen order.
    pub fn categories(&self) -> Vec<CategorySummary> {
        let mut summaries: Vec<CategorySummary> = Vec::new();
        for product in &self.products {
            match summaries.iter_mut().find(|s| s.name == product.category) {
                Some(summary) => summary.count += 1,
                None => summaries.push(CategorySummary {
                    name: product.category.clone(),
                    count: 1,
                }),
            }
        }
        summaries
    }

    /// Distinct brands, sorted.
    pub fn brands(&self) -> Vec<String> {
        let mut brands: Vec<String> = Vec::new();
        for product in &self.products {
            if !brands.contains(&product.brand) {
                brands.push(product.brand.clone());
            }
        }
        brands.sort();
        brands
    }
}
