//! Product records as served by the remote catalog.

use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product in the remote catalog.
///
/// The catalog keys products by integer; the newtype keeps those ids
/// from being confused with quantities or other counters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its integer value.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the integer value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Customer rating aggregate for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating in `[0, 5]`.
    pub rate: f64,
    /// Number of ratings received.
    pub count: u64,
}

/// A product in the catalog.
///
/// Sourced entirely from the remote catalog and immutable once received;
/// the stores never construct or mutate one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Unit price.
    pub price: Money,
    /// Full description.
    pub description: String,
    /// Category name, a member of the catalog's category vocabulary.
    pub category: String,
    /// Image URL.
    pub image: String,
    /// Customer rating aggregate.
    pub rating: Rating,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_catalog_json() {
        let json = r#"{
            "id": 1,
            "title": "Gold Signet Ring",
            "price": 109.95,
            "description": "Hand-polished signet ring in 18k gold.",
            "category": "jewelery",
            "image": "https://catalog.example/img/1.png",
            "rating": { "rate": 4.5, "count": 120 }
        }"#;

        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.price.cents(), 10995);
        assert_eq!(product.category, "jewelery");
        assert_eq!(product.rating.count, 120);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }
}
