//! Canonical product data and product-id normalization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical product data, the source of truth for cart line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Canonical product identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Product image path, if any.
    #[serde(default)]
    pub image: String,
    /// Price reference understood by the external checkout provider.
    #[serde(default)]
    pub checkout_price_id: String,
    /// Shipping weight in ounces.
    #[serde(default)]
    pub weight_oz: f64,
}

/// Trims a raw product id; `None` if nothing remains.
pub fn normalize_product_id(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Product catalog with an alias table for legacy id variants.
///
/// Old product pages and stale carts may reference renamed ids; the alias
/// table folds those onto their canonical spelling so the same product never
/// occupies two cart lines.
///
/// # Examples
///
/// ```
/// use storefront_core::cart::{Product, ProductCatalog};
///
/// let mut catalog = ProductCatalog::new();
/// catalog.insert(Product {
///     id: "ceremonial-cacao-200g".into(),
///     name: "Ceremonial Cacao 200g".into(),
///     price: 33.0,
///     image: String::new(),
///     checkout_price_id: String::new(),
///     weight_oz: 8.0,
/// });
/// catalog.add_alias("ceremonial-cacao-2024-200g", "ceremonial-cacao-200g");
///
/// assert_eq!(
///     catalog.normalize_id(" ceremonial-cacao-2024-200g "),
///     Some("ceremonial-cacao-200g".to_string())
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: HashMap<String, Product>,
    aliases: HashMap<String, String>,
}

impl ProductCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product, keyed by its canonical id.
    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    /// Maps a legacy id variant onto a canonical id.
    pub fn add_alias(&mut self, variant: impl Into<String>, canonical: impl Into<String>) {
        self.aliases.insert(variant.into(), canonical.into());
    }

    /// Looks up canonical product data by (already normalized) id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.get(id)
    }

    /// Trims a raw id and folds known variants onto their canonical spelling.
    ///
    /// Returns `None` for blank input. Ids without an alias entry pass
    /// through unchanged, whether or not the catalog knows the product.
    pub fn normalize_id(&self, raw: &str) -> Option<String> {
        let trimmed = normalize_product_id(raw)?;
        match self.aliases.get(&trimmed) {
            Some(canonical) => Some(canonical.clone()),
            None => Some(trimmed),
        }
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog holds no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cacao() -> Product {
        Product {
            id: "cacao-200g".into(),
            name: "Cacao 200g".into(),
            price: 33.0,
            image: "/images/cacao.jpg".into(),
            checkout_price_id: "price_123".into(),
            weight_oz: 8.0,
        }
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_product_id("  abc "), Some("abc".to_string()));
        assert_eq!(normalize_product_id("   "), None);
        assert_eq!(normalize_product_id(""), None);
    }

    #[test]
    fn test_catalog_lookup() {
        let mut catalog = ProductCatalog::new();
        catalog.insert(cacao());
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("cacao-200g").expect("present").price, 33.0);
        assert!(catalog.get("other").is_none());
    }

    #[test]
    fn test_alias_folds_to_canonical() {
        let mut catalog = ProductCatalog::new();
        catalog.insert(cacao());
        catalog.add_alias("cacao-2024-200g", "cacao-200g");
        assert_eq!(catalog.normalize_id("cacao-2024-200g"), Some("cacao-200g".to_string()));
    }

    #[test]
    fn test_unknown_id_passes_through() {
        let catalog = ProductCatalog::new();
        assert_eq!(catalog.normalize_id("anything"), Some("anything".to_string()));
    }

    #[test]
    fn test_blank_id_is_none() {
        let catalog = ProductCatalog::new();
        assert_eq!(catalog.normalize_id(" "), None);
    }
}
