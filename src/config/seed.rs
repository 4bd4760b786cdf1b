//! Seed product configuration
//!
//! The products listed here are inserted once, when the bootstrap finds the
//! `products` table empty. A TOML file with `[[products]]` entries can replace
//! the built-in list.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing an entire seed file
#[derive(Debug, Deserialize)]
pub struct SeedConfig {
    /// Products to insert into an empty table
    pub products: Vec<SeedProduct>,
}

/// A single seed row
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct SeedProduct {
    /// Product name
    pub name: String,
    /// Product category
    pub category: String,
    /// Units on hand
    pub quantity: i32,
    /// Unit price
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
}

impl SeedProduct {
    fn new(name: &str, category: &str, quantity: i32, price_cents: i64, description: &str) -> Self {
        Self {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            price: Decimal::new(price_cents, 2),
            description: Some(description.to_string()),
        }
    }
}

/// The five products seeded when no seed file is configured.
#[must_use]
pub fn default_seed_products() -> Vec<SeedProduct> {
    vec![
        SeedProduct::new("Laptop Pro", "Electronics", 15, 129_999, "High-performance laptop"),
        SeedProduct::new("Wireless Mouse", "Electronics", 45, 2_999, "Ergonomic wireless mouse"),
        SeedProduct::new("Office Chair", "Furniture", 8, 19_999, "Comfortable office chair"),
        SeedProduct::new("Coffee Beans", "Food", 120, 1_299, "Premium coffee beans"),
        SeedProduct::new("Notebook Set", "Office Supplies", 200, 899, "Pack of 3 notebooks"),
    ]
}

/// Loads seed products from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed_file<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Loading seed products from {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read seed file {path_ref:?}: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse seed file {path_ref:?}: {e}"),
    })
}

/// Resolves the seed list: the configured file if any, otherwise the defaults.
pub fn resolve_seed_products(seed_file: Option<&Path>) -> Result<Vec<SeedProduct>> {
    match seed_file {
        Some(path) => Ok(load_seed_file(path)?.products),
        None => Ok(default_seed_products()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_default_seed_products() {
        let products = default_seed_products();
        assert_eq!(products.len(), 5);
        assert_eq!(products[0].name, "Laptop Pro");
        assert_eq!(products[0].price, Decimal::new(129_999, 2));
        assert_eq!(products[4].category, "Office Supplies");
        assert_eq!(products[4].quantity, 200);
    }

    #[test]
    fn test_parse_seed_config() {
        let toml_str = r#"
            [[products]]
            name = "Stapler"
            category = "Office Supplies"
            quantity = 30
            price = 4.5

            [[products]]
            name = "Desk Lamp"
            category = "Furniture"
            quantity = 12
            price = 24.99
            description = "LED desk lamp"
        "#;

        let config: SeedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.products.len(), 2);
        assert_eq!(config.products[0].name, "Stapler");
        assert!(config.products[0].description.is_none());
        assert_eq!(config.products[1].price.round_dp(2), Decimal::new(2_499, 2));
        assert_eq!(config.products[1].description.as_deref(), Some("LED desk lamp"));
    }

    #[test]
    fn test_missing_seed_file_is_config_error() {
        let result = resolve_seed_products(Some(Path::new("/nonexistent/seed.toml")));
        assert!(matches!(result, Err(Error::Config { message: _ })));
    }
}
