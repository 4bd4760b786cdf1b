//! Shared test utilities for the inventory service.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test products with sensible defaults.

use crate::{
    core::product::{self, NewProduct, UpdateProductRequest},
    entities,
    errors::Result,
};
use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a tracing subscriber that writes through the test harness.
/// Safe to call from several tests; only the first call takes effect.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .with_test_writer()
        .try_init();
}

/// Opens an empty in-memory `SQLite` database without creating any tables.
pub async fn connect_test_db() -> Result<DatabaseConnection> {
    Ok(sea_orm::Database::connect("sqlite::memory:").await?)
}

/// Creates an in-memory `SQLite` database with the products table initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_test_db().await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test product with sensible defaults.
///
/// # Defaults
/// * `quantity`: 5
/// * `price`: 9.99
/// * `description`: None
pub async fn create_test_product(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
) -> Result<entities::product::Model> {
    create_custom_product(db, name, category, 5, Decimal::new(999, 2)).await
}

/// Creates a test product with custom quantity and price.
pub async fn create_custom_product(
    db: &DatabaseConnection,
    name: &str,
    category: &str,
    quantity: i32,
    price: Decimal,
) -> Result<entities::product::Model> {
    product::create_product(
        db,
        NewProduct {
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            price,
            description: None,
        },
    )
    .await
}

/// A complete update payload for tests that only care about the target id.
#[must_use]
pub fn sample_update() -> UpdateProductRequest {
    UpdateProductRequest {
        name: Some("Updated".to_string()),
        category: Some("Tools".to_string()),
        quantity: Some(1),
        price: Some(Decimal::ONE),
        description: None,
    }
}
