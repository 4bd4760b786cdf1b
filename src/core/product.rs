//! Product business logic - Handles all product-related operations.
//!
//! This module provides the repository functions behind the REST surface:
//! listing, lookup by id, creation, full-record update and hard delete. Each
//! operation is a single statement against the `products` table. Request
//! payloads are validated here, before any query runs, so the HTTP layer
//! only has to translate [`Error`] variants into status codes.

use crate::{
    entities::{Product, product},
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{QueryOrder, Set, prelude::*, sea_query::Expr};
use serde::Deserialize;
use tracing::{debug, info, instrument};

/// Body of a create request as it arrives on the wire.
///
/// Every field is optional here so that a missing field becomes a
/// validation error instead of a deserialization failure.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CreateProductRequest {
    /// Product name
    pub name: Option<String>,
    /// Product category
    pub category: Option<String>,
    /// Units on hand
    pub quantity: Option<i32>,
    /// Unit price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    /// Optional description
    pub description: Option<String>,
}

/// A create request that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    /// Product name, trimmed
    pub name: String,
    /// Product category, trimmed
    pub category: String,
    /// Units on hand
    pub quantity: i32,
    /// Unit price rounded to two fractional digits
    pub price: Decimal,
    /// Optional description
    pub description: Option<String>,
}

impl CreateProductRequest {
    /// Checks that every required field is present and non-blank.
    ///
    /// # Errors
    /// Returns `Error::Validation` naming each missing field.
    pub fn validate(self) -> Result<NewProduct> {
        let name = non_blank(self.name);
        let category = non_blank(self.category);

        let missing: Vec<&str> = [
            ("name", name.is_none()),
            ("category", category.is_none()),
            ("quantity", self.quantity.is_none()),
            ("price", self.price.is_none()),
        ]
        .into_iter()
        .filter_map(|(field, absent)| absent.then_some(field))
        .collect();

        match (name, category, self.quantity, self.price) {
            (Some(name), Some(category), Some(quantity), Some(price)) => Ok(NewProduct {
                name,
                category,
                quantity,
                price: price.round_dp(2),
                description: self.description,
            }),
            _ => Err(Error::Validation {
                message: format!("Missing required fields: {}", missing.join(", ")),
            }),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Body of an update request.
///
/// Updates replace the whole record. Absent fields are written as NULL and
/// are left for the table constraints to reject.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateProductRequest {
    /// Replacement name
    pub name: Option<String>,
    /// Replacement category
    pub category: Option<String>,
    /// Replacement quantity
    pub quantity: Option<i32>,
    /// Replacement unit price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    /// Replacement description
    pub description: Option<String>,
}

/// Retrieves all products, most recently created first.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>> {
    let products = Product::find()
        .order_by_desc(product::Column::CreatedAt)
        .all(db)
        .await?;
    debug!("Fetched {} products.", products.len());
    Ok(products)
}

/// Retrieves a specific product by its unique ID, returning None if no row matches.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn get_product_by_id(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<Option<product::Model>> {
    Product::find_by_id(product_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inserts a validated product. The database assigns the id; both
/// timestamps are set to the current time.
///
/// # Errors
/// Returns an error if the database insert operation fails.
#[instrument(skip(db, new_product), fields(name = %new_product.name))]
pub async fn create_product(
    db: &DatabaseConnection,
    new_product: NewProduct,
) -> Result<product::Model> {
    let now = chrono::Utc::now().naive_utc();

    let product = product::ActiveModel {
        name: Set(new_product.name),
        category: Set(new_product.category),
        quantity: Set(new_product.quantity),
        price: Set(new_product.price),
        description: Set(new_product.description),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    let created = product.insert(db).await?;
    info!("Created product '{}' (ID: {})", created.name, created.id);
    Ok(created)
}

/// Replaces every editable field of a product and refreshes `updated_at`
/// in the same statement. `created_at` is never touched.
///
/// # Errors
/// Returns `Error::ProductNotFound` if no row has this id, or a database
/// error if the statement fails (including NOT NULL violations caused by
/// absent fields).
#[instrument(skip(db, changes))]
pub async fn update_product(
    db: &DatabaseConnection,
    product_id: i32,
    changes: UpdateProductRequest,
) -> Result<()> {
    let now = chrono::Utc::now().naive_utc();

    let result = Product::update_many()
        .col_expr(product::Column::Name, Expr::value(changes.name))
        .col_expr(product::Column::Category, Expr::value(changes.category))
        .col_expr(product::Column::Quantity, Expr::value(changes.quantity))
        .col_expr(
            product::Column::Price,
            Expr::value(changes.price.map(|p| p.round_dp(2))),
        )
        .col_expr(product::Column::Description, Expr::value(changes.description))
        .col_expr(product::Column::UpdatedAt, Expr::value(now))
        .filter(product::Column::Id.eq(product_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    info!("Updated product ID {}", product_id);
    Ok(())
}

/// Permanently removes a product.
///
/// # Errors
/// Returns `Error::ProductNotFound` if no row has this id, or a database
/// error if the delete fails.
#[instrument(skip(db))]
pub async fn delete_product(db: &DatabaseConnection, product_id: i32) -> Result<()> {
    let result = Product::delete_by_id(product_id).exec(db).await?;
    if result.rows_affected == 0 {
        return Err(Error::ProductNotFound { id: product_id });
    }
    info!("Deleted product ID {}", product_id);
    Ok(())
}
