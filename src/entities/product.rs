//! Product entity - Represents one stocked item in the inventory.
//!
//! Each product has a name, category, quantity on hand, unit price and an
//! optional description. `created_at` is fixed at insert time while
//! `updated_at` is refreshed on every update.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Product database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "products")]
pub struct Model {
    /// Unique identifier for the product, assigned by the database
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Name of the product (e.g., "Laptop Pro")
    #[sea_orm(column_type = "Text")]
    pub name: String,
    /// Free-form grouping (e.g., "Electronics", "Furniture")
    #[sea_orm(column_type = "Text")]
    pub category: String,
    /// Units on hand
    pub quantity: i32,
    /// Unit price with two fractional digits
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Optional longer description
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    /// When the product was created
    pub created_at: DateTime,
    /// When the product was last modified
    pub updated_at: DateTime,
}

/// Products have no relationships to other tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
