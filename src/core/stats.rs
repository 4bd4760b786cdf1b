//! Inventory statistics.
//!
//! A single aggregate query over the `products` table. Every aggregate is
//! coalesced so an empty table reports zeros rather than NULLs.

use crate::{entities::Product, errors::Result};
use rust_decimal::Decimal;
use sea_orm::{DatabaseConnection, EntityTrait, FromQueryResult, QuerySelect, sea_query::Expr};
use serde::Serialize;
use tracing::instrument;

/// Aggregate figures across all products.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct InventoryStats {
    /// Number of product rows
    pub total_products: i64,
    /// Sum of all quantities
    pub total_items: i64,
    /// Number of distinct categories
    pub categories: i64,
    /// Sum of `quantity * price` over every row
    #[serde(with = "rust_decimal::serde::float")]
    pub total_value: Decimal,
}

/// Computes the inventory statistics in one statement.
///
/// # Errors
/// Returns an error if the database query fails.
#[instrument(skip(db))]
pub async fn inventory_stats(db: &DatabaseConnection) -> Result<InventoryStats> {
    let stats = Product::find()
        .select_only()
        .column_as(Expr::cust("COUNT(*)"), "total_products")
        .column_as(Expr::cust("COALESCE(SUM(quantity), 0)"), "total_items")
        .column_as(Expr::cust("COUNT(DISTINCT category)"), "categories")
        .column_as(
            Expr::cust("COALESCE(SUM(quantity * price), 0.0)"),
            "total_value",
        )
        .into_model::<InventoryStats>()
        .one(db)
        .await?;

    Ok(stats.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[tokio::test]
    async fn test_stats_on_empty_table_are_zero() -> Result<()> {
        let db = setup_test_db().await?;

        let stats = inventory_stats(&db).await?;
        assert_eq!(stats, InventoryStats::default());
        assert_eq!(stats.total_value, Decimal::ZERO);
        Ok(())
    }

    #[tokio::test]
    async fn test_stats_aggregate_all_rows() -> Result<()> {
        let db = setup_test_db().await?;
        create_custom_product(&db, "Hammer", "Tools", 2, Decimal::new(1_000, 2)).await?;
        create_custom_product(&db, "Wrench", "Tools", 3, Decimal::new(550, 2)).await?;
        create_custom_product(&db, "Apple", "Food", 10, Decimal::new(50, 2)).await?;

        let stats = inventory_stats(&db).await?;
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.total_items, 15);
        assert_eq!(stats.categories, 2);
        // 2 * 10.00 + 3 * 5.50 + 10 * 0.50
        assert_eq!(stats.total_value.round_dp(2), Decimal::new(4_150, 2));
        Ok(())
    }

    #[test]
    fn test_stats_serialize_as_numbers() {
        let json = serde_json::to_value(InventoryStats::default()).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "total_products": 0,
                "total_items": 0,
                "categories": 0,
                "total_value": 0.0,
            })
        );
    }
}
