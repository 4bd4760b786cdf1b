//! Startup bootstrap: make sure the schema exists and holds seed data.
//!
//! [`ensure_schema`] is idempotent. It can run on every process start
//! without duplicating seed rows or failing on an existing table.

use crate::{
    config::{database::create_tables, seed::SeedProduct},
    entities::{Product, product},
    errors::Result,
};
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, Set};
use tracing::{info, instrument};

/// Creates the `products` table if absent and seeds it when it is empty.
///
/// Returns the number of seed rows inserted (zero when the table already
/// held data).
///
/// # Errors
/// Any failure is returned to the caller, which is expected to abort startup.
#[instrument(skip(db, seeds), fields(seed_count = seeds.len()))]
pub async fn ensure_schema(db: &DatabaseConnection, seeds: &[SeedProduct]) -> Result<usize> {
    create_tables(db).await?;

    let existing = Product::find().count(db).await?;
    if existing != 0 || seeds.is_empty() {
        info!(existing, "Products table already populated; skipping seed.");
        return Ok(0);
    }

    let now = chrono::Utc::now().naive_utc();
    let rows = seeds.iter().map(|seed| product::ActiveModel {
        name: Set(seed.name.clone()),
        category: Set(seed.category.clone()),
        quantity: Set(seed.quantity),
        price: Set(seed.price),
        description: Set(seed.description.clone()),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    });
    Product::insert_many(rows).exec(db).await?;

    info!("Seeded {} products into empty table.", seeds.len());
    Ok(seeds.len())
}
