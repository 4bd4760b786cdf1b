//! Database configuration module.
//!
//! This module builds the shared connection pool and creates the `products`
//! table. Postgres pools are built from discrete settings through `sqlx` so
//! credentials never need URL escaping; a `DATABASE_URL` goes straight to
//! `SeaORM`. Table DDL is generated with `Schema::create_table_from_entity`,
//! so the table always matches the entity definition.

use crate::config::settings::DatabaseSettings;
use crate::entities::Product;
use crate::errors::Result;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Schema,
    SqlxPostgresConnector,
};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::time::Duration;
use tracing::{info, instrument};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Establishes the connection pool and verifies it can reach the store.
///
/// Fails if no connection can be opened, so callers can abort startup
/// instead of serving requests against a broken database.
#[instrument(skip(settings), fields(host = %settings.host, db = %settings.name))]
pub async fn create_connection(settings: &DatabaseSettings) -> Result<DatabaseConnection> {
    let db = match &settings.url {
        Some(url) => {
            let mut options = ConnectOptions::new(url.clone());
            options
                .max_connections(settings.max_connections)
                .acquire_timeout(ACQUIRE_TIMEOUT)
                .sqlx_logging(false);
            Database::connect(options).await?
        }
        None => {
            let options = PgConnectOptions::new()
                .host(&settings.host)
                .port(settings.port)
                .username(&settings.user)
                .password(&settings.password)
                .database(&settings.name)
                .ssl_mode(settings.ssl_mode);
            let pool = PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .acquire_timeout(ACQUIRE_TIMEOUT)
                .connect_with(options)
                .await?;
            SqlxPostgresConnector::from_sqlx_postgres_pool(pool)
        }
    };

    db.ping().await?;
    info!(backend = ?db.get_database_backend(), "Database connection pool ready");
    Ok(db)
}

/// Creates the `products` table if it does not already exist.
///
/// Safe to run against a database that already holds the table.
pub async fn create_tables<C>(db: &C) -> Result<()>
where
    C: ConnectionTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut product_table = schema.create_table_from_entity(Product);
    product_table.if_not_exists();

    db.execute(builder.build(&product_table)).await?;
    Ok(())
}
