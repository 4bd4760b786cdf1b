use dotenvy::dotenv;
use inventory_api::{
    api::{self, AppState},
    config::{self, AppConfig},
    core::bootstrap,
    errors::Result,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load configuration
    let app_config = AppConfig::from_env()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Connect the pool; refuse to start against an unreachable store
    let db = config::database::create_connection(&app_config.database)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;

    // 5. Ensure table and seed data exist
    let seeds = config::seed::resolve_seed_products(app_config.seed_file.as_deref())
        .inspect_err(|e| error!("Failed to load seed products: {}", e))?;
    bootstrap::ensure_schema(&db, &seeds)
        .await
        .inspect(|inserted| info!("Database bootstrap complete ({} seed rows inserted).", inserted))
        .inspect_err(|e| error!("DB bootstrap error: {}", e))?;

    // 6. Serve until a shutdown signal arrives
    let shell = api::spa::load_shell(&app_config.public_dir).await;
    let state = AppState::new(db.clone(), shell, app_config.public_dir.clone());
    api::server::serve(app_config.socket_addr(), state).await?;

    // 7. Drain the pool before exiting
    db.close().await?;
    info!("Database pool closed.");
    Ok(())
}
