//! HTTP layer - axum router, handlers and server lifecycle
//!
//! Handlers receive the database pool through [`AppState`] rather than a
//! global, so tests can drive the router against an in-memory database.

/// Error-to-response mapping for handlers
pub mod error;
/// Product and statistics endpoints
pub mod handlers;
/// Listener binding and graceful shutdown
pub mod server;
/// Static assets and SPA shell fallback
pub mod spa;

pub use error::{ApiError, ApiResult};

use axum::{
    Router,
    http::{HeaderValue, header},
    routing::get,
};
use sea_orm::DatabaseConnection;
use std::{path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};

/// Shared data available to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Connection pool for all product queries
    pub db: DatabaseConnection,
    /// SPA shell document served for non-API paths
    pub shell: Arc<str>,
    /// Directory holding static front-end assets
    pub public_dir: Arc<PathBuf>,
}

impl AppState {
    /// Creates the handler state from its parts.
    #[must_use]
    pub fn new(db: DatabaseConnection, shell: impl Into<Arc<str>>, public_dir: PathBuf) -> Self {
        Self {
            db,
            shell: shell.into(),
            public_dir: Arc::new(public_dir),
        }
    }
}

/// Builds the complete router: `/api` endpoints, SPA fallback and the
/// response layers (no-store caching, CORS, request tracing).
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/products",
            get(handlers::list_products)
                .post(handlers::create_product)
                .fallback(handlers::api_not_found),
        )
        .route(
            "/products/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product)
                .fallback(handlers::api_not_found),
        )
        .route(
            "/stats",
            get(handlers::inventory_stats).fallback(handlers::api_not_found),
        );

    Router::new()
        .nest("/api", api)
        .fallback(spa::spa_fallback)
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
