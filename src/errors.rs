//! Unified error type for the inventory service.
//!
//! Library functions return [`Result`]; the HTTP layer translates these
//! into status codes in [`crate::api::ApiError`].

use thiserror::Error;

/// Errors produced by configuration, bootstrap and product operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// Client input failed validation before reaching the database
    #[error("{message}")]
    Validation {
        /// Message returned to the client
        message: String,
    },

    /// No product row matched the requested id
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The id that was looked up
        id: i32,
    },

    /// Query or connection failure reported by `SeaORM`
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Failure while building the Postgres connection pool
    #[error("Connection pool error: {0}")]
    Pool(#[from] sqlx::Error),

    /// Filesystem or socket failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
