/// Database connection pool and table creation
pub mod database;

/// Seed product definitions used when the table is first observed empty
pub mod seed;

/// Environment-driven application settings
pub mod settings;

pub use settings::AppConfig;
