//! Application settings loaded from the process environment.
//!
//! Every value has a default suitable for local development, so an empty
//! environment still produces a usable [`AppConfig`]. `.env` files are read by
//! `main` through `dotenvy` before [`AppConfig::from_env`] runs.

use crate::errors::{Error, Result};
use sqlx::postgres::PgSslMode;
use std::{
    net::{Ipv4Addr, SocketAddr},
    path::PathBuf,
    str::FromStr,
};

/// Connection settings for the Postgres store
#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    /// Host name or address of the server
    pub host: String,
    /// TCP port of the server
    pub port: u16,
    /// Login role
    pub user: String,
    /// Password for `user`; may be empty
    pub password: String,
    /// Database to connect to
    pub name: String,
    /// Transport security mode. `require` encrypts but does not verify the
    /// server certificate.
    pub ssl_mode: PgSslMode,
    /// Maximum number of pooled connections
    pub max_connections: u32,
    /// Full connection URL; takes precedence over the discrete fields
    pub url: Option<String>,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5432,
            user: "postgres".to_string(),
            password: String::new(),
            name: "postgres".to_string(),
            ssl_mode: PgSslMode::Require,
            max_connections: 10,
            url: None,
        }
    }
}

/// Top-level configuration for the service
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Port the HTTP server listens on
    pub port: u16,
    /// Database connection settings
    pub database: DatabaseSettings,
    /// Directory containing `index.html` and other front-end assets
    pub public_dir: PathBuf,
    /// Optional TOML file overriding the built-in seed products
    pub seed_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 80,
            database: DatabaseSettings::default(),
            public_dir: PathBuf::from("public"),
            seed_file: None,
        }
    }
}

impl AppConfig {
    /// Reads the configuration from the real process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Unset keys fall back to defaults; set but unparseable values are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let db_defaults = defaults.database;

        let database = DatabaseSettings {
            host: lookup("DB_HOST").unwrap_or(db_defaults.host),
            port: parse_or(&lookup, "DB_PORT", db_defaults.port)?,
            user: lookup("DB_USER").unwrap_or(db_defaults.user),
            password: lookup("DB_PASS").unwrap_or(db_defaults.password),
            name: lookup("DB_NAME").unwrap_or(db_defaults.name),
            ssl_mode: parse_or(&lookup, "DB_SSLMODE", db_defaults.ssl_mode)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", db_defaults.max_connections)?,
            url: lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()),
        };

        Ok(Self {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            database,
            public_dir: lookup("PUBLIC_DIR").map_or(defaults.public_dir, PathBuf::from),
            seed_file: lookup("SEED_FILE").map(PathBuf::from),
        })
    }

    /// Address the HTTP listener binds to (all interfaces).
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e| Error::Config {
            message: format!("Invalid value {raw:?} for {key}: {e}"),
        }),
    }
}
