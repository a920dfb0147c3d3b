//! Environment configuration for the `PostgreSQL` messaging store.

use super::store::{MessagingPgPool, PostgresMessagingStore};
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// Environment variable holding the database URL.
pub const DATABASE_URL_VAR: &str = "QUICKMAIL_DATABASE_URL";

/// Environment variable holding the connection pool size.
pub const POOL_SIZE_VAR: &str = "QUICKMAIL_DB_POOL_SIZE";

const DEFAULT_POOL_SIZE: u32 = 4;

/// Errors raised while loading configuration or building the pool.
#[derive(Debug, Error)]
pub enum PostgresConfigError {
    /// A required environment variable is unset or empty.
    #[error("missing required setting {0}")]
    Missing(&'static str),

    /// The pool size is not a positive integer.
    #[error("{POOL_SIZE_VAR} must be a positive integer, got '{0}'")]
    InvalidPoolSize(String),

    /// The connection pool could not be created.
    #[error("failed to build connection pool: {0}")]
    Pool(#[from] PoolError),
}

/// Connection settings for [`PostgresMessagingStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresStoreConfig {
    database_url: String,
    pool_size: u32,
}

impl PostgresStoreConfig {
    /// Creates settings with the default pool size.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }

    /// Overrides the pool size.
    #[must_use]
    pub const fn with_pool_size(mut self, pool_size: u32) -> Self {
        self.pool_size = pool_size;
        self
    }

    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Self::from_lookup`].
    pub fn from_env() -> Result<Self, PostgresConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`PostgresConfigError::Missing`] when the database URL is
    /// absent and [`PostgresConfigError::InvalidPoolSize`] when the pool size
    /// is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, PostgresConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup(DATABASE_URL_VAR)
            .filter(|value| !value.trim().is_empty())
            .ok_or(PostgresConfigError::Missing(DATABASE_URL_VAR))?;

        let pool_size = match lookup(POOL_SIZE_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|size| *size > 0)
                .ok_or(PostgresConfigError::InvalidPoolSize(raw))?,
            None => DEFAULT_POOL_SIZE,
        };

        Ok(Self {
            database_url,
            pool_size,
        })
    }

    /// Returns the database URL.
    #[must_use]
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Returns the maximum number of pooled connections.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.pool_size
    }

    /// Builds the connection pool.
    ///
    /// # Errors
    ///
    /// Returns [`PostgresConfigError::Pool`] when the pool cannot connect.
    pub fn build_pool(&self) -> Result<MessagingPgPool, PostgresConfigError> {
        let manager = ConnectionManager::<PgConnection>::new(self.database_url.as_str());
        Ok(Pool::builder().max_size(self.pool_size).build(manager)?)
    }

    /// Builds the pool and wraps it in a store.
    ///
    /// # Errors
    ///
    /// Returns [`PostgresConfigError::Pool`] when the pool cannot connect.
    pub fn connect(&self) -> Result<PostgresMessagingStore, PostgresConfigError> {
        Ok(PostgresMessagingStore::new(self.build_pool()?))
    }
}
