//! `PostgreSQL` connection provisioning and migration runner.
//!
//! The pool connects lazily: the service starts even when the store is down,
//! and every operation finds out through [`Database::acquire`] or
//! [`Database::begin`]. Connections and transactions are returned to the
//! pool when dropped, on every exit path.

use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::StorageError;

const DEFAULT_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 300;

/// Configuration for the `PostgreSQL` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL (e.g. `postgres://localhost/spatial_data`).
    pub database_url: String,
    /// Upper bound on pooled connections.
    pub max_connections: u32,
    /// How long an operation waits for a connection before giving up.
    pub acquire_timeout: Duration,
    /// How long an unused connection stays open.
    pub idle_timeout: Duration,
}

impl Config {
    /// Create a configuration with default pool settings.
    #[must_use]
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            idle_timeout: Duration::from_secs(DEFAULT_IDLE_TIMEOUT_SECS),
        }
    }

    #[must_use]
    pub const fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    #[must_use]
    pub const fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// No connection is opened here.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the URL cannot be parsed.
    pub fn build(self) -> Result<Database, StorageError> {
        let options = PgConnectOptions::from_str(&self.database_url)
            .map_err(StorageError::Database)?;

        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(self.idle_timeout)
            .connect_lazy_with(options);

        Ok(Database { pool })
    }
}

/// Holds the `PostgreSQL` connection pool and hands out scoped connections.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Run all pending migrations (creates the `PostGIS` extension and tables).
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the store is unreachable or a migration fails.
    pub async fn migrate(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        tracing::info!("database migrations completed");
        Ok(())
    }

    /// Take one connection from the pool for the duration of an operation.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when no connection can be opened.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, StorageError> {
        match self.pool.acquire().await {
            Ok(conn) => {
                tracing::debug!("database connection acquired");
                Ok(conn)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to acquire database connection");
                Err(StorageError::Unavailable(err))
            }
        }
    }

    /// Open a transaction on a freshly acquired connection.
    ///
    /// Dropping the transaction without committing rolls it back.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when no connection can be opened,
    /// or [`StorageError::Database`] if `BEGIN` fails.
    pub async fn begin(&self) -> Result<Transaction<'static, Postgres>, StorageError> {
        match self.pool.begin().await {
            Ok(tx) => {
                tracing::debug!("database transaction opened");
                Ok(tx)
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to open database transaction");
                Err(StorageError::from(err))
            }
        }
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close all pooled connections.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database pool closed");
    }
}
