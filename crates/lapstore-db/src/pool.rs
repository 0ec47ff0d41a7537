//! # Database Pool Management
//!
//! Connection pool creation and configuration for SQLite.
//!
//! ## Architecture
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  App startup                                                 │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  DbConfig::from_env() / DbConfig::new(path)                  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  Database::new(config).await ← pool + migrations             │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  db.products(), db.orders(), db.accounts(), ...              │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `Database` handle replaces the source system's hidden global
//! connection with an explicitly constructed, passed-in object. One shared
//! pool, established on construction, reused by every store; `close()`
//! tears it down and a fresh `Database::new` re-establishes.
//!
//! ## WAL Mode
//! SQLite WAL (Write-Ahead Logging) mode is enabled so readers and writers
//! don't block each other, with better crash recovery than rollback mode.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

use lapstore_core::{
    Category, Customer, Employee, Order, OrderLine, Product, ReceiptLine, Role, StockReceipt,
    Supplier,
};

use crate::accounts::AccountStore;
use crate::error::{DbError, DbResult};
use crate::migrations;
use crate::store::RecordStore;

/// Environment variable naming the SQLite database file.
///
/// This is the external configuration surface; absence is a fatal
/// configuration error at first use, never retried.
pub const DB_PATH_ENV: &str = "LAPSTORE_DB_PATH";

// =============================================================================
// Configuration
// =============================================================================

/// Database configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = DbConfig::new("/path/to/lapstore.db")
///     .max_connections(5)
///     .min_connections(1);
/// ```
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// Path to the SQLite database file.
    pub database_path: PathBuf,

    /// Maximum number of connections in the pool.
    /// Default: 5 (sufficient for a local retail app)
    pub max_connections: u32,

    /// Minimum number of connections to keep alive.
    pub min_connections: u32,

    /// Connection acquire timeout.
    pub connect_timeout: Duration,

    /// Idle timeout before closing a connection.
    pub idle_timeout: Duration,

    /// Whether to run migrations on connect.
    pub run_migrations: bool,
}

impl DbConfig {
    /// Creates a configuration with the given path.
    ///
    /// The database file is created on first connect if it doesn't exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        DbConfig {
            database_path: path.into(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            run_migrations: true,
        }
    }

    /// Reads the externally supplied configuration.
    ///
    /// ## Errors
    /// `DbError::Configuration` when [`DB_PATH_ENV`] is unset. Fatal and
    /// surfaced to the caller; there is no fallback path.
    pub fn from_env() -> DbResult<Self> {
        let path = std::env::var(DB_PATH_ENV)
            .map_err(|_| DbError::Configuration(format!("{DB_PATH_ENV} is not set")))?;

        if path.trim().is_empty() {
            return Err(DbError::Configuration(format!("{DB_PATH_ENV} is empty")));
        }

        Ok(DbConfig::new(path))
    }

    /// Sets the maximum number of connections.
    pub fn max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Sets the minimum number of connections.
    pub fn min_connections(mut self, min: u32) -> Self {
        self.min_connections = min;
        self
    }

    /// Sets the connection acquire timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// Sets whether to run migrations on connect.
    pub fn run_migrations(mut self, run: bool) -> Self {
        self.run_migrations = run;
        self
    }

    /// In-memory database configuration (for testing).
    ///
    /// A single connection keeps the in-memory database alive for the
    /// handle's lifetime; tests get an isolated store each.
    pub fn in_memory() -> Self {
        DbConfig {
            database_path: PathBuf::from(":memory:"),
            max_connections: 1,
            min_connections: 1,
            connect_timeout: Duration::from_secs(5),
            idle_timeout: Duration::from_secs(60),
            run_migrations: true,
        }
    }
}

// =============================================================================
// Database
// =============================================================================

/// Main database handle providing store access.
///
/// One `Database` per process; clone freely (clones share the pool). Every
/// entity store hands out the shared pool, so callers never touch raw
/// connections.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Creates the connection pool and prepares the schema.
    ///
    /// ## What This Does
    /// 1. Creates the database file if it doesn't exist
    /// 2. Configures SQLite: WAL journal, NORMAL synchronous, foreign keys ON
    /// 3. Builds the pool
    /// 4. Runs embedded migrations (if enabled)
    ///
    /// ## Errors
    /// `DbError::ConnectionFailed` when the store is unreachable,
    /// `DbError::MigrationFailed` when the schema can't be applied. Both are
    /// fatal and reported, never retried.
    pub async fn new(config: DbConfig) -> DbResult<Self> {
        info!(
            path = %config.database_path.display(),
            "Initializing database connection"
        );

        // sqlite://path?mode=rwc creates the file if missing
        let connect_url = format!("sqlite://{}?mode=rwc", config.database_path.display());

        let connect_options = SqliteConnectOptions::from_str(&connect_url)
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // SQLite ships with foreign keys off for backwards compatibility;
            // the referential invariants here depend on them
            .foreign_keys(true)
            .create_if_missing(true);

        debug!("Connection options configured");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(config.connect_timeout)
            .idle_timeout(Some(config.idle_timeout))
            .connect_with(connect_options)
            .await
            .map_err(|e| DbError::ConnectionFailed(e.to_string()))?;

        info!(
            max_connections = config.max_connections,
            "Database pool created"
        );

        let db = Database { pool };

        if config.run_migrations {
            db.run_migrations().await?;
        }

        Ok(db)
    }

    /// Convenience constructor: configuration from the environment.
    pub async fn from_env() -> DbResult<Self> {
        Database::new(DbConfig::from_env()?).await
    }

    /// Runs pending embedded migrations (idempotent).
    pub async fn run_migrations(&self) -> DbResult<()> {
        info!("Running database migrations");
        migrations::run_migrations(&self.pool).await?;
        info!("Migrations complete");
        Ok(())
    }

    /// Returns a reference to the connection pool.
    ///
    /// For advanced queries not covered by the stores. Prefer store methods
    /// when available.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // =========================================================================
    // Stores
    // =========================================================================

    /// Product store (the searchable entity).
    pub fn products(&self) -> RecordStore<Product> {
        RecordStore::new(self.pool.clone())
    }

    /// Category store.
    pub fn categories(&self) -> RecordStore<Category> {
        RecordStore::new(self.pool.clone())
    }

    /// Supplier store.
    pub fn suppliers(&self) -> RecordStore<Supplier> {
        RecordStore::new(self.pool.clone())
    }

    /// Employee store.
    pub fn employees(&self) -> RecordStore<Employee> {
        RecordStore::new(self.pool.clone())
    }

    /// Customer store.
    pub fn customers(&self) -> RecordStore<Customer> {
        RecordStore::new(self.pool.clone())
    }

    /// Order header store.
    pub fn orders(&self) -> RecordStore<Order> {
        RecordStore::new(self.pool.clone())
    }

    /// Order line store (composite key: order + product).
    pub fn order_lines(&self) -> RecordStore<OrderLine> {
        RecordStore::new(self.pool.clone())
    }

    /// Stock receipt header store.
    pub fn stock_receipts(&self) -> RecordStore<StockReceipt> {
        RecordStore::new(self.pool.clone())
    }

    /// Receipt line store (composite key: receipt + product).
    pub fn receipt_lines(&self) -> RecordStore<ReceiptLine> {
        RecordStore::new(self.pool.clone())
    }

    /// Permission role store.
    pub fn roles(&self) -> RecordStore<Role> {
        RecordStore::new(self.pool.clone())
    }

    /// Account credential store.
    pub fn accounts(&self) -> AccountStore {
        AccountStore::new(self.pool.clone())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Closes the connection pool.
    ///
    /// After this, store operations fail; construct a fresh `Database` to
    /// re-establish.
    pub async fn close(&self) {
        info!("Closing database connection pool");
        self.pool.close().await;
    }

    /// Checks if the database can execute queries.
    pub async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_database_is_healthy() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.health_check().await);
    }

    #[tokio::test]
    async fn closed_pool_fails_operations() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;
        assert!(!db.health_check().await);
        assert!(db.products().list_all().await.is_err());
    }

    #[test]
    fn config_builder() {
        let config = DbConfig::new("/tmp/test.db")
            .max_connections(10)
            .min_connections(2)
            .run_migrations(false);

        assert_eq!(config.max_connections, 10);
        assert_eq!(config.min_connections, 2);
        assert!(!config.run_migrations);
    }

    // Single test owns the env var to avoid cross-test races.
    #[test]
    fn from_env_requires_the_path_setting() {
        std::env::remove_var(DB_PATH_ENV);
        let err = DbConfig::from_env().unwrap_err();
        assert!(matches!(err, DbError::Configuration(_)), "{err}");

        std::env::set_var(DB_PATH_ENV, "/tmp/lapstore-test.db");
        let config = DbConfig::from_env().unwrap();
        assert_eq!(config.database_path, PathBuf::from("/tmp/lapstore-test.db"));
        std::env::remove_var(DB_PATH_ENV);
    }
}
