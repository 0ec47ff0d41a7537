//! # Database Error Types
//!
//! Error types for database operations.
//!
//! ## Error Flow
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  SQLite Error (sqlx::Error)                                  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  DbError (this module) ← adds context and categorization     │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  Caller boundary ← logs or displays; no retry, no recovery   │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Absence of a row is never an error: lookups return `Option`, writes
//! return a changed/unchanged bool. Errors are reserved for failures of the
//! store itself (unreachable, misconfigured, constraint violated).

use thiserror::Error;

use lapstore_core::ValidationError;

/// Database operation errors.
///
/// These wrap sqlx errors and provide additional context for debugging and
/// user feedback.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database connection failed.
    ///
    /// ## When This Occurs
    /// - Database file doesn't exist and can't be created
    /// - File permissions issue
    /// - Pool used after `close()`
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// A required external setting is missing or unusable.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Migration failed.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// Unique constraint violation.
    ///
    /// ## When This Occurs
    /// - Inserting a duplicate business code
    /// - Duplicate account username or employee code
    #[error("Duplicate {field}: value already exists")]
    UniqueViolation { field: String },

    /// Foreign key constraint violation.
    ///
    /// ## When This Occurs
    /// - A record references a supplier/category/employee/... code that
    ///   does not exist
    #[error("Foreign key violation: {message}")]
    ForeignKeyViolation { message: String },

    /// Integrity violation on account insert, re-reported with a
    /// domain-specific message.
    #[error("username or employee code already exists")]
    DuplicateCredential,

    /// A business key was empty or blank.
    #[error("Invalid {entity} key: {reason}")]
    InvalidKey {
        entity: &'static str,
        reason: String,
    },

    /// A record failed validation before any statement ran.
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Query execution failed.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Pool exhausted (all connections in use).
    #[error("Connection pool exhausted")]
    PoolExhausted,

    /// Internal database error.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// True for the store engine's integrity-violation class (unique or
    /// foreign key). The credential store uses this to pick its friendlier
    /// duplicate message; every other store surfaces these unchanged.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            DbError::UniqueViolation { .. } | DbError::ForeignKeyViolation { .. }
        )
    }
}

/// Convert sqlx errors to DbError.
///
/// ## Error Mapping
/// ```text
/// sqlx::Error::Database      → inspect message for constraint type
/// sqlx::Error::PoolTimedOut  → DbError::PoolExhausted
/// sqlx::Error::PoolClosed    → DbError::ConnectionFailed
/// Other                      → DbError::Internal
/// ```
impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => {
                let msg = db_err.message();

                // SQLite constraint message shapes:
                // UNIQUE: "UNIQUE constraint failed: <table>.<column>"
                // FK:     "FOREIGN KEY constraint failed"
                if msg.contains("UNIQUE constraint failed") {
                    let field = msg
                        .split("UNIQUE constraint failed: ")
                        .nth(1)
                        .unwrap_or("unknown")
                        .to_string();
                    DbError::UniqueViolation { field }
                } else if msg.contains("FOREIGN KEY constraint failed") {
                    DbError::ForeignKeyViolation {
                        message: msg.to_string(),
                    }
                } else {
                    DbError::QueryFailed(msg.to_string())
                }
            }

            sqlx::Error::PoolTimedOut => DbError::PoolExhausted,

            sqlx::Error::PoolClosed => DbError::ConnectionFailed("Pool is closed".to_string()),

            _ => DbError::Internal(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

impl From<ValidationError> for DbError {
    fn from(err: ValidationError) -> Self {
        DbError::InvalidRecord(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
