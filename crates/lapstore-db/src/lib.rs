//! # lapstore-db: Database Layer for lapstore
//!
//! SQLite data access for the laptop retail sales-management system.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                     lapstore Data Flow                       │
//! │                                                              │
//! │  Presentation layer (out of scope)                           │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌────────────────────────────────────────────────────────┐  │
//! │  │                lapstore-db (THIS CRATE)                │  │
//! │  │                                                        │  │
//! │  │  Database (pool.rs)     RecordStore<T> (store.rs)      │  │
//! │  │  SqlitePool, config     list/get/insert/update/delete  │  │
//! │  │                         + search on products           │  │
//! │  │                                                        │  │
//! │  │  AccountStore (accounts.rs)   Migrations (embedded)    │  │
//! │  │  hash-on-write, verify        001_initial_schema.sql   │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  SQLite database file (WAL mode, foreign keys ON)            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool, configuration, the `Database` handle
//! - [`record`] - The per-entity mapping contract
//! - [`store`] - The generic record store shared by all entities
//! - [`accounts`] - The account credential store
//! - [`migrations`] - Embedded schema migrations
//! - [`error`] - Database error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lapstore_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::from_env()?).await?;
//!
//! let hits = db.products().search("ThinkPad").await?;
//! let ok = db.accounts().verify("test", "password1234").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod accounts;
pub mod error;
pub mod migrations;
pub mod pool;
pub mod record;
pub mod store;

// Per-entity mapping declarations (trait impls only, no items to export).
mod entities;

#[cfg(test)]
mod testutil;

// =============================================================================
// Re-exports
// =============================================================================

pub use accounts::{AccountStore, PASSWORD_HASH_PREFIX};
pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig, DB_PATH_ENV};
pub use record::{Record, RecordKey, Searchable};
pub use store::RecordStore;
