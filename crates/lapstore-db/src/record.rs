//! # Record Mapping Contract
//!
//! The traits that let one generic store serve every entity.
//!
//! ## Why a Contract?
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  The source system repeated identical CRUD logic once per    │
//! │  entity (11 near-identical data-access classes).             │
//! │                                                              │
//! │  Here the shape lives once in RecordStore<T>; each entity    │
//! │  contributes only its mapping declaration:                   │
//! │                                                              │
//! │    impl Record for Product {                                 │
//! │        const TABLE       = "products";                       │
//! │        const KEY_COLUMNS  = ["code"];                        │
//! │        const DATA_COLUMNS = ["name", "supplier_code", ...];  │
//! │        fn key(&self)       -> the business key               │
//! │        fn bind_data(&self) -> positional parameters          │
//! │    }                                                         │
//! │                                                              │
//! │  Row → record goes through sqlx::FromRow (derived on the     │
//! │  core types); record → parameters goes through bind_data.    │
//! └──────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use sqlx::sqlite::{Sqlite, SqliteArguments, SqliteRow};

/// A positional-parameter query against SQLite.
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

// =============================================================================
// Record Key
// =============================================================================

/// A business key: one code, or a tuple of codes for line-item entities.
///
/// Keys are caller-assigned strings, never store-generated surrogates.
pub trait RecordKey: fmt::Debug + Clone + Send + Sync {
    /// The key's parts, in `Record::KEY_COLUMNS` order.
    fn parts(&self) -> Vec<String>;

    /// True when any part is empty or blank. Records with blank keys are
    /// rejected before a statement runs.
    fn is_blank(&self) -> bool {
        self.parts().iter().any(|part| part.trim().is_empty())
    }

    /// Human-readable form for logs and error messages.
    fn describe(&self) -> String {
        self.parts().join("/")
    }
}

/// Single-column business key.
impl RecordKey for String {
    fn parts(&self) -> Vec<String> {
        vec![self.clone()]
    }
}

/// Composite key for line-item entities (e.g. order code + product code).
impl RecordKey for (String, String) {
    fn parts(&self) -> Vec<String> {
        vec![self.0.clone(), self.1.clone()]
    }
}

// =============================================================================
// Record
// =============================================================================

/// The per-entity mapping declaration consumed by `RecordStore<T>`.
///
/// Implementations live in `entities.rs`; one short block per entity is all
/// the per-entity code in this crate.
pub trait Record:
    for<'r> sqlx::FromRow<'r, SqliteRow> + Clone + Send + Sync + Unpin + 'static
{
    /// Key type: `String`, or `(String, String)` for line items.
    type Key: RecordKey;

    /// Entity name for logs and error context (singular, lower case).
    const ENTITY: &'static str;

    /// Table name.
    const TABLE: &'static str;

    /// Primary key column(s), in binding order.
    const KEY_COLUMNS: &'static [&'static str];

    /// Non-key columns, in binding order.
    const DATA_COLUMNS: &'static [&'static str];

    /// The record's business key.
    fn key(&self) -> Self::Key;

    /// Binds the non-key fields positionally, in `DATA_COLUMNS` order.
    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q>;
}

/// Marks the entity that supports substring search on a display-name column.
pub trait Searchable: Record {
    /// Column matched with a wildcard-wrapped `LIKE` parameter.
    const SEARCH_COLUMN: &'static str;
}

// =============================================================================
// Unit Tests
// =============================================================================
