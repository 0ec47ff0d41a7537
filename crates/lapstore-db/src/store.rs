//! # Generic Record Store
//!
//! One store implementation shared by every entity.
//!
//! ## Operation Shape
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  caller                                                      │
//! │    │  db.products().get_by_key(&key)                         │
//! │    ▼                                                         │
//! │  RecordStore<Product>                                        │
//! │    │  one parameterized statement, fields bound positionally │
//! │    ▼                                                         │
//! │  SqlitePool ──► SQLite ──► FromRow ──► typed result          │
//! │                                                              │
//! │  Absent rows are Option::None / false, never errors.         │
//! │  Statement resources are released on every exit path.        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The SQL text is derived from the entity's mapping declaration
//! ([`Record`]); values always travel as bound parameters, never as
//! concatenated strings.

use std::marker::PhantomData;

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::record::{Record, RecordKey, Searchable};

/// Generic store for one entity type.
///
/// ## Usage
/// ```rust,ignore
/// let products = db.products();
/// let all = products.list_all().await?;
/// let one = products.get_by_key(&"SP001".to_string()).await?;
/// ```
#[derive(Clone)]
pub struct RecordStore<T: Record> {
    pool: SqlitePool,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Record> RecordStore<T> {
    /// Creates a store backed by the shared pool.
    pub fn new(pool: SqlitePool) -> Self {
        RecordStore {
            pool,
            _entity: PhantomData,
        }
    }

    // =========================================================================
    // SQL derivation
    // =========================================================================

    /// All columns, key first, in binding order.
    fn column_list() -> String {
        T::KEY_COLUMNS
            .iter()
            .chain(T::DATA_COLUMNS)
            .copied()
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `key = ?` predicate, `AND`-joined for composite keys.
    fn key_predicate() -> String {
        T::KEY_COLUMNS
            .iter()
            .map(|col| format!("{col} = ?"))
            .collect::<Vec<_>>()
            .join(" AND ")
    }

    fn select_sql() -> String {
        format!("SELECT {} FROM {}", Self::column_list(), T::TABLE)
    }

    fn insert_sql() -> String {
        let columns = Self::column_list();
        let placeholders = vec!["?"; T::KEY_COLUMNS.len() + T::DATA_COLUMNS.len()].join(", ");
        format!(
            "INSERT INTO {} ({columns}) VALUES ({placeholders})",
            T::TABLE
        )
    }

    fn update_sql() -> String {
        let assignments = T::DATA_COLUMNS
            .iter()
            .map(|col| format!("{col} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "UPDATE {} SET {assignments} WHERE {}",
            T::TABLE,
            Self::key_predicate()
        )
    }

    fn guard_key(key: &T::Key) -> DbResult<()> {
        if key.is_blank() {
            return Err(DbError::InvalidKey {
                entity: T::ENTITY,
                reason: "business key must not be empty".to_string(),
            });
        }
        Ok(())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Lists every record, unfiltered.
    ///
    /// An empty store yields an empty vec, never an error.
    pub async fn list_all(&self) -> DbResult<Vec<T>> {
        let sql = Self::select_sql();
        let records = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;

        debug!(entity = T::ENTITY, count = records.len(), "Listed records");
        Ok(records)
    }

    /// Fetches one record by its business key.
    ///
    /// ## Returns
    /// * `Ok(Some(record))` - found
    /// * `Ok(None)` - no row matches (not an error)
    pub async fn get_by_key(&self, key: &T::Key) -> DbResult<Option<T>> {
        let sql = format!("{} WHERE {}", Self::select_sql(), Self::key_predicate());

        let mut query = sqlx::query_as::<_, T>(&sql);
        for part in key.parts() {
            query = query.bind(part);
        }

        let record = query.fetch_optional(&self.pool).await?;
        Ok(record)
    }

    /// Inserts a new record, binding every field positionally.
    ///
    /// ## Returns
    /// * `Ok(true)` - a row was inserted
    /// * `Err(DbError::UniqueViolation)` - business key already exists
    /// * `Err(DbError::ForeignKeyViolation)` - a referenced code is missing
    /// * `Err(DbError::InvalidKey)` - blank business key
    pub async fn insert(&self, record: &T) -> DbResult<bool> {
        let key = record.key();
        Self::guard_key(&key)?;

        debug!(entity = T::ENTITY, key = %key.describe(), "Inserting record");

        let sql = Self::insert_sql();
        let mut query = sqlx::query(&sql);
        for part in key.parts() {
            query = query.bind(part);
        }
        let query = record.bind_data(query);

        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Full-row update matched on the business key.
    ///
    /// ## Returns
    /// * `Ok(true)` - a row changed
    /// * `Ok(false)` - no row matches the key (silent no-op)
    pub async fn update(&self, record: &T) -> DbResult<bool> {
        let key = record.key();
        Self::guard_key(&key)?;

        debug!(entity = T::ENTITY, key = %key.describe(), "Updating record");

        let sql = Self::update_sql();
        let mut query = record.bind_data(sqlx::query(&sql));
        for part in key.parts() {
            query = query.bind(part);
        }

        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Deletes by business key.
    ///
    /// ## Returns
    /// * `Ok(true)` - a row was removed
    /// * `Ok(false)` - nothing matched (repeat deletes are not errors)
    pub async fn delete(&self, key: &T::Key) -> DbResult<bool> {
        debug!(entity = T::ENTITY, key = %key.describe(), "Deleting record");

        let sql = format!("DELETE FROM {} WHERE {}", T::TABLE, Self::key_predicate());

        let mut query = sqlx::query(&sql);
        for part in key.parts() {
            query = query.bind(part);
        }

        let result = query.execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Lists records matching an exact value in one schema column.
    ///
    /// Used for parent-scoped lookups: order lines by order code, receipt
    /// lines by receipt code. The column name must be a fixed schema
    /// column from the entity's mapping declaration; the value is bound.
    pub async fn list_by(&self, column: &'static str, value: &str) -> DbResult<Vec<T>> {
        let known = T::KEY_COLUMNS
            .iter()
            .chain(T::DATA_COLUMNS)
            .any(|col| *col == column);
        if !known {
            return Err(DbError::Internal(format!(
                "unknown {} column: {column}",
                T::ENTITY
            )));
        }

        let sql = format!("{} WHERE {column} = ?", Self::select_sql());
        let records = sqlx::query_as::<_, T>(&sql)
            .bind(value.to_string())
            .fetch_all(&self.pool)
            .await?;

        Ok(records)
    }

    /// Counts rows (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", T::TABLE);
        let count: i64 = sqlx::query_scalar(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }
}

impl<T: Searchable> RecordStore<T> {
    /// Substring search on the entity's display-name column.
    ///
    /// The needle is wrapped in `%` wildcards and bound as a parameter,
    /// never concatenated into the SQL text. An empty needle matches every
    /// record. Case sensitivity follows the store engine (SQLite `LIKE` is
    /// case-insensitive for ASCII).
    pub async fn search(&self, needle: &str) -> DbResult<Vec<T>> {
        debug!(entity = T::ENTITY, needle = %needle, "Searching records");

        let sql = format!(
            "{} WHERE {} LIKE ?",
            Self::select_sql(),
            T::SEARCH_COLUMN
        );
        let pattern = format!("%{needle}%");

        let records = sqlx::query_as::<_, T>(&sql)
            .bind(pattern)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = records.len(), "Search returned records");
        Ok(records)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use lapstore_core::{Order, OrderLine, Product, ReceiptLine, StockReceipt};

    use crate::error::DbError;
    use crate::testutil::{
        sample_order, sample_order_line, sample_product, sample_receipt, sample_receipt_line,
        seed_catalog, seed_people, seed_sample_order, test_db,
    };

    #[tokio::test]
    async fn list_all_on_empty_store_is_empty() {
        let db = test_db().await;
        let products = db.products().list_all().await.unwrap();
        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn insert_then_get_round_trips_every_field() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let product = sample_product("SP001", "ThinkPad X1 Carbon");
        assert!(db.products().insert(&product).await.unwrap());

        let found = db
            .products()
            .get_by_key(&"SP001".to_string())
            .await
            .unwrap()
            .expect("product should exist");
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn get_by_key_returns_none_for_missing_row() {
        let db = test_db().await;
        let found = db.products().get_by_key(&"NOPE".to_string()).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn insert_duplicate_key_is_unique_violation() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let product = sample_product("SP001", "ThinkPad X1 Carbon");
        db.products().insert(&product).await.unwrap();

        let err = db.products().insert(&product).await.unwrap_err();
        assert!(matches!(err, DbError::UniqueViolation { .. }), "{err}");
    }

    #[tokio::test]
    async fn insert_with_missing_reference_is_fk_violation() {
        let db = test_db().await;
        // No suppliers or categories seeded.
        let product = sample_product("SP001", "ThinkPad X1 Carbon");

        let err = db.products().insert(&product).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }), "{err}");
    }

    #[tokio::test]
    async fn insert_with_blank_key_is_rejected() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let product = sample_product("   ", "Nameless");
        let err = db.products().insert(&product).await.unwrap_err();
        assert!(matches!(err, DbError::InvalidKey { .. }), "{err}");
    }

    #[tokio::test]
    async fn update_changes_row_and_reports_true() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let mut product = sample_product("SP001", "ThinkPad X1 Carbon");
        db.products().insert(&product).await.unwrap();

        product.price_cents = 1_499_00;
        product.stock_qty = 12;
        assert!(db.products().update(&product).await.unwrap());

        let found = db
            .products()
            .get_by_key(&"SP001".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, product);
    }

    #[tokio::test]
    async fn update_missing_key_is_silent_false() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let product = sample_product("SP404", "Ghost");
        assert!(!db.products().update(&product).await.unwrap());
    }

    #[tokio::test]
    async fn delete_then_get_is_absent_and_second_delete_is_false() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let product = sample_product("SP001", "ThinkPad X1 Carbon");
        db.products().insert(&product).await.unwrap();

        let key = "SP001".to_string();
        assert!(db.products().delete(&key).await.unwrap());
        assert!(db.products().get_by_key(&key).await.unwrap().is_none());
        assert!(!db.products().delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn search_filters_on_display_name() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let store = db.products();
        store
            .insert(&sample_product("SP001", "Gaming Laptop Pro"))
            .await
            .unwrap();
        store
            .insert(&sample_product("SP002", "Laptop Air 13"))
            .await
            .unwrap();
        store
            .insert(&sample_product("SP003", "Desktop Tower"))
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        let hits: Vec<Product> = store.search("Laptop").await.unwrap();

        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|p| p.name.contains("Laptop")));
        assert!(hits.iter().all(|hit| all.contains(hit)));
    }

    #[tokio::test]
    async fn search_with_empty_needle_returns_every_record() {
        let db = test_db().await;
        seed_catalog(&db).await;

        let store = db.products();
        store
            .insert(&sample_product("SP001", "Gaming Laptop Pro"))
            .await
            .unwrap();
        store
            .insert(&sample_product("SP002", "Desktop Tower"))
            .await
            .unwrap();

        let hits = store.search("").await.unwrap();
        assert_eq!(hits.len(), 2);
    }

    #[tokio::test]
    async fn order_round_trips_with_timestamp() {
        let db = test_db().await;
        seed_catalog(&db).await;
        seed_people(&db).await;

        let order: Order = sample_order("DH001");
        assert!(db.orders().insert(&order).await.unwrap());

        let found = db
            .orders()
            .get_by_key(&"DH001".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, order);
    }

    #[tokio::test]
    async fn composite_key_lines_round_trip() {
        let db = test_db().await;
        seed_sample_order(&db).await;

        let line: OrderLine = sample_order_line("DH001", "SP001", 2);
        let store = db.order_lines();
        assert!(store.insert(&line).await.unwrap());

        let key = ("DH001".to_string(), "SP001".to_string());
        let found = store.get_by_key(&key).await.unwrap().unwrap();
        assert_eq!(found, line);

        assert!(store.delete(&key).await.unwrap());
        assert!(!store.delete(&key).await.unwrap());
    }

    #[tokio::test]
    async fn receipt_and_its_lines_round_trip() {
        let db = test_db().await;
        seed_sample_order(&db).await;

        let receipt: StockReceipt = sample_receipt("PN001");
        assert!(db.stock_receipts().insert(&receipt).await.unwrap());

        let found = db
            .stock_receipts()
            .get_by_key(&"PN001".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found, receipt);

        let line: ReceiptLine = sample_receipt_line("PN001", "SP001", 10);
        let store = db.receipt_lines();
        assert!(store.insert(&line).await.unwrap());

        let key = ("PN001".to_string(), "SP001".to_string());
        let found = store.get_by_key(&key).await.unwrap().unwrap();
        assert_eq!(found, line);

        let scoped = store.list_by("receipt_code", "PN001").await.unwrap();
        assert_eq!(scoped, vec![line]);
    }

    #[tokio::test]
    async fn list_by_scopes_lines_to_their_order() {
        let db = test_db().await;
        seed_sample_order(&db).await;

        let store = db.order_lines();
        store
            .insert(&sample_order_line("DH001", "SP001", 1))
            .await
            .unwrap();
        store
            .insert(&sample_order_line("DH001", "SP002", 3))
            .await
            .unwrap();

        let lines = store.list_by("order_code", "DH001").await.unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.order_code == "DH001"));

        let none = store.list_by("order_code", "DH999").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn list_by_rejects_unknown_column() {
        let db = test_db().await;
        let err = db
            .order_lines()
            .list_by("no_such_column", "x")
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::Internal(_)));
    }

    #[tokio::test]
    async fn count_tracks_inserts() {
        let db = test_db().await;
        seed_catalog(&db).await;

        assert_eq!(db.products().count().await.unwrap(), 0);
        db.products()
            .insert(&sample_product("SP001", "ThinkPad X1 Carbon"))
            .await
            .unwrap();
        assert_eq!(db.products().count().await.unwrap(), 1);
    }
}
