//! # Entity Types
//!
//! The persisted entities of the laptop retail system.
//!
//! ## Identity Pattern
//! Every entity carries a caller-assigned *business code* as its key
//! (`"SP001"`, `"TK002"`, ...), never a store-generated surrogate. Line-item
//! entities use a composite key of two codes. Keys are immutable after
//! creation and must be non-empty.
//!
//! ## Relationships
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Product ──► Supplier          Order ──► Customer, Employee  │
//! │  Product ──► Category          OrderLine ──► Order, Product  │
//! │  StockReceipt ──► Supplier, Employee                         │
//! │  ReceiptLine ──► StockReceipt, Product                       │
//! │  Account ──► Employee, Role                                  │
//! │                                                              │
//! │  All references are weak foreign keys (lookup-only).         │
//! │  No entity owns another; the store owns persisted state.     │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Monetary columns are integer cents (`i64`); use [`crate::money::Money`]
//! for arithmetic. Timestamps are UTC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalog
// =============================================================================

/// A product category (e.g. gaming, ultrabook, workstation).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Category {
    /// Business code, primary key.
    pub code: String,

    /// Display name.
    pub name: String,
}

/// A laptop supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Supplier {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// A laptop product on sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Business code, primary key.
    pub code: String,

    /// Display name shown in listings and on receipts; substring search
    /// runs against this field.
    pub name: String,

    /// Supplier reference.
    pub supplier_code: String,

    /// Category reference.
    pub category_code: String,

    /// Hardware spec fields, kept as free-form text per the catalog.
    pub cpu: String,
    pub ram: String,
    pub storage: String,
    pub graphics: String,

    /// Sale price in cents.
    pub price_cents: i64,

    /// Units currently in stock.
    pub stock_qty: i64,

    /// Optional image path or URL.
    pub image: Option<String>,
}

impl Product {
    /// Sale price as [`Money`].
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// People
// =============================================================================

/// A store employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Employee {
    pub code: String,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// A customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub code: String,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
}

// =============================================================================
// Sales
// =============================================================================

/// A customer order header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Order {
    /// Business code, primary key.
    pub code: String,

    /// Customer reference.
    pub customer_code: String,

    /// Employee who took the order.
    pub employee_code: String,

    /// When the order was placed (UTC).
    pub placed_at: DateTime<Utc>,

    /// Order total in cents.
    pub total_cents: i64,

    /// Free-form status label (e.g. "PENDING", "PAID").
    pub status: String,
}

impl Order {
    /// Order total as [`Money`].
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// One product line on an order. Keyed by (order, product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderLine {
    pub order_code: String,
    pub product_code: String,
    pub quantity: i64,
    pub unit_price_cents: i64,
}

impl OrderLine {
    /// Line total: unit price times quantity.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.unit_price_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Purchasing
// =============================================================================

/// A stock receipt header (goods received from a supplier).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct StockReceipt {
    pub code: String,
    pub supplier_code: String,
    pub employee_code: String,
    pub received_at: DateTime<Utc>,
    pub total_cents: i64,
}

impl StockReceipt {
    /// Receipt total as [`Money`].
    pub fn total(&self) -> Money {
        Money::from_cents(self.total_cents)
    }
}

/// One product line on a stock receipt. Keyed by (receipt, product).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct ReceiptLine {
    pub receipt_code: String,
    pub product_code: String,
    pub quantity: i64,
    pub cost_cents: i64,
}

impl ReceiptLine {
    /// Line total: purchase cost times quantity.
    pub fn line_total(&self) -> Money {
        Money::from_cents(self.cost_cents).multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Access Control
// =============================================================================

/// A permission role (e.g. "MANAGER", "STAFF").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Role {
    pub code: String,
    pub name: String,
}

/// A user account linked to an employee.
///
/// The `password` field is two-state: it holds a plaintext value on input
/// and an irreversible salted hash once stored. The credential store is the
/// only component that transitions between the two; a stored account never
/// carries plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Account {
    /// Business code, primary key.
    pub code: String,

    /// Linked employee; unique across accounts (one account per employee).
    pub employee_code: String,

    /// Login name; unique across accounts.
    pub username: String,

    /// Plaintext on input, salted hash on storage.
    pub password: String,

    /// Permission role reference.
    pub role_code: String,
}

// =============================================================================
// Unit Tests
// =============================================================================
