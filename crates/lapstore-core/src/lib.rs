//! # lapstore-core: Pure Domain Types for lapstore
//!
//! Domain types and pure business rules for a laptop retail
//! sales-management system. This crate performs no I/O; the database layer
//! (`lapstore-db`) builds on top of it.
//!
//! ## Architecture Position
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  lapstore Architecture                   │
//! │                                                          │
//! │  Presentation layer (out of scope)                       │
//! │       │                                                  │
//! │       ▼                                                  │
//! │  lapstore-db     SQLite stores, credential store         │
//! │       │                                                  │
//! │       ▼                                                  │
//! │  lapstore-core (THIS CRATE)                              │
//! │    types • money • validation                            │
//! │    NO I/O • NO DATABASE • PURE FUNCTIONS                 │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entity types (Product, Order, Account, ...)
//! - [`money`] - Integer money type (no floating point)
//! - [`error`] - Validation error types
//! - [`validation`] - Input validation rules

pub mod error;
pub mod money;
pub mod types;
pub mod validation;

pub use error::{ValidationError, ValidationResult};
pub use money::Money;
pub use types::{
    Account, Category, Customer, Employee, Order, OrderLine, Product, ReceiptLine, Role,
    StockReceipt, Supplier,
};

/// Maximum length of a business code (primary key column width).
pub const MAX_CODE_LEN: usize = 50;

/// Minimum accepted password length for new accounts.
pub const MIN_PASSWORD_LEN: usize = 4;
