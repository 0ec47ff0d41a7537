//! Per-entity mapping declarations.
//!
//! One `impl Record` block per entity: table name, key and data columns,
//! and positional parameter binding. This is the only per-entity code in
//! the crate; everything else is the generic store.
//!
//! Column order here must match the schema in
//! `migrations/sqlite/001_initial_schema.sql`.

use lapstore_core::{
    Account, Category, Customer, Employee, Order, OrderLine, Product, ReceiptLine, Role,
    StockReceipt, Supplier,
};

use crate::record::{Record, Searchable, SqliteQuery};

// =============================================================================
// Catalog
// =============================================================================

impl Record for Category {
    type Key = String;

    const ENTITY: &'static str = "category";
    const TABLE: &'static str = "categories";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &["name"];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.name.clone())
    }
}

impl Record for Supplier {
    type Key = String;

    const ENTITY: &'static str = "supplier";
    const TABLE: &'static str = "suppliers";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &["name", "address", "phone"];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.address.clone())
            .bind(self.phone.clone())
    }
}

impl Record for Product {
    type Key = String;

    const ENTITY: &'static str = "product";
    const TABLE: &'static str = "products";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &[
        "name",
        "supplier_code",
        "category_code",
        "cpu",
        "ram",
        "storage",
        "graphics",
        "price_cents",
        "stock_qty",
        "image",
    ];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.supplier_code.clone())
            .bind(self.category_code.clone())
            .bind(self.cpu.clone())
            .bind(self.ram.clone())
            .bind(self.storage.clone())
            .bind(self.graphics.clone())
            .bind(self.price_cents)
            .bind(self.stock_qty)
            .bind(self.image.clone())
    }
}

/// Products are the one searchable entity: substring match on the display name.
impl Searchable for Product {
    const SEARCH_COLUMN: &'static str = "name";
}

// =============================================================================
// People
// =============================================================================

impl Record for Employee {
    type Key = String;

    const ENTITY: &'static str = "employee";
    const TABLE: &'static str = "employees";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &["name", "address", "phone"];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.address.clone())
            .bind(self.phone.clone())
    }
}

impl Record for Customer {
    type Key = String;

    const ENTITY: &'static str = "customer";
    const TABLE: &'static str = "customers";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &["name", "phone", "email", "address"];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.name.clone())
            .bind(self.phone.clone())
            .bind(self.email.clone())
            .bind(self.address.clone())
    }
}

// =============================================================================
// Sales
// =============================================================================

impl Record for Order {
    type Key = String;

    const ENTITY: &'static str = "order";
    const TABLE: &'static str = "orders";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &[
        "customer_code",
        "employee_code",
        "placed_at",
        "total_cents",
        "status",
    ];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.customer_code.clone())
            .bind(self.employee_code.clone())
            .bind(self.placed_at)
            .bind(self.total_cents)
            .bind(self.status.clone())
    }
}

impl Record for OrderLine {
    type Key = (String, String);

    const ENTITY: &'static str = "order line";
    const TABLE: &'static str = "order_lines";
    const KEY_COLUMNS: &'static [&'static str] = &["order_code", "product_code"];
    const DATA_COLUMNS: &'static [&'static str] = &["quantity", "unit_price_cents"];

    fn key(&self) -> (String, String) {
        (self.order_code.clone(), self.product_code.clone())
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.quantity).bind(self.unit_price_cents)
    }
}

// =============================================================================
// Purchasing
// =============================================================================

impl Record for StockReceipt {
    type Key = String;

    const ENTITY: &'static str = "stock receipt";
    const TABLE: &'static str = "stock_receipts";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &[
        "supplier_code",
        "employee_code",
        "received_at",
        "total_cents",
    ];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.supplier_code.clone())
            .bind(self.employee_code.clone())
            .bind(self.received_at)
            .bind(self.total_cents)
    }
}

impl Record for ReceiptLine {
    type Key = (String, String);

    const ENTITY: &'static str = "receipt line";
    const TABLE: &'static str = "receipt_lines";
    const KEY_COLUMNS: &'static [&'static str] = &["receipt_code", "product_code"];
    const DATA_COLUMNS: &'static [&'static str] = &["quantity", "cost_cents"];

    fn key(&self) -> (String, String) {
        (self.receipt_code.clone(), self.product_code.clone())
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.quantity).bind(self.cost_cents)
    }
}

// =============================================================================
// Access Control
// =============================================================================

impl Record for Role {
    type Key = String;

    const ENTITY: &'static str = "role";
    const TABLE: &'static str = "roles";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] = &["name"];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query.bind(self.name.clone())
    }
}

impl Record for Account {
    type Key = String;

    const ENTITY: &'static str = "account";
    const TABLE: &'static str = "accounts";
    const KEY_COLUMNS: &'static [&'static str] = &["code"];
    const DATA_COLUMNS: &'static [&'static str] =
        &["employee_code", "username", "password", "role_code"];

    fn key(&self) -> String {
        self.code.clone()
    }

    fn bind_data<'q>(&self, query: SqliteQuery<'q>) -> SqliteQuery<'q> {
        query
            .bind(self.employee_code.clone())
            .bind(self.username.clone())
            .bind(self.password.clone())
            .bind(self.role_code.clone())
    }
}
