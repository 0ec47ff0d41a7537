//! Shared fixtures for the in-file test modules.
//!
//! Every test gets its own in-memory database; the seed helpers insert the
//! foreign-key parents a record under test needs.

use chrono::{TimeZone, Utc};

use lapstore_core::{
    Account, Category, Customer, Employee, Order, OrderLine, Product, ReceiptLine, Role,
    StockReceipt, Supplier,
};

use crate::pool::{Database, DbConfig};

/// Fresh, isolated, fully migrated in-memory database.
pub async fn test_db() -> Database {
    Database::new(DbConfig::in_memory())
        .await
        .expect("in-memory database should initialize")
}

/// Seeds the catalog parents referenced by products: one supplier (NCC01)
/// and one category (LSP01).
pub async fn seed_catalog(db: &Database) {
    db.suppliers()
        .insert(&Supplier {
            code: "NCC01".to_string(),
            name: "TechSource Ltd".to_string(),
            address: Some("12 Nguyen Trai".to_string()),
            phone: Some("0901234567".to_string()),
        })
        .await
        .unwrap();

    db.categories()
        .insert(&Category {
            code: "LSP01".to_string(),
            name: "Ultrabook".to_string(),
        })
        .await
        .unwrap();
}

/// Seeds the people parents referenced by orders and accounts: employees
/// NV001/NV002, customer KH001 and role MANAGER.
pub async fn seed_people(db: &Database) {
    for (code, name) in [("NV001", "An Tran"), ("NV002", "Binh Le")] {
        db.employees()
            .insert(&Employee {
                code: code.to_string(),
                name: name.to_string(),
                address: None,
                phone: None,
            })
            .await
            .unwrap();
    }

    db.customers()
        .insert(&Customer {
            code: "KH001".to_string(),
            name: "Chi Pham".to_string(),
            phone: Some("0912345678".to_string()),
            email: None,
            address: None,
        })
        .await
        .unwrap();

    db.roles()
        .insert(&Role {
            code: "MANAGER".to_string(),
            name: "Store manager".to_string(),
        })
        .await
        .unwrap();
}

/// Catalog + people + products SP001/SP002 + order DH001, so line-item
/// tests have every parent row in place.
pub async fn seed_sample_order(db: &Database) {
    seed_catalog(db).await;
    seed_people(db).await;

    for (code, name) in [("SP001", "Gaming Laptop Pro"), ("SP002", "Laptop Air 13")] {
        db.products().insert(&sample_product(code, name)).await.unwrap();
    }

    db.orders().insert(&sample_order("DH001")).await.unwrap();
}

pub fn sample_product(code: &str, name: &str) -> Product {
    Product {
        code: code.to_string(),
        name: name.to_string(),
        supplier_code: "NCC01".to_string(),
        category_code: "LSP01".to_string(),
        cpu: "i7-1365U".to_string(),
        ram: "32GB".to_string(),
        storage: "1TB NVMe".to_string(),
        graphics: "Iris Xe".to_string(),
        price_cents: 1_899_00,
        stock_qty: 5,
        image: None,
    }
}

pub fn sample_order(code: &str) -> Order {
    Order {
        code: code.to_string(),
        customer_code: "KH001".to_string(),
        employee_code: "NV001".to_string(),
        // Whole-second timestamp so equality survives the text round-trip.
        placed_at: Utc.with_ymd_and_hms(2024, 5, 10, 9, 30, 0).unwrap(),
        total_cents: 3_798_00,
        status: "PENDING".to_string(),
    }
}

pub fn sample_order_line(order: &str, product: &str, quantity: i64) -> OrderLine {
    OrderLine {
        order_code: order.to_string(),
        product_code: product.to_string(),
        quantity,
        unit_price_cents: 1_899_00,
    }
}

pub fn sample_receipt(code: &str) -> StockReceipt {
    StockReceipt {
        code: code.to_string(),
        supplier_code: "NCC01".to_string(),
        employee_code: "NV001".to_string(),
        // Whole-second timestamp so equality survives the text round-trip.
        received_at: Utc.with_ymd_and_hms(2024, 5, 2, 14, 0, 0).unwrap(),
        total_cents: 8_990_00,
    }
}

pub fn sample_receipt_line(receipt: &str, product: &str, quantity: i64) -> ReceiptLine {
    ReceiptLine {
        receipt_code: receipt.to_string(),
        product_code: product.to_string(),
        quantity,
        cost_cents: 899_00,
    }
}

pub fn sample_account(code: &str, employee: &str, username: &str, password: &str) -> Account {
    Account {
        code: code.to_string(),
        employee_code: employee.to_string(),
        username: username.to_string(),
        password: password.to_string(),
        role_code: "MANAGER".to_string(),
    }
}
