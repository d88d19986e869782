//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};

/// A products fixture with five products across three statuses.
///
/// | id   | name         | sku      | status    | price |
/// |------|--------------|----------|-----------|-------|
/// | p-1  | Smart Watch  | WCH-100  | Published | 120   |
/// | p-2  | Phone Case   | sku-200  | Draft     | 15    |
/// | p-3  | Headphones   | SKU-300  | Published | 220   |
/// | p-4  | Laptop Stand | STD-400  | Low Stock | 50    |
/// | p-5  | Keyboard     | KBD-500  | Published | 200   |
pub fn products_fixture() -> Value {
    let product = |id: &str, name: &str, category: u32, sku: &str, status: u32, price: f64, date: &str| {
        json!({
            "id": id,
            "name": name,
            "categoryId": category,
            "media": [format!("/images/{id}.png")],
            "variations": [{"type": "Color", "value": "Black"}],
            "details": {
                "sku": sku,
                "statusId": status,
                "basePrice": price,
                "quantity": 10,
                "addedDate": date
            }
        })
    };

    json!({
        "products": [
            product("p-1", "Smart Watch", 1, "WCH-100", 1, 120.0, "2024-01-15"),
            product("p-2", "Phone Case", 2, "sku-200", 2, 15.0, "2024-02-01"),
            product("p-3", "Headphones", 3, "SKU-300", 1, 220.0, "2024-02-10"),
            product("p-4", "Laptop Stand", 3, "STD-400", 3, 50.0, "2024-03-05"),
            product("p-5", "Keyboard", 3, "KBD-500", 1, 200.0, "2024-03-20")
        ],
        "categories": {
            "1": {"id": 1, "name": "Watch"},
            "2": {"id": 2, "name": "Accessories"},
            "3": {"id": 3, "name": "Electronics"}
        },
        "productStatus": {
            "1": {"id": 1, "name": "Published"},
            "2": {"id": 2, "name": "Draft"},
            "3": {"id": 3, "name": "Low Stock"}
        }
    })
}

/// The sidebar menu fixture.
pub fn menu_fixture() -> Value {
    json!([
        {"title": "Dashboard", "icon": "/icons/dashboard.svg", "path": "/"},
        {"title": "E-Commerce", "icon": "/icons/cart.svg", "submenu": [
            {"title": "Product", "path": "/products"},
            {"title": "Add Product", "path": "/product/edit"}
        ]},
        {"title": "Customers", "icon": "/icons/users.svg", "path": "/customers"}
    ])
}
