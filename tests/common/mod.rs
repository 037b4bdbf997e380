#![allow(dead_code)]

use chrono::{Duration, TimeZone, Utc};

use carbonmap::core::types::{
    Item, ItemId, LineItem, OrderId, OrderStatus, PurchaseOrder, Snapshot, Supplier, SupplierId,
};

pub fn item(id: ItemId, name: &str, category: &str, co2_per_unit: f64) -> Item {
    Item {
        id,
        name: name.to_string(),
        sku: format!("SKU-{id:03}"),
        category: category.to_string(),
        unit: "kg".to_string(),
        stock: 25,
        reorder_level: 10,
        co2_per_unit,
        is_active: true,
    }
}

pub fn supplier(id: SupplierId, name: &str) -> Supplier {
    Supplier {
        id,
        name: name.to_string(),
        contact_email: Some(format!("orders@{}.example", name.to_lowercase().replace(' ', "-"))),
        phone: None,
        address: None,
        sustainability_score: 3.5,
        certifications: None,
    }
}

pub fn line(item_id: ItemId, quantity: u32, unit_price: f64, co2_per_unit: f64) -> LineItem {
    LineItem {
        item_id,
        quantity,
        unit_price,
        co2_per_unit,
    }
}

pub fn order(
    id: OrderId,
    supplier_id: SupplierId,
    status: OrderStatus,
    line_items: Vec<LineItem>,
) -> PurchaseOrder {
    PurchaseOrder {
        id,
        supplier_id,
        status,
        line_items,
        created_at: Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap() + Duration::days(id as i64),
    }
}

/// Two submitted orders with one supplier: 10 units of steel at factor 2.0
/// (20 kg) and 5 boxes at factor 1.0 (5 kg).
pub fn two_order_snapshot() -> Snapshot {
    Snapshot {
        items: vec![
            item(1, "Steel Sheet", "Raw Materials", 2.0),
            item(2, "Cardboard Box", "Packaging", 1.0),
        ],
        suppliers: vec![supplier(1, "Acme Metals")],
        orders: vec![
            order(
                1,
                1,
                OrderStatus::Submitted,
                vec![line(1, 10, 4.0, 2.0)],
            ),
            order(2, 1, OrderStatus::Submitted, vec![line(2, 5, 0.5, 1.0)]),
        ],
    }
}

/// A wider history across three suppliers and four items, including a
/// received order and a draft that must not count.
pub fn mixed_snapshot() -> Snapshot {
    Snapshot {
        items: vec![
            item(1, "Steel Sheet", "Raw Materials", 2.0),
            item(2, "Cardboard Box", "Packaging", 1.0),
            item(3, "Laptop", "Electronics", 12.0),
            item(4, "Printer Paper", "Office", 0.25),
        ],
        suppliers: vec![
            supplier(1, "Acme Metals"),
            supplier(2, "Box & Co"),
            supplier(3, "Volt Supply"),
        ],
        orders: vec![
            order(
                1,
                1,
                OrderStatus::Submitted,
                vec![line(1, 20, 4.0, 2.0), line(2, 10, 0.5, 1.0)],
            ),
            order(2, 2, OrderStatus::Received, vec![line(2, 40, 0.5, 1.0)]),
            order(3, 3, OrderStatus::Submitted, vec![line(3, 2, 900.0, 12.0)]),
            order(4, 3, OrderStatus::Draft, vec![line(3, 5, 900.0, 12.0)]),
        ],
    }
}
