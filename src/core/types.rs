//! Domain types shared across the engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::errors::{EngineError, Result};

pub type ItemId = u64;
pub type SupplierId = u64;
pub type OrderId = u64;

/// Purchase order lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Draft,
    Submitted,
    Received,
}

impl OrderStatus {
    /// Get the display name for this status
    pub fn display_name(&self) -> &str {
        match self {
            OrderStatus::Draft => "draft",
            OrderStatus::Submitted => "submitted",
            OrderStatus::Received => "received",
        }
    }
}

/// Catalog item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub sku: String,
    pub category: String,
    pub unit: String,
    #[serde(default)]
    pub stock: i64,
    #[serde(default = "default_reorder_level")]
    pub reorder_level: i64,
    pub co2_per_unit: f64,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
}

fn default_reorder_level() -> i64 {
    10
}

fn default_is_active() -> bool {
    true
}

/// Supplier reference record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub sustainability_score: f64,
    #[serde(default)]
    pub certifications: Option<String>,
}

/// One item/quantity/price/CO2 entry within a purchase order.
///
/// `co2_per_unit` is the factor copied from the item when the order was
/// placed; later catalog edits never move historical reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub item_id: ItemId,
    pub quantity: u32,
    pub unit_price: f64,
    pub co2_per_unit: f64,
}

impl LineItem {
    pub fn line_co2(&self) -> f64 {
        f64::from(self.quantity) * self.co2_per_unit
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Order placed with a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: OrderId,
    pub supplier_id: SupplierId,
    pub status: OrderStatus,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    pub created_at: DateTime<Utc>,
}

/// One consistent read of the external order/item/supplier store.
/// The engine's sole input; it performs no writes against it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub suppliers: Vec<Supplier>,
    #[serde(default)]
    pub orders: Vec<PurchaseOrder>,
}

impl Snapshot {
    /// Ingestion-time validation: quantities must be positive, CO2 factors
    /// and prices non-negative and finite. Aggregation assumes this has run
    /// and never re-checks.
    pub fn validate(&self) -> Result<()> {
        let mut problems = Vec::new();

        for item in &self.items {
            if !item.co2_per_unit.is_finite() || item.co2_per_unit < 0.0 {
                problems.push(format!(
                    "item {} has invalid co2_per_unit {}",
                    item.id, item.co2_per_unit
                ));
            }
        }

        for order in &self.orders {
            for line in &order.line_items {
                if line.quantity == 0 {
                    problems.push(format!(
                        "order {} line for item {} has zero quantity",
                        order.id, line.item_id
                    ));
                }
                if !line.co2_per_unit.is_finite() || line.co2_per_unit < 0.0 {
                    problems.push(format!(
                        "order {} line for item {} has invalid co2_per_unit {}",
                        order.id, line.item_id, line.co2_per_unit
                    ));
                }
                if !line.unit_price.is_finite() || line.unit_price < 0.0 {
                    problems.push(format!(
                        "order {} line for item {} has invalid unit_price {}",
                        order.id, line.item_id, line.unit_price
                    ));
                }
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(EngineError::Ingestion(problems.join("; ")))
        }
    }
}
