//! Line-item extraction
//!
//! Flattens order→line-item relationships into a uniform, order-preserving
//! sequence of enriched records. Records referencing ids absent from the
//! reference tables are excluded and reported; one bad line item never
//! invalidates the whole report.

use std::collections::HashMap;
use std::fmt;

use serde::Serialize;
use tracing::warn;

use crate::config::EngineConfig;
use crate::core::errors::{EngineError, Result};
use crate::core::types::{Item, ItemId, OrderId, OrderStatus, Snapshot, Supplier, SupplierId};

/// One purchase-order line, enriched with reference data and its CO2 total
#[derive(Debug, Clone, Serialize)]
pub struct LineRecord {
    pub order_id: OrderId,
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub item_id: ItemId,
    pub item_name: String,
    pub sku: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub co2_per_unit: f64,
    pub line_co2: f64,
    pub line_total: f64,
}

/// A record excluded from extraction because it references a missing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IntegrityIssue {
    MissingItem { order_id: OrderId, item_id: ItemId },
    MissingSupplier { order_id: OrderId, supplier_id: SupplierId },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityIssue::MissingItem { order_id, item_id } => write!(
                f,
                "order {order_id} references unknown item {item_id}; line excluded"
            ),
            IntegrityIssue::MissingSupplier {
                order_id,
                supplier_id,
            } => write!(
                f,
                "order {order_id} references unknown supplier {supplier_id}; order excluded"
            ),
        }
    }
}

/// Extraction output: the surviving records plus every exclusion made
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub records: Vec<LineRecord>,
    pub issues: Vec<IntegrityIssue>,
}

impl Extraction {
    pub fn is_degraded(&self) -> bool {
        !self.issues.is_empty()
    }

    /// Strict mode: any exclusion becomes an error instead of a warning
    pub fn into_strict(self) -> Result<Vec<LineRecord>> {
        if self.issues.is_empty() {
            Ok(self.records)
        } else {
            Err(EngineError::ReferentialIntegrity {
                issues: self.issues,
            })
        }
    }
}

/// Whether orders in this status contribute to aggregation
pub fn status_included(status: OrderStatus, config: &EngineConfig) -> bool {
    match status {
        OrderStatus::Draft => config.include_draft_orders,
        OrderStatus::Submitted | OrderStatus::Received => true,
    }
}

/// Flatten every included order into enriched line records.
///
/// `line_co2` multiplies the quantity by the CO2 factor recorded on the line
/// at order time, never the item's current catalog value.
pub fn extract_line_records(snapshot: &Snapshot, config: &EngineConfig) -> Extraction {
    let items: HashMap<ItemId, &Item> = snapshot.items.iter().map(|item| (item.id, item)).collect();
    let suppliers: HashMap<SupplierId, &Supplier> = snapshot
        .suppliers
        .iter()
        .map(|supplier| (supplier.id, supplier))
        .collect();

    let mut extraction = Extraction::default();

    for order in &snapshot.orders {
        if !status_included(order.status, config) {
            continue;
        }

        let Some(supplier) = suppliers.get(&order.supplier_id) else {
            let issue = IntegrityIssue::MissingSupplier {
                order_id: order.id,
                supplier_id: order.supplier_id,
            };
            warn!(%issue, "skipping order");
            extraction.issues.push(issue);
            continue;
        };

        for line in &order.line_items {
            let Some(item) = items.get(&line.item_id) else {
                let issue = IntegrityIssue::MissingItem {
                    order_id: order.id,
                    item_id: line.item_id,
                };
                warn!(%issue, "skipping line");
                extraction.issues.push(issue);
                continue;
            };

            extraction.records.push(LineRecord {
                order_id: order.id,
                supplier_id: supplier.id,
                supplier_name: supplier.name.clone(),
                item_id: item.id,
                item_name: item.name.clone(),
                sku: item.sku.clone(),
                category: item.category.clone(),
                quantity: line.quantity,
                unit_price: line.unit_price,
                co2_per_unit: line.co2_per_unit,
                line_co2: line.line_co2(),
                line_total: line.line_total(),
            });
        }
    }

    extraction
}
