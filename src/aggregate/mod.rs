//! Grouped emissions views
//!
//! Folds extracted line records into the by-item and by-supplier views.
//! Grouping uses BTreeMaps so identical snapshots always materialize in the
//! same order.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::core::types::{Item, ItemId, OrderId, SupplierId};
use crate::extract::LineRecord;

/// Per-item emissions view.
///
/// `co2_per_unit` is the item's current catalog factor, shown next to the
/// historical total; it is a display choice, not a recomputation of history.
#[derive(Debug, Clone, Serialize)]
pub struct ItemEmissions {
    pub item_id: ItemId,
    pub item_name: String,
    pub sku: String,
    pub category: String,
    pub co2_per_unit: f64,
    pub total_co2_from_orders: f64,
    pub total_cost: f64,
    pub order_count: usize,
}

/// Per-supplier emissions view
#[derive(Debug, Clone, Serialize)]
pub struct SupplierEmissions {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub total_co2: f64,
    pub total_cost: f64,
    pub order_count: usize,
}

/// Both grouped views over one extraction pass
#[derive(Debug, Clone, Default)]
pub struct EmissionsRollup {
    pub by_item: BTreeMap<ItemId, ItemEmissions>,
    pub by_supplier: BTreeMap<SupplierId, SupplierEmissions>,
}

impl EmissionsRollup {
    /// Grand total of quantity×co2_per_unit across included line records.
    /// Equal whether summed over items or suppliers.
    pub fn grand_total_co2(&self) -> f64 {
        self.by_supplier.values().map(|s| s.total_co2).sum()
    }

    /// Item rows in the report display order: name ascending, id tie-break
    pub fn items_sorted_by_name(&self) -> Vec<&ItemEmissions> {
        let mut rows: Vec<&ItemEmissions> = self.by_item.values().collect();
        rows.sort_by(|a, b| {
            a.item_name
                .cmp(&b.item_name)
                .then_with(|| a.item_id.cmp(&b.item_id))
        });
        rows
    }

    /// Supplier rows in the report display order: name ascending, id tie-break
    pub fn suppliers_sorted_by_name(&self) -> Vec<&SupplierEmissions> {
        let mut rows: Vec<&SupplierEmissions> = self.by_supplier.values().collect();
        rows.sort_by(|a, b| {
            a.supplier_name
                .cmp(&b.supplier_name)
                .then_with(|| a.supplier_id.cmp(&b.supplier_id))
        });
        rows
    }
}

/// Fold line records into the two grouped views.
///
/// Every catalog item gets a row (zero totals when no order references it);
/// suppliers appear only once they have an included order. `order_count`
/// counts distinct orders, not line items.
pub fn rollup(records: &[LineRecord], catalog: &[Item]) -> EmissionsRollup {
    let mut by_item: BTreeMap<ItemId, ItemEmissions> = catalog
        .iter()
        .map(|item| {
            (
                item.id,
                ItemEmissions {
                    item_id: item.id,
                    item_name: item.name.clone(),
                    sku: item.sku.clone(),
                    category: item.category.clone(),
                    co2_per_unit: item.co2_per_unit,
                    total_co2_from_orders: 0.0,
                    total_cost: 0.0,
                    order_count: 0,
                },
            )
        })
        .collect();

    let mut by_supplier: BTreeMap<SupplierId, SupplierEmissions> = BTreeMap::new();
    let mut item_orders: BTreeMap<ItemId, BTreeSet<OrderId>> = BTreeMap::new();
    let mut supplier_orders: BTreeMap<SupplierId, BTreeSet<OrderId>> = BTreeMap::new();

    for record in records {
        if let Some(entry) = by_item.get_mut(&record.item_id) {
            entry.total_co2_from_orders += record.line_co2;
            entry.total_cost += record.line_total;
            item_orders
                .entry(record.item_id)
                .or_default()
                .insert(record.order_id);
        }

        let entry = by_supplier
            .entry(record.supplier_id)
            .or_insert_with(|| SupplierEmissions {
                supplier_id: record.supplier_id,
                supplier_name: record.supplier_name.clone(),
                total_co2: 0.0,
                total_cost: 0.0,
                order_count: 0,
            });
        entry.total_co2 += record.line_co2;
        entry.total_cost += record.line_total;
        supplier_orders
            .entry(record.supplier_id)
            .or_default()
            .insert(record.order_id);
    }

    for (item_id, orders) in item_orders {
        if let Some(entry) = by_item.get_mut(&item_id) {
            entry.order_count = orders.len();
        }
    }
    for (supplier_id, orders) in supplier_orders {
        if let Some(entry) = by_supplier.get_mut(&supplier_id) {
            entry.order_count = orders.len();
        }
    }

    EmissionsRollup {
        by_item,
        by_supplier,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        order_id: OrderId,
        supplier_id: SupplierId,
        item_id: ItemId,
        quantity: u32,
        co2_per_unit: f64,
    ) -> LineRecord {
        LineRecord {
            order_id,
            supplier_id,
            supplier_name: format!("Supplier {supplier_id}"),
            item_id,
            item_name: format!("Item {item_id}"),
            sku: format!("SKU-{item_id}"),
            category: "Raw Materials".to_string(),
            quantity,
            unit_price: 2.0,
            co2_per_unit,
            line_co2: f64::from(quantity) * co2_per_unit,
            line_total: f64::from(quantity) * 2.0,
        }
    }

    fn catalog_item(id: ItemId, co2_per_unit: f64) -> Item {
        Item {
            id,
            name: format!("Item {id}"),
            sku: format!("SKU-{id}"),
            category: "Raw Materials".to_string(),
            unit: "kg".to_string(),
            stock: 0,
            reorder_level: 10,
            co2_per_unit,
            is_active: true,
        }
    }

    #[test]
    fn empty_input_yields_zeroed_catalog_and_no_suppliers() {
        let result = rollup(&[], &[catalog_item(1, 2.0)]);
        assert_eq!(result.by_item.len(), 1);
        assert_eq!(result.by_item[&1].total_co2_from_orders, 0.0);
        assert_eq!(result.by_item[&1].order_count, 0);
        assert!(result.by_supplier.is_empty());
        assert_eq!(result.grand_total_co2(), 0.0);
    }

    #[test]
    fn groups_by_item_and_supplier() {
        let records = vec![
            record(1, 1, 1, 10, 2.0),
            record(1, 1, 2, 5, 1.0),
            record(2, 2, 1, 1, 2.0),
        ];
        let catalog = vec![catalog_item(1, 2.0), catalog_item(2, 1.0)];

        let result = rollup(&records, &catalog);

        assert_eq!(result.by_item[&1].total_co2_from_orders, 22.0);
        assert_eq!(result.by_item[&2].total_co2_from_orders, 5.0);
        assert_eq!(result.by_supplier[&1].total_co2, 25.0);
        assert_eq!(result.by_supplier[&2].total_co2, 2.0);
        assert_eq!(result.grand_total_co2(), 27.0);
    }

    #[test]
    fn order_count_is_distinct_orders_not_lines() {
        let records = vec![
            record(1, 1, 1, 1, 1.0),
            record(1, 1, 2, 1, 1.0),
            record(2, 1, 1, 1, 1.0),
        ];
        let catalog = vec![catalog_item(1, 1.0), catalog_item(2, 1.0)];

        let result = rollup(&records, &catalog);

        assert_eq!(result.by_supplier[&1].order_count, 2);
        assert_eq!(result.by_item[&1].order_count, 2);
        assert_eq!(result.by_item[&2].order_count, 1);
    }

    #[test]
    fn cost_totals_track_unit_prices() {
        let records = vec![record(1, 1, 1, 10, 2.0)];
        let result = rollup(&records, &[catalog_item(1, 2.0)]);
        assert_eq!(result.by_item[&1].total_cost, 20.0);
        assert_eq!(result.by_supplier[&1].total_cost, 20.0);
    }

    #[test]
    fn display_order_sorts_by_name_with_id_tie_break() {
        let mut a = catalog_item(2, 1.0);
        a.name = "Widget".to_string();
        let mut b = catalog_item(1, 1.0);
        b.name = "Widget".to_string();
        let mut c = catalog_item(3, 1.0);
        c.name = "Anvil".to_string();

        let result = rollup(&[], &[a, b, c]);
        let sorted = result.items_sorted_by_name();

        assert_eq!(sorted[0].item_name, "Anvil");
        assert_eq!(sorted[1].item_id, 1);
        assert_eq!(sorted[2].item_id, 2);
    }
}
