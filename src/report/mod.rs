//! Query facade
//!
//! Assembles the three read-only reports the frontend consumes. Each
//! operation recomputes from a fresh snapshot; nothing is cached and nothing
//! mutates, so concurrent calls are independent.

pub mod writer;

use serde::Serialize;

use crate::aggregate::{self, EmissionsRollup};
use crate::config::EngineConfig;
use crate::core::types::{ItemId, SupplierId};
use crate::core::Result;
use crate::extract::{self, IntegrityIssue};
use crate::recommend::{self, Recommendation};
use crate::store::SnapshotStore;

/// Wire row of `GET /api/reports/emissions-by-item`
#[derive(Debug, Clone, Serialize)]
pub struct EmissionsByItemRow {
    pub item_id: ItemId,
    pub item_name: String,
    pub sku: String,
    pub co2_per_unit: f64,
    pub total_co2_from_orders: f64,
}

/// Wire row of `GET /api/reports/emissions-by-supplier`
#[derive(Debug, Clone, Serialize)]
pub struct EmissionsBySupplierRow {
    pub supplier_id: SupplierId,
    pub supplier_name: String,
    pub total_co2: f64,
    pub order_count: usize,
}

/// Wire body of `GET /api/reports/ai-recommendations`
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsPayload {
    pub recommendations: Vec<Recommendation>,
}

/// A report plus the integrity warnings gathered while producing it.
///
/// `rows` is complete for everything the snapshot could resolve; `warnings`
/// lists each record excluded along the way. An empty warning list means the
/// result is exact, not degraded.
#[derive(Debug, Clone)]
pub struct Report<T> {
    pub rows: T,
    pub warnings: Vec<IntegrityIssue>,
}

impl<T> Report<T> {
    pub fn is_degraded(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// The engine behind the three report endpoints
pub struct ReportEngine<S> {
    store: S,
    config: EngineConfig,
}

impl<S: SnapshotStore> ReportEngine<S> {
    pub fn new(store: S, config: EngineConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Both grouped views over one fresh snapshot. The richer shape behind
    /// the wire rows; the CLI tables render from it directly.
    pub fn emissions_rollup(&self) -> Result<Report<EmissionsRollup>> {
        let snapshot = self.store.snapshot()?;
        let extraction = extract::extract_line_records(&snapshot, &self.config);
        let rollup = aggregate::rollup(&extraction.records, &snapshot.items);
        Ok(Report {
            rows: rollup,
            warnings: extraction.issues,
        })
    }

    /// Per-item totals, sorted by item name ascending
    pub fn emissions_by_item(&self) -> Result<Report<Vec<EmissionsByItemRow>>> {
        let report = self.emissions_rollup()?;
        let rows = report
            .rows
            .items_sorted_by_name()
            .into_iter()
            .map(|item| EmissionsByItemRow {
                item_id: item.item_id,
                item_name: item.item_name.clone(),
                sku: item.sku.clone(),
                co2_per_unit: item.co2_per_unit,
                total_co2_from_orders: item.total_co2_from_orders,
            })
            .collect();
        Ok(Report {
            rows,
            warnings: report.warnings,
        })
    }

    /// Per-supplier totals, sorted by supplier name ascending
    pub fn emissions_by_supplier(&self) -> Result<Report<Vec<EmissionsBySupplierRow>>> {
        let report = self.emissions_rollup()?;
        let rows = report
            .rows
            .suppliers_sorted_by_name()
            .into_iter()
            .map(|supplier| EmissionsBySupplierRow {
                supplier_id: supplier.supplier_id,
                supplier_name: supplier.supplier_name.clone(),
                total_co2: supplier.total_co2,
                order_count: supplier.order_count,
            })
            .collect();
        Ok(Report {
            rows,
            warnings: report.warnings,
        })
    }

    /// Ranked reduction recommendations for the highest-emission items
    pub fn ai_recommendations(&self) -> Result<Report<RecommendationsPayload>> {
        let report = self.emissions_rollup()?;
        let recommendations = recommend::build_recommendations(&report.rows.by_item, &self.config);
        Ok(Report {
            rows: RecommendationsPayload { recommendations },
            warnings: report.warnings,
        })
    }
}
