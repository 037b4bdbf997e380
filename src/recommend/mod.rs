//! Recommendation engine
//!
//! Ranks the by-item view by historical emissions and derives a bounded list
//! of actionable suggestions. Pure function of the aggregate plus
//! configuration; identical input always produces identical output.

pub mod rules;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::aggregate::ItemEmissions;
use crate::config::EngineConfig;
use crate::core::types::ItemId;

/// One reduction recommendation for a high-emission item
#[derive(Debug, Clone, Serialize)]
pub struct Recommendation {
    pub high_emission_item: String,
    pub total_co2: f64,
    pub suggestions: Vec<String>,
    pub potential_savings: f64,
}

/// Rank items descending by historical emissions and build recommendations
/// for the top `top_k` candidates.
///
/// Zero-emission items generate no recommendation. Ties rank by item id
/// ascending. `potential_savings` applies the configured fraction to the
/// candidate's total; it is an estimate, not a measurement.
pub fn build_recommendations(
    by_item: &BTreeMap<ItemId, ItemEmissions>,
    config: &EngineConfig,
) -> Vec<Recommendation> {
    let mut candidates: Vec<&ItemEmissions> = by_item
        .values()
        .filter(|item| item.total_co2_from_orders > 0.0)
        .collect();

    candidates.sort_by(|a, b| {
        b.total_co2_from_orders
            .partial_cmp(&a.total_co2_from_orders)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.item_id.cmp(&b.item_id))
    });
    candidates.truncate(config.top_k);

    candidates
        .into_iter()
        .map(|item| Recommendation {
            high_emission_item: item.item_name.clone(),
            total_co2: item.total_co2_from_orders,
            suggestions: rules::suggestions_for(item),
            potential_savings: config.savings_fraction * item.total_co2_from_orders,
        })
        .collect()
}
