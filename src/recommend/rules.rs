//! Suggestion rule table
//!
//! A tagged-variant lookup keyed on the parsed item category and the
//! magnitude of the current unit factor. Same item attributes, same
//! suggestions; the heuristic stays auditable.

use crate::aggregate::ItemEmissions;

/// Recognized catalog categories, parsed from the free-form category field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemCategory {
    Electronics,
    RawMaterials,
    Packaging,
    Chemicals,
    Office,
    Logistics,
    Other,
}

impl ItemCategory {
    /// Case-insensitive keyword match over the catalog's category string
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_ascii_lowercase();
        if lowered.contains("electronic") || lowered.contains("equipment") {
            ItemCategory::Electronics
        } else if lowered.contains("raw")
            || lowered.contains("material")
            || lowered.contains("metal")
        {
            ItemCategory::RawMaterials
        } else if lowered.contains("packag") {
            ItemCategory::Packaging
        } else if lowered.contains("chemical") {
            ItemCategory::Chemicals
        } else if lowered.contains("office") || lowered.contains("stationery") {
            ItemCategory::Office
        } else if lowered.contains("logistic")
            || lowered.contains("transport")
            || lowered.contains("freight")
        {
            ItemCategory::Logistics
        } else {
            ItemCategory::Other
        }
    }
}

/// Unit-factor magnitude bands, in kg CO2e per unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EmissionBand {
    Low,
    Moderate,
    High,
}

pub const MODERATE_FACTOR_THRESHOLD: f64 = 2.0;
pub const HIGH_FACTOR_THRESHOLD: f64 = 10.0;

impl EmissionBand {
    pub fn classify(co2_per_unit: f64) -> Self {
        if co2_per_unit >= HIGH_FACTOR_THRESHOLD {
            EmissionBand::High
        } else if co2_per_unit >= MODERATE_FACTOR_THRESHOLD {
            EmissionBand::Moderate
        } else {
            EmissionBand::Low
        }
    }
}

/// Three suggestions per candidate: a category lever, a unit-factor lever,
/// and the consolidation lever shared by every category
pub fn suggestions_for(item: &ItemEmissions) -> Vec<String> {
    let category = ItemCategory::parse(&item.category);
    let band = EmissionBand::classify(item.co2_per_unit);

    let category_suggestion = match category {
        ItemCategory::Electronics => "Prefer refurbished or energy-certified equipment",
        ItemCategory::RawMaterials => "Evaluate a recycled-material alternative",
        ItemCategory::Packaging => "Switch to recyclable or reduced packaging",
        ItemCategory::Chemicals => "Source from suppliers with certified low-carbon processes",
        ItemCategory::Office => "Consolidate supply purchases into fewer bulk orders",
        ItemCategory::Logistics => "Shift shipments to lower-emission transport modes",
        ItemCategory::Other => "Source from a lower-emission supplier",
    };

    let band_suggestion = match band {
        EmissionBand::High => format!(
            "Review the {:.1} kg CO2e unit factor of {} with your supplier",
            item.co2_per_unit, item.item_name
        ),
        EmissionBand::Moderate => format!(
            "Compare unit factors for {} across qualified suppliers",
            item.item_name
        ),
        EmissionBand::Low => format!(
            "Reduce order volume of {} where stock levels allow",
            item.item_name
        ),
    };

    vec![
        category_suggestion.to_string(),
        band_suggestion,
        "Consolidate orders to reduce shipment frequency".to_string(),
    ]
}
