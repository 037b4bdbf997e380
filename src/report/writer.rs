//! Report rendering for the CLI
//!
//! JSON output emits exactly the wire shapes the HTTP facade serves;
//! terminal output renders the richer rollup views as tables, with
//! integrity warnings printed inline instead of hidden.

use std::io::Write;

use clap::ValueEnum;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use serde::Serialize;

use crate::aggregate::EmissionsRollup;
use crate::core::Result;
use crate::extract::IntegrityIssue;
use crate::report::{RecommendationsPayload, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// Per-item emissions totals
    Item,
    /// Per-supplier emissions totals
    Supplier,
    /// Ranked reduction recommendations
    Recommendations,
}

/// Serialize a wire shape as pretty JSON
pub fn write_json<T: Serialize>(out: &mut dyn Write, rows: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rows)?;
    writeln!(out)?;
    Ok(())
}

fn write_warnings(out: &mut dyn Write, warnings: &[IntegrityIssue]) -> Result<()> {
    if warnings.is_empty() {
        return Ok(());
    }
    writeln!(
        out,
        "\n{} partial report: {} record(s) excluded",
        "warning:".yellow().bold(),
        warnings.len()
    )?;
    for issue in warnings {
        writeln!(out, "  - {issue}")?;
    }
    Ok(())
}

/// Render the by-item view as a table
pub fn write_item_table(out: &mut dyn Write, report: &Report<EmissionsRollup>) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Item",
        "SKU",
        "Category",
        "Unit CO2e",
        "Orders",
        "Total Cost",
        "Total CO2e",
    ]);
    for item in report.rows.items_sorted_by_name() {
        table.add_row(vec![
            item.item_name.clone(),
            item.sku.clone(),
            item.category.clone(),
            format!("{:.2}", item.co2_per_unit),
            item.order_count.to_string(),
            format!("{:.2}", item.total_cost),
            format!("{:.2}", item.total_co2_from_orders),
        ]);
    }
    writeln!(out, "{table}")?;
    write_warnings(out, &report.warnings)
}

/// Render the by-supplier view as a table
pub fn write_supplier_table(out: &mut dyn Write, report: &Report<EmissionsRollup>) -> Result<()> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Supplier",
        "Orders",
        "Total Cost",
        "Total CO2e",
    ]);
    for supplier in report.rows.suppliers_sorted_by_name() {
        table.add_row(vec![
            supplier.supplier_name.clone(),
            supplier.order_count.to_string(),
            format!("{:.2}", supplier.total_cost),
            format!("{:.2}", supplier.total_co2),
        ]);
    }
    writeln!(out, "{table}")?;
    writeln!(
        out,
        "grand total: {:.2} kg CO2e",
        report.rows.grand_total_co2()
    )?;
    write_warnings(out, &report.warnings)
}

/// Render the recommendation list as a table
pub fn write_recommendations_table(
    out: &mut dyn Write,
    report: &Report<RecommendationsPayload>,
) -> Result<()> {
    if report.rows.recommendations.is_empty() {
        writeln!(out, "no emissions recorded yet; nothing to recommend")?;
        return write_warnings(out, &report.warnings);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "#",
        "Item",
        "Total CO2e",
        "Potential Savings",
        "Suggestions",
    ]);
    for (rank, rec) in report.rows.recommendations.iter().enumerate() {
        table.add_row(vec![
            (rank + 1).to_string(),
            rec.high_emission_item.clone(),
            format!("{:.2}", rec.total_co2),
            format!("{:.2}", rec.potential_savings),
            rec.suggestions.join("\n"),
        ]);
    }
    writeln!(out, "{table}")?;
    write_warnings(out, &report.warnings)
}
