mod common;

use pretty_assertions::assert_eq;

use carbonmap::config::EngineConfig;
use carbonmap::core::types::OrderStatus;
use carbonmap::core::EngineError;
use carbonmap::extract::{extract_line_records, IntegrityIssue};
use carbonmap::report::ReportEngine;
use carbonmap::store::InMemoryStore;
use carbonmap::Snapshot;

use common::{item, line, order, supplier};

fn snapshot_with_dangling_item() -> Snapshot {
    Snapshot {
        items: vec![item(1, "Steel Sheet", "Raw Materials", 2.0)],
        suppliers: vec![supplier(1, "Acme Metals")],
        orders: vec![order(
            1,
            1,
            OrderStatus::Submitted,
            // Item 42 was deleted from the catalog after this order was placed
            vec![line(1, 10, 4.0, 2.0), line(42, 3, 1.0, 5.0)],
        )],
    }
}

#[test]
fn dangling_item_reference_degrades_but_does_not_abort() {
    let engine = ReportEngine::new(
        InMemoryStore::new(snapshot_with_dangling_item()),
        EngineConfig::default(),
    );

    let report = engine.emissions_by_item().unwrap();
    assert!(report.is_degraded());
    assert_eq!(
        report.warnings,
        vec![IntegrityIssue::MissingItem {
            order_id: 1,
            item_id: 42
        }]
    );

    // The valid line still counts in full
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].total_co2_from_orders, 20.0);
}

#[test]
fn dangling_supplier_reference_excludes_the_order_from_both_views() {
    let snapshot = Snapshot {
        items: vec![item(1, "Steel Sheet", "Raw Materials", 2.0)],
        suppliers: vec![supplier(1, "Acme Metals")],
        orders: vec![
            order(1, 1, OrderStatus::Submitted, vec![line(1, 10, 4.0, 2.0)]),
            order(2, 99, OrderStatus::Submitted, vec![line(1, 5, 4.0, 2.0)]),
        ],
    };
    let engine = ReportEngine::new(InMemoryStore::new(snapshot), EngineConfig::default());

    let items = engine.emissions_by_item().unwrap();
    let suppliers = engine.emissions_by_supplier().unwrap();

    assert_eq!(items.rows[0].total_co2_from_orders, 20.0);
    assert_eq!(suppliers.rows.len(), 1);
    assert_eq!(suppliers.rows[0].order_count, 1);
    assert_eq!(
        suppliers.warnings,
        vec![IntegrityIssue::MissingSupplier {
            order_id: 2,
            supplier_id: 99
        }]
    );
}

#[test]
fn warnings_ride_alongside_every_report_operation() {
    let engine = ReportEngine::new(
        InMemoryStore::new(snapshot_with_dangling_item()),
        EngineConfig::default(),
    );

    assert!(engine.emissions_by_item().unwrap().is_degraded());
    assert!(engine.emissions_by_supplier().unwrap().is_degraded());
    assert!(engine.ai_recommendations().unwrap().is_degraded());
}

#[test]
fn strict_extraction_raises_referential_integrity() {
    let snapshot = snapshot_with_dangling_item();
    let extraction = extract_line_records(&snapshot, &EngineConfig::default());

    match extraction.into_strict() {
        Err(EngineError::ReferentialIntegrity { issues }) => {
            assert_eq!(issues.len(), 1);
        }
        other => panic!("expected referential integrity error, got {other:?}"),
    }
}

#[test]
fn store_failure_is_fatal_and_retryable() {
    struct DownStore;

    impl carbonmap::SnapshotStore for DownStore {
        fn snapshot(&self) -> carbonmap::Result<Snapshot> {
            Err(EngineError::store_unavailable("connection refused", None))
        }
    }

    let engine = ReportEngine::new(DownStore, EngineConfig::default());
    let err = engine.emissions_by_item().unwrap_err();
    assert!(matches!(err, EngineError::StoreUnavailable { .. }));
}
