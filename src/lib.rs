// Export modules for library usage
pub mod aggregate;
pub mod cli;
pub mod config;
pub mod core;
pub mod extract;
pub mod recommend;
pub mod report;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use crate::aggregate::{rollup, EmissionsRollup, ItemEmissions, SupplierEmissions};
pub use crate::config::{Config, EngineConfig, ServerConfig};
pub use crate::core::errors::{EngineError, Result};
pub use crate::core::types::{
    Item, LineItem, OrderStatus, PurchaseOrder, Snapshot, Supplier,
};
pub use crate::extract::{extract_line_records, Extraction, IntegrityIssue, LineRecord};
pub use crate::recommend::{build_recommendations, Recommendation};
pub use crate::report::{
    EmissionsByItemRow, EmissionsBySupplierRow, RecommendationsPayload, Report, ReportEngine,
};
pub use crate::store::{InMemoryStore, JsonSnapshotStore, SnapshotStore};
