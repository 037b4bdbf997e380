//! Read boundary to the external order/item/supplier store
//!
//! Persistence itself is an external collaborator; the engine only needs one
//! consistent snapshot per query and performs no writes.

mod json;
mod memory;

pub use json::JsonSnapshotStore;
pub use memory::InMemoryStore;

use std::sync::Arc;

use crate::core::types::Snapshot;
use crate::core::Result;

/// Source of snapshots for the query facade.
///
/// A failing read maps to `EngineError::StoreUnavailable`: fatal to the
/// current query, retryable by the caller, never a partial result.
pub trait SnapshotStore: Send + Sync {
    fn snapshot(&self) -> Result<Snapshot>;
}

impl<S: SnapshotStore + ?Sized> SnapshotStore for Arc<S> {
    fn snapshot(&self) -> Result<Snapshot> {
        (**self).snapshot()
    }
}
