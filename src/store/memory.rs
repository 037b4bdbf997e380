use crate::core::types::Snapshot;
use crate::core::Result;
use crate::store::SnapshotStore;

/// Fixture-backed store for tests and embedded callers
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    snapshot: Snapshot,
}

impl InMemoryStore {
    pub fn new(snapshot: Snapshot) -> Self {
        Self { snapshot }
    }
}

impl SnapshotStore for InMemoryStore {
    fn snapshot(&self) -> Result<Snapshot> {
        Ok(self.snapshot.clone())
    }
}
