use std::fs;
use std::path::PathBuf;

use crate::core::types::Snapshot;
use crate::core::{EngineError, Result};
use crate::store::SnapshotStore;

/// Store backed by a JSON snapshot file, re-read on every query so each
/// report reflects the file's current contents
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SnapshotStore for JsonSnapshotStore {
    fn snapshot(&self) -> Result<Snapshot> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            EngineError::store_unavailable(
                format!("failed to read snapshot {}", self.path.display()),
                Some(e),
            )
        })?;
        let snapshot: Snapshot = serde_json::from_str(&contents).map_err(|e| {
            EngineError::store_unavailable(
                format!("malformed snapshot {}: {e}", self.path.display()),
                None,
            )
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
