//! In-memory snapshot store

use eventwatch_core::errors::{ExError, ExErrorKind};
use eventwatch_core::{Scope, Snapshot};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::Result;
use crate::SnapshotStore;

/// Keeps snapshots in a map keyed by scope; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    snapshots: Mutex<HashMap<Scope, Snapshot>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store as if a previous run had saved `snapshot`.
    pub fn with_snapshot(self, scope: Scope, snapshot: Snapshot) -> Self {
        if let Ok(mut map) = self.snapshots.lock() {
            map.insert(scope, snapshot);
        }
        self
    }

    /// Number of scopes holding a snapshot
    pub fn len(&self) -> usize {
        self.snapshots.lock().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(op: &str) -> ExError {
    ExError::new(ExErrorKind::Internal)
        .with_op(op)
        .with_message("Snapshot map lock poisoned")
}

impl SnapshotStore for MemorySnapshotStore {
    fn load(&self, scope: &Scope) -> Result<Option<Snapshot>> {
        let map = self.snapshots.lock().map_err(|_| poisoned("load_snapshot"))?;
        Ok(map.get(scope).cloned())
    }

    fn save(&self, snapshot: &Snapshot, scope: &Scope) -> Result<()> {
        let mut map = self.snapshots.lock().map_err(|_| poisoned("save_snapshot"))?;
        map.insert(scope.clone(), snapshot.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_scopes_are_isolated() {
        let store = MemorySnapshotStore::new();
        let nv = Scope::State("NV".to_string());
        store.save(&Snapshot::from_events(vec![], Utc::now()), &nv).unwrap();

        assert!(store.load(&nv).unwrap().is_some());
        assert!(store.load(&Scope::All).unwrap().is_none());
        assert_eq!(store.len(), 1);
    }
}
