//! Filesystem snapshot store
//!
//! One `snapshot-<scope>.json` file per scope under the data directory,
//! pretty-printed so it diffs and inspects well by hand.

use eventwatch_core::snapshot::SNAPSHOT_SCHEMA_VERSION;
use eventwatch_core::{Scope, Snapshot};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::atomic::atomic_write;
use crate::errors::{corrupt_snapshot, encode_failed, io_error, persistence, unsupported_version, Result};
use crate::SnapshotStore;

/// Snapshot store rooted at a data directory
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    root: PathBuf,
}

impl FsSnapshotStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the snapshot file for `scope`
    pub fn path_for(&self, scope: &Scope) -> PathBuf {
        self.root.join(format!("snapshot-{}.json", scope.file_stem()))
    }
}

impl SnapshotStore for FsSnapshotStore {
    fn load(&self, scope: &Scope) -> Result<Option<Snapshot>> {
        let path = self.path_for(scope);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No snapshot yet; first run");
                return Ok(None);
            }
            Err(e) => return Err(io_error("read_snapshot", e)),
        };

        let mut snapshot: Snapshot =
            serde_json::from_slice(&bytes).map_err(|e| corrupt_snapshot(&path, e))?;

        if snapshot.snapshot_schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(unsupported_version(
                &path,
                snapshot.snapshot_schema_version,
                SNAPSHOT_SCHEMA_VERSION,
            ));
        }
        if snapshot.stable_index.is_empty() && !snapshot.is_empty() {
            snapshot.rebuild_stable_index();
        }

        tracing::debug!(
            path = %path.display(),
            event_count = snapshot.len(),
            change_log_len = snapshot.change_log.len(),
            removed_count = snapshot.removed_events.len(),
            "Loaded snapshot"
        );
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &Snapshot, scope: &Scope) -> Result<()> {
        let path = self.path_for(scope);
        let json = serde_json::to_vec_pretty(snapshot).map_err(encode_failed)?;
        atomic_write(&path, &json).map_err(|e| persistence(&scope.to_string(), e))?;

        tracing::debug!(
            path = %path.display(),
            event_count = snapshot.len(),
            bytes = json.len(),
            "Saved snapshot"
        );
        Ok(())
    }
}
