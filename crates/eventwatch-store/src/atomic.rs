//! Atomic write primitives
//!
//! Uses temp→rename so a reader never observes a partially written file

use crate::errors::{io_error, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

/// Atomically replace `target_path` with `content`
///
/// Parent directories are created as needed. The temp file is the target's
/// name with a `json.tmp` extension: it sits next to the target so the
/// rename stays on one filesystem, and it never matches the
/// `snapshot-*.json` names the store reads. A temp file left behind by an
/// interrupted run is simply overwritten by the next save.
///
/// # Errors
///
/// `Io` naming the step that failed.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_data_dir", e))?;
    }

    let temp_path = target_path.with_extension("json.tmp");
    write_synced(&temp_path, content).map_err(|e| io_error("write_snapshot_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_snapshot_temp", e));
    }

    Ok(())
}

/// Contents must reach disk before the rename publishes them.
fn write_synced(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
