//! eventwatch store - snapshot persistence
//!
//! Provides:
//! - The [`SnapshotStore`] seam the run pipeline loads from and saves to
//! - A filesystem store writing one pretty-printed JSON file per scope,
//!   replaced atomically via temp→rename
//! - An in-memory store for tests and dry runs

pub mod atomic;
pub mod errors;
pub mod fs_store;
pub mod memory;

use eventwatch_core::{Scope, Snapshot};

// Re-export key types
pub use errors::Result;
pub use fs_store::FsSnapshotStore;
pub use memory::MemorySnapshotStore;

/// Where snapshots live between runs.
///
/// One snapshot per scope. Implementations own naming, location and
/// overwrite discipline; callers only ever see whole `Snapshot` values.
pub trait SnapshotStore {
    /// Load the snapshot for `scope`, or `None` when no run has completed yet.
    ///
    /// # Errors
    ///
    /// `Io` when the backing storage cannot be read, `Serialization` when
    /// its content cannot be decoded.
    fn load(&self, scope: &Scope) -> Result<Option<Snapshot>>;

    /// Replace the snapshot for `scope`.
    ///
    /// # Errors
    ///
    /// `Persistence` when the snapshot could not be written; the previous
    /// snapshot is then still intact.
    fn save(&self, snapshot: &Snapshot, scope: &Scope) -> Result<()>;
}
