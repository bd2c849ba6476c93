//! Per-run snapshot state.
//!
//! A [`Snapshot`] is built fresh each run from the current extraction,
//! finalized by the diff engine (change log appended and capped, removed
//! archive pruned and extended) and then handed to the store for
//! persistence.

pub mod model;
pub mod retention;

pub use model::{RemovedEntry, Snapshot, SNAPSHOT_SCHEMA_VERSION};
pub use retention::RetentionPolicy;
