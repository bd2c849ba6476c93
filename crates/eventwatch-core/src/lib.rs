//! eventwatch core - identity-stable change detection for event listings
//!
//! This crate is the pure kernel of eventwatch:
//! - Segmenter and date carrier for line-oriented listing text
//! - Ordered line-shape extraction into [`Event`] records
//! - Exact-content ids and drift-tolerant stable keys
//! - [`Snapshot`] state with a capped change log and time-bounded removal archive
//! - The diff engine classifying events as new, removed or changed
//!
//! Nothing here performs I/O; fetching and persistence live in the store and
//! engine crates.

pub mod diff;
pub mod errors;
pub mod extract;
pub mod identity;
pub mod logging_facility;
pub mod model;
pub mod snapshot;

pub use eventwatch_core_types::{schema, RunId};

// Re-export commonly used types
pub use diff::{compute_diff, DiffOutcome, DiffResult};
pub use errors::{ExError, ExErrorKind, Result, WatchError};
pub use extract::extract_events;
pub use model::{ChangeType, Event, EventChange, Scope};
pub use snapshot::{RemovedEntry, RetentionPolicy, Snapshot};
