//! Run-to-run diff engine.
//!
//! Compares the previous run's [`Snapshot`](crate::snapshot::Snapshot) with
//! the freshly extracted event list and produces both the classified result
//! and the next snapshot.
//!
//! ## Entry point
//!
//! ```ignore
//! use eventwatch_core::diff::compute_diff;
//!
//! let outcome = compute_diff(previous.as_ref(), events, now, &RetentionPolicy::default());
//! notify(&outcome.result.new_events, &outcome.result.removed_events);
//! store.save(&outcome.snapshot, &scope)?;
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: no I/O, never fails, never mutates the previous snapshot.
//! - **Determinism**: identical inputs give identical results.
//! - **Identity continuity**: an event whose id changed but whose stable key
//!   survived is reported as one field change, not as removed + new.

pub mod engine;
pub mod model;

pub use engine::compute_diff;
pub use model::{DiffOutcome, DiffResult};
