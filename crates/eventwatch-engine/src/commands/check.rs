//! The check pipeline: fetch → extract → scope filter → load → diff → save.
//!
//! One call is one run. The previous snapshot is read once, never mutated,
//! and replaced wholesale by the diff engine's output unless `dry_run` is set.

use chrono::{DateTime, Utc};
use eventwatch_core::diff::compute_diff;
use eventwatch_core::errors::ExError;
use eventwatch_core::logging_facility::elapsed_ms;
use eventwatch_core::snapshot::RetentionPolicy;
use eventwatch_core::{
    log_op_end, log_op_error, log_op_start, Event, EventChange, RunId, Scope, Snapshot,
};
use eventwatch_store::SnapshotStore;
use std::time::Instant;

use crate::commands::extract::scoped_events;
use crate::errors::Result;
use crate::source::PageSource;

/// Per-run knobs.
#[derive(Debug, Clone)]
pub struct CheckOptions {
    /// Run timestamp; stamps FirstSeen, change detection and removals
    pub now: DateTime<Utc>,
    /// Compute everything but leave the stored snapshot untouched
    pub dry_run: bool,
    pub retention: RetentionPolicy,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            now: Utc::now(),
            dry_run: false,
            retention: RetentionPolicy::default(),
        }
    }
}

/// What one run found.
#[derive(Debug, Clone)]
pub struct CheckOutcome {
    pub run_id: RunId,
    pub scope: Scope,
    /// No snapshot existed before this run
    pub first_run: bool,
    pub new_events: Vec<Event>,
    pub removed_events: Vec<Event>,
    /// Date, title, city and unknown changes, in detection order
    pub field_changes: Vec<EventChange>,
    /// Live events after this run
    pub event_count: usize,
    /// Whether `snapshot` was persisted
    pub saved: bool,
    pub snapshot: Snapshot,
}

impl CheckOutcome {
    pub fn has_changes(&self) -> bool {
        !(self.new_events.is_empty() && self.removed_events.is_empty() && self.field_changes.is_empty())
    }
}

/// Run one check for `scope`.
///
/// # Errors
///
/// Fetch, load and save failures are returned with the run id and scope
/// attached. Nothing is saved when any step fails.
pub fn run_check(
    source: &dyn PageSource,
    store: &dyn SnapshotStore,
    scope: &Scope,
    options: &CheckOptions,
) -> Result<CheckOutcome> {
    let start = Instant::now();
    let run_id = RunId::new();
    log_op_start!(
        "run_check",
        run_id = %run_id,
        scope = %scope,
        source = %source.location(),
        dry_run = options.dry_run
    );

    match check_inner(source, store, scope, options, &run_id) {
        Ok(outcome) => {
            log_op_end!(
                "run_check",
                duration_ms = elapsed_ms(start),
                run_id = %run_id,
                event_count = outcome.event_count,
                new_count = outcome.new_events.len(),
                removed_count = outcome.removed_events.len(),
                changed_count = outcome.field_changes.len(),
                saved = outcome.saved
            );
            Ok(outcome)
        }
        Err(e) => {
            let e = stamp(e, &run_id, scope);
            log_op_error!(
                "run_check",
                e.clone(),
                duration_ms = elapsed_ms(start),
                run_id = %run_id
            );
            Err(e)
        }
    }
}

fn check_inner(
    source: &dyn PageSource,
    store: &dyn SnapshotStore,
    scope: &Scope,
    options: &CheckOptions,
    run_id: &RunId,
) -> Result<CheckOutcome> {
    let page = source.fetch()?;
    let events = scoped_events(&page.text, &page.url, scope, options.now);
    tracing::debug!(run_id = %run_id, event_count = events.len(), "Extracted scoped events");

    let previous = store.load(scope)?;
    let first_run = previous.is_none();
    let outcome = compute_diff(previous.as_ref(), events, options.now, &options.retention);

    let saved = if options.dry_run {
        tracing::info!(run_id = %run_id, "Dry run; snapshot not saved");
        false
    } else {
        store.save(&outcome.snapshot, scope)?;
        true
    };

    let field_changes: Vec<EventChange> = outcome.result.field_changes().cloned().collect();
    Ok(CheckOutcome {
        run_id: run_id.clone(),
        scope: scope.clone(),
        first_run,
        new_events: outcome.result.new_events,
        removed_events: outcome.result.removed_events,
        field_changes,
        event_count: outcome.snapshot.len(),
        saved,
        snapshot: outcome.snapshot,
    })
}

fn stamp(err: ExError, run_id: &RunId, scope: &Scope) -> ExError {
    let err = err.with_run_id(run_id.clone());
    if err.scope().is_some() {
        err
    } else {
        err.with_scope(scope.to_string())
    }
}
