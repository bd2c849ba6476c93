//! Diff output types.

use serde::{Deserialize, Serialize};

use crate::model::{ChangeType, Event, EventChange};
use crate::snapshot::Snapshot;

/// Classified differences of one run.
///
/// `changes` holds every classification in detection order: vanished ids
/// (removed or field-changed) first, then new events in document order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffResult {
    pub new_events: Vec<Event>,
    pub removed_events: Vec<Event>,
    pub changes: Vec<EventChange>,
}

impl DiffResult {
    /// Changes destined for the ChangeLog (everything except new/removed).
    pub fn field_changes(&self) -> impl Iterator<Item = &EventChange> {
        self.changes
            .iter()
            .filter(|c| c.change_type.is_field_change())
    }

    pub fn count(&self, change_type: ChangeType) -> usize {
        self.changes
            .iter()
            .filter(|c| c.change_type == change_type)
            .count()
    }

    /// True when nothing at all changed.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Result plus the finalized snapshot to persist.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffOutcome {
    pub result: DiffResult,
    pub snapshot: Snapshot,
}
