use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::model::{Event, EventChange};
use crate::snapshot::retention::RetentionPolicy;

/// Current on-disk layout version.
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SNAPSHOT_SCHEMA_VERSION
}

/// An event that disappeared from the source, kept for a bounded time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovedEntry {
    pub event: Event,
    pub removed_at: DateTime<Utc>,
}

/// Persisted state of one completed run.
///
/// `BTreeMap`s keep serialization deterministic. `stable_index` is derived
/// from `events` and is only ever rebuilt wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_schema_version")]
    pub snapshot_schema_version: u32,
    pub events: BTreeMap<String, Event>,
    #[serde(default)]
    pub stable_index: BTreeMap<String, String>,
    /// Oldest first
    #[serde(default)]
    pub change_log: Vec<EventChange>,
    #[serde(default)]
    pub removed_events: BTreeMap<String, RemovedEntry>,
    pub captured_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build a snapshot from an ordered, id-deduplicated event list.
    ///
    /// When two events share a stable key the earlier one owns the index
    /// entry.
    pub fn from_events(events: Vec<Event>, captured_at: DateTime<Utc>) -> Self {
        let stable_index = build_stable_index(&events);
        let mut by_id = BTreeMap::new();
        for event in events {
            by_id.entry(event.id.clone()).or_insert(event);
        }
        Self {
            snapshot_schema_version: SNAPSHOT_SCHEMA_VERSION,
            events: by_id,
            stable_index,
            change_log: Vec::new(),
            removed_events: BTreeMap::new(),
            captured_at,
        }
    }

    /// Recompute `stable_index` from `events`.
    ///
    /// Iteration is in id order here since document order is not persisted;
    /// used after loading a file whose index is missing or stale.
    pub fn rebuild_stable_index(&mut self) {
        let ordered: Vec<Event> = self.events.values().cloned().collect();
        self.stable_index = build_stable_index(&ordered);
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.get(id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.events.contains_key(id)
    }

    pub fn id_for_stable_key(&self, key: &str) -> Option<&str> {
        self.stable_index.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append changes and evict the oldest entries beyond the cap.
    pub fn append_changes(&mut self, changes: impl IntoIterator<Item = EventChange>, cap: usize) {
        self.change_log.extend(changes);
        if self.change_log.len() > cap {
            let overflow = self.change_log.len() - cap;
            self.change_log.drain(..overflow);
        }
    }

    /// Drop archived removals older than the retention window.
    ///
    /// Returns how many entries were purged.
    pub fn prune_removed(&mut self, now: DateTime<Utc>, policy: &RetentionPolicy) -> usize {
        let cutoff = now - policy.removed_retention;
        let before = self.removed_events.len();
        self.removed_events.retain(|_, entry| entry.removed_at >= cutoff);
        before - self.removed_events.len()
    }

    pub fn record_removed(&mut self, event: Event, removed_at: DateTime<Utc>) {
        self.removed_events
            .insert(event.id.clone(), RemovedEntry { event, removed_at });
    }

    /// Newest-first field changes, excluding any `new`/`removed` entries.
    pub fn change_log_view(&self, limit: Option<usize>) -> Vec<&EventChange> {
        self.change_log
            .iter()
            .rev()
            .filter(|c| c.change_type.is_field_change())
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }
}

fn build_stable_index(events: &[Event]) -> BTreeMap<String, String> {
    let mut index = BTreeMap::new();
    for event in events {
        if let Some(owner) = index.get(&event.stable_key) {
            if owner != &event.id {
                tracing::debug!(
                    stable_key = %event.stable_key,
                    kept = %owner,
                    ignored = %event.id,
                    "Stable key collision within one run; first event kept"
                );
            }
            continue;
        }
        index.insert(event.stable_key.clone(), event.id.clone());
    }
    index
}
