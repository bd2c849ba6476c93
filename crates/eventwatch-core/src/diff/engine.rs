//! Diff computation.

use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};

use crate::diff::model::{DiffOutcome, DiffResult};
use crate::model::{ChangeType, Event, EventChange};
use crate::snapshot::{RetentionPolicy, Snapshot};

/// Classify the current run against the previous snapshot and build the
/// next snapshot.
///
/// `current` must be in document order and deduplicated by id, as returned
/// by [`extract_events`](crate::extract::extract_events). A missing
/// `previous` means first run: every event is new.
///
/// Steps:
/// 1. Index the current run by stable key (first event per key wins).
/// 2. Each previous id absent from the current run either matches a current
///    event by stable key (one field change, first differing field of date,
///    title, city) or is removed and archived.
/// 3. Each current id absent from the previous snapshot whose stable key is
///    also unknown there is new.
/// 4. Ids present on both sides are carried forward silently, keeping their
///    `first_seen`.
pub fn compute_diff(
    previous: Option<&Snapshot>,
    current: Vec<Event>,
    now: DateTime<Utc>,
    policy: &RetentionPolicy,
) -> DiffOutcome {
    let mut current_index: HashMap<&str, usize> = HashMap::new();
    for (idx, event) in current.iter().enumerate() {
        current_index.entry(event.stable_key.as_str()).or_insert(idx);
    }
    let current_ids: HashSet<&str> = current.iter().map(|e| e.id.as_str()).collect();

    let mut result = DiffResult::default();
    // current id -> first_seen inherited from a stable-key partner
    let mut inherited_first_seen: HashMap<String, DateTime<Utc>> = HashMap::new();
    let mut archive = Snapshot::from_events(Vec::new(), now);

    if let Some(prev) = previous {
        archive.removed_events = prev.removed_events.clone();
        let purged = archive.prune_removed(now, policy);
        if purged > 0 {
            tracing::debug!(purged, "Purged expired removed events");
        }

        for (id, old) in &prev.events {
            if current_ids.contains(id.as_str()) {
                continue;
            }
            match current_index.get(old.stable_key.as_str()) {
                Some(&idx) => {
                    let partner = &current[idx];
                    result.changes.push(field_change(old, partner, now));
                    inherited_first_seen
                        .entry(partner.id.clone())
                        .or_insert(old.first_seen);
                }
                None => {
                    result.changes.push(EventChange {
                        event_id: old.id.clone(),
                        change_type: ChangeType::Removed,
                        old_value: old.raw.clone(),
                        new_value: String::new(),
                        detected_at: now,
                    });
                    result.removed_events.push(old.clone());
                    archive.record_removed(old.clone(), now);
                }
            }
        }
    }

    for event in &current {
        let known = previous.is_some_and(|prev| {
            prev.contains_id(&event.id) || prev.id_for_stable_key(&event.stable_key).is_some()
        });
        if known {
            continue;
        }
        result.changes.push(EventChange {
            event_id: event.id.clone(),
            change_type: ChangeType::New,
            old_value: String::new(),
            new_value: event.raw.clone(),
            detected_at: now,
        });
        result.new_events.push(event.clone());
    }

    let carried: Vec<Event> = current
        .into_iter()
        .map(|mut event| {
            let earlier = previous
                .and_then(|prev| prev.get(&event.id))
                .map(|e| e.first_seen)
                .or_else(|| inherited_first_seen.get(&event.id).copied());
            if let Some(first_seen) = earlier {
                event.first_seen = first_seen;
            }
            event
        })
        .collect();

    let mut snapshot = Snapshot::from_events(carried, now);
    if let Some(prev) = previous {
        snapshot.change_log = prev.change_log.clone();
    }
    snapshot.append_changes(result.field_changes().cloned(), policy.change_log_cap);
    snapshot.removed_events = archive.removed_events;
    // live again: no longer removed
    let live: Vec<String> = snapshot
        .removed_events
        .keys()
        .filter(|id| snapshot.events.contains_key(*id))
        .cloned()
        .collect();
    for id in live {
        snapshot.removed_events.remove(&id);
    }

    tracing::info!(
        event_count = snapshot.len(),
        new_count = result.new_events.len(),
        removed_count = result.removed_events.len(),
        changed_count = result.field_changes().count(),
        first_run = previous.is_none(),
        "Computed diff"
    );

    DiffOutcome { result, snapshot }
}

/// One change for a matched pair: the first differing field wins.
fn field_change(old: &Event, new: &Event, now: DateTime<Utc>) -> EventChange {
    let (change_type, old_value, new_value) = if old.date_text != new.date_text {
        (
            ChangeType::DateChanged,
            old.date_text.clone(),
            new.date_text.clone(),
        )
    } else if old.title != new.title {
        (ChangeType::TitleChanged, old.title.clone(), new.title.clone())
    } else if old.city != new.city {
        (
            ChangeType::CityChanged,
            old.city_or_empty().to_string(),
            new.city_or_empty().to_string(),
        )
    } else {
        (ChangeType::Unknown, old.raw.clone(), new.raw.clone())
    };
    EventChange {
        event_id: new.id.clone(),
        change_type,
        old_value,
        new_value,
        detected_at: now,
    }
}
