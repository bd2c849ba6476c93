//! Event extraction from decoded listing text.
//!
//! Processing is strictly line oriented: each trimmed, non-empty line first
//! goes through the [`DateCarrier`] (month / day / year tokens), then through
//! the ordered [`patterns::LINE_RULES`]. Lines that match nothing are
//! discarded silently. Parsing never fails.

pub mod dates;
pub mod patterns;
pub mod segmenter;

use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::model::Event;
use patterns::{classify_line, LineShape};
pub use dates::{extract_date, strip_date_tokens};
pub use segmenter::{CarrierState, DateCarrier};

/// Extract events from page text in document order, deduplicated by id
/// (first occurrence wins).
///
/// Every event is stamped with `first_seen = now`; the diff engine replaces
/// that with the earlier timestamp for events it has seen before.
pub fn extract_events(text: &str, source_url: &str, now: DateTime<Utc>) -> Vec<Event> {
    let mut carrier = DateCarrier::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut events = Vec::new();
    let mut rejected = 0usize;
    let mut duplicates = 0usize;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let (next, consumed) = carrier.observe(line);
        carrier = next;
        if consumed {
            continue;
        }

        let Some((rule, shape)) = classify_line(line) else {
            continue;
        };

        let event = match shape {
            LineShape::DateHeader { date } => {
                carrier = carrier.with_active(date);
                continue;
            }
            LineShape::Rejected { rule, title } => {
                rejected += 1;
                tracing::debug!(rule, title = %title, "Rejected event line by title guard");
                continue;
            }
            LineShape::DatedEvent {
                date,
                state,
                title,
                city,
                raw,
            } => {
                carrier = carrier.take_active().0;
                Event::new(state, title, city, date, raw, source_url, now)
            }
            LineShape::UndatedEvent {
                state,
                title,
                city,
                raw,
            } => {
                let (next, active) = carrier.take_active();
                carrier = next;
                let date = active.unwrap_or_else(|| extract_date(&title));
                Event::new(state, title, city, date, raw, source_url, now)
            }
        };

        if seen.insert(event.id.clone()) {
            events.push(event);
        } else {
            duplicates += 1;
            tracing::debug!(rule, event_id = %event.id, "Dropped duplicate event line");
        }
    }

    tracing::debug!(
        event_count = events.len(),
        rejected,
        duplicates,
        "Extracted events"
    );
    events
}
