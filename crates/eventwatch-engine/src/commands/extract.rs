//! Extraction without diffing or persistence.

use chrono::{DateTime, Utc};
use eventwatch_core::extract::extract_events;
use eventwatch_core::logging_facility::elapsed_ms;
use eventwatch_core::{log_op_end, log_op_error, log_op_start, Event, Scope};
use std::time::Instant;

use crate::errors::Result;
use crate::source::PageSource;

/// Events parsed from one fetch, already filtered by scope.
#[derive(Debug, Clone)]
pub struct ExtractOutcome {
    pub url: String,
    pub events: Vec<Event>,
}

/// Fetch a page and extract its events for `scope`.
///
/// # Errors
///
/// Propagates the source's fetch error unchanged.
pub fn run_extract(source: &dyn PageSource, scope: &Scope, now: DateTime<Utc>) -> Result<ExtractOutcome> {
    let start = Instant::now();
    log_op_start!("run_extract", source = %source.location(), scope = %scope);

    let page = match source.fetch() {
        Ok(page) => page,
        Err(e) => {
            let e = e.with_scope(scope.to_string());
            log_op_error!("run_extract", e.clone(), duration_ms = elapsed_ms(start));
            return Err(e);
        }
    };

    let events = scoped_events(&page.text, &page.url, scope, now);

    log_op_end!(
        "run_extract",
        duration_ms = elapsed_ms(start),
        event_count = events.len()
    );
    Ok(ExtractOutcome {
        url: page.url,
        events,
    })
}

/// Extract and keep only the events `scope` tracks, preserving document order.
pub(crate) fn scoped_events(text: &str, url: &str, scope: &Scope, now: DateTime<Utc>) -> Vec<Event> {
    let mut events = extract_events(text, url, now);
    events.retain(|e| scope.matches(e));
    events
}
