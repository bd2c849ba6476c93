use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::identity::{event_id, stable_key};

/// One advertised occurrence extracted from a listing line.
///
/// `id` is exact-content sensitive: any change to state, title or city
/// yields a new id. `stable_key` tolerates date drift inside the title and
/// is what lets a later run recognise the same event under a new id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub stable_key: String,
    /// Two-letter state code as written in the listing
    pub state: String,
    pub title: String,
    /// Free text; not guaranteed to be machine-parseable
    #[serde(default)]
    pub date_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// The literal source line (bracketed date prefix removed)
    pub raw: String,
    #[serde(default)]
    pub source_url: String,
    /// Set at first extraction and carried forward by the diff engine
    pub first_seen: DateTime<Utc>,
}

impl Event {
    /// Build an event and assign both identifiers.
    pub fn new(
        state: impl Into<String>,
        title: impl Into<String>,
        city: Option<String>,
        date_text: impl Into<String>,
        raw: impl Into<String>,
        source_url: impl Into<String>,
        first_seen: DateTime<Utc>,
    ) -> Self {
        let state = state.into();
        let title = title.into();
        let city = city.filter(|c| !c.trim().is_empty());
        let city_ref = city.as_deref().unwrap_or("");
        Self {
            id: event_id(&state, &title, city_ref),
            stable_key: stable_key(&state, &title, city_ref),
            state,
            title,
            date_text: date_text.into(),
            city,
            raw: raw.into(),
            source_url: source_url.into(),
            first_seen,
        }
    }

    /// City or the empty string, for field comparisons and display.
    pub fn city_or_empty(&self) -> &str {
        self.city.as_deref().unwrap_or("")
    }
}
