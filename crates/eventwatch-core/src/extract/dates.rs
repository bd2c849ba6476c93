//! Date-shaped text recognition.
//!
//! The same three pattern classes serve two purposes: recovering a date that
//! is embedded in a title when no other date context is active, and erasing
//! such dates when computing a stable key.

use regex::Regex;
use std::sync::LazyLock;

const MONTH_NAMES: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|june?|july?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

/// `4.4.26`, `12.05.2026`
static DOTTED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}\.\d{1,2}\.\d{2,4}\b").expect("Invalid dotted date regex"));

/// `March 5`, `Mar. 5th`, `Mar 5, 2026`
static MONTH_DAY_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{MONTH_NAMES})\.?\s+\d{{1,2}}(?:st|nd|rd|th)?\b(?:,?\s+\d{{4}}\b)?"
    ))
    .expect("Invalid month-day regex")
});

/// `4/4/26`, `04/04/2026`
static SLASHED_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\d{1,2}/\d{1,2}/\d{2,4}\b").expect("Invalid slashed date regex"));

/// A line holding nothing but a month name
static MONTH_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^(?:{MONTH_NAMES})\.?$")).expect("Invalid month token regex")
});

static DAY_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,2}$").expect("Invalid day token regex"));

static YEAR_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^20\d{2}$").expect("Invalid year token regex"));

/// Pattern classes in the order `extract_date` tries them.
fn date_patterns() -> [&'static Regex; 3] {
    [&DOTTED_DATE, &MONTH_DAY_DATE, &SLASHED_DATE]
}

/// Best-effort date recovery from free text.
///
/// Returns the first match of the first pattern class that matches anywhere
/// in `text`, or an empty string.
pub fn extract_date(text: &str) -> String {
    date_patterns()
        .into_iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Remove every date-shaped substring and collapse the leftover whitespace.
pub fn strip_date_tokens(text: &str) -> String {
    let mut out = text.to_string();
    for re in date_patterns() {
        out = re.replace_all(&out, " ").into_owned();
    }
    collapse_whitespace(&out)
}

pub(crate) fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn is_month_token(line: &str) -> bool {
    MONTH_TOKEN.is_match(line)
}

pub(crate) fn is_day_token(line: &str) -> bool {
    DAY_TOKEN.is_match(line)
}

pub(crate) fn is_year_token(line: &str) -> bool {
    YEAR_TOKEN.is_match(line)
}
